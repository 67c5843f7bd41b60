pub mod error;
pub mod export;
pub mod workbook;

pub use error::{Result, SheetError};
pub use export::{render_json, write_exports, xlsx_bytes, ExportTargets};
pub use workbook::{read_table, ReadOptions};
