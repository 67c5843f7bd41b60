use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to open workbook {path}: {message}")]
    OpenWorkbook { path: PathBuf, message: String },
    #[error("workbook has no worksheet: {0}")]
    NoWorksheet(PathBuf),
    #[error("sheet '{sheet}' not found in {path} (available: {available:?})")]
    MissingSheet {
        path: PathBuf,
        sheet: String,
        available: Vec<String>,
    },
    #[error("failed to read sheet '{sheet}' in {path}: {message}")]
    ReadSheet {
        path: PathBuf,
        sheet: String,
        message: String,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, SheetError>;
