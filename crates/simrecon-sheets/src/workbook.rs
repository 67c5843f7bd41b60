use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use simrecon_core::{Cell, RawTable};

use crate::error::{Result, SheetError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Sheet to read. `None` reads the first sheet of the workbook.
    pub sheet: Option<String>,
}

/// Read one worksheet into a [`RawTable`]. The first row is the header row.
///
/// An empty worksheet yields a table without headers, so every column
/// lookup on it fails later with a schema error.
pub fn read_table(path: &Path, options: &ReadOptions) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path).map_err(|err| SheetError::OpenWorkbook {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let available = workbook.sheet_names();
    let sheet = match &options.sheet {
        Some(name) => {
            if !available.iter().any(|candidate| candidate == name) {
                return Err(SheetError::MissingSheet {
                    path: path.to_path_buf(),
                    sheet: name.clone(),
                    available,
                });
            }
            name.clone()
        }
        None => available
            .first()
            .cloned()
            .ok_or_else(|| SheetError::NoWorksheet(path.to_path_buf()))?,
    };

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|err| SheetError::ReadSheet {
            path: path.to_path_buf(),
            sheet: sheet.clone(),
            message: err.to_string(),
        })?;

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(header_row) => header_row.iter().map(header_text).collect(),
        None => Vec::new(),
    };
    let rows = rows
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();

    Ok(RawTable::new(source_name(path), headers, rows))
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(value) => value.trim().to_string(),
        Data::Empty => String::new(),
        other => cell_from_data(other).to_text(),
    }
}

fn cell_from_data(cell: &Data) -> Cell {
    match cell {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(value) => Cell::Text(value.clone()),
        Data::Int(value) => Cell::Int(*value),
        Data::Float(value) => Cell::Float(*value),
        Data::Bool(value) => Cell::Bool(*value),
        other => Cell::Text(other.to_string()),
    }
}
