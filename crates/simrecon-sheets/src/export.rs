use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use serde::Serialize;
use simrecon_core::{report_columns, report_rows, MismatchResult, MismatchRowDto};

use crate::error::{Result, SheetError};

const SHEET_NAME: &str = "Unmatched";

/// Pretty-printed JSON array with one object per mismatch row.
pub fn render_json(result: &MismatchResult) -> Result<String> {
    let rows = report_rows(result);
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Destinations for one export run. `None` skips that format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportTargets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xlsx: Option<PathBuf>,
}

impl ExportTargets {
    pub fn is_empty(&self) -> bool {
        self.json.is_none() && self.xlsx.is_none()
    }
}

/// Render every requested format before touching the filesystem, then write
/// them in turn. A failed write removes the files this call already wrote.
pub fn write_exports(result: &MismatchResult, targets: &ExportTargets) -> Result<()> {
    let mut payloads: Vec<(&Path, Vec<u8>)> = Vec::with_capacity(2);
    if let Some(path) = &targets.json {
        let mut data = render_json(result)?;
        data.push('\n');
        payloads.push((path.as_path(), data.into_bytes()));
    }
    if let Some(path) = &targets.xlsx {
        payloads.push((path.as_path(), xlsx_bytes(result)?));
    }

    let mut written: Vec<&Path> = Vec::with_capacity(payloads.len());
    for (path, data) in payloads {
        if let Err(source) = fs::write(path, data) {
            for done in written {
                let _ = fs::remove_file(done);
            }
            return Err(SheetError::Write {
                path: path.to_path_buf(),
                source,
            });
        }
        written.push(path);
    }
    Ok(())
}

pub fn xlsx_bytes(result: &MismatchResult) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(result)?;
    Ok(workbook.save_to_buffer()?)
}

fn build_workbook(result: &MismatchResult) -> std::result::Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in report_columns(result.direction()).iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (idx, row) in report_rows(result).iter().enumerate() {
        write_row(sheet, idx as u32 + 1, row)?;
    }

    Ok(workbook)
}

fn write_row(
    sheet: &mut Worksheet,
    row_idx: u32,
    row: &MismatchRowDto,
) -> std::result::Result<(), XlsxError> {
    match row {
        MismatchRowDto::Billed {
            phone_number,
            price,
            status,
            region,
        } => {
            sheet.write_string(row_idx, 0, phone_number)?;
            sheet.write_number(row_idx, 1, *price as f64)?;
            sheet.write_string(row_idx, 2, status)?;
            sheet.write_string(row_idx, 3, region)?;
        }
        MismatchRowDto::Tracked { phone_number } => {
            sheet.write_string(row_idx, 0, phone_number)?;
        }
    }
    Ok(())
}
