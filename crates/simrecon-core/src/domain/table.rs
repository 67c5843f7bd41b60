use crate::error::CoreError;

pub const DEFAULT_SIM_CARD_COLUMN: &str = "Sim Card";
pub const DEFAULT_MSISDN_COLUMN: &str = "MSISDN";
pub const DEFAULT_PRICE_COLUMN: &str = "TAGIHAN";
pub const DEFAULT_STATUS_COLUMN: &str = "STATUS_LAYANAN";

// Floats outside [EXPONENT_LOWER, EXPONENT_UPPER) render in exponent form.
const EXPONENT_UPPER: f64 = 1e16;
const EXPONENT_LOWER: f64 = 1e-4;

static EMPTY_CELL: Cell = Cell::Empty;

/// A single spreadsheet cell as handed over by the file reader.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Float(value) => !value.is_finite(),
            _ => false,
        }
    }

    /// Render the cell the way a spreadsheet export stringifies it.
    ///
    /// Integral floats keep their `.0` suffix.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(value) => value.clone(),
            Cell::Int(value) => value.to_string(),
            Cell::Float(value) => float_text(*value),
            Cell::Bool(true) => "True".to_string(),
            Cell::Bool(false) => "False".to_string(),
        }
    }
}

fn float_text(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        return exponent_text(value);
    }
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

// Shortest round-trip mantissa, signed exponent of at least two digits: `1e+16`, `1.5e-05`.
fn exponent_text(value: f64) -> String {
    let formatted = format!("{value:e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Column names looked up in the uploaded sheets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub sim_card: String,
    pub msisdn: String,
    pub price: String,
    pub status: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            sim_card: DEFAULT_SIM_CARD_COLUMN.to_string(),
            msisdn: DEFAULT_MSISDN_COLUMN.to_string(),
            price: DEFAULT_PRICE_COLUMN.to_string(),
            status: DEFAULT_STATUS_COLUMN.to_string(),
        }
    }
}

/// Tabular contents of one uploaded file: a header row plus data rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTable {
    pub source: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    pub fn new(source: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            source: source.into(),
            headers,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Result<usize, CoreError> {
        let wanted = name.trim();
        self.headers
            .iter()
            .position(|header| header.trim() == wanted)
            .ok_or_else(|| CoreError::MissingColumn {
                table: self.source.clone(),
                column: wanted.to_string(),
            })
    }

    /// Cells of the named column, one per row. Short rows yield [`Cell::Empty`].
    pub fn column<'a>(
        &'a self,
        name: &str,
    ) -> Result<impl Iterator<Item = &'a Cell> + 'a, CoreError> {
        let index = self.column_index(name)?;
        Ok(self
            .rows
            .iter()
            .map(move |row| row.get(index).unwrap_or(&EMPTY_CELL)))
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, RawTable};
    use crate::error::CoreError;

    fn table() -> RawTable {
        RawTable::new(
            "inventory.xlsx",
            vec![" Sim Card ".to_string(), "Owner".to_string()],
            vec![
                vec![Cell::text("0811"), Cell::text("Ada")],
                vec![Cell::Float(812.0)],
            ],
        )
    }

    #[test]
    fn float_cells_keep_integral_suffix() {
        assert_eq!(Cell::Float(6281234567890.0).to_text(), "6281234567890.0");
        assert_eq!(Cell::Float(12.5).to_text(), "12.5");
        assert_eq!(Cell::Int(81).to_text(), "81");
        assert_eq!(Cell::Bool(true).to_text(), "True");
    }

    #[test]
    fn float_cells_switch_to_exponent_form_at_extremes() {
        assert_eq!(Cell::Float(1e16).to_text(), "1e+16");
        assert_eq!(Cell::Float(6.2812345678901e17).to_text(), "6.2812345678901e+17");
        assert_eq!(Cell::Float(-2.5e20).to_text(), "-2.5e+20");
        assert_eq!(Cell::Float(1.5e-5).to_text(), "1.5e-05");
        assert_eq!(Cell::Float(9999999999999998.0).to_text(), "9999999999999998.0");
        assert_eq!(Cell::Float(0.0).to_text(), "0.0");
    }

    #[test]
    fn non_finite_floats_render_lowercase() {
        assert_eq!(Cell::Float(f64::NAN).to_text(), "nan");
        assert_eq!(Cell::Float(f64::NEG_INFINITY).to_text(), "-inf");
    }

    #[test]
    fn missing_cells() {
        assert!(Cell::Empty.is_missing());
        assert!(Cell::Float(f64::NAN).is_missing());
        assert!(!Cell::text("").is_missing());
    }

    #[test]
    fn column_lookup_trims_headers_and_pads_short_rows() {
        let table = table();
        let cells: Vec<&Cell> = table.column("Owner").expect("owner").collect();
        assert_eq!(cells, vec![&Cell::text("Ada"), &Cell::Empty]);
        assert_eq!(table.column("Sim Card").expect("sim").count(), 2);
    }

    #[test]
    fn column_lookup_reports_missing_column() {
        let err = table().column("MSISDN").err().expect("missing");
        assert_eq!(
            err,
            CoreError::MissingColumn {
                table: "inventory.xlsx".to_string(),
                column: "MSISDN".to_string(),
            }
        );
    }
}
