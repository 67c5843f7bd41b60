use crate::domain::msisdn::CanonicalId;
use crate::domain::region::Region;
use crate::domain::table::Cell;
use serde::Serialize;

/// Status of a cancelled line. Cancelled lines carry no billing obligation.
pub const CANCELLED_STATUS: &str = "C";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BillingRecord {
    #[serde(rename = "phone_number")]
    pub id: CanonicalId,
    pub price: i64,
    pub status: String,
    pub region: Region,
}

impl BillingRecord {
    pub fn is_cancelled(&self) -> bool {
        self.status == CANCELLED_STATUS
    }
}

/// Status recorded for a blank status cell, as a dataframe export spells it.
pub const MISSING_STATUS: &str = "NAN";

/// Trimmed, uppercased text of a status cell.
pub fn normalize_status(cell: &Cell) -> String {
    match cell {
        Cell::Empty => MISSING_STATUS.to_string(),
        other => other.to_text().trim().to_uppercase(),
    }
}

/// Numeric value of a price cell, truncated toward zero.
///
/// Anything that does not read as a finite number becomes `0`.
pub fn parse_price(cell: &Cell) -> i64 {
    let value = match cell {
        Cell::Int(value) => return *value,
        Cell::Bool(value) => return i64::from(*value),
        Cell::Float(value) => *value,
        Cell::Text(raw) => match raw.trim().parse::<f64>() {
            Ok(value) => value,
            Err(_) => return 0,
        },
        Cell::Empty => return 0,
    };
    truncate_price(value)
}

fn truncate_price(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let truncated = value.trunc();
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return 0;
    }
    truncated as i64
}

#[cfg(test)]
mod tests {
    use super::{normalize_status, parse_price};
    use crate::domain::table::Cell;

    #[test]
    fn status_is_trimmed_and_uppercased() {
        assert_eq!(normalize_status(&Cell::text(" c ")), "C");
        assert_eq!(normalize_status(&Cell::text("Aktif")), "AKTIF");
    }

    #[test]
    fn blank_status_reads_as_nan() {
        assert_eq!(normalize_status(&Cell::Empty), "NAN");
        assert_eq!(normalize_status(&Cell::Float(f64::NAN)), "NAN");
    }

    #[test]
    fn price_accepts_numbers_and_numeric_text() {
        assert_eq!(parse_price(&Cell::Int(10000)), 10000);
        assert_eq!(parse_price(&Cell::Float(5000.9)), 5000);
        assert_eq!(parse_price(&Cell::text(" 2500 ")), 2500);
        assert_eq!(parse_price(&Cell::text("1e3")), 1000);
        assert_eq!(parse_price(&Cell::Bool(true)), 1);
    }

    #[test]
    fn price_falls_back_to_zero() {
        assert_eq!(parse_price(&Cell::Empty), 0);
        assert_eq!(parse_price(&Cell::text("Rp 10.000")), 0);
        assert_eq!(parse_price(&Cell::text("10,000")), 0);
        assert_eq!(parse_price(&Cell::Float(f64::NAN)), 0);
        assert_eq!(parse_price(&Cell::text("inf")), 0);
        assert_eq!(parse_price(&Cell::Float(1e30)), 0);
    }
}
