use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A SIM identifier in canonical form: ASCII digits only, leading `0`.
///
/// The only way to obtain one is [`normalize_msisdn`], so two ids compare
/// equal exactly when their digit strings do. Deserialization runs the
/// normalizer too and rejects values it cannot canonicalize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalId(String);

impl CanonicalId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for CanonicalId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        normalize_msisdn(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("not a recognised phone number: {raw:?}"))
        })
    }
}

impl fmt::Display for CanonicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Artifact left behind by numeric spreadsheet cells (`6281234567890.0`).
const NUMERIC_CELL_SUFFIX: &str = ".0";

struct PrefixRule {
    matches: fn(&str) -> bool,
    rewrite: fn(&str) -> String,
}

// Evaluated in order; the first matching rule wins.
const PREFIX_RULES: [PrefixRule; 3] = [
    PrefixRule {
        matches: has_country_code,
        rewrite: replace_country_code,
    },
    PrefixRule {
        matches: has_bare_mobile_prefix,
        rewrite: prepend_trunk_zero,
    },
    PrefixRule {
        matches: has_trunk_zero,
        rewrite: str::to_string,
    },
];

fn has_country_code(digits: &str) -> bool {
    digits.starts_with("62")
}

fn replace_country_code(digits: &str) -> String {
    format!("0{}", &digits[2..])
}

fn has_bare_mobile_prefix(digits: &str) -> bool {
    digits.starts_with('8')
}

fn prepend_trunk_zero(digits: &str) -> String {
    format!("0{digits}")
}

fn has_trunk_zero(digits: &str) -> bool {
    digits.starts_with('0')
}

/// Normalize a raw phone number into its canonical form.
///
/// Returns `None` for blank input and for numbers whose digits match none of
/// the `62` / `8` / `0` prefix rules. Every `.0` substring is removed before
/// the digits are extracted, not only a trailing one.
pub fn normalize_msisdn(raw: &str) -> Option<CanonicalId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let digits: String = trimmed
        .replace(NUMERIC_CELL_SUFFIX, "")
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return None;
    }

    PREFIX_RULES
        .iter()
        .find(|rule| (rule.matches)(&digits))
        .map(|rule| CanonicalId((rule.rewrite)(&digits)))
}

#[cfg(test)]
mod tests {
    use super::{normalize_msisdn, CanonicalId};

    fn canonical(raw: &str) -> Option<String> {
        normalize_msisdn(raw).map(|id| id.into_string())
    }

    #[test]
    fn normalize_rewrites_country_code() {
        assert_eq!(canonical("6281234567890").as_deref(), Some("081234567890"));
    }

    #[test]
    fn normalize_prepends_zero_to_bare_mobile_prefix() {
        assert_eq!(canonical("81234567890").as_deref(), Some("081234567890"));
    }

    #[test]
    fn normalize_keeps_local_form() {
        assert_eq!(canonical("081234567890").as_deref(), Some("081234567890"));
    }

    #[test]
    fn normalize_rejects_foreign_prefix() {
        assert!(canonical("1234567890").is_none());
    }

    #[test]
    fn normalize_rejects_blank_and_digitless() {
        assert!(canonical("").is_none());
        assert!(canonical("   ").is_none());
        assert!(canonical("n/a").is_none());
    }

    #[test]
    fn normalize_strips_formatting() {
        assert_eq!(
            canonical(" +62 812-3456-7890 ").as_deref(),
            Some("081234567890")
        );
    }

    #[test]
    fn normalize_strips_numeric_cell_suffix() {
        assert_eq!(canonical("6281234567890.0").as_deref(), Some("081234567890"));
        assert_eq!(canonical("81234567890.0").as_deref(), Some("081234567890"));
    }

    #[test]
    fn normalize_removes_suffix_anywhere_in_value() {
        assert_eq!(canonical("0812.034").as_deref(), Some("081234"));
    }

    #[test]
    fn normalize_prefers_country_code_over_local_rules() {
        // "62" wins even though the rewritten value would not start with 8.
        assert_eq!(canonical("620811").as_deref(), Some("00811"));
        assert_eq!(canonical("62").as_deref(), Some("0"));
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["6281234567890", "81234567890", "081234567890", "62 0811"] {
            let first = canonical(raw).expect("canonical");
            assert_eq!(canonical(&first).as_deref(), Some(first.as_str()));
        }
    }

    #[test]
    fn normalize_output_is_zero_prefixed_digits() {
        for raw in ["628", "8", "0", "+62-8", "tel:0812", "62.0.0"] {
            if let Some(id) = normalize_msisdn(raw) {
                assert!(id.as_str().starts_with('0'), "{raw} -> {id}");
                assert!(id.as_str().chars().all(|ch| ch.is_ascii_digit()));
            }
        }
    }

    #[test]
    fn deserialize_goes_through_normalizer() {
        let id: CanonicalId = serde_json::from_str("\"6281234567890\"").expect("canonical");
        assert_eq!(id.as_str(), "081234567890");

        let err = serde_json::from_str::<CanonicalId>("\"not-a-number\"").unwrap_err();
        assert!(err.to_string().contains("not-a-number"), "{err}");
        assert!(serde_json::from_str::<CanonicalId>("\"1234567890\"").is_err());
    }
}
