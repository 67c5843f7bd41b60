use crate::error::CoreError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const DEFAULT_JAKARTA_REGION: &str = "Jakarta";
pub const DEFAULT_KALIMANTAN_REGION: &str = "Kalimantan";

/// Label of the billing source a record came from. Supplied by the operator,
/// never read from the sheet itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidRegionLabel);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Label for the `position`-th optional sheet, counted from 1.
    pub fn extra(position: usize) -> Self {
        Self(format!("Extra-{position}"))
    }

    pub fn jakarta() -> Self {
        Self(DEFAULT_JAKARTA_REGION.to_string())
    }

    pub fn kalimantan() -> Self {
        Self(DEFAULT_KALIMANTAN_REGION.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Region::new(&raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
