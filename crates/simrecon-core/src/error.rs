use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("missing column '{column}' in {table}")]
    MissingColumn { table: String, column: String },
    #[error("invalid region label")]
    InvalidRegionLabel,
    #[error("invalid comparison direction: {0}")]
    InvalidDirection(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorKind {
    /// Required files were not supplied; nothing was processed.
    MissingInput,
    /// An uploaded file lacks an expected column.
    Schema,
    InvalidInput,
}

impl CoreError {
    pub fn kind(&self) -> CoreErrorKind {
        match self {
            CoreError::MissingInput(_) => CoreErrorKind::MissingInput,
            CoreError::MissingColumn { .. } => CoreErrorKind::Schema,
            CoreError::InvalidRegionLabel | CoreError::InvalidDirection(_) => {
                CoreErrorKind::InvalidInput
            }
        }
    }
}
