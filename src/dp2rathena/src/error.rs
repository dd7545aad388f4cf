//! Conversion errors

use thiserror::Error;

/// Errors that abort a conversion
///
/// Ambiguity in the source data is never an error: it ends up in the output
/// as a review marker. Only codes the lookup tables do not know about and
/// records of the wrong shape fail.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Unrecognised itemTypeId: {0}")]
    UnrecognizedItemType(i64),

    #[error("Unrecognised itemSubTypeId: {0}")]
    UnrecognizedItemSubType(i64),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for {field}: expected {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to build YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ConvertError {
    /// True for the lookup-table failures (`itemTypeId`/`itemSubTypeId`)
    pub fn is_unrecognized_code(&self) -> bool {
        matches!(
            self,
            Self::UnrecognizedItemType(_) | Self::UnrecognizedItemSubType(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
