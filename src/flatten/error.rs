//! Error types for flattening.

use thiserror::Error;

/// Errors that can occur while flattening a document.
#[derive(Debug, Error)]
pub enum FlattenError {
    /// Input text is not well-formed JSON.
    #[error("Failed to parse JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// Input bytes rejected by the SIMD parser.
    #[error("Failed to parse JSON: {0}")]
    SimdParse(#[from] simd_json::Error),

    /// Input nests arrays or objects deeper than the parser allows.
    #[error("Failed to parse JSON: nesting exceeds {limit} levels")]
    TooDeep { limit: usize },

    /// The document root is not an object.
    #[error("Expected a JSON object at the top level, found {found}")]
    NotAnObject { found: &'static str },

    /// The document has no `Data` key.
    #[error("Document has no `Data` object")]
    MissingData,

    /// `Data` is present but is not an object.
    #[error("Expected `Data` to be an object, found {found}")]
    DataNotAnObject { found: &'static str },

    /// The flattened document could not be serialized.
    #[error("Failed to serialize JSON: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FlattenError {
    /// Input was not syntactically valid JSON
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            FlattenError::Parse(_) | FlattenError::SimdParse(_) | FlattenError::TooDeep { .. }
        )
    }

    /// Input parsed but did not have the expected shape
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            FlattenError::NotAnObject { .. }
                | FlattenError::MissingData
                | FlattenError::DataNotAnObject { .. }
        )
    }
}

/// Result type for flattening operations.
pub type FlattenResult<T> = Result<T, FlattenError>;
