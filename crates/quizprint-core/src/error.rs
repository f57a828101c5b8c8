use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// The data declaration could not be located in the source text.
    #[error("quiz data not found: no `{marker}` declaration in source")]
    Extraction { marker: String },

    #[error("quiz data parse error: {0}")]
    Parse(String),

    #[error("quiz data version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<json5::Error> for SourceError {
    fn from(e: json5::Error) -> Self {
        SourceError::Parse(e.to_string())
    }
}
