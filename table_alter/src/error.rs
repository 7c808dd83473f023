//! Error types for table_alter

use thiserror::Error;

/// Result type for table_alter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for table_alter
#[derive(Error, Debug)]
pub enum Error {
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Raised for a column clause that cannot be read, e.g. the empty clause
    /// left behind by a stray comma. Extraction logs and skips these.
    #[error("Malformed column clause #{position}: {reason}")]
    MalformedColumnClause { position: usize, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Convert Serde JSON errors to table_alter errors
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::SerializationError(error.to_string())
    }
}

/// Convert Serde YAML errors to table_alter errors
impl From<serde_yaml::Error> for Error {
    fn from(error: serde_yaml::Error) -> Self {
        Error::SerializationError(error.to_string())
    }
}

/// Convert TOML deserialization errors to table_alter errors
impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::ConfigError(error.to_string())
    }
}
