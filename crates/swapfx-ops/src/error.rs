//! Error types for color adjustment operations.

use thiserror::Error;

/// Error type for color adjustment operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Input batches have incompatible sizes.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// I/O error reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for color adjustment operations.
pub type OpsResult<T> = Result<T, OpsError>;
