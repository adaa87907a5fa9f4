//! All error types for the langcodec-accesskey crate.
//!
//! Only configuration is fallible. Splitting, combining and pairing report
//! "nothing to do" through `Option`, never through `Error`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid access key marker `{0}`: expected exactly one character")]
    InvalidMarker(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig(message.into())
    }
}
