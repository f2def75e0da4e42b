//! Error types for jsonsig.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The value handed to the normalizer cannot be represented as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A signature, public key, private key or hex string is malformed.
    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("Signing failed: {0}")]
    Signing(String),
}

impl Error {
    pub(crate) fn decoding(msg: impl Into<String>) -> Self {
        Error::Decoding(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
