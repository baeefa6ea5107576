//! Error types for building Hello World instructions

use anchor_client::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelloWorldError {
    #[error("Invalid address '{input}': {reason}")]
    InvalidAddress { input: String, reason: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl HelloWorldError {
    pub fn invalid_address(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAddress {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

impl From<ClientError> for HelloWorldError {
    fn from(err: ClientError) -> Self {
        Self::Connection(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HelloWorldError>;
