//! Error types for the APY calculator

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApyError {
    #[error("Invalid option symbol format: {0}")]
    Format(String),

    #[error("Option has already expired on {0}")]
    Expired(NaiveDate),

    #[error("Invalid option type: {0}")]
    InvalidOptionType(char),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Usage error: {0}")]
    Usage(String),
}

pub type ApyResult<T> = Result<T, ApyError>;

impl ApyError {
    pub fn format(symbol: impl Into<String>) -> Self {
        Self::Format(symbol.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}
