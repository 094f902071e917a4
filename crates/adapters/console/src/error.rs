//! Console adapter error types.

use homedex_domain::error::{HomeDexError, ValidationError};

/// Errors specific to the console adapter.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Input ended before the requested value was supplied.
    #[error("input closed while reading {0}")]
    Closed(&'static str),

    /// The collected answers do not form a valid record.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The terminal could not be read or written.
    #[error("console error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConsoleError> for HomeDexError {
    fn from(err: ConsoleError) -> Self {
        match err {
            ConsoleError::Invalid(err) => Self::Validation(err),
            other => Self::Storage(Box::new(other)),
        }
    }
}
