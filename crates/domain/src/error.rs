//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HomeDexError`] via `#[from]`. Adapters box their IO errors into
//! [`HomeDexError::Storage`]. Every variant renders as a single line so the
//! command dispatcher can report it verbatim.

use crate::field::DeviceField;

/// Top-level error for every homedex operation.
#[derive(Debug, thiserror::Error)]
pub enum HomeDexError {
    /// A value broke a domain invariant or could not be parsed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An operation referenced a record that does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// An insert collided with an existing record.
    #[error(transparent)]
    Duplicate(#[from] DuplicateError),

    /// A command was invoked with missing or malformed arguments.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// A distinct-values query named a field outside the whitelist.
    #[error(transparent)]
    UnsupportedField(#[from] UnsupportedFieldError),

    /// The first token of a command line matched no known command.
    #[error("unknown command '{0}', type 'help' for the list of commands")]
    UnknownCommand(String),

    /// A script tried to execute a script that is already running.
    #[error("script '{0}' is already running, refusing to execute it recursively")]
    RecursiveScript(String),

    /// Reading, writing, or decoding external state failed.
    #[error("{0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant or input-format violations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("power consumption must be a finite non-negative number of watts, got {0}")]
    InvalidPower(f64),

    #[error("name must not be empty")]
    EmptyName,

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("invalid {kind} '{value}', expected one of: {choices}")]
    InvalidChoice {
        kind: &'static str,
        value: String,
        choices: String,
    },

    #[error("invalid {field} '{value}', expected {expected}")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// No record with the given identifier exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A record with the given identifier already exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id {id} already exists")]
pub struct DuplicateError {
    pub entity: &'static str,
    pub id: String,
}

/// A command was called with the wrong arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("usage: {usage}")]
pub struct UsageError {
    pub usage: &'static str,
}

/// The requested field does not support distinct-value queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported field '{field}', expected one of: {}", DeviceField::choices())]
pub struct UnsupportedFieldError {
    pub field: String,
}
