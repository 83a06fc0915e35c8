//! Domain errors. Returned by the entity, use cases and ports.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Status is already at the requested target.
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// Acting owner differs from the todo's owner.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Mutation attempted while the todo is done.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Temporal value already in the past.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Todo not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repo(String),

    #[error("Input error: {0}")]
    Input(String),
}

/// Value-object parse failures. Raised when building a value object from a
/// raw string, either from user input or from persisted state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("todo id must not be empty")]
    EmptyId,

    #[error("todo name must not be empty")]
    EmptyName,

    #[error("todo name is {len} characters long, limit is {max}")]
    NameTooLong { len: usize, max: usize },

    #[error("owner {0} must not be empty")]
    EmptyOwnerField(&'static str),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("unknown todo status: {0}")]
    UnknownStatus(String),

    #[error("invalid {field} timestamp `{value}`: {reason}")]
    InvalidInstant {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("missing field in todo state: {0}")]
    MissingField(&'static str),
}
