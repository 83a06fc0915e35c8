//! Value objects composed by the `Todo` entity.
//!
//! Each one is immutable, compared by value, parsed from a canonical string
//! and rendered back to it with `Display`.

use super::errors::ParseError;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Longest accepted todo name, in characters.
pub const MAX_NAME_CHARS: usize = 200;

/// Unique identifier of a todo.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoId(String);

impl TodoId {
    /// Random UUID v4 identifier for newly added todos.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TodoId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human-readable todo title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoName(String);

impl TodoName {
    pub fn from_string(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyName);
        }
        let len = trimmed.chars().count();
        if len > MAX_NAME_CHARS {
            return Err(ParseError::NameTooLong {
                len,
                max: MAX_NAME_CHARS,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TodoName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl fmt::Display for TodoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The user a todo belongs to. Only the owner may attach a deadline or reminder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Owner {
    id: String,
    username: String,
    email: String,
}

impl Owner {
    pub fn from(id: &str, username: &str, email: &str) -> Result<Self, ParseError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ParseError::EmptyOwnerField("id"));
        }
        let username = username.trim();
        if username.is_empty() {
            return Err(ParseError::EmptyOwnerField("username"));
        }
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(ParseError::InvalidEmail(email.to_string()));
        }
        Ok(Self {
            id: id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email_address(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.username, self.email)
    }
}

/// One `@`, non-empty local part, dotted domain with no empty labels.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
        && !email.chars().any(char::is_whitespace)
}

/// Todo lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoStatus {
    Open,
    Done,
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoStatus::Open => write!(f, "open"),
            TodoStatus::Done => write!(f, "done"),
        }
    }
}

impl FromStr for TodoStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(TodoStatus::Open),
            "done" => Ok(TodoStatus::Done),
            _ => Err(ParseError::UnknownStatus(s.to_string())),
        }
    }
}

fn parse_instant(field: &'static str, raw: &str) -> Result<DateTime<Utc>, ParseError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ParseError::InvalidInstant {
            field,
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

/// Point in time by which the todo should be done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TodoDeadline(DateTime<Utc>);

impl TodoDeadline {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Parses an RFC 3339 timestamp, e.g. `2030-01-31T18:00:00Z`.
    pub fn from_string(raw: &str) -> Result<Self, ParseError> {
        parse_instant("deadline", raw).map(Self)
    }

    pub fn at(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn is_in_the_past_at(&self, now: DateTime<Utc>) -> bool {
        self.0 < now
    }
}

impl fmt::Display for TodoDeadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

/// Point in time at which the owner wants to be reminded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TodoReminder(DateTime<Utc>);

impl TodoReminder {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Parses an RFC 3339 timestamp, e.g. `2030-01-31T09:00:00+02:00`.
    pub fn from_string(raw: &str) -> Result<Self, ParseError> {
        parse_instant("reminder", raw).map(Self)
    }

    pub fn at(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn is_in_the_past_at(&self, now: DateTime<Utc>) -> bool {
        self.0 < now
    }
}

impl fmt::Display for TodoReminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}
