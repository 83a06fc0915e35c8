//! Flat, primitive-typed projection of a todo. This is the persistence boundary:
//! repositories store `TodoState` and never see the entity's value objects.

use super::errors::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const KEY_ID: &str = "id";
pub const KEY_NAME: &str = "name";
pub const KEY_OWNER_ID: &str = "owner_id";
pub const KEY_OWNER_USERNAME: &str = "owner_username";
pub const KEY_OWNER_EMAIL: &str = "owner_email";
pub const KEY_STATUS: &str = "status";
pub const KEY_DEADLINE: &str = "deadline";
pub const KEY_REMINDER: &str = "reminder";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub owner_username: String,
    pub owner_email: String,
    pub status: String,
    /// RFC 3339. Absent when no deadline was set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    /// RFC 3339. Absent when no reminder was set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder: Option<String>,
}

impl TodoState {
    /// Flattens into a string key-value mapping. Unset deadline/reminder keys are omitted.
    pub fn into_map(self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert(KEY_ID.to_string(), self.id);
        map.insert(KEY_NAME.to_string(), self.name);
        map.insert(KEY_OWNER_ID.to_string(), self.owner_id);
        map.insert(KEY_OWNER_USERNAME.to_string(), self.owner_username);
        map.insert(KEY_OWNER_EMAIL.to_string(), self.owner_email);
        map.insert(KEY_STATUS.to_string(), self.status);
        if let Some(deadline) = self.deadline {
            map.insert(KEY_DEADLINE.to_string(), deadline);
        }
        if let Some(reminder) = self.reminder {
            map.insert(KEY_REMINDER.to_string(), reminder);
        }
        map
    }

    /// Reads a flat mapping. Only checks key presence; field contents are
    /// validated later by `Todo::from_state`.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, ParseError> {
        let required = |key: &'static str| {
            map.get(key)
                .cloned()
                .ok_or(ParseError::MissingField(key))
        };
        Ok(Self {
            id: required(KEY_ID)?,
            name: required(KEY_NAME)?,
            owner_id: required(KEY_OWNER_ID)?,
            owner_username: required(KEY_OWNER_USERNAME)?,
            owner_email: required(KEY_OWNER_EMAIL)?,
            status: required(KEY_STATUS)?,
            deadline: map.get(KEY_DEADLINE).cloned(),
            reminder: map.get(KEY_REMINDER).cloned(),
        })
    }
}
