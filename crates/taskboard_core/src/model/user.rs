//! User reference data.

use crate::model::ids::UserId;
use serde::{Deserialize, Serialize};

/// Seeded board user.
///
/// Users are reference data: tasks and comments embed a copy as creator,
/// assignee or author, and no store operation ever changes one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Avatar locator (URL or asset key).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            avatar: None,
        }
    }

    /// Returns the same user with an avatar locator attached.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}
