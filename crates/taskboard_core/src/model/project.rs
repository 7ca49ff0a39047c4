//! Project domain model.

use crate::model::ids::{EpochMs, ProjectId};
use crate::model::task::Task;
use crate::model::user::User;
use serde::{Deserialize, Serialize};

/// Board project with its members and top-level tasks.
///
/// Subtasks are never listed in `tasks`; they live inside their parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    /// Display hint, stored verbatim (e.g. `#FF6B6B`).
    pub color: String,
    #[serde(default)]
    pub members: Vec<User>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    pub created_at: EpochMs,
    pub updated_at: EpochMs,
}

impl Project {
    /// Creates an empty project stamped at `now`.
    pub fn new(
        id: impl Into<ProjectId>,
        name: impl Into<String>,
        color: impl Into<String>,
        now: EpochMs,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            color: color.into(),
            members: Vec::new(),
            tasks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
