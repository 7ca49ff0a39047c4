//! Store operation errors.

use crate::model::ids::{ProjectId, TaskId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Addressing failure of a store operation.
///
/// Every variant means the receiving snapshot was left untouched; callers
/// that only need no-op semantics may discard it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No project with this id exists.
    ProjectNotFound(ProjectId),
    /// The project exists but has no top-level task with this id.
    TaskNotFound {
        project_id: ProjectId,
        task_id: TaskId,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::TaskNotFound {
                project_id,
                task_id,
            } => write!(f, "task not found: {task_id} in project {project_id}"),
        }
    }
}

impl Error for StoreError {}
