//! Write intents accepted by the store.

use crate::model::ids::{ProjectId, TaskId};
use crate::model::project::Project;
use crate::model::task::{Attachment, Comment, Task};
use serde::{Deserialize, Serialize};

/// One write intent; the only way entity state changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    AddProject(Project),
    UpdateProject(Project),
    DeleteProject {
        project_id: ProjectId,
    },
    SetCurrentProject(Project),
    AddTask {
        project_id: ProjectId,
        task: Task,
    },
    UpdateTask {
        project_id: ProjectId,
        task: Task,
    },
    DeleteTask {
        project_id: ProjectId,
        task_id: TaskId,
    },
    AddSubtask {
        project_id: ProjectId,
        parent_task_id: TaskId,
        subtask: Task,
    },
    AddComment {
        project_id: ProjectId,
        task_id: TaskId,
        comment: Comment,
    },
    AddAttachment {
        project_id: ProjectId,
        task_id: TaskId,
        attachment: Attachment,
    },
}

impl Action {
    /// Stable name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddProject(_) => "add_project",
            Self::UpdateProject(_) => "update_project",
            Self::DeleteProject { .. } => "delete_project",
            Self::SetCurrentProject(_) => "set_current_project",
            Self::AddTask { .. } => "add_task",
            Self::UpdateTask { .. } => "update_task",
            Self::DeleteTask { .. } => "delete_task",
            Self::AddSubtask { .. } => "add_subtask",
            Self::AddComment { .. } => "add_comment",
            Self::AddAttachment { .. } => "add_attachment",
        }
    }

    /// Project the intent is addressed to.
    pub fn project_id(&self) -> &ProjectId {
        match self {
            Self::AddProject(project)
            | Self::UpdateProject(project)
            | Self::SetCurrentProject(project) => &project.id,
            Self::DeleteProject { project_id }
            | Self::AddTask { project_id, .. }
            | Self::UpdateTask { project_id, .. }
            | Self::DeleteTask { project_id, .. }
            | Self::AddSubtask { project_id, .. }
            | Self::AddComment { project_id, .. }
            | Self::AddAttachment { project_id, .. } => project_id,
        }
    }
}
