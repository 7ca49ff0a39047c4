//! Task domain model.
//!
//! # Responsibility
//! - Define the task record together with the sub-entities it owns
//!   (attachments, comments, subtasks).
//! - Define the closed status and priority enumerations.
//!
//! # Invariants
//! - `project_id` equals the id of the project whose tree holds the task.
//! - `parent_id` is `None` for top-level tasks and equals the containing
//!   task id for subtasks.
//! - `updated_at >= created_at`.
//! - Attachments, comments and subtasks are append-only.

use crate::model::ids::{AttachmentId, CommentId, EpochMs, ProjectId, TaskId};
use crate::model::user::User;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Created but not started.
    Todo,
    /// Work is in progress.
    InProgress,
    /// Done.
    Completed,
}

impl TaskStatus {
    /// Every status in board column order.
    pub const ALL: [TaskStatus; 3] = [Self::Todo, Self::InProgress, Self::Completed];

    /// Stable wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for TaskPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File or link attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: AttachmentId,
    pub name: String,
    pub url: String,
    /// Free-form type tag (`figma`, `pdf`, ...). Serialized as `type`.
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: EpochMs,
}

/// Comment left on a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub created_at: EpochMs,
    /// Authoring user.
    pub user: User,
}

/// Work item owned by a project, possibly nested under another task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<EpochMs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,
    pub creator: User,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub subtasks: Vec<Task>,
    /// Present only on subtasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<TaskId>,
    pub project_id: ProjectId,
    pub created_at: EpochMs,
    pub updated_at: EpochMs,
}

impl Task {
    /// Creates a top-level `todo`/`medium` task with no sub-entities.
    ///
    /// `created_at` and `updated_at` are both set to `now`.
    pub fn new(
        id: impl Into<TaskId>,
        project_id: impl Into<ProjectId>,
        title: impl Into<String>,
        creator: User,
        now: EpochMs,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            due_date: None,
            assignee: None,
            creator,
            attachments: Vec::new(),
            comments: Vec::new(),
            subtasks: Vec::new(),
            parent_id: None,
            project_id: project_id.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns whether this task sits directly in a project task list.
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Returns whether the task is still open and due strictly after `now`.
    pub fn is_upcoming(&self, now: EpochMs) -> bool {
        match self.due_date {
            Some(due) => !self.is_completed() && due > now,
            None => false,
        }
    }
}
