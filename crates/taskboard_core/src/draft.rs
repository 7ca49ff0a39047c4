//! Form-side drafts turned into store-ready entities.
//!
//! # Responsibility
//! - Apply the only input rule the board has: required text is non-empty.
//! - Mint ids and timestamps for new entities before they reach the store.
//!
//! # Invariants
//! - A blank (whitespace-only) required field is rejected, nothing else is.
//! - Accepted text is stored exactly as typed.
//! - Subtasks inherit the parent's project id and point back at the parent.

use crate::model::ids::{AttachmentId, CommentId, EpochMs, ProjectId, TaskId};
use crate::model::project::Project;
use crate::model::task::{Attachment, Comment, Task, TaskPriority, TaskStatus};
use crate::model::user::User;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Draft rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Named required field is blank after trim.
    EmptyField(&'static str),
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{field} must not be blank"),
        }
    }
}

impl Error for DraftError {}

/// Task form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<EpochMs>,
    pub assignee: Option<User>,
}

impl TaskDraft {
    /// Draft with subtask-form defaults: `todo`, `medium`, no due date.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            due_date: None,
            assignee: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds a top-level task for `project_id`.
    pub fn into_task(
        self,
        project_id: &ProjectId,
        creator: User,
        now: EpochMs,
    ) -> Result<Task, DraftError> {
        require("title", &self.title)?;
        Ok(Task {
            id: TaskId::generate(),
            title: self.title,
            description: self.description,
            status: self.status,
            priority: self.priority,
            due_date: self.due_date,
            assignee: self.assignee,
            creator,
            attachments: Vec::new(),
            comments: Vec::new(),
            subtasks: Vec::new(),
            parent_id: None,
            project_id: project_id.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Builds a subtask of `parent`.
    pub fn into_subtask(self, parent: &Task, creator: User, now: EpochMs) -> Result<Task, DraftError> {
        let mut task = self.into_task(&parent.project_id, creator, now)?;
        task.parent_id = Some(parent.id.clone());
        Ok(task)
    }
}

/// Project form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub color: String,
    pub members: Vec<User>,
}

impl ProjectDraft {
    pub fn into_project(self, now: EpochMs) -> Result<Project, DraftError> {
        require("name", &self.name)?;
        Ok(Project {
            id: ProjectId::generate(),
            name: self.name,
            description: self.description,
            color: self.color,
            members: self.members,
            tasks: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Attachment form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentDraft {
    pub name: String,
    pub url: String,
    pub kind: String,
}

impl AttachmentDraft {
    pub fn into_attachment(self, now: EpochMs) -> Result<Attachment, DraftError> {
        require("name", &self.name)?;
        require("url", &self.url)?;
        Ok(Attachment {
            id: AttachmentId::generate(),
            name: self.name,
            url: self.url,
            kind: self.kind,
            created_at: now,
        })
    }
}

/// Builds a comment authored by `author`.
pub fn comment(content: impl Into<String>, author: User, now: EpochMs) -> Result<Comment, DraftError> {
    let content = content.into();
    require("content", &content)?;
    Ok(Comment {
        id: CommentId::generate(),
        content,
        created_at: now,
        user: author,
    })
}

fn require(field: &'static str, value: &str) -> Result<(), DraftError> {
    if value.trim().is_empty() {
        return Err(DraftError::EmptyField(field));
    }
    Ok(())
}
