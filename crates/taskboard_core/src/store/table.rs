//! Flattened storage records behind a snapshot.
//!
//! # Responsibility
//! - Split inbound `Project`/`Task` trees into id-keyed records.
//! - Rebuild full tree values from records on read.
//!
//! # Invariants
//! - Each project owns a private task table; no write to one project can
//!   reach another project's records, even when task ids repeat.
//! - Within a project every task lives in exactly one `TaskRecord`, keyed by
//!   its id; owners hold child ids only (`ProjectRecord::task_ids`,
//!   `TaskRecord::subtask_ids`).
//! - Table values are `Arc`-shared records, so map nodes stay small and edits
//!   copy only the touched record.
//! - Removing a record removes its whole owned subtree.
//! - Materialization never loops, even if malformed input made a task own
//!   one of its ancestors.

use crate::model::ids::{EpochMs, ProjectId, TaskId};
use crate::model::project::Project;
use crate::model::task::{Attachment, Comment, Task, TaskPriority, TaskStatus};
use crate::model::user::User;
use im::{OrdMap, Vector};
use std::sync::Arc;

/// Task table of one project.
pub(crate) type TaskTable = OrdMap<TaskId, Arc<TaskRecord>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProjectRecord {
    pub(crate) id: ProjectId,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) color: String,
    pub(crate) members: Vec<User>,
    pub(crate) task_ids: Vector<TaskId>,
    pub(crate) tasks: TaskTable,
    pub(crate) created_at: EpochMs,
    pub(crate) updated_at: EpochMs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TaskRecord {
    pub(crate) id: TaskId,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) status: TaskStatus,
    pub(crate) priority: TaskPriority,
    pub(crate) due_date: Option<EpochMs>,
    pub(crate) assignee: Option<User>,
    pub(crate) creator: User,
    pub(crate) attachments: Vec<Attachment>,
    pub(crate) comments: Vec<Comment>,
    pub(crate) subtask_ids: Vector<TaskId>,
    pub(crate) parent_id: Option<TaskId>,
    pub(crate) project_id: ProjectId,
    pub(crate) created_at: EpochMs,
    pub(crate) updated_at: EpochMs,
}

impl ProjectRecord {
    /// Flattens `project` into a record with its own task table.
    pub(crate) fn from_project(project: Project) -> Self {
        let mut tasks = TaskTable::new();
        let task_ids = project
            .tasks
            .into_iter()
            .map(|task| insert_task_tree(&mut tasks, task))
            .collect();

        Self {
            id: project.id,
            name: project.name,
            description: project.description,
            color: project.color,
            members: project.members,
            task_ids,
            tasks,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }

    /// Whether `task_id` is one of this project's top-level tasks.
    pub(crate) fn owns_task(&self, task_id: &TaskId) -> bool {
        self.task_ids.iter().any(|id| id == task_id) && self.tasks.contains_key(task_id)
    }

    /// Appends a top-level task tree.
    pub(crate) fn push_task(&mut self, task: Task) {
        let task_id = insert_task_tree(&mut self.tasks, task);
        self.task_ids.push_back(task_id);
    }

    /// Replaces a top-level task tree in place; its list position is kept.
    pub(crate) fn replace_task(&mut self, task: Task) {
        remove_task_tree(&mut self.tasks, &task.id);
        insert_task_tree(&mut self.tasks, task);
    }

    /// Drops a top-level task and its owned subtree.
    pub(crate) fn remove_task(&mut self, task_id: &TaskId) {
        remove_task_tree(&mut self.tasks, task_id);
        if let Some(position) = self.task_ids.iter().position(|id| id == task_id) {
            self.task_ids.remove(position);
        }
    }

    /// Applies `edit` to one stored task, copying the record only if shared.
    pub(crate) fn edit_task<F>(&mut self, task_id: &TaskId, edit: F)
    where
        F: FnOnce(&mut TaskRecord),
    {
        if let Some(record) = self.tasks.get_mut(task_id) {
            edit(Arc::make_mut(record));
        }
    }

    /// Rebuilds the full project value.
    pub(crate) fn materialize(&self) -> Project {
        Project {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            color: self.color.clone(),
            members: self.members.clone(),
            tasks: materialize_children(&self.tasks, &self.task_ids, &mut Vec::new()),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Flattens `task` and all nested subtasks into `tasks`; returns the root id.
pub(crate) fn insert_task_tree(tasks: &mut TaskTable, task: Task) -> TaskId {
    let subtask_ids = task
        .subtasks
        .into_iter()
        .map(|subtask| insert_task_tree(tasks, subtask))
        .collect();

    let id = task.id;
    tasks.insert(
        id.clone(),
        Arc::new(TaskRecord {
            id: id.clone(),
            title: task.title,
            description: task.description,
            status: task.status,
            priority: task.priority,
            due_date: task.due_date,
            assignee: task.assignee,
            creator: task.creator,
            attachments: task.attachments,
            comments: task.comments,
            subtask_ids,
            parent_id: task.parent_id,
            project_id: task.project_id,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }),
    );
    id
}

/// Removes `id` and its owned subtree from `tasks`.
pub(crate) fn remove_task_tree(tasks: &mut TaskTable, id: &TaskId) {
    if let Some(record) = tasks.remove(id) {
        for child in &record.subtask_ids {
            remove_task_tree(tasks, child);
        }
    }
}

/// Rebuilds one task tree rooted at `id`.
pub(crate) fn materialize_task(tasks: &TaskTable, id: &TaskId) -> Option<Task> {
    materialize_on_path(tasks, id, &mut Vec::new())
}

fn materialize_children(tasks: &TaskTable, ids: &Vector<TaskId>, path: &mut Vec<TaskId>) -> Vec<Task> {
    ids.iter()
        .filter_map(|id| materialize_on_path(tasks, id, path))
        .collect()
}

fn materialize_on_path(tasks: &TaskTable, id: &TaskId, path: &mut Vec<TaskId>) -> Option<Task> {
    if path.contains(id) {
        return None;
    }
    let record = tasks.get(id)?;

    path.push(id.clone());
    let subtasks = materialize_children(tasks, &record.subtask_ids, path);
    path.pop();

    Some(Task {
        id: record.id.clone(),
        title: record.title.clone(),
        description: record.description.clone(),
        status: record.status,
        priority: record.priority,
        due_date: record.due_date,
        assignee: record.assignee.clone(),
        creator: record.creator.clone(),
        attachments: record.attachments.clone(),
        comments: record.comments.clone(),
        subtasks,
        parent_id: record.parent_id.clone(),
        project_id: record.project_id.clone(),
        created_at: record.created_at,
        updated_at: record.updated_at,
    })
}
