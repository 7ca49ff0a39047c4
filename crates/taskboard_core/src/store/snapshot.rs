//! Immutable store snapshot and its pure transition operations.
//!
//! # Responsibility
//! - Hold one point-in-time value of the board: projects, their task trees,
//!   current project selection and current user.
//! - Produce the next snapshot for every write intent.
//!
//! # Invariants
//! - Operations never modify `self`; older snapshots stay valid.
//! - A failed operation produces no snapshot at all (no partial mutation).
//! - A write addressed to one project leaves every other project record
//!   pointer-identical.
//! - Task addressing only matches top-level tasks of the named project.
//! - Cloning is O(1); a mutation copies only the touched project/task path.

use crate::model::ids::{ProjectId, TaskId};
use crate::model::project::Project;
use crate::model::task::{Attachment, Comment, Task};
use crate::model::user::User;
use crate::store::action::Action;
use crate::store::error::{StoreError, StoreResult};
use crate::store::table::{insert_task_tree, materialize_task, ProjectRecord, TaskRecord};
use im::Vector;
use std::sync::Arc;

/// Point-in-time value of the whole board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub(crate) projects: Vector<Arc<ProjectRecord>>,
    pub(crate) current_project: Option<Project>,
    pub(crate) current_user: Option<User>,
}

impl Snapshot {
    /// Builds a snapshot from full project trees, in order.
    pub fn new(projects: Vec<Project>, current_user: Option<User>) -> Self {
        Self {
            projects: projects
                .into_iter()
                .map(|project| Arc::new(ProjectRecord::from_project(project)))
                .collect(),
            current_project: None,
            current_user,
        }
    }

    /// Returns every project as a full tree, in insertion order.
    pub fn projects(&self) -> Vec<Project> {
        self.projects
            .iter()
            .map(|record| record.materialize())
            .collect()
    }

    pub fn project_ids(&self) -> Vec<ProjectId> {
        self.projects.iter().map(|record| record.id.clone()).collect()
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Returns one project tree by id.
    pub fn project(&self, project_id: &ProjectId) -> Option<Project> {
        self.projects
            .iter()
            .find(|record| &record.id == project_id)
            .map(|record| record.materialize())
    }

    /// Returns one task tree by id, at any nesting level.
    ///
    /// Projects are searched in order; the first holding `task_id` wins.
    pub fn task(&self, task_id: &TaskId) -> Option<Task> {
        self.projects
            .iter()
            .find_map(|record| materialize_task(&record.tasks, task_id))
    }

    /// Total number of tasks stored, subtasks included.
    pub fn task_count(&self) -> usize {
        self.projects.iter().map(|record| record.tasks.len()).sum()
    }

    /// Returns the project value last passed to `set_current_project`.
    ///
    /// The value is kept as given; later writes to `projects` do not
    /// refresh it.
    pub fn current_project(&self) -> Option<&Project> {
        self.current_project.as_ref()
    }

    pub fn current_project_id(&self) -> Option<&ProjectId> {
        self.current_project.as_ref().map(|project| &project.id)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Routes one write intent to its operation.
    pub fn apply(&self, action: Action) -> StoreResult<Snapshot> {
        match action {
            Action::AddProject(project) => Ok(self.add_project(project)),
            Action::UpdateProject(project) => self.update_project(project),
            Action::DeleteProject { project_id } => self.delete_project(&project_id),
            Action::SetCurrentProject(project) => Ok(self.set_current_project(&project)),
            Action::AddTask { project_id, task } => self.add_task(&project_id, task),
            Action::UpdateTask { project_id, task } => self.update_task(&project_id, task),
            Action::DeleteTask {
                project_id,
                task_id,
            } => self.delete_task(&project_id, &task_id),
            Action::AddSubtask {
                project_id,
                parent_task_id,
                subtask,
            } => self.add_subtask(&project_id, &parent_task_id, subtask),
            Action::AddComment {
                project_id,
                task_id,
                comment,
            } => self.add_comment(&project_id, &task_id, comment),
            Action::AddAttachment {
                project_id,
                task_id,
                attachment,
            } => self.add_attachment(&project_id, &task_id, attachment),
        }
    }

    /// Appends a project. Id uniqueness is the caller's responsibility.
    pub fn add_project(&self, project: Project) -> Snapshot {
        let mut next = self.clone();
        next.projects
            .push_back(Arc::new(ProjectRecord::from_project(project)));
        next
    }

    /// Replaces the project with the same id, task list included.
    ///
    /// Nothing of the old value is merged; position in the list is kept.
    pub fn update_project(&self, project: Project) -> StoreResult<Snapshot> {
        let index = self.project_index(&project.id)?;
        let mut next = self.clone();
        next.projects
            .set(index, Arc::new(ProjectRecord::from_project(project)));
        Ok(next)
    }

    /// Removes a project and every task it owns.
    pub fn delete_project(&self, project_id: &ProjectId) -> StoreResult<Snapshot> {
        let index = self.project_index(project_id)?;
        let mut next = self.clone();
        next.projects.remove(index);
        Ok(next)
    }

    /// Selects `project` as the current project, stored exactly as given.
    pub fn set_current_project(&self, project: &Project) -> Snapshot {
        let mut next = self.clone();
        next.current_project = Some(project.clone());
        next
    }

    /// Appends a top-level task to the project's task list.
    pub fn add_task(&self, project_id: &ProjectId, task: Task) -> StoreResult<Snapshot> {
        let index = self.project_index(project_id)?;
        Ok(self.edit_project(index, |record| record.push_task(task)))
    }

    /// Replaces the top-level task with the same id, subtree included.
    pub fn update_task(&self, project_id: &ProjectId, task: Task) -> StoreResult<Snapshot> {
        let index = self.top_level_task(project_id, &task.id)?;
        Ok(self.edit_project(index, |record| record.replace_task(task)))
    }

    /// Removes a top-level task and its owned subtree.
    pub fn delete_task(&self, project_id: &ProjectId, task_id: &TaskId) -> StoreResult<Snapshot> {
        let index = self.top_level_task(project_id, task_id)?;
        Ok(self.edit_project(index, |record| record.remove_task(task_id)))
    }

    /// Appends `subtask` under a top-level task.
    pub fn add_subtask(
        &self,
        project_id: &ProjectId,
        parent_task_id: &TaskId,
        subtask: Task,
    ) -> StoreResult<Snapshot> {
        let index = self.top_level_task(project_id, parent_task_id)?;
        Ok(self.edit_project(index, |record| {
            let subtask_id = insert_task_tree(&mut record.tasks, subtask);
            record.edit_task(parent_task_id, |parent| parent.subtask_ids.push_back(subtask_id));
        }))
    }

    /// Appends a comment to a top-level task.
    pub fn add_comment(
        &self,
        project_id: &ProjectId,
        task_id: &TaskId,
        comment: Comment,
    ) -> StoreResult<Snapshot> {
        self.edit_top_level_task(project_id, task_id, |record| record.comments.push(comment))
    }

    /// Appends an attachment to a top-level task.
    pub fn add_attachment(
        &self,
        project_id: &ProjectId,
        task_id: &TaskId,
        attachment: Attachment,
    ) -> StoreResult<Snapshot> {
        self.edit_top_level_task(project_id, task_id, |record| {
            record.attachments.push(attachment)
        })
    }

    fn project_index(&self, project_id: &ProjectId) -> StoreResult<usize> {
        self.projects
            .iter()
            .position(|record| &record.id == project_id)
            .ok_or_else(|| StoreError::ProjectNotFound(project_id.clone()))
    }

    /// Resolves a top-level task address; returns the owning project index.
    fn top_level_task(&self, project_id: &ProjectId, task_id: &TaskId) -> StoreResult<usize> {
        let index = self.project_index(project_id)?;
        if self.projects[index].owns_task(task_id) {
            Ok(index)
        } else {
            Err(StoreError::TaskNotFound {
                project_id: project_id.clone(),
                task_id: task_id.clone(),
            })
        }
    }

    /// Clones the snapshot and edits the project record at `index` only.
    fn edit_project<F>(&self, index: usize, edit: F) -> Snapshot
    where
        F: FnOnce(&mut ProjectRecord),
    {
        let mut next = self.clone();
        if let Some(record) = next.projects.get_mut(index) {
            edit(Arc::make_mut(record));
        }
        next
    }

    fn edit_top_level_task<F>(
        &self,
        project_id: &ProjectId,
        task_id: &TaskId,
        edit: F,
    ) -> StoreResult<Snapshot>
    where
        F: FnOnce(&mut TaskRecord),
    {
        let index = self.top_level_task(project_id, task_id)?;
        Ok(self.edit_project(index, |record| record.edit_task(task_id, edit)))
    }
}
