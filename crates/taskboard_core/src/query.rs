//! Derived projections over project values.
//!
//! # Responsibility
//! - Compute dashboard and task-list read models on demand.
//!
//! # Invariants
//! - Every function is total and side-effect free.
//! - Only top-level tasks are counted; subtasks never affect project totals.
//! - Time-relative queries take `now` explicitly and never read the clock.

use crate::model::ids::{EpochMs, ProjectId};
use crate::model::project::Project;
use crate::model::task::{Task, TaskStatus};
use crate::store::snapshot::Snapshot;
use serde::{Deserialize, Serialize};

/// Per-status counters; statuses with no tasks read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub todo: usize,
    #[serde(rename = "in-progress")]
    pub in_progress: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn get(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Todo => self.todo,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Completed => self.completed,
        }
    }

    pub fn total(&self) -> usize {
        self.todo + self.in_progress + self.completed
    }

    fn bump(&mut self, status: TaskStatus) {
        match status {
            TaskStatus::Todo => self.todo += 1,
            TaskStatus::InProgress => self.in_progress += 1,
            TaskStatus::Completed => self.completed += 1,
        }
    }
}

/// Completed-over-total subtask counter shown on task cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtaskProgress {
    pub completed: usize,
    pub total: usize,
}

/// One dashboard card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub project_id: ProjectId,
    pub name: String,
    pub color: String,
    pub progress: u32,
    pub tasks_by_status: StatusCounts,
    pub upcoming: usize,
    pub member_count: usize,
}

/// Percentage of completed top-level tasks, rounded half up.
///
/// Returns `0` for a project without tasks.
pub fn progress(project: &Project) -> u32 {
    let total = project.tasks.len() as u64;
    if total == 0 {
        return 0;
    }
    let completed = project.tasks.iter().filter(|task| task.is_completed()).count() as u64;
    ((200 * completed + total) / (2 * total)) as u32
}

/// Counts top-level tasks per status.
pub fn tasks_by_status(project: &Project) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for task in &project.tasks {
        counts.bump(task.status);
    }
    counts
}

/// Counts open top-level tasks due strictly after `now`.
pub fn upcoming_count(project: &Project, now: EpochMs) -> usize {
    project
        .tasks
        .iter()
        .filter(|task| task.is_upcoming(now))
        .count()
}

/// Top-level tasks in one board column, in list order.
pub fn tasks_with_status(project: &Project, status: TaskStatus) -> Vec<&Task> {
    project
        .tasks
        .iter()
        .filter(|task| task.status == status && task.is_top_level())
        .collect()
}

pub fn subtask_progress(task: &Task) -> SubtaskProgress {
    SubtaskProgress {
        completed: task.subtasks.iter().filter(|sub| sub.is_completed()).count(),
        total: task.subtasks.len(),
    }
}

pub fn summarize(project: &Project, now: EpochMs) -> ProjectSummary {
    ProjectSummary {
        project_id: project.id.clone(),
        name: project.name.clone(),
        color: project.color.clone(),
        progress: progress(project),
        tasks_by_status: tasks_by_status(project),
        upcoming: upcoming_count(project, now),
        member_count: project.members.len(),
    }
}

/// Dashboard cards for every project of `snapshot`, in project order.
pub fn dashboard(snapshot: &Snapshot, now: EpochMs) -> Vec<ProjectSummary> {
    snapshot
        .projects()
        .iter()
        .map(|project| summarize(project, now))
        .collect()
}
