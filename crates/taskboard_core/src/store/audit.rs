//! Structural invariant audit over a snapshot.
//!
//! The store trusts its inputs and never rejects a write for these
//! conditions; the audit only reports them.

use crate::model::ids::{ProjectId, TaskId};
use crate::store::snapshot::Snapshot;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// One broken model invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Task sits in a project tree but names another project.
    ProjectIdMismatch {
        task_id: TaskId,
        expected: ProjectId,
        actual: ProjectId,
    },
    /// Task's `parent_id` does not match its containing task.
    ParentIdMismatch {
        task_id: TaskId,
        expected: Option<TaskId>,
        actual: Option<TaskId>,
    },
    /// Same task id is listed by more than one owner, in any project.
    DuplicateTaskId(TaskId),
    /// An owner lists a task id with no stored record.
    DanglingTaskId(TaskId),
    /// Task `updated_at` precedes `created_at`.
    TaskTimestampOrder(TaskId),
    /// Project `updated_at` precedes `created_at`.
    ProjectTimestampOrder(ProjectId),
}

impl Display for InvariantViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectIdMismatch {
                task_id,
                expected,
                actual,
            } => write!(
                f,
                "task {task_id} belongs to project {expected} but names {actual}"
            ),
            Self::ParentIdMismatch {
                task_id,
                expected,
                actual,
            } => write!(
                f,
                "task {task_id} expects parent {} but names {}",
                display_parent(expected.as_ref()),
                display_parent(actual.as_ref())
            ),
            Self::DuplicateTaskId(id) => write!(f, "task id listed more than once: {id}"),
            Self::DanglingTaskId(id) => write!(f, "task id has no record: {id}"),
            Self::TaskTimestampOrder(id) => write!(f, "task {id} updated before created"),
            Self::ProjectTimestampOrder(id) => write!(f, "project {id} updated before created"),
        }
    }
}

fn display_parent(value: Option<&TaskId>) -> String {
    value.map_or_else(|| "none".to_string(), ToString::to_string)
}

impl Snapshot {
    /// Returns every invariant violation found; empty means consistent.
    pub fn audit(&self) -> Vec<InvariantViolation> {
        let mut violations = Vec::new();
        let mut owners: BTreeMap<&TaskId, usize> = BTreeMap::new();

        for project in &self.projects {
            if project.updated_at < project.created_at {
                violations.push(InvariantViolation::ProjectTimestampOrder(project.id.clone()));
            }

            let mut pending: Vec<(&TaskId, Option<&TaskId>)> =
                project.task_ids.iter().map(|id| (id, None)).collect();
            while let Some((task_id, parent_id)) = pending.pop() {
                let seen = owners.entry(task_id).or_insert(0);
                *seen += 1;
                if *seen > 1 {
                    violations.push(InvariantViolation::DuplicateTaskId(task_id.clone()));
                    continue;
                }

                let Some(record) = project.tasks.get(task_id) else {
                    violations.push(InvariantViolation::DanglingTaskId(task_id.clone()));
                    continue;
                };
                if record.project_id != project.id {
                    violations.push(InvariantViolation::ProjectIdMismatch {
                        task_id: task_id.clone(),
                        expected: project.id.clone(),
                        actual: record.project_id.clone(),
                    });
                }
                if record.parent_id.as_ref() != parent_id {
                    violations.push(InvariantViolation::ParentIdMismatch {
                        task_id: task_id.clone(),
                        expected: parent_id.cloned(),
                        actual: record.parent_id.clone(),
                    });
                }
                if record.updated_at < record.created_at {
                    violations.push(InvariantViolation::TaskTimestampOrder(task_id.clone()));
                }
                pending.extend(record.subtask_ids.iter().map(|id| (id, Some(task_id))));
            }
        }

        violations
    }
}
