//! Board domain store.
//!
//! # Responsibility
//! - Own the latest `Snapshot` and be the only writer of entity state.
//! - Apply write intents synchronously, one at a time.
//! - Notify subscribers after every applied write.
//!
//! # Invariants
//! - `version` increases by exactly one per applied write.
//! - A rejected write leaves snapshot and version unchanged and notifies
//!   nobody.
//! - Subscribers always observe the snapshot that was just installed.

pub mod action;
pub mod audit;
pub mod error;
pub mod snapshot;
mod table;

use crate::model::ids::{EpochMs, ProjectId, TaskId};
use crate::model::project::Project;
use crate::model::task::{Attachment, Comment, Task};
use crate::model::user::User;
use action::Action;
use error::StoreResult;
use log::{debug, warn};
use snapshot::Snapshot;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

/// Handle returned by `Store::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Snapshot, u64)>;

/// Single-writer owner of the board state.
pub struct Store {
    snapshot: Snapshot,
    version: u64,
    subscribers: BTreeMap<SubscriptionId, Subscriber>,
    next_subscription: u64,
}

impl Debug for Store {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("version", &self.version)
            .field("projects", &self.snapshot.project_count())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(Snapshot::default())
    }
}

impl Store {
    /// Creates a store around an injected initial snapshot.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            snapshot: initial,
            version: 0,
            subscribers: BTreeMap::new(),
            next_subscription: 0,
        }
    }

    /// Creates a store holding the fixture board, dated relative to `now`.
    pub fn seeded(now: EpochMs) -> Self {
        Self::new(crate::seed::snapshot(now))
    }

    /// Latest snapshot. Clone it to keep a stable copy across writes.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Number of writes applied since creation.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn projects(&self) -> Vec<Project> {
        self.snapshot.projects()
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.snapshot.current_project()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.snapshot.current_user()
    }

    /// Applies one write intent.
    ///
    /// # Errors
    /// - Returns `StoreError` when the addressed project or task is missing;
    ///   the store is left exactly as it was.
    pub fn dispatch(&mut self, action: Action) -> StoreResult<()> {
        let name = action.name();
        let project_id = action.project_id().clone();

        match self.snapshot.apply(action) {
            Ok(next) => {
                self.snapshot = next;
                self.version += 1;
                debug!(
                    "event=store_apply module=store status=ok action={} project={} version={}",
                    name, project_id, self.version
                );
                self.notify();
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=store_apply module=store status=noop action={} version={} reason={}",
                    name, self.version, err
                );
                Err(err)
            }
        }
    }

    /// Registers a callback run after every applied write.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot, u64) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.insert(id, Box::new(subscriber));
        id
    }

    /// Removes a callback; returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(&id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn add_project(&mut self, project: Project) -> StoreResult<()> {
        self.dispatch(Action::AddProject(project))
    }

    pub fn update_project(&mut self, project: Project) -> StoreResult<()> {
        self.dispatch(Action::UpdateProject(project))
    }

    pub fn delete_project(&mut self, project_id: &ProjectId) -> StoreResult<()> {
        self.dispatch(Action::DeleteProject {
            project_id: project_id.clone(),
        })
    }

    pub fn set_current_project(&mut self, project: &Project) -> StoreResult<()> {
        self.dispatch(Action::SetCurrentProject(project.clone()))
    }

    pub fn add_task(&mut self, project_id: &ProjectId, task: Task) -> StoreResult<()> {
        self.dispatch(Action::AddTask {
            project_id: project_id.clone(),
            task,
        })
    }

    pub fn update_task(&mut self, project_id: &ProjectId, task: Task) -> StoreResult<()> {
        self.dispatch(Action::UpdateTask {
            project_id: project_id.clone(),
            task,
        })
    }

    pub fn delete_task(&mut self, project_id: &ProjectId, task_id: &TaskId) -> StoreResult<()> {
        self.dispatch(Action::DeleteTask {
            project_id: project_id.clone(),
            task_id: task_id.clone(),
        })
    }

    pub fn add_subtask(
        &mut self,
        project_id: &ProjectId,
        parent_task_id: &TaskId,
        subtask: Task,
    ) -> StoreResult<()> {
        self.dispatch(Action::AddSubtask {
            project_id: project_id.clone(),
            parent_task_id: parent_task_id.clone(),
            subtask,
        })
    }

    pub fn add_comment(
        &mut self,
        project_id: &ProjectId,
        task_id: &TaskId,
        comment: Comment,
    ) -> StoreResult<()> {
        self.dispatch(Action::AddComment {
            project_id: project_id.clone(),
            task_id: task_id.clone(),
            comment,
        })
    }

    pub fn add_attachment(
        &mut self,
        project_id: &ProjectId,
        task_id: &TaskId,
        attachment: Attachment,
    ) -> StoreResult<()> {
        self.dispatch(Action::AddAttachment {
            project_id: project_id.clone(),
            task_id: task_id.clone(),
            attachment,
        })
    }

    fn notify(&mut self) {
        let snapshot = &self.snapshot;
        let version = self.version;
        for subscriber in self.subscribers.values_mut() {
            subscriber(snapshot, version);
        }
    }
}
