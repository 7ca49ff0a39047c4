//! Core domain logic for the task board.
//! This crate is the single source of truth for business invariants.

pub mod draft;
pub mod logging;
pub mod model;
pub mod query;
pub mod seed;
pub mod store;

pub use draft::{AttachmentDraft, DraftError, ProjectDraft, TaskDraft};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::ids::{
    now_epoch_ms, AttachmentId, CommentId, EpochMs, ProjectId, TaskId, UserId, DAY_MS,
};
pub use model::project::Project;
pub use model::task::{Attachment, Comment, Task, TaskPriority, TaskStatus};
pub use model::user::User;
pub use query::{ProjectSummary, StatusCounts, SubtaskProgress};
pub use store::action::Action;
pub use store::audit::InvariantViolation;
pub use store::error::{StoreError, StoreResult};
pub use store::snapshot::Snapshot;
pub use store::{Store, SubscriptionId};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
