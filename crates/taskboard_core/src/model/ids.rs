//! Entity identifiers and time primitives.
//!
//! # Responsibility
//! - Give every entity kind its own id type so signatures cannot mix them up.
//! - Define the single timestamp representation used across the model.
//!
//! # Invariants
//! - Ids are opaque strings; the store never parses them.
//! - Freshly minted ids are UUID v4 strings and never collide with each other.
//! - Timestamps are Unix epoch milliseconds (`EpochMs`).

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Unix epoch milliseconds.
pub type EpochMs = i64;

/// One day in milliseconds.
pub const DAY_MS: EpochMs = 24 * 60 * 60 * 1000;

/// Returns current wall-clock time in epoch milliseconds.
///
/// Clocks set before 1970 report `0` instead of failing.
pub fn now_epoch_ms() -> EpochMs {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as EpochMs)
        .unwrap_or(0)
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing id value.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Mints a fresh random id.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.0.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

entity_id!(
    /// Stable identifier of a seeded user.
    UserId
);
entity_id!(
    /// Stable identifier of a project.
    ProjectId
);
entity_id!(
    /// Stable identifier of a task; unique across every nesting level.
    TaskId
);
entity_id!(
    /// Stable identifier of a task comment.
    CommentId
);
entity_id!(
    /// Stable identifier of a task attachment.
    AttachmentId
);
