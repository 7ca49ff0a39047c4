//! Board domain model.
//!
//! # Responsibility
//! - Define the canonical entity values exchanged with the store:
//!   users, projects, tasks, comments and attachments.
//!
//! # Invariants
//! - Task ids are unique across the whole store, nesting levels included.
//! - Status and priority are closed enumerations.
//! - Users are immutable reference data, embedded by value.

pub mod ids;
pub mod project;
pub mod task;
pub mod user;
