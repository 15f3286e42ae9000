//! Shared types for the Roster workforce console
//!
//! Record shapes and payload DTOs for every collection the admin console
//! manages, plus small utilities (timestamps, ID generation). The server
//! enables the `db` feature to get sqlx row derives; clients consume the
//! plain serde shapes.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
