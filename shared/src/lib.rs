//! Shared types for the portal backend
//!
//! Data models and DTOs used by the server and (via API) by frontends,
//! plus pagination types and small id/time utilities.

pub mod models;
pub mod pagination;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
