//! Repository modules implementing storage operations for every apis entity.
//!
//! Each module adds methods to `ApisService` via `impl ApisService` blocks.

pub mod advisor;
pub mod alert;
pub mod apiary;
pub mod hive;
pub mod inspection;
pub mod recommendation;
pub mod task;
pub mod user;
