//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some` fields
//! generate SET clauses in the dynamic UPDATE SQL. Nullable columns use
//! `Option<Option<T>>` so a caller can clear them.

pub mod alert;
pub mod apiary;
pub mod hive;
pub mod inspection;
pub mod recommendation;
pub mod task;
