//! # apis-core
//!
//! Core types, ID prefixes, and error types for apis.
//!
//! This crate provides the foundational types shared across all apis crates:
//! - Entity structs for apiaries, hives, inspections, tasks, alerts,
//!   recommendations, and users
//! - Closed status and scale enums
//! - Creation inputs with validation
//! - ID prefix constants
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod inputs;
pub mod responses;
