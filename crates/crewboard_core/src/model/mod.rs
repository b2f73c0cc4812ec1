//! Canonical domain model for the task-board core.
//!
//! # Responsibility
//! - Define the entity records and enumerated fields shared by store,
//!   query, and service layers.
//! - Keep one canonical shape per entity; derived views live in `query`.
//!
//! # Invariants
//! - Every entity is identified by a monotonically assigned integer handle.
//! - Handles are never reused within process lifetime, even after deletion.
//! - Optional fields default to absent, never to empty strings.

pub mod account;
pub mod board;
pub mod membership;
pub mod todo;

/// Opaque integer identifier assigned by the entity store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type Handle = i64;
