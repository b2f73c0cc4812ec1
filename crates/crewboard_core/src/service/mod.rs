//! Mutation orchestrators.
//!
//! # Responsibility
//! - Implement multi-step writes with their side effects: bootstrap
//!   membership on board creation, cascade on board deletion.
//! - Keep every operation total: not-found surfaces as `None`/`false`,
//!   never as an error.
//!
//! # Invariants
//! - Service operations reach entity state only through the store passed
//!   in by the composition root; no service holds entity state of its own.

pub mod account_service;
pub mod board_service;
pub mod todo_service;
