//! Account domain model.
//!
//! # Responsibility
//! - Define the registered-user record referenced by memberships and todos.
//!
//! # Invariants
//! - `username` and `phone_number` are unique; the calling layer checks
//!   uniqueness before invoking account creation.
//! - `password_hash` is pre-hashed by the caller and stored verbatim.

use super::Handle;
use serde::{Deserialize, Serialize};

/// Stable handle for a registered account.
pub type AccountId = Handle;

/// Registered user of the task-board application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Store-assigned handle.
    pub id: AccountId,
    /// Unique login name.
    pub username: String,
    /// Unique phone number in the form the caller registered it.
    pub phone_number: String,
    /// Credential hash, opaque to this layer.
    pub password_hash: String,
    /// Optional user-facing display name.
    pub display_name: Option<String>,
    /// Optional avatar reference (path or object key, opaque here).
    pub avatar_ref: Option<String>,
}
