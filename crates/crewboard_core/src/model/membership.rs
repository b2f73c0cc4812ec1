//! Membership domain model.
//!
//! # Responsibility
//! - Define the join record granting an account a role on a board.
//!
//! # Invariants
//! - At most one membership exists per (board, account) pair; adding a
//!   duplicate returns the existing row unchanged (idempotent add).
//! - Role stays as granted; duplicate adds never upgrade or downgrade it.

use super::account::AccountId;
use super::board::BoardId;
use super::Handle;
use serde::{Deserialize, Serialize};

/// Stable handle for a membership.
pub type MembershipId = Handle;

/// Role tag attached to a membership. Authorization policy built on these
/// tags belongs to the calling layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Viewer,
    #[default]
    Editor,
    Admin,
}

impl MemberRole {
    /// Stable wire name for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Editor => "editor",
            Self::Admin => "admin",
        }
    }

    /// Parses a wire name. Returns `None` for values outside the allowed set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "viewer" => Some(Self::Viewer),
            "editor" => Some(Self::Editor),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// Join record linking an account to a board with a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// Store-assigned handle.
    pub id: MembershipId,
    /// Owning board.
    pub board_id: BoardId,
    /// Member account. Resolved at read time; may dangle if the account
    /// disappears, in which case read projections skip the row.
    pub account_id: AccountId,
    /// Granted role, defaults to `editor`.
    pub role: MemberRole,
}
