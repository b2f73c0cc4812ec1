//! Board domain model.
//!
//! # Responsibility
//! - Define the board record and its color tag enumeration.
//!
//! # Invariants
//! - `created_by` and `created_at` are immutable after creation.
//! - Deleting a board cascades to its memberships and todos; the cascade is
//!   owned by the service layer, not by this record.

use super::account::AccountId;
use super::Handle;
use serde::{Deserialize, Serialize};

/// Stable handle for a board.
pub type BoardId = Handle;

/// Color tag shown by board UIs. Purely presentational metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardColor {
    #[default]
    Primary,
    Secondary,
    Accent,
    Warning,
    Error,
}

impl BoardColor {
    /// Stable wire name for this color.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Parses a wire name. Returns `None` for values outside the allowed set,
    /// letting the calling layer map that to an invalid-value response.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "accent" => Some(Self::Accent),
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Collaborative board owning a set of todos and memberships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Store-assigned handle.
    pub id: BoardId,
    /// Board title.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Color tag, defaults to `primary`.
    pub color: BoardColor,
    /// Creating account. Not automatically kept consistent with the
    /// accounts collection; resolved at read time.
    pub created_by: AccountId,
    /// Epoch ms creation timestamp.
    pub created_at: i64,
}
