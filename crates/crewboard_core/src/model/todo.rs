//! Todo domain model.
//!
//! # Responsibility
//! - Define the todo record plus its status and priority enumerations.
//!
//! # Invariants
//! - `updated_at` is refreshed on every mutation and strictly increases,
//!   even when the mutation changes no field values.
//! - Status transitions are unrestricted: any state may move to any other
//!   (`completed -> todo` is legal and used by toggle-completion).

use super::account::AccountId;
use super::board::BoardId;
use super::Handle;
use serde::{Deserialize, Serialize};

/// Stable handle for a todo.
pub type TodoId = Handle;

/// Urgency tag for a todo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl TodoPriority {
    /// Stable wire name for this priority.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Parses a wire name. Returns `None` for values outside the allowed set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

/// Workflow state of a todo. No ordering is enforced and no state is
/// terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
}

impl TodoStatus {
    /// Stable wire name for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Parses a wire name. Returns `None` for values outside the allowed set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "todo" => Some(Self::Todo),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Actionable item scoped to one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-assigned handle.
    pub id: TodoId,
    /// Owning board.
    pub board_id: BoardId,
    /// Todo title.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Optional due date, epoch ms.
    pub due_at: Option<i64>,
    /// Urgency tag, defaults to `medium`.
    pub priority: TodoPriority,
    /// Workflow state, defaults to `todo`.
    pub status: TodoStatus,
    /// Optional assignee account. Resolved at read time; a dangling
    /// reference reads back as "assignee absent".
    pub assigned_to: Option<AccountId>,
    /// Creating account.
    pub created_by: AccountId,
    /// Epoch ms creation timestamp.
    pub created_at: i64,
    /// Epoch ms last-mutation timestamp. Strictly increases on every update.
    pub updated_at: i64,
}
