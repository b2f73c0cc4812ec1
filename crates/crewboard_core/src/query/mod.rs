//! Derived read views over the entity store.
//!
//! # Responsibility
//! - Join entity collections into the composite shapes callers render:
//!   board-with-counts, board-with-members, todo-with-assignee.
//! - Stay pure: no query function mutates the store.
//!
//! # Invariants
//! - `list_boards_for_account` applies set semantics on board handle: a
//!   board reached via both creation and membership appears exactly once.
//! - A membership or assignee pointing at a missing account resolves as
//!   absence at read time (row skipped / `assignee: None`), never an error.

use crate::model::account::{Account, AccountId};
use crate::model::board::{Board, BoardId};
use crate::model::membership::Membership;
use crate::model::todo::Todo;
use crate::store::MemoryStore;
use serde::{Deserialize, Serialize};

/// Board annotated with todo and member counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardWithCounts {
    pub board: Board,
    /// Number of todos whose `board_id` matches.
    pub todo_count: usize,
    /// Number of memberships whose `board_id` matches.
    pub member_count: usize,
}

/// One membership row with its resolved account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardMember {
    pub membership: Membership,
    pub account: Account,
}

/// Board joined with every resolvable member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardWithMembers {
    pub board: Board,
    pub members: Vec<BoardMember>,
}

/// Todo with its assignee resolved, when one is set and still present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoWithAssignee {
    pub todo: Todo,
    pub assignee: Option<Account>,
}

/// Lists every board the account created or is a member of, each annotated
/// with todo and member counts.
///
/// # Contract
/// - Result set is the union of created and member boards, deduplicated by
///   board handle.
/// - Ordering follows store enumeration (handle order); callers must not
///   attach semantics to it.
pub fn list_boards_for_account(store: &MemoryStore, account_id: AccountId) -> Vec<BoardWithCounts> {
    store
        .boards()
        .filter(|board| {
            board.created_by == account_id
                || store
                    .memberships()
                    .any(|m| m.board_id == board.id && m.account_id == account_id)
        })
        .map(|board| BoardWithCounts {
            board: board.clone(),
            todo_count: store.todos().filter(|t| t.board_id == board.id).count(),
            member_count: store
                .memberships()
                .filter(|m| m.board_id == board.id)
                .count(),
        })
        .collect()
}

/// Loads one board joined with its resolved members.
///
/// Returns `None` when the board does not exist. Membership rows whose
/// account is no longer present are skipped rather than failing the read.
pub fn get_board_with_members(store: &MemoryStore, board_id: BoardId) -> Option<BoardWithMembers> {
    let board = store.board(board_id)?.clone();
    let members = store
        .memberships()
        .filter(|m| m.board_id == board_id)
        .filter_map(|m| {
            store.account(m.account_id).map(|account| BoardMember {
                membership: m.clone(),
                account: account.clone(),
            })
        })
        .collect();
    Some(BoardWithMembers { board, members })
}

/// Lists all todos on one board with assignees resolved.
///
/// An unset assignee, or one referencing a missing account, yields
/// `assignee: None`. A missing board yields an empty sequence, matching the
/// behavior of a board that simply has no todos.
pub fn list_todos(store: &MemoryStore, board_id: BoardId) -> Vec<TodoWithAssignee> {
    store
        .todos()
        .filter(|todo| todo.board_id == board_id)
        .map(|todo| TodoWithAssignee {
            todo: todo.clone(),
            assignee: todo
                .assigned_to
                .and_then(|account_id| store.account(account_id))
                .cloned(),
        })
        .collect()
}
