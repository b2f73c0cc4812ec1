//! Board and membership use-case service.
//!
//! # Responsibility
//! - Create, update, and delete boards, including the bootstrap admin
//!   membership and the cascade to dependent rows.
//! - Enforce the one-membership-per-(board, account) invariant.
//!
//! # Invariants
//! - `create_board` leaves no observable partial state: board and bootstrap
//!   membership become visible together (the `&mut` store borrow spans both
//!   writes, so no reader can interleave).
//! - `add_member` is idempotent, not an upsert: a duplicate add returns the
//!   existing membership with its original role.
//! - `delete_board` cascades unconditionally; dependent rows never block it.

use crate::model::account::AccountId;
use crate::model::board::{Board, BoardColor, BoardId};
use crate::model::membership::{MemberRole, Membership};
use crate::store::MemoryStore;
use log::info;

/// Input for board creation. Optional fields fall back to the data-model
/// defaults, never to empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCreateParams {
    pub title: String,
    pub description: Option<String>,
    pub color: Option<BoardColor>,
    pub created_by: AccountId,
}

/// Partial board update. Absent fields are left unchanged; `created_by`
/// and `created_at` are never touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<BoardColor>,
}

/// Input for adding one member to a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberAddParams {
    pub board_id: BoardId,
    pub account_id: AccountId,
    /// Granted role, defaults to `editor` when unset.
    pub role: Option<MemberRole>,
}

/// Board/membership mutation entry points over a borrowed store.
pub struct BoardService;

impl BoardService {
    /// Creates one board and its bootstrap admin membership for the creator.
    ///
    /// # Contract
    /// - Color defaults to `primary`, description to absent.
    /// - The bootstrap membership reuses `add_member`, so a creator who is
    ///   somehow already a member keeps their existing row.
    pub fn create_board(store: &mut MemoryStore, params: BoardCreateParams) -> Board {
        let created_at = store.now_ms();
        let board_id = store.boards.insert_with(|id| Board {
            id,
            title: params.title,
            description: params.description,
            color: params.color.unwrap_or_default(),
            created_by: params.created_by,
            created_at,
        });

        Self::add_member(
            store,
            MemberAddParams {
                board_id,
                account_id: params.created_by,
                role: Some(MemberRole::Admin),
            },
        );

        info!(
            "event=board_create module=service status=ok board_id={} created_by={}",
            board_id, params.created_by
        );
        store
            .board(board_id)
            .cloned()
            .expect("inserted board is immediately visible")
    }

    /// Merges the present fields of `update` into one board.
    ///
    /// Returns the updated board, or `None` when no such board exists.
    pub fn update_board(
        store: &mut MemoryStore,
        board_id: BoardId,
        update: &BoardUpdate,
    ) -> Option<Board> {
        let board = store.boards.get_mut(board_id)?;
        if let Some(title) = &update.title {
            board.title = title.clone();
        }
        if let Some(description) = &update.description {
            board.description = Some(description.clone());
        }
        if let Some(color) = update.color {
            board.color = color;
        }
        let updated = board.clone();
        info!(
            "event=board_update module=service status=ok board_id={}",
            board_id
        );
        Some(updated)
    }

    /// Deletes one board and cascades to every membership and todo scoped
    /// to it. Returns `false` when the board is absent.
    pub fn delete_board(store: &mut MemoryStore, board_id: BoardId) -> bool {
        if !store.boards.delete(board_id) {
            return false;
        }
        let memberships_removed = store.memberships.retain(|_, m| m.board_id != board_id);
        let todos_removed = store.todos.retain(|_, t| t.board_id != board_id);
        info!(
            "event=board_delete module=service status=ok board_id={} memberships_removed={} todos_removed={}",
            board_id, memberships_removed, todos_removed
        );
        true
    }

    /// Adds one member to a board, idempotently.
    ///
    /// # Contract
    /// - When a membership already exists for (board, account), it is
    ///   returned unchanged; the requested role is ignored.
    /// - Otherwise a new membership is created with role defaulted to
    ///   `editor`.
    pub fn add_member(store: &mut MemoryStore, params: MemberAddParams) -> Membership {
        if let Some(existing) = store
            .memberships()
            .find(|m| m.board_id == params.board_id && m.account_id == params.account_id)
        {
            return existing.clone();
        }

        let membership_id = store.memberships.insert_with(|id| Membership {
            id,
            board_id: params.board_id,
            account_id: params.account_id,
            role: params.role.unwrap_or_default(),
        });
        let created = store
            .membership(membership_id)
            .cloned()
            .expect("inserted membership is immediately visible");
        info!(
            "event=member_add module=service status=ok board_id={} account_id={} role={}",
            created.board_id,
            created.account_id,
            created.role.as_str()
        );
        created
    }

    /// Removes the membership linking `account_id` to `board_id`.
    ///
    /// Returns `false` when no such membership exists. By invariant at most
    /// one row can match.
    pub fn remove_member(store: &mut MemoryStore, board_id: BoardId, account_id: AccountId) -> bool {
        let membership_id = store
            .memberships()
            .find(|m| m.board_id == board_id && m.account_id == account_id)
            .map(|m| m.id);
        match membership_id {
            Some(id) => {
                store.memberships.delete(id);
                info!(
                    "event=member_remove module=service status=ok board_id={} account_id={}",
                    board_id, account_id
                );
                true
            }
            None => false,
        }
    }

    /// Sets the role on an existing membership.
    ///
    /// Returns the updated membership, or `None` when no membership links
    /// `account_id` to `board_id`. Enumerated-value validation happens in
    /// the calling layer; this operation stores the role it is given.
    pub fn set_member_role(
        store: &mut MemoryStore,
        board_id: BoardId,
        account_id: AccountId,
        role: MemberRole,
    ) -> Option<Membership> {
        let membership_id = store
            .memberships()
            .find(|m| m.board_id == board_id && m.account_id == account_id)
            .map(|m| m.id)?;
        let membership = store.memberships.get_mut(membership_id)?;
        membership.role = role;
        let updated = membership.clone();
        info!(
            "event=member_role_set module=service status=ok board_id={} account_id={} role={}",
            board_id,
            account_id,
            role.as_str()
        );
        Some(updated)
    }
}
