//! In-memory entity store.
//!
//! # Responsibility
//! - Hold canonical state for all four entity collections.
//! - Assign handles and timestamps for every write path.
//!
//! # Invariants
//! - Handles are assigned per entity kind, start at 1, strictly increase,
//!   and are never reassigned after deletion.
//! - Timestamps drawn from `now_ms` strictly increase within one store.
//! - The store is the single owner of entity state; no other component
//!   keeps its own copy.
//!
//! # Concurrency
//! - All mutating operations take `&mut self`, so compound writes cannot be
//!   interleaved within one store. An embedding that serves concurrent
//!   callers must serialize access (for example behind a `Mutex`); this is
//!   a hard requirement of the execution model, not an optimization.

use crate::model::account::{Account, AccountId};
use crate::model::board::{Board, BoardId};
use crate::model::membership::{Membership, MembershipId};
use crate::model::todo::{Todo, TodoId};
use crate::model::Handle;
use log::info;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

const FIRST_HANDLE: Handle = 1;

/// Handle-indexed collection for one entity kind.
///
/// `BTreeMap` keeps enumeration deterministic in handle (insertion) order,
/// though callers must not attach semantics to that order.
#[derive(Debug)]
pub struct Table<E> {
    rows: BTreeMap<Handle, E>,
    next_handle: Handle,
}

impl<E> Default for Table<E> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_handle: FIRST_HANDLE,
        }
    }
}

impl<E> Table<E> {
    /// Looks up one row. Absence is a valid outcome, never an error.
    pub fn get(&self, handle: Handle) -> Option<&E> {
        self.rows.get(&handle)
    }

    pub(crate) fn get_mut(&mut self, handle: Handle) -> Option<&mut E> {
        self.rows.get_mut(&handle)
    }

    /// Inserts one row built from the next unused handle.
    ///
    /// # Invariants
    /// - Assigned handles strictly increase and are never reused, even
    ///   after deletion.
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(Handle) -> E) -> Handle {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.rows.insert(handle, build(handle));
        handle
    }

    /// Removes one row, reporting whether it existed.
    pub(crate) fn delete(&mut self, handle: Handle) -> bool {
        self.rows.remove(&handle).is_some()
    }

    /// Drops every row failing the predicate and returns how many were
    /// removed. Used by cascade deletes.
    pub(crate) fn retain(&mut self, keep: impl FnMut(&Handle, &mut E) -> bool) -> usize {
        let before = self.rows.len();
        self.rows.retain(keep);
        before - self.rows.len()
    }

    /// Enumerates all current rows.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Canonical in-process store for accounts, boards, memberships, and todos.
///
/// Explicitly constructed by the composition root and passed by reference
/// to query functions (`&`) and service operations (`&mut`). Tests create
/// one fresh store each for isolation. A durable backend can be substituted
/// behind the same accessor surface later.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) accounts: Table<Account>,
    pub(crate) boards: Table<Board>,
    pub(crate) memberships: Table<Membership>,
    pub(crate) todos: Table<Todo>,
    last_stamp_ms: i64,
}

impl MemoryStore {
    /// Creates an empty store.
    ///
    /// # Side effects
    /// - Emits a `store_open` logging event.
    pub fn new() -> Self {
        info!("event=store_open module=store status=ok mode=memory");
        Self::default()
    }

    /// Returns the current timestamp in epoch ms, guaranteed strictly
    /// greater than any timestamp previously returned by this store.
    ///
    /// Wall clock alone cannot provide strict increase for calls within the
    /// same millisecond, so the store remembers the last stamp it handed out.
    pub(crate) fn now_ms(&mut self) -> i64 {
        let wall = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or(0);
        let stamp = wall.max(self.last_stamp_ms + 1);
        self.last_stamp_ms = stamp;
        stamp
    }

    /// Looks up one account by handle.
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Looks up one board by handle.
    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.get(id)
    }

    /// Looks up one membership by handle.
    pub fn membership(&self, id: MembershipId) -> Option<&Membership> {
        self.memberships.get(id)
    }

    /// Looks up one todo by handle.
    pub fn todo(&self, id: TodoId) -> Option<&Todo> {
        self.todos.get(id)
    }

    /// Enumerates all accounts.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    /// Enumerates all boards.
    pub fn boards(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }

    /// Enumerates all memberships.
    pub fn memberships(&self) -> impl Iterator<Item = &Membership> {
        self.memberships.iter()
    }

    /// Enumerates all todos.
    pub fn todos(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter()
    }
}
