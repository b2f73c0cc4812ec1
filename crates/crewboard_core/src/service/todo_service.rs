//! Todo use-case service.
//!
//! # Responsibility
//! - Create, update, and delete todos with data-model defaulting.
//! - Refresh `updated_at` on every mutation.
//!
//! # Invariants
//! - `update_todo` bumps `updated_at` even when no field changes; a no-op
//!   update is still an update. Deliberate simplification, must be kept.
//! - `created_at` and `updated_at` are equal on a freshly created todo.
//! - Status transitions are unrestricted in both directions.

use crate::model::account::AccountId;
use crate::model::board::BoardId;
use crate::model::todo::{Todo, TodoId, TodoPriority, TodoStatus};
use crate::store::MemoryStore;
use log::info;

/// Input for todo creation. Optional fields fall back to the data-model
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoCreateParams {
    pub board_id: BoardId,
    pub title: String,
    pub description: Option<String>,
    pub due_at: Option<i64>,
    pub priority: Option<TodoPriority>,
    pub status: Option<TodoStatus>,
    pub assigned_to: Option<AccountId>,
    pub created_by: AccountId,
}

/// Partial todo update. Absent fields are left unchanged.
///
/// `assigned_to` is tri-state: `None` leaves the assignee alone,
/// `Some(Some(id))` assigns, `Some(None)` clears the assignment. The other
/// optional fields never need clearing in the observed calling layer, so
/// they stay plain `Option`s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_at: Option<i64>,
    pub priority: Option<TodoPriority>,
    pub status: Option<TodoStatus>,
    pub assigned_to: Option<Option<AccountId>>,
}

/// Todo mutation entry points over a borrowed store.
pub struct TodoService;

impl TodoService {
    /// Creates one todo.
    ///
    /// # Contract
    /// - Status defaults to `todo`, priority to `medium`.
    /// - `created_at == updated_at` on the returned record.
    pub fn create_todo(store: &mut MemoryStore, params: TodoCreateParams) -> Todo {
        let stamp = store.now_ms();
        let todo_id = store.todos.insert_with(|id| Todo {
            id,
            board_id: params.board_id,
            title: params.title,
            description: params.description,
            due_at: params.due_at,
            priority: params.priority.unwrap_or_default(),
            status: params.status.unwrap_or_default(),
            assigned_to: params.assigned_to,
            created_by: params.created_by,
            created_at: stamp,
            updated_at: stamp,
        });
        let created = store
            .todo(todo_id)
            .cloned()
            .expect("inserted todo is immediately visible");
        info!(
            "event=todo_create module=service status=ok todo_id={} board_id={} priority={} todo_status={}",
            created.id,
            created.board_id,
            created.priority.as_str(),
            created.status.as_str()
        );
        created
    }

    /// Merges the present fields of `update` into one todo and refreshes
    /// `updated_at`.
    ///
    /// Returns the updated todo, or `None` when no such todo exists. The
    /// timestamp refresh happens regardless of which fields (if any)
    /// actually change.
    pub fn update_todo(
        store: &mut MemoryStore,
        todo_id: TodoId,
        update: &TodoUpdate,
    ) -> Option<Todo> {
        let stamp = store.now_ms();
        let todo = store.todos.get_mut(todo_id)?;
        if let Some(title) = &update.title {
            todo.title = title.clone();
        }
        if let Some(description) = &update.description {
            todo.description = Some(description.clone());
        }
        if let Some(due_at) = update.due_at {
            todo.due_at = Some(due_at);
        }
        if let Some(priority) = update.priority {
            todo.priority = priority;
        }
        if let Some(status) = update.status {
            todo.status = status;
        }
        if let Some(assigned_to) = update.assigned_to {
            todo.assigned_to = assigned_to;
        }
        todo.updated_at = stamp;
        let updated = todo.clone();
        info!(
            "event=todo_update module=service status=ok todo_id={} todo_status={}",
            todo_id,
            updated.status.as_str()
        );
        Some(updated)
    }

    /// Deletes one todo, reporting whether it existed.
    pub fn delete_todo(store: &mut MemoryStore, todo_id: TodoId) -> bool {
        let deleted = store.todos.delete(todo_id);
        if deleted {
            info!(
                "event=todo_delete module=service status=ok todo_id={}",
                todo_id
            );
        }
        deleted
    }
}
