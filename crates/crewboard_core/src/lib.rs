//! Core domain logic for the Crewboard task-board application.
//! This crate is the single source of truth for business invariants:
//! handle assignment, membership idempotence, cascade deletion, and
//! timestamp refresh all live here.

pub mod identity;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod store;

pub use identity::{
    normalize_phone_number, IdentityVerifier, VerificationChallenge, VerifiedIdentity, VerifyError,
    VerifyResult,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::account::{Account, AccountId};
pub use model::board::{Board, BoardColor, BoardId};
pub use model::membership::{MemberRole, Membership, MembershipId};
pub use model::todo::{Todo, TodoId, TodoPriority, TodoStatus};
pub use model::Handle;
pub use query::{
    get_board_with_members, list_boards_for_account, list_todos, BoardMember, BoardWithCounts,
    BoardWithMembers, TodoWithAssignee,
};
pub use service::account_service::{
    AccountCreateParams, AccountService, RegisterError, VerifiedRegisterParams,
};
pub use service::board_service::{
    BoardCreateParams, BoardService, BoardUpdate, MemberAddParams,
};
pub use service::todo_service::{TodoCreateParams, TodoService, TodoUpdate};
pub use store::MemoryStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
