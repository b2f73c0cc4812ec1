//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable that exercises one write/read round
//!   through `crewboard_core`.
//! - Keep output deterministic for quick local sanity checks.

use crewboard_core::{
    AccountCreateParams, AccountService, BoardCreateParams, BoardService, MemoryStore,
};

fn main() {
    let mut store = MemoryStore::new();

    let account = AccountService::create_account(
        &mut store,
        AccountCreateParams {
            username: "smoke".to_string(),
            phone_number: "+15550000000".to_string(),
            password_hash: "unused".to_string(),
            display_name: None,
            avatar_ref: None,
        },
    );
    let board = BoardService::create_board(
        &mut store,
        BoardCreateParams {
            title: "Smoke board".to_string(),
            description: None,
            color: None,
            created_by: account.id,
        },
    );
    let boards = crewboard_core::list_boards_for_account(&store, account.id);

    println!("crewboard_core version={}", crewboard_core::core_version());
    println!(
        "crewboard_core smoke board_id={} member_count={} ok={}",
        board.id,
        boards.first().map(|b| b.member_count).unwrap_or(0),
        BoardService::delete_board(&mut store, board.id)
    );
}
