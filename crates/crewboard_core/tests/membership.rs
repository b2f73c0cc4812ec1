use crewboard_core::{
    AccountCreateParams, AccountService, BoardCreateParams, BoardService, MemberAddParams,
    MemberRole, MemoryStore,
};

fn create_account(store: &mut MemoryStore, username: &str, phone: &str) -> crewboard_core::Account {
    AccountService::create_account(
        store,
        AccountCreateParams {
            username: username.to_string(),
            phone_number: phone.to_string(),
            password_hash: "hash".to_string(),
            display_name: None,
            avatar_ref: None,
        },
    )
}

fn create_board(store: &mut MemoryStore, title: &str, creator: i64) -> crewboard_core::Board {
    BoardService::create_board(
        store,
        BoardCreateParams {
            title: title.to_string(),
            description: None,
            color: None,
            created_by: creator,
        },
    )
}

#[test]
fn add_member_defaults_role_to_editor() {
    let mut store = MemoryStore::new();
    let alice = create_account(&mut store, "alice", "+15550001");
    let bob = create_account(&mut store, "bob", "+15550002");
    let board = create_board(&mut store, "Shared", alice.id);

    let membership = BoardService::add_member(
        &mut store,
        MemberAddParams {
            board_id: board.id,
            account_id: bob.id,
            role: None,
        },
    );
    assert_eq!(membership.role, MemberRole::Editor);
}

#[test]
fn duplicate_add_returns_existing_membership_with_original_role() {
    let mut store = MemoryStore::new();
    let alice = create_account(&mut store, "alice", "+15550001");
    let bob = create_account(&mut store, "bob", "+15550002");
    let board = create_board(&mut store, "Shared", alice.id);

    let first = BoardService::add_member(
        &mut store,
        MemberAddParams {
            board_id: board.id,
            account_id: bob.id,
            role: Some(MemberRole::Viewer),
        },
    );
    let second = BoardService::add_member(
        &mut store,
        MemberAddParams {
            board_id: board.id,
            account_id: bob.id,
            role: Some(MemberRole::Admin),
        },
    );

    // Idempotent add, not an upsert: same row, role untouched.
    assert_eq!(second.id, first.id);
    assert_eq!(second.role, MemberRole::Viewer);
    let rows = store
        .memberships()
        .filter(|m| m.board_id == board.id && m.account_id == bob.id)
        .count();
    assert_eq!(rows, 1);
}

#[test]
fn creator_rejoining_keeps_bootstrap_admin_row() {
    let mut store = MemoryStore::new();
    let alice = create_account(&mut store, "alice", "+15550001");
    let board = create_board(&mut store, "Mine", alice.id);

    let membership = BoardService::add_member(
        &mut store,
        MemberAddParams {
            board_id: board.id,
            account_id: alice.id,
            role: Some(MemberRole::Viewer),
        },
    );
    assert_eq!(membership.role, MemberRole::Admin);
}

#[test]
fn remove_member_deletes_the_single_matching_row() {
    let mut store = MemoryStore::new();
    let alice = create_account(&mut store, "alice", "+15550001");
    let bob = create_account(&mut store, "bob", "+15550002");
    let board = create_board(&mut store, "Shared", alice.id);
    BoardService::add_member(
        &mut store,
        MemberAddParams {
            board_id: board.id,
            account_id: bob.id,
            role: None,
        },
    );

    assert!(BoardService::remove_member(&mut store, board.id, bob.id));
    assert!(!BoardService::remove_member(&mut store, board.id, bob.id));
    assert!(store
        .memberships()
        .all(|m| !(m.board_id == board.id && m.account_id == bob.id)));
}

#[test]
fn set_member_role_updates_existing_row() {
    let mut store = MemoryStore::new();
    let alice = create_account(&mut store, "alice", "+15550001");
    let bob = create_account(&mut store, "bob", "+15550002");
    let board = create_board(&mut store, "Shared", alice.id);
    BoardService::add_member(
        &mut store,
        MemberAddParams {
            board_id: board.id,
            account_id: bob.id,
            role: Some(MemberRole::Viewer),
        },
    );

    let updated = BoardService::set_member_role(&mut store, board.id, bob.id, MemberRole::Admin)
        .expect("membership exists");
    assert_eq!(updated.role, MemberRole::Admin);
    assert_eq!(updated.account_id, bob.id);
}

#[test]
fn set_member_role_on_missing_membership_returns_none() {
    let mut store = MemoryStore::new();
    let alice = create_account(&mut store, "alice", "+15550001");
    let board = create_board(&mut store, "Solo", alice.id);

    let result = BoardService::set_member_role(&mut store, board.id, 99, MemberRole::Viewer);
    assert!(result.is_none());
}

#[test]
fn role_names_round_trip_through_parse() {
    for role in [MemberRole::Viewer, MemberRole::Editor, MemberRole::Admin] {
        assert_eq!(MemberRole::parse(role.as_str()), Some(role));
    }
    assert_eq!(MemberRole::parse("owner"), None);
}
