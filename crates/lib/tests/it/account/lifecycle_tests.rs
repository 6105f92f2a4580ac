//! Account lifecycle tests: sign up, sign in, sign out and profile edits
//!
//! Drives the store the way the sign-in and profile screens do.

use gatehouse::{AuthMode, UserRecord};

use crate::helpers::*;

// ===== SIGN UP =====

#[tokio::test]
async fn test_sign_up_signs_in_and_returns_to_sign_in_mode() {
    let (backend, _dir) = test_backend().await;
    let mut store = open_store(backend, no_sensor()).await;

    assert_eq!(store.toggle_auth_mode(), AuthMode::SignUp);
    assert!(store.sign_up("alice", "secret1", "secret1").await);

    assert_signed_in_as(&store, "alice");
    assert_eq!(store.auth_mode(), AuthMode::SignIn);
    assert!(store.is_authenticated());
}

#[tokio::test]
async fn test_any_short_password_is_rejected() {
    let (backend, _dir) = test_backend().await;
    let mut store = open_store(backend, no_sensor()).await;

    let usernames = ["a", "bob", "Carol", "d.e.f", "user_with_long_name"];
    let passwords = ["x", "xy", "abc", "1234", "five5", "  abc  ", "é"];
    for username in usernames {
        for password in passwords {
            assert!(
                !store.sign_up(username, password, password).await,
                "{username}/{password} should be rejected"
            );
        }
    }
    assert!(store.users().is_empty());
}

#[tokio::test]
async fn test_duplicate_username_always_rejected() {
    let (backend, _dir) = test_backend().await;
    let mut store = open_store(backend, no_sensor()).await;
    sign_up_all(&mut store, &[("alice", "secret1")]).await;

    for password in ["secret1", "another1", "completely different"] {
        assert!(!store.sign_up("alice", password, password).await);
    }
    assert_eq!(store.users().len(), 1);
    assert_eq!(store.users()[0].password, "secret1");
}

#[tokio::test]
async fn test_boundary_whitespace_rejected_on_sign_up() {
    let (backend, _dir) = test_backend().await;
    let mut store = open_store(backend, no_sensor()).await;

    assert!(!store.sign_up(" bob", "secret1", "secret1").await);
    assert!(!store.sign_up("bob\t", "secret1", "secret1").await);
    assert!(!store.sign_up("bob", "secret1\n", "secret1").await);
    assert!(store.sign_up("bob", "secret1", "secret1").await);

    assert_eq!(store.users(), &[UserRecord::new("bob", "secret1")]);
}

#[tokio::test]
async fn test_emoji_password_long_enough() {
    let (backend, _dir) = test_backend().await;
    let mut store = open_store(backend, no_sensor()).await;

    // Three surrogate pairs make six UTF-16 units
    assert!(store.sign_up("bob", "😀😀😀", "😀😀😀").await);
    store.sign_out().await;
    assert!(store.sign_in("bob", "😀😀😀").await);
}

// ===== SIGN IN =====

#[tokio::test]
async fn test_successful_sign_up_then_sign_in() {
    let accounts = [
        ("alice", "secret1"),
        ("bob", "hunter22"),
        ("carol", "p@ssw0rd!"),
        ("Dave", "correct horse"),
    ];
    let (backend, _dir) = test_backend().await;
    let mut store = open_store(backend, no_sensor()).await;
    sign_up_all(&mut store, &accounts).await;

    for (username, password) in accounts {
        store.sign_out().await;
        assert!(store.sign_in(username, password).await);
        assert_signed_in_as(&store, username);
    }
}

#[tokio::test]
async fn test_sign_in_repeatedly_only_moves_session() {
    let (backend, _dir) = test_backend().await;
    let mut store = open_store(backend, no_sensor()).await;
    sign_up_all(&mut store, &[("alice", "secret1"), ("bob", "hunter22")]).await;
    let users = store.users().to_vec();

    for _ in 0..5 {
        assert!(store.sign_in("alice", "secret1").await);
        assert_eq!(store.users(), users.as_slice());
    }
    assert_signed_in_as(&store, "alice");
}

#[tokio::test]
async fn test_sign_in_is_lenient_about_whitespace() {
    let (backend, _dir) = test_backend().await;
    let mut store = open_store(backend, no_sensor()).await;
    sign_up_all(&mut store, &[("alice", "secret1")]).await;
    store.sign_out().await;

    // Sign-up would reject these; sign-in trims them
    assert!(store.sign_in(" alice", "secret1 ").await);
    assert_signed_in_as(&store, "alice");
}

#[tokio::test]
async fn test_sign_in_is_case_sensitive() {
    let (backend, _dir) = test_backend().await;
    let mut store = open_store(backend, no_sensor()).await;
    sign_up_all(&mut store, &[("alice", "secret1")]).await;
    store.sign_out().await;

    assert!(!store.sign_in("Alice", "secret1").await);
    assert!(!store.sign_in("alice", "SECRET1").await);
    assert!(store.current_user().is_none());
}

#[tokio::test]
async fn test_sign_in_scenario() {
    let (backend, _dir) = test_backend().await;
    let mut store = open_store(backend, no_sensor()).await;

    assert!(store.sign_up("alice", "secret1", "secret1").await);
    assert_eq!(store.users(), &[UserRecord::new("alice", "secret1")]);
    assert_signed_in_as(&store, "alice");

    store.sign_out().await;
    assert!(store.current_user().is_none());

    assert!(!store.sign_in("alice", "wrong").await);
    assert!(store.current_user().is_none());

    assert!(store.sign_in("alice", "secret1").await);
    assert_signed_in_as(&store, "alice");
}

// ===== PROFILE =====

#[tokio::test]
async fn test_avatar_survives_sign_out_and_back_in() {
    let (backend, _dir) = test_backend().await;
    let mut store = open_store(backend, no_sensor()).await;
    sign_up_all(&mut store, &[("alice", "secret1")]).await;

    assert!(store.update_avatar("file:///photos/alice.jpg").await);
    assert_session_in_sync(&store);

    store.sign_out().await;
    assert!(store.sign_in("alice", "secret1").await);
    assert_eq!(
        store.current_user().unwrap().avatar.as_deref(),
        Some("file:///photos/alice.jpg")
    );
}

#[tokio::test]
async fn test_avatar_replaced() {
    let (backend, _dir) = test_backend().await;
    let mut store = open_store(backend, no_sensor()).await;
    sign_up_all(&mut store, &[("alice", "secret1")]).await;

    assert!(store.update_avatar("file:///one.png").await);
    assert!(store.update_avatar("file:///two.png").await);
    assert_eq!(store.users()[0].avatar.as_deref(), Some("file:///two.png"));
    assert_session_in_sync(&store);
}

#[tokio::test]
async fn test_avatar_without_session_changes_nothing() {
    let (backend, _dir) = test_backend().await;
    let mut store = open_store(backend, no_sensor()).await;
    sign_up_all(&mut store, &[("alice", "secret1")]).await;
    store.sign_out().await;

    assert!(!store.update_avatar("file:///nope.png").await);
    assert_eq!(store.users(), &[UserRecord::new("alice", "secret1")]);
    assert!(store.current_user().is_none());
}

#[tokio::test]
async fn test_sign_out_twice_is_harmless() {
    let (backend, _dir) = test_backend().await;
    let mut store = open_store(backend, no_sensor()).await;
    sign_up_all(&mut store, &[("alice", "secret1")]).await;

    store.sign_out().await;
    store.sign_out().await;
    assert!(store.current_user().is_none());
    assert_eq!(store.users().len(), 1);
}
