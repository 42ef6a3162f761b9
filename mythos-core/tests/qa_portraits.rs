//! QA tests for the portrait flow without API calls.
//!
//! These tests verify:
//! - Prompt building from name, kind, and aliases
//! - Successful generation replaces the image reference
//! - Failed generation leaves the existing reference untouched
//! - Sessions without a client reject generation
//! - Manual upload encodes local files as data URLs
//!
//! Run with: `cargo test -p mythos-core --test qa_portraits`

use mythos_core::catalog::{Character, CharacterId, Roster};
use mythos_core::portrait::portrait_prompt;
use mythos_core::session::{CatalogSession, SessionError};
use mythos_core::testing::TestHarness;
use mythos_core::themes::hellas::{self, Kind, Work};

#[test]
fn test_prompt_names_character_kind_and_aliases() {
    let roster = hellas::seed_roster();
    let zeus = roster.get(CharacterId(6)).unwrap();

    let prompt = portrait_prompt(zeus);
    assert!(prompt.contains("Zeus"));
    assert!(prompt.contains("Dios"));
    assert!(prompt.contains("Júpiter"));
}

#[test]
fn test_prompt_without_aliases_skips_the_clause() {
    let character: Character<Work, Kind> =
        Character::new(CharacterId(90), "Pandora", Kind::Mortal);

    let prompt = portrait_prompt(&character);
    assert!(prompt.contains("Pandora"));
    assert!(!prompt.contains("también conocido"));
}

#[test]
fn test_generation_success_replaces_image() {
    let mut harness = TestHarness::seeded();
    harness.expect_portrait("data:image/png;base64,Zm9v");

    let id = CharacterId(17); // Heracles
    harness.generate_portrait(id).unwrap();
    assert_eq!(
        harness.session.get(id).unwrap().image_url,
        "data:image/png;base64,Zm9v"
    );
}

#[test]
fn test_generation_failure_preserves_image() {
    let mut harness = TestHarness::seeded();
    harness.expect_portrait_failure("safety block");

    let id = CharacterId(17);
    let before = harness.session.get(id).unwrap().image_url.clone();
    let err = harness.generate_portrait(id).unwrap_err();
    assert_eq!(err, "safety block");
    assert_eq!(harness.session.get(id).unwrap().image_url, before);
}

#[tokio::test]
async fn test_session_without_client_rejects_generation() {
    let mut session: CatalogSession<Work, Kind> = CatalogSession::new(hellas::seed_roster());

    match session.generate_portrait(CharacterId(6)).await {
        Err(SessionError::PortraitUnavailable) => {}
        other => panic!("expected PortraitUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_upload_replaces_image_with_data_url() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("retrato.png");
    tokio::fs::write(&path, b"fake png bytes").await.unwrap();

    let mut session: CatalogSession<(), Kind> = CatalogSession::new(Roster::from_characters(
        vec![Character::new(CharacterId(1), "Pandora", Kind::Mortal)],
    ));
    session.upload_portrait(CharacterId(1), &path).await.unwrap();

    let image_url = &session.get(CharacterId(1)).unwrap().image_url;
    assert!(image_url.starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn test_upload_for_unknown_character_fails() {
    let mut session: CatalogSession<Work, Kind> = CatalogSession::new(Roster::new());

    match session.upload_portrait(CharacterId(42), "missing.png").await {
        Err(SessionError::UnknownCharacter(id)) => assert_eq!(id, CharacterId(42)),
        other => panic!("expected UnknownCharacter, got {other:?}"),
    }
}
