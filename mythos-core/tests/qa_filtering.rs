//! QA tests for the filter engine over the seeded rosters.
//!
//! These tests verify:
//! - All active criteria apply conjunctively
//! - Results come back sorted by lowercase name
//! - Visible counts track the criteria while totals do not
//! - The curated/added partition splits on the id threshold
//!
//! Run with: `cargo test -p mythos-core --test qa_filtering`

use mythos_core::catalog::{Character, CharacterId, Roster};
use mythos_core::filter::{filter_roster, FilterCriteria, SourcePartition, CURATED_ID_MAX};
use mythos_core::session::CatalogSession;
use mythos_core::themes::{hellas, kemet};

fn names<'a, T, K>(visible: &'a [&'a Character<T, K>]) -> Vec<&'a str> {
    visible.iter().map(|c| c.name.as_str()).collect()
}

// =============================================================================
// CONJUNCTIVE CRITERIA
// =============================================================================

#[test]
fn test_query_and_kind_apply_together() {
    let roster = kemet::seed_roster();

    // "an" alone matches gods and pharaohs alike.
    let by_query = filter_roster(&roster, &FilterCriteria::new().with_query("an"));
    assert!(names(&by_query).contains(&"Tutankamón"));
    assert!(names(&by_query).contains(&"Anubis"));

    // Adding a kind narrows it to the gods.
    let criteria = FilterCriteria::new()
        .with_query("an")
        .with_kind(kemet::Kind::Dios);
    let visible = filter_roster(&roster, &criteria);
    assert_eq!(names(&visible), vec!["Anubis", "Isis"]);
}

#[test]
fn test_query_matches_aliases_case_insensitively() {
    let roster = hellas::seed_roster();

    let visible = filter_roster(&roster, &FilterCriteria::new().with_query("JÚPITER"));
    assert_eq!(names(&visible), vec!["Zeus"]);
}

#[test]
fn test_empty_query_is_no_restriction() {
    let roster = hellas::seed_roster();

    let all = filter_roster(&roster, &FilterCriteria::new());
    let blank = filter_roster(&roster, &FilterCriteria::new().with_query(""));
    assert_eq!(all.len(), blank.len());
}

#[test]
fn test_tag_filter_selects_by_work() {
    let roster = hellas::seed_roster();

    let criteria = FilterCriteria::new().with_tag(hellas::Work::Odyssey);
    let visible = filter_roster(&roster, &criteria);
    assert!(names(&visible).contains(&"Odiseo"));
    assert!(names(&visible).contains(&"Poseidón"));
    assert!(!names(&visible).contains(&"Caos"));
}

#[test]
fn test_initial_filter_is_case_insensitive() {
    let roster = hellas::seed_roster();

    let lower = filter_roster(&roster, &FilterCriteria::new().with_initial('h'));
    let upper = filter_roster(&roster, &FilterCriteria::new().with_initial('H'));
    assert_eq!(names(&lower), names(&upper));
    assert!(names(&lower)
        .iter()
        .all(|n| n.to_uppercase().starts_with('H')));
    assert!(!lower.is_empty());
}

// =============================================================================
// ORDERING
// =============================================================================

#[test]
fn test_results_sorted_by_lowercase_name() {
    let roster = hellas::seed_roster();

    let visible = filter_roster(&roster, &FilterCriteria::new());
    let mut sorted: Vec<String> = visible.iter().map(|c| c.name.to_lowercase()).collect();
    let original = sorted.clone();
    sorted.sort();
    assert_eq!(original, sorted);
}

// =============================================================================
// PARTITION
// =============================================================================

#[test]
fn test_partition_splits_on_id_threshold() {
    let roster: Roster<(), ()> = Roster::from_characters(vec![
        Character::new(CharacterId(CURATED_ID_MAX), "Límite", ()),
        Character::new(CharacterId(CURATED_ID_MAX + 1), "Primero Añadido", ()),
    ]);

    let curated = filter_roster(
        &roster,
        &FilterCriteria::new().with_partition(SourcePartition::Curated),
    );
    assert_eq!(names(&curated), vec!["Límite"]);

    let added = filter_roster(
        &roster,
        &FilterCriteria::new().with_partition(SourcePartition::Added),
    );
    assert_eq!(names(&added), vec!["Primero Añadido"]);

    let all = filter_roster(&roster, &FilterCriteria::new());
    assert_eq!(all.len(), 2);
}

// =============================================================================
// SESSION COUNTS
// =============================================================================

#[test]
fn test_visible_count_tracks_criteria_total_does_not() {
    let mut session = CatalogSession::new(kemet::seed_roster());
    let total = session.total_count();
    assert_eq!(session.visible_count(), total);

    session.set_criteria(FilterCriteria::new().with_kind(kemet::Kind::Faraon));
    assert_eq!(session.visible_count(), 5);
    assert_eq!(session.total_count(), total);

    session.set_criteria(FilterCriteria::new().with_query("zzzz"));
    assert_eq!(session.visible_count(), 0);
    assert_eq!(session.total_count(), total);
}
