//! Testing utilities for the catalog.
//!
//! This module provides tools for integration testing:
//! - `MockPortraits` for deterministic portrait flows without API calls
//! - `TestHarness` for scripted catalog scenarios
//! - Assertion helpers for auditing the family graph

use crate::catalog::{CharacterDraft, CharacterId, Roster};
use crate::session::{CatalogSession, SessionError};
use crate::themes::hellas::{Kind, Work};

/// A scripted portrait-generation outcome.
#[derive(Debug, Clone)]
pub struct MockPortrait {
    /// The image reference on success, or a failure message.
    pub outcome: Result<String, String>,
}

impl MockPortrait {
    /// A successful generation returning the given image reference.
    pub fn image(data_url: impl Into<String>) -> Self {
        Self {
            outcome: Ok(data_url.into()),
        }
    }

    /// A failed generation.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

/// A mock portrait generator that returns scripted outcomes in order.
///
/// Use this for deterministic integration tests without API calls.
pub struct MockPortraits {
    responses: Vec<MockPortrait>,
    response_index: usize,
}

impl MockPortraits {
    pub fn new(responses: Vec<MockPortrait>) -> Self {
        Self {
            responses,
            response_index: 0,
        }
    }

    /// Add an outcome to the queue.
    pub fn queue(&mut self, portrait: MockPortrait) {
        self.responses.push(portrait);
    }

    /// Take the next scripted outcome, or a failure once exhausted.
    pub fn next_outcome(&mut self) -> Result<String, String> {
        if self.response_index < self.responses.len() {
            let outcome = self.responses[self.response_index].outcome.clone();
            self.response_index += 1;
            outcome
        } else {
            Err("no more scripted portraits".to_string())
        }
    }

    /// Reset the outcome index to replay from the beginning.
    pub fn reset(&mut self) {
        self.response_index = 0;
    }
}

impl Default for MockPortraits {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Test harness for running catalog scenarios over the hellas skin.
pub struct TestHarness {
    /// The catalog session under test.
    pub session: CatalogSession<Work, Kind>,
    /// Scripted portrait outcomes.
    pub portraits: MockPortraits,
}

impl TestHarness {
    /// Create a harness over an empty roster.
    pub fn new() -> Self {
        Self::with_roster(Roster::new())
    }

    /// Create a harness over the given roster.
    pub fn with_roster(roster: Roster<Work, Kind>) -> Self {
        Self {
            session: CatalogSession::new(roster),
            portraits: MockPortraits::default(),
        }
    }

    /// Create a harness over the curated hellas seed roster.
    pub fn seeded() -> Self {
        Self::with_roster(crate::themes::hellas::seed_roster())
    }

    /// Queue a successful portrait outcome.
    pub fn expect_portrait(&mut self, data_url: impl Into<String>) -> &mut Self {
        self.portraits.queue(MockPortrait::image(data_url));
        self
    }

    /// Queue a failed portrait outcome.
    pub fn expect_portrait_failure(&mut self, message: impl Into<String>) -> &mut Self {
        self.portraits.queue(MockPortrait::failure(message));
        self
    }

    /// Save a draft through the session.
    pub fn save(&mut self, draft: CharacterDraft<Work, Kind>) -> Result<CharacterId, SessionError> {
        self.session.save(draft)
    }

    /// Run the portrait flow for one character with the next scripted
    /// outcome: success stores the image reference, failure leaves the
    /// existing one untouched.
    pub fn generate_portrait(&mut self, id: CharacterId) -> Result<String, String> {
        let outcome = self.portraits.next_outcome();
        if let Ok(data_url) = &outcome {
            self.session
                .update_image(id, data_url.clone())
                .map_err(|e| e.to_string())?;
        }
        outcome
    }

    /// Check if a character exists by name or alias.
    pub fn has_character(&self, name: &str) -> bool {
        self.session.roster().iter().any(|c| c.matches_name(name))
    }

    /// Names of the currently visible characters, in display order.
    pub fn visible_names(&self) -> Vec<String> {
        self.session
            .visible()
            .iter()
            .map(|c| c.name.clone())
            .collect()
    }

    /// Total roster size.
    pub fn character_count(&self) -> usize {
        self.session.total_count()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert every spouse link between two existing characters is symmetric.
#[track_caller]
pub fn assert_spouses_symmetric<T, K>(roster: &Roster<T, K>) {
    for a in roster.iter() {
        for &b_id in &a.family.spouses_ids {
            let Some(b) = roster.get(b_id) else {
                // Dangling references are tolerated, not symmetric.
                continue;
            };
            assert!(
                b.family.spouses_ids.contains(&a.id),
                "'{}' lists '{}' as spouse but not the reverse",
                a.name,
                b.name
            );
        }
    }
}

/// Assert every parent link has the matching child entry on the parent.
#[track_caller]
pub fn assert_parent_child_links<T, K>(roster: &Roster<T, K>) {
    for a in roster.iter() {
        for parent_id in [a.family.father_id, a.family.mother_id]
            .into_iter()
            .flatten()
        {
            let Some(parent) = roster.get(parent_id) else {
                continue;
            };
            assert!(
                parent.family.children_ids.contains(&a.id),
                "'{}' names '{}' as parent but is missing from its children",
                a.name,
                parent.name
            );
        }
    }
}

/// Assert that the roster contains a character with the given name.
#[track_caller]
pub fn assert_has_character(harness: &TestHarness, name: &str) {
    assert!(
        harness.has_character(name),
        "Expected character '{name}' to exist in the roster"
    );
}

/// Assert that the roster does NOT contain a character with the given name.
#[track_caller]
pub fn assert_no_character(harness: &TestHarness, name: &str) {
    assert!(
        !harness.has_character(name),
        "Expected character '{name}' to NOT exist in the roster"
    );
}
