//! Catalog data model: characters, family records, and the roster store.
//!
//! The roster is the single source of truth for the session. It is an
//! ordered, in-memory collection with exactly one writer; mutation happens
//! through atomic replacement (see [`Roster::replace_all`]) so no partially
//! updated state is ever observable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for characters.
///
/// Ids are positive, immutable once assigned, and allocated densely as
/// `max(existing ids) + 1`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CharacterId(pub u32);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display label for the closed theme enums (kinds and category tags).
pub trait Label {
    /// Human-readable name in the catalog's locale.
    fn label(&self) -> &'static str;
}

// ============================================================================
// Family record
// ============================================================================

/// A character's family links: at most one father and mother, and sets of
/// spouses and children. Sets cannot hold duplicates and their order is
/// irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyRecord {
    pub father_id: Option<CharacterId>,
    pub mother_id: Option<CharacterId>,
    pub spouses_ids: BTreeSet<CharacterId>,
    pub children_ids: BTreeSet<CharacterId>,
}

impl FamilyRecord {
    /// Create an empty family record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_father(mut self, id: CharacterId) -> Self {
        self.father_id = Some(id);
        self
    }

    pub fn with_mother(mut self, id: CharacterId) -> Self {
        self.mother_id = Some(id);
        self
    }

    pub fn with_spouse(mut self, id: CharacterId) -> Self {
        self.spouses_ids.insert(id);
        self
    }

    pub fn with_child(mut self, id: CharacterId) -> Self {
        self.children_ids.insert(id);
        self
    }

    pub fn with_children(mut self, ids: impl IntoIterator<Item = CharacterId>) -> Self {
        self.children_ids.extend(ids);
        self
    }

    /// Check whether any field mentions the given id.
    pub fn references(&self, id: CharacterId) -> bool {
        self.father_id == Some(id)
            || self.mother_id == Some(id)
            || self.spouses_ids.contains(&id)
            || self.children_ids.contains(&id)
    }

    /// Check whether no links are set at all.
    pub fn is_empty(&self) -> bool {
        self.father_id.is_none()
            && self.mother_id.is_none()
            && self.spouses_ids.is_empty()
            && self.children_ids.is_empty()
    }
}

// ============================================================================
// Character
// ============================================================================

/// One roster entry.
///
/// Generic over the theme's category tag enum `T` (the era or work the
/// character appears in, multi-valued) and kind enum `K` (exactly one value
/// of a closed set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character<T, K> {
    pub id: CharacterId,
    /// Primary name.
    pub name: String,
    /// Secondary names: alternate-culture spellings or epithets.
    pub aliases: Vec<String>,
    pub description: String,
    /// Image reference: an asset path, URL, or data URL.
    pub image_url: String,
    /// Category memberships; display order follows declaration order.
    pub tags: Vec<T>,
    pub kind: K,
    pub family: FamilyRecord,
}

impl<T, K> Character<T, K> {
    /// Create a new character with the given id, name, and kind.
    pub fn new(id: CharacterId, name: impl Into<String>, kind: K) -> Self {
        Self {
            id,
            name: name.into(),
            aliases: Vec::new(),
            description: String::new(),
            image_url: String::new(),
            tags: Vec::new(),
            kind,
            family: FamilyRecord::new(),
        }
    }

    /// Add a secondary name.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_tag(mut self, tag: T) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn with_family(mut self, family: FamilyRecord) -> Self {
        self.family = family;
        self
    }

    /// Check if a name matches this character (case-insensitive).
    pub fn matches_name(&self, query: &str) -> bool {
        let query_lower = query.to_lowercase();
        if self.name.to_lowercase() == query_lower {
            return true;
        }
        self.aliases.iter().any(|a| a.to_lowercase() == query_lower)
    }

    /// Check if any text field contains the query (case-insensitive).
    pub fn matches_partial(&self, query: &str) -> bool {
        let query_lower = query.to_lowercase();
        if self.name.to_lowercase().contains(&query_lower) {
            return true;
        }
        self.aliases
            .iter()
            .any(|a| a.to_lowercase().contains(&query_lower))
    }
}

// ============================================================================
// Draft
// ============================================================================

/// A proposed save: the fields of a character with the id still optional.
///
/// `id: None` means a new entry; `Some(id)` means an edit of an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDraft<T, K> {
    pub id: Option<CharacterId>,
    pub name: String,
    pub aliases: Vec<String>,
    pub description: String,
    pub image_url: String,
    pub tags: Vec<T>,
    pub kind: K,
    pub family: FamilyRecord,
}

impl<T, K> CharacterDraft<T, K> {
    /// Start a draft for a brand-new character.
    pub fn new(name: impl Into<String>, kind: K) -> Self {
        Self {
            id: None,
            name: name.into(),
            aliases: Vec::new(),
            description: String::new(),
            image_url: String::new(),
            tags: Vec::new(),
            kind,
            family: FamilyRecord::new(),
        }
    }

    /// Start a draft editing an existing character.
    pub fn edit(character: &Character<T, K>) -> Self
    where
        T: Clone,
        K: Clone,
    {
        Self {
            id: Some(character.id),
            name: character.name.clone(),
            aliases: character.aliases.clone(),
            description: character.description.clone(),
            image_url: character.image_url.clone(),
            tags: character.tags.clone(),
            kind: character.kind.clone(),
            family: character.family.clone(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_tag(mut self, tag: T) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn with_family(mut self, family: FamilyRecord) -> Self {
        self.family = family;
        self
    }

    /// Finalize the draft into a character with its assigned id.
    pub fn into_character(self, id: CharacterId) -> Character<T, K> {
        Character {
            id,
            name: self.name,
            aliases: self.aliases,
            description: self.description,
            image_url: self.image_url,
            tags: self.tags,
            kind: self.kind,
            family: self.family,
        }
    }
}

// ============================================================================
// Roster store
// ============================================================================

/// The full in-memory collection of characters for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster<T, K> {
    characters: Vec<Character<T, K>>,
}

impl<T, K> Default for Roster<T, K> {
    fn default() -> Self {
        Self {
            characters: Vec::new(),
        }
    }
}

impl<T, K> Roster<T, K> {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a roster from an ordered list of characters.
    pub fn from_characters(characters: Vec<Character<T, K>>) -> Self {
        Self { characters }
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Iterate over the roster in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Character<T, K>> {
        self.characters.iter()
    }

    /// Get a character by id.
    pub fn get(&self, id: CharacterId) -> Option<&Character<T, K>> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character<T, K>> {
        self.characters.iter_mut().find(|c| c.id == id)
    }

    /// Check whether a character with the given id exists.
    pub fn contains(&self, id: CharacterId) -> bool {
        self.get(id).is_some()
    }

    /// The id a newly appended character would receive: `max + 1`, or 1 for
    /// an empty roster.
    pub fn next_id(&self) -> CharacterId {
        CharacterId(
            self.characters
                .iter()
                .map(|c| c.id.0)
                .max()
                .map_or(1, |max| max + 1),
        )
    }

    /// Atomically replace the whole collection.
    pub fn replace_all(&mut self, other: Roster<T, K>) {
        self.characters = other.characters;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(id: u32, name: &str) -> Character<(), ()> {
        Character::new(CharacterId(id), name, ())
    }

    #[test]
    fn test_next_id_empty_roster() {
        let roster: Roster<(), ()> = Roster::new();
        assert_eq!(roster.next_id(), CharacterId(1));
    }

    #[test]
    fn test_next_id_is_max_plus_one() {
        let roster = Roster::from_characters(vec![plain(3, "A"), plain(80, "B"), plain(7, "C")]);
        assert_eq!(roster.next_id(), CharacterId(81));
    }

    #[test]
    fn test_get_by_id() {
        let roster = Roster::from_characters(vec![plain(1, "Zeus"), plain(2, "Hera")]);
        assert_eq!(roster.get(CharacterId(2)).map(|c| c.name.as_str()), Some("Hera"));
        assert!(roster.get(CharacterId(99)).is_none());
    }

    #[test]
    fn test_replace_all_swaps_contents() {
        let mut roster = Roster::from_characters(vec![plain(1, "Zeus")]);
        roster.replace_all(Roster::from_characters(vec![plain(1, "Zeus"), plain(2, "Hera")]));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_name_matching() {
        let character = plain(1, "Zeus")
            .with_alias("Ζεύς")
            .with_alias("Júpiter");

        assert!(character.matches_name("zeus"));
        assert!(character.matches_name("júpiter"));
        assert!(!character.matches_name("Hera"));

        assert!(character.matches_partial("eu"));
        assert!(character.matches_partial("pit"));
        assert!(!character.matches_partial("hera"));
    }

    #[test]
    fn test_family_record_references() {
        let family = FamilyRecord::new()
            .with_father(CharacterId(1))
            .with_spouse(CharacterId(2))
            .with_child(CharacterId(3));

        assert!(family.references(CharacterId(1)));
        assert!(family.references(CharacterId(2)));
        assert!(family.references(CharacterId(3)));
        assert!(!family.references(CharacterId(4)));
        assert!(!family.is_empty());
        assert!(FamilyRecord::new().is_empty());
    }

    #[test]
    fn test_character_json_wire_shape() {
        let character = plain(1, "Horus")
            .with_alias("Hor")
            .with_image_url("assets/kemet/horus.jpg")
            .with_family(
                FamilyRecord::new()
                    .with_father(CharacterId(2))
                    .with_mother(CharacterId(3))
                    .with_spouse(CharacterId(4)),
            );

        let json = serde_json::to_value(&character).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["imageUrl"], "assets/kemet/horus.jpg");
        assert_eq!(json["aliases"][0], "Hor");
        assert_eq!(json["family"]["fatherId"], 2);
        assert_eq!(json["family"]["motherId"], 3);
        assert_eq!(json["family"]["spousesIds"][0], 4);
        assert_eq!(json["family"]["childrenIds"], serde_json::json!([]));

        let back: Character<(), ()> = serde_json::from_value(json).unwrap();
        assert_eq!(back, character);
    }

    #[test]
    fn test_draft_roundtrip() {
        let original = plain(5, "Atenea").with_description("Diosa de la sabiduría");
        let draft = CharacterDraft::edit(&original);
        assert_eq!(draft.id, Some(CharacterId(5)));

        let rebuilt = draft.into_character(CharacterId(5));
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_new_draft_has_no_id() {
        let draft: CharacterDraft<(), ()> = CharacterDraft::new("Pandora", ());
        assert_eq!(draft.id, None);
        assert!(draft.family.is_empty());
    }
}
