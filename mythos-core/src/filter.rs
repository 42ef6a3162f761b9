//! Filter engine: compute the visible, sorted subset of the roster.
//!
//! Filtering is a pure function of the roster and the current criteria;
//! same inputs always produce the same ordered output.

use crate::catalog::{Character, CharacterId, Roster};
use serde::{Deserialize, Serialize};

/// Id threshold separating the curated seed entries from procedurally added
/// ones.
pub const CURATED_ID_MAX: u32 = 80;

/// Which side of the curated/added split a character falls on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourcePartition {
    /// No restriction.
    #[default]
    All,
    /// Curated entries (id <= [`CURATED_ID_MAX`]).
    Curated,
    /// Entries added after the curated set (id > [`CURATED_ID_MAX`]).
    Added,
}

impl SourcePartition {
    fn allows(self, id: CharacterId) -> bool {
        match self {
            SourcePartition::All => true,
            SourcePartition::Curated => id.0 <= CURATED_ID_MAX,
            SourcePartition::Added => id.0 > CURATED_ID_MAX,
        }
    }
}

/// Filter criteria; every field defaults to "no restriction" and all the
/// active ones must pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria<T, K> {
    /// Case-insensitive substring matched against name and aliases.
    pub query: Option<String>,
    /// Category tag the character must carry.
    pub tag: Option<T>,
    /// Exact kind match.
    pub kind: Option<K>,
    /// Upper-cased initial letter of the name.
    pub initial: Option<char>,
    /// Curated/added id partition.
    pub partition: SourcePartition,
}

impl<T, K> Default for FilterCriteria<T, K> {
    fn default() -> Self {
        Self {
            query: None,
            tag: None,
            kind: None,
            initial: None,
            partition: SourcePartition::All,
        }
    }
}

impl<T, K> FilterCriteria<T, K> {
    /// Criteria that let every character through.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_tag(mut self, tag: T) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn with_kind(mut self, kind: K) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_initial(mut self, initial: char) -> Self {
        self.initial = Some(initial);
        self
    }

    pub fn with_partition(mut self, partition: SourcePartition) -> Self {
        self.partition = partition;
        self
    }

    fn passes(&self, character: &Character<T, K>) -> bool
    where
        T: PartialEq,
        K: PartialEq,
    {
        if let Some(query) = &self.query {
            if !query.is_empty() && !character.matches_partial(query) {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !character.tags.contains(tag) {
                return false;
            }
        }
        if let Some(kind) = &self.kind {
            if character.kind != *kind {
                return false;
            }
        }
        if let Some(initial) = self.initial {
            let upper: String = initial.to_uppercase().collect();
            if !character.name.to_uppercase().starts_with(&upper) {
                return false;
            }
        }
        self.partition.allows(character.id)
    }
}

/// Compute the visible subset of the roster, sorted ascending by
/// case-folded name.
pub fn filter_roster<'a, T, K>(
    roster: &'a Roster<T, K>,
    criteria: &FilterCriteria<T, K>,
) -> Vec<&'a Character<T, K>>
where
    T: PartialEq,
    K: PartialEq,
{
    let mut visible: Vec<&Character<T, K>> =
        roster.iter().filter(|c| criteria.passes(c)).collect();
    visible.sort_by_key(|c| c.name.to_lowercase());
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CharacterId;

    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    enum Tag {
        Early,
        Late,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    enum Kind {
        God,
        Mortal,
    }

    fn sample_roster() -> Roster<Tag, Kind> {
        Roster::from_characters(vec![
            Character::new(CharacterId(1), "Anubis", Kind::God)
                .with_alias("El Embalsamador")
                .with_tag(Tag::Early),
            Character::new(CharacterId(2), "Isis", Kind::God).with_tag(Tag::Late),
            Character::new(CharacterId(81), "Ahmose", Kind::Mortal).with_tag(Tag::Late),
        ])
    }

    fn names<'a>(visible: &'a [&'a Character<Tag, Kind>]) -> Vec<&'a str> {
        visible.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_no_criteria_returns_all_sorted() {
        let roster = sample_roster();
        let visible = filter_roster(&roster, &FilterCriteria::new());
        assert_eq!(names(&visible), vec!["Ahmose", "Anubis", "Isis"]);
    }

    #[test]
    fn test_query_matches_name_or_alias() {
        let roster = sample_roster();

        let by_name = filter_roster(&roster, &FilterCriteria::new().with_query("nub"));
        assert_eq!(names(&by_name), vec!["Anubis"]);

        let by_alias = filter_roster(&roster, &FilterCriteria::new().with_query("embalsamador"));
        assert_eq!(names(&by_alias), vec!["Anubis"]);
    }

    #[test]
    fn test_empty_query_is_no_restriction() {
        let roster = sample_roster();
        let visible = filter_roster(&roster, &FilterCriteria::new().with_query(""));
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let roster = sample_roster();
        // "an" matches Anubis; Isis matches the kind but not the query.
        let criteria = FilterCriteria::new().with_query("an").with_kind(Kind::God);
        assert_eq!(names(&filter_roster(&roster, &criteria)), vec!["Anubis"]);
    }

    #[test]
    fn test_tag_membership() {
        let roster = sample_roster();
        let criteria = FilterCriteria::new().with_tag(Tag::Late);
        assert_eq!(names(&filter_roster(&roster, &criteria)), vec!["Ahmose", "Isis"]);
    }

    #[test]
    fn test_initial_letter() {
        let roster = sample_roster();
        let criteria = FilterCriteria::new().with_initial('A');
        assert_eq!(names(&filter_roster(&roster, &criteria)), vec!["Ahmose", "Anubis"]);
    }

    #[test]
    fn test_partition_split() {
        let roster = sample_roster();

        let curated = FilterCriteria::new().with_partition(SourcePartition::Curated);
        assert_eq!(names(&filter_roster(&roster, &curated)), vec!["Anubis", "Isis"]);

        let added = FilterCriteria::new().with_partition(SourcePartition::Added);
        assert_eq!(names(&filter_roster(&roster, &added)), vec!["Ahmose"]);
    }

    #[test]
    fn test_filter_is_deterministic_and_pure() {
        let roster = sample_roster();
        let criteria = FilterCriteria::new().with_kind(Kind::God);
        let first_run = filter_roster(&roster, &criteria);
        let second_run = filter_roster(&roster, &criteria);
        let first = names(&first_run);
        let second = names(&second_run);
        assert_eq!(first, second);
        assert_eq!(roster.len(), 3);
    }
}
