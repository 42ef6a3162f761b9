//! Genealogy resolution: turn a character's family ids into displayable
//! relative cards.
//!
//! A parent id that points to no roster member resolves to an unknown
//! placeholder; dangling spouse and child ids are dropped from the lists,
//! matching how the detail view treats them.

use crate::catalog::{Character, CharacterId, Roster};
use serde::{Deserialize, Serialize};

/// Label shown for a referenced character that is not in the roster.
pub const UNKNOWN_LABEL: &str = "Desconocido";

/// A resolved relative, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativeCard {
    pub id: CharacterId,
    pub name: String,
    pub image_url: String,
}

impl RelativeCard {
    fn resolve<T, K>(roster: &Roster<T, K>, id: CharacterId) -> Self {
        match roster.get(id) {
            Some(found) => Self {
                id,
                name: found.name.clone(),
                image_url: found.image_url.clone(),
            },
            None => Self {
                id,
                name: UNKNOWN_LABEL.to_string(),
                image_url: String::new(),
            },
        }
    }

    /// Whether this card stands in for a dangling reference.
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_LABEL
    }
}

/// A character's resolved family, as shown by the genealogy diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenealogyView {
    pub father: Option<RelativeCard>,
    pub mother: Option<RelativeCard>,
    pub spouses: Vec<RelativeCard>,
    pub children: Vec<RelativeCard>,
}

impl GenealogyView {
    /// Resolve the family of one character against the roster.
    pub fn of<T, K>(roster: &Roster<T, K>, character: &Character<T, K>) -> Self {
        let family = &character.family;
        Self {
            father: family.father_id.map(|id| RelativeCard::resolve(roster, id)),
            mother: family.mother_id.map(|id| RelativeCard::resolve(roster, id)),
            spouses: family
                .spouses_ids
                .iter()
                .filter(|id| roster.contains(**id))
                .map(|&id| RelativeCard::resolve(roster, id))
                .collect(),
            children: family
                .children_ids
                .iter()
                .filter(|id| roster.contains(**id))
                .map(|&id| RelativeCard::resolve(roster, id))
                .collect(),
        }
    }

    /// Whether there is anything at all to draw.
    pub fn is_empty(&self) -> bool {
        self.father.is_none()
            && self.mother.is_none()
            && self.spouses.is_empty()
            && self.children.is_empty()
    }
}
