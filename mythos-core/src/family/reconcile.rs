//! Reconciliation of a saved character's family links across the roster.

use super::validate::{validate, FamilyViolation};
use crate::catalog::{Character, CharacterDraft, CharacterId, FamilyRecord, Roster};
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors from a save operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error(transparent)]
    Validation(#[from] FamilyViolation),

    /// The draft claims to edit an id that is not in the roster.
    #[error("no character with id {0} exists to edit")]
    UnknownCharacter(CharacterId),
}

/// Change of a scalar parent link between the old and new record.
#[derive(Debug, Default, PartialEq)]
struct ScalarDelta {
    removed: Option<CharacterId>,
    added: Option<CharacterId>,
}

fn scalar_delta(old: Option<CharacterId>, new: Option<CharacterId>) -> ScalarDelta {
    if old == new {
        ScalarDelta::default()
    } else {
        ScalarDelta {
            removed: old,
            added: new,
        }
    }
}

/// Per-relation-kind differences between the old and new family record.
///
/// Added children carry no delta: the reconciler cannot know whether the
/// saved character is that child's father or mother, so no reciprocal parent
/// link is fabricated.
#[derive(Debug)]
struct FamilyDelta {
    father: ScalarDelta,
    mother: ScalarDelta,
    removed_spouses: BTreeSet<CharacterId>,
    added_spouses: BTreeSet<CharacterId>,
    removed_children: BTreeSet<CharacterId>,
}

fn diff(old: &FamilyRecord, new: &FamilyRecord) -> FamilyDelta {
    FamilyDelta {
        father: scalar_delta(old.father_id, new.father_id),
        mother: scalar_delta(old.mother_id, new.mother_id),
        removed_spouses: old.spouses_ids.difference(&new.spouses_ids).copied().collect(),
        added_spouses: new.spouses_ids.difference(&old.spouses_ids).copied().collect(),
        removed_children: old.children_ids.difference(&new.children_ids).copied().collect(),
    }
}

/// Apply every delta that mentions this character. Adds and removes on sets
/// are naturally idempotent.
fn apply_delta<T, K>(member: &mut Character<T, K>, saved: CharacterId, delta: &FamilyDelta) {
    let family = &mut member.family;

    if delta.father.removed == Some(member.id) {
        family.children_ids.remove(&saved);
    }
    if delta.father.added == Some(member.id) {
        family.children_ids.insert(saved);
    }
    if delta.mother.removed == Some(member.id) {
        family.children_ids.remove(&saved);
    }
    if delta.mother.added == Some(member.id) {
        family.children_ids.insert(saved);
    }
    if delta.removed_spouses.contains(&member.id) {
        family.spouses_ids.remove(&saved);
    }
    if delta.added_spouses.contains(&member.id) {
        family.spouses_ids.insert(saved);
    }
    if delta.removed_children.contains(&member.id) {
        if family.father_id == Some(saved) {
            family.father_id = None;
        }
        if family.mother_id == Some(saved) {
            family.mother_id = None;
        }
    }
}

/// Save a draft into the roster, propagating family-link changes to every
/// other member.
///
/// Pure: on success returns the rebuilt roster (for an atomic
/// [`Roster::replace_all`]) and the saved character's id; on any error the
/// input roster is untouched. Editing keeps the character's position; a new
/// character is appended with the next free id. Deltas naming ids that do
/// not exist in the roster find no member to patch and are skipped; the
/// dangling reference remains only in the saved character's own record.
pub fn save_character<T, K>(
    roster: &Roster<T, K>,
    draft: CharacterDraft<T, K>,
) -> Result<(Roster<T, K>, CharacterId), SaveError>
where
    T: Clone,
    K: Clone,
{
    validate(draft.id, &draft.family)?;

    let (id, old_family) = match draft.id {
        Some(id) => {
            let existing = roster.get(id).ok_or(SaveError::UnknownCharacter(id))?;
            (id, existing.family.clone())
        }
        None => (roster.next_id(), FamilyRecord::new()),
    };
    let editing = draft.id.is_some();

    let delta = diff(&old_family, &draft.family);
    let saved = draft.into_character(id);

    let mut characters: Vec<Character<T, K>> = roster
        .iter()
        .map(|member| {
            if member.id == id {
                saved.clone()
            } else {
                let mut patched = member.clone();
                apply_delta(&mut patched, id, &delta);
                patched
            }
        })
        .collect();
    if !editing {
        characters.push(saved);
    }

    Ok((Roster::from_characters(characters), id))
}
