//! Constraint checks for proposed family records.

use crate::catalog::{CharacterId, FamilyRecord};
use thiserror::Error;

/// A rule a proposed family record would break.
///
/// Each variant names the specific violated rule so it can be surfaced
/// inline to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FamilyViolation {
    #[error("a character cannot be its own father")]
    SelfFather,

    #[error("a character cannot be its own mother")]
    SelfMother,

    #[error("a character cannot be its own spouse")]
    SelfSpouse,

    #[error("a character cannot be its own child")]
    SelfChild,

    #[error("character {0} cannot be both a parent and a child")]
    ParentAsChild(CharacterId),

    #[error("character {0} cannot be both a spouse and a parent")]
    SpouseAsParent(CharacterId),

    #[error("character {0} cannot be both a spouse and a child")]
    SpouseAsChild(CharacterId),
}

/// Validate a proposed family record against the character's own id.
///
/// `self_id` is `None` for a brand-new character; the self-reference rules
/// are skipped in that case because the id does not exist yet, so no field
/// can structurally refer to it.
pub fn validate(
    self_id: Option<CharacterId>,
    family: &FamilyRecord,
) -> Result<(), FamilyViolation> {
    if let Some(id) = self_id {
        if family.father_id == Some(id) {
            return Err(FamilyViolation::SelfFather);
        }
        if family.mother_id == Some(id) {
            return Err(FamilyViolation::SelfMother);
        }
        if family.spouses_ids.contains(&id) {
            return Err(FamilyViolation::SelfSpouse);
        }
        if family.children_ids.contains(&id) {
            return Err(FamilyViolation::SelfChild);
        }
    }

    for parent in [family.father_id, family.mother_id].into_iter().flatten() {
        if family.children_ids.contains(&parent) {
            return Err(FamilyViolation::ParentAsChild(parent));
        }
    }

    for &spouse in &family.spouses_ids {
        if family.father_id == Some(spouse) || family.mother_id == Some(spouse) {
            return Err(FamilyViolation::SpouseAsParent(spouse));
        }
        if family.children_ids.contains(&spouse) {
            return Err(FamilyViolation::SpouseAsChild(spouse));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ME: CharacterId = CharacterId(5);

    #[test]
    fn test_empty_record_is_valid() {
        assert_eq!(validate(Some(ME), &FamilyRecord::new()), Ok(()));
        assert_eq!(validate(None, &FamilyRecord::new()), Ok(()));
    }

    #[test]
    fn test_self_references_rejected_on_edit() {
        assert_eq!(
            validate(Some(ME), &FamilyRecord::new().with_father(ME)),
            Err(FamilyViolation::SelfFather)
        );
        assert_eq!(
            validate(Some(ME), &FamilyRecord::new().with_mother(ME)),
            Err(FamilyViolation::SelfMother)
        );
        assert_eq!(
            validate(Some(ME), &FamilyRecord::new().with_spouse(ME)),
            Err(FamilyViolation::SelfSpouse)
        );
        assert_eq!(
            validate(Some(ME), &FamilyRecord::new().with_child(ME)),
            Err(FamilyViolation::SelfChild)
        );
    }

    #[test]
    fn test_self_checks_skipped_for_new_characters() {
        // A new character has no id yet, so these ids refer to other
        // characters by definition; the cross-field rules still apply.
        let family = FamilyRecord::new().with_father(ME);
        assert_eq!(validate(None, &family), Ok(()));
    }

    #[test]
    fn test_parent_cannot_also_be_child() {
        let father = CharacterId(2);
        let family = FamilyRecord::new().with_father(father).with_child(father);
        assert_eq!(
            validate(Some(ME), &family),
            Err(FamilyViolation::ParentAsChild(father))
        );

        let mother = CharacterId(3);
        let family = FamilyRecord::new().with_mother(mother).with_child(mother);
        assert_eq!(
            validate(Some(ME), &family),
            Err(FamilyViolation::ParentAsChild(mother))
        );
    }

    #[test]
    fn test_spouse_cannot_also_be_parent() {
        let other = CharacterId(2);
        let family = FamilyRecord::new().with_spouse(other).with_father(other);
        assert_eq!(
            validate(Some(ME), &family),
            Err(FamilyViolation::SpouseAsParent(other))
        );
    }

    #[test]
    fn test_spouse_cannot_also_be_child() {
        let other = CharacterId(2);
        let family = FamilyRecord::new().with_spouse(other).with_child(other);
        assert_eq!(
            validate(Some(ME), &family),
            Err(FamilyViolation::SpouseAsChild(other))
        );
    }

    #[test]
    fn test_consistent_record_passes() {
        let family = FamilyRecord::new()
            .with_father(CharacterId(1))
            .with_mother(CharacterId(2))
            .with_spouse(CharacterId(3))
            .with_child(CharacterId(4));
        assert_eq!(validate(Some(ME), &family), Ok(()));
    }
}
