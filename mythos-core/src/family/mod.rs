//! Family graph consistency: constraint validation and link reconciliation.
//!
//! A save goes through two stages. [`validate`] rejects proposals that would
//! create an inconsistent relationship before anything is touched, and
//! [`save_character`] propagates an accepted edit to every other roster
//! member so the mutual link invariants keep holding.

mod reconcile;
mod validate;

pub use reconcile::{save_character, SaveError};
pub use validate::{validate, FamilyViolation};
