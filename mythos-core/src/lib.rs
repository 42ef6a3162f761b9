//! Mythology character encyclopedia engine.
//!
//! This crate provides:
//! - An in-memory character roster with curated and user-added entries
//! - Bidirectional family-link reconciliation on every save
//! - Family-constraint validation for drafts
//! - A pure filter engine (search, tags, kind, initial, partition)
//! - Genealogy views resolving family links to display cards
//! - AI portrait generation through the `imagen` crate
//!
//! # Quick Start
//!
//! ```ignore
//! use mythos_core::{CatalogSession, CharacterDraft, themes::hellas};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = CatalogSession::new(hellas::seed_roster())
//!         .with_imagen(imagen::Imagen::from_env()?);
//!
//!     let mut draft = CharacterDraft::new("Pandora", hellas::Kind::Mortal);
//!     draft.description = "La primera mujer, creada por Hefesto.".to_string();
//!     let id = session.save(draft)?;
//!
//!     session.generate_portrait(id).await?;
//!     println!("{}", session.get(id).unwrap().image_url);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod family;
pub mod filter;
pub mod genealogy;
pub mod portrait;
pub mod session;
pub mod testing;
pub mod themes;

// Re-export for convenience
pub use catalog::{Character, CharacterDraft, CharacterId, FamilyRecord, Label, Roster};
pub use family::{save_character, validate, FamilyViolation, SaveError};
pub use filter::{filter_roster, FilterCriteria, SourcePartition, CURATED_ID_MAX};
pub use genealogy::{GenealogyView, RelativeCard};
pub use portrait::{portrait_prompt, read_file_as_data_url};
pub use session::{CatalogSession, SessionError};
