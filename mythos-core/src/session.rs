//! CatalogSession - the primary public API for browsing and editing.
//!
//! Wraps the roster store, the current filter criteria, and the optional
//! portrait-generation client into a single interface. Reads are pull-based:
//! callers re-query [`CatalogSession::visible`] after a change instead of
//! being notified.

use crate::catalog::{Character, CharacterDraft, CharacterId, Label, Roster};
use crate::family::{save_character, SaveError};
use crate::filter::{filter_roster, FilterCriteria};
use crate::portrait::{portrait_prompt, read_file_as_data_url};
use imagen::{AspectRatio, Imagen, Request};
use std::path::Path;
use thiserror::Error;

/// Errors from catalog session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Save(#[from] SaveError),

    #[error("no character with id {0}")]
    UnknownCharacter(CharacterId),

    #[error("a portrait request is already in flight")]
    PortraitBusy,

    #[error("no image generation client configured")]
    PortraitUnavailable,

    /// Surfaced to the user as a generic notice; the prior image reference
    /// is left untouched.
    #[error("portrait generation failed")]
    Portrait(#[source] imagen::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A browsing and editing session over one roster.
///
/// Single-threaded and synchronous apart from portrait generation, which is
/// guarded by a single-slot in-flight flag: a second request while one is
/// pending fails with [`SessionError::PortraitBusy`] rather than aborting
/// the first (there is no cancellation, matching the UI it models).
pub struct CatalogSession<T, K> {
    roster: Roster<T, K>,
    criteria: FilterCriteria<T, K>,
    imagen: Option<Imagen>,
    portrait_in_flight: bool,
}

impl<T, K> CatalogSession<T, K>
where
    T: Clone + PartialEq,
    K: Clone + PartialEq,
{
    /// Create a session over the given roster.
    pub fn new(roster: Roster<T, K>) -> Self {
        Self {
            roster,
            criteria: FilterCriteria::new(),
            imagen: None,
            portrait_in_flight: false,
        }
    }

    /// Attach an image generation client.
    pub fn with_imagen(mut self, client: Imagen) -> Self {
        self.imagen = Some(client);
        self
    }

    pub fn roster(&self) -> &Roster<T, K> {
        &self.roster
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character<T, K>> {
        self.roster.get(id)
    }

    pub fn criteria(&self) -> &FilterCriteria<T, K> {
        &self.criteria
    }

    /// Replace the active filter criteria.
    pub fn set_criteria(&mut self, criteria: FilterCriteria<T, K>) {
        self.criteria = criteria;
    }

    /// The visible subset under the current criteria, sorted by name.
    pub fn visible(&self) -> Vec<&Character<T, K>> {
        filter_roster(&self.roster, &self.criteria)
    }

    /// How many characters pass the current criteria.
    pub fn visible_count(&self) -> usize {
        self.visible().len()
    }

    /// How many characters the roster holds in total.
    pub fn total_count(&self) -> usize {
        self.roster.len()
    }

    /// Save a draft: validate, reconcile family links across the roster, and
    /// atomically replace the store. Returns the saved character's id.
    pub fn save(&mut self, draft: CharacterDraft<T, K>) -> Result<CharacterId, SessionError> {
        let (reconciled, id) = save_character(&self.roster, draft)?;
        self.roster.replace_all(reconciled);
        Ok(id)
    }

    /// Replace a character's image reference directly.
    pub fn update_image(
        &mut self,
        id: CharacterId,
        image_url: impl Into<String>,
    ) -> Result<(), SessionError> {
        let character = self
            .roster
            .get_mut(id)
            .ok_or(SessionError::UnknownCharacter(id))?;
        character.image_url = image_url.into();
        Ok(())
    }

    /// Replace a character's image with a local file, encoded as a data URL.
    pub async fn upload_portrait(
        &mut self,
        id: CharacterId,
        path: impl AsRef<Path>,
    ) -> Result<(), SessionError> {
        if !self.roster.contains(id) {
            return Err(SessionError::UnknownCharacter(id));
        }
        let data_url = read_file_as_data_url(path).await?;
        self.update_image(id, data_url)
    }

    /// Whether a portrait request is currently pending.
    pub fn portrait_in_flight(&self) -> bool {
        self.portrait_in_flight
    }

    /// Generate a portrait for the character and store it as its image
    /// reference. On any failure the existing reference is untouched.
    pub async fn generate_portrait(&mut self, id: CharacterId) -> Result<(), SessionError>
    where
        K: Label,
    {
        if self.portrait_in_flight {
            return Err(SessionError::PortraitBusy);
        }
        let client = self
            .imagen
            .clone()
            .ok_or(SessionError::PortraitUnavailable)?;
        let prompt = {
            let character = self
                .roster
                .get(id)
                .ok_or(SessionError::UnknownCharacter(id))?;
            portrait_prompt(character)
        };

        self.portrait_in_flight = true;
        let result = {
            // Cleared on drop: an abandoned call must not leave the guard set.
            let _reset = InFlightReset(&mut self.portrait_in_flight);
            client
                .generate_one(Request::new(prompt).with_aspect_ratio(AspectRatio::Portrait))
                .await
        };

        let image = result.map_err(SessionError::Portrait)?;
        self.update_image(id, image.to_data_url())
    }
}

struct InFlightReset<'a>(&'a mut bool);

impl Drop for InFlightReset<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
