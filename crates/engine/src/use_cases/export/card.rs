//! Single-card export and import.
//!
//! A card travels as one pretty-printed JSON document with its images
//! base64-encoded in place. Import mints a fresh id and always lands the
//! card off stage and out of combat; linked ids are kept as-is and resolve
//! (or dangle harmlessly) against the importing store.

use cardstock_domain::{Character, CharacterId};

use super::error::ExportError;
use crate::repositories::CharacterRecords;

pub struct ExportCard {
    characters: CharacterRecords,
}

impl ExportCard {
    pub fn new(characters: CharacterRecords) -> Self {
        Self { characters }
    }

    pub async fn execute(&self, character_id: CharacterId) -> Result<String, ExportError> {
        let character = self
            .characters
            .get(character_id)
            .await?
            .ok_or(ExportError::CharacterNotFound)?;
        Ok(serde_json::to_string_pretty(&character)?)
    }
}

pub struct ImportCard {
    characters: CharacterRecords,
}

impl ImportCard {
    pub fn new(characters: CharacterRecords) -> Self {
        Self { characters }
    }

    pub async fn execute(&self, document: &str) -> Result<Character, ExportError> {
        let mut character: Character = serde_json::from_str(document)
            .map_err(|err| ExportError::InvalidDocument(err.to_string()))?;

        character.id = CharacterId::new();
        character.in_play = false;
        character.clear_combat_state();

        self.characters.save(&character).await?;
        Ok(character)
    }
}
