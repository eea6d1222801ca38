//! Enter-combat action: flips the in-play character into combat.

use chrono::Utc;

use cardstock_domain::{apply, CharacterCommand, FixedBonuses};

use crate::repositories::CharacterRecords;

use super::error::PlayError;
use super::types::ActionOutcome;

pub struct EnterCombat {
    characters: CharacterRecords,
}

impl EnterCombat {
    pub fn new(characters: CharacterRecords) -> Self {
        Self { characters }
    }

    pub async fn execute(&self) -> Result<ActionOutcome, PlayError> {
        let mut character = self
            .characters
            .find_in_play()
            .await?
            .ok_or(PlayError::NoCharacterInPlay)?;

        let events = apply(
            &mut character,
            &FixedBonuses::default(),
            CharacterCommand::EnterCombat,
            Utc::now(),
        )?;

        self.characters.save(&character).await?;
        Ok(ActionOutcome { character, events })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use cardstock_domain::Character;

    use crate::infrastructure::MemoryStore;
    use crate::repositories::Records;

    #[tokio::test]
    async fn marks_the_in_play_character_as_in_combat() {
        let characters: CharacterRecords = Records::new(Arc::new(MemoryStore::new()));
        let mut character = Character::new("Yana");
        character.in_play = true;
        characters.save(&character).await.expect("seed");

        let outcome = EnterCombat::new(characters.clone())
            .execute()
            .await
            .expect("enter combat");
        assert!(outcome.character.is_in_combat);

        let persisted = characters
            .get(character.id)
            .await
            .expect("get")
            .expect("present");
        assert!(persisted.is_in_combat);
    }

    #[tokio::test]
    async fn fails_without_an_in_play_character() {
        let characters: CharacterRecords = Records::new(Arc::new(MemoryStore::new()));
        let err = EnterCombat::new(characters)
            .execute()
            .await
            .expect_err("no one in play");
        assert!(matches!(err, PlayError::NoCharacterInPlay));
    }
}
