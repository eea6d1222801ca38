//! End-combat action: drops the combat flag and every temporary buff.

use chrono::Utc;

use cardstock_domain::{apply, CharacterCommand, FixedBonuses};

use crate::repositories::CharacterRecords;

use super::error::PlayError;
use super::types::ActionOutcome;

pub struct EndCombat {
    characters: CharacterRecords,
}

impl EndCombat {
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
            CharacterCommand::EndCombat,
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

    use cardstock_domain::{Buff, Character, CharacterEvent};
    use chrono::DateTime;

    use crate::infrastructure::MemoryStore;
    use crate::repositories::Records;

    #[tokio::test]
    async fn clears_flag_and_ledger_then_persists() {
        let characters: CharacterRecords = Records::new(Arc::new(MemoryStore::new()));
        let mut character = Character::new("Yana");
        character.in_play = true;
        character.is_in_combat = true;
        character.active_buffs.grant(
            "src",
            "Fúria (x1)",
            DateTime::from_timestamp(0, 0).expect("timestamp"),
            vec![Buff {
                name: "forca".to_string(),
                value: 2,
            }],
        );
        characters.save(&character).await.expect("seed");

        let outcome = EndCombat::new(characters.clone())
            .execute()
            .await
            .expect("end combat");

        assert_eq!(
            outcome.events,
            vec![CharacterEvent::CombatEnded { buffs_cleared: true }]
        );

        let persisted = characters
            .get(character.id)
            .await
            .expect("get")
            .expect("present");
        assert!(!persisted.is_in_combat);
        assert!(persisted.active_buffs.is_empty());
    }
}
