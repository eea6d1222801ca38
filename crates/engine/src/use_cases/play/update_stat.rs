//! Manual stat edit.
//!
//! The stat-editor dialog submits signed deltas against whichever character
//! sheet is open. Life and mana route losses through the buff ledger before
//! the permanent pool and cap gains at the permanent maximum; money is a
//! simple clamped addition.

use chrono::Utc;

use cardstock_domain::{apply, CharacterCommand, CharacterId};

use crate::repositories::{CharacterRecords, ItemRecords, SpellRecords};
use crate::use_cases::links::fixed_bonuses_for;

use super::error::PlayError;
use super::types::{ActionOutcome, StatEdit};

pub struct UpdateStat {
    characters: CharacterRecords,
    items: ItemRecords,
    spells: SpellRecords,
}

impl UpdateStat {
    pub fn new(characters: CharacterRecords, items: ItemRecords, spells: SpellRecords) -> Self {
        Self {
            characters,
            items,
            spells,
        }
    }

    pub async fn execute(
        &self,
        character_id: CharacterId,
        edit: StatEdit,
    ) -> Result<ActionOutcome, PlayError> {
        let mut character = self
            .characters
            .get(character_id)
            .await?
            .ok_or(PlayError::CharacterNotFound)?;

        let fixed = fixed_bonuses_for(&character, &self.items, &self.spells).await?;
        let command = match edit {
            StatEdit::Resource { resource, delta } => {
                CharacterCommand::AdjustResource { resource, delta }
            }
            StatEdit::Money { delta } => CharacterCommand::AdjustMoney { delta },
        };

        let events = apply(&mut character, &fixed, command, Utc::now())?;
        self.characters.save(&character).await?;
        Ok(ActionOutcome { character, events })
    }
}
