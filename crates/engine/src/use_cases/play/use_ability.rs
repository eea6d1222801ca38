//! Use-ability action.
//!
//! Spends the ability's mana cost (times the chosen multiplier) from the
//! in-play character, then hands the ability's temporary augments to the
//! buff ledger. Refuses without mutating when mana is short.

use chrono::Utc;

use cardstock_domain::{apply, AbilityUse, CharacterCommand, CostMultiplier, ModifierSource};

use crate::repositories::{CharacterRecords, ItemRecords, SpellRecords};
use crate::use_cases::links::fixed_bonuses_for;

use super::error::PlayError;
use super::types::{AbilityRef, ActionOutcome};

pub struct UseAbility {
    characters: CharacterRecords,
    spells: SpellRecords,
    items: ItemRecords,
}

impl UseAbility {
    pub fn new(characters: CharacterRecords, spells: SpellRecords, items: ItemRecords) -> Self {
        Self {
            characters,
            spells,
            items,
        }
    }

    pub async fn execute(
        &self,
        source: AbilityRef,
        multiplier: CostMultiplier,
    ) -> Result<ActionOutcome, PlayError> {
        let mut character = self
            .characters
            .find_in_play()
            .await?
            .ok_or(PlayError::NoCharacterInPlay)?;

        let ability = match source {
            AbilityRef::Spell(id) => {
                let spell = self.spells.get(id).await?.ok_or(PlayError::SourceNotFound)?;
                AbilityUse::from_source(ModifierSource::from(&spell))
            }
            AbilityRef::Item(id) => {
                let item = self.items.get(id).await?.ok_or(PlayError::SourceNotFound)?;
                AbilityUse::from_source(ModifierSource::from(&item))
            }
        };

        let fixed = fixed_bonuses_for(&character, &self.items, &self.spells).await?;
        let events = apply(
            &mut character,
            &fixed,
            CharacterCommand::UseAbility {
                ability,
                multiplier,
            },
            Utc::now(),
        )?;

        self.characters.save(&character).await?;
        Ok(ActionOutcome { character, events })
    }
}
