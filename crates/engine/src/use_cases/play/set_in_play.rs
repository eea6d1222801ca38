//! In-play selection.
//!
//! At most one character is in play. Selecting a new one clears the
//! previous holder's flag *and* its combat state in the same logical
//! operation, so buffs never outlive their owner's turn on stage. The store
//! offers no multi-record atomicity; the previous holder is cleared first
//! so a failure can only leave zero in-play characters, never two.

use cardstock_domain::{Character, CharacterId};

use crate::repositories::CharacterRecords;

use super::error::PlayError;

pub struct SetInPlay {
    characters: CharacterRecords,
}

impl SetInPlay {
    pub fn new(characters: CharacterRecords) -> Self {
        Self { characters }
    }

    /// Mark `character_id` as in play (or take it off stage when `in_play`
    /// is false). Returns the updated character.
    pub async fn execute(
        &self,
        character_id: CharacterId,
        in_play: bool,
    ) -> Result<Character, PlayError> {
        let mut target = self
            .characters
            .get(character_id)
            .await?
            .ok_or(PlayError::CharacterNotFound)?;

        if in_play {
            for mut other in self.characters.list().await? {
                if other.id != target.id && other.in_play {
                    other.in_play = false;
                    other.clear_combat_state();
                    self.characters.save(&other).await?;
                }
            }
        }

        target.in_play = in_play;
        if !in_play {
            target.clear_combat_state();
        }
        self.characters.save(&target).await?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use cardstock_domain::Buff;
    use chrono::DateTime;

    use crate::infrastructure::MemoryStore;
    use crate::repositories::Records;

    fn records() -> CharacterRecords {
        Records::new(Arc::new(MemoryStore::new()))
    }

    async fn seed_combatant(characters: &CharacterRecords, title: &str) -> Character {
        let mut character = Character::new(title);
        character.in_play = true;
        character.is_in_combat = true;
        for n in 0..2 {
            character.active_buffs.grant(
                format!("src-{n}"),
                "Fúria (x1)",
                DateTime::from_timestamp(n, 0).expect("timestamp"),
                vec![Buff {
                    name: "forca".to_string(),
                    value: 2,
                }],
            );
        }
        characters.save(&character).await.expect("seed");
        character
    }

    #[tokio::test]
    async fn swapping_clears_the_previous_holder_combat_state() {
        let characters = records();
        let previous = seed_combatant(&characters, "A").await;
        let next = Character::new("B");
        characters.save(&next).await.expect("seed");

        let updated = SetInPlay::new(characters.clone())
            .execute(next.id, true)
            .await
            .expect("swap");
        assert!(updated.in_play);

        let demoted = characters
            .get(previous.id)
            .await
            .expect("get")
            .expect("present");
        assert!(!demoted.in_play);
        assert!(!demoted.is_in_combat);
        assert!(demoted.active_buffs.is_empty());
    }

    #[tokio::test]
    async fn only_one_character_is_ever_in_play() {
        let characters = records();
        let a = Character::new("A");
        let b = Character::new("B");
        characters.save(&a).await.expect("seed");
        characters.save(&b).await.expect("seed");

        let set_in_play = SetInPlay::new(characters.clone());
        set_in_play.execute(a.id, true).await.expect("select a");
        set_in_play.execute(b.id, true).await.expect("select b");

        let in_play: Vec<_> = characters
            .list()
            .await
            .expect("list")
            .into_iter()
            .filter(|c| c.in_play)
            .collect();
        assert_eq!(in_play.len(), 1);
        assert_eq!(in_play[0].id, b.id);
    }

    #[tokio::test]
    async fn taking_a_character_off_stage_clears_its_combat_state() {
        let characters = records();
        let combatant = seed_combatant(&characters, "A").await;

        let updated = SetInPlay::new(characters.clone())
            .execute(combatant.id, false)
            .await
            .expect("unset");
        assert!(!updated.in_play);
        assert!(!updated.is_in_combat);
        assert!(updated.active_buffs.is_empty());
    }
}
