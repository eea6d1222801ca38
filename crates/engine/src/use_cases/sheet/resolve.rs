//! Sheet resolution.
//!
//! Loads everything a rendered character sheet needs in one pass: the
//! resolved linked records, the three stat layers combined per stat, the
//! resource panels, the difficulty value, the merged skill list and the
//! 0-100 attribute bar scales. Pure assembly - nothing here mutates state.

use cardstock_domain::{
    attribute_scales, collect_fixed, difficulty, Attack, Character, CharacterId, FixedBonuses,
    Item, ResourceKind, Spell, StatBreakdown, StatKey,
};

use crate::infrastructure::ports::StoreError;
use crate::repositories::{AttackRecords, CharacterRecords, ItemRecords, SpellRecords};
use crate::use_cases::links::{resolve_items, resolve_spells};

#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("Character not found")]
    CharacterNotFound,
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// One resource panel: the stored pool against its permanent ceiling, with
/// the temporary total reported alongside (never merged into the pool).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceView {
    pub current: i32,
    pub permanent_max: i32,
    pub temporary: i32,
}

/// A stat with its three layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatLine {
    pub stat: StatKey,
    pub breakdown: StatBreakdown,
}

impl StatLine {
    pub fn total(&self) -> i32 {
        self.breakdown.total()
    }
}

/// A primary attribute with its bar scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeLine {
    pub stat: StatKey,
    pub breakdown: StatBreakdown,
    /// Width of the bar relative to the strongest attribute, 0-100.
    pub scale: i32,
}

/// A named skill: the character's rating plus fixed bonuses from sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillLine {
    pub name: String,
    pub base: i32,
    pub bonus: i32,
}

/// Everything the sheet shows for one character.
#[derive(Debug, Clone)]
pub struct CharacterSheetView {
    pub character: Character,
    pub items: Vec<Item>,
    pub spells: Vec<Spell>,
    pub attacks: Vec<Attack>,
    pub relationships: Vec<Character>,
    pub fixed: FixedBonuses,
    pub life: ResourceView,
    pub mana: ResourceView,
    pub combat_stats: [StatLine; 4],
    pub attributes: [AttributeLine; 6],
    pub difficulty: i32,
    pub skills: Vec<SkillLine>,
}

pub struct ResolveSheet {
    characters: CharacterRecords,
    items: ItemRecords,
    spells: SpellRecords,
    attacks: AttackRecords,
}

impl ResolveSheet {
    pub fn new(
        characters: CharacterRecords,
        items: ItemRecords,
        spells: SpellRecords,
        attacks: AttackRecords,
    ) -> Self {
        Self {
            characters,
            items,
            spells,
            attacks,
        }
    }

    pub async fn execute(&self, character_id: CharacterId) -> Result<CharacterSheetView, SheetError> {
        let character = self
            .characters
            .get(character_id)
            .await?
            .ok_or(SheetError::CharacterNotFound)?;

        let items = resolve_items(&self.items, &character).await?;
        let spells = resolve_spells(&self.spells, &character).await?;
        let attacks = self.resolve_attacks(&character).await?;
        let relationships = self.resolve_relationships(&character).await?;

        let fixed = collect_fixed(
            items
                .iter()
                .map(Into::into)
                .chain(spells.iter().map(Into::into)),
        );

        let breakdown = |stat: StatKey| {
            StatBreakdown::new(
                character.attributes.base(stat),
                fixed.stat(stat),
                character.active_buffs.total_for_stat(stat),
            )
        };

        let life = resource_view(&character, &fixed, ResourceKind::Life);
        let mana = resource_view(&character, &fixed, ResourceKind::Mana);

        let combat_stats =
            [StatKey::Armor, StatKey::Dodge, StatKey::Block, StatKey::Speed].map(|stat| StatLine {
                stat,
                breakdown: breakdown(stat),
            });

        let totals = StatKey::PRIMARY.map(|stat| (stat, breakdown(stat).total()));
        let scales = attribute_scales(&totals);
        let attributes = StatKey::PRIMARY.map(|stat| AttributeLine {
            stat,
            breakdown: breakdown(stat),
            scale: scales
                .iter()
                .find(|(s, _)| *s == stat)
                .map(|(_, scale)| *scale)
                .unwrap_or(0),
        });

        let difficulty = difficulty(character.level, breakdown(StatKey::Wisdom));
        let skills = merge_skills(&character, &fixed);

        Ok(CharacterSheetView {
            items,
            spells,
            attacks,
            relationships,
            fixed,
            life,
            mana,
            combat_stats,
            attributes,
            difficulty,
            skills,
            character,
        })
    }

    async fn resolve_attacks(&self, character: &Character) -> Result<Vec<Attack>, StoreError> {
        let mut attacks = Vec::with_capacity(character.attacks.len());
        for id in &character.attacks {
            match self.attacks.get(id).await? {
                Some(attack) => attacks.push(attack),
                None => tracing::debug!(%id, "dropping dangling attack reference"),
            }
        }
        Ok(attacks)
    }

    async fn resolve_relationships(
        &self,
        character: &Character,
    ) -> Result<Vec<Character>, StoreError> {
        let mut related = Vec::with_capacity(character.relationships.len());
        for id in &character.relationships {
            match self.characters.get(id).await? {
                Some(other) => related.push(other),
                None => tracing::debug!(%id, "dropping dangling relationship reference"),
            }
        }
        Ok(related)
    }
}

fn resource_view(
    character: &Character,
    fixed: &FixedBonuses,
    resource: ResourceKind,
) -> ResourceView {
    let stat = resource.stat_key();
    let breakdown = StatBreakdown::new(character.attributes.base(stat), fixed.stat(stat), 0);
    ResourceView {
        current: character.attributes.current(resource),
        permanent_max: breakdown.permanent_max(),
        temporary: character.active_buffs.total_for_stat(stat),
    }
}

/// Rated skills and bonus-only skills in one list, sorted by name.
fn merge_skills(character: &Character, fixed: &FixedBonuses) -> Vec<SkillLine> {
    let mut skills: Vec<SkillLine> = character
        .attributes
        .pericias
        .iter()
        .map(|rating| SkillLine {
            name: rating.name.clone(),
            base: rating.value,
            bonus: fixed.skill(&rating.name),
        })
        .collect();

    for (name, bonus) in fixed.skills() {
        if !skills.iter().any(|line| line.name == name) {
            skills.push(SkillLine {
                name: name.to_string(),
                base: 0,
                bonus,
            });
        }
    }

    skills.sort_by(|a, b| a.name.cmp(&b.name));
    skills
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use cardstock_domain::{AttributeBlock, Augment, Buff, SkillRating};
    use chrono::DateTime;

    use crate::infrastructure::{MemoryStore, RecordStore};
    use crate::repositories::Records;

    struct Fixture {
        characters: CharacterRecords,
        items: ItemRecords,
        spells: SpellRecords,
        attacks: AttackRecords,
    }

    impl Fixture {
        fn new() -> Self {
            let store: Arc<dyn RecordStore> = Arc::new(MemoryStore::new());
            Self {
                characters: Records::new(Arc::clone(&store)),
                items: Records::new(Arc::clone(&store)),
                spells: Records::new(Arc::clone(&store)),
                attacks: Records::new(store),
            }
        }

        fn resolver(&self) -> ResolveSheet {
            ResolveSheet::new(
                self.characters.clone(),
                self.items.clone(),
                self.spells.clone(),
                self.attacks.clone(),
            )
        }
    }

    #[tokio::test]
    async fn assembles_all_three_stat_layers() {
        let fixture = Fixture::new();

        let armor = Item::new("Cota de Malha").with_augments(vec![
            Augment::fixed("armadura", 2),
            Augment::fixed("vida", 5),
        ]);
        fixture.items.save(&armor).await.expect("seed");

        let mut character = Character::new("Yana")
            .with_level(4)
            .with_attributes(AttributeBlock {
                vida: 20,
                vida_atual: 18,
                mana: 10,
                mana_atual: 10,
                armadura: 3,
                sabedoria: 2,
                agilidade: 4,
                pericias: vec![SkillRating {
                    name: "Luta".to_string(),
                    value: 3,
                }],
                ..Default::default()
            });
        character.items = vec![armor.id];
        character.is_in_combat = true;
        character.in_play = true;
        character.active_buffs.grant(
            "src",
            "Pele de Pedra (x1)",
            DateTime::from_timestamp(0, 0).expect("timestamp"),
            vec![Buff {
                name: "armadura".to_string(),
                value: 4,
            }],
        );
        fixture.characters.save(&character).await.expect("seed");

        let view = fixture
            .resolver()
            .execute(character.id)
            .await
            .expect("resolve");

        // Life: base 20 + fixed 5, pool untouched by bonuses.
        assert_eq!(view.life.permanent_max, 25);
        assert_eq!(view.life.current, 18);
        assert_eq!(view.life.temporary, 0);

        // Armor: base 3 + fixed 2 + temporary 4.
        let armor_line = view
            .combat_stats
            .iter()
            .find(|line| line.stat == StatKey::Armor)
            .expect("armor line");
        assert_eq!(armor_line.breakdown, StatBreakdown::new(3, 2, 4));
        assert_eq!(armor_line.total(), 9);

        // Difficulty: 10 + level 4 + wisdom 2.
        assert_eq!(view.difficulty, 16);
    }

    #[tokio::test]
    async fn attribute_scales_are_relative_to_the_strongest() {
        let fixture = Fixture::new();
        let character = Character::new("Yana").with_attributes(AttributeBlock {
            agilidade: 10,
            forca: 20,
            ..Default::default()
        });
        fixture.characters.save(&character).await.expect("seed");

        let view = fixture
            .resolver()
            .execute(character.id)
            .await
            .expect("resolve");

        let scale_of = |stat: StatKey| {
            view.attributes
                .iter()
                .find(|line| line.stat == stat)
                .map(|line| line.scale)
                .expect("line")
        };
        assert_eq!(scale_of(StatKey::Strength), 100);
        assert_eq!(scale_of(StatKey::Agility), 50);
        assert_eq!(scale_of(StatKey::Charisma), 0);
    }

    #[tokio::test]
    async fn skills_merge_ratings_with_bonus_only_entries() {
        let fixture = Fixture::new();
        let manual = Spell::new("Manual de Atletismo")
            .with_augments(vec![Augment::fixed("Atletismo", 2), Augment::fixed("Luta", 1)]);
        fixture.spells.save(&manual).await.expect("seed");

        let mut character = Character::new("Yana").with_attributes(AttributeBlock {
            pericias: vec![SkillRating {
                name: "Luta".to_string(),
                value: 3,
            }],
            ..Default::default()
        });
        character.spells = vec![manual.id];
        fixture.characters.save(&character).await.expect("seed");

        let view = fixture
            .resolver()
            .execute(character.id)
            .await
            .expect("resolve");

        assert_eq!(
            view.skills,
            vec![
                SkillLine {
                    name: "Atletismo".to_string(),
                    base: 0,
                    bonus: 2,
                },
                SkillLine {
                    name: "Luta".to_string(),
                    base: 3,
                    bonus: 1,
                },
            ]
        );
    }

    #[tokio::test]
    async fn dangling_links_are_dropped_and_the_rest_resolve() {
        let fixture = Fixture::new();
        let kept = Item::new("Espada");
        fixture.items.save(&kept).await.expect("seed");

        let mut character = Character::new("Yana");
        character.items = vec![kept.id, cardstock_domain::ItemId::new()];
        character.attacks = vec![cardstock_domain::AttackId::new()];
        character.relationships = vec![CharacterId::new()];
        fixture.characters.save(&character).await.expect("seed");

        let view = fixture
            .resolver()
            .execute(character.id)
            .await
            .expect("resolve");
        assert_eq!(view.items.len(), 1);
        assert!(view.attacks.is_empty());
        assert!(view.relationships.is_empty());
    }

    #[tokio::test]
    async fn missing_character_is_reported() {
        let fixture = Fixture::new();
        let err = fixture
            .resolver()
            .execute(CharacterId::new())
            .await
            .expect_err("missing");
        assert!(matches!(err, SheetError::CharacterNotFound));
    }
}
