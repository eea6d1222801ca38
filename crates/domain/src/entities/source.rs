//! Modifier sources.
//!
//! Items and spells both carry augment lists; the stat core does not care
//! which record kind a modifier came from. This borrowed sum type unifies
//! them only at the aggregation seam, keeping the entities themselves
//! separate typed schemas.

use crate::entities::{Item, Spell};
use crate::value_objects::Augment;

/// A borrowed view of a record that can contribute augments.
#[derive(Debug, Clone, Copy)]
pub enum ModifierSource<'a> {
    Item(&'a Item),
    Spell(&'a Spell),
}

impl<'a> ModifierSource<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            ModifierSource::Item(item) => &item.name,
            ModifierSource::Spell(spell) => &spell.name,
        }
    }

    pub fn id_string(&self) -> String {
        match self {
            ModifierSource::Item(item) => item.id.to_string(),
            ModifierSource::Spell(spell) => spell.id.to_string(),
        }
    }

    pub fn augments(&self) -> &'a [Augment] {
        match self {
            ModifierSource::Item(item) => &item.augments,
            ModifierSource::Spell(spell) => &spell.augments,
        }
    }

    /// Mana cost of using this source in combat. Items cost nothing.
    pub fn mana_cost(&self) -> i32 {
        match self {
            ModifierSource::Item(_) => 0,
            ModifierSource::Spell(spell) => spell.mana_cost,
        }
    }
}

impl<'a> From<&'a Item> for ModifierSource<'a> {
    fn from(item: &'a Item) -> Self {
        ModifierSource::Item(item)
    }
}

impl<'a> From<&'a Spell> for ModifierSource<'a> {
    fn from(spell: &'a Spell) -> Self {
        ModifierSource::Spell(spell)
    }
}
