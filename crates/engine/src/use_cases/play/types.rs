//! Shared types for play actions.

use cardstock_domain::{Character, CharacterEvent, ItemId, ResourceKind, SpellId};

/// The record whose augments an ability use draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilityRef {
    Spell(SpellId),
    Item(ItemId),
}

/// A manual stat-editor submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatEdit {
    /// Life or mana; negative deltas route through buff depletion.
    Resource { resource: ResourceKind, delta: i32 },
    /// Money; clamped at zero.
    Money { delta: i64 },
}

/// The persisted character after an action, with what happened to it.
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub character: Character,
    pub events: Vec<CharacterEvent>,
}
