//! Cardstock domain: card entities, the stat aggregation core and the
//! combat buff lifecycle.
//!
//! Everything in this crate is synchronous, in-memory data. Persistence,
//! record resolution and import/export live in `cardstock-engine`.

pub mod commands;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod stats;
pub mod value_objects;

pub use commands::{apply, AbilityUse, CharacterCommand, CostMultiplier};
pub use entities::{
    Attack, Category, Character, Grimoire, GrimoireEntry, Item, Lore, ModifierSource, Spell,
    SpellKind,
};
pub use error::DomainError;
pub use events::CharacterEvent;
pub use ids::{AttackId, CategoryId, CharacterId, GrimoireId, ItemId, SpellId};
pub use stats::{
    attribute_scales, collect_fixed, difficulty, Buff, BuffGrant, BuffLedger, Depletion,
    FixedBonuses, StatBreakdown, DIFFICULTY_OFFSET,
};
pub use value_objects::{
    normalize_name, AttributeBlock, Augment, AugmentKind, ImageData, ResourceKind, SkillRating,
    StatKey, StatTarget,
};
