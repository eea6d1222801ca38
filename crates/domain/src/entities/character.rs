//! Character card entity.
//!
//! A character owns its attribute block and its active-buff ledger
//! exclusively. Linked items, spells, attacks and relationship characters
//! are referenced by id only and resolved at read time; dangling references
//! are dropped by the resolver, never here.

use serde::{Deserialize, Serialize};

use crate::ids::{AttackId, CharacterId, ItemId, SpellId};
use crate::stats::ledger::BuffLedger;
use crate::value_objects::{AttributeBlock, ImageData};

/// Free-text background of a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lore {
    #[serde(default)]
    pub historia: String,
    #[serde(default)]
    pub personalidade: String,
    #[serde(default)]
    pub motivacao: String,
}

impl Lore {
    pub fn is_empty(&self) -> bool {
        self.historia.is_empty() && self.personalidade.is_empty() && self.motivacao.is_empty()
    }
}

/// A character card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub title: String,
    #[serde(default)]
    pub sub_title: String,
    #[serde(default = "default_level")]
    pub level: i32,
    #[serde(rename = "dinheiro", default)]
    pub money: i64,
    #[serde(default)]
    pub attributes: AttributeBlock,
    #[serde(default)]
    pub lore: Lore,
    #[serde(default)]
    pub items: Vec<ItemId>,
    #[serde(default)]
    pub spells: Vec<SpellId>,
    #[serde(default)]
    pub attacks: Vec<AttackId>,
    #[serde(default)]
    pub relationships: Vec<CharacterId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<ImageData>,
    /// At most one character is in play at a time; the swap is enforced by
    /// the play layer, which clears the previous holder.
    #[serde(default)]
    pub in_play: bool,
    /// Only the in-play character may be in combat.
    #[serde(default)]
    pub is_in_combat: bool,
    /// Combat buff ledger; non-empty only while in combat.
    #[serde(default)]
    pub active_buffs: BuffLedger,
}

fn default_level() -> i32 {
    1
}

impl Character {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(),
            title: title.into(),
            sub_title: String::new(),
            level: 1,
            money: 0,
            attributes: AttributeBlock::default(),
            lore: Lore::default(),
            items: Vec::new(),
            spells: Vec::new(),
            attacks: Vec::new(),
            relationships: Vec::new(),
            image: None,
            background_image: None,
            in_play: false,
            is_in_combat: false,
            active_buffs: BuffLedger::default(),
        }
    }

    pub fn with_sub_title(mut self, sub_title: impl Into<String>) -> Self {
        self.sub_title = sub_title.into();
        self
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn with_attributes(mut self, attributes: AttributeBlock) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_lore(mut self, lore: Lore) -> Self {
        self.lore = lore;
        self
    }

    /// Drop combat state wholesale: flag and ledger together. Used both by
    /// the explicit end-combat action and by the in-play swap.
    pub fn clear_combat_state(&mut self) -> bool {
        let had_state = self.is_in_combat || !self.active_buffs.is_empty();
        self.is_in_combat = false;
        self.active_buffs.clear();
        had_state
    }
}
