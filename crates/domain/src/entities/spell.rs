//! Spell entity - spells and trained abilities share one record shape.

use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, SpellId};
use crate::value_objects::{Augment, AugmentKind, ImageData};

/// Whether the card is a spell proper or a trained ability. The two share a
/// store partition and a record shape; the kind only steers where the card
/// renders and whether enhancement texts apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpellKind {
    #[default]
    #[serde(rename = "magia")]
    Magic,
    #[serde(rename = "habilidade")]
    Ability,
}

/// A spell or ability card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    pub id: SpellId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: SpellKind,
    #[serde(default)]
    pub description: String,
    /// Mana cost per use; the multiplier prompt only appears when positive.
    #[serde(default)]
    pub mana_cost: i32,
    /// Spell circle (tier); abilities leave it unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circle: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Resisted-by text (the save the target rolls).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resistencia: Option<String>,
    /// "Enhance" casting text; spells only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhance: Option<String>,
    /// "True" casting text; spells only.
    #[serde(rename = "true", default, skip_serializing_if = "Option::is_none")]
    pub true_casting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<CharacterId>,
    #[serde(rename = "aumentos", default)]
    pub augments: Vec<Augment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageData>,
}

impl Spell {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SpellId::new(),
            name: name.into(),
            kind: SpellKind::Magic,
            description: String::new(),
            mana_cost: 0,
            circle: None,
            execution: None,
            range: None,
            target: None,
            duration: None,
            resistencia: None,
            enhance: None,
            true_casting: None,
            owner: None,
            augments: Vec::new(),
            image: None,
        }
    }

    pub fn ability(name: impl Into<String>) -> Self {
        Self {
            kind: SpellKind::Ability,
            ..Self::new(name)
        }
    }

    pub fn with_mana_cost(mut self, cost: i32) -> Self {
        self.mana_cost = cost;
        self
    }

    pub fn with_augments(mut self, augments: Vec<Augment>) -> Self {
        self.augments = augments;
        self
    }

    /// True when using the card in combat would grant at least one buff.
    pub fn has_temporary_augments(&self) -> bool {
        self.augments
            .iter()
            .any(|a| a.kind == AugmentKind::Temporary)
    }
}
