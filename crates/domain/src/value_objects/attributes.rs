//! The character attribute block: base stats, current pools and skill
//! ratings, in the shape the card editor writes.

use serde::{Deserialize, Serialize};

use super::stat::{ResourceKind, StatKey};

/// A named skill ("perícia") with its base rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRating {
    pub name: String,
    pub value: i32,
}

/// Base attribute values plus the two stored resource pools.
///
/// Only base values live here; fixed and temporary bonuses are computed on
/// top by the stat core and never written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeBlock {
    #[serde(default)]
    pub vida: i32,
    #[serde(default)]
    pub mana: i32,
    /// Current life pool. Stored state, clamped to [0, permanent max].
    #[serde(default)]
    pub vida_atual: i32,
    /// Current mana pool. Stored state, clamped to [0, permanent max].
    #[serde(default)]
    pub mana_atual: i32,
    #[serde(default)]
    pub armadura: i32,
    #[serde(default)]
    pub esquiva: i32,
    #[serde(default)]
    pub bloqueio: i32,
    #[serde(default)]
    pub deslocamento: i32,
    #[serde(default)]
    pub agilidade: i32,
    #[serde(default)]
    pub carisma: i32,
    #[serde(default)]
    pub forca: i32,
    #[serde(default)]
    pub inteligencia: i32,
    #[serde(default)]
    pub sabedoria: i32,
    #[serde(default)]
    pub vigor: i32,
    #[serde(default)]
    pub pericias: Vec<SkillRating>,
}

impl AttributeBlock {
    /// Base value of a stat (no bonuses applied).
    pub fn base(&self, stat: StatKey) -> i32 {
        match stat {
            StatKey::Life => self.vida,
            StatKey::Mana => self.mana,
            StatKey::Armor => self.armadura,
            StatKey::Dodge => self.esquiva,
            StatKey::Block => self.bloqueio,
            StatKey::Speed => self.deslocamento,
            StatKey::Agility => self.agilidade,
            StatKey::Charisma => self.carisma,
            StatKey::Strength => self.forca,
            StatKey::Intelligence => self.inteligencia,
            StatKey::Wisdom => self.sabedoria,
            StatKey::Vigor => self.vigor,
        }
    }

    pub fn set_base(&mut self, stat: StatKey, value: i32) {
        match stat {
            StatKey::Life => self.vida = value,
            StatKey::Mana => self.mana = value,
            StatKey::Armor => self.armadura = value,
            StatKey::Dodge => self.esquiva = value,
            StatKey::Block => self.bloqueio = value,
            StatKey::Speed => self.deslocamento = value,
            StatKey::Agility => self.agilidade = value,
            StatKey::Charisma => self.carisma = value,
            StatKey::Strength => self.forca = value,
            StatKey::Intelligence => self.inteligencia = value,
            StatKey::Wisdom => self.sabedoria = value,
            StatKey::Vigor => self.vigor = value,
        }
    }

    /// Stored current value of a resource pool.
    pub fn current(&self, resource: ResourceKind) -> i32 {
        match resource {
            ResourceKind::Life => self.vida_atual,
            ResourceKind::Mana => self.mana_atual,
        }
    }

    pub fn set_current(&mut self, resource: ResourceKind, value: i32) {
        match resource {
            ResourceKind::Life => self.vida_atual = value,
            ResourceKind::Mana => self.mana_atual = value,
        }
    }

    /// Base rating for a named skill, zero when unrated.
    pub fn skill_base(&self, name: &str) -> i32 {
        self.pericias
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.value)
            .unwrap_or(0)
    }
}
