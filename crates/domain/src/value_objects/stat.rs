//! Canonical stat keys and the stat-name normalization rule.
//!
//! Augment targets and buff names are typed in by users, frequently with
//! accents and mixed case ("Armadura", "inteligência"). Names are normalized
//! once, at ingestion: lower-case, diacritics stripped, surrounding
//! whitespace removed. The normalized form either resolves to one of the
//! twelve known stat keys or falls through to the named-skill bucket under
//! its original spelling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::DomainError;

/// Strip diacritics and case from a user-entered stat or skill name.
///
/// NFD-decomposes the string and drops combining marks, so "Força",
/// "forca" and "  FORÇA " all normalize to "forca".
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_combining_mark(c: char) -> bool {
    // The combining diacritical marks block covers every accent the
    // sheet vocabulary uses (acute, tilde, circumflex, cedilla decomposes
    // to U+0327 which also lands here).
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// The twelve stats a fixed or temporary bonus can target directly.
///
/// Serialized under the sheet's own vocabulary so records written by the
/// original cards stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatKey {
    #[serde(rename = "vida")]
    Life,
    #[serde(rename = "mana")]
    Mana,
    #[serde(rename = "armadura")]
    Armor,
    #[serde(rename = "esquiva")]
    Dodge,
    #[serde(rename = "bloqueio")]
    Block,
    #[serde(rename = "deslocamento")]
    Speed,
    #[serde(rename = "agilidade")]
    Agility,
    #[serde(rename = "carisma")]
    Charisma,
    #[serde(rename = "forca")]
    Strength,
    #[serde(rename = "inteligencia")]
    Intelligence,
    #[serde(rename = "sabedoria")]
    Wisdom,
    #[serde(rename = "vigor")]
    Vigor,
}

impl StatKey {
    pub const ALL: [StatKey; 12] = [
        StatKey::Life,
        StatKey::Mana,
        StatKey::Armor,
        StatKey::Dodge,
        StatKey::Block,
        StatKey::Speed,
        StatKey::Agility,
        StatKey::Charisma,
        StatKey::Strength,
        StatKey::Intelligence,
        StatKey::Wisdom,
        StatKey::Vigor,
    ];

    /// The six primary attributes (the bar-chart row of the sheet).
    pub const PRIMARY: [StatKey; 6] = [
        StatKey::Agility,
        StatKey::Charisma,
        StatKey::Strength,
        StatKey::Intelligence,
        StatKey::Wisdom,
        StatKey::Vigor,
    ];

    /// Canonical (already normalized) name as it appears in records.
    pub fn wire_name(self) -> &'static str {
        match self {
            StatKey::Life => "vida",
            StatKey::Mana => "mana",
            StatKey::Armor => "armadura",
            StatKey::Dodge => "esquiva",
            StatKey::Block => "bloqueio",
            StatKey::Speed => "deslocamento",
            StatKey::Agility => "agilidade",
            StatKey::Charisma => "carisma",
            StatKey::Strength => "forca",
            StatKey::Intelligence => "inteligencia",
            StatKey::Wisdom => "sabedoria",
            StatKey::Vigor => "vigor",
        }
    }

    /// Resolve an already-normalized name. Use [`StatTarget::parse`] for
    /// raw user input.
    fn from_normalized(name: &str) -> Option<Self> {
        StatKey::ALL.into_iter().find(|k| k.wire_name() == name)
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for StatKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatKey::from_normalized(&normalize_name(s))
            .ok_or_else(|| DomainError::validation(format!("unknown stat name: {s}")))
    }
}

/// Where a bonus lands after normalization: one of the known stats, or a
/// named skill bucketed under its original spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatTarget {
    Stat(StatKey),
    Skill(String),
}

impl StatTarget {
    pub fn parse(raw: &str) -> Self {
        match StatKey::from_normalized(&normalize_name(raw)) {
            Some(key) => StatTarget::Stat(key),
            None => StatTarget::Skill(raw.trim().to_string()),
        }
    }

    /// Does this target match `stat`? Skills never match a stat key.
    pub fn is_stat(&self, stat: StatKey) -> bool {
        matches!(self, StatTarget::Stat(k) if *k == stat)
    }
}

/// The two depletable resource pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    #[serde(rename = "vida")]
    Life,
    #[serde(rename = "mana")]
    Mana,
}

impl ResourceKind {
    pub fn stat_key(self) -> StatKey {
        match self {
            ResourceKind::Life => StatKey::Life,
            ResourceKind::Mana => StatKey::Mana,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stat_key().wire_name())
    }
}
