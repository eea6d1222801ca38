//! Fixed-bonus aggregation.
//!
//! Scans the augment lists of a character's resolved items and spells and
//! sums the permanent ("fixo") modifiers per stat, bucketing unknown target
//! names into a skill-bonus map under their original spelling. Malformed
//! entries are skipped with a log line; aggregation never fails.

use std::collections::BTreeMap;

use crate::entities::ModifierSource;
use crate::value_objects::{AugmentKind, StatKey, StatTarget};

/// Summed permanent bonuses, keyed per stat and per skill name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedBonuses {
    stats: BTreeMap<StatKey, i32>,
    skills: BTreeMap<String, i32>,
}

impl FixedBonuses {
    /// Total fixed bonus for a stat, zero when no source touches it.
    pub fn stat(&self, stat: StatKey) -> i32 {
        self.stats.get(&stat).copied().unwrap_or(0)
    }

    /// Total fixed bonus for a named skill, zero when no source touches it.
    pub fn skill(&self, name: &str) -> i32 {
        self.skills.get(name).copied().unwrap_or(0)
    }

    /// Skill bonuses under their original spellings.
    pub fn skills(&self) -> impl Iterator<Item = (&str, i32)> {
        self.skills.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty() && self.skills.is_empty()
    }

    fn add(&mut self, target: StatTarget, value: i32) {
        match target {
            StatTarget::Stat(key) => *self.stats.entry(key).or_insert(0) += value,
            StatTarget::Skill(name) => *self.skills.entry(name).or_insert(0) += value,
        }
    }
}

/// Sum the fixed augments of every source. Order-independent: any
/// permutation of the same sources yields the same totals.
pub fn collect_fixed<'a>(sources: impl IntoIterator<Item = ModifierSource<'a>>) -> FixedBonuses {
    let mut bonuses = FixedBonuses::default();
    for source in sources {
        for augment in source.augments() {
            if augment.kind != AugmentKind::Fixed {
                continue;
            }
            match augment.resolved() {
                Some((target, value)) => bonuses.add(target, value),
                None => {
                    tracing::warn!(
                        source = source.name(),
                        target = augment.target.as_str(),
                        "skipping malformed augment"
                    );
                }
            }
        }
    }
    bonuses
}
