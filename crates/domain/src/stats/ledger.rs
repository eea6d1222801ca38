//! The buff ledger: temporary combat bonuses attached to the in-play
//! character.
//!
//! Every ability use appends one grant entry; repeated uses of the same
//! ability stack as independent entries, never merged. Damage to a resource
//! drains matching buffs before the permanent pool. Entries are stored in
//! grant order, so depletion walks oldest grant first, and within a grant
//! the buffs in their listed order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{normalize_name, StatKey};

/// One temporary bonus inside a grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buff {
    /// Stat or skill name as granted; matched diacritic/case-insensitively.
    pub name: String,
    pub value: i32,
}

/// One grant event: the source that produced it and the buffs it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuffGrant {
    pub source_id: String,
    /// Display name, including the use multiplier, e.g. "Fúria (x2)".
    pub source_name: String,
    pub granted_at: DateTime<Utc>,
    pub buffs: Vec<Buff>,
}

/// What happened to a damage amount routed through the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Depletion {
    /// Damage soaked by temporary buffs.
    pub absorbed: i32,
    /// Damage left to apply to the permanent pool.
    pub remainder: i32,
}

/// The active-buff list a character owns while in combat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuffLedger {
    entries: Vec<BuffGrant>,
}

impl BuffLedger {
    /// Append a grant. No merging with earlier grants from the same source.
    pub fn grant(
        &mut self,
        source_id: impl Into<String>,
        source_name: impl Into<String>,
        granted_at: DateTime<Utc>,
        buffs: Vec<Buff>,
    ) {
        self.entries.push(BuffGrant {
            source_id: source_id.into(),
            source_name: source_name.into(),
            granted_at,
            buffs,
        });
    }

    /// Sum of buff values whose name matches `name` (normalized).
    pub fn total_for(&self, name: &str) -> i32 {
        let wanted = normalize_name(name);
        self.entries
            .iter()
            .flat_map(|entry| &entry.buffs)
            .filter(|buff| normalize_name(&buff.name) == wanted)
            .map(|buff| buff.value)
            .sum()
    }

    pub fn total_for_stat(&self, stat: StatKey) -> i32 {
        self.total_for(stat.wire_name())
    }

    /// Soak incoming damage with matching buffs, oldest grant first.
    ///
    /// Reduces each matching buff by up to the remaining damage until the
    /// damage runs out or every matching buff is at zero, then prunes
    /// zeroed buffs and emptied grants. Returns how much was absorbed and
    /// how much is left for the permanent pool. An empty ledger (or one
    /// with no matching buffs) returns the full amount as remainder.
    pub fn deplete(&mut self, name: &str, amount: i32) -> Depletion {
        let wanted = normalize_name(name);
        let mut remaining = amount.max(0);

        for entry in &mut self.entries {
            if remaining == 0 {
                break;
            }
            for buff in &mut entry.buffs {
                if remaining == 0 {
                    break;
                }
                if buff.value <= 0 || normalize_name(&buff.name) != wanted {
                    continue;
                }
                let soaked = buff.value.min(remaining);
                buff.value -= soaked;
                remaining -= soaked;
            }
        }

        for entry in &mut self.entries {
            entry.buffs.retain(|buff| buff.value > 0);
        }
        self.entries.retain(|entry| !entry.buffs.is_empty());

        Depletion {
            absorbed: amount.max(0) - remaining,
            remainder: remaining,
        }
    }

    /// Drop every grant (combat end, in-play swap).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[BuffGrant] {
        &self.entries
    }
}
