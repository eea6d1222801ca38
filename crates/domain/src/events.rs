//! Domain events emitted by the character command processor.
//!
//! These communicate what actually happened during a state update, letting
//! callers refresh, notify or log without re-deriving the outcome.

use crate::value_objects::ResourceKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterEvent {
    /// An ability was used and its mana cost paid.
    AbilityUsed { source_name: String, cost: i32 },
    /// Temporary buffs were appended to the ledger.
    BuffsGranted { source_name: String, count: usize },
    CombatStarted,
    /// Combat ended; `buffs_cleared` is false when there was nothing to drop.
    CombatEnded { buffs_cleared: bool },
    /// A resource pool changed. `absorbed` is the damage soaked by buffs
    /// before the pool was touched (zero on gains).
    ResourceChanged {
        resource: ResourceKind,
        absorbed: i32,
        previous: i32,
        current: i32,
    },
    MoneyChanged { previous: i64, current: i64 },
}
