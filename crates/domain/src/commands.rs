//! Character commands and the state-update function.
//!
//! Every user-initiated transition on a character sheet is a
//! [`CharacterCommand`] processed by [`apply`]: one synchronous pass over
//! the in-memory character that either mutates it and reports events, or
//! refuses and leaves it untouched. Persistence and record resolution stay
//! outside; callers pass the already-collected fixed bonuses in.

use chrono::{DateTime, Utc};

use crate::entities::{Character, ModifierSource};
use crate::error::DomainError;
use crate::events::CharacterEvent;
use crate::stats::{Buff, FixedBonuses, StatBreakdown};
use crate::value_objects::{Augment, AugmentKind, ResourceKind};

/// How many times an ability is used at once. Always at least one; prompted
/// from the user when the ability has a cost, defaulting to one otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostMultiplier(u32);

impl CostMultiplier {
    pub const ONE: CostMultiplier = CostMultiplier(1);

    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::validation("multiplier must be at least 1"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for CostMultiplier {
    fn default() -> Self {
        Self::ONE
    }
}

/// Snapshot of the card being used in combat: identity, cost and augments,
/// detached from the record so the processor never touches the store.
#[derive(Debug, Clone, PartialEq)]
pub struct AbilityUse {
    pub source_id: String,
    pub source_name: String,
    pub mana_cost: i32,
    pub augments: Vec<Augment>,
}

impl AbilityUse {
    pub fn from_source(source: ModifierSource<'_>) -> Self {
        Self {
            source_id: source.id_string(),
            source_name: source.name().to_string(),
            mana_cost: source.mana_cost(),
            augments: source.augments().to_vec(),
        }
    }
}

/// A user-initiated transition on the in-play character.
#[derive(Debug, Clone, PartialEq)]
pub enum CharacterCommand {
    /// Spend the ability's mana cost and grant its temporary augments.
    UseAbility {
        ability: AbilityUse,
        multiplier: CostMultiplier,
    },
    EnterCombat,
    EndCombat,
    /// Manual life/mana edit. Losses drain buffs before the pool; gains cap
    /// at the permanent maximum.
    AdjustResource { resource: ResourceKind, delta: i32 },
    /// Manual money edit, clamped at zero.
    AdjustMoney { delta: i64 },
}

/// Apply one command to a character.
///
/// `fixed` must be the bonuses collected from the character's resolved
/// items and spells; it bounds resource gains. On error the character is
/// untouched.
pub fn apply(
    character: &mut Character,
    fixed: &FixedBonuses,
    command: CharacterCommand,
    now: DateTime<Utc>,
) -> Result<Vec<CharacterEvent>, DomainError> {
    match command {
        CharacterCommand::UseAbility {
            ability,
            multiplier,
        } => use_ability(character, ability, multiplier, now),
        CharacterCommand::EnterCombat => enter_combat(character),
        CharacterCommand::EndCombat => Ok(end_combat(character)),
        CharacterCommand::AdjustResource { resource, delta } => {
            Ok(adjust_resource(character, fixed, resource, delta))
        }
        CharacterCommand::AdjustMoney { delta } => Ok(adjust_money(character, delta)),
    }
}

fn use_ability(
    character: &mut Character,
    ability: AbilityUse,
    multiplier: CostMultiplier,
    now: DateTime<Utc>,
) -> Result<Vec<CharacterEvent>, DomainError> {
    if !character.is_in_combat {
        return Err(DomainError::invalid_state_transition(
            "abilities are used in combat",
        ));
    }

    let cost = ability.mana_cost.max(0) * multiplier.get() as i32;
    let available = character.attributes.current(ResourceKind::Mana);
    if available < cost {
        return Err(DomainError::insufficient(
            ResourceKind::Mana,
            cost as i64,
            available as i64,
        ));
    }

    // Everything below is infallible: the refusal paths are behind us.
    character
        .attributes
        .set_current(ResourceKind::Mana, available - cost);

    let mut events = vec![CharacterEvent::AbilityUsed {
        source_name: ability.source_name.clone(),
        cost,
    }];

    let mut buffs = Vec::new();
    for augment in &ability.augments {
        if augment.kind != AugmentKind::Temporary {
            continue;
        }
        match augment.resolved() {
            Some((_, value)) => buffs.push(Buff {
                name: augment.target.clone(),
                value: value * multiplier.get() as i32,
            }),
            None => {
                tracing::warn!(
                    source = ability.source_name.as_str(),
                    target = augment.target.as_str(),
                    "skipping malformed buff"
                );
            }
        }
    }

    if !buffs.is_empty() {
        let source_name = format!("{} (x{})", ability.source_name, multiplier.get());
        let count = buffs.len();
        character
            .active_buffs
            .grant(ability.source_id, source_name.clone(), now, buffs);
        events.push(CharacterEvent::BuffsGranted { source_name, count });
    }

    Ok(events)
}

fn enter_combat(character: &mut Character) -> Result<Vec<CharacterEvent>, DomainError> {
    if !character.in_play {
        return Err(DomainError::constraint(
            "only the in-play character can enter combat",
        ));
    }
    if character.is_in_combat {
        return Ok(Vec::new());
    }
    character.is_in_combat = true;
    Ok(vec![CharacterEvent::CombatStarted])
}

fn end_combat(character: &mut Character) -> Vec<CharacterEvent> {
    let buffs_cleared = !character.active_buffs.is_empty();
    character.clear_combat_state();
    vec![CharacterEvent::CombatEnded { buffs_cleared }]
}

fn adjust_resource(
    character: &mut Character,
    fixed: &FixedBonuses,
    resource: ResourceKind,
    delta: i32,
) -> Vec<CharacterEvent> {
    if delta == 0 {
        return Vec::new();
    }

    let stat = resource.stat_key();
    let previous = character.attributes.current(resource);

    let (absorbed, current) = if delta < 0 {
        let depletion = character.active_buffs.deplete(stat.wire_name(), -delta);
        (depletion.absorbed, (previous - depletion.remainder).max(0))
    } else {
        let max = StatBreakdown::new(character.attributes.base(stat), fixed.stat(stat), 0)
            .permanent_max();
        (0, (previous + delta).min(max))
    };

    character.attributes.set_current(resource, current);
    vec![CharacterEvent::ResourceChanged {
        resource,
        absorbed,
        previous,
        current,
    }]
}

fn adjust_money(character: &mut Character, delta: i64) -> Vec<CharacterEvent> {
    if delta == 0 {
        return Vec::new();
    }
    let previous = character.money;
    character.money = (previous + delta).max(0);
    vec![CharacterEvent::MoneyChanged {
        previous,
        current: character.money,
    }]
}
