//! Play actions: everything a user does to the character on stage.

pub mod end_combat;
pub mod enter_combat;
pub mod error;
pub mod set_in_play;
pub mod types;
pub mod update_stat;
pub mod use_ability;

pub use end_combat::EndCombat;
pub use enter_combat::EnterCombat;
pub use error::PlayError;
pub use set_in_play::SetInPlay;
pub use types::{AbilityRef, ActionOutcome, StatEdit};
pub use update_stat::UpdateStat;
pub use use_ability::UseAbility;
