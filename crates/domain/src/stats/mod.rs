//! The stat core: fixed-bonus aggregation, the temporary-buff ledger and
//! effective-value arithmetic.
//!
//! A stat's effective value is always `base + fixed + temporary`:
//!
//! ```text
//! [ AttributeBlock (stored base) ]
//!      + [ FixedBonuses (items + spells, always on) ]
//!      + [ BuffLedger (combat grants, drained by damage) ]
//! ```
//!
//! All three layers are pure data; nothing here touches persistence.

pub mod bonus;
pub mod effective;
pub mod ledger;

pub use bonus::{collect_fixed, FixedBonuses};
pub use effective::{attribute_scales, difficulty, StatBreakdown, DIFFICULTY_OFFSET};
pub use ledger::{Buff, BuffGrant, BuffLedger, Depletion};
