//! Sheet resolution: the read side of the character card.

pub mod resolve;

pub use resolve::{
    AttributeLine, CharacterSheetView, ResolveSheet, ResourceView, SheetError, SkillLine, StatLine,
};
