//! Value objects shared across entities and the stat core.

pub mod attributes;
pub mod augment;
pub mod image;
pub mod stat;

pub use attributes::{AttributeBlock, SkillRating};
pub use augment::{Augment, AugmentKind};
pub use image::ImageData;
pub use stat::{normalize_name, ResourceKind, StatKey, StatTarget};
