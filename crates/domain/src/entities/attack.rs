//! Attack entity.

use serde::{Deserialize, Serialize};

use crate::ids::AttackId;
use crate::value_objects::ImageData;

/// An attack card. Attacks carry no augments; they are descriptive records
/// referenced from character sheets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    pub id: AttackId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Attack-roll text, e.g. "1d20 + Luta".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,
    /// Damage text, e.g. "2d6 + 3".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageData>,
}

impl Attack {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: AttackId::new(),
            name: name.into(),
            description: String::new(),
            test: None,
            damage: None,
            image: None,
        }
    }
}
