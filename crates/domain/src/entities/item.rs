//! Item entity - equipment and carried objects.

use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, ItemId};
use crate::value_objects::{Augment, ImageData};

/// An item card.
///
/// A data-carrying struct with no invariants to protect: any combination of
/// field values is a valid record. Augments are matched lazily by the stat
/// core, so malformed entries are tolerated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Owning character, when the item lives in someone's inventory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<CharacterId>,
    /// Carry weight; display-only, summed against strength by the UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(rename = "aumentos", default)]
    pub augments: Vec<Augment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageData>,
}

fn default_quantity() -> u32 {
    1
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            description: String::new(),
            owner: None,
            weight: None,
            quantity: 1,
            augments: Vec::new(),
            image: None,
        }
    }

    pub fn with_owner(mut self, owner: CharacterId) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_augments(mut self, augments: Vec<Augment>) -> Self {
        self.augments = augments;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::AugmentKind;

    #[test]
    fn deserializes_record_without_augment_list() {
        let json = format!(r#"{{"id": "{}", "name": "Adaga"}}"#, ItemId::new());
        let item: Item = serde_json::from_str(&json).expect("deserialize");
        assert!(item.augments.is_empty());
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn augments_round_trip_under_sheet_field_names() {
        let item = Item::new("Escudo").with_augments(vec![Augment::fixed("Bloqueio", 2)]);
        let json = serde_json::to_string(&item).expect("serialize");
        assert!(json.contains("\"aumentos\""));
        assert!(json.contains("\"tipo\":\"fixo\""));

        let back: Item = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.augments.len(), 1);
        assert_eq!(back.augments[0].kind, AugmentKind::Fixed);
    }
}
