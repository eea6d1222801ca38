//! Grimoire entity - multi-volume journals of image-bearing pages.
//!
//! Grimoires group by title; volumes of the same title are sorted by their
//! volume label. Pages keep insertion order and are numbered from one when
//! exported.

use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, GrimoireId};
use crate::value_objects::ImageData;

/// One page of a grimoire volume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrimoireEntry {
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageData>,
}

/// A journal volume owned by a character.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grimoire {
    pub id: GrimoireId,
    pub title: String,
    /// Volume label within the title group, e.g. "Vol. 1" or "Livro I".
    #[serde(default)]
    pub vol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_id: Option<CharacterId>,
    #[serde(default)]
    pub entries: Vec<GrimoireEntry>,
}

impl Grimoire {
    pub fn new(title: impl Into<String>, vol: impl Into<String>) -> Self {
        Self {
            id: GrimoireId::new(),
            title: title.into(),
            vol: vol.into(),
            character_id: None,
            entries: Vec::new(),
        }
    }

    pub fn with_owner(mut self, character_id: CharacterId) -> Self {
        self.character_id = Some(character_id);
        self
    }

    pub fn push_entry(&mut self, entry: GrimoireEntry) {
        self.entries.push(entry);
    }
}
