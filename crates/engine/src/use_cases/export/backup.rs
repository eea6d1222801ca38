//! Full-store backup.
//!
//! Every partition into one JSON document and back. Import clears each
//! partition *present* in the document before loading it, preserving record
//! ids; partitions absent from the document are left untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cardstock_domain::{Attack, Category, Character, Grimoire, Item, Spell};

use super::error::ExportError;
use crate::infrastructure::ports::Partition;
use crate::repositories::{
    AttackRecords, CategoryRecords, CharacterRecords, GrimoireRecords, ItemRecords, SpellRecords,
};

/// The backup document. Image fields inside the records are already
/// base64-encoded by their serde representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub exported_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<Vec<Character>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spells: Option<Vec<Spell>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attacks: Option<Vec<Attack>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grimoires: Option<Vec<Grimoire>>,
}

/// How many records each partition received on import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: Vec<(Partition, usize)>,
}

#[derive(Clone)]
pub struct BackupStores {
    pub characters: CharacterRecords,
    pub spells: SpellRecords,
    pub items: ItemRecords,
    pub attacks: AttackRecords,
    pub categories: CategoryRecords,
    pub grimoires: GrimoireRecords,
}

pub struct ExportBackup {
    stores: BackupStores,
}

impl ExportBackup {
    pub fn new(stores: BackupStores) -> Self {
        Self { stores }
    }

    pub async fn execute(&self) -> Result<String, ExportError> {
        let document = BackupDocument {
            exported_at: Utc::now(),
            characters: Some(self.stores.characters.list().await?),
            spells: Some(self.stores.spells.list().await?),
            items: Some(self.stores.items.list().await?),
            attacks: Some(self.stores.attacks.list().await?),
            categories: Some(self.stores.categories.list().await?),
            grimoires: Some(self.stores.grimoires.list().await?),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

pub struct ImportBackup {
    stores: BackupStores,
}

impl ImportBackup {
    pub fn new(stores: BackupStores) -> Self {
        Self { stores }
    }

    pub async fn execute(&self, document: &str) -> Result<ImportSummary, ExportError> {
        let document: BackupDocument = serde_json::from_str(document)
            .map_err(|err| ExportError::InvalidDocument(err.to_string()))?;

        let mut summary = ImportSummary::default();
        if let Some(characters) = document.characters {
            self.stores.characters.clear().await?;
            for record in &characters {
                self.stores.characters.save(record).await?;
            }
            summary.imported.push((Partition::Characters, characters.len()));
        }
        if let Some(spells) = document.spells {
            self.stores.spells.clear().await?;
            for record in &spells {
                self.stores.spells.save(record).await?;
            }
            summary.imported.push((Partition::Spells, spells.len()));
        }
        if let Some(items) = document.items {
            self.stores.items.clear().await?;
            for record in &items {
                self.stores.items.save(record).await?;
            }
            summary.imported.push((Partition::Items, items.len()));
        }
        if let Some(attacks) = document.attacks {
            self.stores.attacks.clear().await?;
            for record in &attacks {
                self.stores.attacks.save(record).await?;
            }
            summary.imported.push((Partition::Attacks, attacks.len()));
        }
        if let Some(categories) = document.categories {
            self.stores.categories.clear().await?;
            for record in &categories {
                self.stores.categories.save(record).await?;
            }
            summary.imported.push((Partition::Categories, categories.len()));
        }
        if let Some(grimoires) = document.grimoires {
            self.stores.grimoires.clear().await?;
            for record in &grimoires {
                self.stores.grimoires.save(record).await?;
            }
            summary.imported.push((Partition::Grimoires, grimoires.len()));
        }
        Ok(summary)
    }
}
