//! Typed repositories over the record store.
//!
//! Each record kind gets a thin typed wrapper around the JSON port: records
//! are serialized whole on save and deserialized whole on read. Listing is
//! lenient - a record that no longer deserializes is skipped with a log
//! instead of failing the listing, in line with the degrade-to-absent error
//! policy of the rest of the core.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use cardstock_domain::{Attack, Category, Character, Grimoire, Item, Spell};

use crate::infrastructure::ports::{Partition, RecordStore, StoreError};

/// A record kind with a home partition and a string id.
pub trait StoredRecord: Serialize + DeserializeOwned + Send + Sync {
    const PARTITION: Partition;

    fn id_string(&self) -> String;
}

impl StoredRecord for Character {
    const PARTITION: Partition = Partition::Characters;

    fn id_string(&self) -> String {
        self.id.to_string()
    }
}

impl StoredRecord for Spell {
    const PARTITION: Partition = Partition::Spells;

    fn id_string(&self) -> String {
        self.id.to_string()
    }
}

impl StoredRecord for Item {
    const PARTITION: Partition = Partition::Items;

    fn id_string(&self) -> String {
        self.id.to_string()
    }
}

impl StoredRecord for Attack {
    const PARTITION: Partition = Partition::Attacks;

    fn id_string(&self) -> String {
        self.id.to_string()
    }
}

impl StoredRecord for Category {
    const PARTITION: Partition = Partition::Categories;

    fn id_string(&self) -> String {
        self.id.to_string()
    }
}

impl StoredRecord for Grimoire {
    const PARTITION: Partition = Partition::Grimoires;

    fn id_string(&self) -> String {
        self.id.to_string()
    }
}

/// Typed access to one partition.
pub struct Records<T> {
    store: Arc<dyn RecordStore>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Records<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _marker: PhantomData,
        }
    }
}

impl<T: StoredRecord> Records<T> {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    pub async fn get(&self, id: impl ToString) -> Result<Option<T>, StoreError> {
        let value = self.store.get(T::PARTITION, &id.to_string()).await?;
        value
            .map(|v| serde_json::from_value(v).map_err(StoreError::from))
            .transpose()
    }

    /// Insert or replace the whole record.
    pub async fn save(&self, record: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(record)?;
        self.store.put(T::PARTITION, &record.id_string(), value).await
    }

    pub async fn delete(&self, id: impl ToString) -> Result<(), StoreError> {
        self.store.delete(T::PARTITION, &id.to_string()).await
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        let values = self.store.get_all(T::PARTITION).await?;
        let mut records = Vec::with_capacity(values.len());
        for value in values {
            match serde_json::from_value(value) {
                Ok(record) => records.push(record),
                Err(err) => {
                    tracing::warn!(
                        partition = T::PARTITION.name(),
                        error = %err,
                        "skipping unreadable record"
                    );
                }
            }
        }
        Ok(records)
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store.clear(T::PARTITION).await
    }
}

pub type CharacterRecords = Records<Character>;
pub type SpellRecords = Records<Spell>;
pub type ItemRecords = Records<Item>;
pub type AttackRecords = Records<Attack>;
pub type CategoryRecords = Records<Category>;
pub type GrimoireRecords = Records<Grimoire>;

impl CharacterRecords {
    /// The single character currently marked in play, if any.
    pub async fn find_in_play(&self) -> Result<Option<Character>, StoreError> {
        Ok(self.list().await?.into_iter().find(|c| c.in_play))
    }
}
