//! In-memory record store.
//!
//! Backs tests and embedded use. Same contract as the file store, minus the
//! filesystem.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::infrastructure::ports::{Partition, RecordStore, StoreError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    partitions: RwLock<HashMap<Partition, BTreeMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn put(&self, partition: Partition, id: &str, record: Value) -> Result<(), StoreError> {
        let mut partitions = self.partitions.write().await;
        partitions
            .entry(partition)
            .or_default()
            .insert(id.to_string(), record);
        Ok(())
    }

    async fn get(&self, partition: Partition, id: &str) -> Result<Option<Value>, StoreError> {
        let partitions = self.partitions.read().await;
        Ok(partitions
            .get(&partition)
            .and_then(|records| records.get(id))
            .cloned())
    }

    async fn get_all(&self, partition: Partition) -> Result<Vec<Value>, StoreError> {
        let partitions = self.partitions.read().await;
        Ok(partitions
            .get(&partition)
            .map(|records| records.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn delete(&self, partition: Partition, id: &str) -> Result<(), StoreError> {
        let mut partitions = self.partitions.write().await;
        if let Some(records) = partitions.get_mut(&partition) {
            records.remove(id);
        }
        Ok(())
    }

    async fn clear(&self, partition: Partition) -> Result<(), StoreError> {
        let mut partitions = self.partitions.write().await;
        partitions.remove(&partition);
        Ok(())
    }
}
