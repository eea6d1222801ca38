//! Port traits for infrastructure boundaries.
//!
//! The record store is the only abstraction in the engine: a partitioned
//! key-value store of whole JSON records, mirroring the persistence contract
//! of the original card manager (put-or-replace by full record, get by id or
//! get all, delete by id). No multi-record atomicity is assumed; every
//! action reads the latest record, mutates it in memory and writes it back.

use async_trait::async_trait;
use serde_json::Value;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Store backend error: {0}")]
    Backend(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

// =============================================================================
// Partitions
// =============================================================================

/// The named partitions of the store, one per record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Partition {
    Characters,
    Spells,
    Items,
    Attacks,
    Categories,
    Grimoires,
}

impl Partition {
    pub const ALL: [Partition; 6] = [
        Partition::Characters,
        Partition::Spells,
        Partition::Items,
        Partition::Attacks,
        Partition::Categories,
        Partition::Grimoires,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Partition::Characters => "characters",
            Partition::Spells => "spells",
            Partition::Items => "items",
            Partition::Attacks => "attacks",
            Partition::Categories => "categories",
            Partition::Grimoires => "grimoires",
        }
    }
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Record Store Port
// =============================================================================

/// Partitioned key-value store of whole JSON records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert or replace the record stored under `id`.
    async fn put(&self, partition: Partition, id: &str, record: Value) -> Result<(), StoreError>;

    /// Fetch one record, `None` when absent.
    async fn get(&self, partition: Partition, id: &str) -> Result<Option<Value>, StoreError>;

    /// Every record in the partition, ordered by id.
    async fn get_all(&self, partition: Partition) -> Result<Vec<Value>, StoreError>;

    /// Remove the record under `id`; removing an absent id is not an error.
    async fn delete(&self, partition: Partition, id: &str) -> Result<(), StoreError>;

    /// Drop every record in the partition.
    async fn clear(&self, partition: Partition) -> Result<(), StoreError>;
}
