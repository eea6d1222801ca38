//! JSON-file-backed record store using tokio::fs for async file operations.
//!
//! One file per partition (`characters.json`, `spells.json`, ...), each a
//! JSON object keyed by record id. Whole-file rewrite per mutation: record
//! counts are small (a few hundred at most) and the surrounding action
//! layer already serializes mutations, so a single internal lock is enough.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::infrastructure::ports::{Partition, RecordStore, StoreError};

pub struct FileStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn partition_path(&self, partition: Partition) -> PathBuf {
        self.dir.join(format!("{}.json", partition.name()))
    }

    async fn load(&self, partition: Partition) -> Result<BTreeMap<String, Value>, StoreError> {
        match read_partition_file(&self.partition_path(partition)).await {
            Ok(records) => Ok(records),
            Err(err) => Err(StoreError::Backend(format!(
                "reading partition {partition}: {err:#}"
            ))),
        }
    }

    async fn save(
        &self,
        partition: Partition,
        records: &BTreeMap<String, Value>,
    ) -> Result<(), StoreError> {
        write_partition_file(&self.dir, &self.partition_path(partition), records)
            .await
            .map_err(|err| StoreError::Backend(format!("writing partition {partition}: {err:#}")))
    }
}

async fn read_partition_file(path: &Path) -> anyhow::Result<BTreeMap<String, Value>> {
    match fs::read(path).await {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
        Err(err) => Err(err.into()),
    }
}

async fn write_partition_file(
    dir: &Path,
    path: &Path,
    records: &BTreeMap<String, Value>,
) -> anyhow::Result<()> {
    fs::create_dir_all(dir).await?;
    let mut file = fs::File::create(path).await?;
    file.write_all(&serde_json::to_vec_pretty(records)?).await?;
    file.flush().await?;
    Ok(())
}

#[async_trait]
impl RecordStore for FileStore {
    async fn put(&self, partition: Partition, id: &str, record: Value) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load(partition).await?;
        records.insert(id.to_string(), record);
        self.save(partition, &records).await
    }

    async fn get(&self, partition: Partition, id: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.load(partition).await?.remove(id))
    }

    async fn get_all(&self, partition: Partition) -> Result<Vec<Value>, StoreError> {
        Ok(self.load(partition).await?.into_values().collect())
    }

    async fn delete(&self, partition: Partition, id: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load(partition).await?;
        if records.remove(id).is_some() {
            self.save(partition, &records).await?;
        }
        Ok(())
    }

    async fn clear(&self, partition: Partition) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.save(partition, &BTreeMap::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn round_trips_records_through_the_filesystem() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());

        store
            .put(Partition::Characters, "a", json!({"title": "Yana"}))
            .await
            .expect("put");

        let record = store.get(Partition::Characters, "a").await.expect("get");
        assert_eq!(record, Some(json!({"title": "Yana"})));
    }

    #[tokio::test]
    async fn records_survive_reopening_the_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        {
            let store = FileStore::new(dir.path());
            store
                .put(Partition::Spells, "s", json!({"name": "Bola de Fogo"}))
                .await
                .expect("put");
        }

        let reopened = FileStore::new(dir.path());
        let all = reopened.get_all(Partition::Spells).await.expect("get_all");
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn missing_partition_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());
        assert!(store
            .get_all(Partition::Grimoires)
            .await
            .expect("get_all")
            .is_empty());
    }

    #[tokio::test]
    async fn delete_persists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());
        store.put(Partition::Items, "a", json!(1)).await.expect("put");
        store.put(Partition::Items, "b", json!(2)).await.expect("put");
        store.delete(Partition::Items, "a").await.expect("delete");

        let reopened = FileStore::new(dir.path());
        let all = reopened.get_all(Partition::Items).await.expect("get_all");
        assert_eq!(all, vec![json!(2)]);
    }

    #[tokio::test]
    async fn corrupt_partition_file_surfaces_a_backend_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        tokio::fs::write(dir.path().join("items.json"), b"not json")
            .await
            .expect("write");

        let store = FileStore::new(dir.path());
        let err = store.get_all(Partition::Items).await.expect_err("corrupt");
        assert!(matches!(err, StoreError::Backend(_)));
    }
}
