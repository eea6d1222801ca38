//! Infrastructure: the record-store port and its adapters.

pub mod persistence;
pub mod ports;

pub use persistence::{FileStore, MemoryStore};
pub use ports::{Partition, RecordStore, StoreError};
