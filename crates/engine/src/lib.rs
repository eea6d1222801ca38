//! Cardstock engine: the record store, the play actions and import/export.
//!
//! The engine wraps `cardstock-domain` with everything that touches
//! persistence: a partitioned key-value record store (in-memory and
//! JSON-file adapters), typed repositories, the play-action use cases, the
//! sheet resolver and the import/export surface. Rendering stays outside.

pub mod infrastructure;
pub mod repositories;
pub mod use_cases;

pub use infrastructure::{FileStore, MemoryStore, Partition, RecordStore, StoreError};
pub use repositories::{
    AttackRecords, CategoryRecords, CharacterRecords, GrimoireRecords, ItemRecords, Records,
    SpellRecords, StoredRecord,
};
pub use use_cases::export::{
    BackupDocument, BackupStores, ExportBackup, ExportCard, ExportError, ExportMediaArchive,
    ImportBackup, ImportCard, ImportSummary,
};
pub use use_cases::play::{
    AbilityRef, ActionOutcome, EndCombat, EnterCombat, PlayError, SetInPlay, StatEdit, UpdateStat,
    UseAbility,
};
pub use use_cases::sheet::{CharacterSheetView, ResolveSheet, ResourceView, SheetError};
