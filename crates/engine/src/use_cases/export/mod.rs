//! Import/export: single cards, full-store backups and the media archive.

pub mod backup;
pub mod card;
pub mod error;
pub mod media;

pub use backup::{BackupDocument, BackupStores, ExportBackup, ImportBackup, ImportSummary};
pub use card::{ExportCard, ImportCard};
pub use error::ExportError;
pub use media::ExportMediaArchive;
