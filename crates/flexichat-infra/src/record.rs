//! JSON-file implementation of the durable record store.
//!
//! One pretty-printed JSON file (`memory.json`) holds the whole memory
//! record. Loading tolerates anything: a missing file initializes a fresh
//! record, a bare list is salvaged as the conversation log, and malformed
//! or partially-shaped content is repaired field by field via
//! [`MemoryRecord::repair_from_value`]. Whenever repair or initialization
//! changes what is on disk, the valid form is persisted immediately so the
//! next load is clean. That write-back is best-effort: a load never fails
//! its caller, even when the data path is unwritable.

use std::path::{Path, PathBuf};

use flexichat_core::store::RecordStore;
use flexichat_types::error::StoreError;
use flexichat_types::record::MemoryRecord;

/// Durable record store backed by a single JSON file.
pub struct JsonRecordStore {
    path: PathBuf,
}

impl JsonRecordStore {
    /// Create a store for the given file path. Parent directories are
    /// created lazily on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_record(&self, record: &MemoryRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_string_pretty(record)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    async fn write_back(&self, record: &MemoryRecord) {
        if let Err(err) = self.write_record(record).await {
            tracing::warn!(error = %err, "failed to write memory record back");
        }
    }
}

impl RecordStore for JsonRecordStore {
    async fn load(&self) -> Result<MemoryRecord, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no memory record, initializing fresh");
                let record = MemoryRecord::fresh();
                self.write_back(&record).await;
                return Ok(record);
            }
            Err(err) => {
                tracing::warn!(error = %err, "memory record unreadable, resetting to defaults");
                let record = MemoryRecord::fresh();
                self.write_back(&record).await;
                return Ok(record);
            }
        };

        let record = match serde_json::from_str::<serde_json::Value>(&content) {
            Ok(raw) => MemoryRecord::repair_from_value(raw),
            Err(err) => {
                tracing::warn!(error = %err, "memory record unparseable, resetting to defaults");
                MemoryRecord::default()
            }
        };

        let mut record = record;
        if record.meta.created_at.is_none() {
            record.meta.created_at = MemoryRecord::fresh().meta.created_at;
        }

        // persist the repaired shape so the next load starts clean
        self.write_back(&record).await;
        Ok(record)
    }

    async fn save(&self, record: &MemoryRecord) -> Result<(), StoreError> {
        self.write_record(record).await
    }
}
