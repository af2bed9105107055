//! RecordStore trait definition.
//!
//! The port the infrastructure layer implements for durable memory-record
//! persistence (e.g. `JsonRecordStore` in flexichat-infra). Uses native
//! async fn in traits (RPITIT, Rust 2024 edition), the same pattern as the
//! rest of the workspace.

use flexichat_types::error::StoreError;
use flexichat_types::record::MemoryRecord;

/// Durable persistence for the memory record.
///
/// `load` must never surface malformed on-disk content to the engine: the
/// implementation repairs whatever it finds into a well-formed record and
/// persists the repaired form best-effort. `save` may fail; the engine logs and
/// swallows such failures since persistence is best-effort per turn.
pub trait RecordStore: Send + Sync {
    /// Load the record, repairing or initializing as needed.
    fn load(
        &self,
    ) -> impl std::future::Future<Output = Result<MemoryRecord, StoreError>> + Send;

    /// Serialize the current record to durable storage.
    fn save(
        &self,
        record: &MemoryRecord,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}
