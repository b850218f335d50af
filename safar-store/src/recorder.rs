use chrono::Utc;
use safar_core::storage::KeyValueStore;
use safar_shared::models::record::{BackupRecord, RecordKind, RecordStatus};
use serde::Serialize;
use serde_json::Value;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

static LAST_RECORD_ID: AtomicI64 = AtomicI64::new(0);

/// Time-derived record id. Two records landing in the same millisecond
/// get consecutive ids, so ids stay strictly increasing within a process.
fn next_record_id() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_RECORD_ID.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST_RECORD_ID.compare_exchange(last, candidate, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return candidate,
            Err(current) => last = current,
        }
    }
}

/// Appends submissions to the local backup collections. The backup is
/// best-effort durability in the absence of a server: storage trouble is
/// logged and swallowed so it can never block a dispatch.
pub struct BackupRecorder {
    store: Arc<dyn KeyValueStore>,
}

impl BackupRecorder {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Build a backup record for `submission` and append it to the end of
    /// the kind's collection (read-modify-write, insertion order kept).
    /// Bookings start in the pending state; enquiries carry no status.
    pub async fn record<T: Serialize + Clone>(
        &self,
        kind: RecordKind,
        submission: &T,
    ) -> BackupRecord<T> {
        let record = BackupRecord {
            id: next_record_id(),
            created_at: Utc::now(),
            status: match kind {
                RecordKind::Booking => Some(RecordStatus::Pending),
                RecordKind::Enquiry => None,
            },
            submission: submission.clone(),
        };

        let write = async {
            let value = serde_json::to_value(&record)?;
            let mut records = self.load(kind).await;
            records.push(value);
            let serialized = serde_json::to_string(&records)?;
            self.store.set(kind.storage_key(), &serialized).await?;
            Ok::<usize, Box<dyn std::error::Error + Send + Sync>>(records.len())
        };

        match write.await {
            Ok(total) => debug!("{} record {} backed up ({} total)", kind, record.id, total),
            Err(err) => warn!("backup write failed for {} record {}: {}", kind, record.id, err),
        }

        record
    }

    /// Current contents of the kind's collection. A missing key or an
    /// unparseable value reads as an empty collection, never an error.
    pub async fn load(&self, kind: RecordKind) -> Vec<Value> {
        let raw = match self.store.get(kind.storage_key()).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("backup read failed for {}: {}", kind, err);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                warn!("discarding unparseable {} backup collection: {}", kind, err);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use async_trait::async_trait;
    use serde::Deserialize;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Probe {
        name: String,
    }

    fn probe(name: &str) -> Probe {
        Probe {
            name: name.to_string(),
        }
    }

    struct BrokenStore;

    #[async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get(
            &self,
            _key: &str,
        ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(None)
        }

        async fn set(
            &self,
            _key: &str,
            _value: &str,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            Err("quota exceeded".into())
        }
    }

    #[tokio::test]
    async fn appended_record_is_the_last_element_read_back() {
        let store = Arc::new(MemoryStore::new());
        let recorder = BackupRecorder::new(store.clone());

        for i in 0..5 {
            let appended = recorder
                .record(RecordKind::Booking, &probe(&format!("guest-{}", i)))
                .await;

            let raw = store.get("bookings").await.unwrap().unwrap();
            let records: Vec<BackupRecord<Probe>> = serde_json::from_str(&raw).unwrap();
            assert_eq!(records.len(), i + 1);
            assert_eq!(*records.last().unwrap(), appended);
        }
    }

    #[tokio::test]
    async fn record_ids_are_strictly_increasing() {
        let recorder = BackupRecorder::new(Arc::new(MemoryStore::new()));
        let first = recorder.record(RecordKind::Enquiry, &probe("a")).await;
        let second = recorder.record(RecordKind::Enquiry, &probe("b")).await;
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn corrupt_collection_starts_fresh() {
        let store = Arc::new(MemoryStore::new());
        store.seed("bookings", "not json");
        let recorder = BackupRecorder::new(store.clone());

        recorder.record(RecordKind::Booking, &probe("fresh")).await;

        let raw = store.get("bookings").await.unwrap().unwrap();
        let records: Vec<Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["name"], "fresh");
        assert_eq!(records[0]["status"], "pending");
    }

    #[tokio::test]
    async fn enquiry_records_carry_no_status() {
        let store = Arc::new(MemoryStore::new());
        let recorder = BackupRecorder::new(store.clone());

        recorder.record(RecordKind::Enquiry, &probe("q")).await;

        let raw = store.get("enquiries").await.unwrap().unwrap();
        let records: Vec<Value> = serde_json::from_str(&raw).unwrap();
        assert!(records[0].get("status").is_none());
    }

    #[tokio::test]
    async fn failed_write_still_returns_the_record() {
        let recorder = BackupRecorder::new(Arc::new(BrokenStore));
        let record = recorder.record(RecordKind::Booking, &probe("lost")).await;
        assert!(record.id > 0);
        assert_eq!(record.status, Some(RecordStatus::Pending));
    }
}
