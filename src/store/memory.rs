use super::{newest_first, ScanRecord, ScanStore, StoreError};
use std::sync::{Mutex, MutexGuard};

/// Process-local store, used by tests and `--no-record` style callers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<ScanRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<ScanRecord>>, StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl ScanStore for MemoryStore {
    fn record(&self, record: ScanRecord) -> Result<(), StoreError> {
        self.lock()?.push(record);
        Ok(())
    }

    fn recent(&self, slug: &str, limit: usize) -> Result<Vec<ScanRecord>, StoreError> {
        let records = self.lock()?.clone();
        Ok(newest_first(records, slug, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::record_at;
    use std::sync::Arc;

    #[test]
    fn recent_returns_newest_records_for_slug() {
        let store = MemoryStore::new();
        store.record(record_at("a", 10.0, 0)).expect("record should store");
        store.record(record_at("a", 20.0, 60)).expect("record should store");
        store.record(record_at("b", 50.0, 120)).expect("record should store");

        let recent = store.recent("a", 2).expect("query should succeed");
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].score, 20.0);
        assert_eq!(recent[1].score, 10.0);
        assert!(store.recent("missing", 2).expect("query should succeed").is_empty());
        assert_eq!(store.len().expect("count should succeed"), 3);
    }

    #[test]
    fn store_is_shareable_across_threads() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..4i32)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store
                        .record(record_at("shared", f64::from(i), i64::from(i)))
                        .expect("record should store");
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread should finish");
        }
        assert_eq!(store.recent("shared", 10).expect("query should succeed").len(), 4);
    }

    #[test]
    fn poisoned_lock_is_reported_everywhere() {
        let store = Arc::new(MemoryStore::new());
        let poisoner = Arc::clone(&store);
        let outcome = std::thread::spawn(move || {
            let _guard = poisoner.records.lock().expect("lock should be free");
            panic!("poison the store");
        })
        .join();
        assert!(outcome.is_err());

        assert!(matches!(store.len(), Err(StoreError::Unavailable(_))));
        assert!(matches!(store.is_empty(), Err(StoreError::Unavailable(_))));
        assert!(matches!(store.recent("a", 1), Err(StoreError::Unavailable(_))));
        assert!(matches!(
            store.record(record_at("a", 1.0, 0)),
            Err(StoreError::Unavailable(_))
        ));
    }
}
