//! MemoryStore: ordered in-memory state store
//!
//! Implements the StateStore trait using:
//! - `BTreeMap<String, Vec<u8>>` for lexically ordered keys
//! - `parking_lot::RwLock` for thread-safe access
//! - `AtomicUsize` / `AtomicU64` counters for open scans and writes
//!
//! # Design Notes
//!
//! - **No history**: each key holds only its latest value (last write wins)
//! - **Scan isolation**: a range scan copies its range under the read lock,
//!   so later writes are not visible to an iterator that is already open
//! - **Empty bounds**: an empty start or end key leaves that side unbounded

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use hapit_core::{KeyValue, StateIterator, StateStore, StoreError, StoreResult};

/// In-memory state store using BTreeMap with RwLock
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Ordered map from state key to raw bytes
    data: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
    /// Number of range iterators handed out and not yet closed
    open_scans: Arc<AtomicUsize>,
    /// Total successful writes
    writes: AtomicU64,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entries
    pub fn with_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<u8>)>,
        K: Into<String>,
    {
        let data = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self {
            data: Arc::new(RwLock::new(data)),
            ..Self::default()
        }
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// True if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// All keys in lexical order
    pub fn keys(&self) -> Vec<String> {
        self.data.read().keys().cloned().collect()
    }

    /// Copy of the full contents
    pub fn snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        self.data.read().clone()
    }

    /// Range iterators that have been opened but not closed
    pub fn open_scans(&self) -> usize {
        self.open_scans.load(Ordering::SeqCst)
    }

    /// Successful writes since creation
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    fn bounds<'k>(start: &'k str, end: &'k str) -> (Bound<&'k str>, Bound<&'k str>) {
        let lo = if start.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start)
        };
        let hi = if end.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end)
        };
        (lo, hi)
    }
}

impl StateStore for MemoryStore {
    fn get_state(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> StoreResult<()> {
        self.data.write().insert(key.to_string(), value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn open_range(&self, start: &str, end: &str) -> StoreResult<Box<dyn StateIterator + '_>> {
        // BTreeMap::range panics on an inverted range
        let entries: Vec<KeyValue> = if !start.is_empty() && !end.is_empty() && start >= end {
            Vec::new()
        } else {
            let data = self.data.read();
            data.range::<str, _>(Self::bounds(start, end))
                .map(|(k, v)| KeyValue::new(k.clone(), v.clone()))
                .collect()
        };

        self.open_scans.fetch_add(1, Ordering::SeqCst);
        tracing::trace!(target: "hapit::store", start, end, entries = entries.len(), "Opened range scan");

        Ok(Box::new(MemoryIter {
            entries: entries.into_iter(),
            open_scans: Arc::clone(&self.open_scans),
            closed: false,
        }))
    }
}

/// Iterator over a copied key range
struct MemoryIter {
    entries: std::vec::IntoIter<KeyValue>,
    open_scans: Arc<AtomicUsize>,
    closed: bool,
}

impl StateIterator for MemoryIter {
    fn next_entry(&mut self) -> StoreResult<Option<KeyValue>> {
        if self.closed {
            return Err(StoreError::IteratorClosed);
        }
        Ok(self.entries.next())
    }

    fn close(&mut self) -> StoreResult<()> {
        if !self.closed {
            self.closed = true;
            self.open_scans.fetch_sub(1, Ordering::SeqCst);
        }
        Ok(())
    }
}

impl Drop for MemoryIter {
    fn drop(&mut self) {
        // Dropping a raw iterator without closing it still releases the slot
        let _ = self.close();
    }
}
