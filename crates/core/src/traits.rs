//! State-store capability traits
//!
//! The contract never owns its state. The host runtime hands every
//! invocation a [`StateStore`] exposing point reads, writes and lexical range
//! scans over the ledger's current materialized state. These traits are the
//! whole boundary: swapping the host (or the in-memory backend used in tests)
//! never touches the handlers.

use std::sync::Arc;

use crate::error::StoreResult;
use crate::types::KeyValue;

/// Host-owned key-value state with range-scan support
///
/// Thread safety: implementations must be `Send + Sync`. The contract itself
/// performs no locking; concurrent invocations touching the same keys are
/// resolved by the host.
pub trait StateStore: Send + Sync {
    /// Read the value stored at `key`
    ///
    /// Returns `Ok(None)` if the key has never been written. A missing key
    /// is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the host fails the read.
    fn get_state(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Write `value` at `key`, replacing any previous value (last write wins)
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the write.
    fn put_state(&self, key: &str, value: Vec<u8>) -> StoreResult<()>;

    /// Open a raw iterator over `start <= key < end` in lexical byte order
    ///
    /// An empty `start` or `end` leaves that side unbounded. Callers should
    /// prefer [`StateStore::range_scan`], which guarantees the iterator is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot open the scan.
    fn open_range(&self, start: &str, end: &str) -> StoreResult<Box<dyn StateIterator + '_>>;

    /// Open a scoped range scan over `start <= key < end`
    ///
    /// The returned [`RangeScan`] closes the underlying iterator when it is
    /// closed explicitly or dropped, whichever comes first.
    fn range_scan(&self, start: &str, end: &str) -> StoreResult<RangeScan<'_>> {
        Ok(RangeScan::new(self.open_range(start, end)?))
    }
}

impl<T: StateStore + ?Sized> StateStore for Arc<T> {
    fn get_state(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        (**self).get_state(key)
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> StoreResult<()> {
        (**self).put_state(key, value)
    }

    fn open_range(&self, start: &str, end: &str) -> StoreResult<Box<dyn StateIterator + '_>> {
        (**self).open_range(start, end)
    }
}

/// Raw iterator handed out by a host for a range scan
///
/// Must be closed exactly once. Use [`RangeScan`] rather than driving this
/// directly.
pub trait StateIterator: Send {
    /// Advance the iterator
    ///
    /// Returns `Ok(None)` once the range is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the host fails mid-scan.
    fn next_entry(&mut self) -> StoreResult<Option<KeyValue>>;

    /// Release the host resources held by this iterator
    ///
    /// # Errors
    ///
    /// Returns an error if the host fails to release the iterator.
    fn close(&mut self) -> StoreResult<()>;
}

/// Scoped range-scan handle
///
/// Wraps a [`StateIterator`] and implements [`Iterator`]. The first error
/// ends iteration. The underlying iterator is closed exactly once, either by
/// [`RangeScan::close`] or when the handle is dropped on any other exit path.
pub struct RangeScan<'a> {
    inner: Box<dyn StateIterator + 'a>,
    closed: bool,
    done: bool,
}

impl<'a> RangeScan<'a> {
    /// Take ownership of a raw iterator
    pub fn new(inner: Box<dyn StateIterator + 'a>) -> Self {
        Self {
            inner,
            closed: false,
            done: false,
        }
    }

    /// Close the scan, reporting any release failure to the caller
    ///
    /// # Errors
    ///
    /// Returns an error if the host fails to release the iterator.
    pub fn close(mut self) -> StoreResult<()> {
        self.release()
    }

    fn release(&mut self) -> StoreResult<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.inner.close()
    }
}

impl Iterator for RangeScan<'_> {
    type Item = StoreResult<KeyValue>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.closed {
            return None;
        }
        match self.inner.next_entry() {
            Ok(Some(kv)) => Some(Ok(kv)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl Drop for RangeScan<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            tracing::warn!(target: "hapit::store", error = %e, "Failed to close range iterator");
        }
    }
}

impl std::fmt::Debug for RangeScan<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeScan")
            .field("closed", &self.closed)
            .field("done", &self.done)
            .finish()
    }
}
