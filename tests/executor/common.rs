//! Common test utilities for executor tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use hapit::{
    Contract, HabitContract, Invocation, KeyValue, MemoryStore, Response, StateIterator,
    StateStore, StoreError, StoreResult,
};

static INIT_TRACING: Once = Once::new();

/// Route executor logs to the test harness output
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Create a contract with the default configuration
pub fn create_contract() -> HabitContract {
    init_tracing();
    HabitContract::default()
}

/// Invoke `function` with string-slice arguments
pub fn invoke(contract: &HabitContract, store: &dyn StateStore, function: &str, args: &[&str]) -> Response {
    let args = args.iter().map(|s| s.to_string()).collect();
    contract.invoke(store, Invocation::new(function, args))
}

/// Invoke and require success, returning the payload
pub fn invoke_ok(contract: &HabitContract, store: &dyn StateStore, function: &str, args: &[&str]) -> Vec<u8> {
    let response = invoke(contract, store, function, args);
    assert!(
        response.is_success(),
        "{} failed: {}",
        function,
        response.message
    );
    response.payload
}

/// Parse a payload as JSON
pub fn payload_json(payload: &[u8]) -> serde_json::Value {
    serde_json::from_slice(payload).expect("payload should be JSON")
}

// ============================================================================
// FaultyStore - MemoryStore with injectable failures
// ============================================================================

/// State store that fails selected operations with a fixed message
#[derive(Default)]
pub struct FaultyStore {
    pub inner: MemoryStore,
    pub fail_get: bool,
    pub fail_put: bool,
    pub fail_open_range: bool,
    /// Fail the scan on this zero-based `next_entry` call
    pub fail_scan_at: Option<usize>,
    /// Fail when the scan is closed
    pub fail_close: bool,
    pub closes: Arc<AtomicUsize>,
}

impl FaultyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

impl StateStore for FaultyStore {
    fn get_state(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        if self.fail_get {
            return Err(StoreError::backend(format!("get {} failed", key)));
        }
        self.inner.get_state(key)
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> StoreResult<()> {
        if self.fail_put {
            return Err(StoreError::backend(format!("put {} failed", key)));
        }
        self.inner.put_state(key, value)
    }

    fn open_range(&self, start: &str, end: &str) -> StoreResult<Box<dyn StateIterator + '_>> {
        if self.fail_open_range {
            return Err(StoreError::backend("range unavailable"));
        }
        Ok(Box::new(FaultyIter {
            inner: self.inner.open_range(start, end)?,
            calls: 0,
            fail_at: self.fail_scan_at,
            fail_close: self.fail_close,
            closes: Arc::clone(&self.closes),
        }))
    }
}

struct FaultyIter<'a> {
    inner: Box<dyn StateIterator + 'a>,
    calls: usize,
    fail_at: Option<usize>,
    fail_close: bool,
    closes: Arc<AtomicUsize>,
}

impl StateIterator for FaultyIter<'_> {
    fn next_entry(&mut self) -> StoreResult<Option<KeyValue>> {
        let call = self.calls;
        self.calls += 1;
        if self.fail_at == Some(call) {
            return Err(StoreError::backend("iterator failed mid-scan"));
        }
        self.inner.next_entry()
    }

    fn close(&mut self) -> StoreResult<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        self.inner.close()?;
        if self.fail_close {
            return Err(StoreError::backend("close failed"));
        }
        Ok(())
    }
}
