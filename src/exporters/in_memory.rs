//! In-memory exporter that retains records for inspection in tests

use crate::core::{ExportFailure, ExportResult, LifecycleState, LogExporter, LogRecord, Result};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Inner {
    records: Vec<LogRecord>,
    state: LifecycleState,
}

/// Exporter that keeps every exported record in an ordered buffer
///
/// Clones share the same buffer, so a test can hand one clone to a
/// processor and keep another for assertions. Buffer and lifecycle state
/// live behind one lock: each `export` appends its batch as a contiguous
/// run, and every call observes a consistent state.
///
/// Shutdown empties the buffer. This includes the implicit shutdown when the
/// last handle to an [`EmitterProvider`](crate::core::EmitterProvider) or one
/// of its emitters is dropped, so keep the provider alive until the records
/// have been read.
///
/// | call | while active | after shutdown |
/// |---|---|---|
/// | `export` | appends, `Success` | no change, `Failure` |
/// | `reset` | clears the buffer | no-op |
/// | `shutdown` | clears, moves to shut down | no-op |
///
/// # Example
///
/// ```
/// use rust_log_pipeline::prelude::*;
///
/// let exporter = InMemoryLogExporter::new();
/// let record = LogRecord::new(Severity::Debug, "message 1");
///
/// assert!(exporter.export(vec![record.clone()]).is_success());
/// exporter.shutdown().unwrap();
/// assert!(exporter.export(vec![record]).is_failure());
/// assert!(exporter.get_finished_log_items().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLogExporter {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryLogExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the records exported so far, in export order
    ///
    /// The returned vector is owned by the caller; later exports, resets
    /// or shutdowns do not change it.
    pub fn get_finished_log_items(&self) -> Vec<LogRecord> {
        self.inner.lock().records.clone()
    }

    pub fn finished_count(&self) -> usize {
        self.inner.lock().records.len()
    }

    /// Clear the buffer for reuse; does nothing once shut down
    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        if inner.state.is_active() {
            inner.records.clear();
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.inner.lock().state
    }

    pub fn is_shutdown(&self) -> bool {
        self.state() == LifecycleState::ShutDown
    }
}

impl LogExporter for InMemoryLogExporter {
    fn export(&self, batch: Vec<LogRecord>) -> ExportResult {
        let mut inner = self.inner.lock();
        if !inner.state.is_active() {
            return ExportResult::Failure(ExportFailure::ExporterShutdown);
        }
        inner.records.extend(batch);
        ExportResult::Success
    }

    /// Drop everything retained and refuse further exports
    fn shutdown(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.records.clear();
        inner.state = LifecycleState::ShutDown;
        Ok(())
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}
