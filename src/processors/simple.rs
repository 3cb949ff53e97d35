//! Synchronous processor: one record in, one single-element export out

use crate::core::error::panic_message;
use crate::core::{ExportResult, LogExporter, LogProcessor, LogRecord, Result, ShutdownSignal};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Forwards every record to its exporter immediately, on the calling thread
///
/// The [`ExportResult`] of each call is dropped after logging it at debug
/// level: this processor is fire-and-forget and never reports export
/// failures to the emitter. There is no buffering and no retry. A slow
/// exporter stalls the emitting thread for the duration of the call.
///
/// # Example
///
/// ```
/// use rust_log_pipeline::prelude::*;
///
/// let exporter = InMemoryLogExporter::new();
/// let processor = SimpleLogProcessor::new(exporter.clone());
///
/// processor.on_emit(LogRecord::new(Severity::Info, "direct"));
/// assert_eq!(exporter.finished_count(), 1);
/// ```
pub struct SimpleLogProcessor {
    exporter: Box<dyn LogExporter>,
    shutdown: ShutdownSignal,
}

impl SimpleLogProcessor {
    pub fn new<E: LogExporter + 'static>(exporter: E) -> Self {
        Self::from_boxed(Box::new(exporter))
    }

    pub fn from_boxed(exporter: Box<dyn LogExporter>) -> Self {
        Self {
            exporter,
            shutdown: ShutdownSignal::new(),
        }
    }

    pub fn exporter_name(&self) -> &str {
        self.exporter.name()
    }
}

impl LogProcessor for SimpleLogProcessor {
    fn on_emit(&self, record: LogRecord) {
        let result = catch_unwind(AssertUnwindSafe(|| self.exporter.export(vec![record])));

        match result {
            Ok(ExportResult::Success) => {}
            Ok(ExportResult::Failure(reason)) => {
                tracing::debug!(
                    exporter = self.exporter.name(),
                    reason = %reason,
                    "Export failed; record dropped"
                );
            }
            Err(panic_info) => {
                tracing::error!(
                    exporter = self.exporter.name(),
                    panic = %panic_message(panic_info.as_ref()),
                    "Exporter panicked; record dropped"
                );
            }
        }
    }

    fn force_flush(&self) -> Result<()> {
        self.exporter.force_flush()
    }

    fn shutdown(&self) -> Result<()> {
        if !self.shutdown.trigger() {
            return Ok(());
        }
        self.exporter.shutdown()
    }

    fn name(&self) -> &str {
        "simple"
    }
}
