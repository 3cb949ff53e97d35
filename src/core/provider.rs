//! Emitter provider: owns the processors and the shared shutdown state

use super::{
    emitter::LogEmitterBuilder,
    error::{panic_message, PipelineError, Result},
    exporter::LogExporter,
    lifecycle::{LifecycleState, ShutdownSignal},
    log_record::LogRecord,
    metrics::PipelineMetrics,
    processor::LogProcessor,
};
use crate::processors::SimpleLogProcessor;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// State shared by a provider, its clones and every emitter it built
pub(crate) struct ProviderShared {
    processors: Vec<Box<dyn LogProcessor>>,
    shutdown: ShutdownSignal,
    metrics: PipelineMetrics,
}

impl ProviderShared {
    /// Hand a finalized record to every processor in registration order
    ///
    /// All processors but the last get a clone; the last takes ownership.
    pub(crate) fn dispatch(&self, record: LogRecord) {
        if self.shutdown.is_triggered() {
            self.metrics.record_rejected();
            return;
        }
        self.metrics.record_emitted();

        if let Some((last, rest)) = self.processors.split_last() {
            for processor in rest {
                self.forward(processor.as_ref(), record.clone());
            }
            self.forward(last.as_ref(), record);
        }
    }

    /// Per-processor panic isolation: one failing processor must not keep
    /// the record from the others or unwind into the emitter.
    fn forward(&self, processor: &dyn LogProcessor, record: LogRecord) {
        let result = catch_unwind(AssertUnwindSafe(|| processor.on_emit(record)));
        if let Err(panic_info) = result {
            self.metrics.record_processor_failure();
            tracing::error!(
                processor = processor.name(),
                panic = %panic_message(panic_info.as_ref()),
                "Processor panicked in on_emit; other processors continue to function"
            );
        }
    }

    fn shutdown(&self) -> Result<()> {
        if !self.shutdown.trigger() {
            tracing::debug!("Emitter provider already shut down");
            return Ok(());
        }

        let total = self.processors.len();
        let mut failed = 0;
        for (idx, processor) in self.processors.iter().enumerate() {
            match catch_unwind(AssertUnwindSafe(|| processor.shutdown())) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    tracing::warn!(
                        index = idx,
                        processor = processor.name(),
                        error = %e,
                        "Processor shutdown failed"
                    );
                    failed += 1;
                }
                Err(panic_info) => {
                    tracing::error!(
                        index = idx,
                        processor = processor.name(),
                        panic = %panic_message(panic_info.as_ref()),
                        "Processor panicked during shutdown"
                    );
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            self.metrics.record_shutdown_failures(failed as u64);
            return Err(PipelineError::shutdown_failed(failed, total));
        }
        tracing::debug!(processors = total, "Emitter provider shut down");
        Ok(())
    }

    fn force_flush(&self) -> Result<()> {
        let mut failed = 0;
        for processor in &self.processors {
            match catch_unwind(AssertUnwindSafe(|| processor.force_flush())) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    tracing::warn!(processor = processor.name(), error = %e, "Processor flush failed");
                    failed += 1;
                }
                Err(panic_info) => {
                    tracing::error!(
                        processor = processor.name(),
                        panic = %panic_message(panic_info.as_ref()),
                        "Processor panicked during flush"
                    );
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            return Err(PipelineError::other(format!(
                "Flush incomplete: {} of {} processors failed",
                failed,
                self.processors.len()
            )));
        }
        Ok(())
    }

    pub(crate) fn is_shutdown(&self) -> bool {
        self.shutdown.is_triggered()
    }
}

impl Drop for ProviderShared {
    fn drop(&mut self) {
        // Last handle gone without an explicit shutdown
        if !self.shutdown.is_triggered() {
            if let Err(e) = self.shutdown() {
                tracing::warn!(error = %e, "Emitter provider shutdown on drop was incomplete");
            }
        }

        let rejected = self.metrics.records_rejected();
        if rejected > 0 {
            tracing::debug!(
                rejected,
                rejection_rate = self.metrics.rejection_rate(),
                "Records were emitted after shutdown and discarded"
            );
        }
    }
}

/// Owner of the processor list and the shutdown lifecycle
///
/// Cloning is cheap; clones and every emitter created from any clone share
/// the same processors and the same shutdown flag.
///
/// # Example
///
/// ```
/// use rust_log_pipeline::prelude::*;
///
/// let exporter = InMemoryLogExporter::new();
/// let provider = EmitterProvider::builder()
///     .with_simple_exporter(exporter.clone())
///     .build();
///
/// let emitter = provider.log_emitter_builder("checkout").build();
/// emitter.log_builder().set_severity(Severity::Info).set_body("order placed").emit();
///
/// assert_eq!(exporter.get_finished_log_items().len(), 1);
/// provider.shutdown().unwrap();
/// ```
#[derive(Clone)]
pub struct EmitterProvider {
    shared: Arc<ProviderShared>,
}

impl EmitterProvider {
    /// Create a builder for EmitterProvider
    #[must_use]
    pub fn builder() -> EmitterProviderBuilder {
        EmitterProviderBuilder::new()
    }

    /// Start building an emitter bound to this provider
    pub fn log_emitter_builder(&self, name: impl Into<String>) -> LogEmitterBuilder {
        LogEmitterBuilder::new(Arc::clone(&self.shared), name.into())
    }

    /// Shut down the provider and then every processor, in registration order
    ///
    /// The provider is marked shut down before any processor is touched, so
    /// emitters stop forwarding immediately. A failing processor does not
    /// prevent the rest from shutting down; the failure count is reported
    /// once all of them ran. Calls after the first do nothing.
    pub fn shutdown(&self) -> Result<()> {
        self.shared.shutdown()
    }

    /// Flush every processor, best-effort
    pub fn force_flush(&self) -> Result<()> {
        self.shared.force_flush()
    }

    pub fn is_shutdown(&self) -> bool {
        self.shared.is_shutdown()
    }

    pub fn state(&self) -> LifecycleState {
        self.shared.shutdown.state()
    }

    pub fn processor_count(&self) -> usize {
        self.shared.processors.len()
    }

    /// Get the provider metrics
    pub fn metrics(&self) -> &PipelineMetrics {
        &self.shared.metrics
    }
}

impl fmt::Debug for EmitterProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.shared.processors.iter().map(|p| p.name()).collect();
        f.debug_struct("EmitterProvider")
            .field("processors", &names)
            .field("state", &self.state())
            .finish()
    }
}

/// Builder for constructing EmitterProvider with a fluent API
///
/// The processor list is fixed once `build()` is called.
pub struct EmitterProviderBuilder {
    processors: Vec<Box<dyn LogProcessor>>,
}

impl EmitterProviderBuilder {
    pub fn new() -> Self {
        Self {
            processors: Vec::new(),
        }
    }

    /// Register a processor; processors run in the order they are added
    #[must_use = "builder methods return a new value"]
    pub fn add_processor<P: LogProcessor + 'static>(mut self, processor: P) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    /// Register an exporter behind a [`SimpleLogProcessor`]
    #[must_use = "builder methods return a new value"]
    pub fn with_simple_exporter<E: LogExporter + 'static>(self, exporter: E) -> Self {
        self.add_processor(SimpleLogProcessor::new(exporter))
    }

    pub fn build(self) -> EmitterProvider {
        EmitterProvider {
            shared: Arc::new(ProviderShared {
                processors: self.processors,
                shutdown: ShutdownSignal::new(),
                metrics: PipelineMetrics::new(),
            }),
        }
    }
}

impl Default for EmitterProviderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;
    use parking_lot::Mutex;

    /// Records every call it receives into a shared journal
    struct JournalProcessor {
        name: String,
        journal: Arc<Mutex<Vec<String>>>,
        fail_shutdown: bool,
        panic_on_emit: bool,
    }

    impl JournalProcessor {
        fn new(name: &str, journal: &Arc<Mutex<Vec<String>>>) -> Self {
            Self {
                name: name.to_string(),
                journal: Arc::clone(journal),
                fail_shutdown: false,
                panic_on_emit: false,
            }
        }
    }

    impl LogProcessor for JournalProcessor {
        fn on_emit(&self, record: LogRecord) {
            if self.panic_on_emit {
                panic!("{} cannot take records", self.name);
            }
            self.journal
                .lock()
                .push(format!("{}:emit:{}", self.name, record.body()));
        }

        fn shutdown(&self) -> Result<()> {
            self.journal.lock().push(format!("{}:shutdown", self.name));
            if self.fail_shutdown {
                return Err(PipelineError::other("exporter unreachable"));
            }
            Ok(())
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    fn journal() -> Arc<Mutex<Vec<String>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    #[test]
    fn test_dispatch_in_registration_order() {
        let journal = journal();
        let provider = EmitterProvider::builder()
            .add_processor(JournalProcessor::new("first", &journal))
            .add_processor(JournalProcessor::new("second", &journal))
            .build();

        let emitter = provider.log_emitter_builder("test").build();
        emitter.log_builder().set_body("hello").emit();

        assert_eq!(
            *journal.lock(),
            vec!["first:emit:hello".to_string(), "second:emit:hello".to_string()]
        );
        assert_eq!(provider.metrics().records_emitted(), 1);
    }

    #[test]
    fn test_shutdown_is_visible_to_existing_emitters() {
        let journal = journal();
        let provider = EmitterProvider::builder()
            .add_processor(JournalProcessor::new("only", &journal))
            .build();
        let emitter = provider.log_emitter_builder("test").build();

        provider.shutdown().unwrap();
        emitter.log_builder().set_body("late").emit();

        assert_eq!(*journal.lock(), vec!["only:shutdown".to_string()]);
        assert_eq!(provider.metrics().records_rejected(), 1);
        assert_eq!(provider.state(), LifecycleState::ShutDown);
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let journal = journal();
        let provider = EmitterProvider::builder()
            .add_processor(JournalProcessor::new("only", &journal))
            .build();

        provider.shutdown().unwrap();
        provider.shutdown().unwrap();
        provider.clone().shutdown().unwrap();

        assert_eq!(*journal.lock(), vec!["only:shutdown".to_string()]);
    }

    #[test]
    fn test_shutdown_continues_past_failing_processor() {
        let journal = journal();
        let mut failing = JournalProcessor::new("b", &journal);
        failing.fail_shutdown = true;

        let provider = EmitterProvider::builder()
            .add_processor(JournalProcessor::new("a", &journal))
            .add_processor(failing)
            .add_processor(JournalProcessor::new("c", &journal))
            .build();

        let err = provider.shutdown().unwrap_err();
        assert!(matches!(
            err,
            PipelineError::ShutdownFailed {
                failed: 1,
                total: 3
            }
        ));
        assert_eq!(
            *journal.lock(),
            vec![
                "a:shutdown".to_string(),
                "b:shutdown".to_string(),
                "c:shutdown".to_string()
            ]
        );
        assert_eq!(provider.metrics().shutdown_failures(), 1);
        assert!(provider.is_shutdown());
    }

    #[test]
    fn test_panicking_processor_does_not_reach_emitter() {
        let journal = journal();
        let mut panicking = JournalProcessor::new("bad", &journal);
        panicking.panic_on_emit = true;

        let provider = EmitterProvider::builder()
            .add_processor(panicking)
            .add_processor(JournalProcessor::new("good", &journal))
            .build();

        let emitter = provider.log_emitter_builder("test").build();
        emitter
            .log_builder()
            .set_severity(Severity::Error)
            .set_body("survives")
            .emit();

        assert_eq!(*journal.lock(), vec!["good:emit:survives".to_string()]);
        assert_eq!(provider.metrics().processor_failures(), 1);
    }

    #[test]
    fn test_drop_of_last_handle_shuts_down() {
        let journal = journal();
        let provider = EmitterProvider::builder()
            .add_processor(JournalProcessor::new("only", &journal))
            .build();
        let emitter = provider.log_emitter_builder("test").build();

        drop(provider);
        assert!(journal.lock().is_empty(), "emitter still holds the provider state");

        drop(emitter);
        assert_eq!(*journal.lock(), vec!["only:shutdown".to_string()]);
    }

    #[test]
    fn test_provider_without_processors() {
        let provider = EmitterProvider::builder().build();
        let emitter = provider.log_emitter_builder("test").build();
        emitter.log_builder().set_body("nowhere").emit();

        assert_eq!(provider.processor_count(), 0);
        assert!(provider.shutdown().is_ok());
    }
}
