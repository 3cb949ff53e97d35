//! # Rust Log Pipeline
//!
//! A synchronous log emission pipeline: emitters build log records,
//! processors forward them, and exporters deliver or retain them.
//!
//! ## Features
//!
//! - **Ordered**: records reach exporters in emit order, processors run in
//!   registration order
//! - **One-way shutdown**: provider, processors and exporters move from
//!   active to shut down exactly once
//! - **Advisory results**: every export returns an `ExportResult`
//! - **Test friendly**: `InMemoryLogExporter` keeps records for assertions
//!
//! ## Example
//!
//! ```
//! use rust_log_pipeline::prelude::*;
//!
//! let exporter = InMemoryLogExporter::new();
//! let provider = EmitterProvider::builder()
//!     .add_processor(SimpleLogProcessor::new(exporter.clone()))
//!     .build();
//! let emitter = provider.log_emitter_builder("emitter").build();
//!
//! emitter.log_builder().set_severity(Severity::Debug).set_body("message 1").emit();
//! assert_eq!(exporter.get_finished_log_items()[0].body(), "message 1");
//!
//! provider.shutdown().unwrap();
//! emitter.log_builder().set_body("dropped").emit();
//! assert!(exporter.get_finished_log_items().is_empty());
//! ```

pub mod core;
pub mod exporters;
pub mod macros;
pub mod processors;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::exporters::ConsoleLogExporter;
    pub use crate::exporters::InMemoryLogExporter;
    pub use crate::processors::SimpleLogProcessor;
    pub use crate::core::{
        AttributeValue, Attributes, EmitterProvider, EmitterProviderBuilder, ExportFailure,
        ExportResult, InstrumentationScope, LifecycleState, LogEmitter, LogEmitterBuilder,
        LogExporter, LogProcessor, LogRecord, LogRecordBuilder, OutputFormat, PipelineError,
        PipelineMetrics, Result, Severity, ShutdownSignal, TimestampFormat,
    };
}

#[cfg(feature = "console")]
pub use crate::exporters::ConsoleLogExporter;
pub use crate::exporters::InMemoryLogExporter;
pub use crate::processors::SimpleLogProcessor;
pub use crate::core::{
    AttributeValue, Attributes, EmitterProvider, EmitterProviderBuilder, ExportFailure,
    ExportResult, InstrumentationScope, LifecycleState, LogEmitter, LogEmitterBuilder,
    LogExporter, LogProcessor, LogRecord, LogRecordBuilder, OutputFormat, PipelineError,
    PipelineMetrics, Result, Severity, ShutdownSignal, TimestampFormat,
};
