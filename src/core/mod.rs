//! Core pipeline types and traits

pub mod attributes;
pub mod emitter;
pub mod error;
pub mod export_result;
pub mod exporter;
pub mod lifecycle;
pub mod log_record;
pub mod metrics;
pub mod output_format;
pub mod processor;
pub mod provider;
pub mod severity;
pub mod timestamp;

pub use attributes::{AttributeValue, Attributes};
pub use emitter::{LogEmitter, LogEmitterBuilder, LogRecordBuilder};
pub use error::{PipelineError, Result};
pub use export_result::{ExportFailure, ExportResult};
pub use exporter::LogExporter;
pub use lifecycle::{LifecycleState, ShutdownSignal};
pub use log_record::{InstrumentationScope, LogRecord};
pub use metrics::PipelineMetrics;
pub use output_format::OutputFormat;
pub use processor::LogProcessor;
pub use provider::{EmitterProvider, EmitterProviderBuilder};
pub use severity::Severity;
pub use timestamp::TimestampFormat;
