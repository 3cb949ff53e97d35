//! Log emitters and the record builder they hand out
//!
//! An emitter is obtained from
//! [`EmitterProvider::log_emitter_builder`](super::provider::EmitterProvider::log_emitter_builder)
//! and stays bound to that provider's processors and shutdown state.

use super::attributes::{AttributeValue, Attributes};
use super::log_record::{InstrumentationScope, LogRecord};
use super::provider::ProviderShared;
use super::severity::Severity;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// Builder for a [`LogEmitter`]
pub struct LogEmitterBuilder {
    provider: Arc<ProviderShared>,
    scope: InstrumentationScope,
}

impl LogEmitterBuilder {
    pub(crate) fn new(provider: Arc<ProviderShared>, name: String) -> Self {
        Self {
            provider,
            scope: InstrumentationScope::new(name),
        }
    }

    /// Set the instrumentation version reported on every record
    #[must_use = "builder methods return a new value"]
    pub fn set_version(mut self, version: impl Into<String>) -> Self {
        self.scope.version = Some(version.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn set_schema_url(mut self, schema_url: impl Into<String>) -> Self {
        self.scope.schema_url = Some(schema_url.into());
        self
    }

    pub fn build(self) -> LogEmitter {
        LogEmitter {
            provider: self.provider,
            scope: self.scope,
        }
    }
}

/// Produces log records and hands them to the provider's processors
///
/// Holds a reference to the provider state, never a copy, so a provider
/// shutdown takes effect here immediately.
#[derive(Clone)]
pub struct LogEmitter {
    provider: Arc<ProviderShared>,
    scope: InstrumentationScope,
}

impl LogEmitter {
    /// Start a new record
    pub fn log_builder(&self) -> LogRecordBuilder<'_> {
        LogRecordBuilder::new(self)
    }

    pub fn scope(&self) -> &InstrumentationScope {
        &self.scope
    }

    /// Whether records emitted now would still reach a processor
    pub fn is_enabled(&self) -> bool {
        !self.provider.is_shutdown()
    }

    /// Emit a record with the given severity and body
    pub fn emit(&self, severity: Severity, body: impl Into<String>) {
        self.log_builder().set_severity(severity).set_body(body).emit();
    }
}

impl fmt::Debug for LogEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogEmitter")
            .field("scope", &self.scope)
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

/// Builder for a single log record
///
/// Setters only touch the builder. Nothing is validated beyond the types;
/// unset fields default to an empty body and `Severity::Unspecified`.
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
/// let emitter = provider.log_emitter_builder("http").set_version("1.4.0").build();
///
/// emitter
///     .log_builder()
///     .set_severity(Severity::Warn)
///     .set_body("slow request")
///     .set_attribute("route", "/orders")
///     .set_attribute("latency_ms", 812)
///     .emit();
///
/// let records = exporter.get_finished_log_items();
/// assert_eq!(records[0].body(), "slow request");
/// assert_eq!(records[0].scope().version.as_deref(), Some("1.4.0"));
/// ```
#[must_use = "a record is only delivered when `emit()` is called"]
pub struct LogRecordBuilder<'a> {
    emitter: &'a LogEmitter,
    severity: Severity,
    severity_text: Option<String>,
    body: String,
    timestamp: Option<DateTime<Utc>>,
    attributes: Attributes,
}

impl<'a> LogRecordBuilder<'a> {
    fn new(emitter: &'a LogEmitter) -> Self {
        Self {
            emitter,
            severity: Severity::Unspecified,
            severity_text: None,
            body: String::new(),
            timestamp: None,
            attributes: Attributes::new(),
        }
    }

    pub fn set_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Severity as the source system named it (e.g. `"warning"`)
    pub fn set_severity_text(mut self, text: impl Into<String>) -> Self {
        self.severity_text = Some(text.into());
        self
    }

    pub fn set_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Time the event happened, as opposed to when it was emitted
    pub fn set_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn set_attribute<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.attributes.insert(key, value);
        self
    }

    /// Merge a whole attribute map into the record
    pub fn set_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes.extend(attributes);
        self
    }

    /// Finalize the record and hand it to the processors
    ///
    /// Runs every processor on the calling thread. If the provider is shut
    /// down the record is built and then dropped.
    pub fn emit(self) {
        let record = LogRecord::from_parts(
            self.severity,
            self.severity_text,
            self.body,
            self.timestamp,
            self.attributes,
            self.emitter.scope.clone(),
        );
        self.emitter.provider.dispatch(record);
    }
}
