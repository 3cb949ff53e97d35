//! Log record structure

use super::attributes::{AttributeValue, Attributes};
use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Identity of the emitter that produced a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct InstrumentationScope {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_url: Option<String>,
}

impl InstrumentationScope {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            schema_url: None,
        }
    }
}

/// One finalized log event
///
/// Fields are read-only. A record is built once, by an emitter's
/// [`LogRecordBuilder`](super::emitter::LogRecordBuilder) or by the
/// consuming `with_*` methods below, and then moves through the pipeline
/// by value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    severity_text: Option<String>,
    body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<DateTime<Utc>>,
    observed_timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    attributes: Attributes,
    scope: InstrumentationScope,
}

impl LogRecord {
    pub fn new(severity: Severity, body: impl Into<String>) -> Self {
        Self {
            severity,
            severity_text: None,
            body: body.into(),
            timestamp: None,
            observed_timestamp: Utc::now(),
            attributes: Attributes::new(),
            scope: InstrumentationScope::default(),
        }
    }

    pub(crate) fn from_parts(
        severity: Severity,
        severity_text: Option<String>,
        body: String,
        timestamp: Option<DateTime<Utc>>,
        attributes: Attributes,
        scope: InstrumentationScope,
    ) -> Self {
        Self {
            severity,
            severity_text,
            body,
            timestamp,
            observed_timestamp: Utc::now(),
            attributes,
            scope,
        }
    }

    #[must_use]
    pub fn with_severity_text(mut self, text: impl Into<String>) -> Self {
        self.severity_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    #[must_use]
    pub fn with_attribute<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.attributes.insert(key, value);
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: InstrumentationScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Severity text as given by the caller, if any
    pub fn severity_text(&self) -> Option<&str> {
        self.severity_text.as_deref()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Event time supplied by the caller
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Time at which the record was finalized
    pub fn observed_timestamp(&self) -> DateTime<Utc> {
        self.observed_timestamp
    }

    /// Event time if set, otherwise the observed time
    pub fn effective_timestamp(&self) -> DateTime<Utc> {
        self.timestamp.unwrap_or(self.observed_timestamp)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn scope(&self) -> &InstrumentationScope {
        &self.scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_defaults() {
        let record = LogRecord::new(Severity::Unspecified, "");
        assert_eq!(record.body(), "");
        assert_eq!(record.severity(), Severity::Unspecified);
        assert!(record.timestamp().is_none());
        assert!(record.severity_text().is_none());
        assert!(record.attributes().is_empty());
        assert_eq!(record.scope().name, "");
    }

    #[test]
    fn test_effective_timestamp_prefers_event_time() {
        let event_time = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let record = LogRecord::new(Severity::Info, "tick");
        assert_eq!(record.effective_timestamp(), record.observed_timestamp());

        let record = record.with_timestamp(event_time);
        assert_eq!(record.effective_timestamp(), event_time);
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let record = LogRecord::new(Severity::Debug, "message 1")
            .with_scope(InstrumentationScope::new("emitter"));
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["body"], "message 1");
        assert_eq!(json["severity"], "Debug");
        assert_eq!(json["scope"]["name"], "emitter");
        assert!(json.get("attributes").is_none());
        assert!(json.get("timestamp").is_none());
    }
}
