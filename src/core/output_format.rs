//! Line formats for exporters that write records as text
//!
//! - Text: human-readable (default)
//! - Json: one JSON object per line
//! - Logfmt: key=value pairs

use super::attributes::AttributeValue;
use super::log_record::LogRecord;
use super::timestamp::TimestampFormat;

/// Output format for a rendered record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Example: `[2025-01-08T10:30:45.123Z] [INFO ] checkout - Order placed`
    #[default]
    Text,

    /// Example: `{"timestamp":"2025-01-08T10:30:45.123Z","severity":"INFO","body":"Order placed"}`
    Json,

    /// Example: `timestamp=2025-01-08T10:30:45.123Z severity=INFO body="Order placed"`
    Logfmt,
}

impl OutputFormat {
    /// Render a record as a single line
    pub fn format(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Text => self.format_text(record, timestamp_format),
            OutputFormat::Json => self.format_json(record, timestamp_format),
            OutputFormat::Logfmt => self.format_logfmt(record, timestamp_format),
        }
    }

    /// Escape control characters so one record never spans several lines
    pub(crate) fn sanitize_body(body: &str) -> String {
        body.replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    fn format_text(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        let base = format!(
            "[{}] [{:5}] {} - {}",
            timestamp_format.format(&record.effective_timestamp()),
            record.severity().to_str(),
            record.scope().name,
            Self::sanitize_body(record.body())
        );

        if record.attributes().is_empty() {
            base
        } else {
            format!("{} {}", base, record.attributes().format_fields())
        }
    }

    fn format_json(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            "timestamp".to_string(),
            timestamp_format.to_json_value(&record.effective_timestamp()),
        );
        json_obj.insert(
            "severity".to_string(),
            serde_json::Value::String(record.severity().to_str().to_string()),
        );
        json_obj.insert(
            "severity_number".to_string(),
            serde_json::Value::Number(record.severity().number().into()),
        );
        if let Some(text) = record.severity_text() {
            json_obj.insert(
                "severity_text".to_string(),
                serde_json::Value::String(text.to_string()),
            );
        }
        json_obj.insert(
            "body".to_string(),
            serde_json::Value::String(record.body().to_string()),
        );
        json_obj.insert(
            "scope".to_string(),
            serde_json::Value::String(record.scope().name.clone()),
        );

        if !record.attributes().is_empty() {
            let attributes = record
                .attributes()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_json_value()))
                .collect();
            json_obj.insert(
                "attributes".to_string(),
                serde_json::Value::Object(attributes),
            );
        }

        serde_json::Value::Object(json_obj).to_string()
    }

    fn format_logfmt(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        let mut parts = Vec::new();

        parts.push(format!(
            "timestamp={}",
            self.escape_logfmt_value(&timestamp_format.format(&record.effective_timestamp()))
        ));
        parts.push(format!("severity={}", record.severity().to_str()));
        // Body is always quoted
        parts.push(format!("body={}", self.quote_logfmt_value(record.body())));
        parts.push(format!(
            "scope={}",
            self.escape_logfmt_value(&record.scope().name)
        ));

        for (key, value) in record.attributes().iter() {
            let formatted_value = match value {
                AttributeValue::String(s) => self.quote_logfmt_value(s),
                AttributeValue::Int(i) => i.to_string(),
                AttributeValue::Float(f) => f.to_string(),
                AttributeValue::Bool(b) => b.to_string(),
            };
            parts.push(format!("{}={}", self.escape_logfmt_key(key), formatted_value));
        }

        parts.join(" ")
    }

    /// Keep only characters that are safe in a logfmt key
    fn escape_logfmt_key(&self, key: &str) -> String {
        key.chars()
            .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || *c == '.')
            .collect()
    }

    fn escape_logfmt_value(&self, value: &str) -> String {
        if value.is_empty() || value.contains(' ') || value.contains('"') || value.contains('=') {
            self.quote_logfmt_value(value)
        } else {
            value.to_string()
        }
    }

    fn quote_logfmt_value(&self, value: &str) -> String {
        format!(
            "\"{}\"",
            Self::sanitize_body(&value.replace('\\', "\\\\").replace('"', "\\\""))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InstrumentationScope, Severity};
    use chrono::{TimeZone, Utc};

    fn record(severity: Severity, body: &str) -> LogRecord {
        LogRecord::new(severity, body)
            .with_scope(InstrumentationScope::new("checkout"))
            .with_timestamp(Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap())
    }

    #[test]
    fn test_text_format() {
        let result = OutputFormat::Text.format(&record(Severity::Info, "Order placed"), &TimestampFormat::Iso8601);
        assert_eq!(result, "[2025-01-08T10:30:45.000Z] [INFO ] checkout - Order placed");
    }

    #[test]
    fn test_text_format_with_attributes() {
        let record = record(Severity::Info, "User logged in")
            .with_attribute("user_id", 123)
            .with_attribute("action", "login");
        let result = OutputFormat::Text.format(&record, &TimestampFormat::Iso8601);

        assert!(result.ends_with("User logged in user_id=123 action=login"));
    }

    #[test]
    fn test_text_format_escapes_newlines() {
        let record = record(Severity::Info, "login\nERROR [2024-10-17] forged entry");
        let result = OutputFormat::Text.format(&record, &TimestampFormat::Iso8601);

        assert_eq!(result.lines().count(), 1);
        assert!(result.contains("login\\nERROR"));
    }

    #[test]
    fn test_json_format() {
        let record = record(Severity::Error, "Error occurred")
            .with_severity_text("error")
            .with_attribute("request_id", "abc-123")
            .with_attribute("latency_ms", 42);
        let result = OutputFormat::Json.format(&record, &TimestampFormat::UnixMillis);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["severity"], "ERROR");
        assert_eq!(parsed["severity_number"], 17);
        assert_eq!(parsed["severity_text"], "error");
        assert_eq!(parsed["body"], "Error occurred");
        assert_eq!(parsed["scope"], "checkout");
        assert_eq!(parsed["timestamp"], 1736332245000i64);
        assert_eq!(parsed["attributes"]["request_id"], "abc-123");
        assert_eq!(parsed["attributes"]["latency_ms"], 42);
    }

    #[test]
    fn test_logfmt_format() {
        let record = record(Severity::Warn, "Warning message").with_attribute("query", "id=1");
        let result = OutputFormat::Logfmt.format(&record, &TimestampFormat::Iso8601);

        assert!(result.contains("severity=WARN"));
        assert!(result.contains("body=\"Warning message\""));
        assert!(result.contains("scope=checkout"));
        assert!(result.contains("query=\"id=1\""));
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
