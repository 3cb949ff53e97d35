//! Property-based tests for rust_log_pipeline using proptest

use proptest::prelude::*;
use rust_log_pipeline::prelude::*;

fn any_severity() -> impl Strategy<Value = Severity> {
    (0u8..=24).prop_map(|n| Severity::from_number(n).unwrap())
}

fn pipeline() -> (EmitterProvider, InMemoryLogExporter) {
    let exporter = InMemoryLogExporter::new();
    let provider = EmitterProvider::builder()
        .with_simple_exporter(exporter.clone())
        .build();
    (provider, exporter)
}

// ============================================================================
// Severity Tests
// ============================================================================

proptest! {
    /// Severity string conversions roundtrip, in any letter case
    #[test]
    fn test_severity_str_roundtrip(severity in any_severity(), lower in any::<bool>()) {
        let text = if lower {
            severity.to_str().to_lowercase()
        } else {
            severity.to_str().to_string()
        };
        prop_assert_eq!(text.parse::<Severity>(), Ok(severity));
        prop_assert_eq!(format!("{}", severity), severity.to_str());
    }

    /// Ordering follows the severity number
    #[test]
    fn test_severity_ordering(a in any_severity(), b in any_severity()) {
        prop_assert_eq!(a < b, a.number() < b.number());
        prop_assert_eq!(a == b, a.number() == b.number());
        prop_assert_eq!(Severity::from_number(a.number()), Some(a));
    }
}

// ============================================================================
// Pipeline Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// N sequential emits on one emitter come back as exactly N records, in order
    #[test]
    fn test_emit_order_preserved(
        entries in prop::collection::vec((any_severity(), ".{0,40}"), 0..50)
    ) {
        let (provider, exporter) = pipeline();
        let emitter = provider.log_emitter_builder("prop").build();

        for (severity, body) in &entries {
            emitter
                .log_builder()
                .set_severity(*severity)
                .set_body(body.clone())
                .emit();
        }

        let records = exporter.get_finished_log_items();
        prop_assert_eq!(records.len(), entries.len());
        for (record, (severity, body)) in records.iter().zip(&entries) {
            prop_assert_eq!(record.severity(), *severity);
            prop_assert_eq!(record.body(), body.as_str());
        }
        provider.shutdown().unwrap();
    }

    /// Nothing emitted after provider shutdown is buffered
    #[test]
    fn test_shutdown_gates_any_later_emit(before in 0usize..20, after in 0usize..20) {
        let (provider, exporter) = pipeline();
        let emitter = provider.log_emitter_builder("prop").build();

        for i in 0..before {
            emitter.emit(Severity::Info, format!("before {}", i));
        }
        prop_assert_eq!(exporter.finished_count(), before);

        provider.shutdown().unwrap();
        for i in 0..after {
            emitter.emit(Severity::Info, format!("after {}", i));
        }

        prop_assert_eq!(exporter.finished_count(), 0);
        prop_assert_eq!(provider.metrics().records_rejected(), after as u64);
    }

    /// Batches exported directly are appended whole and in call order
    #[test]
    fn test_batches_append_contiguously(
        batch_sizes in prop::collection::vec(0usize..8, 0..12)
    ) {
        let exporter = InMemoryLogExporter::new();
        let mut expected = Vec::new();

        for (b, size) in batch_sizes.iter().enumerate() {
            let batch: Vec<LogRecord> = (0..*size)
                .map(|i| LogRecord::new(Severity::Trace, format!("{}-{}", b, i)))
                .collect();
            expected.extend(batch.iter().map(|r| r.body().to_string()));
            prop_assert!(exporter.export(batch).is_success());
        }

        let bodies: Vec<String> = exporter
            .get_finished_log_items()
            .iter()
            .map(|r| r.body().to_string())
            .collect();
        prop_assert_eq!(bodies, expected);
    }
}
