//! Basic pipeline usage example
//!
//! Wires a console exporter and an in-memory exporter behind simple
//! processors, emits records at several severities, then shuts down.
//!
//! Run with: cargo run --example basic_pipeline

use rust_log_pipeline::prelude::*;
use rust_log_pipeline::{info, warn};

fn main() -> Result<()> {
    println!("=== Rust Log Pipeline - Basic Usage Example ===\n");

    let retained = InMemoryLogExporter::new();
    let provider = EmitterProvider::builder()
        .with_simple_exporter(ConsoleLogExporter::new())
        .with_simple_exporter(retained.clone())
        .build();

    let emitter = provider
        .log_emitter_builder("basic_pipeline")
        .set_version(env!("CARGO_PKG_VERSION"))
        .build();

    println!("1. Emitting at different severities:");
    for severity in [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ] {
        emitter.emit(severity, format!("This is a {} record", severity));
    }

    println!("\n2. Structured record and macros:");
    emitter
        .log_builder()
        .set_severity(Severity::Info)
        .set_body("Request processed")
        .set_attribute("route", "/orders")
        .set_attribute("status", 200)
        .emit();
    info!(emitter, "Listening on port {}", 8080);
    warn!(emitter, "Retry {} of {}", 2, 5);

    println!(
        "\n3. In-memory exporter retained {} records",
        retained.finished_count()
    );

    provider.shutdown()?;
    emitter.emit(Severity::Info, "never delivered");
    println!(
        "4. After shutdown: {} retained, {} rejected",
        retained.finished_count(),
        provider.metrics().records_rejected()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
