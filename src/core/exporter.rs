//! Exporter trait for terminal log sinks

use super::{error::Result, export_result::ExportResult, log_record::LogRecord};

/// Terminal sink for batches of log records
///
/// Calls may arrive from several threads at once, so implementations guard
/// their own state. An export after `shutdown` must return a failure
/// result rather than panic.
pub trait LogExporter: Send + Sync {
    /// Deliver a batch, preserving its order
    fn export(&self, batch: Vec<LogRecord>) -> ExportResult;

    /// Push out anything the exporter holds internally
    fn force_flush(&self) -> Result<()> {
        Ok(())
    }

    /// Release resources; later exports fail
    fn shutdown(&self) -> Result<()>;

    fn name(&self) -> &str;
}
