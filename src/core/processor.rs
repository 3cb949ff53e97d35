//! Processor trait for the stage between emitters and exporters

use super::{error::Result, log_record::LogRecord};

/// Receives each finalized record from an emitter
///
/// `on_emit` runs on the emitting thread and must not panic or block
/// longer than its exporter does. Implementations swallow exporter-side
/// failures; nothing is reported back to the emitter.
pub trait LogProcessor: Send + Sync {
    fn on_emit(&self, record: LogRecord);

    fn force_flush(&self) -> Result<()> {
        Ok(())
    }

    fn shutdown(&self) -> Result<()>;

    fn name(&self) -> &str;
}
