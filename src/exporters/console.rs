//! Console exporter writing one line per record to stdout/stderr

use crate::core::{
    ExportFailure, ExportResult, LogExporter, LogRecord, OutputFormat, PipelineError, Result,
    ShutdownSignal, TimestampFormat,
};
use colored::Colorize;
use parking_lot::Mutex;
use std::io::Write;

/// Writes records to the terminal
///
/// `Error*` and `Fatal*` records go to stderr, everything else to stdout.
/// Each batch is written under one lock, so lines from concurrent exports
/// never interleave within a batch.
pub struct ConsoleLogExporter {
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
    write_lock: Mutex<()>,
    shutdown: ShutdownSignal,
}

impl ConsoleLogExporter {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
            write_lock: Mutex::new(()),
            shutdown: ShutdownSignal::new(),
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set the line format
    ///
    /// # Example
    ///
    /// ```
    /// use rust_log_pipeline::exporters::ConsoleLogExporter;
    /// use rust_log_pipeline::OutputFormat;
    ///
    /// let exporter = ConsoleLogExporter::new().with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Render a record the way this exporter would print it
    pub fn render(&self, record: &LogRecord) -> String {
        match self.output_format {
            OutputFormat::Text if self.use_colors => self.format_colored(record),
            _ => self.output_format.format(record, &self.timestamp_format),
        }
    }

    fn format_colored(&self, record: &LogRecord) -> String {
        let severity = format!("{:5}", record.severity().to_str())
            .color(record.severity().color_code())
            .to_string();

        let base = format!(
            "[{}] [{}] {} - {}",
            self.timestamp_format.format(&record.effective_timestamp()),
            severity,
            record.scope().name,
            OutputFormat::sanitize_body(record.body())
        );

        if record.attributes().is_empty() {
            base
        } else {
            format!("{} {}", base, record.attributes().format_fields())
        }
    }

    fn write_batch(&self, batch: &[LogRecord]) -> std::io::Result<()> {
        let _guard = self.write_lock.lock();
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        let mut out = stdout.lock();
        let mut err = stderr.lock();

        for record in batch {
            let line = self.render(record);
            if record.severity().is_error() {
                writeln!(err, "{}", line)?;
            } else {
                writeln!(out, "{}", line)?;
            }
        }
        Ok(())
    }
}

impl Default for ConsoleLogExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogExporter for ConsoleLogExporter {
    fn export(&self, batch: Vec<LogRecord>) -> ExportResult {
        if self.shutdown.is_triggered() {
            return ExportResult::Failure(ExportFailure::ExporterShutdown);
        }
        match self.write_batch(&batch) {
            Ok(()) => ExportResult::Success,
            Err(e) => ExportResult::Failure(ExportFailure::Io(e.to_string())),
        }
    }

    fn force_flush(&self) -> Result<()> {
        // Flush both streams since records go to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn shutdown(&self) -> Result<()> {
        if !self.shutdown.trigger() {
            return Ok(());
        }
        self.force_flush().map_err(|e| PipelineError::exporter("console", e.to_string()))
    }

    fn name(&self) -> &str {
        "console"
    }
}
