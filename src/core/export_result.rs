//! Outcome of a single export call

/// Reason attached to a failed export
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportFailure {
    /// The exporter was shut down before the call
    #[error("exporter is shut down")]
    ExporterShutdown,

    #[error("write failed: {0}")]
    Io(String),

    #[error("{0}")]
    Other(String),
}

/// Result of one `export` call
///
/// Advisory only: callers may inspect it to drive retry or back-off
/// decisions, or drop it. Exporters never retry on their own.
#[must_use = "export results report whether the batch was accepted"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportResult {
    Success,
    Failure(ExportFailure),
}

impl ExportResult {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, ExportResult::Success)
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Failure reason, if the export failed
    pub fn failure(&self) -> Option<&ExportFailure> {
        match self {
            ExportResult::Success => None,
            ExportResult::Failure(reason) => Some(reason),
        }
    }
}

impl From<ExportFailure> for ExportResult {
    fn from(reason: ExportFailure) -> Self {
        ExportResult::Failure(reason)
    }
}
