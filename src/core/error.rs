//! Error types for the log pipeline

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// One or more processors failed while the provider was shutting down
    #[error("Shutdown incomplete: {failed} of {total} processors failed")]
    ShutdownFailed { failed: usize, total: usize },

    /// Exporter-side failure with exporter name
    #[error("Exporter '{exporter}' failed: {message}")]
    Exporter { exporter: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl PipelineError {
    /// Create a partial shutdown failure
    pub fn shutdown_failed(failed: usize, total: usize) -> Self {
        PipelineError::ShutdownFailed { failed, total }
    }

    /// Create an exporter error
    pub fn exporter(exporter: impl Into<String>, message: impl Into<String>) -> Self {
        PipelineError::Exporter {
            exporter: exporter.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PipelineError::Other(msg.into())
    }
}

/// Extract a readable message from a caught panic payload
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
