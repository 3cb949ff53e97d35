//! Emission macros with `format!`-style bodies.
//!
//! # Examples
//!
//! ```
//! use rust_log_pipeline::prelude::*;
//! use rust_log_pipeline::info;
//!
//! let exporter = InMemoryLogExporter::new();
//! let provider = EmitterProvider::builder()
//!     .with_simple_exporter(exporter.clone())
//!     .build();
//! let emitter = provider.log_emitter_builder("server").build();
//!
//! let port = 8080;
//! info!(emitter, "Server listening on port {}", port);
//!
//! assert_eq!(exporter.get_finished_log_items()[0].body(), "Server listening on port 8080");
//! ```

/// Emit a record with the given severity and a formatted body.
///
/// # Examples
///
/// ```
/// # use rust_log_pipeline::prelude::*;
/// # let provider = EmitterProvider::builder().build();
/// # let emitter = provider.log_emitter_builder("docs").build();
/// use rust_log_pipeline::emit;
/// emit!(emitter, Severity::Info, "Simple message");
/// emit!(emitter, Severity::Error2, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! emit {
    ($emitter:expr, $severity:expr, $($arg:tt)+) => {
        $emitter.emit($severity, format!($($arg)+))
    };
}

#[macro_export]
macro_rules! trace {
    ($emitter:expr, $($arg:tt)+) => {
        $crate::emit!($emitter, $crate::Severity::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($emitter:expr, $($arg:tt)+) => {
        $crate::emit!($emitter, $crate::Severity::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($emitter:expr, $($arg:tt)+) => {
        $crate::emit!($emitter, $crate::Severity::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($emitter:expr, $($arg:tt)+) => {
        $crate::emit!($emitter, $crate::Severity::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($emitter:expr, $($arg:tt)+) => {
        $crate::emit!($emitter, $crate::Severity::Error, $($arg)+)
    };
}

/// Emit a fatal-severity record.
///
/// ```
/// # use rust_log_pipeline::prelude::*;
/// # let provider = EmitterProvider::builder().build();
/// # let emitter = provider.log_emitter_builder("docs").build();
/// use rust_log_pipeline::fatal;
/// fatal!(emitter, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($emitter:expr, $($arg:tt)+) => {
        $crate::emit!($emitter, $crate::Severity::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{EmitterProvider, Severity};
    use crate::exporters::InMemoryLogExporter;

    #[test]
    fn test_severity_macros() {
        let exporter = InMemoryLogExporter::new();
        let provider = EmitterProvider::builder()
            .with_simple_exporter(exporter.clone())
            .build();
        let emitter = provider.log_emitter_builder("macros").build();

        trace!(emitter, "t");
        debug!(emitter, "d {}", 1);
        info!(emitter, "i {}", 2);
        warn!(emitter, "w {} of {}", 3, 5);
        error!(emitter, "e");
        fatal!(emitter, "f {}", "disk full");
        emit!(emitter, Severity::Info3, "custom {}", true);

        let records = exporter.get_finished_log_items();
        let seen: Vec<(Severity, &str)> = records
            .iter()
            .map(|r| (r.severity(), r.body()))
            .collect();
        assert_eq!(
            seen,
            vec![
                (Severity::Trace, "t"),
                (Severity::Debug, "d 1"),
                (Severity::Info, "i 2"),
                (Severity::Warn, "w 3 of 5"),
                (Severity::Error, "e"),
                (Severity::Fatal, "f disk full"),
                (Severity::Info3, "custom true"),
            ]
        );
    }
}
