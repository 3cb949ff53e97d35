//! Exporter implementations

pub mod in_memory;

#[cfg(feature = "console")]
pub mod console;

pub use in_memory::InMemoryLogExporter;

#[cfg(feature = "console")]
pub use console::ConsoleLogExporter;

pub use crate::core::LogExporter;
