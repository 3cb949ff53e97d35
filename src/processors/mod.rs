//! Processor implementations

pub mod simple;

pub use simple::SimpleLogProcessor;

pub use crate::core::LogProcessor;
