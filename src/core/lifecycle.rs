//! One-way Active -> ShutDown lifecycle shared across pipeline components

use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Lifecycle state of a provider, processor or exporter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LifecycleState {
    #[default]
    Active,
    ShutDown,
}

impl LifecycleState {
    pub fn is_active(&self) -> bool {
        matches!(self, LifecycleState::Active)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleState::Active => write!(f, "ACTIVE"),
            LifecycleState::ShutDown => write!(f, "SHUT_DOWN"),
        }
    }
}

/// Shared shutdown flag
///
/// Clones observe the same flag. Once triggered it stays triggered.
///
/// # Example
///
/// ```
/// use rust_log_pipeline::core::ShutdownSignal;
///
/// let signal = ShutdownSignal::new();
/// let observer = signal.clone();
///
/// assert!(signal.trigger());
/// assert!(!signal.trigger());
/// assert!(observer.is_triggered());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    triggered: Arc<AtomicBool>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self {
            triggered: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Mark as shut down
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn trigger(&self) -> bool {
        !self.triggered.swap(true, Ordering::AcqRel)
    }

    #[inline]
    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::Acquire)
    }

    pub fn state(&self) -> LifecycleState {
        if self.is_triggered() {
            LifecycleState::ShutDown
        } else {
            LifecycleState::Active
        }
    }
}
