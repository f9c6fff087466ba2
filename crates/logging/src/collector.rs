//! crates/logging/src/collector.rs
//! Shared buffer of diagnostic events recorded by [`Md5Layer`](crate::Md5Layer).
//!
//! Events can originate on any thread, including rayon workers hashing files
//! in parallel, so the buffer is shared rather than thread-local. Order is
//! the order in which events reached the layer.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use super::levels::{DebugFlag, InfoFlag};

/// A diagnostic event recorded by the tracing bridge.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagnosticEvent {
    /// Info-level event.
    Info {
        /// The info flag category.
        flag: InfoFlag,
        /// The verbosity level the event was emitted at.
        level: u8,
        /// The message content.
        message: String,
    },
    /// Debug-level event.
    Debug {
        /// The debug flag category.
        flag: DebugFlag,
        /// The verbosity level the event was emitted at.
        level: u8,
        /// The message content.
        message: String,
    },
    /// Warning or error, recorded at every verbosity.
    Warning {
        /// The message content.
        message: String,
    },
}

impl DiagnosticEvent {
    /// The message text without any category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Info { message, .. } | Self::Debug { message, .. } | Self::Warning { message } => {
                message
            }
        }
    }
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info { message, .. } => f.write_str(message),
            Self::Debug { flag, message, .. } => write!(f, "[{flag}] {message}"),
            Self::Warning { message } => write!(f, "warning: {message}"),
        }
    }
}

/// Cloneable handle to a shared event buffer.
#[derive(Clone, Default)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<DiagnosticEvent>>>,
}

impl EventCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn push(&self, event: DiagnosticEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    /// Removes and returns every recorded event.
    #[must_use]
    pub fn drain(&self) -> Vec<DiagnosticEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Number of events waiting to be drained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Reports whether no events are waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for EventCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventCollector")
            .field("pending", &self.len())
            .finish()
    }
}
