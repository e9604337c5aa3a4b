// Caught-panic value delivered to catch handlers

use std::any::Any;
use std::fmt;
use std::panic::resume_unwind;

use thiserror::Error;

/// A panic captured from a guarded action.
///
/// Wraps the raw unwind payload together with a human-readable message
/// extracted from it. The payload stays available for callers that know
/// the concrete type that was thrown with `panic_any`.
#[derive(Error)]
#[error("{message}")]
pub struct CaughtPanic {
    message: String,
    payload: Box<dyn Any + Send + 'static>,
}

impl CaughtPanic {
    pub(crate) fn from_payload(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        Self { message, payload }
    }

    /// Human-readable panic message, or `"Unknown panic"` when the
    /// payload carries no string.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Borrow the payload as the concrete type it was thrown with.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// The raw unwind payload.
    pub fn payload_ref(&self) -> &(dyn Any + Send) {
        self.payload.as_ref()
    }

    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Continue unwinding with the original payload.
    pub fn resume(self) -> ! {
        resume_unwind(self.payload)
    }
}

// Manual Debug: the payload is type-erased and has no Debug of its own.
impl fmt::Debug for CaughtPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaughtPanic")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
