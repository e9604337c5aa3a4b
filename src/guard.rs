// Panic isolation for caller-supplied actions

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::error;

use crate::error::CaughtPanic;

/// Result of a panic-guarded execution
#[derive(Debug)]
pub enum GuardResult<T> {
    /// Execution completed successfully
    Completed(T),
    /// Execution panicked
    Panicked(CaughtPanic),
}

impl<T> GuardResult<T> {
    pub fn is_panicked(&self) -> bool {
        matches!(self, GuardResult::Panicked(_))
    }

    /// The completed value, if the action returned normally.
    pub fn completed(self) -> Option<T> {
        match self {
            GuardResult::Completed(value) => Some(value),
            GuardResult::Panicked(_) => None,
        }
    }

    /// Convert to a `Result` for `?`-style callers.
    pub fn into_result(self) -> Result<T, CaughtPanic> {
        match self {
            GuardResult::Completed(value) => Ok(value),
            GuardResult::Panicked(caught) => Err(caught),
        }
    }
}

/// Execute a closure with panic isolation.
///
/// If the closure panics, the panic is caught and returned as
/// [`GuardResult::Panicked`] instead of unwinding into the caller.
/// The closure is wrapped in `AssertUnwindSafe`: a captured panic is
/// always either delivered to a handler or resumed, never used to keep
/// computing with state the unwind may have left behind.
pub fn execute_guarded<F, T>(f: F) -> GuardResult<T>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => GuardResult::Completed(value),
        Err(payload) => {
            let caught = CaughtPanic::from_payload(payload);
            error!(panic_msg = %caught.message(), "Guarded action panicked");
            GuardResult::Panicked(caught)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_value() {
        let result = execute_guarded(|| 42);
        assert_eq!(result.completed(), Some(42));
    }

    #[test]
    fn test_panicked_outcome() {
        let result: GuardResult<()> = execute_guarded(|| panic!("boom"));
        assert!(result.is_panicked());
    }

    #[test]
    fn test_into_result() {
        let err = execute_guarded(|| -> u32 { panic!("bad input") })
            .into_result()
            .unwrap_err();
        assert_eq!(err.message(), "bad input");

        let ok = execute_guarded(|| 7).into_result();
        assert_eq!(ok.unwrap(), 7);
    }
}
