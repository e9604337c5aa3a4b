// Try/catch/finally bridging over unwinding panics

use tracing::warn;

use crate::error::CaughtPanic;
use crate::guard::{execute_guarded, GuardResult};

type Action<'a> = Box<dyn FnOnce() + 'a>;
type Handler<'a> = Box<dyn FnOnce(CaughtPanic) + 'a>;

/// Builder-style try/catch/finally block with callback handlers.
///
/// All three actions are optional. [`run`](PanicBridge::run) executes
/// the try action, delivers a panic raised by it to the catch handler,
/// and always runs the finally action last:
///
/// ```
/// use panic_bridge::PanicBridge;
///
/// PanicBridge::new()
///     .attempt(|| println!("risky work"))
///     .catch(|caught| eprintln!("failed: {}", caught.message()))
///     .finally(|| println!("cleanup"))
///     .run();
/// ```
#[derive(Default)]
pub struct PanicBridge<'a> {
    try_action: Option<Action<'a>>,
    catch_action: Option<Handler<'a>>,
    finally_action: Option<Action<'a>>,
}

impl<'a> PanicBridge<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the try action.
    pub fn attempt(mut self, action: impl FnOnce() + 'a) -> Self {
        self.try_action = Some(Box::new(action));
        self
    }

    /// Install the catch handler, invoked with the captured panic.
    pub fn catch(mut self, handler: impl FnOnce(CaughtPanic) + 'a) -> Self {
        self.catch_action = Some(Box::new(handler));
        self
    }

    /// Install the cleanup action, guaranteed to run last.
    pub fn finally(mut self, action: impl FnOnce() + 'a) -> Self {
        self.finally_action = Some(Box::new(action));
        self
    }

    /// Run the block.
    ///
    /// A panic raised by the try action never reaches the caller: it is
    /// delivered to the catch handler, or discarded when none is
    /// installed. A panic raised by the catch handler still runs the
    /// finally action, then resumes unwinding. A panic raised by the
    /// finally action propagates unmodified.
    pub fn run(self) {
        let Self {
            try_action,
            catch_action,
            finally_action,
        } = self;

        if let Some(action) = try_action {
            if let GuardResult::Panicked(caught) = execute_guarded(action) {
                match catch_action {
                    Some(handler) => {
                        if let GuardResult::Panicked(rethrown) =
                            execute_guarded(move || handler(caught))
                        {
                            // Cleanup still runs when the handler itself
                            // panics, then the unwind continues.
                            if let Some(cleanup) = finally_action {
                                cleanup();
                            }
                            rethrown.resume();
                        }
                    }
                    None => {
                        warn!(
                            panic_msg = %caught.message(),
                            "Panic discarded: no catch handler installed"
                        );
                    }
                }
            }
        }

        if let Some(cleanup) = finally_action {
            cleanup();
        }
    }
}
