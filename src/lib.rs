// panic-bridge - callback-style try/catch/finally over unwinding panics
// Stateless control-flow adapter: no domain logic, no shared state

pub mod bridge;
pub mod error;
pub mod guard;

pub use bridge::PanicBridge;
pub use error::CaughtPanic;
pub use guard::{execute_guarded, GuardResult};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
