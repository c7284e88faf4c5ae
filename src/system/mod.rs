//! System-level modules
//!
//! - Crash handler (signal registration, crash path)
//! - Signal classification
//! - Panic hook
//! - Tracing bridge
//! - Platform abstraction (signals, raw stdout, dialog, exit)

pub mod crash;
pub mod logging;
pub mod panic_handler;
pub mod platform;
pub mod signal;

pub use crash::{Armed, CrashHandler, CrashState};
pub use signal::{Cause, SignalKind, classify, describe};
