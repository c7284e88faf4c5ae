//! Panic handler module
//!
//! Reports a panic as a single `[ERROR]` line: the call site is the panic
//! location and the function field is `<panic>`. With `panic = "abort"` the
//! abort that follows is picked up by the crash handler.

use std::any::Any;
use std::panic;

use crate::logging::{CallSite, Severity, log};

/// Function field used for panic records.
pub const PANIC_FUNCTION: &str = "<panic>";

/// Install custom panic hook
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let message = payload_message(panic_info.payload());
        let site = match panic_info.location() {
            Some(loc) => CallSite::new(loc.file(), loc.line(), PANIC_FUNCTION),
            None => CallSite::new("<unknown>", 0, PANIC_FUNCTION),
        };

        let thread = std::thread::current();
        let name = thread.name().unwrap_or("<unnamed>");
        log(
            Severity::Error,
            &site,
            format_args!("thread '{}' panicked: {}", name, message),
        );
    }));
}

/// Text of a panic payload.
pub fn payload_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "Box<dyn Any>"
    }
}
