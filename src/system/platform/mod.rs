//! Platform abstraction layer
//!
//! The crash handler needs a handful of primitives whose implementation
//! differs per OS:
//! - signal registration and synthetic delivery
//! - an unbuffered, allocation-free write to stdout
//! - the optional blocking crash dialog
//! - immediate process termination
//!
//! `unix.rs` builds on `nix`, `windows.rs` on the CRT and `windows-sys`.
//! Upper layers call the re-exported free functions.

use std::ffi::c_int;

use crate::errors::Result;
use crate::system::signal::SignalKind;

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::*;
#[cfg(windows)]
pub use windows::*;

/// Raw signal callback as the OS invokes it.
pub type SignalCallback = extern "C" fn(c_int);

/// Platform operations used on the crash path
///
/// Everything except `install` and `raise` may run inside a signal handler
/// and must not allocate or take locks.
pub trait CrashPlatform {
    /// Register `callback` for `kind`, replacing any previous handler.
    fn install(kind: SignalKind, callback: SignalCallback) -> Result<()>;

    /// Deliver `kind` to the current process.
    fn raise(kind: SignalKind) -> Result<()>;

    /// Write bytes straight to the stdout descriptor, ignoring failures.
    fn write_stdout(bytes: &[u8]);

    /// Show a blocking crash dialog. `text` must be NUL-terminated.
    fn notify(text: &[u8]);

    /// Exit immediately with `code`, skipping destructors and exit hooks.
    fn terminate(code: i32) -> !;

    /// Block the calling thread forever.
    fn park() -> !;
}

/// Get the platform name for logging/debugging
pub fn platform_name() -> &'static str {
    #[cfg(unix)]
    return "Unix/Linux";
    #[cfg(windows)]
    return "Windows";
}
