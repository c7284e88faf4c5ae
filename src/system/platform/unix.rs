//! Unix/Linux platform implementation
//!
//! - `sigaction` registration with every signal masked while handling,
//!   running on the alternate signal stack so stack overflows are caught
//! - `write(2)` on fd 1 for the crash line
//! - `_exit(2)` for termination
//! - no crash dialog

use std::os::fd::BorrowedFd;

use nix::errno::Errno;
use nix::libc;
use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};
use nix::unistd;

use super::{CrashPlatform, SignalCallback};
use crate::errors::{DiagnosticsError, Result};
use crate::system::signal::SignalKind;

/// Unix platform operations implementation
pub struct UnixPlatform;

fn to_nix(kind: SignalKind) -> Result<Signal> {
    Signal::try_from(kind.raw()).map_err(|e| {
        DiagnosticsError::signal_operation(format!("{} is not a valid signal: {}", kind, e))
    })
}

impl CrashPlatform for UnixPlatform {
    fn install(kind: SignalKind, callback: SignalCallback) -> Result<()> {
        let signal = to_nix(kind)?;
        let action = SigAction::new(
            SigHandler::Handler(callback),
            SaFlags::SA_ONSTACK,
            SigSet::all(),
        );
        // SAFETY: the callback only uses async-signal-safe primitives from
        // this module and never returns.
        unsafe { signal::sigaction(signal, &action) }.map_err(|e| {
            DiagnosticsError::signal_operation(format!("Failed to register {}: {}", kind, e))
        })?;
        Ok(())
    }

    fn raise(kind: SignalKind) -> Result<()> {
        signal::raise(to_nix(kind)?).map_err(|e| {
            DiagnosticsError::signal_operation(format!("Failed to raise {}: {}", kind, e))
        })
    }

    fn write_stdout(bytes: &[u8]) {
        // SAFETY: fd 1 stays open for the life of the process.
        let fd = unsafe { BorrowedFd::borrow_raw(libc::STDOUT_FILENO) };
        let mut rest = bytes;
        while !rest.is_empty() {
            match unistd::write(fd, rest) {
                Ok(0) => break,
                Ok(n) => rest = &rest[n..],
                Err(Errno::EINTR) => continue,
                Err(_) => break,
            }
        }
    }

    fn notify(_text: &[u8]) {}

    fn terminate(code: i32) -> ! {
        // SAFETY: `_exit` is async-signal-safe and skips atexit handlers
        // and stdio flushing.
        unsafe { libc::_exit(code) }
    }

    fn park() -> ! {
        loop {
            unistd::pause();
        }
    }
}

pub use UnixPlatform as Platform;
