//! Windows platform implementation
//!
//! - CRT `signal` registration (includes `SIGABRT_COMPAT`)
//! - CRT `_write` on fd 1 for the crash line
//! - `MessageBoxA` crash dialog
//! - `ExitProcess` for termination

use std::ffi::c_void;

use windows_sys::Win32::System::Threading::ExitProcess;
use windows_sys::Win32::UI::WindowsAndMessaging::{MB_ICONERROR, MB_OK, MessageBoxA};

use super::{CrashPlatform, SignalCallback};
use crate::errors::{DiagnosticsError, Result};
use crate::system::signal::SignalKind;

const DIALOG_TITLE: &[u8] = b"Crashed!\0";

/// Windows platform operations implementation
pub struct WindowsPlatform;

impl CrashPlatform for WindowsPlatform {
    fn install(kind: SignalKind, callback: SignalCallback) -> Result<()> {
        // SAFETY: registering a plain C callback with the CRT.
        let previous = unsafe { libc::signal(kind.raw(), callback as libc::sighandler_t) };
        if previous as isize == -1 {
            return Err(DiagnosticsError::signal_operation(format!(
                "Failed to register {}",
                kind
            )));
        }
        Ok(())
    }

    fn raise(kind: SignalKind) -> Result<()> {
        // SAFETY: raise only dispatches to the registered handler.
        if unsafe { libc::raise(kind.raw()) } != 0 {
            return Err(DiagnosticsError::signal_operation(format!(
                "Failed to raise {}",
                kind
            )));
        }
        Ok(())
    }

    fn write_stdout(bytes: &[u8]) {
        let mut rest = bytes;
        while !rest.is_empty() {
            // SAFETY: the pointer/length pair comes from a live slice.
            let written = unsafe {
                libc::write(1, rest.as_ptr() as *const c_void, rest.len() as libc::c_uint)
            };
            if written <= 0 {
                break;
            }
            rest = &rest[written as usize..];
        }
    }

    fn notify(text: &[u8]) {
        if text.last() != Some(&0) {
            return;
        }
        // SAFETY: both strings are NUL-terminated and outlive the call.
        unsafe {
            MessageBoxA(
                std::ptr::null_mut(),
                text.as_ptr(),
                DIALOG_TITLE.as_ptr(),
                MB_OK | MB_ICONERROR,
            );
        }
    }

    #[allow(unreachable_code)]
    fn terminate(code: i32) -> ! {
        // SAFETY: ends the process; nothing runs afterwards.
        unsafe { ExitProcess(code as u32) };
        loop {
            std::hint::spin_loop();
        }
    }

    fn park() -> ! {
        loop {
            std::thread::park();
        }
    }
}

pub use WindowsPlatform as Platform;
