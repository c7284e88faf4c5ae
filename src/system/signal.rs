//! Signal classification
//!
//! Maps OS signal numbers to the cause text reported when the process goes
//! down. Unrecognized numbers are never an error; they render as
//! `Unknown signal (<N>)`.

use std::fmt;
use std::str::FromStr;

use crate::errors::DiagnosticsError;

#[cfg(unix)]
use nix::libc;

/// MSVC CRT alias of `SIGABRT` kept for compatibility with old runtimes.
#[cfg(windows)]
pub const SIGABRT_COMPAT: i32 = 6;

/// Signals the crash handler arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Interrupt,
    IllegalInstruction,
    ArithmeticException,
    SegmentationViolation,
    Termination,
    Abort,
    #[cfg(windows)]
    AbortCompat,
}

#[cfg(not(windows))]
const SUPPORTED: [SignalKind; 6] = [
    SignalKind::Interrupt,
    SignalKind::IllegalInstruction,
    SignalKind::ArithmeticException,
    SignalKind::SegmentationViolation,
    SignalKind::Termination,
    SignalKind::Abort,
];

#[cfg(windows)]
const SUPPORTED: [SignalKind; 7] = [
    SignalKind::Interrupt,
    SignalKind::IllegalInstruction,
    SignalKind::ArithmeticException,
    SignalKind::SegmentationViolation,
    SignalKind::Termination,
    SignalKind::Abort,
    SignalKind::AbortCompat,
];

impl SignalKind {
    /// Every signal in the armed set, in registration order.
    pub fn supported() -> &'static [SignalKind] {
        &SUPPORTED
    }

    /// Platform signal number.
    pub const fn raw(self) -> i32 {
        match self {
            SignalKind::Interrupt => libc::SIGINT,
            SignalKind::IllegalInstruction => libc::SIGILL,
            SignalKind::ArithmeticException => libc::SIGFPE,
            SignalKind::SegmentationViolation => libc::SIGSEGV,
            SignalKind::Termination => libc::SIGTERM,
            SignalKind::Abort => libc::SIGABRT,
            #[cfg(windows)]
            SignalKind::AbortCompat => SIGABRT_COMPAT,
        }
    }

    pub fn from_raw(raw: i32) -> Option<Self> {
        SUPPORTED.iter().copied().find(|kind| kind.raw() == raw)
    }

    /// Canonical symbolic name, e.g. `SIGSEGV`.
    pub const fn symbol(self) -> &'static str {
        match self {
            SignalKind::Interrupt => "SIGINT",
            SignalKind::IllegalInstruction => "SIGILL",
            SignalKind::ArithmeticException => "SIGFPE",
            SignalKind::SegmentationViolation => "SIGSEGV",
            SignalKind::Termination => "SIGTERM",
            SignalKind::Abort => "SIGABRT",
            #[cfg(windows)]
            SignalKind::AbortCompat => "SIGABRT_COMPAT",
        }
    }

    /// Cause text logged when this signal takes the process down.
    pub const fn description(self) -> &'static str {
        match self {
            SignalKind::Interrupt => "Interactive Attention (SIGINT)",
            SignalKind::IllegalInstruction => {
                "Illegal Instruction (SIGILL): Invalid Function Image"
            }
            SignalKind::ArithmeticException => "Arithmetic Exception (SIGFPE)",
            SignalKind::SegmentationViolation => "Segmentation Fault (SIGSEGV)",
            SignalKind::Termination => "Software Termination (SIGTERM)",
            SignalKind::Abort => "Abort (SIGABRT)",
            #[cfg(windows)]
            SignalKind::AbortCompat => "Abort (SIGABRT_COMPAT)",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Accepts `SIGTERM`, `term` or a supported signal number.
impl FromStr for SignalKind {
    type Err = DiagnosticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(raw) = trimmed.parse::<i32>() {
            return SignalKind::from_raw(raw).ok_or_else(|| {
                DiagnosticsError::validation(format!("Unsupported signal number: {}", raw))
            });
        }

        let upper = trimmed.to_ascii_uppercase();
        let name = upper.strip_prefix("SIG").unwrap_or(&upper);
        SUPPORTED
            .iter()
            .copied()
            .find(|kind| &kind.symbol()[3..] == name)
            .ok_or_else(|| {
                DiagnosticsError::validation(format!(
                    "Invalid signal: '{}'. Valid: {}",
                    s,
                    SUPPORTED
                        .iter()
                        .map(|k| k.symbol())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

/// Crash cause derived from one signal delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    Known(&'static str),
    Unknown(i32),
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Known(text) => f.write_str(text),
            Cause::Unknown(signal) => write!(f, "Unknown signal ({})", signal),
        }
    }
}

/// Classify without allocating; safe to call from a signal handler.
pub fn classify(signal: i32) -> Cause {
    match SignalKind::from_raw(signal) {
        Some(kind) => Cause::Known(kind.description()),
        None => Cause::Unknown(signal),
    }
}

/// Human readable cause for a signal number.
pub fn describe(signal: i32) -> String {
    classify(signal).to_string()
}
