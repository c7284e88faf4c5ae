//! Crash handler
//!
//! Arms a callback for the fatal/interactive signal set. When one of them is
//! delivered the callback logs the cause as a single `[ERROR]` line, optionally
//! shows a blocking dialog and exits with the signal number as status.
//!
//! Lifecycle: `Uninitialized -> Armed -> Handling -> (process gone)`.
//! Registering again replaces the previous registration for the same signals
//! (last registration wins); the callback never returns, so a delivered signal
//! is handled exactly once however many times the handler was armed.

use std::ffi::c_int;
use std::fmt::Write;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use tracing::{debug, warn};

use crate::config::CrashConfig;
use crate::errors::Result;
use crate::logging::Severity;
use crate::logging::format::{LineBuffer, write_line};
use crate::system::panic_handler::install_panic_hook;
use crate::system::platform::{CrashPlatform, Platform};
use crate::system::signal::{SignalKind, classify};

/// Stack capacity of the crash line; longer lines are cut.
const LINE_CAPACITY: usize = 1024;
const DIALOG_CAPACITY: usize = 256;

const UNINITIALIZED: u8 = 0;
const ARMED: u8 = 1;
const HANDLING: u8 = 2;

static STATE: AtomicU8 = AtomicU8::new(UNINITIALIZED);
static SHOW_DIALOG: AtomicBool = AtomicBool::new(true);

/// Observable lifecycle state of the crash handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashState {
    Uninitialized,
    Armed,
    Handling,
}

/// Current crash handler state.
pub fn state() -> CrashState {
    match STATE.load(Ordering::SeqCst) {
        UNINITIALIZED => CrashState::Uninitialized,
        ARMED => CrashState::Armed,
        _ => CrashState::Handling,
    }
}

/// Registration result: which signals ended up armed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Armed {
    signals: Vec<SignalKind>,
}

impl Armed {
    pub fn signals(&self) -> &[SignalKind] {
        &self.signals
    }

    pub fn is_armed(&self, kind: SignalKind) -> bool {
        self.signals.contains(&kind)
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

pub struct CrashHandler;

impl CrashHandler {
    /// Arm the handler with default settings.
    ///
    /// Signals that fail to register are reported through `tracing` and
    /// left out of the returned [`Armed`].
    pub fn init() -> Armed {
        Self::with_config(&CrashConfig::default())
    }

    /// Arm the handler, applying `config` first.
    pub fn with_config(config: &CrashConfig) -> Armed {
        Self::apply(config);
        let mut signals = Vec::with_capacity(SignalKind::supported().len());
        for &kind in SignalKind::supported() {
            match Platform::install(kind, handle_signal) {
                Ok(()) => signals.push(kind),
                Err(e) => warn!("Crash handler not armed for {}: {}", kind, e),
            }
        }
        Self::finish(signals)
    }

    /// Arm the handler, failing on the first signal that cannot be registered.
    pub fn try_init() -> Result<Armed> {
        Self::try_with_config(&CrashConfig::default())
    }

    pub fn try_with_config(config: &CrashConfig) -> Result<Armed> {
        Self::apply(config);
        let mut signals = Vec::with_capacity(SignalKind::supported().len());
        for &kind in SignalKind::supported() {
            Platform::install(kind, handle_signal)?;
            signals.push(kind);
        }
        Ok(Self::finish(signals))
    }

    /// Deliver `kind` to this process, e.g. to exercise the crash path.
    pub fn raise(kind: SignalKind) -> Result<()> {
        Platform::raise(kind)
    }

    fn apply(config: &CrashConfig) {
        SHOW_DIALOG.store(config.show_dialog, Ordering::SeqCst);
        if config.catch_panics {
            install_panic_hook();
        }
    }

    fn finish(signals: Vec<SignalKind>) -> Armed {
        if !signals.is_empty() {
            let _ = STATE.compare_exchange(UNINITIALIZED, ARMED, Ordering::SeqCst, Ordering::SeqCst);
        }
        debug!(
            "Crash handler armed for {} signal(s) on {}",
            signals.len(),
            crate::system::platform::platform_name()
        );
        Armed { signals }
    }
}

/// Signal callback. Runs in the signal context: no allocation, no locks.
extern "C" fn handle_signal(signal: c_int) {
    if STATE.swap(HANDLING, Ordering::SeqCst) == HANDLING {
        // Another thread is already reporting; it will end the process.
        Platform::park();
    }

    let cause = classify(signal);

    let mut line = LineBuffer::<LINE_CAPACITY>::new();
    let _ = write_line(&mut line, Severity::Error, &crate::call_site!(), cause);
    line.terminate();
    Platform::write_stdout(line.as_bytes());

    if SHOW_DIALOG.load(Ordering::SeqCst) {
        let mut text = LineBuffer::<DIALOG_CAPACITY>::new();
        let _ = write!(text, "{}\0", cause);
        Platform::notify(text.as_bytes());
    }

    Platform::terminate(signal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_init_arms_every_supported_signal() {
        let config = CrashConfig {
            show_dialog: false,
            catch_panics: false,
        };
        let armed = CrashHandler::try_with_config(&config).unwrap();

        assert_eq!(armed.len(), SignalKind::supported().len());
        for kind in SignalKind::supported() {
            assert!(armed.is_armed(*kind));
        }
        assert_eq!(state(), CrashState::Armed);
    }

    #[test]
    fn test_init_twice_keeps_same_signal_set() {
        let config = CrashConfig {
            show_dialog: false,
            catch_panics: false,
        };
        let first = CrashHandler::with_config(&config);
        let second = CrashHandler::with_config(&config);
        assert_eq!(first, second);
        assert!(!second.is_empty());
    }
}
