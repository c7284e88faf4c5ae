//! dnis - Diagnostics and Information System
//!
//! A small diagnostics facility for a process:
//! - leveled logging where every line carries its call site
//!   (`debug!`, `info!`, `warning!`, `error!`)
//! - a crash handler that turns fatal signals into one `[ERROR]` line and
//!   exits with the signal number as status
//!
//! ```no_run
//! use dnis::system::CrashHandler;
//!
//! let armed = CrashHandler::init();
//! dnis::info!("armed for {} signals", armed.len());
//! ```
//!
//! # Architecture
//! - `logging`: severity, call-site capture, line formatting, stdout logger
//! - `system`: crash handler, signal classification, panic hook, tracing bridge
//! - `config`: configuration management
//! - `errors`: setup error type
//! - `interfaces`: the `dnis` command line (feature `cli`)

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
#[cfg(feature = "cli")]
pub mod interfaces;
pub mod logging;
pub mod system;
