//! Command-line interface definitions using clap
//!
//! The `dnis` binary drives every diagnostics operation from the shell,
//! mainly so crash scenarios can be exercised end to end.

use clap::{Parser, Subcommand};

use crate::logging::Severity;
use crate::system::SignalKind;

/// dnis - call-site tagged logging and a fatal-signal crash handler
#[derive(Parser)]
#[command(name = "dnis")]
#[command(version)]
#[command(about = "Diagnostics and Information System", long_about = None)]
pub struct Cli {
    /// Configuration file (default: dnis.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Write one log line
    Log {
        /// debug, info, warning, error or unknown
        level: Severity,

        /// Message (may be empty)
        #[arg(default_value = "")]
        message: String,
    },

    /// Print the cause text for a signal number
    #[command(allow_negative_numbers = true)]
    Describe {
        /// Signal number
        signal: i32,
    },

    /// Arm the crash handler and deliver a signal to this process
    Crash {
        /// Signal name (SIGTERM, term) or number
        #[arg(long, short = 's')]
        signal: SignalKind,

        /// How many times to arm the handler before raising
        #[arg(long, default_value_t = 1)]
        init_count: u32,

        /// Never show the crash dialog
        #[arg(long)]
        no_dialog: bool,
    },

    /// Arm the crash handler and overflow the main thread's stack
    #[command(hide = true)]
    Overflow {
        /// Never show the crash dialog
        #[arg(long)]
        no_dialog: bool,
    },

    /// Arm the crash handler and panic with a message
    Panic {
        /// Panic message
        message: String,
    },

    /// Print a sample configuration file
    Config,
}
