//! CLI interface module
//!
//! Executes the clap-parsed commands against the library.

use std::fmt;

use crate::cli::Commands;
use crate::config::DiagnosticsConfig;
use crate::errors::DiagnosticsError;
use crate::logging;
use crate::system::{CrashHandler, describe};

#[derive(Debug)]
pub enum CliError {
    CommandError(String),
    Diagnostics(DiagnosticsError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::CommandError(msg) => write!(f, "Command error: {}", msg),
            CliError::Diagnostics(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CliError {}

impl From<DiagnosticsError> for CliError {
    fn from(err: DiagnosticsError) -> Self {
        CliError::Diagnostics(err)
    }
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(cmd: Commands, config: &DiagnosticsConfig) -> Result<(), CliError> {
    match cmd {
        Commands::Log { level, message } => {
            logging::log(level, &crate::call_site!(), &message);
            Ok(())
        }

        Commands::Describe { signal } => {
            println!("{}", describe(signal));
            Ok(())
        }

        Commands::Crash {
            signal,
            init_count,
            no_dialog,
        } => {
            let mut crash = config.crash.clone();
            if no_dialog {
                crash.show_dialog = false;
            }
            for _ in 0..init_count.max(1) {
                CrashHandler::try_with_config(&crash)?;
            }
            CrashHandler::raise(signal)?;
            Err(CliError::CommandError(format!(
                "{} was delivered but the process kept running",
                signal
            )))
        }

        Commands::Overflow { no_dialog } => {
            let mut crash = config.crash.clone();
            if no_dialog {
                crash.show_dialog = false;
            }
            CrashHandler::try_with_config(&crash)?;
            let depth = recurse(0);
            Err(CliError::CommandError(format!(
                "stack did not overflow after {} frames",
                depth
            )))
        }

        Commands::Panic { message } => {
            CrashHandler::with_config(&config.crash);
            panic!("{}", message);
        }

        Commands::Config => {
            print!("{}", DiagnosticsConfig::generate_sample_config());
            Ok(())
        }
    }
}

/// Burns 4 KiB of stack per frame until the guard page is hit.
fn recurse(depth: u64) -> u64 {
    let frame = std::hint::black_box([depth as u8; 4096]);
    if depth == u64::MAX {
        return 0;
    }
    recurse(depth + 1).wrapping_add(u64::from(frame[(depth % 4096) as usize]))
}
