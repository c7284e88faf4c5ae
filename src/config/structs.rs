use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{DiagnosticsError, Result};

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "dnis.toml";

/// Environment variable prefix; nested keys are joined with `__`,
/// e.g. `DNIS__CRASH__SHOW_DIALOG=false`.
pub const ENV_PREFIX: &str = "DNIS";

/// Diagnostics configuration
///
/// - logging: bridge for `tracing` events
/// - crash: crash handler behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DiagnosticsConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub crash: CrashConfig,
}

impl DiagnosticsConfig {
    /// Load from `dnis.toml` and the process environment.
    ///
    /// Priority: ENV > dnis.toml > defaults. Errors fall back to defaults.
    pub fn load() -> Self {
        Self::load_from(DEFAULT_CONFIG_PATH).unwrap_or_else(|e| {
            eprintln!("[ERROR] Failed to load config: {}", e);
            Self::default()
        })
    }

    /// Load from `path` (optional file) and the process environment.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Load from `path` with an explicit environment map instead of the
    /// process environment. Keys use the `DNIS__SECTION__KEY` form.
    pub fn load_with_env<P: AsRef<Path>>(
        path: P,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self> {
        use config::{Config, Environment, File};

        let path = path.as_ref();
        let path_str = path.to_str().ok_or_else(|| {
            DiagnosticsError::configuration(format!("Non UTF-8 config path: {}", path.display()))
        })?;

        let settings = Config::builder()
            .add_source(File::with_name(path_str).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        Ok(settings.try_deserialize::<DiagnosticsConfig>()?)
    }

    /// Sample TOML with every default spelled out.
    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Render `tracing` events in the diagnostics line format on stdout.
    #[serde(default = "default_true")]
    pub bridge_tracing: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            bridge_tracing: true,
        }
    }
}

/// Crash handler configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrashConfig {
    /// Show a blocking dialog with the cause (Windows only).
    #[serde(default = "default_true")]
    pub show_dialog: bool,
    /// Report panics as one error line before the default exit path.
    #[serde(default = "default_true")]
    pub catch_panics: bool,
}

impl Default for CrashConfig {
    fn default() -> Self {
        Self {
            show_dialog: true,
            catch_panics: true,
        }
    }
}

fn default_true() -> bool {
    true
}
