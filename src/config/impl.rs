use std::sync::OnceLock;

use super::DiagnosticsConfig;

static CONFIG: OnceLock<DiagnosticsConfig> = OnceLock::new();

/// Get the global configuration instance
///
/// Falls back to loading `dnis.toml` if `init_config` was never called.
pub fn get_config() -> &'static DiagnosticsConfig {
    CONFIG.get_or_init(DiagnosticsConfig::load)
}

/// Initialize the global configuration
///
/// Loads configuration from `dnis.toml` in the current directory.
/// If the file doesn't exist, uses in-memory defaults.
///
/// # Examples
/// ```no_run
/// use dnis::config::init_config;
/// init_config();
/// ```
pub fn init_config() -> &'static DiagnosticsConfig {
    get_config()
}

/// Initialize the global configuration with an already loaded value.
///
/// Returns `false` if the configuration was already initialized; the first
/// value is kept.
pub fn set_config(config: DiagnosticsConfig) -> bool {
    CONFIG.set(config).is_ok()
}
