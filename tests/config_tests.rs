use dnis::config::{CrashConfig, DiagnosticsConfig, LoggingConfig};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[cfg(test)]
mod load_tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");

        let config = DiagnosticsConfig::load_with_env(&path, env(&[])).unwrap();
        assert_eq!(config, DiagnosticsConfig::default());
    }

    #[test]
    fn test_file_values_are_applied() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dnis.toml");
        fs::write(
            &path,
            "[logging]\nbridge_tracing = false\n\n[crash]\nshow_dialog = false\n",
        )
        .unwrap();

        let config = DiagnosticsConfig::load_with_env(&path, env(&[])).unwrap();
        assert!(!config.logging.bridge_tracing);
        assert!(!config.crash.show_dialog);
        assert!(config.crash.catch_panics);
    }

    #[test]
    fn test_env_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dnis.toml");
        fs::write(&path, "[crash]\ncatch_panics = true\n").unwrap();

        let config = DiagnosticsConfig::load_with_env(
            &path,
            env(&[("DNIS__CRASH__CATCH_PANICS", "false")]),
        )
        .unwrap();
        assert!(!config.crash.catch_panics);
    }

    #[test]
    fn test_invalid_value_is_a_configuration_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dnis.toml");
        fs::write(&path, "[crash]\nshow_dialog = \"sometimes\"\n").unwrap();

        let err = DiagnosticsConfig::load_with_env(&path, env(&[])).unwrap_err();
        assert_eq!(err.code(), "D002");
    }
}

#[cfg(test)]
mod save_tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dnis.toml");

        let config = DiagnosticsConfig {
            logging: LoggingConfig {
                bridge_tracing: false,
            },
            crash: CrashConfig {
                show_dialog: false,
                catch_panics: true,
            },
        };
        config.save_to_file(&path).unwrap();

        let loaded = DiagnosticsConfig::load_with_env(&path, env(&[])).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_sample_config_lists_every_section() {
        let sample = DiagnosticsConfig::generate_sample_config();
        assert!(sample.contains("[logging]"));
        assert!(sample.contains("bridge_tracing"));
        assert!(sample.contains("[crash]"));
        assert!(sample.contains("catch_panics"));
    }
}
