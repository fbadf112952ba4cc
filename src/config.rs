//! Calculator configuration loading.
//!
//! Structure:
//! - Pure functions: default path, validation
//! - Effect functions: reading the JSON file
//!
//! A missing file at the default location is not an error; the built-in
//! defaults apply. A missing file the user named explicitly is.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::types::{CalculatorConfig, MAX_TIP_PERCENT};

/// Config filename within the application config directory.
const CONFIG_FILENAME: &str = "config.json";

/// Application directory name under the platform config dir.
const APP_DIR: &str = "tip-split";

// ============================================================================
// TYPES
// ============================================================================

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file.
    File(PathBuf),
    /// No file found at the default location; built-in defaults in use.
    Defaults { looked_for: PathBuf },
}

/// Error while loading or validating configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The file is not valid JSON for a config.
    Parse { path: PathBuf, message: String },
    /// The values are inconsistent.
    Invalid(String),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults { looked_for } => {
                write!(f, "built-in defaults (no file at {})", looked_for.display())
            }
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Cannot read config {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, message } => {
                write!(f, "Invalid config {}: {}", path.display(), message)
            }
            ConfigError::Invalid(reason) => write!(f, "Invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// Returns the default config file location.
///
/// On Linux: ~/.config/tip-split/config.json
/// On macOS: ~/Library/Application Support/tip-split/config.json
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Check that the ranges and steps are usable.
pub fn validate_config(config: &CalculatorConfig) -> Result<(), ConfigError> {
    if config.split_min < 1 {
        return Err(ConfigError::Invalid("split_min must be at least 1".to_string()));
    }
    if config.split_min > config.split_max {
        return Err(ConfigError::Invalid(format!(
            "split_min ({}) is greater than split_max ({})",
            config.split_min, config.split_max
        )));
    }
    if config.split_max > i32::MAX as u32 {
        return Err(ConfigError::Invalid(format!(
            "split_max ({}) is too large",
            config.split_max
        )));
    }
    if config.tip_step_percent < 1 || config.tip_step_percent > MAX_TIP_PERCENT {
        return Err(ConfigError::Invalid(format!(
            "tip_step_percent ({}) must be within 1..={}",
            config.tip_step_percent, MAX_TIP_PERCENT
        )));
    }
    if config.slider_steps < 1 || config.slider_steps > u32::from(MAX_TIP_PERCENT) {
        return Err(ConfigError::Invalid(format!(
            "slider_steps ({}) must be within 1..={}",
            config.slider_steps, MAX_TIP_PERCENT
        )));
    }
    Ok(())
}

// ============================================================================
// EFFECT FUNCTIONS
// ============================================================================

/// Read and validate a config file.
pub fn load_config(path: &Path) -> Result<CalculatorConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config: CalculatorConfig =
        serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate_config(&config)?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Resolve the effective configuration.
///
/// `explicit` must exist. Without it, the default location is tried and
/// its absence falls back to [`CalculatorConfig::default`].
pub fn resolve_config(
    explicit: Option<&Path>,
) -> Result<(CalculatorConfig, ConfigSource), ConfigError> {
    match explicit {
        Some(path) => {
            let config = load_config(path)?;
            Ok((config, ConfigSource::File(path.to_path_buf())))
        }
        None => resolve_at(&default_config_path()),
    }
}

/// Resolve against a specific default location.
fn resolve_at(path: &Path) -> Result<(CalculatorConfig, ConfigSource), ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok((
            CalculatorConfig::default(),
            ConfigSource::Defaults {
                looked_for: path.to_path_buf(),
            },
        ));
    }
    let config = load_config(path)?;
    Ok((config, ConfigSource::File(path.to_path_buf())))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn default_config_path_is_reasonable() {
        let path = default_config_path();
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("tip-split"));
        assert!(path_str.ends_with("config.json"));
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&CalculatorConfig::default()).is_ok());
    }

    #[test]
    fn validate_rejects_zero_minimum() {
        let config = CalculatorConfig {
            split_min: 0,
            ..Default::default()
        };
        assert!(matches!(validate_config(&config), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn validate_rejects_inverted_range() {
        let config = CalculatorConfig {
            split_min: 10,
            split_max: 5,
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("greater than split_max"));
    }

    #[test]
    fn validate_rejects_bad_tip_step() {
        for step in [0u8, 101] {
            let config = CalculatorConfig {
                tip_step_percent: step,
                ..Default::default()
            };
            assert!(validate_config(&config).is_err(), "step {step}");
        }
    }

    #[test]
    fn validate_bounds_slider_steps() {
        for steps in [0u32, 101, u32::MAX] {
            let config = CalculatorConfig {
                slider_steps: steps,
                ..Default::default()
            };
            assert!(validate_config(&config).is_err(), "steps {steps}");
        }
        let config = CalculatorConfig {
            slider_steps: 100,
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn load_reads_partial_file_with_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(tmp.path(), r#"{"split_max": 8, "tip_step_percent": 5}"#);

        let config = load_config(&path).unwrap();
        assert_eq!(config.split_min, 1);
        assert_eq!(config.split_max, 8);
        assert_eq!(config.tip_step_percent, 5);
        assert_eq!(config.currency_symbol, "£");
    }

    #[test]
    fn load_reports_parse_errors() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(tmp.path(), "{ not json");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_validates_after_parsing() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(tmp.path(), r#"{"split_min": 4, "split_max": 2}"#);

        assert!(matches!(load_config(&path), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.json");

        let err = resolve_config(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn explicit_file_is_used() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(tmp.path(), r#"{"currency_symbol": "$"}"#);

        let (config, source) = resolve_config(Some(&path)).unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(source, ConfigSource::File(path));
    }

    #[test]
    fn missing_default_file_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join(CONFIG_FILENAME);

        let (config, source) = resolve_at(&missing).unwrap();
        assert_eq!(config, CalculatorConfig::default());
        assert_eq!(source, ConfigSource::Defaults { looked_for: missing });
    }

    #[test]
    fn present_default_file_is_loaded() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(tmp.path(), r#"{"split_max": 20}"#);

        let (config, source) = resolve_at(&path).unwrap();
        assert_eq!(config.split_max, 20);
        assert_eq!(source, ConfigSource::File(path));
    }
}
