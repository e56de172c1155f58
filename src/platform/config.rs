// Folio - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for Folio configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/folio/ or %APPDATA%\Folio\config\)
    pub config_dir: PathBuf,
    /// True when platform dirs could not be determined and the current
    /// directory is used instead.
    pub fallback: bool,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    /// Runs before logging is initialised, so it reports through `fallback`
    /// rather than tracing.
    pub fn resolve() -> Self {
        match ProjectDirs::from("", "", constants::APP_ID) {
            Some(proj_dirs) => Self {
                config_dir: proj_dirs.config_dir().to_path_buf(),
                fallback: false,
            },
            None => Self {
                config_dir: PathBuf::from("."),
                fallback: true,
            },
        }
    }

    /// Use `dir` as the config directory instead of the platform default.
    ///
    /// Fails if `dir` is not an existing directory.
    pub fn with_config_dir(dir: &Path) -> Result<Self, ConfigError> {
        if !dir.is_dir() {
            return Err(ConfigError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }
        Ok(Self {
            config_dir: dir.to_path_buf(),
            fallback: false,
        })
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Body font size in points.
    pub font_size: Option<f32>,
    /// Disable section and card animations.
    pub reduce_motion: Option<bool>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Theme and section are not configurable; both start at their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Body font size in points.
    pub font_size: f32,
    /// Disable animations.
    pub reduce_motion: bool,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// The config.toml the values were read from, if one was loaded.
    pub source: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            font_size: constants::DEFAULT_FONT_SIZE,
            reduce_motion: false,
            log_level: None,
            source: None,
        }
    }
}

/// Read and parse `path` into the raw config shape.
fn read_raw(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Check every raw value against its limits, returning the accepted config
/// and one error per rejected value.
fn validate(raw: RawConfig) -> (AppConfig, Vec<ConfigError>) {
    let mut config = AppConfig::default();
    let mut errors = Vec::new();

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            errors.push(ConfigError::InvalidValue {
                key: "[ui] font_size",
                value: size.to_string(),
                expected: format!(
                    "{}-{}, default {}",
                    constants::MIN_FONT_SIZE,
                    constants::MAX_FONT_SIZE,
                    constants::DEFAULT_FONT_SIZE
                ),
            });
        }
    }

    // -- UI: reduce_motion --
    if let Some(reduce) = raw.ui.reduce_motion {
        config.reduce_motion = reduce;
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level);
        } else {
            errors.push(ConfigError::InvalidValue {
                key: "[logging] level",
                value: format!("\"{level}\""),
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    (config, errors)
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unreadable or unparseable, returns defaults with a warning
/// so the application still starts but the user is informed.
///
/// Nothing is logged here: this runs before logging is initialised, so the
/// caller reports `AppConfig::source` and the warnings once it is.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    if !config_path.exists() {
        return (AppConfig::default(), Vec::new());
    }

    let raw = match read_raw(&config_path) {
        Ok(raw) => raw,
        Err(e) => return (AppConfig::default(), vec![format!("{e}. Using defaults.")]),
    };

    let (mut config, errors) = validate(raw);
    config.source = Some(config_path);
    let warnings = errors
        .iter()
        .map(|e| format!("{e}. Using default."))
        .collect();

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(dir: &Path, body: &str) {
        fs::write(dir.join(constants::CONFIG_FILE_NAME), body).unwrap();
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.source, None);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_values_accepted() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "[ui]\nfont_size = 16.0\nreduce_motion = true\n\n[logging]\nlevel = \"debug\"\n",
        );
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.font_size, 16.0);
        assert!(config.reduce_motion);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(
            config.source,
            Some(dir.path().join(constants::CONFIG_FILE_NAME))
        );
    }

    #[test]
    fn test_out_of_range_values_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "[ui]\nfont_size = 99.0\n\n[logging]\nlevel = \"loud\"\n",
        );
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
        assert_eq!(config.log_level, None);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("font_size"));
        assert!(warnings[1].contains("loud"));
    }

    #[test]
    fn test_unparseable_file_gives_defaults_and_warning() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[ui\nfont_size = ");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.source, None);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Failed to parse"));
    }

    #[test]
    fn test_explicit_dir_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let paths = PlatformPaths::with_config_dir(dir.path()).unwrap();
        assert_eq!(paths.config_dir, dir.path());
        assert!(!paths.fallback);

        let missing = dir.path().join("nope");
        let err = PlatformPaths::with_config_dir(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[ui]\ntheme = \"dark\"\n[extra]\nx = 1\n");
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        let expected = AppConfig {
            source: Some(dir.path().join(constants::CONFIG_FILE_NAME)),
            ..AppConfig::default()
        };
        assert_eq!(config, expected);
    }
}
