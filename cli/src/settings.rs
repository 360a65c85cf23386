//! Configuration loading for the CLI.
//!
//! Settings come from, in increasing priority: built-in defaults, a JSON
//! config file, and command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use mandala_segment::{SegmentConfig, SegmentError, Thresholds};
use thiserror::Error;

/// Errors raised while assembling a [`SegmentConfig`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for a [`SegmentConfig`].
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Overrides produced inconsistent thresholds.
    #[error(transparent)]
    Thresholds(#[from] SegmentError),
}

/// Command-line values that replace config file settings.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Markdown heading.
    pub heading: Option<String>,
    /// Lower bound of the sweet spot.
    pub sweet_min: Option<usize>,
    /// Upper bound of the sweet spot.
    pub sweet_max: Option<usize>,
    /// Lower hard limit.
    pub hard_min: Option<usize>,
    /// Upper hard limit.
    pub hard_max: Option<usize>,
    /// Title width in graphemes.
    pub title_width: Option<usize>,
}

/// Expand ~ to home directory in a path.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

/// Location of the per-user config file, if the platform has a config dir.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mandala").join("config.json"))
}

/// Loads the configuration.
///
/// An explicit path must exist. Without one, the per-user file is used when
/// present, otherwise the defaults.
///
/// # Errors
/// Returns [`SettingsError`] when the chosen file cannot be read or parsed.
pub fn load_config(explicit: Option<&Path>) -> Result<SegmentConfig, SettingsError> {
    let path = match explicit {
        Some(path) => expand_tilde(path),
        None => match default_config_path() {
            Some(path) if path.is_file() => path,
            _ => {
                tracing::debug!("no config file, using defaults");
                return Ok(SegmentConfig::default());
            }
        },
    };

    let text = fs::read_to_string(&path).map_err(|source| SettingsError::Read {
        path: path.clone(),
        source,
    })?;
    let config = serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded config file");

    Ok(config)
}

/// Applies command-line overrides on top of `config`.
///
/// # Errors
/// Returns [`SettingsError::Thresholds`] when the merged thresholds break
/// their ordering.
pub fn apply_overrides(
    mut config: SegmentConfig,
    overrides: &Overrides,
) -> Result<SegmentConfig, SettingsError> {
    let t = config.thresholds;
    config.thresholds = Thresholds::new(
        overrides.sweet_min.unwrap_or(t.sweet_min()),
        overrides.sweet_max.unwrap_or(t.sweet_max()),
        overrides.hard_min.unwrap_or(t.hard_min()),
        overrides.hard_max.unwrap_or(t.hard_max()),
    )?;
    if let Some(heading) = &overrides.heading {
        config.heading.clone_from(heading);
    }
    if let Some(width) = overrides.title_width {
        config.title_width = width;
    }
    Ok(config)
}
