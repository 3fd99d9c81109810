use serde::Deserialize;
use std::path::{Path, PathBuf};
use term_raster::{ColorMode, Threshold};
use thiserror::Error;

/// Environment variable naming a config file when `--config` is not given
pub const CONFIG_ENV: &str = "BMPTERM_CONFIG";

/// Error loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Color mode as named on the command line and in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorModeSetting {
    /// Nearest entry of the 256-color palette
    #[default]
    Indexed,
    /// 24-bit color, no palette matching
    #[value(name = "truecolor")]
    TrueColor,
    /// 8 basic colors by per-channel cutoff
    Threshold,
}

impl ColorModeSetting {
    /// The renderer mode; `threshold` is only used by [`Self::Threshold`].
    pub fn to_color_mode(self, threshold: Threshold) -> ColorMode {
        match self {
            ColorModeSetting::Indexed => ColorMode::Indexed,
            ColorModeSetting::TrueColor => ColorMode::TrueColor,
            ColorModeSetting::Threshold => ColorMode::Threshold(threshold),
        }
    }
}

/// Viewer configuration loaded from a YAML file.
///
/// Every key is optional. The same struct carries command-line overrides,
/// which are layered on top with [`ViewerConfig::or`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewerConfig {
    /// Color mode
    #[serde(default)]
    pub mode: Option<ColorModeSetting>,

    /// Per-channel cutoff `[r, g, b]` for threshold mode
    #[serde(default)]
    pub threshold: Option<[u8; 3]>,

    /// Target width in terminal columns
    #[serde(default)]
    pub columns: Option<usize>,

    /// Target height in terminal rows
    #[serde(default)]
    pub rows: Option<usize>,
}

impl ViewerConfig {
    /// Parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }

    /// Pick and load the config file for this invocation.
    ///
    /// An explicit path must load. A path taken from [`CONFIG_ENV`] falls
    /// back to an empty config with a warning. With neither, the config is
    /// empty.
    pub fn discover(explicit: Option<&Path>, from_env: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match from_env {
            Some(path) => match Self::load(path) {
                Ok(config) => Ok(config),
                Err(e) => {
                    tracing::warn!(%e, "Failed to load config from {CONFIG_ENV}, using defaults");
                    Ok(Self::default())
                }
            },
            None => Ok(Self::default()),
        }
    }

    /// Fill every unset key of `self` from `fallback`.
    pub fn or(self, fallback: Self) -> Self {
        Self {
            mode: self.mode.or(fallback.mode),
            threshold: self.threshold.or(fallback.threshold),
            columns: self.columns.or(fallback.columns),
            rows: self.rows.or(fallback.rows),
        }
    }

    /// The threshold cutoffs, defaulting each channel to 128.
    pub fn threshold(&self) -> Threshold {
        self.threshold
            .map(|[r, g, b]| Threshold::new(r, g, b))
            .unwrap_or_default()
    }

    /// The renderer color mode these settings select.
    pub fn color_mode(&self) -> ColorMode {
        self.mode.unwrap_or_default().to_color_mode(self.threshold())
    }
}

/// Parse an `R,G,B` cutoff triple as given to `--threshold`.
pub fn parse_threshold(value: &str) -> Result<[u8; 3], String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(format!("expected R,G,B, got {value:?}"));
    };
    let channel = |s: &str| {
        s.parse::<u8>()
            .map_err(|_| format!("channel {s:?} is not a number from 0 to 255"))
    };
    Ok([channel(*r)?, channel(*g)?, channel(*b)?])
}
