//! Application configuration.
//!
//! Loaded from an optional TOML file; every field has a default so an empty
//! or missing file yields the stock eight-level viewer.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::playback::SpeedRange;

/// Deepest construction the viewer will precompute.
pub const MAX_SUPPORTED_ITERATIONS: u32 = 16;

#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
    IterationsOutOfRange { max_iterations: u32 },
    InvalidSpeedRange { min_speed: u32, max_speed: u32 },
    SpeedOutOfRange { speed: u32, min_speed: u32, max_speed: u32 },
    ZeroWindowSize { width: u32, height: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config {}: {}", path.display(), source)
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config {}: {}", path.display(), source)
            }
            Self::IterationsOutOfRange { max_iterations } => {
                write!(
                    f,
                    "max_iterations must be between 1 and {}, got {}",
                    MAX_SUPPORTED_ITERATIONS, max_iterations
                )
            }
            Self::InvalidSpeedRange {
                min_speed,
                max_speed,
            } => {
                write!(
                    f,
                    "speed range must satisfy 1 <= min_speed <= max_speed, got {}..={}",
                    min_speed, max_speed
                )
            }
            Self::SpeedOutOfRange {
                speed,
                min_speed,
                max_speed,
            } => {
                write!(
                    f,
                    "speed {} is outside {}..={}",
                    speed, min_speed, max_speed
                )
            }
            Self::ZeroWindowSize { width, height } => {
                write!(f, "window size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Number of construction levels, including the seed level.
    pub max_iterations: u32,
    /// Initial animation speed.
    pub speed: u32,
    pub min_speed: u32,
    pub max_speed: u32,
    pub window_width: u32,
    pub window_height: u32,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl AppConfig {
    const DEFAULT_MAX_ITERATIONS: u32 = 8;
    const DEFAULT_SPEED: u32 = 3;
    const DEFAULT_LOG_LEVEL: &'static str = "info";

    /// Reads `path` when given, otherwise uses defaults, then validates.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SUPPORTED_ITERATIONS).contains(&self.max_iterations) {
            return Err(ConfigError::IterationsOutOfRange {
                max_iterations: self.max_iterations,
            });
        }

        let speed_range = self.speed_range()?;

        if !speed_range.contains(self.speed) {
            return Err(ConfigError::SpeedOutOfRange {
                speed: self.speed,
                min_speed: self.min_speed,
                max_speed: self.max_speed,
            });
        }

        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::ZeroWindowSize {
                width: self.window_width,
                height: self.window_height,
            });
        }

        Ok(())
    }

    pub fn speed_range(&self) -> Result<SpeedRange, ConfigError> {
        SpeedRange::new(self.min_speed, self.max_speed).ok_or(ConfigError::InvalidSpeedRange {
            min_speed: self.min_speed,
            max_speed: self.max_speed,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let speed_range = SpeedRange::default();

        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            speed: Self::DEFAULT_SPEED,
            min_speed: speed_range.min(),
            max_speed: speed_range.max(),
            window_width: 1100,
            window_height: 700,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
