use crate::errors::{AppError, AppResult};
use crate::models::DEFAULT_WORK_HOURS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Years accepted for `DD/MM` dates.
pub const YEAR_RANGE: RangeInclusive<i32> = 1..=9999;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Nominal length of a work day, in hours.
    #[serde(default = "default_work_hours")]
    pub work_hours: f64,
    /// Year for `DD/MM` dates; the current year when absent.
    #[serde(default)]
    pub year: Option<i32>,
}

fn default_work_hours() -> f64 {
    DEFAULT_WORK_HOURS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_hours: default_work_hours(),
            year: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rworklog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworklog.conf")
    }

    /// Load the configuration.
    ///
    /// With `path` the file must exist; without it the standard location is
    /// tried and defaults are used when nothing is there.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let default = Self::config_file();
                if default.exists() {
                    Self::from_file(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&content).map_err(|e| match e {
            AppError::Config(msg) => AppError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // an empty file means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.work_hours.is_finite() || self.work_hours < 0.0 || self.work_hours > 24.0 {
            return Err(AppError::Config(format!(
                "work_hours must be between 0 and 24, got {}",
                self.work_hours
            )));
        }
        if let Some(year) = self.year
            && !YEAR_RANGE.contains(&year)
        {
            return Err(AppError::Config(format!(
                "year must be between {} and {}, got {}",
                YEAR_RANGE.start(),
                YEAR_RANGE.end(),
                year
            )));
        }
        Ok(())
    }
}
