//! Tuning configuration with atomic writes and backup support.
//!
//! Every constant of the gesture controller (threshold, dead zone, timings,
//! viewport) lives in a `SwipeConfig` instead of being hard-coded at each
//! call site. Configs load from a small `swipe.conf` file:
//!
//! ```text
//! # swipe-deck tuning
//! threshold = 80
//! overlay_dead_zone = 10
//! super_like_enabled = true
//! ```
//!
//! Missing keys keep their defaults. Saving is atomic (temp file then
//! rename) and an existing file is first copied to a timestamped backup.
//!
//! # Example
//!
//! ```no_run
//! use swipe_deck::config::SwipeConfig;
//!
//! let path = SwipeConfig::default_path()?;
//! let config = SwipeConfig::load(&path)?;
//! println!("threshold: {}px", config.threshold);
//! # Ok::<(), swipe_deck::config::ConfigError>(())
//! ```

pub mod error;
pub mod parser;

pub use error::ConfigError;

use atomic_write_file::AtomicWriteFile;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

use crate::config::parser::{parse_settings, Setting};
use crate::core::policy::DEFAULT_THRESHOLD;
use crate::core::Viewport;

/// Default location, relative to the user's home directory
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/swipe-deck/swipe.conf";

/// Tunable constants of the swipe gesture controller
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SwipeConfig {
    /// Distance in pixels a release must pass to commit, on either axis
    pub threshold: f64,
    /// Travel below which the overlay shows no tint
    pub overlay_dead_zone: f64,
    /// Card rotation in degrees per pixel of horizontal offset
    pub rotation_factor: f64,
    /// Upper bound on overlay opacity
    pub max_overlay_opacity: f64,
    /// Card scale while held
    pub drag_scale: f64,
    /// Fly-out animation length before the decision is delivered
    pub exit_duration_ms: u64,
    /// Pause between delivering the decision and the invisible reset
    pub reset_delay_ms: u64,
    /// Pause between the reset and re-enabling transitions
    pub rearm_delay_ms: u64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// When false, upward swipes snap back and the super-like button is inert
    pub super_like_enabled: bool,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            overlay_dead_zone: 10.0,
            rotation_factor: 0.05,
            max_overlay_opacity: 0.7,
            drag_scale: 1.02,
            exit_duration_ms: 300,
            reset_delay_ms: 50,
            rearm_delay_ms: 50,
            viewport_width: 400.0,
            viewport_height: 800.0,
            super_like_enabled: true,
        }
    }
}

impl SwipeConfig {
    pub fn exit_duration(&self) -> Duration {
        Duration::from_millis(self.exit_duration_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    pub fn rearm_delay(&self) -> Duration {
        Duration::from_millis(self.rearm_delay_ms)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }

    /// Checks that the values make sense together
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |message: String| Err(ConfigError::ValidationFailed(message));

        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return fail(format!("threshold must be positive, got {}", self.threshold));
        }
        if !(0.0..self.threshold).contains(&self.overlay_dead_zone) {
            return fail(format!(
                "overlay_dead_zone must be in [0, threshold), got {}",
                self.overlay_dead_zone
            ));
        }
        if !self.rotation_factor.is_finite() {
            return fail("rotation_factor must be finite".to_string());
        }
        if !(self.max_overlay_opacity > 0.0 && self.max_overlay_opacity <= 1.0) {
            return fail(format!(
                "max_overlay_opacity must be in (0, 1], got {}",
                self.max_overlay_opacity
            ));
        }
        if !self.drag_scale.is_finite() || self.drag_scale <= 0.0 {
            return fail(format!("drag_scale must be positive, got {}", self.drag_scale));
        }
        if !(self.viewport_width > 0.0 && self.viewport_height > 0.0) {
            return fail(format!(
                "viewport must be positive, got {}x{}",
                self.viewport_width, self.viewport_height
            ));
        }

        Ok(())
    }

    /// Reads and validates a tuning file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist, or any
    /// parse/validation error from its content.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config: SwipeConfig = content.parse()?;
        debug!(path = %path.display(), "loaded swipe config");
        Ok(config)
    }

    /// Loads `path` when it exists, otherwise returns the defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Writes this config atomically
    ///
    /// Parent directories are created as needed. If a file already exists
    /// it is first copied to `<name>.<YYYY-MM-DD_HHMMSS>` next to it.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(path))` - Written, previous content backed up at `path`
    /// * `Ok(None)` - Written, nothing to back up
    pub fn save(&self, path: &Path) -> Result<Option<PathBuf>, ConfigError> {
        self.validate()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let backup = if path.exists() {
            Some(create_timestamped_backup(path)?)
        } else {
            None
        };

        let mut file = AtomicWriteFile::options().open(path).map_err(|e| {
            ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e))
        })?;

        file.write_all(self.to_conf_string().as_bytes())
            .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

        file.commit().map_err(|e| {
            ConfigError::WriteFailed(format!("Failed to commit atomic write: {}", e))
        })?;

        debug!(path = %path.display(), "saved swipe config");
        Ok(backup)
    }

    /// Renders the config in `swipe.conf` syntax
    pub fn to_conf_string(&self) -> String {
        format!(
            "# swipe-deck tuning\n\
             threshold = {}\n\
             overlay_dead_zone = {}\n\
             rotation_factor = {}\n\
             max_overlay_opacity = {}\n\
             drag_scale = {}\n\
             exit_duration_ms = {}\n\
             reset_delay_ms = {}\n\
             rearm_delay_ms = {}\n\
             viewport_width = {}\n\
             viewport_height = {}\n\
             super_like_enabled = {}\n",
            self.threshold,
            self.overlay_dead_zone,
            self.rotation_factor,
            self.max_overlay_opacity,
            self.drag_scale,
            self.exit_duration_ms,
            self.reset_delay_ms,
            self.rearm_delay_ms,
            self.viewport_width,
            self.viewport_height,
            self.super_like_enabled,
        )
    }

    /// `~/.config/swipe-deck/swipe.conf`, tilde expanded
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        expand_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    fn apply(&mut self, setting: &Setting) -> Result<(), ConfigError> {
        match setting.key.as_str() {
            "threshold" => self.threshold = parse_value(setting)?,
            "overlay_dead_zone" => self.overlay_dead_zone = parse_value(setting)?,
            "rotation_factor" => self.rotation_factor = parse_value(setting)?,
            "max_overlay_opacity" => self.max_overlay_opacity = parse_value(setting)?,
            "drag_scale" => self.drag_scale = parse_value(setting)?,
            "exit_duration_ms" => self.exit_duration_ms = parse_value(setting)?,
            "reset_delay_ms" => self.reset_delay_ms = parse_value(setting)?,
            "rearm_delay_ms" => self.rearm_delay_ms = parse_value(setting)?,
            "viewport_width" => self.viewport_width = parse_value(setting)?,
            "viewport_height" => self.viewport_height = parse_value(setting)?,
            "super_like_enabled" => self.super_like_enabled = parse_bool(setting)?,
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: setting.key.clone(),
                    line: setting.line,
                });
            }
        }
        Ok(())
    }
}

impl FromStr for SwipeConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let settings = parse_settings(content)?;
        let mut config = SwipeConfig::default();
        let mut seen: Vec<&str> = Vec::new();

        for setting in &settings {
            if seen.contains(&setting.key.as_str()) {
                return Err(ConfigError::DuplicateKey {
                    key: setting.key.clone(),
                    line: setting.line,
                });
            }
            seen.push(&setting.key);
            config.apply(setting)?;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Expands a leading `~` in `path`
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath("Invalid path encoding".to_string()))?;
    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

fn parse_value<T: FromStr>(setting: &Setting) -> Result<T, ConfigError> {
    setting.value.parse().map_err(|_| invalid(setting))
}

fn parse_bool(setting: &Setting) -> Result<bool, ConfigError> {
    match setting.value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid(setting)),
    }
}

fn invalid(setting: &Setting) -> ConfigError {
    ConfigError::InvalidValue {
        key: setting.key.clone(),
        value: setting.value.clone(),
        line: setting.line,
    }
}

fn create_timestamped_backup(path: &Path) -> Result<PathBuf, ConfigError> {
    // Generate timestamp in YYYY-MM-DD_HHMMSS format
    let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");

    let original_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ConfigError::BackupFailed("Config path has no file name".to_string()))?;

    let backup_path = path.with_file_name(format!("{}.{}", original_name, timestamp));

    fs::copy(path, &backup_path)
        .map_err(|e| ConfigError::BackupFailed(format!("{}: {}", backup_path.display(), e)))?;

    Ok(backup_path)
}

#[cfg(test)]
mod tests;
