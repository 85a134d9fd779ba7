//! Runtime configuration.
//!
//! Detected platform, desktop environment, log path: all of it lives in one
//! [`Config`] built in `main` and passed by reference into every component,
//! so there are no process-wide mutable statics.
//!
//! An optional JSON file can overlay the defaults; every field is optional
//! and unknown keys are ignored, so a minimal `{}` is valid:
//!
//! ```json
//! {
//!   "desktop": "bspwm",
//!   "picker": "console",
//!   "dry_run": true
//! }
//! ```
//!
//! Precedence is CLI flag, then config file, then detection/defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
}

impl Platform {
    /// Detect the platform this process runs on. `None` for anything the
    /// tool has no backend for.
    pub fn detect() -> Option<Platform> {
        match std::env::consts::OS {
            "linux" => Some(Platform::Linux),
            "windows" => Some(Platform::Windows),
            _ => None,
        }
    }
}

/// Desktop shells the restart step knows how to reload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DesktopEnvironment {
    I3,
    BspWm,
    Sway,
    /// Anything else; the restart step logs this and is skipped.
    Unknown,
}

impl DesktopEnvironment {
    pub fn from_tag(tag: &str) -> DesktopEnvironment {
        match tag.trim().to_lowercase().as_str() {
            "i3" => DesktopEnvironment::I3,
            "bspwm" => DesktopEnvironment::BspWm,
            "sway" => DesktopEnvironment::Sway,
            _ => DesktopEnvironment::Unknown,
        }
    }

    /// Detect the running desktop environment from the session environment.
    ///
    /// `XDG_CURRENT_DESKTOP` may hold a colon-separated list
    /// (`ubuntu:GNOME`), so each element is tried in turn before falling
    /// back to `DESKTOP_SESSION`.
    pub fn detect() -> DesktopEnvironment {
        for var in ["XDG_CURRENT_DESKTOP", "DESKTOP_SESSION"] {
            if let Ok(value) = std::env::var(var) {
                for element in value.split(':') {
                    let de = DesktopEnvironment::from_tag(element);
                    if de != DesktopEnvironment::Unknown {
                        return de;
                    }
                }
            }
        }
        DesktopEnvironment::Unknown
    }

    pub fn as_tag(&self) -> &'static str {
        match *self {
            DesktopEnvironment::I3 => "i3",
            DesktopEnvironment::BspWm => "bspwm",
            DesktopEnvironment::Sway => "sway",
            DesktopEnvironment::Unknown => "unknown",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PickerKind {
    /// Pick a sensible picker for the platform at startup.
    Auto,
    Rofi,
    Console,
    GridView,
}

impl PickerKind {
    pub fn from_tag(tag: &str) -> Option<PickerKind> {
        match tag.trim().to_lowercase().as_str() {
            "auto" => Some(PickerKind::Auto),
            "rofi" => Some(PickerKind::Rofi),
            "console" => Some(PickerKind::Console),
            "gridview" => Some(PickerKind::GridView),
            _ => None,
        }
    }
}

/// Fully-resolved runtime configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub platform: Platform,
    pub desktop: DesktopEnvironment,
    pub picker: PickerKind,
    pub log_file: PathBuf,
    pub dry_run: bool,
}

impl Config {
    /// Merge CLI flags over the config file over detection and defaults.
    pub fn resolve(
        platform: Platform,
        file: &ConfigFile,
        desktop_flag: Option<&str>,
        picker_flag: Option<PickerKind>,
        log_flag: Option<PathBuf>,
        dry_run_flag: bool,
    ) -> Config {
        let desktop = desktop_flag
            .map(DesktopEnvironment::from_tag)
            .or_else(|| file.desktop.as_deref().map(DesktopEnvironment::from_tag))
            .unwrap_or_else(DesktopEnvironment::detect);
        let picker = picker_flag
            .or_else(|| file.picker.as_deref().and_then(PickerKind::from_tag))
            .unwrap_or(PickerKind::Auto);
        let log_file = log_flag
            .or_else(|| file.log_file.clone())
            .unwrap_or_else(default_log_file);
        Config {
            platform,
            desktop,
            picker,
            log_file,
            dry_run: dry_run_flag || file.dry_run.unwrap_or(false),
        }
    }
}

/// Default log path: `<local data dir>/monmenu/monmenu.log`, which resolves
/// per platform (`~/.local/share` on Linux, `%LOCALAPPDATA%` on Windows).
pub fn default_log_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("monmenu")
        .join("monmenu.log")
}

/// Default config path: `<config dir>/monmenu/config.json`.
pub fn default_config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("monmenu")
        .join("config.json")
}

/// On-disk overlay. Every field optional; unknown keys ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub desktop: Option<String>,
    pub picker: Option<String>,
    pub log_file: Option<PathBuf>,
    pub dry_run: Option<bool>,
}

impl ConfigFile {
    /// Load the overlay from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<ConfigFile, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
