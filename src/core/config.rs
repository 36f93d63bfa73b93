//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.videohub/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::navigation::Section;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VideohubConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Kept as a string so a typo is reported instead of failing the whole file.
    pub default_section: Option<String>,
    pub catalog_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub narrow_width: Option<u16>,
    pub wide_width: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Below this terminal width: one card column and bottom navigation.
pub const DEFAULT_NARROW_WIDTH: u16 = 60;
/// At or above this width: three card columns.
pub const DEFAULT_WIDE_WIDTH: u16 = 100;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub section: Section,
    /// `None` = built-in sample catalog.
    pub catalog_file: Option<PathBuf>,
    pub narrow_width: u16,
    pub wide_width: u16,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            section: Section::default(),
            catalog_file: None,
            narrow_width: DEFAULT_NARROW_WIDTH,
            wide_width: DEFAULT_WIDE_WIDTH,
        }
    }
}

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides<'a> {
    pub section: Option<&'a str>,
    pub catalog_file: Option<&'a Path>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.videohub/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".videohub"))
}

/// Returns the path to `~/.videohub/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.videohub/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `VideohubConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<VideohubConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(VideohubConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(VideohubConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<VideohubConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: VideohubConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# VideoHub Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_section = "home"         # home, catalog, playlists, history, profile
# catalog_file = "catalog.json"    # JSON array of videos; relative to ~/.videohub/

# [ui]
# narrow_width = 60                # below: one column, navigation at the bottom
# wide_width = 100                 # at or above: three columns
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &VideohubConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with environment lookup injected.
pub fn resolve_with_env(
    config: &VideohubConfig,
    cli: &CliOverrides<'_>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Section: CLI → env → config → default
    let section_id = cli
        .section
        .map(|s| s.to_string())
        .or_else(|| env("VIDEOHUB_SECTION"))
        .or_else(|| config.general.default_section.clone());
    let section = match section_id {
        Some(id) => id.parse().unwrap_or_else(|e| {
            warn!("{}; falling back to home", e);
            Section::default()
        }),
        None => Section::default(),
    };

    // Catalog: CLI path as given; env/config paths are relative to ~/.videohub/
    let catalog_file = cli
        .catalog_file
        .map(Path::to_path_buf)
        .or_else(|| {
            env("VIDEOHUB_CATALOG")
                .or_else(|| config.general.catalog_file.clone())
                .map(|file| resolve_relative(&file))
        });

    let narrow_width = config.ui.narrow_width.unwrap_or(DEFAULT_NARROW_WIDTH);
    let mut wide_width = config.ui.wide_width.unwrap_or(DEFAULT_WIDE_WIDTH);
    if wide_width <= narrow_width {
        warn!(
            "ui.wide_width ({}) must exceed ui.narrow_width ({}); using {}",
            wide_width,
            narrow_width,
            narrow_width.saturating_add(1)
        );
        wide_width = narrow_width.saturating_add(1);
    }

    ResolvedConfig {
        section,
        catalog_file,
        narrow_width,
        wide_width,
    }
}

fn resolve_relative(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}
