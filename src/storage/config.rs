//! Configuration handling for custom-view
//!
//! Configuration is stored in `custom-view.toml` (project) and
//! `~/.config/custom-view/config.toml` (global). The first one found wins;
//! files are not merged. Missing keys take their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{
    builtin_presets, PermissionDefaults, PresetTable, ResourceStyle, ViewType, DEFAULT_EXTENSION,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Settings read from a configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Type used when `--type` is not given
    pub default_type: ViewType,

    /// Root directory for views, relative to the config file's directory
    pub view_path: PathBuf,

    /// View file extensions; the first one is used for new files
    pub extensions: Vec<String>,

    /// Sections filled in by `--defaults`
    pub default_sections: Vec<String>,

    /// Components filled in by `--defaults`
    pub default_components: Vec<String>,

    /// Boilerplate flavour for resource views
    pub resource_style: ResourceStyle,

    /// Permissions applied by `--permission` when no flag overrides them
    pub default_permissions: PermissionDefaults,

    /// Named presets for `--template`
    pub presets: PresetTable,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_type: ViewType::Simple,
            view_path: PathBuf::from("resources/views"),
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            default_sections: vec!["content".into(), "scripts".into(), "styles".into()],
            default_components: vec!["navbar".into(), "footer".into()],
            resource_style: ResourceStyle::Section,
            default_permissions: PermissionDefaults {
                mode: Some("644".to_string()),
                owner: Some("www-data".to_string()),
                group: Some("www-data".to_string()),
            },
            presets: builtin_presets(),
        }
    }
}

impl ViewConfig {
    /// Rejects settings that would produce unusable paths
    pub fn validate(&self) -> Result<(), ConfigError> {
        for ext in &self.extensions {
            if !ext.starts_with('.') || ext.len() < 2 || ext.contains(['/', '\\']) {
                return Err(ConfigError::Invalid(format!(
                    "extension '{}' must start with '.' and contain no path separators",
                    ext
                )));
            }
        }
        Ok(())
    }
}

/// Loaded configuration plus where it came from
#[derive(Debug, Clone)]
pub struct Config {
    pub settings: ViewConfig,

    /// File the settings were read from, if any
    pub source: Option<PathBuf>,

    /// Directory a relative `view_path` is resolved against
    pub base_dir: PathBuf,
}

impl Config {
    /// Project configuration file name
    pub const FILE_NAME: &'static str = "custom-view.toml";

    /// Built-in defaults rooted at `base_dir`
    pub fn defaults_in(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            settings: ViewConfig::default(),
            source: None,
            base_dir: base_dir.into(),
        }
    }

    /// Loads configuration from an explicit path or the default locations
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let cwd = std::env::current_dir().context("Failed to determine current directory")?;

        if let Some(path) = Self::find_config_file(&cwd) {
            return Self::from_file(&path);
        }

        if let Some(dir) = Self::global_config_dir() {
            let path = dir.join("config.toml");
            if path.is_file() {
                let mut config = Self::from_file(&path)?;
                // A global file cannot know the project, so views live under cwd
                config.base_dir = cwd;
                return Ok(config);
            }
        }

        Ok(Self::defaults_in(cwd))
    }

    /// Loads configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let settings: ViewConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        settings.validate()?;

        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            settings,
            source: Some(path.to_path_buf()),
            base_dir,
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "custom-view", "custom-view")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Finds `custom-view.toml` in `start` or its nearest ancestor
    pub fn find_config_file(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(Self::FILE_NAME))
            .find(|path| path.is_file())
    }

    /// Overrides the view root (e.g. from `--view-path`)
    pub fn with_view_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings.view_path = path.into();
        self
    }

    /// Absolute or base-relative directory holding the views
    pub fn view_root(&self) -> PathBuf {
        if self.settings.view_path.is_absolute() {
            self.settings.view_path.clone()
        } else {
            self.base_dir.join(&self.settings.view_path)
        }
    }

    /// Extension for new view files
    pub fn extension(&self) -> &str {
        self.settings
            .extensions
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_EXTENSION)
    }

    /// Writes a sample `custom-view.toml` into `dir` unless one exists.
    /// Returns the path and whether it was created.
    pub fn write_sample(dir: &Path) -> Result<(PathBuf, bool)> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

        let path = dir.join(Self::FILE_NAME);
        if path.exists() {
            return Ok((path, false));
        }

        fs::write(&path, SAMPLE_CONFIG)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;

        Ok((path, true))
    }
}

const SAMPLE_CONFIG: &str = r#"# custom-view configuration

# Type used when --type is not given: simple, blank or resource
default_type = "simple"

# Where views are created, relative to this file
view_path = "resources/views"

# The first extension is used for new views
extensions = [".blade.php"]

# Filled in by --defaults when no sections/components are given
default_sections = ["content", "scripts", "styles"]
default_components = ["navbar", "footer"]

# Resource boilerplate: "section" or "actions"
resource_style = "section"

[default_permissions]
mode = "644"
owner = "www-data"
group = "www-data"

[presets.admin]
type = "resource"
extend = "layouts.admin"
sections = ["content", "sidebar", "scripts"]
components = ["admin-nav", "admin-footer"]

[presets.blog]
type = "resource"
extend = "layouts.blog"
sections = ["content", "meta", "sidebar"]
components = ["blog-header", "blog-footer", "share-buttons"]
"#;
