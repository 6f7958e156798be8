use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site configuration, loaded from `mdsite.toml` in the site root.
///
/// Every field has a default, so a missing or empty config file still
/// yields a working layout. Directory fields are interpreted relative to
/// the site root unless absolute.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_template_path() -> PathBuf {
    PathBuf::from("template.html")
}

fn default_base_path() -> String {
    "/".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            static_dir: default_static_dir(),
            output_dir: default_output_dir(),
            template_path: default_template_path(),
            base_path: default_base_path(),
        }
    }
}

impl Config {
    /// Name of the config file looked up in the site root.
    pub const FILE_NAME: &'static str = "mdsite.toml";

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.content_dir = Self::expand_path(&config.content_dir).unwrap_or(config.content_dir);
        config.static_dir = Self::expand_path(&config.static_dir).unwrap_or(config.static_dir);
        config.output_dir = Self::expand_path(&config.output_dir).unwrap_or(config.output_dir);
        config.template_path =
            Self::expand_path(&config.template_path).unwrap_or(config.template_path);

        Ok(Some(config))
    }

    /// Loads `mdsite.toml` from the given site root, `Ok(None)` when absent.
    pub fn load_for_site(site_root: &Path) -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(site_root.join(Self::FILE_NAME))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
