use crate::model::view_state::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows per page for every list screen
    pub default_page_size: usize,
    /// Directory holding `<screen>.json` datasets; built-in data when unset
    pub data_dir: Option<PathBuf>,
    /// Make the mutation sink refuse every request
    pub reject_mutations: bool,
    pub log_file: Option<PathBuf>,
    /// File this config was read from, `None` when it came from defaults
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            data_dir: None,
            reject_mutations: false,
            log_file: None,
            path: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".school-console"))
    }

    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Log file used when none is configured
    pub fn default_log_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("school-console.log"))
    }

    /// Load from the default location; defaults when there is no file
    pub fn load() -> anyhow::Result<Config> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load from `path`; a missing file yields unbound defaults
    pub fn load_from(path: &Path) -> anyhow::Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let mut config = serde_json::from_str::<Config>(&contents)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;

        if config.default_page_size == 0 {
            warn!("default_page_size of 0 in config, using {}", DEFAULT_PAGE_SIZE);
            config.default_page_size = DEFAULT_PAGE_SIZE;
        }
        config.path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Apply command-line overrides on top of the file values
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        page_size: Option<usize>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        if let Some(size) = page_size.filter(|&n| n > 0) {
            self.default_page_size = size;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
        self
    }

    /// Save the config to the file it came from
    pub fn save(&self) -> anyhow::Result<()> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => Self::default_path()
                .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?,
        };

        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&path, contents)?;

        Ok(())
    }
}
