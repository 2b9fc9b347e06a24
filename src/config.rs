use crate::error::{Result, ZooError};
use crate::store::fs::DEFAULT_DATA_FILE;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for menagerie, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ZooConfig {
    /// Name of the animal document, relative to the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Where exports go when the caller gives only a file name
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Indent the persisted document
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for ZooConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            export_dir: None,
            pretty: default_pretty(),
        }
    }
}

impl ZooConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| ZooError::Config(format!("{}: {}", config_path.display(), e)))?;
        let config: ZooConfig = serde_json::from_str(&content)
            .map_err(|e| ZooError::Config(format!("{}: {}", config_path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)
                .map_err(|e| ZooError::Config(format!("{}: {}", config_dir.display(), e)))?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ZooError::Config(e.to_string()))?;
        fs::write(&config_path, content)
            .map_err(|e| ZooError::Config(format!("{}: {}", config_path.display(), e)))?;
        Ok(())
    }

    /// Resolve an export destination. Bare file names land in `export_dir`.
    pub fn export_path(&self, destination: impl AsRef<Path>) -> PathBuf {
        let destination = destination.as_ref();
        match &self.export_dir {
            Some(dir) if destination.parent().map_or(true, |p| p.as_os_str().is_empty()) => {
                dir.join(destination)
            }
            _ => destination.to_path_buf(),
        }
    }
}

/// Where menagerie keeps its document and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZooPaths {
    pub data_dir: PathBuf,
}

impl ZooPaths {
    pub fn from_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The platform data directory (e.g. `~/.local/share/menagerie`).
    pub fn discover() -> Result<Self> {
        let dirs = ProjectDirs::from("org", "menagerie", "menagerie").ok_or_else(|| {
            ZooError::Config("Could not determine a data directory for this user".to_string())
        })?;
        Ok(Self::from_data_dir(dirs.data_dir()))
    }

    pub fn config(&self) -> Result<ZooConfig> {
        ZooConfig::load(&self.data_dir)
    }

    pub fn data_file(&self, config: &ZooConfig) -> PathBuf {
        self.data_dir.join(&config.data_file)
    }
}
