use crate::error::{Result, StockError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "stockroom.json";
const DEFAULT_DATA_FILE: &str = "db_products.csv";

/// Configuration for stockroom, stored in `stockroom.json` next to the data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// CSV file holding the products. Relative paths resolve against the
    /// directory the config was loaded from.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Clear the terminal before each redraw of the product table
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_clear_screen() -> bool {
    true
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            clear_screen: default_clear_screen(),
        }
    }
}

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockError::Io)?;
        let config: StockConfig =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockError::Serialization)?;
        fs::write(config_path, content).map_err(StockError::Io)?;
        Ok(())
    }

    /// The data file path, anchored at `base_dir` when relative.
    pub fn data_path<P: AsRef<Path>>(&self, base_dir: P) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            base_dir.as_ref().join(&self.data_file)
        }
    }
}
