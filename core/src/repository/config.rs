use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::repository::data_dir;
use crate::service::stats_service::SortKey;

const CONFIG_FILE_NAME: &str = "config.json";
const DEFAULT_CHART_WINDOW: usize = 15;
const DEFAULT_CHART_STEP: usize = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Anchor date (`YYYY-MM-DD`) used when none is given on the command line.
    pub start_date: Option<String>,
    pub sort_by: SortKey,
    /// Workers visible at once in chart views.
    pub chart_window: usize,
    /// Workers the chart window slides by per key press.
    pub chart_step: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_date: None,
            sort_by: SortKey::default(),
            chart_window: DEFAULT_CHART_WINDOW,
            chart_step: DEFAULT_CHART_STEP,
        }
    }
}

#[derive(Clone)]
pub struct FileConfigRepository {
    file_path: PathBuf,
}

impl FileConfigRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let path = data_dir(base_dir)?.join(CONFIG_FILE_NAME);
        Ok(Self { file_path: path })
    }

    /// Missing file means defaults; a malformed one is an error.
    pub fn load(&self) -> Result<Config> {
        if !self.file_path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&self.file_path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", self.file_path.display()))
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}
