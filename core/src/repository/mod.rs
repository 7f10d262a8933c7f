pub mod config;
pub mod mapping;
pub mod traits;

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

pub use config::{Config, FileConfigRepository};
pub use mapping::FileMappingRepository;
pub use traits::MappingRepository;

const DATA_DIR_NAME: &str = ".shiftstats";

/// Resolves the data directory (`~/.shiftstats` unless overridden) and
/// makes sure it exists.
pub fn data_dir(base_dir: Option<PathBuf>) -> Result<PathBuf> {
    let path = match base_dir {
        Some(dir) => dir,
        None => {
            let home_dir = dirs::home_dir()
                .ok_or_else(|| anyhow!("Could not determine home directory"))?;
            home_dir.join(DATA_DIR_NAME)
        }
    };
    fs::create_dir_all(&path)?;
    Ok(path)
}
