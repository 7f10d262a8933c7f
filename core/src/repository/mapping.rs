use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::input::NameMapping;
use crate::repository::data_dir;
use crate::repository::traits::MappingRepository;

const MAPPING_FILE_NAME: &str = "mapping.txt";

/// Name mapping stored as `FROM=TO` lines in the data directory.
#[derive(Clone)]
pub struct FileMappingRepository {
    file_path: PathBuf,
}

impl FileMappingRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let path = data_dir(base_dir)?.join(MAPPING_FILE_NAME);
        if !path.exists() {
            fs::write(&path, "")?;
        }
        Ok(FileMappingRepository { file_path: path })
    }

    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }

    pub fn load_text(&self) -> Result<String> {
        fs::read_to_string(&self.file_path)
            .with_context(|| format!("Could not read {}", self.file_path.display()))
    }
}

impl MappingRepository for FileMappingRepository {
    fn load(&self) -> Result<NameMapping> {
        let mapping = NameMapping::parse(&self.load_text()?);
        debug!(entries = mapping.len(), "name mapping loaded");
        Ok(mapping)
    }

    fn save(&self, mapping: &NameMapping) -> Result<()> {
        let mut text = mapping.to_text();
        if !text.is_empty() {
            text.push('\n');
        }
        fs::write(&self.file_path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileMappingRepository::new(Some(dir.path().to_path_buf())).unwrap();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_add_persists_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileMappingRepository::new(Some(dir.path().to_path_buf())).unwrap();

        repo.add("reque", "LUIS R").unwrap();
        repo.add("robert", "ROBERTO").unwrap();
        repo.add("reque", "LUIS REQUENA").unwrap();

        let reopened = FileMappingRepository::new(Some(dir.path().to_path_buf())).unwrap();
        let mapping = reopened.load().unwrap();
        assert_eq!(mapping.to_text(), "reque=LUIS REQUENA\nrobert=ROBERTO");
        assert_eq!(mapping.resolve("Reque"), Some("LUIS REQUENA".to_string()));
    }
}
