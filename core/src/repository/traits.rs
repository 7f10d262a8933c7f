use crate::input::NameMapping;
use anyhow::Result;

pub trait MappingRepository {
    fn load(&self) -> Result<NameMapping>;
    fn save(&self, mapping: &NameMapping) -> Result<()>;

    fn add(&self, from: &str, to: &str) -> Result<NameMapping> {
        let mut mapping = self.load()?;
        mapping.insert(from, to);
        self.save(&mapping)?;
        Ok(mapping)
    }
}
