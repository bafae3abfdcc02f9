use crate::error::{CoreError, CoreResult};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SLOT_KEY: &str = "securityControls";

pub trait SlotStore {
    fn read(&self, key: &str) -> CoreResult<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> CoreResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemorySlotStore {
    slots: HashMap<String, String>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(key: &str, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.to_string(), value.into());
        Self { slots }
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> CoreResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// One file per key. Concurrent writers are not coordinated; last write wins.
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    root: PathBuf,
}

impl FileSlotStore {
    pub fn open(root: impl AsRef<Path>) -> CoreResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot_path(&self, key: &str) -> CoreResult<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(CoreError::InvalidInput(format!(
                "slot key must be non-empty [A-Za-z0-9_-]: {:?}",
                key
            )));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self, key: &str) -> CoreResult<Option<String>> {
        let path = self.slot_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&mut self, key: &str, value: &str) -> CoreResult<()> {
        let path = self.slot_path(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(slot = key, bytes = value.len(), "slot written");
        Ok(())
    }
}
