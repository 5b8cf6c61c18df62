use super::{DataStore, Slot};
use crate::error::{LexisError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed store: each slot lives in `<root>/<slot>.json`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_file(&self, slot: Slot) -> PathBuf {
        self.root.join(format!("{}.json", slot.key()))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(LexisError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn read_slot(&self, slot: Slot) -> Result<Option<String>> {
        let path = self.slot_file(slot);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(LexisError::Io)?;
        Ok(Some(content))
    }

    fn write_slot(&mut self, slot: Slot, content: &str) -> Result<()> {
        self.ensure_dir()?;

        // Write to a sibling temp file and rename so a slot is never half-written
        let target = self.slot_file(slot);
        let tmp_file = self
            .root
            .join(format!(".{}-{}.tmp", slot.key(), Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(LexisError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &target) {
            let _ = fs::remove_file(&tmp_file);
            return Err(LexisError::Store(format!(
                "could not replace {}: {}",
                target.display(),
                e
            )));
        }
        Ok(())
    }

    fn slot_path(&self, slot: Slot) -> Option<PathBuf> {
        Some(self.slot_file(slot))
    }
}
