use super::backend::{decode_items, StorageBackend};
use crate::error::{BillzError, Result};
use crate::model::Item;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const ITEMS_FILENAME: &str = "items.json";
const CORRUPT_SUFFIX: &str = ".corrupt";

pub struct FsBackend {
    root: PathBuf,
    file_name: String,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_name: ITEMS_FILENAME.to_string(),
        }
    }

    pub fn with_file_name(mut self, name: &str) -> Self {
        self.file_name = name.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn items_path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(BillzError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_items(&self) -> Result<Option<Vec<Item>>> {
        let path = self.items_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(BillzError::Io)?;
        Ok(Some(decode_items(&content)?))
    }

    fn save_items(&self, items: &[Item]) -> Result<()> {
        self.ensure_dir(&self.root)?;

        let content = serde_json::to_string_pretty(items).map_err(BillzError::Serialization)?;

        // Atomic Write
        let tmp_path = self.root.join(format!(".items-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(BillzError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, self.items_path()) {
            let _ = fs::remove_file(&tmp_path);
            return Err(BillzError::Io(e));
        }

        Ok(())
    }

    fn set_aside(&self) -> Result<Option<PathBuf>> {
        let path = self.items_path();
        if !path.exists() {
            return Ok(None);
        }
        let target = self
            .root
            .join(format!("{}{}", self.file_name, CORRUPT_SUFFIX));
        fs::rename(&path, &target).map_err(BillzError::Io)?;
        Ok(Some(target))
    }

    fn location(&self) -> PathBuf {
        self.items_path()
    }
}
