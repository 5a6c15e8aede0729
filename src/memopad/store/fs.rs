use super::DataStore;
use crate::error::{MemoPadError, Result};
use crate::model::NotePad;
use chrono::Local;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(MemoPadError::Io)?;
        }
        Ok(())
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "memopad.json".to_string())
    }

    fn write_synced(path: &Path, content: &str) -> Result<()> {
        let mut file = File::create(path).map_err(MemoPadError::Io)?;
        file.write_all(content.as_bytes()).map_err(MemoPadError::Io)?;
        file.sync_all().map_err(MemoPadError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Option<NotePad>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no pad file yet");
            return Ok(None);
        }
        // Raw bytes: invalid UTF-8 is corruption, not an I/O failure
        let content = fs::read(&self.path).map_err(MemoPadError::Io)?;
        let pad: NotePad =
            serde_json::from_slice(&content).map_err(|source| MemoPadError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        tracing::info!(path = %self.path.display(), notes = pad.len(), "pad loaded");
        Ok(Some(pad))
    }

    fn save(&mut self, pad: &NotePad) -> Result<()> {
        let dir = self.parent_dir().to_path_buf();
        self.ensure_dir(&dir)?;

        let content = serde_json::to_string_pretty(pad).map_err(MemoPadError::Serialization)?;

        // Atomic write: sibling tmp file, then rename over the target
        let tmp_file = dir.join(format!(".{}-{}.tmp", self.file_name(), Uuid::new_v4()));
        let written = Self::write_synced(&tmp_file, &content)
            .and_then(|_| fs::rename(&tmp_file, &self.path).map_err(MemoPadError::Io));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_file);
            tracing::error!(path = %self.path.display(), error = %e, "saving pad failed");
            return Err(e);
        }

        tracing::info!(path = %self.path.display(), notes = pad.len(), "pad saved");
        Ok(())
    }

    fn quarantine(&mut self) -> Result<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let backup = self
            .parent_dir()
            .join(format!("{}.corrupt-{}", self.file_name(), stamp));
        fs::rename(&self.path, &backup).map_err(MemoPadError::Io)?;
        tracing::warn!(
            path = %self.path.display(),
            backup = %backup.display(),
            "moved unreadable pad file aside"
        );
        Ok(Some(backup))
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }
}
