use super::ForestStore;
use crate::error::{Result, StreamFieldError};
use crate::model::Forest;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_DOCUMENT_FILE: &str = "document.json";

/// Keeps the document as a JSON file inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
    file_name: String,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_name: DEFAULT_DOCUMENT_FILE.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn document_path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self) -> Result<()> {
        if self.root.exists() && !self.root.is_dir() {
            return Err(StreamFieldError::Store(format!(
                "data path {} is not a directory",
                self.root.display()
            )));
        }
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(StreamFieldError::Io)?;
        }
        Ok(())
    }
}

impl ForestStore for FileStore {
    fn load(&self) -> Result<Forest> {
        let path = self.document_path();
        if !path.exists() {
            debug!(path = %path.display(), "no document yet");
            return Ok(Forest::default());
        }
        if !path.is_file() {
            return Err(StreamFieldError::Store(format!(
                "document path {} is not a file",
                path.display()
            )));
        }
        let content = fs::read_to_string(&path).map_err(StreamFieldError::Io)?;
        let forest: Forest =
            serde_json::from_str(&content).map_err(StreamFieldError::Serialization)?;
        debug!(path = %path.display(), roots = forest.len(), "loaded document");
        Ok(forest)
    }

    fn save(&mut self, forest: &Forest) -> Result<()> {
        self.ensure_dir()?;
        let path = self.document_path();
        let staging = self.root.join(format!(".{}.tmp", self.file_name));
        let content = serde_json::to_string_pretty(forest).map_err(StreamFieldError::Serialization)?;
        fs::write(&staging, content).map_err(StreamFieldError::Io)?;
        fs::rename(&staging, &path).map_err(StreamFieldError::Io)?;
        debug!(path = %path.display(), roots = forest.len(), "saved document");
        Ok(())
    }

    fn exists(&self) -> bool {
        self.document_path().exists()
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.document_path())
    }
}
