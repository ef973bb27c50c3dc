//! # Storage Layer
//!
//! The document is one value: the whole [`Forest`]. Storage therefore deals in
//! whole documents too. A store hands out the current forest and takes back
//! its replacement; there is no per-block write path.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single pretty-printed JSON file inside the data
//!   directory. Saves go through a temporary file and a rename, so readers see
//!   either the old document or the new one.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! .streamfield/
//! ├── document.json       # The forest (name set by `document_file`)
//! └── streamfield.toml    # Optional config overrides
//! ```

use crate::error::Result;
use crate::model::Forest;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for document storage.
pub trait ForestStore {
    /// Read the current document. A store that was never written yields an
    /// empty forest.
    fn load(&self) -> Result<Forest>;

    /// Replace the stored document.
    fn save(&mut self, forest: &Forest) -> Result<()>;

    /// Whether a document has been written yet.
    fn exists(&self) -> bool;

    /// Where the document lives, for stores backed by a file.
    fn location(&self) -> Option<PathBuf> {
        None
    }
}
