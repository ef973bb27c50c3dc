//! # Locating the Document
//!
//! A document lives in a `.streamfield/` data directory. Like `git`, the tool
//! finds it by walking up from the working directory, so any subdirectory of
//! a project edits the same document.
//!
//! ## Resolution Order
//!
//! [`resolve_data_dir`] picks the first of:
//! 1. An explicit `data_override` (`--data`). A path ending in `.streamfield`
//!    is used as is; otherwise `.streamfield` is appended.
//! 2. The `STREAMFIELD_DATA` environment variable, used as is.
//! 3. The nearest ancestor of `cwd` (up to, not past, `HOME`) holding a
//!    `.streamfield/` directory.
//! 4. `cwd/.streamfield` (created on first save).
//!
//! ## Global Directory
//!
//! The global directory only holds a shared `streamfield.toml`. It comes from
//! `STREAMFIELD_GLOBAL_DATA` (mostly for tests) or the OS data directory.
//!
//! ## First Run
//!
//! [`initialize`] seeds an empty store with the sample forest, sized by the
//! `sample_size` setting.

use crate::api::StreamFieldApi;
use crate::config::StreamFieldConfig;
use crate::error::Result;
use crate::store::fs::FileStore;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DATA_DIR_NAME: &str = ".streamfield";
pub const CONFIG_FILE_NAME: &str = "streamfield.toml";

pub struct StreamFieldContext {
    pub api: StreamFieldApi<FileStore>,
    pub config: StreamFieldConfig,
    pub data_dir: PathBuf,
    pub global_dir: PathBuf,
    /// Whether this run created the document from the sample.
    pub seeded: bool,
}

/// Walks up from `cwd` looking for a directory that holds `.streamfield/`.
/// Stops at the home directory or the filesystem root.
pub fn find_document_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(DATA_DIR_NAME).is_dir() {
            return Some(current);
        }
        if home_dir.as_ref() == Some(&current) {
            return None;
        }
        match current.parent() {
            Some(parent) if parent != current => current = parent.to_path_buf(),
            _ => return None,
        }
    }
}

pub fn resolve_data_dir(cwd: &Path, data_override: Option<PathBuf>) -> PathBuf {
    if let Some(path) = data_override {
        return if path.file_name().is_some_and(|name| name == DATA_DIR_NAME) {
            path
        } else {
            path.join(DATA_DIR_NAME)
        };
    }
    if let Some(path) = std::env::var_os("STREAMFIELD_DATA") {
        return PathBuf::from(path);
    }
    find_document_root(cwd)
        .unwrap_or_else(|| cwd.to_path_buf())
        .join(DATA_DIR_NAME)
}

pub fn global_dir(fallback: &Path) -> PathBuf {
    std::env::var_os("STREAMFIELD_GLOBAL_DATA")
        .map(PathBuf::from)
        .or_else(|| {
            ProjectDirs::from("com", "streamfield", "streamfield")
                .map(|dirs| dirs.data_dir().to_path_buf())
        })
        .unwrap_or_else(|| fallback.to_path_buf())
}

/// Loads `streamfield.toml` from the global and data directories, data
/// directory winning. `STREAMFIELD_*` variables locate files, they are not
/// settings, so the environment layer stays off.
pub fn load_config(global_dir: &Path, data_dir: &Path) -> StreamFieldConfig {
    let search_paths = vec![
        SearchPath::Path(global_dir.to_path_buf()),
        SearchPath::Path(data_dir.to_path_buf()),
    ];
    Clapfig::builder()
        .app_name("streamfield")
        .file_name(CONFIG_FILE_NAME)
        .search_paths(search_paths)
        .search_mode(SearchMode::Merge)
        .no_env()
        .strict(false)
        .load()
        .unwrap_or_default()
}

pub fn initialize(cwd: &Path, data_override: Option<PathBuf>) -> Result<StreamFieldContext> {
    let data_dir = resolve_data_dir(cwd, data_override);
    let global_dir = global_dir(&data_dir);
    let config = load_config(&global_dir, &data_dir);
    debug!(data_dir = %data_dir.display(), global_dir = %global_dir.display(), "resolved directories");

    let store = FileStore::new(&data_dir).with_file_name(&config.document_file());
    let mut api = StreamFieldApi::new(store);
    let seeded = api.seed_if_missing(config.sample_size)?;
    if seeded {
        info!(roots = config.sample_size, "seeded new document");
    }

    Ok(StreamFieldContext {
        api,
        config,
        data_dir,
        global_dir,
        seeded,
    })
}
