//! # Configuration
//!
//! Streamfield configuration is managed by [`clapfig`], which handles layered
//! loading from TOML files, environment variables, and programmatic overrides.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Document Config**: `.streamfield/streamfield.toml` next to the document.
//! 2. **Global Config**: OS-appropriate data directory (via `directories` crate).
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `sample_size` | `50` | Root blocks in a freshly seeded document |
//! | `document_file` | `document.json` | File name of the document inside the data dir |
//! | `indent` | `2` | Columns per nesting level in the tree listing |
//! | `show_ids` | `false` | Print block ids next to titles |

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::sample::DEFAULT_SAMPLE_SIZE;
use crate::store::fs::DEFAULT_DOCUMENT_FILE;

/// Configuration for streamfield, stored in `streamfield.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StreamFieldConfig {
    /// Number of root blocks in a freshly seeded document.
    #[config(default = 50)]
    pub sample_size: usize,

    /// File name of the document inside the data directory.
    #[config(default = "document.json")]
    pub document_file: String,

    /// Columns per nesting level when listing the tree.
    #[config(default = 2)]
    pub indent: usize,

    /// Print block ids next to titles.
    #[config(default = false)]
    pub show_ids: bool,
}

impl Default for StreamFieldConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            document_file: DEFAULT_DOCUMENT_FILE.to_string(),
            indent: 2,
            show_ids: false,
        }
    }
}

impl StreamFieldConfig {
    /// Document file name, with `.json` appended when no extension is given.
    pub fn document_file(&self) -> String {
        if self.document_file.contains('.') {
            self.document_file.clone()
        } else {
            format!("{}.json", self.document_file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StreamFieldConfig::default();
        assert_eq!(config.sample_size, 50);
        assert_eq!(config.document_file(), "document.json");
        assert_eq!(config.indent, 2);
        assert!(!config.show_ids);
    }

    #[test]
    fn test_document_file_without_extension() {
        let config = StreamFieldConfig {
            document_file: "page".to_string(),
            ..Default::default()
        };
        assert_eq!(config.document_file(), "page.json");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = StreamFieldConfig {
            sample_size: 5,
            show_ids: true,
            ..Default::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("sample_size = 5"));
        let back: StreamFieldConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
