//! # Command Layer
//!
//! Each command is a `run`-style function that loads the document from a
//! [`ForestStore`](crate::store::ForestStore), applies one pure operation from
//! [`crate::tree`], saves the replacement and reports what happened.
//!
//! ## Role and Responsibilities
//!
//! - Resolve the operation against the *current* stored forest
//! - Save only when the forest actually changed
//! - Return a structured [`CmdResult`]: the blocks touched (with the path they
//!   hold **after** the operation) and leveled messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O** beyond the store: no stdout, stderr or terminal concerns
//! - **Argument parsing**: that's the CLI layer's job
//! - **Rendering**: view models live in [`crate::view`]
//!
//! ## Command Modules
//!
//! - [`get`]: Read the document or one block
//! - [`move_block`]: Move a block up or down among its siblings
//! - [`duplicate`]: Duplicate, add, and append-to-list
//! - [`delete`]: Remove a block and its subtree
//! - [`closed`]: Open, close and toggle blocks
//! - [`reorder`]: Drag-and-drop relocation, including drag results
//! - [`reset`]: Replace the document with the sample forest
//! - [`helpers`]: Shared load/apply/save plumbing

use crate::model::Block;
use crate::path::BlockPath;
use serde::Serialize;

pub mod closed;
pub mod delete;
pub mod duplicate;
pub mod get;
pub mod helpers;
pub mod move_block;
pub mod reorder;
pub mod reset;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A block paired with the path it occupies in the forest it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayBlock {
    pub path: BlockPath,
    pub block: Block,
}

impl DisplayBlock {
    pub fn new(path: BlockPath, block: Block) -> Self {
        Self { path, block }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    /// Whether the stored document was replaced.
    pub changed: bool,
    pub affected_blocks: Vec<DisplayBlock>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn changed() -> Self {
        Self {
            changed: true,
            ..Default::default()
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_block(mut self, block: DisplayBlock) -> Self {
        self.affected_blocks.push(block);
        self
    }
}
