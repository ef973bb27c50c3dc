//! # Domain Model: Blocks and the Forest
//!
//! A document is a [`Forest`]: an ordered list of root [`Block`]s, each owning
//! an ordered list of child blocks. Ownership is exclusive, so the structure is
//! a strict tree by construction. No block is shared between two parents and
//! no cycle can be expressed.
//!
//! ## Wire Format
//!
//! Blocks serialize to the same JSON shape the document file uses:
//!
//! ```json
//! { "id": "4", "title": "♡ Some love 4", "type": "Block type", "closed": true, "children": [] }
//! ```
//!
//! ## The `closed` Flag
//!
//! `closed` is presentation state. It is persisted with the block so a
//! collapsed section stays collapsed, but none of the tree operations read it.
//!
//! ## Copying
//!
//! `Block` derives `Clone` over owned fields, so `block.clone()` is a full
//! structural copy of the subtree. Duplicates never alias their original's
//! children.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub children: Vec<Block>,
}

impl Block {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        block_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            block_type: block_type.into(),
            closed: false,
            children: Vec::new(),
        }
    }

    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.children = children;
        self
    }

    /// Number of blocks in this subtree, including this one.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Block::subtree_len).sum::<usize>()
    }
}

/// The full ordered collection of root-level blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forest(Vec<Block>);

impl Forest {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self(blocks)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.0
    }

    pub(crate) fn blocks_mut(&mut self) -> &mut Vec<Block> {
        &mut self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of blocks at every depth.
    pub fn total_blocks(&self) -> usize {
        self.0.iter().map(Block::subtree_len).sum()
    }
}

impl From<Vec<Block>> for Forest {
    fn from(blocks: Vec<Block>) -> Self {
        Self(blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_uses_wire_name() {
        let block = Block::new("1", "Title", "Block type");
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "Block type");
        assert!(json.get("block_type").is_none());
    }

    #[test]
    fn test_missing_flags_default() {
        let block: Block =
            serde_json::from_str(r#"{"id":"1","title":"T","type":"Block type"}"#).unwrap();
        assert!(!block.closed);
        assert!(block.children.is_empty());
    }

    #[test]
    fn test_forest_is_a_plain_json_array() {
        let forest = Forest::new(vec![Block::new("0", "A", "t"), Block::new("1", "B", "t")]);
        let json = serde_json::to_string(&forest).unwrap();
        assert!(json.starts_with('['));
        let back: Forest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, forest);
    }

    #[test]
    fn test_clone_is_independent() {
        let original =
            Block::new("0", "A", "t").with_children(vec![Block::new("0-0", "child", "t")]);
        let mut copy = original.clone();
        copy.children[0].title = "changed".into();
        copy.children.push(Block::new("0-1", "extra", "t"));
        assert_eq!(original.children.len(), 1);
        assert_eq!(original.children[0].title, "child");
    }

    #[test]
    fn test_counts() {
        let forest = Forest::new(vec![Block::new("0", "A", "t").with_children(vec![
            Block::new("0-0", "B", "t").with_children(vec![Block::new("0-0-0", "C", "t")]),
        ])]);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest.total_blocks(), 3);
    }
}
