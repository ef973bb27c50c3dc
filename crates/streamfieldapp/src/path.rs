//! # Block Paths
//!
//! Blocks carry no addressable identity of their own: the `id` field is data,
//! and duplicates share it. Every operation addresses a block by its
//! **position**, as the sequence of zero-based indices walked from the root
//! list down to the block.
//!
//! ```text
//! 0          first root block
//! 0.1        second child of the first root block
//! 3.0.0      first grandchild of the fourth root block
//! root       the root list itself (empty path)
//! ```
//!
//! A path only means something against the forest it was computed from. Any
//! structural mutation can shift it, so paths are recomputed on every render
//! and never stored.

use crate::error::StreamFieldError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display form of the empty path.
pub const ROOT_LABEL: &str = "root";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockPath(Vec<usize>);

impl BlockPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Path of the `index`-th child of the block at this path.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Path of the list that contains this block. `None` for the root path.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }

    /// Position of the block inside its parent list.
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    pub fn starts_with(&self, prefix: &BlockPath) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl From<Vec<usize>> for BlockPath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl<const N: usize> From<[usize; N]> for BlockPath {
    fn from(indices: [usize; N]) -> Self {
        Self(indices.to_vec())
    }
}

impl fmt::Display for BlockPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str(ROOT_LABEL);
        }
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        f.write_str(&parts.join("."))
    }
}

impl FromStr for BlockPath {
    type Err = StreamFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == ROOT_LABEL {
            return Ok(Self::root());
        }
        trimmed
            .split('.')
            .map(|part| {
                part.parse::<usize>()
                    .map_err(|_| StreamFieldError::PathSyntax(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
