//! # Drag-and-Drop Boundary
//!
//! The gesture layer (a browser drag library, or the CLI's `move`/`drop`
//! commands) talks about lists and items by string id. This module owns the
//! fixed id format and the shape of a finished drag.
//!
//! ## Id Format
//!
//! Every children list is a drop target whose id is `root-` followed by the
//! list's path joined with `-`. The root list's id is `root-` alone. Draggable
//! items use the same format for their own path.
//!
//! | Path     | Id          |
//! |----------|-------------|
//! | root     | `root-`     |
//! | `4`      | `root-4`    |
//! | `4.0.2`  | `root-4-0-2`|
//!
//! ## Drag Results
//!
//! [`DragResult`] mirrors the drag-end payload:
//!
//! ```json
//! {
//!   "draggableId": "root-2-0",
//!   "source": { "droppableId": "root-2", "index": 0 },
//!   "destination": { "droppableId": "root-", "index": 5 },
//!   "reason": "DROP"
//! }
//! ```
//!
//! A result without a destination, or with reason `CANCEL`, resolves to no
//! move at all.

use crate::error::{Result, StreamFieldError};
use crate::path::BlockPath;
use serde::{Deserialize, Serialize};

pub const SEPARATOR: char = '-';
pub const DROPPABLE_PREFIX: &str = "root-";

/// Id of the drop target scoped to the children of `path`.
pub fn droppable_id(path: &BlockPath) -> String {
    let parts: Vec<String> = path.indices().iter().map(|i| i.to_string()).collect();
    format!("{}{}", DROPPABLE_PREFIX, parts.join(&SEPARATOR.to_string()))
}

/// Id of the draggable item at `path`. Same format as droppable ids.
pub fn draggable_id(path: &BlockPath) -> String {
    droppable_id(path)
}

pub fn path_from_droppable_id(id: &str) -> Result<BlockPath> {
    let rest = id
        .strip_prefix(DROPPABLE_PREFIX)
        .ok_or_else(|| StreamFieldError::InvalidDroppableId(id.to_string()))?;
    if rest.is_empty() {
        return Ok(BlockPath::root());
    }
    rest.split(SEPARATOR)
        .map(|part| {
            part.parse::<usize>()
                .map_err(|_| StreamFieldError::InvalidDroppableId(id.to_string()))
        })
        .collect::<Result<Vec<_>>>()
        .map(BlockPath::new)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DropReason {
    Drop,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraggableLocation {
    pub droppable_id: String,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragResult {
    #[serde(default)]
    pub draggable_id: String,
    pub source: DraggableLocation,
    #[serde(default)]
    pub destination: Option<DraggableLocation>,
    pub reason: DropReason,
}

/// A drag resolved into tree coordinates, ready for `tree::reorder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    pub source_list: BlockPath,
    pub source_index: usize,
    pub destination_list: BlockPath,
    pub destination_index: usize,
}

impl DragResult {
    /// Translates the result into a move, or `None` for cancelled and
    /// destination-less drags.
    pub fn relocation(&self) -> Result<Option<Relocation>> {
        if self.reason == DropReason::Cancel {
            return Ok(None);
        }
        let Some(destination) = &self.destination else {
            return Ok(None);
        };
        Ok(Some(Relocation {
            source_list: path_from_droppable_id(&self.source.droppable_id)?,
            source_index: self.source.index,
            destination_list: path_from_droppable_id(&destination.droppable_id)?,
            destination_index: destination.index,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_list_id() {
        assert_eq!(droppable_id(&BlockPath::root()), "root-");
        assert!(path_from_droppable_id("root-").unwrap().is_root());
    }

    #[test]
    fn test_nested_id() {
        let path = BlockPath::from([4, 0, 2]);
        assert_eq!(droppable_id(&path), "root-4-0-2");
        assert_eq!(path_from_droppable_id("root-4-0-2").unwrap(), path);
    }

    #[test]
    fn test_malformed_ids() {
        for id in ["", "root", "tree-1", "root-1-", "root-a", "root--1"] {
            assert!(
                matches!(
                    path_from_droppable_id(id),
                    Err(StreamFieldError::InvalidDroppableId(_))
                ),
                "expected {id:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_drag_result_payload() {
        let json = r#"{
            "draggableId": "root-2-0",
            "type": "root-2",
            "source": { "droppableId": "root-2", "index": 0 },
            "destination": { "droppableId": "root-", "index": 5 },
            "reason": "DROP"
        }"#;
        let result: DragResult = serde_json::from_str(json).unwrap();
        let relocation = result.relocation().unwrap().unwrap();
        assert_eq!(relocation.source_list, BlockPath::from([2]));
        assert_eq!(relocation.source_index, 0);
        assert!(relocation.destination_list.is_root());
        assert_eq!(relocation.destination_index, 5);
    }

    #[test]
    fn test_cancelled_drag_has_no_relocation() {
        let result = DragResult {
            draggable_id: "root-0".into(),
            source: DraggableLocation {
                droppable_id: "root-".into(),
                index: 0,
            },
            destination: Some(DraggableLocation {
                droppable_id: "root-".into(),
                index: 1,
            }),
            reason: DropReason::Cancel,
        };
        assert_eq!(result.relocation().unwrap(), None);
    }

    #[test]
    fn test_missing_destination_has_no_relocation() {
        let json = r#"{
            "draggableId": "root-0",
            "source": { "droppableId": "root-", "index": 0 },
            "destination": null,
            "reason": "DROP"
        }"#;
        let result: DragResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.relocation().unwrap(), None);
    }
}
