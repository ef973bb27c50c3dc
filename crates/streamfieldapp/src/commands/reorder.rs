//! Drag-and-drop relocation.
//!
//! A drop names two lists (by list path) and an index in each. The block
//! leaves the source list and lands in the destination list, which may sit
//! at any depth, including inside a different parent.

use crate::commands::helpers::{apply, describe, display_block};
use crate::commands::{CmdMessage, CmdResult};
use crate::droppable::{DragResult, DropReason, Relocation};
use crate::error::Result;
use crate::path::BlockPath;
use crate::store::ForestStore;
use crate::tree;
use tracing::debug;

pub fn run<S: ForestStore>(
    store: &mut S,
    source_list: &BlockPath,
    destination_list: &BlockPath,
    source_index: usize,
    destination_index: usize,
) -> Result<CmdResult> {
    let next = apply(store, "reorder", |forest| {
        tree::reorder(
            forest,
            source_list,
            destination_list,
            source_index,
            destination_index,
        )
        .map(Some)
    })?;
    let Some(next) = next else {
        return Ok(CmdResult::unchanged());
    };

    let landed_list = tree::shift_after_removal(destination_list, source_list, source_index);
    let landed_len = tree::children_of(&next, &landed_list)?.len();
    let landed = landed_list.child(destination_index.min(landed_len - 1));
    let moved = display_block(&next, &landed)?;
    let message = CmdMessage::success(format!(
        "Moved {} from {}",
        describe(&moved),
        source_list.child(source_index)
    ));
    Ok(CmdResult::changed()
        .with_affected_block(moved)
        .with_message(message))
}

pub fn relocate<S: ForestStore>(store: &mut S, relocation: &Relocation) -> Result<CmdResult> {
    run(
        store,
        &relocation.source_list,
        &relocation.destination_list,
        relocation.source_index,
        relocation.destination_index,
    )
}

/// Applies a finished drag. Cancelled drags and drops outside any list are
/// ignored.
pub fn drag_end<S: ForestStore>(store: &mut S, result: &DragResult) -> Result<CmdResult> {
    match result.relocation()? {
        Some(relocation) => relocate(store, &relocation),
        None => {
            let why = if result.reason == DropReason::Cancel {
                "Drag cancelled"
            } else {
                "Dropped outside any list"
            };
            debug!(draggable = %result.draggable_id, why, "ignoring drag result");
            Ok(CmdResult::unchanged().with_message(CmdMessage::info(why)))
        }
    }
}
