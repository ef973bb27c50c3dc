use crate::commands::helpers::{apply, describe, display_block};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::path::BlockPath;
use crate::store::ForestStore;
use crate::tree;

/// Inserts a copy of the block at `path` right before it. The copy takes over
/// `path`; the original shifts down by one.
pub fn run<S: ForestStore>(store: &mut S, path: &BlockPath) -> Result<CmdResult> {
    let next = apply(store, "duplicate", |forest| tree::duplicate(forest, path).map(Some))?;
    let Some(next) = next else {
        return Ok(CmdResult::unchanged());
    };
    let copy = display_block(&next, path)?;
    let message = CmdMessage::success(format!("Duplicated {}", describe(&copy)));
    Ok(CmdResult::changed()
        .with_affected_block(copy)
        .with_message(message))
}

/// Adding a block means duplicating an existing one.
pub fn add<S: ForestStore>(store: &mut S, path: &BlockPath) -> Result<CmdResult> {
    run(store, path)
}

/// The "add" control of a children list: duplicates the list's last block.
/// An empty list has nothing to copy, which is reported as a warning.
pub fn append<S: ForestStore>(store: &mut S, list_path: &BlockPath) -> Result<CmdResult> {
    let len = tree::children_of(&store.load()?, list_path)?.len();
    if len == 0 {
        return Ok(CmdResult::unchanged().with_message(CmdMessage::warning(format!(
            "List {} is empty; there is no block to copy",
            list_path
        ))));
    }
    add(store, &list_path.child(len - 1))
}
