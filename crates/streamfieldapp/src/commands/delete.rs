use crate::commands::helpers::{apply, describe, display_block};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::path::BlockPath;
use crate::store::ForestStore;
use crate::tree;

/// Removes the block at `path` together with its subtree. The affected block
/// carries the path it had before removal.
pub fn run<S: ForestStore>(store: &mut S, path: &BlockPath) -> Result<CmdResult> {
    let mut removed = None;
    apply(store, "delete", |forest| {
        removed = Some(display_block(forest, path)?);
        tree::delete(forest, path).map(Some)
    })?;

    let mut result = CmdResult::changed();
    if let Some(removed) = removed {
        let extra = removed.block.subtree_len() - 1;
        let mut content = format!("Deleted {}", describe(&removed));
        if extra > 0 {
            content.push_str(&format!(" and {} nested block(s)", extra));
        }
        result.add_message(CmdMessage::success(content));
        result.affected_blocks.push(removed);
    }
    Ok(result)
}
