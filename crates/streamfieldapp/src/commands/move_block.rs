use crate::commands::helpers::{apply, describe, display_block};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::path::BlockPath;
use crate::store::ForestStore;
use crate::tree;

/// Moves the block at `path` by `offset` among its siblings. Moving past
/// either end of the list changes nothing.
pub fn run<S: ForestStore>(store: &mut S, path: &BlockPath, offset: isize) -> Result<CmdResult> {
    let Some(next) = apply(store, "move", |forest| tree::move_by(forest, path, offset))? else {
        return Ok(CmdResult::unchanged().with_message(CmdMessage::info(format!(
            "Block {} is already at the {} of its list",
            path,
            if offset < 0 { "top" } else { "bottom" }
        ))));
    };

    // The block now sits at old + offset; `tree::move_by` already bounds-checked it.
    let new_path = path
        .parent()
        .zip(path.last())
        .map(|(parent, index)| parent.child(index.saturating_add_signed(offset)))
        .unwrap_or_else(|| path.clone());
    let moved = display_block(&next, &new_path)?;
    let message = CmdMessage::success(format!("Moved {}", describe(&moved)));
    Ok(CmdResult::changed()
        .with_affected_block(moved)
        .with_message(message))
}

pub fn up<S: ForestStore>(store: &mut S, path: &BlockPath) -> Result<CmdResult> {
    run(store, path, -1)
}

pub fn down<S: ForestStore>(store: &mut S, path: &BlockPath) -> Result<CmdResult> {
    run(store, path, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn root_ids<S: ForestStore>(store: &S) -> Vec<String> {
        store
            .load()
            .unwrap()
            .blocks()
            .iter()
            .map(|b| b.id.clone())
            .collect()
    }

    #[test]
    fn test_up_reports_new_position() {
        let mut store = StoreFixture::new().with_roots(&["0", "1"]).store;
        let result = up(&mut store, &BlockPath::from([1])).unwrap();
        assert!(result.changed);
        assert_eq!(result.affected_blocks[0].path, BlockPath::from([0]));
        assert_eq!(result.affected_blocks[0].block.id, "1");
        assert_eq!(root_ids(&store), vec!["1", "0"]);
    }

    #[test]
    fn test_down_nested() {
        let mut store = StoreFixture::new().with_sample(1).store;
        let result = down(&mut store, &BlockPath::from([0, 0])).unwrap();
        assert_eq!(result.affected_blocks[0].path, BlockPath::from([0, 1]));
        assert_eq!(result.affected_blocks[0].block.id, "0-0");
    }

    #[test]
    fn test_edges_are_noops() {
        let mut store = StoreFixture::new().with_roots(&["0", "1", "2"]).store;
        let result = up(&mut store, &BlockPath::from([0])).unwrap();
        assert!(!result.changed);
        assert!(result.messages[0].content.contains("top"));

        let result = down(&mut store, &BlockPath::from([2])).unwrap();
        assert!(!result.changed);
        assert!(result.messages[0].content.contains("bottom"));

        assert_eq!(store.save_count(), 0);
        assert_eq!(root_ids(&store), vec!["0", "1", "2"]);
    }

    #[test]
    fn test_invalid_path_errors() {
        let mut store = StoreFixture::new().with_roots(&["0"]).store;
        assert!(up(&mut store, &BlockPath::from([0, 3])).is_err());
    }
}
