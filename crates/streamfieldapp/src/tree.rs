//! # Tree Operations
//!
//! Pure functions over [`Forest`] values. Every mutation takes the current
//! forest by reference and returns a **new** forest; the input is never
//! touched. Callers swap the whole value in one step, so a half-applied edit
//! can never be observed and a failed edit leaves the old forest in place.
//!
//! ## Addressing
//!
//! Blocks are addressed by [`BlockPath`]. Two kinds of path show up here:
//!
//! - a **block path** names one block (`2.0` = first child of the third root);
//! - a **list path** names the children list *owned* by a block, with the
//!   root path naming the root list. Drag-and-drop speaks in list paths plus
//!   an index into the list.
//!
//! A path that walks off the tree at any depth is an
//! [`StreamFieldError::InvalidPath`].
//!
//! ## No-op Results
//!
//! Operations that may legitimately do nothing ([`move_by`] past either end
//! of the list, [`append_to`] on an empty list) return `Ok(None)` instead of
//! an unchanged copy.

use crate::error::{Result, StreamFieldError};
use crate::model::{Block, Forest};
use crate::path::BlockPath;

/// The pieces of the tree around one path.
#[derive(Debug, Clone, Copy)]
pub struct Located<'a> {
    /// The root list of the forest.
    pub root: &'a [Block],
    /// The list that directly contains the target. `None` for the root path.
    pub parent: Option<&'a [Block]>,
    /// The target itself. `None` for the root path.
    pub node: Option<&'a Block>,
}

pub fn get_node<'a>(forest: &'a Forest, path: &BlockPath) -> Result<Located<'a>> {
    let mut located = Located {
        root: forest.blocks(),
        parent: None,
        node: None,
    };
    let mut list = forest.blocks();
    for &index in path.indices() {
        let block = list
            .get(index)
            .ok_or_else(|| StreamFieldError::InvalidPath(path.clone()))?;
        located.parent = Some(list);
        located.node = Some(block);
        list = &block.children;
    }
    Ok(located)
}

/// The block at `path`. The root path names a list, not a block, and is
/// rejected.
pub fn get_block<'a>(forest: &'a Forest, path: &BlockPath) -> Result<&'a Block> {
    get_node(forest, path)?
        .node
        .ok_or_else(|| StreamFieldError::InvalidPath(path.clone()))
}

/// The children list owned by the block at `list_path` (root list for root).
pub fn children_of<'a>(forest: &'a Forest, list_path: &BlockPath) -> Result<&'a [Block]> {
    match get_node(forest, list_path)?.node {
        Some(block) => Ok(&block.children),
        None => Ok(forest.blocks()),
    }
}

fn list_mut<'a>(forest: &'a mut Forest, list_path: &BlockPath) -> Result<&'a mut Vec<Block>> {
    let mut list = forest.blocks_mut();
    for &index in list_path.indices() {
        list = &mut list
            .get_mut(index)
            .ok_or_else(|| StreamFieldError::InvalidPath(list_path.clone()))?
            .children;
    }
    Ok(list)
}

/// The list containing the block at `path`, and the block's index in it.
fn slot_mut<'a>(forest: &'a mut Forest, path: &BlockPath) -> Result<(&'a mut Vec<Block>, usize)> {
    let invalid = || StreamFieldError::InvalidPath(path.clone());
    let (parent, index) = path.parent().zip(path.last()).ok_or_else(invalid)?;
    let list = list_mut(forest, &parent).map_err(|_| invalid())?;
    if index >= list.len() {
        return Err(invalid());
    }
    Ok((list, index))
}

fn block_mut<'a>(forest: &'a mut Forest, path: &BlockPath) -> Result<&'a mut Block> {
    let (list, index) = slot_mut(forest, path)?;
    Ok(&mut list[index])
}

/// Moves the block `offset` positions within its own list. Targets outside
/// `[0, len)` leave the forest as it is.
pub fn move_by(forest: &Forest, path: &BlockPath, offset: isize) -> Result<Option<Forest>> {
    let mut next = forest.clone();
    let (list, old_index) = slot_mut(&mut next, path)?;
    let Some(new_index) = old_index
        .checked_add_signed(offset)
        .filter(|&i| i < list.len())
    else {
        return Ok(None);
    };
    let block = list.remove(old_index);
    list.insert(new_index, block);
    Ok(Some(next))
}

pub fn move_up(forest: &Forest, path: &BlockPath) -> Result<Option<Forest>> {
    move_by(forest, path, -1)
}

pub fn move_down(forest: &Forest, path: &BlockPath) -> Result<Option<Forest>> {
    move_by(forest, path, 1)
}

/// Inserts a full copy of the block (and its subtree) right before it.
pub fn duplicate(forest: &Forest, path: &BlockPath) -> Result<Forest> {
    let mut next = forest.clone();
    let (list, index) = slot_mut(&mut next, path)?;
    let copy = list[index].clone();
    list.insert(index, copy);
    Ok(next)
}

/// New blocks are made by copying an existing one.
pub fn add(forest: &Forest, path: &BlockPath) -> Result<Forest> {
    duplicate(forest, path)
}

/// Copies the last block of the list at `list_path`. Empty lists have
/// nothing to copy.
pub fn append_to(forest: &Forest, list_path: &BlockPath) -> Result<Option<Forest>> {
    let len = children_of(forest, list_path)?.len();
    if len == 0 {
        return Ok(None);
    }
    add(forest, &list_path.child(len - 1)).map(Some)
}

pub fn delete(forest: &Forest, path: &BlockPath) -> Result<Forest> {
    let mut next = forest.clone();
    let (list, index) = slot_mut(&mut next, path)?;
    list.remove(index);
    Ok(next)
}

pub fn set_closed(forest: &Forest, path: &BlockPath, closed: bool) -> Result<Forest> {
    let mut next = forest.clone();
    block_mut(&mut next, path)?.closed = closed;
    Ok(next)
}

pub fn toggle(forest: &Forest, path: &BlockPath) -> Result<Forest> {
    let closed = get_block(forest, path)?.closed;
    set_closed(forest, path, !closed)
}

/// Takes the block at `source_index` of one list and inserts it at
/// `destination_index` of another (or the same) list. The destination index
/// counts positions after the removal and is clamped to the list's end.
///
/// The destination list may not live inside the moved block.
pub fn reorder(
    forest: &Forest,
    source_list: &BlockPath,
    destination_list: &BlockPath,
    source_index: usize,
    destination_index: usize,
) -> Result<Forest> {
    let source_len = children_of(forest, source_list)?.len();
    if source_index >= source_len {
        return Err(StreamFieldError::InvalidIndex {
            list: source_list.clone(),
            index: source_index,
            len: source_len,
        });
    }
    children_of(forest, destination_list)?;

    let moved = source_list.child(source_index);
    if destination_list.starts_with(&moved) {
        return Err(StreamFieldError::InvalidMove {
            block: moved,
            destination: destination_list.clone(),
        });
    }

    let mut next = forest.clone();
    let block = list_mut(&mut next, source_list)?.remove(source_index);
    let destination = shift_after_removal(destination_list, source_list, source_index);
    let list = list_mut(&mut next, &destination)?;
    let at = destination_index.min(list.len());
    list.insert(at, block);
    Ok(next)
}

/// Rewrites `path` so it still points at the same list once the block at
/// `removed_index` of `removed_from` is gone.
pub(crate) fn shift_after_removal(path: &BlockPath, removed_from: &BlockPath, removed_index: usize) -> BlockPath {
    let depth = removed_from.len();
    if path.len() <= depth || !path.starts_with(removed_from) {
        return path.clone();
    }
    let mut indices = path.indices().to_vec();
    if indices[depth] > removed_index {
        indices[depth] -= 1;
    }
    BlockPath::new(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str) -> Block {
        Block::new(id, format!("Block {id}"), "Block type")
    }

    fn ids(blocks: &[Block]) -> Vec<&str> {
        blocks.iter().map(|b| b.id.as_str()).collect()
    }

    /// ```text
    /// a
    /// ├── a0
    /// │   └── a00
    /// └── a1
    /// b
    /// c
    /// └── c0
    /// ```
    fn sample() -> Forest {
        Forest::new(vec![
            leaf("a").with_children(vec![
                leaf("a0").with_children(vec![leaf("a00")]),
                leaf("a1"),
            ]),
            leaf("b"),
            leaf("c").with_children(vec![leaf("c0")]),
        ])
    }

    #[test]
    fn test_get_node_root_path() {
        let forest = sample();
        let located = get_node(&forest, &BlockPath::root()).unwrap();
        assert_eq!(located.root.len(), 3);
        assert!(located.parent.is_none());
        assert!(located.node.is_none());
    }

    #[test]
    fn test_get_node_nested() {
        let forest = sample();
        let located = get_node(&forest, &BlockPath::from([0, 0, 0])).unwrap();
        assert_eq!(located.node.unwrap().id, "a00");
        assert_eq!(ids(located.parent.unwrap()), vec!["a00"]);
        assert_eq!(located.root.len(), 3);
    }

    #[test]
    fn test_get_node_out_of_range() {
        let forest = sample();
        let err = get_node(&forest, &BlockPath::from([0, 5])).unwrap_err();
        assert!(matches!(err, StreamFieldError::InvalidPath(p) if p == BlockPath::from([0, 5])));
    }

    #[test]
    fn test_move_up_swaps_with_previous() {
        let forest = Forest::new(vec![leaf("0"), leaf("1")]);
        let next = move_by(&forest, &BlockPath::from([1]), -1).unwrap().unwrap();
        assert_eq!(ids(next.blocks()), vec!["1", "0"]);
        assert_eq!(ids(forest.blocks()), vec!["0", "1"]);
    }

    #[test]
    fn test_move_past_either_end_is_noop() {
        let forest = sample();
        assert!(move_up(&forest, &BlockPath::from([0])).unwrap().is_none());
        assert!(move_down(&forest, &BlockPath::from([2])).unwrap().is_none());
        assert!(move_down(&forest, &BlockPath::from([0, 1])).unwrap().is_none());
        assert!(move_by(&forest, &BlockPath::from([1]), 5).unwrap().is_none());
    }

    #[test]
    fn test_move_down_nested() {
        let forest = sample();
        let next = move_down(&forest, &BlockPath::from([0, 0])).unwrap().unwrap();
        assert_eq!(ids(&next.blocks()[0].children), vec!["a1", "a0"]);
        assert_eq!(next.blocks()[0].children[1].children[0].id, "a00");
    }

    #[test]
    fn test_move_invalid_path_errors() {
        let forest = sample();
        assert!(move_up(&forest, &BlockPath::from([9])).is_err());
        assert!(move_up(&forest, &BlockPath::root()).is_err());
    }

    #[test]
    fn test_duplicate_inserts_copy_before_original() {
        let forest = Forest::new(vec![leaf("0")]);
        let next = duplicate(&forest, &BlockPath::from([0])).unwrap();
        assert_eq!(ids(next.blocks()), vec!["0", "0"]);
        assert_eq!(next.blocks()[0], next.blocks()[1]);
    }

    #[test]
    fn test_duplicate_copies_are_independent() {
        let forest = sample();
        let next = duplicate(&forest, &BlockPath::from([0])).unwrap();
        assert_eq!(next.len(), 4);
        assert_eq!(next.blocks()[0], next.blocks()[1]);

        let edited = set_closed(&next, &BlockPath::from([0, 0, 0]), true).unwrap();
        assert!(edited.blocks()[0].children[0].children[0].closed);
        assert!(!edited.blocks()[1].children[0].children[0].closed);

        let pruned = delete(&next, &BlockPath::from([1, 1])).unwrap();
        assert_eq!(pruned.blocks()[0].children.len(), 2);
        assert_eq!(pruned.blocks()[1].children.len(), 1);
    }

    #[test]
    fn test_add_is_duplicate() {
        let forest = sample();
        let path = BlockPath::from([2, 0]);
        assert_eq!(add(&forest, &path).unwrap(), duplicate(&forest, &path).unwrap());
    }

    #[test]
    fn test_append_copies_last_sibling() {
        let forest = sample();
        let next = append_to(&forest, &BlockPath::from([0])).unwrap().unwrap();
        assert_eq!(ids(&next.blocks()[0].children), vec!["a0", "a1", "a1"]);

        let next = append_to(&forest, &BlockPath::root()).unwrap().unwrap();
        assert_eq!(ids(next.blocks()), vec!["a", "b", "c", "c"]);
    }

    #[test]
    fn test_append_to_empty_list_is_noop() {
        let forest = sample();
        assert!(append_to(&forest, &BlockPath::from([1])).unwrap().is_none());
        assert!(append_to(&Forest::default(), &BlockPath::root())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let forest = sample();
        let next = delete(&forest, &BlockPath::from([0, 0])).unwrap();
        let siblings = &next.blocks()[0].children;
        assert_eq!(siblings.len(), forest.blocks()[0].children.len() - 1);
        assert!(siblings.iter().all(|b| b.id != "a0"));
        assert_eq!(next.total_blocks(), forest.total_blocks() - 2);
    }

    #[test]
    fn test_set_closed_and_toggle() {
        let forest = sample();
        let path = BlockPath::from([2]);
        let closed = set_closed(&forest, &path, true).unwrap();
        assert!(get_block(&closed, &path).unwrap().closed);
        let reopened = toggle(&closed, &path).unwrap();
        assert!(!get_block(&reopened, &path).unwrap().closed);
        assert!(set_closed(&forest, &BlockPath::root(), true).is_err());
    }

    #[test]
    fn test_reorder_within_one_list() {
        let forest = sample();
        let next = reorder(&forest, &BlockPath::root(), &BlockPath::root(), 0, 2).unwrap();
        assert_eq!(ids(next.blocks()), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_reorder_across_lists() {
        let forest = sample();
        let next = reorder(&forest, &BlockPath::from([0]), &BlockPath::from([2]), 0, 0).unwrap();
        assert_eq!(ids(&next.blocks()[0].children), vec!["a1"]);
        assert_eq!(ids(&next.blocks()[2].children), vec!["a0", "c0"]);
        assert_eq!(next.blocks()[2].children[0].children[0].id, "a00");
        assert_eq!(next.total_blocks(), forest.total_blocks());
    }

    #[test]
    fn test_reorder_into_root_list() {
        let forest = sample();
        let next = reorder(&forest, &BlockPath::from([0, 0]), &BlockPath::root(), 0, 1).unwrap();
        assert_eq!(ids(next.blocks()), vec!["a", "a00", "b", "c"]);
        assert!(next.blocks()[0].children[0].children.is_empty());
    }

    #[test]
    fn test_reorder_from_root_into_later_sibling() {
        // Removing "a" shifts "c" from index 2 to 1 before the insert.
        let forest = sample();
        let next = reorder(&forest, &BlockPath::root(), &BlockPath::from([2]), 0, 1).unwrap();
        assert_eq!(ids(next.blocks()), vec!["b", "c"]);
        assert_eq!(ids(&next.blocks()[1].children), vec!["c0", "a"]);
    }

    #[test]
    fn test_reorder_clamps_destination_index() {
        let forest = sample();
        let next = reorder(&forest, &BlockPath::root(), &BlockPath::from([1]), 2, 40).unwrap();
        assert_eq!(ids(&next.blocks()[1].children), vec!["c"]);
    }

    #[test]
    fn test_reorder_preserves_other_orderings() {
        let forest = Forest::new(vec![
            leaf("A").with_children(vec![leaf("a0"), leaf("a1"), leaf("a2"), leaf("a3")]),
            leaf("B").with_children(vec![leaf("b0"), leaf("b1"), leaf("b2")]),
        ]);
        let next = reorder(&forest, &BlockPath::from([0]), &BlockPath::from([1]), 2, 1).unwrap();
        assert_eq!(ids(&next.blocks()[0].children), vec!["a0", "a1", "a3"]);
        assert_eq!(ids(&next.blocks()[1].children), vec!["b0", "a2", "b1", "b2"]);
    }

    #[test]
    fn test_reorder_into_own_subtree_is_rejected() {
        let forest = sample();
        let err = reorder(&forest, &BlockPath::root(), &BlockPath::from([0, 0]), 0, 0).unwrap_err();
        assert!(matches!(err, StreamFieldError::InvalidMove { .. }));
        let err = reorder(&forest, &BlockPath::root(), &BlockPath::from([0]), 0, 0).unwrap_err();
        assert!(matches!(err, StreamFieldError::InvalidMove { .. }));
    }

    #[test]
    fn test_reorder_bad_source_index() {
        let forest = sample();
        let err = reorder(&forest, &BlockPath::from([1]), &BlockPath::root(), 0, 0).unwrap_err();
        assert!(matches!(err, StreamFieldError::InvalidIndex { len: 0, .. }));
    }

    #[test]
    fn test_reorder_bad_destination_list() {
        let forest = sample();
        assert!(matches!(
            reorder(&forest, &BlockPath::root(), &BlockPath::from([7]), 0, 0),
            Err(StreamFieldError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_shift_after_removal() {
        let from = BlockPath::root();
        assert_eq!(
            shift_after_removal(&BlockPath::from([3, 1]), &from, 1),
            BlockPath::from([2, 1])
        );
        assert_eq!(
            shift_after_removal(&BlockPath::from([0, 1]), &from, 1),
            BlockPath::from([0, 1])
        );
        assert_eq!(shift_after_removal(&from, &from, 0), from);
    }
}
