use crate::commands::DisplayBlock;
use crate::error::Result;
use crate::model::Forest;
use crate::path::BlockPath;
use crate::store::ForestStore;
use crate::tree;
use tracing::{debug, info};

/// Loads the document, runs `edit` on it and saves the result if there is one.
///
/// `edit` returns `Ok(None)` to mean "nothing to do"; the store is then left
/// alone. Errors from `edit` also leave the store untouched.
pub fn apply<S, F>(store: &mut S, op: &str, edit: F) -> Result<Option<Forest>>
where
    S: ForestStore,
    F: FnOnce(&Forest) -> Result<Option<Forest>>,
{
    let current = store.load()?;
    match edit(&current)? {
        Some(next) => {
            store.save(&next)?;
            debug!(op, roots = next.len(), "document replaced");
            Ok(Some(next))
        }
        None => {
            info!(op, "nothing to change");
            Ok(None)
        }
    }
}

/// The block at `path` in `forest`, paired with the path.
pub fn display_block(forest: &Forest, path: &BlockPath) -> Result<DisplayBlock> {
    let block = tree::get_block(forest, path)?;
    Ok(DisplayBlock::new(path.clone(), block.clone()))
}

/// `"Title" (2.0)` style label used in messages.
pub fn describe(block: &DisplayBlock) -> String {
    format!("\"{}\" ({})", block.block.title, block.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_apply_saves_on_change() {
        let mut store = StoreFixture::new().with_roots(&["0", "1"]).store;
        let next = apply(&mut store, "test", |f| {
            tree::delete(f, &BlockPath::from([0])).map(Some)
        })
        .unwrap();
        assert_eq!(next.unwrap().len(), 1);
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_apply_skips_save_without_change() {
        let mut store = StoreFixture::new().with_roots(&["0"]).store;
        let next = apply(&mut store, "test", |_| Ok(None)).unwrap();
        assert!(next.is_none());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_apply_leaves_store_on_error() {
        let mut store = StoreFixture::new().with_roots(&["0"]).store;
        let res = apply(&mut store, "test", |f| {
            tree::delete(f, &BlockPath::from([3])).map(Some)
        });
        assert!(res.is_err());
        assert_eq!(store.save_count(), 0);
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_describe() {
        let forest = Forest::new(vec![crate::model::Block::new("0", "Intro", "t")]);
        let block = display_block(&forest, &BlockPath::from([0])).unwrap();
        assert_eq!(describe(&block), "\"Intro\" (0)");
    }
}
