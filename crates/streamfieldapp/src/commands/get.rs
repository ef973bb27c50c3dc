use crate::commands::helpers::display_block;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Forest;
use crate::path::BlockPath;
use crate::store::ForestStore;

pub fn forest<S: ForestStore>(store: &S) -> Result<Forest> {
    store.load()
}

/// The block at `path`, unchanged.
pub fn block<S: ForestStore>(store: &S, path: &BlockPath) -> Result<CmdResult> {
    let forest = store.load()?;
    Ok(CmdResult::unchanged().with_affected_block(display_block(&forest, path)?))
}
