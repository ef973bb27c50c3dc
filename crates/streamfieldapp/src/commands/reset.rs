use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::sample::sample_forest;
use crate::store::ForestStore;
use tracing::info;

/// Replaces the whole document with a fresh sample forest of `size` roots.
pub fn run<S: ForestStore>(store: &mut S, size: usize) -> Result<CmdResult> {
    let forest = sample_forest(size);
    store.save(&forest)?;
    info!(roots = size, "document reset to sample");
    Ok(CmdResult::changed().with_message(CmdMessage::success(format!(
        "Reset document to {} sample block(s)",
        size
    ))))
}

/// Seeds the store with the sample forest unless a document already exists.
pub fn seed_if_missing<S: ForestStore>(store: &mut S, size: usize) -> Result<bool> {
    if store.exists() {
        return Ok(false);
    }
    run(store, size)?;
    Ok(true)
}
