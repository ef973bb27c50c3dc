//! Collapse state. These commands only flip the `closed` flag; the tree shape
//! never changes.

use crate::commands::helpers::{apply, describe, display_block};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::path::BlockPath;
use crate::store::ForestStore;
use crate::tree;

pub fn set<S: ForestStore>(store: &mut S, path: &BlockPath, closed: bool) -> Result<CmdResult> {
    let next = apply(store, "set_closed", |forest| {
        if tree::get_block(forest, path)?.closed == closed {
            return Ok(None);
        }
        tree::set_closed(forest, path, closed).map(Some)
    })?;

    match next {
        Some(forest) => {
            let block = display_block(&forest, path)?;
            let verb = if closed { "Closed" } else { "Opened" };
            let message = CmdMessage::success(format!("{} {}", verb, describe(&block)));
            Ok(CmdResult::changed()
                .with_affected_block(block)
                .with_message(message))
        }
        None => {
            let block = display_block(&store.load()?, path)?;
            let state = if closed { "closed" } else { "open" };
            let message = CmdMessage::info(format!("{} is already {}", describe(&block), state));
            Ok(CmdResult::unchanged()
                .with_affected_block(block)
                .with_message(message))
        }
    }
}

pub fn open<S: ForestStore>(store: &mut S, path: &BlockPath) -> Result<CmdResult> {
    set(store, path, false)
}

pub fn close<S: ForestStore>(store: &mut S, path: &BlockPath) -> Result<CmdResult> {
    set(store, path, true)
}

pub fn toggle<S: ForestStore>(store: &mut S, path: &BlockPath) -> Result<CmdResult> {
    let closed = tree::get_block(&store.load()?, path)?.closed;
    set(store, path, !closed)
}
