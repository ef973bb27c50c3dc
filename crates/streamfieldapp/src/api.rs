//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the one
//! object every front end holds: renderers read views from it, and every
//! button, drop and key press goes back through it. Nothing has to relay
//! callbacks from layer to layer.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (path strings and droppable ids → [`BlockPath`])
//! - **Routes UI events** ([`UiEvent`]) through their propagation chain
//! - **Returns structured types** (`Result<CmdResult>`, view models)
//!
//! ## What the API Does NOT Do
//!
//! - **Tree logic**: that belongs in [`crate::tree`] and `commands/*.rs`
//! - **I/O**: no stdout, stderr or formatting
//!
//! ## Path Notation
//!
//! [`parse_path`] accepts both notations used across the system:
//! dotted paths (`2.0.1`, `root`) and droppable ids (`root-2-0-1`, `root-`).
//!
//! ## Generic Over ForestStore
//!
//! `StreamFieldApi<S: ForestStore>` is generic over the storage backend:
//! - Production: `StreamFieldApi<FileStore>`
//! - Testing: `StreamFieldApi<InMemoryStore>`

use crate::commands::{self, CmdResult};
use crate::droppable::{path_from_droppable_id, DragResult, DROPPABLE_PREFIX};
use crate::error::Result;
use crate::model::Forest;
use crate::path::BlockPath;
use crate::store::ForestStore;
use crate::view::{forest_view, BlockAction, ChildrenListView, EventTarget, UiEvent};
use tracing::debug;

pub use crate::commands::{CmdMessage, DisplayBlock, MessageLevel};

/// The main API facade for streamfield operations.
pub struct StreamFieldApi<S: ForestStore> {
    store: S,
}

impl<S: ForestStore> StreamFieldApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn forest(&self) -> Result<Forest> {
        commands::get::forest(&self.store)
    }

    /// The root children list, freshly built from the stored document.
    pub fn view(&self) -> Result<ChildrenListView> {
        Ok(forest_view(&self.forest()?))
    }

    pub fn get_block(&self, path: &BlockPath) -> Result<CmdResult> {
        commands::get::block(&self.store, path)
    }

    pub fn move_by(&mut self, path: &BlockPath, offset: isize) -> Result<CmdResult> {
        commands::move_block::run(&mut self.store, path, offset)
    }

    pub fn move_up(&mut self, path: &BlockPath) -> Result<CmdResult> {
        commands::move_block::up(&mut self.store, path)
    }

    pub fn move_down(&mut self, path: &BlockPath) -> Result<CmdResult> {
        commands::move_block::down(&mut self.store, path)
    }

    pub fn duplicate(&mut self, path: &BlockPath) -> Result<CmdResult> {
        commands::duplicate::run(&mut self.store, path)
    }

    pub fn add(&mut self, path: &BlockPath) -> Result<CmdResult> {
        commands::duplicate::add(&mut self.store, path)
    }

    pub fn append(&mut self, list_path: &BlockPath) -> Result<CmdResult> {
        commands::duplicate::append(&mut self.store, list_path)
    }

    pub fn delete(&mut self, path: &BlockPath) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, path)
    }

    pub fn set_closed(&mut self, path: &BlockPath, closed: bool) -> Result<CmdResult> {
        commands::closed::set(&mut self.store, path, closed)
    }

    pub fn open(&mut self, path: &BlockPath) -> Result<CmdResult> {
        commands::closed::open(&mut self.store, path)
    }

    pub fn close(&mut self, path: &BlockPath) -> Result<CmdResult> {
        commands::closed::close(&mut self.store, path)
    }

    pub fn toggle(&mut self, path: &BlockPath) -> Result<CmdResult> {
        commands::closed::toggle(&mut self.store, path)
    }

    pub fn reorder(
        &mut self,
        source_list: &BlockPath,
        destination_list: &BlockPath,
        source_index: usize,
        destination_index: usize,
    ) -> Result<CmdResult> {
        commands::reorder::run(
            &mut self.store,
            source_list,
            destination_list,
            source_index,
            destination_index,
        )
    }

    pub fn on_drag_end(&mut self, result: &DragResult) -> Result<CmdResult> {
        commands::reorder::drag_end(&mut self.store, result)
    }

    /// Runs every handler the event reaches, innermost first.
    pub fn dispatch(&mut self, event: &UiEvent) -> Result<CmdResult> {
        let mut combined = CmdResult::unchanged();
        for target in event.handlers() {
            debug!(path = %event.path, ?target, "handling ui event");
            let result = self.handle(&event.path, target)?;
            combined.changed |= result.changed;
            combined.affected_blocks.extend(result.affected_blocks);
            combined.messages.extend(result.messages);
        }
        Ok(combined)
    }

    fn handle(&mut self, path: &BlockPath, target: EventTarget) -> Result<CmdResult> {
        match target {
            EventTarget::Header => self.toggle(path),
            EventTarget::ListAdd => self.append(path),
            EventTarget::Action(BlockAction::MoveUp) => self.move_up(path),
            EventTarget::Action(BlockAction::MoveDown) => self.move_down(path),
            EventTarget::Action(BlockAction::Duplicate) => self.duplicate(path),
            EventTarget::Action(BlockAction::Delete) => self.delete(path),
            EventTarget::Action(BlockAction::AddAfter) => self.add(path),
        }
    }

    pub fn reset(&mut self, size: usize) -> Result<CmdResult> {
        commands::reset::run(&mut self.store, size)
    }

    pub fn seed_if_missing(&mut self, size: usize) -> Result<bool> {
        commands::reset::seed_if_missing(&mut self.store, size)
    }
}

/// Parses a dotted path (`2.0.1`, `root`) or a droppable id (`root-2-0-1`).
pub fn parse_path(input: &str) -> Result<BlockPath> {
    let trimmed = input.trim();
    if trimmed.starts_with(DROPPABLE_PREFIX) {
        return path_from_droppable_id(trimmed);
    }
    trimmed.parse()
}
