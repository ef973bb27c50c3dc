//! # View Models
//!
//! The editor renders as two mutually recursive pieces:
//!
//! - a **children list** ([`ChildrenListView`]) shows the ordered siblings
//!   under one path, is a drop target scoped to that path, and carries an
//!   "add" control that copies its last block;
//! - a **block** ([`BlockView`]) shows one node: a header (title, type label,
//!   action buttons) that toggles collapse when clicked, a collapsible content
//!   region holding the block's own children list, and an "add after" button.
//!
//! Views are plain data. They are rebuilt from the forest after every change,
//! so every path and id they carry is current. Any front end (the terminal
//! renderer, a JSON dump) draws from these without touching the tree.
//!
//! ## Events
//!
//! User input comes back as a [`UiEvent`]: a path plus what was hit. Events
//! bubble from the element that was hit outward. The header's action buttons
//! stop propagation, so pressing "delete" never also toggles the enclosing
//! header. The "add after" button and the list's "add" control sit outside
//! the header and have nothing to bubble into.

use crate::droppable::{draggable_id, droppable_id};
use crate::error::{Result, StreamFieldError};
use crate::model::{Block, Forest};
use crate::path::BlockPath;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockAction {
    MoveUp,
    MoveDown,
    Duplicate,
    Delete,
    AddAfter,
}

impl BlockAction {
    /// Buttons rendered inside the block header, in display order.
    pub const HEADER: [BlockAction; 4] = [
        BlockAction::MoveUp,
        BlockAction::MoveDown,
        BlockAction::Duplicate,
        BlockAction::Delete,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BlockAction::MoveUp => "Move up",
            BlockAction::MoveDown => "Move down",
            BlockAction::Duplicate => "Duplicate",
            BlockAction::Delete => "Delete",
            BlockAction::AddAfter => "Add",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            BlockAction::MoveUp => "↑",
            BlockAction::MoveDown => "↓",
            BlockAction::Duplicate => "⧉",
            BlockAction::Delete => "✕",
            BlockAction::AddAfter => "+",
        }
    }

    pub fn in_header(&self) -> bool {
        !matches!(self, BlockAction::AddAfter)
    }
}

impl fmt::Display for BlockAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockAction::MoveUp => "up",
            BlockAction::MoveDown => "down",
            BlockAction::Duplicate => "duplicate",
            BlockAction::Delete => "delete",
            BlockAction::AddAfter => "add",
        })
    }
}

impl FromStr for BlockAction {
    type Err = StreamFieldError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "up" | "move-up" => Ok(BlockAction::MoveUp),
            "down" | "move-down" => Ok(BlockAction::MoveDown),
            "duplicate" | "dup" => Ok(BlockAction::Duplicate),
            "delete" | "rm" => Ok(BlockAction::Delete),
            "add" | "add-after" => Ok(BlockAction::AddAfter),
            other => Err(StreamFieldError::Api(format!("Unknown block action: {other}"))),
        }
    }
}

/// What a pointer event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    /// The block header: toggles collapse.
    Header,
    /// One of the block's buttons.
    Action(BlockAction),
    /// The "add" control of the children list at the event's path.
    ListAdd,
}

impl FromStr for EventTarget {
    type Err = StreamFieldError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "header" | "toggle" => Ok(EventTarget::Header),
            "list-add" | "append" => Ok(EventTarget::ListAdd),
            action => action.parse().map(EventTarget::Action),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    /// Block path for `Header`/`Action`; list path for `ListAdd`.
    pub path: BlockPath,
    pub target: EventTarget,
}

impl UiEvent {
    pub fn new(path: BlockPath, target: EventTarget) -> Self {
        Self { path, target }
    }

    /// Handlers the event reaches, innermost first. Bubbling ends at the
    /// first element on the path that stops propagation.
    pub fn handlers(&self) -> Vec<EventTarget> {
        let path = propagation_path(self.target);
        let end = path
            .iter()
            .position(|target| stops_propagation(*target))
            .map_or(path.len(), |i| i + 1);
        path[..end].to_vec()
    }
}

/// Every clickable element from `target` outward, before any handler runs.
fn propagation_path(target: EventTarget) -> Vec<EventTarget> {
    match target {
        EventTarget::Action(action) if action.in_header() => vec![target, EventTarget::Header],
        EventTarget::Action(_) | EventTarget::Header | EventTarget::ListAdd => vec![target],
    }
}

fn stops_propagation(target: EventTarget) -> bool {
    matches!(target, EventTarget::Action(action) if action.in_header())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockView {
    /// Positional key, stable only for the current render.
    pub key: String,
    pub draggable_id: String,
    pub path: BlockPath,
    pub id: String,
    pub title: String,
    pub block_type: String,
    pub closed: bool,
    pub actions: Vec<BlockAction>,
    /// The collapsible content region. Present even when closed; renderers
    /// decide whether to draw it.
    pub content: ChildrenListView,
}

impl BlockView {
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildrenListView {
    pub droppable_id: String,
    pub path: BlockPath,
    /// Block the "add" control copies. `None` for an empty list.
    pub add_target: Option<BlockPath>,
    pub items: Vec<BlockView>,
}

impl ChildrenListView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Depth-first walk over every block view, skipping the content of
    /// closed blocks unless `expand_all` is set.
    pub fn visible(&self, expand_all: bool) -> Vec<&BlockView> {
        let mut out = Vec::new();
        self.collect_visible(expand_all, &mut out);
        out
    }

    fn collect_visible<'a>(&'a self, expand_all: bool, out: &mut Vec<&'a BlockView>) {
        for item in &self.items {
            out.push(item);
            if expand_all || !item.closed {
                item.content.collect_visible(expand_all, out);
            }
        }
    }
}

pub fn block_view(path: BlockPath, block: &Block) -> BlockView {
    let id = draggable_id(&path);
    let mut actions = BlockAction::HEADER.to_vec();
    actions.push(BlockAction::AddAfter);
    BlockView {
        key: id.clone(),
        draggable_id: id,
        content: children_list_view(&path, &block.children),
        path,
        id: block.id.clone(),
        title: block.title.clone(),
        block_type: block.block_type.clone(),
        closed: block.closed,
        actions,
    }
}

pub fn children_list_view(path: &BlockPath, blocks: &[Block]) -> ChildrenListView {
    ChildrenListView {
        droppable_id: droppable_id(path),
        path: path.clone(),
        add_target: blocks.len().checked_sub(1).map(|last| path.child(last)),
        items: blocks
            .iter()
            .enumerate()
            .map(|(index, block)| block_view(path.child(index), block))
            .collect(),
    }
}

/// The root children list for the whole document.
pub fn forest_view(forest: &Forest) -> ChildrenListView {
    children_list_view(&BlockPath::root(), forest.blocks())
}
