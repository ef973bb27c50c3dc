//! # Rendering Module
//!
//! Turns view models and command results into terminal text.
//!
//! Layout calculations (indentation, truncation, column padding) stay in Rust
//! because they need Unicode-aware widths. Templates handle presentation:
//! which style each piece gets and where lines break.
//!
//! The tree listing draws one line per visible block:
//!
//! ```text
//! ▾ 0      ♡ Some love 0       Block type
//!   ▸ 0.0    ♥ More love       Sub-block type (+1)
//!   · 0.1    ♥ Even more love  Sub-block type
//! ▸ 1      ♡ Some love 1       Block type (+3)
//! ```
//!
//! `▸` marks a closed block with children (the count of hidden descendants
//! follows the type), `▾` an open one, and `·` a block without children.

use super::styles::{names, Theme, STREAMFIELD_THEME};
use super::templates::{BLOCK_TEMPLATE, MESSAGES_TEMPLATE, TREE_TEMPLATE};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use streamfieldapp::api::{CmdMessage, MessageLevel};
use streamfieldapp::view::{BlockView, ChildrenListView};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TITLE_WIDTH: usize = 48;
pub const MARKER_CLOSED: &str = "▸";
pub const MARKER_OPEN: &str = "▾";
pub const MARKER_LEAF: &str = "·";
pub const EMPTY_DOCUMENT: &str =
    "The document is empty. Run `streamfield reset` to load the sample.";

#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    /// Columns per nesting level.
    pub indent: usize,
    pub show_ids: bool,
    /// Descend into closed blocks too.
    pub expand_all: bool,
}

#[derive(Serialize)]
struct TreeLine {
    indent: String,
    marker: &'static str,
    path: String,
    path_padding: String,
    title: String,
    title_padding: String,
    block_type: String,
    id: String,
    hidden: Option<String>,
}

#[derive(Serialize)]
struct TreeData {
    lines: Vec<TreeLine>,
    empty: bool,
    empty_message: &'static str,
    show_ids: bool,
}

#[derive(Serialize)]
struct DetailRow {
    label: String,
    value: String,
}

#[derive(Serialize)]
struct ActionRow {
    glyph: &'static str,
    label: &'static str,
    padding: String,
    command: String,
}

#[derive(Serialize)]
struct BlockData<'a> {
    block: &'a BlockView,
    rows: Vec<DetailRow>,
    actions: Vec<ActionRow>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// A minijinja environment with every CLI template and the `style` filter.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(use_color: bool) -> Result<Self, Error> {
        Self::with_theme(STREAMFIELD_THEME.clone(), use_color)
    }

    pub fn with_theme(theme: Theme, use_color: bool) -> Result<Self, Error> {
        let mut env = Environment::new();
        env.add_filter("style", move |value: Value, name: String| -> String {
            theme.apply(&name, &value.to_string(), use_color)
        });
        env.add_template("tree", TREE_TEMPLATE)?;
        env.add_template("block", BLOCK_TEMPLATE)?;
        env.add_template("messages", MESSAGES_TEMPLATE)?;
        Ok(Self { env })
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }

    /// Renders the visible part of a children list as an indented tree.
    pub fn render_tree(&self, view: &ChildrenListView, options: ListOptions) -> Result<String, Error> {
        let visible = view.visible(options.expand_all);
        let path_width = visible
            .iter()
            .map(|block| block.path.to_string().width())
            .max()
            .unwrap_or(0);

        let mut lines: Vec<TreeLine> = visible
            .iter()
            .map(|block| {
                let path = block.path.to_string();
                let has_children = !block.content.is_empty();
                let marker = match (has_children, block.closed) {
                    (false, _) => MARKER_LEAF,
                    (true, true) => MARKER_CLOSED,
                    (true, false) => MARKER_OPEN,
                };
                let hidden = (has_children && block.closed && !options.expand_all)
                    .then(|| format!("(+{})", block.content.visible(true).len()));
                TreeLine {
                    indent: " ".repeat(block.depth() * options.indent),
                    marker,
                    path_padding: " ".repeat(path_width - path.width()),
                    path,
                    title: truncate_to_width(&block.title, TITLE_WIDTH),
                    title_padding: String::new(),
                    block_type: block.block_type.clone(),
                    id: block.id.clone(),
                    hidden,
                }
            })
            .collect();

        // Align the type column on the widest line that still fits.
        let lead = |line: &TreeLine| line.indent.width() + 2 + path_width + 2 + line.title.width();
        let type_width = lines.iter().map(|l| l.block_type.width()).max().unwrap_or(0);
        let column = lines
            .iter()
            .map(lead)
            .max()
            .unwrap_or(0)
            .min(LINE_WIDTH.saturating_sub(type_width + 2));
        for line in &mut lines {
            line.title_padding = " ".repeat(column.saturating_sub(lead(line)));
        }

        let data = TreeData {
            empty: lines.is_empty(),
            lines,
            empty_message: EMPTY_DOCUMENT,
            show_ids: options.show_ids,
        };
        self.render("tree", &data)
    }

    /// Renders one block with its ids, state and the commands its buttons map to.
    pub fn render_block(&self, block: &BlockView) -> Result<String, Error> {
        let state = if block.closed { "closed" } else { "open" };
        let fields = [
            ("path", block.path.to_string()),
            ("id", block.id.clone()),
            ("draggable", block.draggable_id.clone()),
            ("list", block.content.droppable_id.clone()),
            ("state", state.to_string()),
            ("children", block.content.items.len().to_string()),
            ("descendants", block.content.visible(true).len().to_string()),
        ];
        let label_width = fields.iter().map(|(label, _)| label.width()).max().unwrap_or(0) + 2;
        let rows = fields
            .into_iter()
            .map(|(label, value)| DetailRow {
                label: pad_to_width(label, label_width),
                value,
            })
            .collect();

        let action_width = block
            .actions
            .iter()
            .map(|action| action.label().width())
            .max()
            .unwrap_or(0)
            + 2;
        let actions = block
            .actions
            .iter()
            .map(|action| ActionRow {
                glyph: action.glyph(),
                label: action.label(),
                padding: " ".repeat(action_width - action.label().width()),
                command: format!("streamfield {} {}", action, block.path),
            })
            .collect();

        self.render(
            "block",
            &BlockData {
                block,
                rows,
                actions,
            },
        )
    }

    pub fn render_messages(&self, messages: &[CmdMessage]) -> Result<String, Error> {
        if messages.is_empty() {
            return Ok(String::new());
        }
        let messages = messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect();
        self.render("messages", &MessagesData { messages })
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
