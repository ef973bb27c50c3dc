//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept in
//! `templates/` and embedded here as string constants.
//!
//! Conventions:
//!
//! 1. Line breaks are explicit. Loop and conditional tags strip their own
//!    whitespace (`{%- ... -%}`), so every newline in the output is one that
//!    is visibly written in the template.
//! 2. Templates choose styles, not layout. Widths, padding and truncation
//!    are computed in `render.rs` and passed in as ready strings.
//! 3. Styles are referenced by semantic name through the `style` filter
//!    (see `styles.rs`).

pub const TREE_TEMPLATE: &str = include_str!("templates/tree.jinja");
pub const BLOCK_TEMPLATE: &str = include_str!("templates/block.jinja");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.jinja");
