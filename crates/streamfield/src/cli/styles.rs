//! Styles for the streamfield CLI.
//!
//! Templates never name colors. They tag text with a semantic style name
//! (`{{ block.title | style("title") }}`) and the theme maps names to
//! `console::Style`s. Changing the look only touches this file.
//!
//! Unknown style names render the text unchanged, with or without color.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const TITLE: &str = "title";
    // Tree listing
    pub const PATH: &str = "path";
    pub const MARKER: &str = "marker";
    pub const BLOCK_TYPE: &str = "block-type";
    pub const BLOCK_ID: &str = "block-id";
    pub const CLOSED: &str = "closed";
    // Block detail
    pub const LABEL: &str = "label";
    pub const ACTION: &str = "action";
}

#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            _ => text.to_string(),
        }
    }
}

pub static STREAMFIELD_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(245);
    Theme::new()
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, Style::new().color256(240))
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted.clone())
        .add(names::TITLE, Style::new().bold())
        .add(names::PATH, Style::new().yellow())
        .add(names::MARKER, Style::new().cyan())
        .add(names::BLOCK_TYPE, muted.clone().italic())
        .add(names::BLOCK_ID, Style::new().color256(240))
        .add(names::CLOSED, muted)
        .add(names::LABEL, Style::new().cyan())
        .add(names::ACTION, Style::new().green())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_when_color_disabled() {
        assert_eq!(STREAMFIELD_THEME.apply(names::TITLE, "Block 0", false), "Block 0");
    }

    #[test]
    fn test_color_wraps_text() {
        let styled = STREAMFIELD_THEME.apply(names::TITLE, "Block 0", true);
        assert!(styled.contains("Block 0"));
        assert!(styled.starts_with('\u{1b}'));
    }

    #[test]
    fn test_unknown_style_is_passthrough() {
        assert_eq!(STREAMFIELD_THEME.apply("nope", "x", true), "x");
    }
}
