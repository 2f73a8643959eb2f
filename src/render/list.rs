//! Nested list rendering.

use crate::model::{ListItem, MarkdownList};

/// Spaces per nesting level.
const INDENT_WIDTH: usize = 4;

/// Marker style for a rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `1.`, `2.`, ... restarting for every nested list
    Ordered,
    /// A fixed bullet character
    Unordered(char),
}

/// Renders a [`MarkdownList`] to indented lines, one per text leaf.
#[derive(Debug, Clone, Copy)]
pub struct ListRenderer {
    kind: ListKind,
}

impl ListRenderer {
    /// Create a renderer for the given marker style.
    pub fn new(kind: ListKind) -> Self {
        Self { kind }
    }

    /// Ordered list renderer.
    pub fn ordered() -> Self {
        Self::new(ListKind::Ordered)
    }

    /// Unordered list renderer with the given bullet.
    pub fn unordered(symbol: char) -> Self {
        Self::new(ListKind::Unordered(symbol))
    }

    /// Render the list, depth-first, starting at indentation level 0.
    pub fn render(&self, list: &MarkdownList) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_level(&mut lines, list, 0);
        lines
    }

    fn render_level(&self, lines: &mut Vec<String>, list: &MarkdownList, level: usize) {
        let mut item_number = 1;

        for item in list {
            match item {
                ListItem::Text(text) => {
                    let marker = match self.kind {
                        ListKind::Ordered => {
                            let marker = format!("{}.", item_number);
                            item_number += 1;
                            marker
                        }
                        ListKind::Unordered(symbol) => symbol.to_string(),
                    };
                    lines.push(list_line(text, level, &marker));
                }
                ListItem::List(sublist) => self.render_level(lines, sublist, level + 1),
            }
        }
    }
}

fn list_line(text: &str, level: usize, marker: &str) -> String {
    let indent = " ".repeat(level * INDENT_WIDTH);
    format!("{}{} {}", indent, marker, text.trim())
}
