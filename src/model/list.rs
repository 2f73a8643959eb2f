//! Nested list types.

use serde::{Deserialize, Serialize};

/// A single entry of a [`MarkdownList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListItem {
    /// A text leaf, rendered as one list line
    Text(String),
    /// A nested list, rendered one indentation level deeper
    List(MarkdownList),
}

impl From<&str> for ListItem {
    fn from(text: &str) -> Self {
        ListItem::Text(text.to_string())
    }
}

impl From<String> for ListItem {
    fn from(text: String) -> Self {
        ListItem::Text(text)
    }
}

impl From<MarkdownList> for ListItem {
    fn from(list: MarkdownList) -> Self {
        ListItem::List(list)
    }
}

/// A possibly nested list of text items.
///
/// Serializes as nested arrays, e.g. `["One", ["One.A", "One.B"], "Two"]`.
///
/// # Example
///
/// ```
/// use mdgen::MarkdownList;
///
/// let list = MarkdownList::new()
///     .item("One")
///     .sublist(MarkdownList::from(vec!["One.A", "One.B"]))
///     .item("Two");
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.depth(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkdownList {
    /// Items in display order
    pub items: Vec<ListItem>,
}

impl MarkdownList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text item and return self.
    pub fn item(mut self, text: impl Into<String>) -> Self {
        self.push_item(text);
        self
    }

    /// Append a nested list and return self.
    pub fn sublist(mut self, list: MarkdownList) -> Self {
        self.push_list(list);
        self
    }

    /// Append a text item.
    pub fn push_item(&mut self, text: impl Into<String>) {
        self.items.push(ListItem::Text(text.into()));
    }

    /// Append a nested list.
    pub fn push_list(&mut self, list: MarkdownList) {
        self.items.push(ListItem::List(list));
    }

    /// Number of direct items (text leaves and nested lists).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Nesting depth: 0 for an empty list, 1 for a flat list.
    pub fn depth(&self) -> usize {
        if self.items.is_empty() {
            return 0;
        }

        1 + self
            .items
            .iter()
            .map(|item| match item {
                ListItem::Text(_) => 0,
                ListItem::List(list) => list.depth(),
            })
            .max()
            .unwrap_or(0)
    }

    /// Iterate over the direct items.
    pub fn iter(&self) -> std::slice::Iter<'_, ListItem> {
        self.items.iter()
    }
}

impl<T: Into<ListItem>> From<Vec<T>> for MarkdownList {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Into<ListItem>> FromIterator<T> for MarkdownList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MarkdownList {
    type Item = &'a ListItem;
    type IntoIter = std::slice::Iter<'a, ListItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
