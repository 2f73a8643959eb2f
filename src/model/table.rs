//! Table header types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column alignment encoded in the table separator line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableAlign {
    /// `:----`
    Left,
    /// `:---:`
    Center,
    /// `----:`
    Right,
    /// `-----`
    #[default]
    None,
}

impl TableAlign {
    /// Name used in serialized options.
    pub fn as_str(&self) -> &'static str {
        match self {
            TableAlign::Left => "left",
            TableAlign::Center => "center",
            TableAlign::Right => "right",
            TableAlign::None => "none",
        }
    }
}

impl fmt::Display for TableAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(TableAlign::Left),
            "center" => Ok(TableAlign::Center),
            "right" => Ok(TableAlign::Right),
            "none" | "" => Ok(TableAlign::None),
            other => Err(format!("Invalid table alignment: {}", other)),
        }
    }
}

/// A table column header.
///
/// Deserializes from either a bare string (no alignment) or an object
/// `{ "text": "...", "align": "center" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HeaderRepr")]
pub struct TableHeader {
    /// Display text
    pub text: String,

    /// Column alignment
    pub align: TableAlign,
}

impl TableHeader {
    /// Create a header with an explicit alignment.
    pub fn new(text: impl Into<String>, align: TableAlign) -> Self {
        Self {
            text: text.into(),
            align,
        }
    }

    /// Left-aligned header.
    pub fn left(text: impl Into<String>) -> Self {
        Self::new(text, TableAlign::Left)
    }

    /// Centered header.
    pub fn center(text: impl Into<String>) -> Self {
        Self::new(text, TableAlign::Center)
    }

    /// Right-aligned header.
    pub fn right(text: impl Into<String>) -> Self {
        Self::new(text, TableAlign::Right)
    }
}

impl From<&str> for TableHeader {
    fn from(text: &str) -> Self {
        Self::new(text, TableAlign::None)
    }
}

impl From<String> for TableHeader {
    fn from(text: String) -> Self {
        Self::new(text, TableAlign::None)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HeaderRepr {
    Bare(String),
    Full {
        text: String,
        #[serde(default)]
        align: TableAlign,
    },
}

impl From<HeaderRepr> for TableHeader {
    fn from(repr: HeaderRepr) -> Self {
        match repr {
            HeaderRepr::Bare(text) => TableHeader::from(text),
            HeaderRepr::Full { text, align } => TableHeader::new(text, align),
        }
    }
}
