//! Formatting options.
//!
//! All options implement `Default` and serde, so a rendering
//! configuration can be loaded from JSON or any other serde format.

use serde::{Deserialize, Serialize};

/// Default replacement for `|` inside table cells.
pub const DEFAULT_PIPE_ESCAPE: &str = "&#124;";

/// Default replacement for `` ` `` inside code.
pub const DEFAULT_BACKTICK_ESCAPE: &str = "\\`";

/// Default replacement for `>` inside blockquotes.
pub const DEFAULT_GREATER_THAN_ESCAPE: &str = "&gt;";

/// Options for table rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableOptions {
    /// Drop columns whose cells are all empty
    pub remove_column_if_empty: bool,

    /// Drop rows whose cells are all empty
    pub remove_row_if_empty: bool,

    /// Replacement for literal `|` (None = no escaping)
    pub escape_pipe_char: Option<String>,
}

impl TableOptions {
    /// Create new table options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable empty column removal.
    pub fn with_remove_empty_columns(mut self, remove: bool) -> Self {
        self.remove_column_if_empty = remove;
        self
    }

    /// Enable or disable empty row removal.
    pub fn with_remove_empty_rows(mut self, remove: bool) -> Self {
        self.remove_row_if_empty = remove;
        self
    }

    /// Set the pipe replacement, or `None` to keep pipes as-is.
    pub fn with_pipe_escape(mut self, escape: Option<impl Into<String>>) -> Self {
        self.escape_pipe_char = escape.map(Into::into);
        self
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            remove_column_if_empty: false,
            remove_row_if_empty: false,
            escape_pipe_char: Some(DEFAULT_PIPE_ESCAPE.to_string()),
        }
    }
}

/// Options for italic and bold text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmphasisOptions {
    /// Use `_` instead of `*`
    pub use_underscores: bool,
}

impl EmphasisOptions {
    /// Emphasis with underscores.
    pub fn underscores() -> Self {
        Self {
            use_underscores: true,
        }
    }
}

/// Options for inline code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InlineCodeOptions {
    /// Replacement for literal backticks (None = no escaping)
    pub escape_backtick_char: Option<String>,
}

impl InlineCodeOptions {
    /// Inline code without backtick escaping.
    pub fn unescaped() -> Self {
        Self {
            escape_backtick_char: None,
        }
    }
}

impl Default for InlineCodeOptions {
    fn default() -> Self {
        Self {
            escape_backtick_char: Some(DEFAULT_BACKTICK_ESCAPE.to_string()),
        }
    }
}

/// Options for fenced code blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeOptions {
    /// Language tag after the opening fence
    pub lang: Option<String>,

    /// Replacement for literal backticks (None = no escaping)
    pub escape_backtick_char: Option<String>,
}

impl CodeOptions {
    /// Create new code options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language tag.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Set the backtick replacement, or `None` to keep backticks as-is.
    pub fn with_backtick_escape(mut self, escape: Option<impl Into<String>>) -> Self {
        self.escape_backtick_char = escape.map(Into::into);
        self
    }
}

impl Default for CodeOptions {
    fn default() -> Self {
        Self {
            lang: None,
            escape_backtick_char: Some(DEFAULT_BACKTICK_ESCAPE.to_string()),
        }
    }
}

/// Options for blockquotes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockquoteOptions {
    /// Replacement for literal `>` (None = no escaping)
    pub escape_greater_than_char: Option<String>,
}

impl BlockquoteOptions {
    /// Blockquote that escapes `>` with [`DEFAULT_GREATER_THAN_ESCAPE`].
    pub fn escaped() -> Self {
        Self {
            escape_greater_than_char: Some(DEFAULT_GREATER_THAN_ESCAPE.to_string()),
        }
    }
}

/// Options for unordered lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnorderedListOptions {
    /// Bullet character: `*`, `+` or `-`
    pub symbol: char,
}

impl UnorderedListOptions {
    /// Use the given bullet character.
    pub fn with_symbol(symbol: char) -> Self {
        Self { symbol }
    }
}

impl Default for UnorderedListOptions {
    fn default() -> Self {
        Self { symbol: '*' }
    }
}

/// Options for horizontal rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HorizontalRuleOptions {
    /// Rule character: `-`, `*` or `_`
    pub symbol: char,

    /// Number of characters, at least 3
    pub length: usize,
}

impl HorizontalRuleOptions {
    /// Create new rule options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rule character.
    pub fn with_symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }

    /// Set the rule length.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }
}

impl Default for HorizontalRuleOptions {
    fn default() -> Self {
        Self {
            symbol: '-',
            length: 3,
        }
    }
}
