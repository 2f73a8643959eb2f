//! Structural renderers for lists and tables, plus formatting options.

mod list;
mod options;
mod table;

pub use list::{ListKind, ListRenderer};
pub use options::{
    BlockquoteOptions, CodeOptions, EmphasisOptions, HorizontalRuleOptions, InlineCodeOptions,
    TableOptions, UnorderedListOptions, DEFAULT_BACKTICK_ESCAPE, DEFAULT_GREATER_THAN_ESCAPE,
    DEFAULT_PIPE_ESCAPE,
};
pub use table::TableRenderer;
