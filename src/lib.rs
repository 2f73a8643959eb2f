//! # mdgen
//!
//! Markdown fragment generation for Rust.
//!
//! This library turns structured inputs into syntactically correct
//! Markdown lines (headings, lists, tables, code blocks, links, emphasis)
//! and offers a fluent builder that accumulates them into one document.
//!
//! ## Quick Start
//!
//! ```
//! use mdgen::{Generator, MarkdownBuilder, MarkdownList};
//!
//! fn main() -> mdgen::Result<()> {
//!     let list = MarkdownList::new()
//!         .item("Parse")
//!         .sublist(MarkdownList::from(vec!["tokens", "tree"]))
//!         .item("Render");
//!
//!     let markdown = MarkdownBuilder::new()
//!         .header("Pipeline", 1, false)?
//!         .empty_line()
//!         .ordered_list(&list)
//!         .empty_line()
//!         .table(["Stage", "Output"], &[vec!["parse", "AST"]])
//!         .build();
//!
//!     assert!(markdown.starts_with("# Pipeline\n\n1. Parse\n    1. tokens"));
//!     assert_eq!(Generator.italic("done"), "*done*");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Aligned tables**: GitHub-flavored tables with per-column alignment,
//!   pipe escaping and optional removal of empty rows and columns
//! - **Nested lists**: ordered and unordered, arbitrarily deep
//! - **Inline formatting**: emphasis, code, links, images, escaping
//! - **Builder**: chained composition with callback-based inline text
//!
//! Everything is pure and in-memory; no I/O is performed.

pub mod builder;
pub mod error;
pub mod generator;
pub mod model;
pub mod render;
pub mod util;

// Re-export commonly used types
pub use builder::MarkdownBuilder;
pub use error::{Error, Result};
pub use generator::{level_from_f64, Generator, TextBlock};
pub use model::{ListItem, MarkdownList, TableAlign, TableHeader};
pub use render::{
    BlockquoteOptions, CodeOptions, EmphasisOptions, HorizontalRuleOptions, InlineCodeOptions,
    TableOptions, UnorderedListOptions,
};
