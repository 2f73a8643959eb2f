//! Structured inputs consumed by the renderers.
//!
//! These types carry no formatting state; they describe list and table
//! content supplied by the caller and can be loaded through serde.

mod list;
mod table;

pub use list::{ListItem, MarkdownList};
pub use table::{TableAlign, TableHeader};
