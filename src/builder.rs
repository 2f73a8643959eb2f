//! Fluent Markdown document builder.

use std::fmt;

use crate::error::Result;
use crate::generator::{Generator, TextBlock};
use crate::model::{MarkdownList, TableHeader};
use crate::render::{
    BlockquoteOptions, CodeOptions, EmphasisOptions, HorizontalRuleOptions, InlineCodeOptions,
    TableOptions, UnorderedListOptions,
};

/// Default separator used by [`MarkdownBuilder::build`].
pub const DEFAULT_LINE_SEPARATOR: &str = "\n";

/// Builder that accumulates Markdown lines.
///
/// Each method appends the output of the matching [`Generator`] function
/// and returns the builder for chaining. Fallible formatters return
/// `Result<Self>`, so chains use `?`.
///
/// The builder owns its buffer and is meant for single-owner,
/// synchronous use.
///
/// # Example
///
/// ```
/// use mdgen::MarkdownBuilder;
///
/// let markdown = MarkdownBuilder::new()
///     .header("Title", 1, false)?
///     .empty_line()
///     .text_with(|md| format!("Hello {}!", md.bold("World")))
///     .build();
///
/// assert_eq!(markdown, "# Title\n\nHello **World**!");
/// # Ok::<(), mdgen::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownBuilder {
    output: Vec<String>,
}

impl MarkdownBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder seeded with existing lines.
    pub fn from_lines<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            output: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a builder seeded with a copy of another builder's output.
    ///
    /// The two builders diverge independently afterwards.
    pub fn from_builder(other: &MarkdownBuilder) -> Self {
        Self {
            output: other.output.clone(),
        }
    }

    /// Append an ATX heading.
    pub fn header(mut self, text: &str, level: u8, closing: bool) -> Result<Self> {
        self.output.push(Generator.header(text, level, closing)?);
        Ok(self)
    }

    /// Append an underlined heading.
    pub fn underline_header(mut self, text: &str, level: u8) -> Result<Self> {
        self.output.extend(Generator.underline_header(text, level)?);
        Ok(self)
    }

    /// Append a blockquote.
    pub fn blockquote(self, text: impl Into<TextBlock>) -> Self {
        self.blockquote_with(text, &BlockquoteOptions::default())
    }

    /// Append a blockquote with options.
    pub fn blockquote_with(mut self, text: impl Into<TextBlock>, options: &BlockquoteOptions) -> Self {
        self.output.extend(Generator.blockquote_with(text, options));
        self
    }

    /// Append another builder's current output as a blockquote.
    pub fn blockquote_builder(self, other: &MarkdownBuilder) -> Self {
        self.blockquote(other.output())
    }

    /// Append an inline link.
    pub fn link(mut self, text: &str, url: &str, title: Option<&str>) -> Self {
        self.output.push(Generator.link(text, url, title));
        self
    }

    /// Append a reference-style link.
    pub fn link_to_definition(mut self, text: &str, definition: &str) -> Self {
        self.output.push(Generator.link_to_definition(text, definition));
        self
    }

    /// Append a link definition.
    pub fn link_definition(mut self, name: &str, url: &str, title: Option<&str>) -> Self {
        self.output.push(Generator.link_definition(name, url, title));
        self
    }

    /// Append an image.
    pub fn image(mut self, alt_text: &str, url: &str, title: Option<&str>) -> Self {
        self.output.push(Generator.image(alt_text, url, title));
        self
    }

    /// Append an unordered list with `*` bullets.
    pub fn unordered_list(mut self, list: &MarkdownList) -> Self {
        self.output.extend(Generator.unordered_list(list));
        self
    }

    /// Append an unordered list with a configured bullet.
    pub fn unordered_list_with(
        mut self,
        list: &MarkdownList,
        options: &UnorderedListOptions,
    ) -> Result<Self> {
        self.output.extend(Generator.unordered_list_with(list, options)?);
        Ok(self)
    }

    /// Append an ordered list.
    pub fn ordered_list(mut self, list: &MarkdownList) -> Self {
        self.output.extend(Generator.ordered_list(list));
        self
    }

    /// Append a `---` rule.
    pub fn horizontal_rule(mut self) -> Self {
        self.output.push(Generator.horizontal_rule());
        self
    }

    /// Append a configured horizontal rule.
    pub fn horizontal_rule_with(mut self, options: &HorizontalRuleOptions) -> Result<Self> {
        self.output.push(Generator.horizontal_rule_with(options)?);
        Ok(self)
    }

    /// Append italic text.
    pub fn italic(self, text: &str) -> Self {
        self.italic_with(text, EmphasisOptions::default())
    }

    /// Append italic text with options.
    pub fn italic_with(mut self, text: &str, options: EmphasisOptions) -> Self {
        self.output.push(Generator.italic_with(text, options));
        self
    }

    /// Append bold text.
    pub fn bold(self, text: &str) -> Self {
        self.bold_with(text, EmphasisOptions::default())
    }

    /// Append bold text with options.
    pub fn bold_with(mut self, text: &str, options: EmphasisOptions) -> Self {
        self.output.push(Generator.bold_with(text, options));
        self
    }

    /// Append strikethrough text.
    pub fn strike_through(mut self, text: &str) -> Self {
        self.output.push(Generator.strike_through(text));
        self
    }

    /// Append inline code.
    pub fn inline_code(self, text: &str) -> Self {
        self.inline_code_with(text, &InlineCodeOptions::default())
    }

    /// Append inline code with options.
    pub fn inline_code_with(mut self, text: &str, options: &InlineCodeOptions) -> Self {
        self.output.push(Generator.inline_code_with(text, options));
        self
    }

    /// Append a fenced code block.
    pub fn code(self, text: impl Into<TextBlock>) -> Self {
        self.code_with(text, &CodeOptions::default())
    }

    /// Append a fenced code block with options.
    pub fn code_with(mut self, text: impl Into<TextBlock>, options: &CodeOptions) -> Self {
        self.output.extend(Generator.code_with(text, options));
        self
    }

    /// Append a table.
    pub fn table<H, R, S>(self, headers: H, rows: &[R]) -> Self
    where
        H: IntoIterator,
        H::Item: Into<TableHeader>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        self.table_with(headers, rows, &TableOptions::default())
    }

    /// Append a table with options.
    pub fn table_with<H, R, S>(mut self, headers: H, rows: &[R], options: &TableOptions) -> Self
    where
        H: IntoIterator,
        H::Item: Into<TableHeader>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        self.output.extend(Generator.table_with(headers, rows, options));
        self
    }

    /// Append literal text or lines, unmodified.
    pub fn text(mut self, text: impl Into<TextBlock>) -> Self {
        self.output.extend(text.into().into_lines());
        self
    }

    /// Append text produced by a callback that receives the generator.
    pub fn text_with<F, T>(self, f: F) -> Self
    where
        F: FnOnce(&Generator) -> T,
        T: Into<TextBlock>,
    {
        let text = f(&Generator);
        self.text(text)
    }

    /// Append an empty line.
    pub fn empty_line(mut self) -> Self {
        self.output.push(String::new());
        self
    }

    /// Accumulated lines.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Consume the builder and return its lines.
    pub fn into_output(self) -> Vec<String> {
        self.output
    }

    /// Join the lines with [`DEFAULT_LINE_SEPARATOR`].
    pub fn build(&self) -> String {
        self.build_with(DEFAULT_LINE_SEPARATOR)
    }

    /// Join the lines with a custom separator.
    pub fn build_with(&self, separator: &str) -> String {
        self.output.join(separator)
    }
}

impl From<Vec<String>> for MarkdownBuilder {
    fn from(output: Vec<String>) -> Self {
        Self { output }
    }
}

impl From<&MarkdownBuilder> for MarkdownBuilder {
    fn from(other: &MarkdownBuilder) -> Self {
        Self::from_builder(other)
    }
}

impl fmt::Display for MarkdownBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
