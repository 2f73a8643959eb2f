//! Stateless Markdown formatting functions.
//!
//! [`Generator`] is a zero-sized namespace: every method is a pure
//! function of its arguments, so `Generator.bold("text")` can be called
//! anywhere without setup. Free-text inputs are trimmed before they are
//! embedded.

use crate::error::{Error, Result};
use crate::model::{MarkdownList, TableHeader};
use crate::render::{
    BlockquoteOptions, CodeOptions, EmphasisOptions, HorizontalRuleOptions, InlineCodeOptions,
    ListRenderer, TableOptions, TableRenderer, UnorderedListOptions,
};
use crate::util::split_lines;

/// Largest ATX heading level.
pub const MAX_HEADER_LEVEL: u8 = 6;

/// Largest underlined (Setext) heading level.
pub const MAX_UNDERLINE_HEADER_LEVEL: u8 = 2;

/// Shortest horizontal rule Markdown recognizes.
pub const MIN_RULE_LENGTH: usize = 3;

const LIST_SYMBOLS: [char; 3] = ['*', '+', '-'];
const RULE_SYMBOLS: [char; 3] = ['-', '*', '_'];
const CODE_FENCE: &str = "```";

/// Text input that is either one string or pre-split lines.
///
/// Block formatters (blockquote, code) split a single string on line
/// breaks; pre-split lines are used as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextBlock {
    /// One string, possibly containing line breaks
    Text(String),
    /// Already split lines
    Lines(Vec<String>),
}

impl TextBlock {
    /// Lines for a block formatter: split `Text` after trimming.
    pub fn split(self) -> Vec<String> {
        match self {
            TextBlock::Text(text) => split_lines(text.trim()),
            TextBlock::Lines(lines) => lines,
        }
    }

    /// Lines for a code block: split `Text` after stripping leading and
    /// trailing line breaks, keeping the first line's indentation.
    pub fn split_code(self) -> Vec<String> {
        match self {
            TextBlock::Text(text) => split_lines(text.trim_matches(&['\r', '\n'][..])),
            TextBlock::Lines(lines) => lines,
        }
    }

    /// Lines as supplied, without splitting or trimming.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            TextBlock::Text(text) => vec![text],
            TextBlock::Lines(lines) => lines,
        }
    }
}

impl From<&str> for TextBlock {
    fn from(text: &str) -> Self {
        TextBlock::Text(text.to_string())
    }
}

impl From<String> for TextBlock {
    fn from(text: String) -> Self {
        TextBlock::Text(text)
    }
}

impl From<Vec<String>> for TextBlock {
    fn from(lines: Vec<String>) -> Self {
        TextBlock::Lines(lines)
    }
}

impl From<Vec<&str>> for TextBlock {
    fn from(lines: Vec<&str>) -> Self {
        TextBlock::Lines(lines.into_iter().map(str::to_string).collect())
    }
}

impl From<&[String]> for TextBlock {
    fn from(lines: &[String]) -> Self {
        TextBlock::Lines(lines.to_vec())
    }
}

impl From<&[&str]> for TextBlock {
    fn from(lines: &[&str]) -> Self {
        TextBlock::Lines(lines.iter().map(|line| line.to_string()).collect())
    }
}

/// Convert a floating-point heading level to a validated `u8`.
///
/// Rejects NaN and infinities with [`Error::NonFiniteLevel`] and
/// fractional or out-of-range values with [`Error::InvalidHeaderLevel`].
pub fn level_from_f64(level: f64, max: u8) -> Result<u8> {
    if !level.is_finite() {
        log::debug!("Rejected non-finite heading level {}", level);
        return Err(Error::NonFiniteLevel(level));
    }
    if level.fract() != 0.0 || level < 1.0 || level > f64::from(max) {
        log::debug!("Rejected heading level {} (max {})", level, max);
        return Err(Error::InvalidHeaderLevel { level, max });
    }

    Ok(level as u8)
}

fn check_level(level: u8, max: u8) -> Result<()> {
    if level < 1 || level > max {
        log::debug!("Rejected heading level {} (max {})", level, max);
        return Err(Error::InvalidHeaderLevel {
            level: f64::from(level),
            max,
        });
    }
    Ok(())
}

/// Markdown formatting namespace.
///
/// # Example
///
/// ```
/// use mdgen::Generator;
///
/// assert_eq!(Generator.header("Title", 2, false).unwrap(), "## Title");
/// assert_eq!(Generator.bold("strong"), "**strong**");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator;

impl Generator {
    /// ATX heading: `## text`, or `## text ##` when `closing`.
    pub fn header(&self, text: &str, level: u8, closing: bool) -> Result<String> {
        check_level(level, MAX_HEADER_LEVEL)?;

        let hashes = "#".repeat(level as usize);
        let text = text.trim();
        if closing {
            Ok(format!("{} {} {}", hashes, text, hashes))
        } else {
            Ok(format!("{} {}", hashes, text))
        }
    }

    /// Setext heading: the text, then a `=` (level 1) or `-` (level 2)
    /// line of the same length.
    pub fn underline_header(&self, text: &str, level: u8) -> Result<Vec<String>> {
        check_level(level, MAX_UNDERLINE_HEADER_LEVEL)?;

        let text = text.trim();
        let symbol = if level == 1 { "=" } else { "-" };
        let rule = symbol.repeat(text.chars().count());
        Ok(vec![text.to_string(), rule])
    }

    /// Blockquote with default options.
    pub fn blockquote(&self, text: impl Into<TextBlock>) -> Vec<String> {
        self.blockquote_with(text, &BlockquoteOptions::default())
    }

    /// Prefix every line with `> `; empty lines become a bare `>`.
    ///
    /// Leading whitespace of each line is kept so nested lists and code
    /// inside the quote stay indented.
    pub fn blockquote_with(
        &self,
        text: impl Into<TextBlock>,
        options: &BlockquoteOptions,
    ) -> Vec<String> {
        text.into()
            .split()
            .into_iter()
            .map(|line| {
                if line.is_empty() {
                    return ">".to_string();
                }
                let line = match options.escape_greater_than_char {
                    Some(ref escape) => line.replace('>', escape),
                    None => line,
                };
                format!("> {}", line.trim_end())
            })
            .collect()
    }

    /// Inline link: `[text](url)` or `[text](url "title")`.
    pub fn link(&self, text: &str, url: &str, title: Option<&str>) -> String {
        match title {
            Some(title) => format!("[{}]({} \"{}\")", text.trim(), url.trim(), title.trim()),
            None => format!("[{}]({})", text.trim(), url.trim()),
        }
    }

    /// Reference-style link: `[text][definition]`.
    pub fn link_to_definition(&self, text: &str, definition: &str) -> String {
        format!("[{}][{}]", text.trim(), definition.trim())
    }

    /// Link definition: `[name]: url` or `[name]: url "title"`.
    pub fn link_definition(&self, name: &str, url: &str, title: Option<&str>) -> String {
        let definition = match title {
            Some(title) => format!("[{}]: {} \"{}\"", name.trim(), url.trim(), title.trim()),
            None => format!("[{}]: {}", name.trim(), url.trim()),
        };
        definition.trim().to_string()
    }

    /// Image: `![alt](url)` or `![alt](url "title")`.
    pub fn image(&self, alt_text: &str, url: &str, title: Option<&str>) -> String {
        format!("!{}", self.link(alt_text, url, title))
    }

    /// Unordered list with `*` bullets.
    pub fn unordered_list(&self, list: &MarkdownList) -> Vec<String> {
        ListRenderer::unordered(UnorderedListOptions::default().symbol).render(list)
    }

    /// Unordered list with a configured bullet (`*`, `+` or `-`).
    pub fn unordered_list_with(
        &self,
        list: &MarkdownList,
        options: &UnorderedListOptions,
    ) -> Result<Vec<String>> {
        if !LIST_SYMBOLS.contains(&options.symbol) {
            log::debug!("Rejected list symbol {:?}", options.symbol);
            return Err(Error::InvalidListSymbol(options.symbol));
        }

        Ok(ListRenderer::unordered(options.symbol).render(list))
    }

    /// Ordered list; numbering restarts at 1 in every nested list.
    pub fn ordered_list(&self, list: &MarkdownList) -> Vec<String> {
        ListRenderer::ordered().render(list)
    }

    /// Default horizontal rule: `---`.
    pub fn horizontal_rule(&self) -> String {
        let options = HorizontalRuleOptions::default();
        options.symbol.to_string().repeat(options.length)
    }

    /// Horizontal rule of `length` (at least 3) `-`, `*` or `_` characters.
    pub fn horizontal_rule_with(&self, options: &HorizontalRuleOptions) -> Result<String> {
        if !RULE_SYMBOLS.contains(&options.symbol) {
            log::debug!("Rejected horizontal rule symbol {:?}", options.symbol);
            return Err(Error::InvalidRuleSymbol(options.symbol));
        }
        if options.length < MIN_RULE_LENGTH {
            log::debug!("Rejected horizontal rule length {}", options.length);
            return Err(Error::RuleTooShort {
                length: options.length,
                min: MIN_RULE_LENGTH,
            });
        }

        Ok(options.symbol.to_string().repeat(options.length))
    }

    /// Italic: `*text*`.
    pub fn italic(&self, text: &str) -> String {
        self.italic_with(text, EmphasisOptions::default())
    }

    /// Italic with `*` or `_` delimiters.
    pub fn italic_with(&self, text: &str, options: EmphasisOptions) -> String {
        let delimiter = if options.use_underscores { "_" } else { "*" };
        wrap(text, delimiter)
    }

    /// Bold: `**text**`.
    pub fn bold(&self, text: &str) -> String {
        self.bold_with(text, EmphasisOptions::default())
    }

    /// Bold with `**` or `__` delimiters.
    pub fn bold_with(&self, text: &str, options: EmphasisOptions) -> String {
        let delimiter = if options.use_underscores { "__" } else { "**" };
        wrap(text, delimiter)
    }

    /// Strikethrough: `~~text~~`.
    pub fn strike_through(&self, text: &str) -> String {
        wrap(text, "~~")
    }

    /// Inline code with backticks escaped.
    pub fn inline_code(&self, text: &str) -> String {
        self.inline_code_with(text, &InlineCodeOptions::default())
    }

    /// Inline code: `` `text` ``.
    pub fn inline_code_with(&self, text: &str, options: &InlineCodeOptions) -> String {
        let text = text.trim();
        let text = match options.escape_backtick_char {
            Some(ref escape) => text.replace('`', escape),
            None => text.to_string(),
        };
        format!("`{}`", text)
    }

    /// Fenced code block without a language tag.
    pub fn code(&self, text: impl Into<TextBlock>) -> Vec<String> {
        self.code_with(text, &CodeOptions::default())
    }

    /// Fenced code block, optionally tagged with a language.
    pub fn code_with(&self, text: impl Into<TextBlock>, options: &CodeOptions) -> Vec<String> {
        let lines = text.into().split_code();

        let mut output = Vec::with_capacity(lines.len() + 2);
        output.push(match options.lang {
            Some(ref lang) => format!("{}{}", CODE_FENCE, lang.trim()),
            None => CODE_FENCE.to_string(),
        });
        for line in lines {
            output.push(match options.escape_backtick_char {
                Some(ref escape) => line.replace('`', escape),
                None => line,
            });
        }
        output.push(CODE_FENCE.to_string());
        output
    }

    /// Table with default options.
    pub fn table<H, R, S>(&self, headers: H, rows: &[R]) -> Vec<String>
    where
        H: IntoIterator,
        H::Item: Into<TableHeader>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        self.table_with(headers, rows, &TableOptions::default())
    }

    /// Aligned GitHub-flavored table.
    pub fn table_with<H, R, S>(&self, headers: H, rows: &[R], options: &TableOptions) -> Vec<String>
    where
        H: IntoIterator,
        H::Item: Into<TableHeader>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let headers: Vec<TableHeader> = headers.into_iter().map(Into::into).collect();
        TableRenderer::new(options.clone()).render(&headers, rows)
    }

    /// Backslash-escape Markdown punctuation.
    ///
    /// Escapes every `` \ ` * _ { } [ ] ( ) # + - . ! ``, then replaces
    /// only the first `|`, `<` and `>` with HTML entities.
    pub fn escape_string(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '\\' | '`' | '*' | '_' | '{' | '}' | '[' | ']' | '(' | ')' | '#' | '+' | '-'
                | '.' | '!' => {
                    result.push('\\');
                    result.push(c);
                }
                _ => result.push(c),
            }
        }

        result
            .replacen('|', "&#124;", 1)
            .replacen('<', "&lt;", 1)
            .replacen('>', "&gt;", 1)
    }
}

fn wrap(text: &str, delimiter: &str) -> String {
    format!("{}{}{}", delimiter, text.trim(), delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_levels() {
        for level in 1..=6u8 {
            let result = Generator.header("Some text", level, false).unwrap();
            let hashes = "#".repeat(level as usize);
            assert!(result.starts_with(&format!("{} ", hashes)));
            assert!(!result.starts_with(&format!("{}#", hashes)));
        }
    }

    #[test]
    fn test_header_out_of_range() {
        assert!(matches!(
            Generator.header("Some text", 7, false),
            Err(Error::InvalidHeaderLevel { max: 6, .. })
        ));
        assert!(Generator.header("Some text", 0, false).is_err());
    }

    #[test]
    fn test_header_closing() {
        assert_eq!(
            Generator.header("  Some text ", 1, true).unwrap(),
            "# Some text #"
        );
    }

    #[test]
    fn test_level_from_f64() {
        assert_eq!(level_from_f64(3.0, MAX_HEADER_LEVEL).unwrap(), 3);
        assert!(matches!(
            level_from_f64(f64::NAN, MAX_HEADER_LEVEL),
            Err(Error::NonFiniteLevel(_))
        ));
        assert!(matches!(
            level_from_f64(f64::INFINITY, MAX_HEADER_LEVEL),
            Err(Error::NonFiniteLevel(_))
        ));
        assert!(level_from_f64(1.5, MAX_HEADER_LEVEL).is_err());
        assert!(level_from_f64(3.0, MAX_UNDERLINE_HEADER_LEVEL).is_err());
    }

    #[test]
    fn test_underline_header() {
        let result = Generator.underline_header(" Some text ", 1).unwrap();
        assert_eq!(result, vec!["Some text", "========="]);

        let result = Generator.underline_header("Sub", 2).unwrap();
        assert_eq!(result[1], "---");

        assert!(Generator.underline_header("Some text", 3).is_err());
    }

    #[test]
    fn test_blockquote_multiline() {
        let result = Generator.blockquote("Some text\n\n  indented\n");
        assert_eq!(result, vec!["> Some text", ">", ">   indented"]);
    }

    #[test]
    fn test_blockquote_escape() {
        let result = Generator.blockquote_with("a > b", &BlockquoteOptions::escaped());
        assert_eq!(result, vec!["> a &gt; b"]);

        let result = Generator.blockquote("a > b");
        assert_eq!(result, vec!["> a > b"]);
    }

    #[test]
    fn test_links() {
        assert_eq!(Generator.link("Text", "https://x.y", None), "[Text](https://x.y)");
        assert_eq!(
            Generator.link("Text", "https://x.y", Some("Title")),
            "[Text](https://x.y \"Title\")"
        );
        assert_eq!(Generator.link_to_definition("Text", "ref"), "[Text][ref]");
        assert_eq!(
            Generator.link_definition("ref", "https://x.y", None),
            "[ref]: https://x.y"
        );
        assert_eq!(
            Generator.link_definition("ref", "https://x.y", Some("T")),
            "[ref]: https://x.y \"T\""
        );
        assert_eq!(Generator.image("Alt", "a.png", None), "![Alt](a.png)");
    }

    #[test]
    fn test_unordered_list_symbols() {
        let list = MarkdownList::from(vec!["One"]);
        assert_eq!(Generator.unordered_list(&list), vec!["* One"]);
        assert_eq!(
            Generator
                .unordered_list_with(&list, &UnorderedListOptions::with_symbol('+'))
                .unwrap(),
            vec!["+ One"]
        );
        assert_eq!(
            Generator.unordered_list_with(&list, &UnorderedListOptions::with_symbol('x')),
            Err(Error::InvalidListSymbol('x'))
        );
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(Generator.horizontal_rule(), "---");

        let options = HorizontalRuleOptions::new().with_length(10);
        assert_eq!(Generator.horizontal_rule_with(&options).unwrap(), "-".repeat(10));

        let options = HorizontalRuleOptions::new().with_length(2);
        assert_eq!(
            Generator.horizontal_rule_with(&options),
            Err(Error::RuleTooShort { length: 2, min: 3 })
        );

        let options = HorizontalRuleOptions::new().with_symbol('=');
        assert_eq!(
            Generator.horizontal_rule_with(&options),
            Err(Error::InvalidRuleSymbol('='))
        );

        let options = HorizontalRuleOptions::new().with_symbol('_').with_length(4);
        assert_eq!(Generator.horizontal_rule_with(&options).unwrap(), "____");
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(Generator.italic(" Italic "), "*Italic*");
        assert_eq!(Generator.bold("Bold"), "**Bold**");
        assert_eq!(
            Generator.italic_with("Italic", EmphasisOptions::underscores()),
            "_Italic_"
        );
        assert_eq!(
            Generator.bold_with("Bold", EmphasisOptions::underscores()),
            "__Bold__"
        );
        assert_eq!(Generator.strike_through("gone"), "~~gone~~");
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(Generator.inline_code("let a"), "`let a`");
        assert_eq!(Generator.inline_code("a`b"), "`a\\`b`");
        assert_eq!(
            Generator.inline_code_with("a`b", &InlineCodeOptions::unescaped()),
            "`a`b`"
        );
    }

    #[test]
    fn test_code_block() {
        let options = CodeOptions::new().with_lang("rust");
        let result = Generator.code_with("let a = 1;\nlet b = `x`;", &options);
        assert_eq!(
            result,
            vec!["```rust", "let a = 1;", "let b = \\`x\\`;", "```"]
        );

        let result = Generator.code(vec!["    indented", "plain"]);
        assert_eq!(result, vec!["```", "    indented", "plain", "```"]);
    }

    #[test]
    fn test_code_block_keeps_first_line_indent() {
        let result = Generator.code("\n    indented\nnext\r\n");
        assert_eq!(result, vec!["```", "    indented", "next", "```"]);
    }

    #[test]
    fn test_code_block_unescaped() {
        let options = CodeOptions::new().with_backtick_escape(None::<String>);
        let result = Generator.code_with("`raw`", &options);
        assert_eq!(result[1], "`raw`");
    }

    #[test]
    fn test_escape_string() {
        assert_eq!(Generator.escape_string("* text"), "\\* text");
        assert_eq!(Generator.escape_string("[a](b)"), "\\[a\\]\\(b\\)");
        assert_eq!(Generator.escape_string("1. item!"), "1\\. item\\!");
    }

    #[test]
    fn test_escape_string_entities_first_occurrence_only() {
        assert_eq!(Generator.escape_string("a|b|c"), "a&#124;b|c");
        assert_eq!(Generator.escape_string("<a> <b>"), "&lt;a&gt; <b>");
    }

    #[test]
    fn test_table_with_bare_headers() {
        let result = Generator.table(["A", "B"], &[vec!["1", "2"]]);
        assert_eq!(result, vec!["| A | B |", "| - | - |", "| 1 | 2 |"]);
    }
}
