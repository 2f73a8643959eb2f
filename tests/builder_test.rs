//! Integration tests for the Markdown builder.

use mdgen::{
    EmphasisOptions, Error, HorizontalRuleOptions, MarkdownBuilder, MarkdownList, Result,
    TableOptions, UnorderedListOptions,
};

#[test]
fn test_chained_build() -> Result<()> {
    let markdown = MarkdownBuilder::new()
        .header("X", 1, false)?
        .empty_line()
        .text("hi")
        .build_with("\n");

    assert_eq!(markdown, "# X\n\nhi");
    Ok(())
}

#[test]
fn test_default_build_separator() -> Result<()> {
    let builder = MarkdownBuilder::new().header("X", 1, false)?.text("hi");
    assert_eq!(builder.build(), "# X\nhi");
    Ok(())
}

#[test]
fn test_seed_from_lines() {
    let seed = vec!["existing".to_string()];
    let builder = MarkdownBuilder::from(seed.clone()).text("more");

    assert_eq!(seed, vec!["existing"]);
    assert_eq!(builder.output(), ["existing", "more"]);
}

#[test]
fn test_compose_builders() -> Result<()> {
    let intro = MarkdownBuilder::new().underline_header("Hello Header", 1)?;
    let doc = MarkdownBuilder::from(&intro)
        .empty_line()
        .text_with(|md| format!("Hello {}!", md.bold("World")))
        .text_with(|md| vec![md.italic("a"), md.strike_through("b")]);

    assert_eq!(intro.output().len(), 2);
    assert_eq!(
        doc.output(),
        [
            "Hello Header",
            "============",
            "",
            "Hello **World**!",
            "*a*",
            "~~b~~",
        ]
    );
    Ok(())
}

#[test]
fn test_error_stops_chain() {
    let result = MarkdownBuilder::new()
        .text("before")
        .unordered_list_with(
            &MarkdownList::from(vec!["x"]),
            &UnorderedListOptions::with_symbol('>'),
        );

    assert_eq!(result, Err(Error::InvalidListSymbol('>')));
}

#[test]
fn test_document_assembly() -> Result<()> {
    let steps = MarkdownList::new()
        .item("Install")
        .sublist(MarkdownList::from(vec!["cargo add mdgen"]))
        .item("Use");

    let doc = MarkdownBuilder::new()
        .header("Guide", 1, false)?
        .unordered_list_with(&steps, &UnorderedListOptions::with_symbol('-'))?
        .horizontal_rule_with(&HorizontalRuleOptions::new().with_symbol('*').with_length(5))?
        .bold_with("Note", EmphasisOptions::underscores())
        .table_with(
            ["Key", "Value"],
            &[vec!["a|b", ""], vec!["", ""]],
            &TableOptions::new().with_remove_empty_rows(true),
        );

    assert_eq!(
        doc.into_output(),
        vec![
            "# Guide",
            "- Install",
            "    - cargo add mdgen",
            "- Use",
            "*****",
            "__Note__",
            "| Key      | Value |",
            "| -------- | ----- |",
            "| a&#124;b |       |",
        ]
    );
    Ok(())
}
