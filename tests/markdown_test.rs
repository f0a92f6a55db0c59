//! Markdown generation tests.

use textwriter::markdown::{Alignment, static_badge_url};
use textwriter::{BadgeStyle, IndentWriter, MarkdownWriter};

#[test]
fn test_table_document() {
    let mut w = IndentWriter::new();
    w.md_table_header("LCR", &["A", "B", "C"])
        .md_table_row(&["1", "2", "3"]);

    assert_eq!(
        w.as_str(),
        "| A | B | C |\n| :--- | :---: | ---: |\n| 1 | 2 | 3 |\n"
    );
}

#[test]
fn test_table_with_formatted_cells() {
    let mut w = IndentWriter::new();
    w.md_table_header("LL", &["Name", "Link"]);
    for (name, url) in [("docs", "https://docs.rs"), ("repo", "https://example.com")] {
        w.md_table_col_with(
            |w| {
                w.md_code(name);
            },
            true,
        )
        .md_table_col_with(
            |w| {
                w.md_link(name, url);
            },
            false,
        )
        .write_line("");
    }

    let expected = "\
| Name | Link |
| :--- | :--- |
| `docs` | [docs](https://docs.rs) |
| `repo` | [repo](https://example.com) |
";
    assert_eq!(w.as_str(), expected);
}

#[test]
fn test_alignment_row_follows_codes() {
    let mut w = IndentWriter::new();
    w.md_table_header("C", &["A", "B"]);

    assert_eq!(w.as_str(), "| A | B |\n| :---: |\n");
    assert_eq!(Alignment::parse_codes(""), Vec::<Alignment>::new());
}

#[test]
fn test_readme_section() {
    let mut w = IndentWriter::new();
    w.write_line("# Title")
        .new_line(1)
        .md_image("Screenshot", "img/shot.png", Some("Main window"))
        .md_line_break()
        .write("Made with ")
        .md_bold_italic("care")
        .md_hr()
        .md_link_image("logo", "logo.png", "https://example.com", None);

    let expected = concat!(
        "# Title\n",
        "\n",
        "![Screenshot](img/shot.png \"Main window\")  \n",
        "Made with ***care***\n",
        "\n",
        "---\n",
        "\n",
        "[![logo](logo.png)](https://example.com)",
    );
    assert_eq!(w.as_str(), expected);
}

#[test]
fn test_markdown_inside_indented_list() {
    let mut w = IndentWriter::new();
    w.write("- ").md_bold("top").indent_by(2);
    w.write("- ").md_italic("nested").outdent();
    w.write_line("- last");

    assert_eq!(w.as_str(), "- **top**\n  - *nested*\n- last\n");
}

#[test]
fn test_badges_line() {
    let mut w = IndentWriter::new();
    w.md_badge_csharp(BadgeStyle::ForTheBadge)
        .write(" ")
        .md_badge_nuget_downloads("Psw.TextWriters", BadgeStyle::Flat);

    assert_eq!(
        w.as_str(),
        "![C#](https://img.shields.io/badge/c%23-%23239120.svg?style=for-the-badge&logo=c-sharp&logoColor=white) \
[![NuGet](https://img.shields.io/nuget/dt/Psw.TextWriters?style=flat)](https://www.nuget.org/packages/Psw.TextWriters/)"
    );
}

#[test]
fn test_badge_escapes_path_parts() {
    assert_eq!(
        static_badge_url("code coverage", "93%", "bright-green", BadgeStyle::Social),
        "https://img.shields.io/badge/code%20coverage-93%25-bright--green.svg?style=social"
    );
}
