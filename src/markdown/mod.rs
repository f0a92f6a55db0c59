//! Markdown writing helpers.
//!
//! [`MarkdownWriter`] layers Markdown constructs over the writer primitives:
//!
//! - inline emphasis and code, from text or from nested content
//! - links, images and linked images
//! - horizontal rules and hard line breaks
//! - tables, built cell by cell or row by row
//! - shields.io badges
//!
//! Text is written as given. Escaping Markdown syntax inside it is the
//! caller's business.
//!
//! # Example
//!
//! ```
//! use textwriter::{IndentWriter, MarkdownWriter};
//!
//! let mut w = IndentWriter::new();
//! w.write("See ").md_link("the docs", "https://docs.rs").write(" for ");
//! w.md_bold_with(|w| {
//!     w.write("more");
//! });
//!
//! assert_eq!(w.as_str(), "See [the docs](https://docs.rs) for **more**");
//! ```

mod badge;
mod table;

use std::borrow::BorrowMut;

use crate::html::HtmlWriter;
use crate::writer::IndentWriter;

pub use badge::{BadgeStyle, static_badge_part, static_badge_url};
pub use table::Alignment;

/// Markdown emission on top of an [`IndentWriter`].
pub trait MarkdownWriter {
    /// Horizontal rule with a blank line before and after.
    fn md_hr(&mut self) -> &mut Self;

    /// Inline `<br/>`.
    fn md_br(&mut self) -> &mut Self;

    /// Hard line break: two trailing spaces and a line terminator.
    fn md_line_break(&mut self) -> &mut Self;

    /// Inline `<a id="id"></a>` target for in-page links.
    fn md_anchor(&mut self, id: &str) -> &mut Self;

    fn md_bold(&mut self, text: &str) -> &mut Self;
    fn md_bold_with(&mut self, content: impl FnOnce(&mut Self)) -> &mut Self;
    fn md_italic(&mut self, text: &str) -> &mut Self;
    fn md_italic_with(&mut self, content: impl FnOnce(&mut Self)) -> &mut Self;
    fn md_bold_italic(&mut self, text: &str) -> &mut Self;
    fn md_bold_italic_with(&mut self, content: impl FnOnce(&mut Self)) -> &mut Self;
    fn md_code(&mut self, text: &str) -> &mut Self;
    fn md_code_with(&mut self, content: impl FnOnce(&mut Self)) -> &mut Self;

    /// `[title](url)`
    fn md_link(&mut self, title: &str, url: &str) -> &mut Self;

    /// `![alt](src "title")`, the title omitted when absent or blank.
    fn md_image(&mut self, alt: &str, src: &str, title: Option<&str>) -> &mut Self;

    /// An image that links to `link`.
    fn md_link_image(&mut self, alt: &str, src: &str, link: &str, title: Option<&str>)
    -> &mut Self;

    /// Header row followed by the delimiter row.
    ///
    /// `align` holds one code per column: `L`, `C`, `R`, anything else unaligned.
    /// The delimiter row has one cell per code, regardless of the header count.
    fn md_table_header(&mut self, align: &str, headers: &[&str]) -> &mut Self;

    /// One cell: `| text |` for the first column, ` text |` after it.
    ///
    /// The row is not terminated; end it with a line terminator after the last cell.
    fn md_table_col(&mut self, text: &str, first: bool) -> &mut Self;

    /// One cell whose content is written by `content`.
    fn md_table_col_with(&mut self, content: impl FnOnce(&mut Self), first: bool) -> &mut Self;

    /// A complete row of text cells.
    fn md_table_row(&mut self, cols: &[&str]) -> &mut Self;

    /// A complete row, one content function per cell.
    fn md_table_row_with<F>(&mut self, cols: impl IntoIterator<Item = F>) -> &mut Self
    where
        F: FnOnce(&mut Self);

    /// Generic static badge linking to shields.io, e.g. `Tests | Passing` in green.
    fn md_badge(&mut self, subject: &str, status: &str, color: &str, style: BadgeStyle)
    -> &mut Self;

    /// NuGet package version badge.
    fn md_badge_nuget_version(&mut self, package: &str, style: BadgeStyle) -> &mut Self;

    /// NuGet total downloads badge.
    fn md_badge_nuget_downloads(&mut self, package: &str, style: BadgeStyle) -> &mut Self;

    /// crates.io version badge.
    fn md_badge_crates_io(&mut self, krate: &str, style: BadgeStyle) -> &mut Self;

    /// C# language badge.
    fn md_badge_csharp(&mut self, style: BadgeStyle) -> &mut Self;

    /// MIT license badge.
    fn md_badge_license_mit(&mut self, style: BadgeStyle) -> &mut Self;
}

impl<B: BorrowMut<String>> MarkdownWriter for IndentWriter<B> {
    fn md_hr(&mut self) -> &mut Self {
        let breaks = if self.is_at_line_start() { 1 } else { 2 };
        self.new_line(breaks).write_line("---").new_line(1)
    }

    fn md_br(&mut self) -> &mut Self {
        self.write("<br/>")
    }

    fn md_line_break(&mut self) -> &mut Self {
        self.write_line("  ")
    }

    fn md_anchor(&mut self, id: &str) -> &mut Self {
        self.html_anchor(id)
    }

    fn md_bold(&mut self, text: &str) -> &mut Self {
        self.write(&format!("**{text}**"))
    }

    fn md_bold_with(&mut self, content: impl FnOnce(&mut Self)) -> &mut Self {
        self.wrap("**", "**", content)
    }

    fn md_italic(&mut self, text: &str) -> &mut Self {
        self.write(&format!("*{text}*"))
    }

    fn md_italic_with(&mut self, content: impl FnOnce(&mut Self)) -> &mut Self {
        self.wrap("*", "*", content)
    }

    fn md_bold_italic(&mut self, text: &str) -> &mut Self {
        self.write(&format!("***{text}***"))
    }

    fn md_bold_italic_with(&mut self, content: impl FnOnce(&mut Self)) -> &mut Self {
        self.wrap("***", "***", content)
    }

    fn md_code(&mut self, text: &str) -> &mut Self {
        self.write(&format!("`{text}`"))
    }

    fn md_code_with(&mut self, content: impl FnOnce(&mut Self)) -> &mut Self {
        self.wrap("`", "`", content)
    }

    fn md_link(&mut self, title: &str, url: &str) -> &mut Self {
        self.write(&format!("[{title}]({url})"))
    }

    fn md_image(&mut self, alt: &str, src: &str, title: Option<&str>) -> &mut Self {
        self.write(&image(alt, src, title))
    }

    fn md_link_image(
        &mut self,
        alt: &str,
        src: &str,
        link: &str,
        title: Option<&str>,
    ) -> &mut Self {
        self.md_link(&image(alt, src, title), link)
    }

    fn md_table_header(&mut self, align: &str, headers: &[&str]) -> &mut Self {
        self.md_table_row(headers);

        for (idx, alignment) in Alignment::parse_codes(align).into_iter().enumerate() {
            self.md_table_col(alignment.marker(), idx == 0);
        }
        self.write_line("")
    }

    fn md_table_col(&mut self, text: &str, first: bool) -> &mut Self {
        self.md_table_col_with(
            |w| {
                w.write(text);
            },
            first,
        )
    }

    fn md_table_col_with(&mut self, content: impl FnOnce(&mut Self), first: bool) -> &mut Self {
        self.wrap(if first { "| " } else { " " }, " |", content)
    }

    fn md_table_row(&mut self, cols: &[&str]) -> &mut Self {
        for (idx, col) in cols.iter().enumerate() {
            self.md_table_col(col, idx == 0);
        }
        self.write_line("")
    }

    fn md_table_row_with<F>(&mut self, cols: impl IntoIterator<Item = F>) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        for (idx, col) in cols.into_iter().enumerate() {
            self.md_table_col_with(col, idx == 0);
        }
        self.write_line("")
    }

    fn md_badge(
        &mut self,
        subject: &str,
        status: &str,
        color: &str,
        style: BadgeStyle,
    ) -> &mut Self {
        let url = static_badge_url(subject, status, color, style);
        self.write(&format!("[![{subject}: {status}]({url})](https://shields.io/)"))
    }

    fn md_badge_nuget_version(&mut self, package: &str, style: BadgeStyle) -> &mut Self {
        let package = badge::encode_segment(package);
        self.write(&format!(
            "[![NuGet](https://img.shields.io/nuget/v/{package}?style={style})](https://www.nuget.org/packages/{package}/)"
        ))
    }

    fn md_badge_nuget_downloads(&mut self, package: &str, style: BadgeStyle) -> &mut Self {
        let package = badge::encode_segment(package);
        self.write(&format!(
            "[![NuGet](https://img.shields.io/nuget/dt/{package}?style={style})](https://www.nuget.org/packages/{package}/)"
        ))
    }

    fn md_badge_crates_io(&mut self, krate: &str, style: BadgeStyle) -> &mut Self {
        let krate = badge::encode_segment(krate);
        self.write(&format!(
            "[![Crates.io](https://img.shields.io/crates/v/{krate}?style={style})](https://crates.io/crates/{krate})"
        ))
    }

    fn md_badge_csharp(&mut self, style: BadgeStyle) -> &mut Self {
        self.write(&format!(
            "![C#](https://img.shields.io/badge/c%23-%23239120.svg?style={style}&logo=c-sharp&logoColor=white)"
        ))
    }

    fn md_badge_license_mit(&mut self, style: BadgeStyle) -> &mut Self {
        self.write(&format!(
            "[![MIT license](https://img.shields.io/badge/License-MIT-blue.svg?style={style})](https://lbesson.mit-license.org/)"
        ))
    }
}

fn image(alt: &str, src: &str, title: Option<&str>) -> String {
    match title {
        Some(title) if !title.trim().is_empty() => format!("![{alt}]({src} \"{title}\")"),
        _ => format!("![{alt}]({src})"),
    }
}
