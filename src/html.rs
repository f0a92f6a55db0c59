//! HTML writing helpers.
//!
//! Tags with nested content become indented blocks:
//!
//! ```
//! use textwriter::{HtmlWriter, IndentWriter};
//!
//! let mut w = IndentWriter::new();
//! w.html_tag("ul", Some("class='menu'"), |w| {
//!     w.html_line_tag("li", "Home", None);
//! });
//!
//! assert_eq!(w.as_str(), "<ul class='menu'>\n    <li>Home</li>\n</ul>\n");
//! ```
//!
//! Attributes are passed through as written; nothing is escaped or validated.

use std::borrow::BorrowMut;

use crate::writer::IndentWriter;

/// HTML tag emission on top of an [`IndentWriter`].
pub trait HtmlWriter {
    /// Write `<tag attrs>`, the content indented, then `</tag>`, each on its own line.
    fn html_tag(
        &mut self,
        tag: &str,
        attrs: Option<&str>,
        content: impl FnOnce(&mut Self),
    ) -> &mut Self;

    /// Write `<tag attrs></tag>` on one line.
    fn html_empty_tag(&mut self, tag: &str, attrs: Option<&str>) -> &mut Self;

    /// Write `<tag attrs>content</tag>` on one line.
    fn html_line_tag(&mut self, tag: &str, content: &str, attrs: Option<&str>) -> &mut Self;

    /// Write `<tag attrs>` on one line, e.g. `<hr>` or `<br>`.
    fn html_self_closing_tag(&mut self, tag: &str, attrs: Option<&str>) -> &mut Self;

    /// Write an inline `<a id="id"></a>` anchor.
    fn html_anchor(&mut self, id: &str) -> &mut Self;
}

impl<B: BorrowMut<String>> HtmlWriter for IndentWriter<B> {
    fn html_tag(
        &mut self,
        tag: &str,
        attrs: Option<&str>,
        content: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.block(&open_tag(tag, attrs), &format!("</{tag}>"), content)
    }

    fn html_empty_tag(&mut self, tag: &str, attrs: Option<&str>) -> &mut Self {
        self.empty_block(&open_tag(tag, attrs), &format!("</{tag}>"))
    }

    fn html_line_tag(&mut self, tag: &str, content: &str, attrs: Option<&str>) -> &mut Self {
        self.write_line(&format!("{}{content}</{tag}>", open_tag(tag, attrs)))
    }

    fn html_self_closing_tag(&mut self, tag: &str, attrs: Option<&str>) -> &mut Self {
        self.write_line(&open_tag(tag, attrs))
    }

    fn html_anchor(&mut self, id: &str) -> &mut Self {
        self.write(&format!("<a id=\"{id}\"></a>"))
    }
}

fn open_tag(tag: &str, attrs: Option<&str>) -> String {
    match attrs {
        Some(attrs) if !attrs.is_empty() => format!("<{tag} {attrs}>"),
        _ => format!("<{tag}>"),
    }
}
