//! # textwriter
//!
//! A fluent text writer that keeps track of indentation, for generating
//! source code, HTML and Markdown without threading indent state through
//! recursive generators.
//!
//! ## Features
//!
//! - Automatic indentation with a configurable unit and padding character
//! - Indent levels of different widths, unwound one or many at a time
//! - Blocks and wraps driven by closures, so nested generators compose
//! - HTML tag helpers ([`HtmlWriter`])
//! - Markdown helpers: emphasis, links, images, tables, badges ([`MarkdownWriter`])
//! - Output to an internal or a caller-owned `String`, saved to disk on demand
//!
//! ## Quick Start
//!
//! ```
//! use textwriter::IndentWriter;
//!
//! let mut w = IndentWriter::new();
//! w.write_line("class ClassName").block_curly(|b| {
//!     b.write("public int SomeMethod(int value) ").block_curly(|b| {
//!         b.write_line("return value * 2;");
//!     });
//! });
//!
//! assert_eq!(
//!     w.as_str(),
//!     "class ClassName\n{\n    public int SomeMethod(int value) {\n        return value * 2;\n    }\n}\n"
//! );
//! ```
//!
//! ## HTML and Markdown
//!
//! ```
//! use textwriter::{HtmlWriter, IndentWriter, MarkdownWriter};
//!
//! let mut w = IndentWriter::new();
//! w.html_tag("div", Some("class='note'"), |w| {
//!     w.md_bold("Note:").write_line(" indented for you");
//! });
//!
//! assert_eq!(
//!     w.as_str(),
//!     "<div class='note'>\n    **Note:** indented for you\n</div>\n"
//! );
//! ```
//!
//! A writer is single threaded: one writer is one generation session.

mod config;
mod error;
pub mod html;
pub mod markdown;
mod writer;

pub use config::{LineEnding, WriterConfig, clamp_indent_unit};
pub use error::{Error, Result};
pub use html::HtmlWriter;
pub use markdown::{Alignment, BadgeStyle, MarkdownWriter};
pub use writer::{IndentWriter, escape_text};
