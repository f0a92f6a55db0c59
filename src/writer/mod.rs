//! The indenting writer.
//!
//! [`IndentWriter`] appends text to a `String` buffer while tracking the
//! current indentation depth. Each line is in one of two states:
//!
//! - **at line start**: the next non-empty write (or line terminator) first
//!   pads the line with `current_indent` copies of the indent character
//! - **mid line**: text is appended verbatim
//!
//! Indentation is kept on a stack of widths so indents of different sizes can
//! be unwound one at a time. Changing the depth while mid line always closes
//! the current line first, so indentation changes are line aligned.
//!
//! A writer is a plain single-threaded value. Sharing one between threads
//! requires external locking by the caller.

use std::borrow::{Borrow, BorrowMut};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::config::{LineEnding, WriterConfig};
use crate::error::{Error, Result};

mod block;


/// Fluent text writer with automatic indentation.
///
/// The buffer is either owned (`IndentWriter<String>`, the default) or
/// borrowed from the caller (`IndentWriter<&mut String>`), which lets several
/// writers take turns appending to one destination.
///
/// # Examples
///
/// ```
/// use textwriter::IndentWriter;
///
/// let mut w = IndentWriter::new();
/// w.write_line("fn main() {")
///     .indent()
///     .write_line("println!(\"hi\");")
///     .outdent()
///     .write_line("}");
///
/// assert_eq!(w.as_str(), "fn main() {\n    println!(\"hi\");\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct IndentWriter<B = String> {
    output: B,
    config: WriterConfig,
    indent_stack: Vec<usize>,
    indent: usize,
    at_line_start: bool,
}

impl IndentWriter<String> {
    /// Create a writer with an internal buffer and default settings.
    pub fn new() -> Self {
        Self::with_config(WriterConfig::default())
    }

    /// Create a writer with an internal buffer and the given settings.
    pub fn with_config(config: WriterConfig) -> Self {
        Self::from_parts(String::new(), config)
    }
}

impl Default for IndentWriter<String> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IndentWriter<&'a mut String> {
    /// Create a writer that appends to an external buffer.
    ///
    /// Existing buffer contents are kept; the writer starts at line start.
    pub fn with_buffer(buffer: &'a mut String) -> Self {
        Self::from_parts(buffer, WriterConfig::default())
    }
}

impl<B: BorrowMut<String>> IndentWriter<B> {
    /// Create a writer over any owned or borrowed `String` buffer.
    pub fn from_parts(output: B, config: WriterConfig) -> Self {
        Self {
            output,
            config,
            indent_stack: Vec::new(),
            indent: 0,
            at_line_start: true,
        }
    }

    /// Consume the writer and return its buffer.
    pub fn into_inner(self) -> B {
        self.output
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Characters added per indent level.
    pub fn indent_unit(&self) -> usize {
        self.config.indent_unit
    }

    /// Set the characters added per indent level.
    ///
    /// Only affects later `indent()` calls; levels already pushed keep their width.
    pub fn set_indent_unit(&mut self, indent_unit: usize) -> &mut Self {
        self.config.indent_unit = indent_unit;
        self
    }

    pub fn indent_char(&self) -> char {
        self.config.indent_char
    }

    pub fn set_indent_char(&mut self, indent_char: char) -> &mut Self {
        self.config.indent_char = indent_char;
        self
    }

    pub fn set_line_ending(&mut self, line_ending: LineEnding) -> &mut Self {
        self.config.line_ending = line_ending;
        self
    }

    /// Total indentation applied to new lines; always the sum of [`indent_stack`](Self::indent_stack).
    pub fn current_indent(&self) -> usize {
        self.indent
    }

    /// Widths pushed by `indent` calls, innermost last.
    pub fn indent_stack(&self) -> &[usize] {
        &self.indent_stack
    }

    /// Number of indent levels currently pushed.
    pub fn depth(&self) -> usize {
        self.indent_stack.len()
    }

    /// Whether the last write ended a line (or nothing was written yet).
    pub fn is_at_line_start(&self) -> bool {
        self.at_line_start
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        Borrow::<String>::borrow(&self.output).as_str()
    }

    /// Copy of the text written so far. The writer stays usable.
    pub fn as_string(&self) -> String {
        self.as_str().to_owned()
    }

    /// Write the whole buffer to `path`, replacing any existing file.
    pub fn save_to(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        let path = path.as_ref();
        log::debug!("saving {} bytes to {}", self.as_str().len(), path.display());

        fs::write(path, self.as_str()).map_err(|source| Error::Save {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(self)
    }

    /// Append `text`, padding the line first if at line start.
    ///
    /// Text is appended verbatim; embedded line breaks are not indented.
    /// Writing an empty string does nothing.
    pub fn write(&mut self, text: &str) -> &mut Self {
        if !text.is_empty() {
            self.start_line();
            self.buf().push_str(text);
        }
        self
    }

    /// Append `text` followed by a line terminator.
    ///
    /// An empty `text` at line start still writes the pending indentation, so
    /// the resulting line holds only padding when the writer is indented.
    pub fn write_line(&mut self, text: &str) -> &mut Self {
        self.start_line();
        let terminator = self.config.line_ending.as_str();
        let buf = self.buf();
        buf.push_str(text);
        buf.push_str(terminator);
        self.at_line_start = true;
        self
    }

    /// Write `count` line terminators.
    pub fn new_line(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.write_line("");
        }
        self
    }

    /// Push one level of the configured indent unit.
    pub fn indent(&mut self) -> &mut Self {
        self.indent_by(self.config.indent_unit)
    }

    /// Push one level of `width` characters, regardless of the indent unit.
    ///
    /// Ends the current line first if mid line.
    pub fn indent_by(&mut self, width: usize) -> &mut Self {
        self.break_line();
        self.indent_stack.push(width);
        self.indent += width;
        self
    }

    /// Pop one indent level.
    pub fn outdent(&mut self) -> &mut Self {
        self.outdent_by(1)
    }

    /// Pop `count` indent levels, or every level if fewer are pushed.
    ///
    /// Ends the current line first if mid line.
    pub fn outdent_by(&mut self, count: usize) -> &mut Self {
        self.break_line();

        let depth = self.indent_stack.len();
        if count > depth {
            log::trace!("outdent of {count} levels clamped to {depth}");
        }

        for width in self.indent_stack.drain(depth.saturating_sub(count)..) {
            self.indent -= width;
        }
        self
    }

    /// Pop every indent level.
    pub fn outdent_all(&mut self) -> &mut Self {
        self.outdent_by(self.indent_stack.len())
    }

    /// Replace every occurrence of `from` in the text written so far.
    pub fn replace(&mut self, from: &str, to: &str) -> &mut Self {
        if from.is_empty() {
            return self;
        }
        let replaced = self.as_str().replace(from, to);
        *self.buf() = replaced;
        self
    }

    /// Write `text` wrapped in `quote`, optionally backslash-escaping `quote` inside it.
    pub fn quote_text(&mut self, text: &str, quote: char, escape: bool) -> &mut Self {
        let body = if escape {
            escape_text(quote.encode_utf8(&mut [0; 4]), text)
        } else {
            text.to_owned()
        };
        self.write(&format!("{quote}{body}{quote}"))
    }

    fn buf(&mut self) -> &mut String {
        BorrowMut::<String>::borrow_mut(&mut self.output)
    }

    fn start_line(&mut self) {
        if self.at_line_start {
            let (pad, width) = (self.config.indent_char, self.indent);
            self.buf().extend(std::iter::repeat_n(pad, width));
            self.at_line_start = false;
        }
    }

    fn break_line(&mut self) {
        if !self.at_line_start {
            self.write_line("");
        }
    }
}

/// Insert a backslash before every occurrence of any character of `escape_chars` in `text`.
///
/// # Examples
///
/// ```
/// use textwriter::escape_text;
///
/// assert_eq!(escape_text("\"", r#"say "hi""#), r#"say \"hi\""#);
/// ```
pub fn escape_text(escape_chars: &str, text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if escape_chars.contains(c) {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

/// Formatted output through `write!`/`writeln!`.
///
/// Unlike [`IndentWriter::write`], a `'\n'` inside formatted text ends the
/// line, so text after it is indented.
impl<B: BorrowMut<String>> fmt::Write for IndentWriter<B> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut lines = s.split('\n');
        if let Some(first) = lines.next() {
            IndentWriter::write(self, first);
        }
        for line in lines {
            self.write_line("");
            IndentWriter::write(self, line);
        }
        Ok(())
    }
}

impl<B: BorrowMut<String>> fmt::Display for IndentWriter<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
