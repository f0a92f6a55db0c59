//! Block and wrap composition over the writer primitives.

use std::borrow::BorrowMut;

use super::IndentWriter;

impl<B: BorrowMut<String>> IndentWriter<B> {
    /// Write `open`, the content, then `close`, without changing indentation.
    ///
    /// ```
    /// use textwriter::IndentWriter;
    ///
    /// let mut w = IndentWriter::new();
    /// w.write("say ").wrap("\"", "\"", |w| {
    ///     w.write("hello");
    /// });
    ///
    /// assert_eq!(w.as_str(), "say \"hello\"");
    /// ```
    pub fn wrap<F>(&mut self, open: &str, close: &str, content: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.write(open);
        content(self);
        self.write(close)
    }

    /// Write the content one level deeper, on its own lines.
    pub fn block_indent<F>(&mut self, content: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.indent();
        content(self);
        self.outdent()
    }

    /// Write `open` on its own line, the content indented, then `close` on its own line.
    ///
    /// ```
    /// use textwriter::IndentWriter;
    ///
    /// let mut w = IndentWriter::new();
    /// w.block("match x {", "}", |w| {
    ///     w.write_line("_ => {}");
    /// });
    ///
    /// assert_eq!(w.as_str(), "match x {\n    _ => {}\n}\n");
    /// ```
    pub fn block<F>(&mut self, open: &str, close: &str, content: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.write_line(open).indent();
        content(self);
        self.outdent().write_line(close)
    }

    /// A block with no content, collapsed to `open` + `close` on one line.
    pub fn empty_block(&mut self, open: &str, close: &str) -> &mut Self {
        self.write_line(&format!("{open}{close}"))
    }

    /// [`block`](Self::block) delimited by `{` and `}`.
    pub fn block_curly<F>(&mut self, content: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.block("{", "}", content)
    }

    /// [`block`](Self::block) delimited by `[` and `]`.
    pub fn block_square<F>(&mut self, content: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.block("[", "]", content)
    }
}
