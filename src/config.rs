//! Writer configuration.

/// Line terminator appended by every line-ending write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", serde(rename_all = "lowercase"))]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The terminator text.
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Indentation settings for an [`IndentWriter`](crate::IndentWriter).
///
/// Defaults to four spaces per level and `\n` line endings.
///
/// # Examples
///
/// ```
/// use textwriter::{IndentWriter, WriterConfig};
///
/// let config = WriterConfig::default().with_indent_unit(1).with_indent_char('\t');
/// let mut w = IndentWriter::with_config(config);
/// w.write_line("{").indent().write_line("x").outdent().write_line("}");
///
/// assert_eq!(w.as_str(), "{\n\tx\n}\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", serde(default))]
pub struct WriterConfig {
    /// Number of indent characters added per level.
    #[cfg_attr(feature = "cli", serde(deserialize_with = "clamped_unit"))]
    pub indent_unit: usize,
    /// Character used to pad indentation.
    pub indent_char: char,
    /// Line terminator.
    pub line_ending: LineEnding,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent_unit: 4,
            indent_char: ' ',
            line_ending: LineEnding::Lf,
        }
    }
}

impl WriterConfig {
    pub fn with_indent_unit(mut self, indent_unit: usize) -> Self {
        self.indent_unit = indent_unit;
        self
    }

    pub fn with_indent_char(mut self, indent_char: char) -> Self {
        self.indent_char = indent_char;
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}

/// Clamp a signed indent unit to zero.
pub fn clamp_indent_unit(unit: i64) -> usize {
    usize::try_from(unit).unwrap_or(0)
}

#[cfg(feature = "cli")]
fn clamped_unit<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    i64::deserialize(deserializer).map(clamp_indent_unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WriterConfig::default();
        assert_eq!(config.indent_unit, 4);
        assert_eq!(config.indent_char, ' ');
        assert_eq!(config.line_ending, LineEnding::Lf);
    }

    #[test]
    fn test_clamp_negative_unit() {
        assert_eq!(clamp_indent_unit(-3), 0);
        assert_eq!(clamp_indent_unit(0), 0);
        assert_eq!(clamp_indent_unit(2), 2);
    }

    #[test]
    fn test_line_ending_text() {
        assert_eq!(LineEnding::Lf.as_str(), "\n");
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_deserialize_clamps_negative_unit() {
        let config: WriterConfig = serde_json::from_str(r#"{"indent_unit": -2}"#).unwrap();
        assert_eq!(config.indent_unit, 0);
        assert_eq!(config.indent_char, ' ');
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_deserialize_partial_config() {
        let config: WriterConfig =
            serde_json::from_str(r#"{"indent_char": "\t", "line_ending": "crlf"}"#).unwrap();
        assert_eq!(config.indent_unit, 4);
        assert_eq!(config.indent_char, '\t');
        assert_eq!(config.line_ending, LineEnding::CrLf);
    }
}
