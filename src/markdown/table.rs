//! Markdown table column alignment.

/// Alignment of a table column, as written in the header's delimiter row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    #[default]
    None,
}

impl Alignment {
    /// Map an alignment code: `L`, `C` or `R`; anything else is unaligned.
    pub fn from_code(code: char) -> Self {
        match code {
            'L' => Alignment::Left,
            'C' => Alignment::Center,
            'R' => Alignment::Right,
            _ => Alignment::None,
        }
    }

    /// Parse one alignment per character of `codes`.
    ///
    /// # Examples
    ///
    /// ```
    /// use textwriter::markdown::Alignment;
    ///
    /// assert_eq!(
    ///     Alignment::parse_codes("LCx"),
    ///     vec![Alignment::Left, Alignment::Center, Alignment::None],
    /// );
    /// ```
    pub fn parse_codes(codes: &str) -> Vec<Self> {
        codes.chars().map(Self::from_code).collect()
    }

    /// The delimiter-row cell for this alignment.
    pub fn marker(self) -> &'static str {
        match self {
            Alignment::Left => ":---",
            Alignment::Center => ":---:",
            Alignment::Right => "---:",
            Alignment::None => "---",
        }
    }
}
