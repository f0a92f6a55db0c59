//! shields.io badge URLs.

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped inside a URL path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/');

/// Visual style of a shields.io badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeStyle {
    #[default]
    Flat,
    FlatSquare,
    Plastic,
    Social,
    ForTheBadge,
}

impl BadgeStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeStyle::Flat => "flat",
            BadgeStyle::FlatSquare => "flat-square",
            BadgeStyle::Plastic => "plastic",
            BadgeStyle::Social => "social",
            BadgeStyle::ForTheBadge => "for-the-badge",
        }
    }
}

impl fmt::Display for BadgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percent-encode `text` for use as one URL path segment.
pub(crate) fn encode_segment(text: &str) -> String {
    utf8_percent_encode(text, SEGMENT).to_string()
}

/// Escape one part of a static badge path.
///
/// shields.io splits `subject-status-color` on single dashes, so literal dashes
/// and underscores are doubled before percent-encoding.
///
/// # Examples
///
/// ```
/// use textwriter::markdown::static_badge_part;
///
/// assert_eq!(static_badge_part("build-status"), "build--status");
/// assert_eq!(static_badge_part("C# 12"), "C%23%2012");
/// ```
pub fn static_badge_part(text: &str) -> String {
    encode_segment(&text.replace('-', "--").replace('_', "__"))
}

/// Image URL of a static `subject | status` badge.
pub fn static_badge_url(subject: &str, status: &str, color: &str, style: BadgeStyle) -> String {
    format!(
        "https://img.shields.io/badge/{}-{}-{}.svg?style={style}",
        static_badge_part(subject),
        static_badge_part(status),
        static_badge_part(color),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_names() {
        assert_eq!(BadgeStyle::default().as_str(), "flat");
        assert_eq!(BadgeStyle::FlatSquare.to_string(), "flat-square");
        assert_eq!(BadgeStyle::ForTheBadge.as_str(), "for-the-badge");
    }

    #[test]
    fn test_static_badge_url() {
        assert_eq!(
            static_badge_url("Tests", "Passing", "green", BadgeStyle::Flat),
            "https://img.shields.io/badge/Tests-Passing-green.svg?style=flat"
        );
    }

    #[test]
    fn test_static_badge_part_escapes_separators() {
        assert_eq!(static_badge_part("snake_case"), "snake__case");
        assert_eq!(static_badge_part("v1.0-beta"), "v1.0--beta");
        assert_eq!(static_badge_part("a/b"), "a%2Fb");
    }
}
