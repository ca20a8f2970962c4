//! Content format tags and the allowed-formats set.
//!
//! The host pipeline labels each block of text with the format it was
//! originally authored in. Formats are identified in configuration either by
//! the host's numeric id or by name.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Error;

/// The format a block of text was originally written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextFormat {
    /// The host's native auto-format markup.
    Moodle,
    /// HTML markup.
    Html,
    /// Plain text.
    Plain,
    /// Markdown markup.
    Markdown,
}

impl TextFormat {
    /// Every known format, in id order.
    pub const ALL: [Self; 4] = [Self::Moodle, Self::Html, Self::Plain, Self::Markdown];

    /// The host's numeric identifier for this format.
    #[must_use]
    pub fn id(self) -> u8 {
        match self {
            Self::Moodle => 0,
            Self::Html => 1,
            Self::Plain => 2,
            Self::Markdown => 4,
        }
    }

    /// Look up a format by its numeric identifier.
    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.id() == id)
    }

    /// Lowercase name of this format.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Moodle => "moodle",
            Self::Html => "html",
            Self::Plain => "plain",
            Self::Markdown => "markdown",
        }
    }
}

impl std::fmt::Display for TextFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextFormat {
    type Err = Error;

    /// Parse a numeric id (`"1"`) or a lowercase name (`"html"`).
    ///
    /// The input is matched as-is; surrounding whitespace is not stripped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = s.parse::<u8>() {
            return Self::from_id(id).ok_or_else(|| Error::unknown_format(s));
        }
        Self::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| Error::unknown_format(s))
    }
}

/// The set of formats for which substitution may run.
///
/// Built from the comma-delimited `formats` setting. An empty setting is an
/// empty set, which matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedFormats {
    formats: BTreeSet<TextFormat>,
}

impl AllowedFormats {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-delimited list of format identifiers.
    ///
    /// Entries that name no known format are skipped with a warning; they can
    /// never match, so dropping them does not change which texts are filtered.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::new();
        }

        let formats = raw
            .split(',')
            .filter_map(|entry| match entry.parse::<TextFormat>() {
                Ok(format) => Some(format),
                Err(e) => {
                    warn!(entry = %entry, error = %e, "Ignoring unrecognised format entry");
                    None
                }
            })
            .collect();

        Self { formats }
    }

    /// Entries of a comma-delimited list that do not name a known format.
    #[must_use]
    pub fn unrecognised(raw: &str) -> Vec<&str> {
        if raw.is_empty() {
            return Vec::new();
        }
        raw.split(',')
            .filter(|entry| entry.parse::<TextFormat>().is_err())
            .collect()
    }

    /// Check whether `format` is allowed.
    #[must_use]
    pub fn contains(&self, format: TextFormat) -> bool {
        self.formats.contains(&format)
    }

    /// Add a format to the set.
    pub fn insert(&mut self, format: TextFormat) {
        self.formats.insert(format);
    }

    /// Check if no format is allowed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Number of allowed formats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Iterate over the allowed formats in id order.
    pub fn iter(&self) -> impl Iterator<Item = TextFormat> + '_ {
        self.formats.iter().copied()
    }
}

impl FromIterator<TextFormat> for AllowedFormats {
    fn from_iter<I: IntoIterator<Item = TextFormat>>(iter: I) -> Self {
        Self {
            formats: iter.into_iter().collect(),
        }
    }
}

/// Renders as the comma-joined numeric ids in id order, which is the
/// normalised form `textsub config show` prints.
impl std::fmt::Display for AllowedFormats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for format in &self.formats {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{}", format.id())?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ids() {
        assert_eq!(TextFormat::Moodle.id(), 0);
        assert_eq!(TextFormat::Html.id(), 1);
        assert_eq!(TextFormat::Plain.id(), 2);
        assert_eq!(TextFormat::Markdown.id(), 4);
    }

    #[test]
    fn test_from_id() {
        assert_eq!(TextFormat::from_id(1), Some(TextFormat::Html));
        assert_eq!(TextFormat::from_id(4), Some(TextFormat::Markdown));
        assert_eq!(TextFormat::from_id(3), None);
    }

    #[test]
    fn test_format_display() {
        assert_eq!(TextFormat::Html.to_string(), "html");
        assert_eq!(TextFormat::Markdown.to_string(), "markdown");
    }

    #[test]
    fn test_parse_by_id_and_name() {
        assert_eq!("0".parse::<TextFormat>().unwrap(), TextFormat::Moodle);
        assert_eq!("2".parse::<TextFormat>().unwrap(), TextFormat::Plain);
        assert_eq!("html".parse::<TextFormat>().unwrap(), TextFormat::Html);
        assert_eq!(
            "markdown".parse::<TextFormat>().unwrap(),
            TextFormat::Markdown
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(
            "3".parse::<TextFormat>(),
            Err(Error::UnknownFormat { value }) if value == "3"
        ));
        assert!("HTML".parse::<TextFormat>().is_err());
        assert!(" 1".parse::<TextFormat>().is_err());
        assert!("".parse::<TextFormat>().is_err());
    }

    #[test]
    fn test_format_serialization() {
        let json = serde_json::to_string(&TextFormat::Html).unwrap();
        assert_eq!(json, "\"html\"");
    }

    #[test]
    fn test_allowed_empty_string_is_empty_set() {
        let allowed = AllowedFormats::parse("");
        assert!(allowed.is_empty());
        for format in TextFormat::ALL {
            assert!(!allowed.contains(format));
        }
    }

    #[test]
    fn test_allowed_parse_all() {
        let allowed = AllowedFormats::parse("1,4,0,2");
        assert_eq!(allowed.len(), 4);
        for format in TextFormat::ALL {
            assert!(allowed.contains(format));
        }
    }

    #[test]
    fn test_allowed_parse_subset() {
        let allowed = AllowedFormats::parse("4,0");
        assert!(allowed.contains(TextFormat::Markdown));
        assert!(allowed.contains(TextFormat::Moodle));
        assert!(!allowed.contains(TextFormat::Html));
        assert!(!allowed.contains(TextFormat::Plain));
    }

    #[test]
    fn test_allowed_parse_skips_garbage() {
        let allowed = AllowedFormats::parse("1,,docx, 2");
        assert_eq!(allowed.len(), 1);
        assert!(allowed.contains(TextFormat::Html));
        assert!(!allowed.contains(TextFormat::Plain));
    }

    #[test]
    fn test_unrecognised_entries() {
        assert!(AllowedFormats::unrecognised("").is_empty());
        assert!(AllowedFormats::unrecognised("1,html").is_empty());
        assert_eq!(AllowedFormats::unrecognised("1,,docx"), vec!["", "docx"]);
    }

    #[test]
    fn test_allowed_display() {
        let allowed: AllowedFormats = [TextFormat::Markdown, TextFormat::Html]
            .into_iter()
            .collect();
        assert_eq!(allowed.to_string(), "1,4");
        assert_eq!(AllowedFormats::new().to_string(), "");
        assert_eq!(AllowedFormats::parse(&allowed.to_string()), allowed);
    }

    #[test]
    fn test_allowed_insert() {
        let mut allowed = AllowedFormats::new();
        allowed.insert(TextFormat::Plain);
        allowed.insert(TextFormat::Plain);
        assert_eq!(allowed.len(), 1);
        assert_eq!(allowed.iter().collect::<Vec<_>>(), vec![TextFormat::Plain]);
    }
}
