//! Substitution filter for host-supplied text.
//!
//! This module provides the filter that decides whether a block of text is
//! eligible for substitution and, if it is, replaces every literal
//! occurrence of the search term.

use serde::Serialize;
use tracing::{debug, trace};

use super::provider::ConfigProvider;
use crate::format::{AllowedFormats, TextFormat};

/// Why the filter left a text untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The request carried no original format.
    FormatUnknown,

    /// No search term is configured.
    EmptySearchTerm,

    /// The original format is not in the allowed set.
    FormatNotAllowed,

    /// The search term does not occur in the text.
    NoMatch,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FormatUnknown => write!(f, "format unknown"),
            Self::EmptySearchTerm => write!(f, "empty search term"),
            Self::FormatNotAllowed => write!(f, "format not allowed"),
            Self::NoMatch => write!(f, "no match"),
        }
    }
}

/// Result of evaluating the filter against one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// The text is returned as-is.
    Skipped(SkipReason),

    /// At least one occurrence was replaced.
    Substituted {
        /// The text after substitution.
        text: String,

        /// Number of occurrences replaced.
        replacements: usize,
    },
}

impl FilterOutcome {
    /// Check whether any substitution happened.
    #[must_use]
    pub fn is_substituted(&self) -> bool {
        matches!(self, Self::Substituted { .. })
    }

    /// Number of occurrences replaced (zero when skipped).
    #[must_use]
    pub fn replacements(&self) -> usize {
        match self {
            Self::Skipped(_) => 0,
            Self::Substituted { replacements, .. } => *replacements,
        }
    }

    /// Collapse to the output text, given the text that was filtered.
    #[must_use]
    pub fn into_text(self, original: &str) -> String {
        match self {
            Self::Skipped(_) => original.to_string(),
            Self::Substituted { text, .. } => text,
        }
    }
}

/// Settings for one filter invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Literal term to find. Empty disables the filter.
    pub search_term: String,

    /// Literal term to put in its place. May be empty.
    pub replace_term: String,

    /// Formats the filter may run on.
    pub allowed_formats: AllowedFormats,
}

impl FilterConfig {
    /// Create a filter configuration.
    #[must_use]
    pub fn new(
        search_term: impl Into<String>,
        replace_term: impl Into<String>,
        allowed_formats: AllowedFormats,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            replace_term: replace_term.into(),
            allowed_formats,
        }
    }

    /// Read the three settings from a provider.
    #[must_use]
    pub fn from_provider<P: ConfigProvider + ?Sized>(provider: &P) -> Self {
        Self {
            search_term: provider.search_term().into_owned(),
            replace_term: provider.substitute_term().into_owned(),
            allowed_formats: AllowedFormats::parse(&provider.formats()),
        }
    }
}

/// A block of text handed over by the host pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterRequest<'a> {
    /// The text to filter.
    pub text: &'a str,

    /// The format the text was authored in, if known.
    pub original_format: Option<TextFormat>,
}

impl<'a> FilterRequest<'a> {
    /// Create a request.
    #[must_use]
    pub fn new(text: &'a str, original_format: Option<TextFormat>) -> Self {
        Self {
            text,
            original_format,
        }
    }
}

/// Decide what the filter does with `request` and carry it out.
#[must_use]
pub fn evaluate(request: &FilterRequest<'_>, config: &FilterConfig) -> FilterOutcome {
    let Some(format) = request.original_format else {
        debug!("Original format unknown, leaving text unchanged");
        return FilterOutcome::Skipped(SkipReason::FormatUnknown);
    };

    if config.search_term.is_empty() {
        debug!("No search term configured, leaving text unchanged");
        return FilterOutcome::Skipped(SkipReason::EmptySearchTerm);
    }

    if !config.allowed_formats.contains(format) {
        debug!(format = %format, "Format not allowed, leaving text unchanged");
        return FilterOutcome::Skipped(SkipReason::FormatNotAllowed);
    }

    let (text, replacements) =
        replace_literal(request.text, &config.search_term, &config.replace_term);
    if replacements == 0 {
        return FilterOutcome::Skipped(SkipReason::NoMatch);
    }

    trace!(format = %format, replacements, "Substituted search term");
    FilterOutcome::Substituted { text, replacements }
}

/// Apply the filter and return the resulting text.
///
/// Skipped texts come back unchanged.
#[must_use]
pub fn filter(request: &FilterRequest<'_>, config: &FilterConfig) -> String {
    evaluate(request, config).into_text(request.text)
}

/// Replace every non-overlapping occurrence of `needle`, left to right.
///
/// `needle` must not be empty.
fn replace_literal(haystack: &str, needle: &str, replacement: &str) -> (String, usize) {
    let mut result = String::with_capacity(haystack.len());
    let mut last_end = 0;
    let mut count = 0;

    for (start, matched) in haystack.match_indices(needle) {
        result.push_str(&haystack[last_end..start]);
        result.push_str(replacement);
        last_end = start + matched.len();
        count += 1;
    }
    result.push_str(&haystack[last_end..]);

    (result, count)
}

/// Substitution filter bound to a settings provider.
///
/// Settings are read from the provider on every call, so changes in the
/// backing store take effect without rebuilding the filter.
#[derive(Debug)]
pub struct SubstitutionFilter<P> {
    provider: P,
}

impl<P: ConfigProvider> SubstitutionFilter<P> {
    /// Create a filter reading from `provider`.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The provider this filter reads from.
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Snapshot the provider's current settings.
    #[must_use]
    pub fn config(&self) -> FilterConfig {
        FilterConfig::from_provider(&self.provider)
    }

    /// Evaluate `request` against the current settings.
    #[must_use]
    pub fn evaluate(&self, request: &FilterRequest<'_>) -> FilterOutcome {
        evaluate(request, &self.config())
    }

    /// Filter `request` against the current settings.
    #[must_use]
    pub fn filter(&self, request: &FilterRequest<'_>) -> String {
        filter(request, &self.config())
    }
}
