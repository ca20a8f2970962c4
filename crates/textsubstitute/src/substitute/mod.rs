//! Format-gated literal term substitution.
//!
//! This module holds the filter that replaces one configured search term with
//! a configured substitute term:
//!
//! - **Format gating**: only texts whose original format is in the allowed
//!   set are touched.
//!
//! - **Literal matching**: case-sensitive, non-overlapping, left to right.
//!   No patterns, no escaping.
//!
//! - **No-op fallback**: an unknown format, an empty search term or a
//!   disallowed format returns the text unchanged. Nothing here fails.
//!
//! # Example
//!
//! ```
//! use textsubstitute::format::{AllowedFormats, TextFormat};
//! use textsubstitute::substitute::{filter, FilterConfig, FilterRequest};
//!
//! let config = FilterConfig::new("Moodle", "Workplace", AllowedFormats::parse("1"));
//! let request = FilterRequest::new("Download Moodle today", Some(TextFormat::Html));
//!
//! assert_eq!(filter(&request, &config), "Download Workplace today");
//! ```

mod filter;
mod provider;

pub use filter::{
    evaluate, filter, FilterConfig, FilterOutcome, FilterRequest, SkipReason, SubstitutionFilter,
};
pub use provider::ConfigProvider;
