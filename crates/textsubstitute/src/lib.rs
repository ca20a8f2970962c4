//! `textsubstitute` - Format-gated literal term substitution
//!
//! This library provides a text filter for content pipelines that replaces a
//! configured search term with a substitute term, but only for texts whose
//! original format is in a configured allowed set.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod substitute;

pub use config::{Config, FilterSettings};
pub use error::{Error, Result};
pub use format::{AllowedFormats, TextFormat};
pub use logging::init_logging;
pub use substitute::{
    evaluate, filter, ConfigProvider, FilterConfig, FilterOutcome, FilterRequest, SkipReason,
    SubstitutionFilter,
};
