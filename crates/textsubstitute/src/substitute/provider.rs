//! Injected source of filter settings.

use std::borrow::Cow;
use std::sync::Arc;

/// Supplies the three raw settings the substitution filter reads.
///
/// Values are returned exactly as stored. An empty string means "not set".
/// The `formats` value is the comma-joined list of format identifiers, still
/// unparsed.
pub trait ConfigProvider: Send + Sync {
    /// The literal term to search for (`searchterm`).
    fn search_term(&self) -> Cow<'_, str>;

    /// The literal term to put in its place (`substituteterm`).
    fn substitute_term(&self) -> Cow<'_, str>;

    /// Comma-joined allowed format identifiers (`formats`).
    fn formats(&self) -> Cow<'_, str>;
}

impl<P: ConfigProvider + ?Sized> ConfigProvider for &P {
    fn search_term(&self) -> Cow<'_, str> {
        (**self).search_term()
    }

    fn substitute_term(&self) -> Cow<'_, str> {
        (**self).substitute_term()
    }

    fn formats(&self) -> Cow<'_, str> {
        (**self).formats()
    }
}

impl<P: ConfigProvider + ?Sized> ConfigProvider for Arc<P> {
    fn search_term(&self) -> Cow<'_, str> {
        (**self).search_term()
    }

    fn substitute_term(&self) -> Cow<'_, str> {
        (**self).substitute_term()
    }

    fn formats(&self) -> Cow<'_, str> {
        (**self).formats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterSettings;

    fn settings() -> FilterSettings {
        FilterSettings {
            searchterm: "Moodle".to_string(),
            substituteterm: "Workplace".to_string(),
            formats: "1,2".to_string(),
        }
    }

    #[test]
    fn test_reference_forwards() {
        let settings = settings();
        let provider = &settings;
        assert_eq!(ConfigProvider::search_term(&provider), "Moodle");
        assert_eq!(ConfigProvider::substitute_term(&provider), "Workplace");
        assert_eq!(ConfigProvider::formats(&provider), "1,2");
    }

    #[test]
    fn test_arc_forwards() {
        let provider: Arc<dyn ConfigProvider> = Arc::new(settings());
        assert_eq!(provider.search_term(), "Moodle");
        assert_eq!(provider.substitute_term(), "Workplace");
        assert_eq!(provider.formats(), "1,2");
    }
}
