//! Regex-based extractor.

use regex::Regex;

use super::VersionExtractor;

/// `"version":"1.2.3"` as it appears in the page's embedded JSON.
pub const DEFAULT_VERSION_PATTERN: &str = r#""version":"([0-9.]+)""#;

/// Takes the first capture of a regex over the page text.
///
/// Note: the first match wins unconditionally. A page that embeds data for
/// other extensions (e.g. a "related extensions" widget) ahead of the
/// listing's own metadata would yield the wrong version.
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    re: Regex,
}

impl PatternExtractor {
    /// Builds an extractor from a pattern whose first capture group is the version.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            re: Regex::new(pattern)?,
        })
    }

    /// Extractor for [`DEFAULT_VERSION_PATTERN`].
    pub fn marketplace() -> Result<Self, regex::Error> {
        Self::new(DEFAULT_VERSION_PATTERN)
    }
}

impl VersionExtractor for PatternExtractor {
    fn extract(&self, page: &str) -> Option<String> {
        let caps = self.re.captures(page)?;
        caps.get(1).map(|m| m.as_str().to_string())
    }
}
