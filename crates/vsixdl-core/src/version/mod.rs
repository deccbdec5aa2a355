//! Version extraction from listing page markup.
//!
//! The marketplace embeds extension metadata as JSON inside the page; the
//! current version is scraped from that blob rather than read from a stable
//! API. [`VersionExtractor`] keeps the matching strategy replaceable.

mod pattern;

pub use pattern::{PatternExtractor, DEFAULT_VERSION_PATTERN};

/// Finds the published version in a fetched listing page.
pub trait VersionExtractor {
    /// Returns the version string verbatim (digits and dots, not parsed as semver),
    /// or `None` when the page carries no recognizable version.
    fn extract(&self, page: &str) -> Option<String>;
}
