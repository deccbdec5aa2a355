//! Resolver: listing URL in, direct package URL out.
//!
//! Runs parse → fetch → extract → build in order and stops at the first
//! failing stage. The fetch and extract stages are injected, so the same
//! pipeline runs against libcurl in production and a canned page in tests.

use serde::Serialize;

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::fetch_page::{CurlFetcher, PageFetcher};
use crate::listing::parse_listing_url;
use crate::package_url::{build_download_url, package_file_name};
use crate::version::{PatternExtractor, VersionExtractor};

/// Everything known about a resolved package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPackage {
    pub publisher: String,
    pub extension_name: String,
    /// `publisher.extension_name`.
    pub item_name: String,
    /// Version as scraped from the page, verbatim.
    pub version: String,
    /// Direct `.vsix` download URL.
    pub download_url: String,
    /// Suggested local file name for the package.
    pub file_name: String,
}

/// Turns a listing URL into a [`ResolvedPackage`].
pub trait Resolver {
    fn resolve(&self, listing_url: &str) -> Result<ResolvedPackage, ResolveError>;
}

/// Resolver for the public extension marketplace.
#[derive(Debug, Clone)]
pub struct MarketplaceResolver<F = CurlFetcher, E = PatternExtractor> {
    fetcher: F,
    extractor: E,
    gallery_base: String,
}

impl MarketplaceResolver {
    /// libcurl fetcher plus the default version pattern.
    pub fn from_config(config: &ResolverConfig) -> Result<Self, regex::Error> {
        Ok(Self::with_parts(
            CurlFetcher::new(config),
            PatternExtractor::marketplace()?,
            config.gallery_base.clone(),
        ))
    }
}

impl<F, E> MarketplaceResolver<F, E> {
    pub fn with_parts(fetcher: F, extractor: E, gallery_base: impl Into<String>) -> Self {
        Self {
            fetcher,
            extractor,
            gallery_base: gallery_base.into(),
        }
    }
}

impl<F: PageFetcher, E: VersionExtractor> Resolver for MarketplaceResolver<F, E> {
    fn resolve(&self, listing_url: &str) -> Result<ResolvedPackage, ResolveError> {
        let listing_url = listing_url.trim();
        let reference = parse_listing_url(listing_url)?;
        let item_name = reference.item_name();

        tracing::info!("fetching page for {} to find version", item_name);
        let page = self
            .fetcher
            .fetch(listing_url)
            .map_err(|cause| ResolveError::Fetch {
                url: listing_url.to_string(),
                cause,
            })?;
        tracing::debug!("fetched {} bytes for {}", page.len(), item_name);

        let version = self
            .extractor
            .extract(&page)
            .ok_or(ResolveError::VersionNotFound)?;
        tracing::info!("found version {} for {}", version, item_name);

        let download_url = build_download_url(&self.gallery_base, &reference, &version);
        let file_name = package_file_name(&reference, &version);

        Ok(ResolvedPackage {
            publisher: reference.publisher().to_string(),
            extension_name: reference.extension_name().to_string(),
            item_name,
            version,
            download_url,
            file_name,
        })
    }
}
