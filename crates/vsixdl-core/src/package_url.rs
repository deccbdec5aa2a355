//! Package download URL and file name construction.

use crate::listing::ListingReference;

/// Direct `.vsix` download URL for `reference` at `version`.
///
/// `gallery_base` is the gallery API root without a trailing slash, normally
/// [`crate::config::MARKETPLACE_GALLERY_BASE`]. All parts are inserted verbatim.
///
/// # Examples
///
/// - publisher `hediet`, extension `debug-visualizer`, version `3.0.0` →
///   `https://marketplace.visualstudio.com/_apis/public/gallery/publishers/hediet/vsextensions/debug-visualizer/3.0.0/vspackage`
pub fn build_download_url(
    gallery_base: &str,
    reference: &ListingReference,
    version: &str,
) -> String {
    format!(
        "{}/publishers/{}/vsextensions/{}/{}/vspackage",
        gallery_base.trim_end_matches('/'),
        reference.publisher(),
        reference.extension_name(),
        version
    )
}

/// Conventional file name for the package: `{extension}-{version}.vsix`.
pub fn package_file_name(reference: &ListingReference, version: &str) -> String {
    format!("{}-{}.vsix", reference.extension_name(), version)
}
