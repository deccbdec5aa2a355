//! `itemName` extraction from a listing URL's query string.

use crate::config::MARKETPLACE_HOST;
use crate::error::ResolveError;

/// Query parameter that carries `publisher.extension` on a listing page URL.
pub const ITEM_NAME_PARAM: &str = "itemName";

/// Returns the percent-decoded `itemName` query value of `url`.
///
/// Blank values are treated as absent and the first non-blank occurrence wins.
pub fn item_name_from_url(url: &str) -> Result<String, ResolveError> {
    let parsed = url::Url::parse(url).map_err(|e| ResolveError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    parsed
        .query_pairs()
        .find(|(k, v)| k == ITEM_NAME_PARAM && !v.is_empty())
        .map(|(_, v)| v.into_owned())
        .ok_or_else(|| ResolveError::missing_item_name(url))
}

/// True if `url` is an `items` page on the public marketplace host.
///
/// The pipeline does not require this (only `itemName` matters); callers use it
/// to warn about look-alike URLs.
pub fn is_marketplace_listing(url: &str) -> bool {
    let Ok(parsed) = url::Url::parse(url.trim()) else {
        return false;
    };
    let host_ok = parsed
        .host_str()
        .map(|h| h.eq_ignore_ascii_case(MARKETPLACE_HOST))
        .unwrap_or(false);
    host_ok && parsed.path().trim_end_matches('/') == "/items"
}

/// True if `url` parses as an absolute URL but is not a marketplace listing page.
///
/// Unparseable input is not "foreign": the parser rejects it with `InvalidUrl`.
pub fn is_foreign_listing(url: &str) -> bool {
    url::Url::parse(url.trim()).is_ok() && !is_marketplace_listing(url)
}
