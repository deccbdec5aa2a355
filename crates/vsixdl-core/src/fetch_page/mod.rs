//! Listing page retrieval.
//!
//! One GET against the listing URL, nothing more: no retries and no timeouts
//! beyond libcurl's defaults. The fetcher sits behind [`PageFetcher`] so the
//! pipeline can be driven by a canned page in tests.

mod curl_fetcher;

pub use curl_fetcher::CurlFetcher;

use crate::error::FetchFailure;

/// Retrieves the body of a listing page.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchFailure>;
}

/// True for 2xx responses.
pub fn is_success(code: u32) -> bool {
    (200..300).contains(&code)
}
