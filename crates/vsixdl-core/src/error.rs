//! Error taxonomy for the resolve pipeline.
//!
//! Every stage fails with one of these variants and the pipeline stops at the
//! first failure. None of them are retried.

use thiserror::Error;

/// Why the listing page could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// Curl reported an error (DNS, connect, TLS, read...).
    #[error(transparent)]
    Transport(#[from] curl::Error),
    /// The server answered with a non-2xx status.
    #[error("{}", describe_status(.0))]
    Status(u32),
}

fn describe_status(code: &u32) -> String {
    match *code {
        404 => "HTTP 404 (extension not found; check the listing URL)".to_string(),
        _ => format!("HTTP {}", code),
    }
}

impl FetchFailure {
    /// HTTP status code, if the failure came from a response rather than the transport.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchFailure::Status(code) => Some(*code),
            FetchFailure::Transport(_) => None,
        }
    }
}

/// Terminal failure of a single resolve invocation.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// `itemName` query parameter missing, or the input is not a URL at all.
    #[error("invalid listing URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// `itemName` is not of the form `publisher.extension`.
    #[error("'itemName' format is incorrect; expected 'publisher.extension', got {item_name:?}")]
    InvalidFormat { item_name: String },

    /// Transport failure or non-success HTTP status while fetching the listing page.
    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        cause: FetchFailure,
    },

    /// Page fetched, but no `"version":"..."` fragment was found in it.
    #[error("could not find version information on the listing page (the page structure might have changed)")]
    VersionNotFound,
}

impl ResolveError {
    pub(crate) fn missing_item_name(url: &str) -> Self {
        ResolveError::InvalidUrl {
            url: url.to_string(),
            reason: "missing 'itemName' query parameter".to_string(),
        }
    }
}
