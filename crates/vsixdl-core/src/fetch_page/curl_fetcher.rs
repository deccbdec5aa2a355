//! libcurl-backed page fetcher.

use crate::config::ResolverConfig;
use crate::error::FetchFailure;

use super::{is_success, PageFetcher};

/// Fetches pages with a blocking curl easy handle.
///
/// Runs in the current thread.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    user_agent: String,
    follow_redirects: bool,
}

impl CurlFetcher {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            follow_redirects: config.follow_redirects,
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::new(&ResolverConfig::default())
    }
}

impl PageFetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchFailure> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(self.follow_redirects)?;
        easy.useragent(&self.user_agent)?;
        // Empty string = accept every encoding libcurl can decode.
        easy.accept_encoding("")?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        tracing::debug!(url, code, bytes = body.len(), "listing page response");
        if !is_success(code) {
            return Err(FetchFailure::Status(code));
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
