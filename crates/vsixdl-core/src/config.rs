//! Compiled-in resolver settings.
//!
//! There is no config file: every value here is a named constant that the
//! pipeline components receive by injection.

/// Browser-identifying `User-Agent` sent with the listing page request.
///
/// The marketplace serves bot-looking clients a stripped page, so the CLI always
/// sends this value and offers no flag to change it. Library callers can still
/// set [`ResolverConfig::user_agent`].
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

/// Host of the public extension marketplace.
pub const MARKETPLACE_HOST: &str = "marketplace.visualstudio.com";

/// Base of the public gallery API that serves `.vsix` packages.
pub const MARKETPLACE_GALLERY_BASE: &str =
    "https://marketplace.visualstudio.com/_apis/public/gallery";

/// Settings shared by the fetch and URL-building stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// `User-Agent` header value for the page request.
    pub user_agent: String,
    /// Gallery API base the download URL is built on (no trailing slash).
    pub gallery_base: String,
    /// Follow HTTP redirects when fetching the listing page.
    pub follow_redirects: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            user_agent: BROWSER_USER_AGENT.to_string(),
            gallery_base: MARKETPLACE_GALLERY_BASE.to_string(),
            follow_redirects: true,
        }
    }
}
