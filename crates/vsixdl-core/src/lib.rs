pub mod config;
pub mod error;
pub mod logging;

// Pipeline stages, in the order the resolver runs them.
pub mod listing;
pub mod fetch_page;
pub mod version;
pub mod package_url;
pub mod resolver;
