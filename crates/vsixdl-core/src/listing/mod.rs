//! Listing URL parsing.
//!
//! Turns a marketplace listing URL such as
//! `https://marketplace.visualstudio.com/items?itemName=hediet.debug-visualizer`
//! into the publisher and extension name the package URL is built from.

mod query;

pub use query::{is_foreign_listing, is_marketplace_listing, item_name_from_url, ITEM_NAME_PARAM};

use crate::error::ResolveError;

/// Publisher and extension name taken from a listing's `itemName`.
///
/// Both parts are non-empty. Only constructible through [`ListingReference::from_item_name`]
/// or [`parse_listing_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingReference {
    publisher: String,
    extension_name: String,
}

impl ListingReference {
    /// Splits `publisher.extension` on the first `.`.
    ///
    /// Extension names may themselves contain dots (`pub.ext.more` gives
    /// publisher `pub`, extension `ext.more`).
    pub fn from_item_name(item_name: &str) -> Result<Self, ResolveError> {
        let invalid = || ResolveError::InvalidFormat {
            item_name: item_name.to_string(),
        };
        let (publisher, extension_name) = item_name.split_once('.').ok_or_else(invalid)?;
        if publisher.is_empty() || extension_name.is_empty() {
            return Err(invalid());
        }
        Ok(Self {
            publisher: publisher.to_string(),
            extension_name: extension_name.to_string(),
        })
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn extension_name(&self) -> &str {
        &self.extension_name
    }

    /// `publisher.extension_name`, as it appears in the listing URL.
    pub fn item_name(&self) -> String {
        format!("{}.{}", self.publisher, self.extension_name)
    }
}

/// Parses a listing URL into a [`ListingReference`].
///
/// Fails with `InvalidUrl` when `itemName` is missing and with `InvalidFormat`
/// when it has no `.` separator.
pub fn parse_listing_url(url: &str) -> Result<ListingReference, ResolveError> {
    let item_name = item_name_from_url(url.trim())?;
    ListingReference::from_item_name(&item_name)
}
