//! Rendering of a resolved package for stdout.

use anyhow::Result;
use vsixdl_core::resolver::ResolvedPackage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Just the download URL.
    #[default]
    Url,
    /// Pretty-printed JSON object with all resolved fields.
    Json,
}

pub fn render(pkg: &ResolvedPackage, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Url => pkg.download_url.clone(),
        OutputFormat::Json => serde_json::to_string_pretty(pkg)?,
    })
}
