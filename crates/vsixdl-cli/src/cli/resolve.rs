//! `vsixdl <url>`: resolve a listing and print the result.

use anyhow::Result;
use std::io::Write;
use vsixdl_core::listing;
use vsixdl_core::resolver::Resolver;

use super::output::{render, OutputFormat};

/// Resolves `url` and writes the rendered result to `out`, newline-terminated.
///
/// `Url` output is a single line; `Json` output is pretty-printed over several
/// lines. Nothing is written unless resolution succeeds.
pub fn run_resolve<R, W>(resolver: &R, url: &str, format: OutputFormat, out: &mut W) -> Result<()>
where
    R: Resolver,
    W: Write,
{
    if listing::is_foreign_listing(url) {
        tracing::warn!("{} does not look like a marketplace listing page", url.trim());
    }

    let pkg = resolver.resolve(url)?;
    let rendered = render(&pkg, format)?;
    writeln!(out, "{}", rendered)?;
    out.flush()?;
    Ok(())
}
