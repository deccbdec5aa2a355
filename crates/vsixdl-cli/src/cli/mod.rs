//! CLI for vsixdl.

mod output;
mod resolve;

use anyhow::Result;
use clap::Parser;
use vsixdl_core::config::ResolverConfig;
use vsixdl_core::resolver::MarketplaceResolver;

pub use output::OutputFormat;
pub use resolve::run_resolve;

/// Print the direct .vsix download URL for a marketplace listing page.
#[derive(Debug, Parser)]
#[command(name = "vsixdl", version)]
#[command(about = "Resolve a marketplace listing URL to a direct .vsix download URL", long_about = None)]
#[command(
    after_help = "Example:\n  vsixdl 'https://marketplace.visualstudio.com/items?itemName=hediet.debug-visualizer'"
)]
pub struct Cli {
    /// Listing URL, e.g. https://marketplace.visualstudio.com/items?itemName=publisher.extension
    pub url: String,

    /// Print publisher, version, download URL and file name as JSON.
    #[arg(long)]
    pub json: bool,

    /// More diagnostics on stderr (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse process arguments.
    ///
    /// Argument errors print clap's usage message and exit 1; `--help` and
    /// `--version` print to stdout and exit 0.
    pub fn parse_or_exit() -> Self {
        match Cli::try_parse() {
            Ok(cli) => cli,
            Err(err) => {
                // Same as clap's own `Error::exit`: if the terminal is gone there
                // is nowhere left to report the write failure.
                err.print().ok();
                std::process::exit(usage_exit_code(&err));
            }
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Url
        }
    }

    pub fn run(&self) -> Result<()> {
        let resolver = MarketplaceResolver::from_config(&ResolverConfig::default())?;
        let stdout = std::io::stdout();
        run_resolve(&resolver, &self.url, self.output_format(), &mut stdout.lock())
    }
}

/// Exit status for an argument-parsing outcome: 0 for `--help`/`--version`,
/// 1 for real usage errors (clap itself would use 2).
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests;
