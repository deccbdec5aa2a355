//! Logging init: stderr only, since the tool keeps no state on disk.

use tracing_subscriber::EnvFilter;

/// Default filter for a given `-v` count when `RUST_LOG` is not set.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,vsixdl_cli=info,vsixdl_core=info",
        2 => "info,vsixdl_cli=debug,vsixdl_core=debug",
        _ => "debug,vsixdl_cli=trace,vsixdl_core=trace",
    }
}

/// Initialize structured logging to stderr.
///
/// `RUST_LOG` wins over `verbosity` when set. Stdout is left alone so the
/// resolved URL stays the only thing printed there.
pub fn init_logging(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();

    tracing::debug!("logging initialized (verbosity={})", verbosity);
}
