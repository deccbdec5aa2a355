use vsixdl_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Usage errors exit here with status 1, before anything is logged.
    let cli = Cli::parse_or_exit();

    logging::init_logging(cli.verbose);

    if let Err(err) = cli.run() {
        eprintln!("vsixdl error: {:#}", err);
        std::process::exit(1);
    }
}
