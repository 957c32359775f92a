use darkgrab::cli::Cli;
use darkgrab::logging;

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging();

    // Parse CLI and run the scrape.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("darkgrab error: {:#}", err);
        std::process::exit(1);
    }
}
