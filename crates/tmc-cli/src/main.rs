use tmc_core::logging;

mod cli;

fn main() {
    // Logging is best effort; a missing state directory must not block commands.
    if let Err(err) = logging::init_logging() {
        eprintln!("tmc warning: logging disabled: {:#}", err);
    }

    if let Err(err) = cli::run_from_args() {
        tracing::error!("{:#}", err);
        eprintln!("tmc error: {:#}", err);
        std::process::exit(1);
    }
}
