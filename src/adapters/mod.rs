#[cfg(feature = "cli")]
pub mod cli;
pub mod decimal;
#[cfg(feature = "cli")]
pub mod logging;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, parse_scenario};
    use crate::hydro::summary::compute_summary;

    let args = Args::parse();
    logging::init(&args.log_level)?;

    let scenario = parse_scenario(&args)?;
    tracing::debug!(pieces = scenario.pieces.len(), "scenario loaded");

    let out = compute_summary(&scenario)?;

    crate::adapters::cli::print_output(&out, &args)?;

    Ok(())
}
