use clap::Parser;
use color_eyre::Result;
use env_logger::Target;
use ewgen::{cli::CliArgs, utils::logger::config_logger, worker::run_ewgen};

/// The entry point for the binary generated
/// for the program
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli_args = CliArgs::parse();
    config_logger(cli_args.verbose, Target::Stdout)?;
    log::debug!("Launching a new ewgen program");
    let outcomes = run_ewgen(&cli_args)?;
    log::debug!("Tasks successfully finished, {} artifacts handled", outcomes.len());

    Ok(())
}
