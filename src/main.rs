use std::process::ExitCode;

use agecalc::{CliArgs, Config, init_logging, recompute};
use anyhow::Result;
use clap::Parser;

fn main() -> Result<ExitCode> {
    init_logging();

    let config = Config::from_args(CliArgs::parse())?;
    tracing::info!(today = %config.today, "reference date");

    let state = recompute(&config.fields, config.today);
    println!("{}", state.render(config.format)?);

    Ok(ExitCode::from(state.exit_code()))
}
