use clap::Parser;
use mars_rover::{Mission, MissionConfig};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;
mod output;

use cli::{Cli, DEFAULT_LOG_LEVEL, USAGE};
use output::print_out;

const README_HINT: &str = "see README.md for more info on input data.";

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let Some(input) = cli.input else {
        println!("{USAGE}");
        return Ok(ExitCode::SUCCESS);
    };

    if !input.exists() {
        eprintln!("Input file {} does not exist", input.display());
        return Ok(ExitCode::FAILURE);
    }

    let config = MissionConfig::new().with_edge_landing(cli.allow_edge_landing);
    let reports = match Mission::from_path(&input, config).and_then(|m| m.run()) {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("error: {e}\n{README_HINT}");
            return Ok(ExitCode::FAILURE);
        }
    };

    print_out(cli.json, &reports, ToString::to_string)?;
    Ok(ExitCode::SUCCESS)
}

fn init_tracing(level: &str) {
    let filter =
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
