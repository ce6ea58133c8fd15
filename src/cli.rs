use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

pub const USAGE: &str =
    "Run with the input file as a single argument:\n\n\tmars-rover <input_file>\n";

#[derive(Parser, Debug)]
#[command(name = "mars-rover", version, about = "Drive rovers across a plateau")]
pub struct Cli {
    #[arg(
        value_name = "INPUT",
        help = "Mission file: plateau size, then a position line and a command line per rover"
    )]
    pub input: Option<PathBuf>,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, help = "Allow rovers to land on the x = 0 and y = 0 edges")]
    pub allow_edge_landing: bool,
    #[arg(
        long,
        default_value = DEFAULT_LOG_LEVEL,
        help = "Log filter written to stderr (e.g. info, mars_rover=debug)"
    )]
    pub log_level: String,
}
