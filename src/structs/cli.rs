use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "logviz")]
#[clap(about = "Summarize error and warning log records into interactive HTML charts", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level.
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}
