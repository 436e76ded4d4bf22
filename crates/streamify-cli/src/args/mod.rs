mod commands;

pub use commands::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "streamify")]
#[command(about = "Music streaming analytics dashboard", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory (defaults to $STREAMIFY_PATH, then the platform data dir)"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Number of mock stream records to generate")]
    pub records: Option<usize>,

    #[arg(long, global = true, help = "Seed for reproducible mock data")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
