use crate::types::SortOrder;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive dashboard (default)")]
    Dashboard,

    #[command(about = "Search, sort and page through stream records")]
    Streams {
        #[arg(long, default_value = "", help = "Case-insensitive song/artist filter")]
        search: String,

        #[arg(
            long,
            help = "Sort column: song_name, artist, streamed_at, stream_count, user_id"
        )]
        sort: Option<String>,

        #[arg(long, default_value = "asc")]
        order: SortOrder,

        #[arg(
            long,
            default_value_t = 1,
            allow_negative_numbers = true,
            help = "Page to show (clamped into range)"
        )]
        page: i64,

        #[arg(long, help = "Rows per page; must be one of the configured options")]
        per_page: Option<usize>,
    },

    #[command(about = "Show headline metric cards")]
    Metrics,

    #[command(about = "Show chart data")]
    Charts,

    #[command(about = "Inspect or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a default config.toml to the data directory")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
