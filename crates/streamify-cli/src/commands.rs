use anyhow::Result;
use is_terminal::IsTerminal;
use streamify_runtime::{Config, resolve_data_path};

use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use super::handlers::streams::StreamsQuery;
use super::logging::{self, LogTarget};
use crate::types::OutputFormat;

const LOG_FILE: &str = "streamify.log";

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_path(cli.data_dir.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Dashboard);
    let json = cli.format == OutputFormat::Json;

    // The TUI owns the terminal; its logs go to a file in the data dir
    let interactive =
        matches!(command, Commands::Dashboard) && !json && std::io::stdout().is_terminal();
    let log_target = if interactive {
        LogTarget::File(data_dir.join(LOG_FILE))
    } else {
        LogTarget::Stderr
    };
    logging::init(cli.log_level, log_target)?;

    let config_path = Config::path_in(&data_dir);
    let load_config = || -> Result<Config> {
        let mut config = Config::load_from(&config_path)?;
        if let Some(count) = cli.records {
            config.mock.stream_count = count;
        }
        if let Some(seed) = cli.seed {
            config.mock.seed = Some(seed);
        }
        Ok(config)
    };

    match command {
        Commands::Dashboard => handlers::dashboard::handle(&load_config()?, interactive, json),

        Commands::Streams {
            search,
            sort,
            order,
            page,
            per_page,
        } => handlers::streams::handle(
            &load_config()?,
            StreamsQuery {
                search,
                sort,
                order,
                page,
                per_page,
            },
            json,
        ),

        Commands::Metrics => handlers::metrics::handle(&load_config()?, json),

        Commands::Charts => handlers::charts::handle(&load_config()?, json),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&load_config()?, &config_path, json),
            // Init must work even when the existing file is broken
            ConfigCommand::Init { force } => handlers::config::init(&config_path, force, json),
        },
    }
}
