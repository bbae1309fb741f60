use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use bookshelf::cli::{Cli, Commands};
use bookshelf::config::BookshelfConfig;
use bookshelf::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone().map(PathBuf::from));

    let config_path = cli.config.clone();

    match cli.command {
        Commands::Init => handle_init(),
        Commands::Serve { port, bind } => handle_serve(load_context(config_path)?, port, bind),
        Commands::Query { query, variables } => {
            handle_query(load_context(config_path)?, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(load_context(config_path)?, mutation, variables),
        Commands::Schema => handle_schema(load_context(config_path)?),
    }
}

fn load_context(config_path: Option<String>) -> Result<CommandContext> {
    let config = BookshelfConfig::load(config_path.as_deref().map(Path::new))
        .context("Failed to load bookshelf configuration")?;
    Ok(CommandContext::new(config))
}
