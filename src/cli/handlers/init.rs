use anyhow::Result;
use colored::Colorize;

use crate::config::{BookshelfConfig, CONFIG_FILE};
use crate::error::BookshelfError;

pub fn handle_init() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE);

    if config_path.exists() {
        return Err(BookshelfError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let config = BookshelfConfig::default();
    config.save(&config_path)?;

    println!(
        "{} default config at {}",
        "Initialized".green(),
        config_path.display()
    );
    Ok(())
}
