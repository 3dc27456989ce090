use crate::cli::{CliArgs, Command};
use crate::config::{Config, ConfigError};

use super::commands::{self, CommandError};

pub type Result<T> = std::result::Result<T, HandlerError>;

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("{0}")]
    Command(#[from] CommandError),

    #[error("{0}")]
    Config(#[from] ConfigError),
}

/// Main entry point for the application.
///
/// Loads the configuration and dispatches to command handlers.
pub fn run(args: CliArgs) -> Result<()> {
    let config = Config::load_from(args.config().map(|p| p.as_path()))?;
    tracing::debug!("Config: {config:?}");
    let defaults = &config.defaults;

    let output = match args.subcommand() {
        Command::Parse { inputs, format } => commands::parse(inputs, format, defaults)?,
        Command::Url { input, kind } => commands::url(input, kind, defaults)?,
    };
    println!("{output}");

    Ok(())
}
