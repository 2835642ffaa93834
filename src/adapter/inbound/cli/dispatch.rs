//! Routing parsed commands to their handlers.

use std::path::Path;

use super::command::{Commands, ConfigCommand};
use super::{catalog, config, search};
use crate::config::Config;
use crate::error::Result;

impl Commands {
    /// Configuration file named on the command line, if any.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        let arg = match self {
            Commands::Search(args) => &args.config,
            Commands::Catalog(args) => &args.config,
            Commands::Config(ConfigCommand::Show(arg) | ConfigCommand::Validate(arg)) => arg,
        };
        arg.config.as_deref()
    }
}

/// Run a parsed command.
pub fn dispatch(command: &Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Search(args) => search::execute(args, config),
        Commands::Catalog(args) => catalog::execute(args, config),
        Commands::Config(ConfigCommand::Show(_)) => {
            config::execute_show(config, command.config_path())
        }
        Commands::Config(ConfigCommand::Validate(_)) => {
            config::execute_validate(config, command.config_path())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::inbound::cli::command::Cli;
    use clap::Parser;

    #[test]
    fn test_config_path_per_command() {
        let cli = Cli::try_parse_from([
            "multileg", "search", "--catalog", "b.json", "--stake", "1", "--win", "5", "-c",
            "m.toml",
        ])
        .unwrap();
        assert_eq!(cli.command.config_path(), Some(Path::new("m.toml")));

        let cli = Cli::try_parse_from(["multileg", "config", "show"]).unwrap();
        assert_eq!(cli.command.config_path(), None);
    }
}
