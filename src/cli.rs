//! CLI definitions for WebHands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// WebHands CLI.
#[derive(Parser)]
#[command(name = "webhands")]
#[command(about = "Action dispatch core for a browser-driving agent")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.webhands/config.toml)
    #[arg(short, long, global = true, env = "WEBHANDS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the enabled actions
    Catalog {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the composed action schema offered to the model
    Schema,

    /// Print a system prompt
    Prompt {
        #[arg(long, value_enum, default_value_t = PromptKind::Navigator)]
        kind: PromptKind,
    },

    /// Validate the configuration file
    CheckConfig {
        /// Print the effective configuration as TOML
        #[arg(long)]
        print: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum PromptKind {
    Navigator,
    Planner,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_config_print_flag() {
        let cli = Cli::try_parse_from(["webhands", "check-config", "--print"]).unwrap();
        assert!(matches!(cli.command, Commands::CheckConfig { print: true }));

        let cli = Cli::try_parse_from(["webhands", "check-config"]).unwrap();
        assert!(matches!(cli.command, Commands::CheckConfig { print: false }));
    }

    #[test]
    fn test_config_is_global() {
        let cli = Cli::try_parse_from(["webhands", "schema", "--config", "~/w.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("~/w.toml")));
    }
}
