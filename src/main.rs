//! WebHands - browser agent action core
//!
//! Command line entry point for inspecting the action catalog, the schema
//! offered to the model, the system prompts and the configuration.

mod cli;

use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use webhands_actions_browser::ActionBuilder;
use webhands_config::{Config, ConfigLoader, ConfigValidator};
use webhands_core::{NavigatorPrompt, PlannerPrompt, Prompt};

use cli::{Cli, Commands, OutputFormat, PromptKind};

/// Get the .webhands directory path.
fn webhands_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".webhands"))
        .unwrap_or_else(|| PathBuf::from(".webhands"))
}

fn default_config_path() -> PathBuf {
    webhands_dir().join("config.toml")
}

/// Initialize console tracing. Logs go to stderr so command output stays
/// machine readable.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(default_config_path);
    debug!("Loading configuration from {}", config_path.display());
    let config = ConfigLoader::load_or_default(&config_path)?;

    match cli.command {
        Commands::Catalog { format } => catalog(&config, format),
        Commands::Schema => schema(&config),
        Commands::Prompt { kind } => prompt(&config, kind),
        Commands::CheckConfig { print } => check_config(&config, &config_path, print),
    }
}

/// List the enabled actions.
fn catalog(config: &Config, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let registry = ActionBuilder::build_registry(&config.actions)?;

    match format {
        OutputFormat::Json => {
            let schemas: Vec<_> = registry.iter().map(|a| a.schema()).collect();
            println!("{}", serde_json::to_string_pretty(&schemas)?);
        }
        OutputFormat::Text => {
            println!("{:<24} {:<6} {}", "NAME", "INDEX", "DESCRIPTION");
            println!("{}", "-".repeat(80));
            for action in registry.iter() {
                let index = if action.has_index() { "yes" } else { "-" };
                println!(
                    "{:<24} {:<6} {}",
                    action.name(),
                    index,
                    action.schema().description
                );
            }
        }
    }

    Ok(())
}

/// Print the composed schema.
fn schema(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let registry = ActionBuilder::build_registry(&config.actions)?;
    println!("{}", serde_json::to_string_pretty(&registry.schema()?)?);
    Ok(())
}

/// Print a system prompt.
fn prompt(config: &Config, kind: PromptKind) -> Result<(), Box<dyn std::error::Error>> {
    let text = match kind {
        PromptKind::Navigator => {
            NavigatorPrompt::new(config.agent.max_actions_per_step)
                .system_message()
                .to_string()
        }
        PromptKind::Planner => PlannerPrompt::new().system_message().to_string(),
    };
    println!("{}", text);
    Ok(())
}

/// Validate the configuration, optionally printing the effective values.
fn check_config(
    config: &Config,
    path: &std::path::Path,
    print: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = ConfigValidator::validate(config)?;

    for warning in &result.warnings {
        warn!("{}: {}", warning.path, warning.message);
    }
    for error in &result.errors {
        println!("error: {}: {}", error.path, error.message);
    }

    if !result.is_valid() {
        return Err(format!(
            "{} has {} error(s)",
            path.display(),
            result.errors.len()
        )
        .into());
    }

    info!("Configuration OK: {}", path.display());
    if print {
        print!("{}", ConfigLoader::to_toml(config)?);
    }
    Ok(())
}
