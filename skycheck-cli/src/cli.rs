use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser, Subcommand};
use inquire::{Password, Select};
use skycheck_core::{Config, Unit, WeatherService};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{interactive, output};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycheck", version, about = "Current weather and advice for any location")]
pub struct Cli {
    /// Config file to use instead of the default one ($SKYCHECK_CONFIG also works).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and default unit.
    ///
    /// Prompts for both when no flag is given.
    Configure {
        #[arg(long)]
        api_key: Option<String>,

        /// celsius or fahrenheit.
        #[arg(long)]
        unit: Option<Unit>,
    },

    /// Show current weather for a location.
    Show {
        /// Location name, e.g. "Paris" or "New York".
        #[arg(required = true, num_args = 1..)]
        location: Vec<String>,

        /// celsius or fahrenheit; defaults to the configured unit.
        #[arg(short, long)]
        unit: Option<Unit>,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Search repeatedly from an interactive prompt.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let path = Config::resolve_path(self.config)?;
        debug!(path = %path.display(), "using config file");

        match self.command {
            Command::Configure { api_key, unit } => configure(&path, api_key, unit),
            Command::Show { location, unit, json } => {
                let config = Config::load(&path)?;
                let unit = unit.unwrap_or(config.default_unit);
                let service = WeatherService::from_config(&config)?;

                show(&service, &location.join(" "), unit, json).await
            }
            Command::Interactive => {
                let config = Config::load(&path)?;
                let service = WeatherService::from_config(&config)?;

                interactive::run(service, config.default_unit).await
            }
        }
    }
}

fn configure(path: &Path, api_key: Option<String>, unit: Option<Unit>) -> Result<()> {
    // Environment overrides are not applied here so they never end up on disk.
    let mut config = Config::load_from(path)?;

    if api_key.is_none() && unit.is_none() {
        let key = Password::new("OpenWeather API key:")
            .without_confirmation()
            .prompt()
            .context("Failed to read API key")?;

        let units = Unit::all().to_vec();
        let cursor = units.iter().position(|u| *u == config.default_unit).unwrap_or(0);
        let unit = Select::new("Default unit:", units)
            .with_starting_cursor(cursor)
            .prompt()
            .context("Failed to read default unit")?;

        config.set_api_key(key);
        config.default_unit = unit;
    } else {
        if let Some(key) = api_key {
            config.set_api_key(key);
        }
        if let Some(unit) = unit {
            config.default_unit = unit;
        }
    }

    if !config.is_configured() {
        return Err(anyhow!("API key must not be empty."));
    }

    config.save_to(path)?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

async fn show(service: &WeatherService, location: &str, unit: Unit, json: bool) -> Result<()> {
    let report = service
        .lookup(location, unit)
        .await
        .map_err(|err| anyhow!(err.user_message()))?;

    if json {
        let text =
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{text}");
    } else {
        print!("{}", output::render_report(&report));
    }

    Ok(())
}
