use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use forecast_core::{
    Config, ForecastProvider, QueryError, RequestController, RequestState, provider_from_config,
};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};

use crate::render::{self, EMPTY_INPUT_MESSAGE, LOADING_MESSAGE};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Average daily temperature chart for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key and, optionally, a custom forecast endpoint.
    Configure,

    /// Show the forecast chart for a city.
    Show {
        /// City name, e.g. "Paris".
        city: String,

        /// Number of forecast days; defaults to the configured value (7).
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=14))]
        days: Option<u8>,

        /// Print chart points as JSON instead of drawing the chart.
        #[arg(long)]
        json: bool,
    },

    /// Prompt for cities until Esc or Ctrl-C.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, days, json } => show(&city, days, json).await,
            Command::Interactive => interactive().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        bail!("API key must not be empty");
    }

    let base_url = Text::new("Forecast endpoint:")
        .with_default(config.base_url())
        .prompt()
        .context("Failed to read forecast endpoint")?;

    config.set_api_key(api_key.trim().to_string());
    config.base_url = Some(base_url.trim().to_string()).filter(|url| !url.is_empty());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn controller_from_config(days: Option<u8>) -> anyhow::Result<RequestController> {
    let mut config = Config::load()?.with_env_overrides();
    if let Some(days) = days {
        config.days = days;
    }
    config.validate()?;

    let provider = provider_from_config(&config)?;
    Ok(RequestController::with_days(provider, config.days))
}

async fn show(city: &str, days: Option<u8>, json: bool) -> anyhow::Result<()> {
    let mut controller = controller_from_config(days)?;

    lookup(&mut controller, city).await;

    match controller.state() {
        RequestState::Success(_) if json => {
            println!("{}", serde_json::to_string_pretty(&controller.chart_points())?);
        }
        RequestState::Success(_) => println!("{}", render::render(&controller)),
        RequestState::Failed(err) => bail!(err.user_message()),
        RequestState::Idle | RequestState::Loading => bail!(EMPTY_INPUT_MESSAGE),
    }

    Ok(())
}

async fn interactive() -> anyhow::Result<()> {
    let mut controller = controller_from_config(None)?;

    loop {
        controller.on_input_focused();

        let input = match Text::new("City:").with_placeholder("Enter your city name").prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city name"),
        };

        lookup(&mut controller, &input).await;

        let view = render::render(&controller);
        if !view.is_empty() {
            println!("{view}");
        }
    }

    Ok(())
}

/// Run one lookup, showing the loading line while the request is in flight.
async fn lookup(controller: &mut RequestController, city: &str) {
    let pending = match controller.begin(city) {
        Ok(pending) => pending,
        Err(QueryError::EmptyInput) => return,
    };

    eprintln!("{LOADING_MESSAGE}");
    let result = controller.provider().get_forecast(&pending.query).await;
    controller.complete(pending.ticket, result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_parses_city_and_flags() {
        let cli = Cli::try_parse_from(["forecast", "show", "Paris", "--days", "3", "--json"])
            .expect("valid args");

        match cli.command {
            Command::Show { city, days, json } => {
                assert_eq!(city, "Paris");
                assert_eq!(days, Some(3));
                assert!(json);
            }
            other => panic!("expected show, got {other:?}"),
        }
    }

    #[test]
    fn show_rejects_out_of_range_days() {
        assert!(Cli::try_parse_from(["forecast", "show", "Paris", "--days", "0"]).is_err());
        assert!(Cli::try_parse_from(["forecast", "show", "Paris", "--days", "15"]).is_err());
    }
}
