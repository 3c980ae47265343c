use anyhow::Context;
use clap::{Parser, Subcommand};
use clima_core::{
    Config, SearchSession, WeatherRequest, classify, feels_like::estimate_with_model,
    provider::provider_from_config,
};
use inquire::{CustomType, Text};
use tracing::debug;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "clima", version, about = "Current and hourly weather for a city")]
pub struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the default country and hourly window.
    Configure,

    /// Show current and hourly weather for a city.
    Show {
        /// City name, e.g. "Medellín".
        city: String,

        /// ISO country code to disambiguate the city, e.g. "CO".
        #[arg(long)]
        country: Option<String>,

        /// Number of hourly entries; 0 disables the hourly block.
        #[arg(long)]
        hours: Option<usize>,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Describe a WMO weather code.
    Classify {
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },

    /// Compute the apparent temperature for a reading.
    FeelsLike {
        /// Temperature in °C.
        #[arg(allow_negative_numbers = true)]
        temperature: f64,

        /// Relative humidity in percent.
        humidity: f64,

        /// Wind speed in m/s.
        wind_speed: f64,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure()?,
            Command::Show { city, country, hours, json } => show(&city, country, hours, json).await?,
            Command::Classify { code } => {
                println!("{}", render::classification(code, &classify(code)));
            }
            Command::FeelsLike { temperature, humidity, wind_speed } => {
                let (value, model) = estimate_with_model(temperature, humidity, wind_speed);
                println!("{}", render::feels_like(value, model));
            }
        }

        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let country = Text::new("Default country code (leave empty for none):")
        .with_default(config.default_country().unwrap_or_default())
        .prompt()
        .context("Failed to read default country")?;
    config.set_default_country(&country);

    let hours = CustomType::<usize>::new("Hourly entries to show:")
        .with_default(config.hours())
        .with_error_message("Please enter a whole number")
        .prompt()
        .context("Failed to read hour count")?;
    config.set_hours(hours);

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(
    city: &str,
    country: Option<String>,
    hours: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::load()?;
    let mut session = SearchSession::new();

    let request = WeatherRequest {
        city: session.begin(city)?.to_string(),
        country: country.or_else(|| config.default_country().map(str::to_string)),
        hours: hours.unwrap_or_else(|| config.hours()),
    };
    debug!(?request, "resolved request");

    let provider = provider_from_config(&config)?;
    match provider.get_weather(&request).await {
        Ok(report) => session.complete(report),
        Err(err) => session.fail(&err),
    }

    let report = session.finish().map_err(anyhow::Error::msg)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::report(&report));
    }

    Ok(())
}
