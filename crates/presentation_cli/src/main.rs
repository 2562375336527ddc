//! FuzzyWeather CLI
//!
//! Command-line front end for the comfort classification engine.

#![allow(clippy::print_stdout)]

mod render;

use std::path::PathBuf;

use anyhow::Context;
use application::{ComfortService, Observation};
use clap::{Parser, Subcommand};
use domain::{
    DerivedIndex, HumidityScale, RelativeHumidity, SpeedUnit, Temperature, TemperatureUnit,
    WindSpeed, dewpoint_comfort, heat_index, temperature_comfort, wind_chill, wind_comfort,
};
use infrastructure::{AppConfig, UnitsConfig, init_telemetry};
use tracing::debug;

/// FuzzyWeather CLI
#[derive(Debug, Parser)]
#[command(name = "fuzzyweather-cli")]
#[command(author, version, about = "FuzzyWeather comfort classification CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./config.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Unit of temperature inputs: f, c or k (default: from configuration)
    #[arg(long, global = true)]
    temp_unit: Option<TemperatureUnit>,

    /// Unit of wind speed inputs: mph, kmh, m/s or kn (default: from configuration)
    #[arg(long, global = true)]
    wind_unit: Option<SpeedUnit>,

    /// Scale of humidity inputs: percent or fraction (default: from configuration)
    #[arg(long, global = true)]
    humidity_scale: Option<HumidityScale>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify a full observation
    ///
    /// Picks wind chill below 50 °F and heat index above 72 °F, then reports
    /// temperature, wind and dewpoint comfort.
    /// Example: fuzzyweather-cli assess --temperature 20 --wind 5 --humidity 70 --dewpoint 15
    Assess {
        /// Air temperature
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,

        /// Wind speed
        #[arg(long, allow_negative_numbers = true)]
        wind: f64,

        /// Relative humidity
        #[arg(long)]
        humidity: f64,

        /// Dewpoint temperature
        #[arg(long, allow_negative_numbers = true)]
        dewpoint: f64,
    },

    /// Calculate the wind chill index
    WindChill {
        /// Air temperature
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,

        /// Wind speed
        #[arg(long, allow_negative_numbers = true)]
        wind: f64,
    },

    /// Calculate the heat index
    HeatIndex {
        /// Air temperature
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,

        /// Relative humidity
        #[arg(long)]
        humidity: f64,
    },

    /// Classify a dewpoint
    Dewpoint {
        /// Dewpoint temperature
        #[arg(allow_negative_numbers = true)]
        dewpoint: f64,
    },

    /// Classify a wind speed
    Wind {
        /// Wind speed
        #[arg(allow_negative_numbers = true)]
        speed: f64,
    },

    /// Classify a temperature with an optional, precomputed index
    Temperature {
        /// Air temperature
        #[arg(allow_negative_numbers = true)]
        temperature: f64,

        /// Wind chill index in °F
        #[arg(long, allow_negative_numbers = true, conflicts_with = "heat_index")]
        wind_chill: Option<i32>,

        /// Heat index in °F
        #[arg(long, allow_negative_numbers = true)]
        heat_index: Option<i32>,
    },

    /// Print the effective configuration
    Config,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Apply command-line unit overrides on top of the configured units
fn resolve_units(cli: &Cli, configured: UnitsConfig) -> UnitsConfig {
    UnitsConfig {
        temperature: cli.temp_unit.unwrap_or(configured.temperature),
        wind_speed: cli.wind_unit.unwrap_or(configured.wind_speed),
        humidity: cli.humidity_scale.unwrap_or(configured.humidity),
    }
}

fn humidity(value: f64, scale: HumidityScale) -> anyhow::Result<RelativeHumidity> {
    RelativeHumidity::new(value, scale).context("invalid --humidity")
}

/// Execute a parsed command and return its rendered output
fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<String> {
    let units = resolve_units(cli, config.units);
    let temperature_of = |value| Temperature::new(value, units.temperature);
    let wind_of = |value| WindSpeed::new(value, units.wind_speed);

    let output = match cli.command {
        Commands::Assess {
            temperature,
            wind,
            humidity: rh,
            dewpoint,
        } => {
            let observation = Observation::new(
                temperature_of(temperature),
                wind_of(wind),
                humidity(rh, units.humidity)?,
                temperature_of(dewpoint),
            );
            let report = ComfortService::new().assess(&observation);
            render::report(&report, cli.json)?
        },

        Commands::WindChill { temperature, wind } => {
            let value = wind_chill(temperature_of(temperature), wind_of(wind));
            render::index("wind_chill", value, cli.json)?
        },

        Commands::HeatIndex {
            temperature,
            humidity: rh,
        } => {
            let value = heat_index(humidity(rh, units.humidity)?, temperature_of(temperature));
            render::index("heat_index", value, cli.json)?
        },

        Commands::Dewpoint { dewpoint } => {
            let level = dewpoint_comfort(temperature_of(dewpoint));
            render::level("dewpoint", &level, cli.json)?
        },

        Commands::Wind { speed } => {
            let level = wind_comfort(wind_of(speed));
            render::level("wind", &level, cli.json)?
        },

        Commands::Temperature {
            temperature,
            wind_chill,
            heat_index,
        } => {
            let index = match (wind_chill, heat_index) {
                (Some(wc), _) => DerivedIndex::WindChill(wc),
                (None, Some(hi)) => DerivedIndex::HeatIndex(hi),
                (None, None) => DerivedIndex::None,
            };
            let level = temperature_comfort(temperature_of(temperature), index);
            render::level("temperature", &level, cli.json)?
        },

        Commands::Config => {
            if cli.json {
                serde_json::to_string_pretty(config)?
            } else {
                config.to_toml()?
            }
        },
    };

    Ok(output)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => AppConfig::load().context("failed to load configuration")?,
    };

    // Set up logging; -v flags override the configured filter
    let telemetry = if cli.verbose > 0 {
        config
            .telemetry
            .clone()
            .with_log_filter(log_filter_from_verbosity(cli.verbose))
    } else {
        config.telemetry.clone()
    };
    init_telemetry(&telemetry)?;
    debug!(command = ?cli.command, json = cli.json, "Running command");

    let output = run(&cli, &config)?;
    println!("{output}");

    Ok(())
}
