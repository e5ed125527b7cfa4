use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use wxcalc_models::{
    cloud_base::CloudBaseRequest,
    turbulence::{EnvironmentSize, EnvironmentType, Season, TimeOfDay, TurbulenceRequest},
};
use wxcalc_units::{HeightUnit, PressureUnit, TemperatureUnit};

use crate::config::Config;

/// Aviation weather estimates: cloud base height and turbulence potential.
#[derive(Parser, Debug)]
#[command(name = "wxcalc", version, about, long_about = None)]
pub struct Cli {
    /// TOML file with form defaults
    #[arg(long, global = true, env = "WXCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate the cloud base height
    CloudBase(CloudBaseArgs),

    /// Score the turbulence potential
    Turbulence(TurbulenceArgs),
}

#[derive(Args, Debug)]
pub struct CloudBaseArgs {
    /// Air temperature
    #[arg(short, long, allow_hyphen_values = true)]
    pub temperature: String,

    /// Dew point, in the same unit as the temperature
    #[arg(short, long, allow_hyphen_values = true)]
    pub dew_point: String,

    /// Station pressure [default: from config, 1013.25]
    #[arg(short, long)]
    pub pressure: Option<String>,

    /// Barometer unit: hPa, inHg, or mmHg
    #[arg(long)]
    pub pressure_unit: Option<PressureUnit>,

    /// Airport elevation
    #[arg(short, long, allow_hyphen_values = true)]
    pub elevation: String,

    /// Temperatures are in °F
    #[arg(long)]
    pub fahrenheit: bool,

    /// Elevation and reported heights are in feet
    #[arg(long)]
    pub feet: bool,
}

impl CloudBaseArgs {
    /// Fills a request from the arguments, falling back to config defaults.
    pub fn into_request(self, config: &Config) -> CloudBaseRequest {
        let defaults = &config.cloud_base;

        let temperature_unit = if self.fahrenheit {
            TemperatureUnit::Fahrenheit
        } else {
            defaults.temperature_unit
        };
        let height_unit = if self.feet {
            HeightUnit::Feet
        } else {
            defaults.height_unit
        };

        CloudBaseRequest {
            temperature: self.temperature,
            dew_point: self.dew_point,
            pressure: self.pressure.unwrap_or_else(|| defaults.pressure.clone()),
            elevation: self.elevation,
            temperature_unit,
            pressure_unit: self.pressure_unit.unwrap_or(defaults.pressure_unit),
            elevation_unit: height_unit,
            output_unit: height_unit,
        }
    }
}

#[derive(Args, Debug)]
pub struct TurbulenceArgs {
    /// Temperature in °C
    #[arg(short, long, allow_hyphen_values = true)]
    pub temperature: String,

    /// Wind speed in knots
    #[arg(short, long)]
    pub wind_speed: String,

    /// day or night
    #[arg(long)]
    pub time_of_day: Option<TimeOfDay>,

    /// spring, summer, fall, or winter
    #[arg(long)]
    pub season: Option<Season>,

    /// lake or city
    #[arg(long)]
    pub environment_type: Option<EnvironmentType>,

    /// small, medium, or large
    #[arg(long)]
    pub environment_size: Option<EnvironmentSize>,
}

impl TurbulenceArgs {
    /// Fills a request from the arguments, falling back to config defaults.
    pub fn into_request(self, config: &Config) -> TurbulenceRequest {
        let defaults = &config.turbulence;

        TurbulenceRequest {
            temperature: self.temperature,
            wind_speed: self.wind_speed,
            time_of_day: self.time_of_day.unwrap_or(defaults.time_of_day),
            season: self.season.unwrap_or(defaults.season),
            environment_type: self.environment_type.unwrap_or(defaults.environment_type),
            environment_size: self.environment_size.unwrap_or(defaults.environment_size),
        }
    }
}
