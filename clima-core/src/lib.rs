//! Core library for the `clima` CLI.
//!
//! This crate defines:
//! - Weather code classification and the "feels like" estimate
//! - Assembly of provider data into a displayable report
//! - The Open-Meteo client and configuration handling
//!
//! It is used by `clima-cli`, but can also be reused by other binaries or services.

pub mod condition;
pub mod config;
pub mod error;
pub mod feels_like;
pub mod forecast;
pub mod model;
pub mod provider;
pub mod session;

pub use condition::{Condition, ConditionResult, classify};
pub use config::Config;
pub use error::LookupError;
pub use feels_like::{FeelsLikeModel, estimate};
pub use model::{HourlyRecord, Location, RawReading, WeatherReport, WeatherRequest};
pub use provider::WeatherProvider;
pub use session::SearchSession;
