//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - The lookup lifecycle (`controller`) and its single source of state
//! - Abstraction over forecast providers and the WeatherAPI.com client
//! - Projection of a forecast into chart points
//! - Configuration & credentials handling
//!
//! It is used by `forecast-cli`, but can also back any other front end.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod projector;
pub mod provider;

pub use config::Config;
pub use controller::{PendingQuery, RequestController, RequestState, Ticket};
pub use error::{ApiError, QueryError};
pub use model::{ChartPoint, ForecastDay, ForecastQuery, ForecastResponse, Location};
pub use provider::{ForecastProvider, provider_from_config, weatherapi::WeatherApiProvider};
