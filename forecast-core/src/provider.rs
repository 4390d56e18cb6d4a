use crate::{
    Config, ForecastQuery, ForecastResponse, error::ApiError,
    provider::weatherapi::WeatherApiProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// Source of multi-day forecasts.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn get_forecast(&self, query: &ForecastQuery) -> Result<ForecastResponse, ApiError>;
}

/// Construct the WeatherAPI.com provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn ForecastProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
                 Hint: run `forecast configure` or set WEATHER_API_KEY."
        )
    })?;

    let provider = WeatherApiProvider::new(api_key.to_owned(), config.base_url().to_owned());

    Ok(Box::new(provider))
}
