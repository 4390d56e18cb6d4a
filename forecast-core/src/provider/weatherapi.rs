use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::ApiError,
    model::{ForecastDay, ForecastQuery, ForecastResponse, Location},
};

use super::ForecastProvider;

pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1/forecast.json";

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ForecastProvider for WeatherApiProvider {
    async fn get_forecast(&self, query: &ForecastQuery) -> Result<ForecastResponse, ApiError> {
        debug!(url = %self.base_url, city = query.city(), days = query.days(), "requesting forecast");

        let days = query.days().to_string();

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query.city()),
                ("days", days.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16(), body: truncate_body(&body) });
        }

        parse_forecast(&body)
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
    #[serde(default)]
    tz_id: String,
    localtime: Option<String>,
    localtime_epoch: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WaDay {
    avgtemp_c: f64,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    date: String,
    date_epoch: Option<i64>,
    day: WaDay,
}

#[derive(Debug, Deserialize, Default)]
struct WaForecast {
    // Kept loose so one bad entry does not sink the whole response.
    #[serde(default)]
    forecastday: Vec<serde_json::Value>,
}

// The API also repeats the location fields at the top level; they are ignored.
#[derive(Debug, Deserialize)]
struct WaForecastResponse {
    location: WaLocation,
    #[serde(default)]
    forecast: Option<WaForecast>,
}

/// Parse a WeatherAPI.com forecast body into a typed response.
///
/// The envelope must be JSON with a `location.name`. Daily entries are read
/// one by one and any entry without a `YYYY-MM-DD` date or a numeric
/// `day.avgtemp_c` is dropped, so the result holds every entry that could be
/// understood.
pub fn parse_forecast(body: &str) -> Result<ForecastResponse, ApiError> {
    let parsed: WaForecastResponse =
        serde_json::from_str(body).map_err(|err| ApiError::Malformed(err.to_string()))?;

    let entries = parsed.forecast.unwrap_or_default().forecastday;
    let total = entries.len();

    let days: Vec<ForecastDay> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| match forecast_day(value) {
            Ok(day) => Some(day),
            Err(reason) => {
                debug!(index = idx, %reason, "skipping forecast entry");
                None
            }
        })
        .collect();

    if days.len() < total {
        debug!(kept = days.len(), total, "dropped malformed forecast entries");
    }

    let loc = parsed.location;

    Ok(ForecastResponse {
        location: Location {
            name: loc.name,
            region: loc.region,
            country: loc.country,
            lat: loc.lat,
            lon: loc.lon,
            tz_id: loc.tz_id,
            localtime: loc.localtime,
            localtime_epoch: loc.localtime_epoch,
        },
        days,
    })
}

fn forecast_day(value: serde_json::Value) -> Result<ForecastDay, String> {
    let raw: WaForecastDay = serde_json::from_value(value).map_err(|err| err.to_string())?;

    let date = NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d")
        .map_err(|err| format!("bad date '{}': {err}", raw.date))?;

    Ok(ForecastDay {
        date,
        date_epoch: raw.date_epoch.and_then(unix_to_utc),
        avg_temp_c: raw.day.avgtemp_c,
    })
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
