use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// Days requested when the caller does not say otherwise.
pub const DEFAULT_FORECAST_DAYS: u8 = 7;

/// A validated lookup: the city name is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastQuery {
    city: String,
    days: u8,
}

impl ForecastQuery {
    /// Build a query from raw user input. Surrounding whitespace is dropped;
    /// input that is empty afterwards is rejected.
    pub fn new(city: &str, days: u8) -> Result<Self, QueryError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(QueryError::EmptyInput);
        }

        Ok(Self { city: city.to_string(), days })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn days(&self) -> u8 {
        self.days
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub tz_id: String,
    pub localtime: Option<String>,
    pub localtime_epoch: Option<i64>,
}

/// One day's summary within a multi-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub date_epoch: Option<DateTime<Utc>>,
    pub avg_temp_c: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub location: Location,
    /// In the order the API supplied them.
    pub days: Vec<ForecastDay>,
}

/// Display-only (date, temperature) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub temp: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_rejects_blank_input() {
        for input in ["", " ", "\t\n", "   "] {
            assert_eq!(ForecastQuery::new(input, 7), Err(QueryError::EmptyInput));
        }
    }

    #[test]
    fn query_trims_city() {
        let query = ForecastQuery::new("  Paris ", 7).expect("non-empty city");

        assert_eq!(query.city(), "Paris");
        assert_eq!(query.days(), 7);
    }

    #[test]
    fn chart_point_serializes_date_as_plain_day() {
        let point = ChartPoint {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            temp: 5.0,
        };

        let json = serde_json::to_value(point).expect("serializable");
        assert_eq!(json, serde_json::json!({ "date": "2024-01-01", "temp": 5.0 }));
    }
}
