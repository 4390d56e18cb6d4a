//! Turns a stored forecast into the points the chart draws.

use crate::model::{ChartPoint, ForecastResponse};

/// Project a forecast into chart points, one per daily entry, in the order
/// the API supplied them. No forecast yields no points.
pub fn project(response: Option<&ForecastResponse>) -> Vec<ChartPoint> {
    let Some(response) = response else {
        return Vec::new();
    };

    response
        .days
        .iter()
        .map(|day| ChartPoint { date: day.date, temp: day.avg_temp_c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ForecastDay, Location};
    use chrono::NaiveDate;

    fn location() -> Location {
        Location {
            name: "Paris".into(),
            region: "Ile-de-France".into(),
            country: "France".into(),
            lat: 48.87,
            lon: 2.33,
            tz_id: "Europe/Paris".into(),
            localtime: None,
            localtime_epoch: None,
        }
    }

    fn day(y: i32, m: u32, d: u32, temp: f64) -> ForecastDay {
        ForecastDay {
            date: NaiveDate::from_ymd_opt(y, m, d).expect("valid date"),
            date_epoch: None,
            avg_temp_c: temp,
        }
    }

    #[test]
    fn absent_forecast_projects_to_nothing() {
        assert!(project(None).is_empty());
    }

    #[test]
    fn forecast_without_days_projects_to_nothing() {
        let response = ForecastResponse { location: location(), days: vec![] };
        assert!(project(Some(&response)).is_empty());
    }

    #[test]
    fn keeps_api_order_without_sorting() {
        let response = ForecastResponse {
            location: location(),
            days: vec![day(2024, 1, 3, 7.0), day(2024, 1, 1, 5.0), day(2024, 1, 2, -1.5)],
        };

        let points = project(Some(&response));
        let dates: Vec<String> = points.iter().map(|p| p.date.to_string()).collect();
        let temps: Vec<f64> = points.iter().map(|p| p.temp).collect();

        assert_eq!(dates, ["2024-01-03", "2024-01-01", "2024-01-02"]);
        assert_eq!(temps, [7.0, 5.0, -1.5]);
    }

    #[test]
    fn repeated_projection_is_identical() {
        let response = ForecastResponse {
            location: location(),
            days: (1..=7).map(|d| day(2024, 1, d, 4.0 + d as f64)).collect(),
        };

        let first = project(Some(&response));
        let second = project(Some(&response));

        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
        assert_eq!(first[0].temp, 5.0);
        assert_eq!(first[6].temp, 11.0);
    }
}
