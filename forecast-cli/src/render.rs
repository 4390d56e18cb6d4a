//! Text rendering of the controller's current view.

use forecast_core::{ChartPoint, RequestController, RequestState};

pub const LOADING_MESSAGE: &str = "Loading forecast...";
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a city name.";

/// Widest bar, in terminal cells.
pub const BAR_WIDTH: usize = 40;

const POSITIVE_BAR: char = '█';
const NEGATIVE_BAR: char = '▒';

/// Everything the user should currently see, one block per visible element.
pub fn render(controller: &RequestController) -> String {
    let mut blocks = Vec::new();

    if controller.is_empty_input() {
        blocks.push(EMPTY_INPUT_MESSAGE.to_string());
    }

    match controller.state() {
        RequestState::Idle => {}
        RequestState::Loading => blocks.push(LOADING_MESSAGE.to_string()),
        RequestState::Success(response) => {
            blocks.push(render_chart(&response.location.name, &controller.chart_points()));
        }
        RequestState::Failed(err) => blocks.push(err.user_message().to_string()),
    }

    blocks.join("\n")
}

/// Horizontal bar chart: one row per day, bar length proportional to the
/// magnitude of the average temperature.
pub fn render_chart(city: &str, points: &[ChartPoint]) -> String {
    let mut out = format!("City: {city}\n");

    if points.is_empty() {
        out.push_str("(no forecast days)\n");
        return out;
    }

    let max_abs = points.iter().map(|p| p.temp.abs()).fold(0.0_f64, f64::max);
    let has_negative = points.iter().any(|p| p.temp < 0.0);

    out.push('\n');
    for point in points {
        let len = if max_abs > 0.0 {
            ((point.temp.abs() / max_abs) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let fill = if point.temp < 0.0 { NEGATIVE_BAR } else { POSITIVE_BAR };
        let bar: String = std::iter::repeat_n(fill, len).collect();

        out.push_str(&format!(
            "{} │{bar:<width$} {:>6.1}°C\n",
            point.date.format("%Y-%m-%d"),
            point.temp,
            width = BAR_WIDTH,
        ));
    }

    out.push('\n');
    out.push_str(&format!("{POSITIVE_BAR} avg temp (°C)"));
    if has_negative {
        out.push_str(&format!("   {NEGATIVE_BAR} below zero"));
    }
    out.push('\n');

    out
}
