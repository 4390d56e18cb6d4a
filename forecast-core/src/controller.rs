//! Lifecycle of forecast lookups.
//!
//! The controller owns exactly one [`RequestState`] plus the empty-input flag.
//! A lookup is split into [`RequestController::begin`], which validates input
//! and enters `Loading`, and [`RequestController::complete`], which applies
//! the outcome. Every begun lookup gets a [`Ticket`]; only the newest ticket's
//! outcome is applied, so an older request that resolves late can never
//! overwrite a newer one.

use tracing::{info, warn};

use crate::{
    ForecastProvider,
    error::{ApiError, QueryError},
    model::{ChartPoint, DEFAULT_FORECAST_DAYS, ForecastQuery, ForecastResponse},
    projector,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(ForecastResponse),
    Failed(ApiError),
}

/// Identifies one begun lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// A lookup that has entered `Loading` and still needs its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub ticket: Ticket,
    pub query: ForecastQuery,
}

#[derive(Debug)]
pub struct RequestController {
    provider: Box<dyn ForecastProvider>,
    days: u8,
    state: RequestState,
    empty_input: bool,
    latest: u64,
}

impl RequestController {
    pub fn new(provider: Box<dyn ForecastProvider>) -> Self {
        Self::with_days(provider, DEFAULT_FORECAST_DAYS)
    }

    pub fn with_days(provider: Box<dyn ForecastProvider>, days: u8) -> Self {
        Self { provider, days, state: RequestState::Idle, empty_input: false, latest: 0 }
    }

    /// Look up the forecast for `city` and wait for the outcome.
    ///
    /// Blank input sets the empty-input flag and returns
    /// [`QueryError::EmptyInput`] without touching the provider or the
    /// current state. Otherwise the outcome, success or failure, is stored in
    /// [`Self::state`].
    pub async fn submit_query(&mut self, city: &str) -> Result<(), QueryError> {
        let pending = self.begin(city)?;
        let result = self.provider.get_forecast(&pending.query).await;
        self.complete(pending.ticket, result);
        Ok(())
    }

    /// Validate `city`, drop any displayed forecast and enter `Loading`.
    pub fn begin(&mut self, city: &str) -> Result<PendingQuery, QueryError> {
        let query = match ForecastQuery::new(city, self.days) {
            Ok(query) => query,
            Err(err) => {
                self.empty_input = true;
                return Err(err);
            }
        };

        self.latest += 1;
        let ticket = Ticket(self.latest);
        self.state = RequestState::Loading;
        info!(city = query.city(), ticket = ticket.0, "forecast lookup started");

        Ok(PendingQuery { ticket, query })
    }

    /// Apply the outcome of the lookup identified by `ticket`.
    ///
    /// Returns `false` and leaves the state alone when a newer lookup has
    /// begun since.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<ForecastResponse, ApiError>,
    ) -> bool {
        if ticket.0 != self.latest {
            warn!(ticket = ticket.0, latest = self.latest, "discarding stale forecast result");
            return false;
        }

        self.state = match result {
            Ok(response) => {
                info!(
                    location = %response.location.name,
                    days = response.days.len(),
                    "forecast lookup succeeded"
                );
                RequestState::Success(response)
            }
            Err(err) => {
                warn!(error = %err, "forecast lookup failed");
                RequestState::Failed(err)
            }
        };
        true
    }

    /// The user is back in the input: hide validation and error messages.
    pub fn on_input_focused(&mut self) {
        self.empty_input = false;
        // The error lives in `Failed`; with it gone there is nothing to show.
        if matches!(self.state, RequestState::Failed(_)) {
            self.state = RequestState::Idle;
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading)
    }

    pub fn is_empty_input(&self) -> bool {
        self.empty_input
    }

    pub fn forecast(&self) -> Option<&ForecastResponse> {
        match &self.state {
            RequestState::Success(response) => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.state {
            RequestState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn chart_points(&self) -> Vec<ChartPoint> {
        projector::project(self.forecast())
    }

    pub fn provider(&self) -> &dyn ForecastProvider {
        self.provider.as_ref()
    }
}
