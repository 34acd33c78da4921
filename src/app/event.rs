use crate::api::ApiError;
use crate::holidays::{Country, Holiday};
use crossterm::event::Event as CrosstermEvent;

/// Monotonic id tagged onto each fetch so late responses can be discarded.
pub type RequestId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Countries request finished
    CountriesLoaded {
        request_id: RequestId,
        result: Result<Vec<Country>, ApiError>,
    },

    /// Public-holidays request finished
    HolidaysLoaded {
        request_id: RequestId,
        country_iso_code: String,
        result: Result<Vec<Holiday>, ApiError>,
    },

    /// Tick for UI refresh
    Tick,
}
