//! OpenHolidays API access: the HTTP client and the background fetch manager.

pub mod client;
pub mod error;
pub mod manager;

pub use client::{HolidayQuery, HolidaysSource, HttpHolidaysClient};
pub use error::ApiError;
pub use manager::FetchManager;
