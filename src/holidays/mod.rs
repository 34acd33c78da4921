//! Holiday domain: wire types returned by the holidays API and the
//! one-year query window.

pub mod date_range;
pub mod model;

pub use date_range::{compute_range, DateRange};
pub use model::{Country, Holiday};
