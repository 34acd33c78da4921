use crate::api::HolidayQuery;
use crate::app::event::RequestId;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FetchCountries { request_id: RequestId, language_iso_code: String },
    FetchHolidays { request_id: RequestId, query: HolidayQuery },
    Quit,
}
