//! Runs API requests in the background.
//!
//! Each request is spawned as its own task and reports back to the event
//! loop as an [`AppEvent`] carrying the request id it was issued with. The
//! manager never looks at state; deciding whether a response is still wanted
//! is the event handler's job.

use crate::api::client::{HolidayQuery, HolidaysSource};
use crate::app::event::{AppEvent, RequestId};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct FetchManager<S> {
    source: Arc<S>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl<S: HolidaysSource> FetchManager<S> {
    pub fn new(source: S, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            source: Arc::new(source),
            event_tx,
        }
    }

    pub fn fetch_countries(&self, request_id: RequestId, language_iso_code: String) {
        let source = Arc::clone(&self.source);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_countries(&language_iso_code).await;
            if let Err(ref e) = result {
                tracing::warn!(request_id, error = %e, "countries request failed");
            }
            let _ = event_tx.send(AppEvent::CountriesLoaded { request_id, result });
        });
    }

    pub fn fetch_holidays(&self, request_id: RequestId, query: HolidayQuery) {
        let source = Arc::clone(&self.source);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_holidays(&query).await;
            if let Err(ref e) = result {
                tracing::warn!(
                    request_id,
                    country = %query.country_iso_code,
                    error = %e,
                    "holidays request failed"
                );
            }
            let _ = event_tx.send(AppEvent::HolidaysLoaded {
                request_id,
                country_iso_code: query.country_iso_code,
                result,
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::{ApiError, ApiResult};
    use crate::holidays::model::LocalizedText;
    use crate::holidays::{compute_range, Country, Holiday};
    use chrono::NaiveDate;
    use reqwest::StatusCode;
    use std::time::Duration;

    /// Answers from memory. Holidays for "NL" are delayed so that a later
    /// request can overtake it.
    struct FakeSource;

    impl HolidaysSource for FakeSource {
        async fn fetch_countries(&self, language_iso_code: &str) -> ApiResult<Vec<Country>> {
            if language_iso_code != "EN" {
                return Err(ApiError::Status(StatusCode::BAD_REQUEST));
            }
            Ok(vec![Country {
                iso_code: "NL".into(),
                name: vec![LocalizedText {
                    language: "EN".into(),
                    text: "Netherlands".into(),
                }],
                official_languages: vec!["NL".into()],
            }])
        }

        async fn fetch_holidays(&self, query: &HolidayQuery) -> ApiResult<Vec<Holiday>> {
            if query.country_iso_code == "NL" {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            Ok(vec![Holiday {
                id: format!("{}-1", query.country_iso_code),
                name: vec![],
                start_date: "2026-12-25".into(),
                end_date: "2026-12-25".into(),
                kind: "Public".into(),
                regional_scope: "National".into(),
                nationwide: Some(true),
                subdivisions: vec![],
            }])
        }
    }

    fn query(code: &str) -> HolidayQuery {
        HolidayQuery {
            country_iso_code: code.into(),
            range: compute_range(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()),
            language_iso_code: "EN".into(),
        }
    }

    #[tokio::test]
    async fn test_countries_event_carries_request_id() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let manager = FetchManager::new(FakeSource, tx);

        manager.fetch_countries(7, "EN".into());

        match rx.recv().await {
            Some(AppEvent::CountriesLoaded { request_id, result }) => {
                assert_eq!(request_id, 7);
                assert_eq!(result.unwrap()[0].iso_code, "NL");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failure_is_reported_not_swallowed() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let manager = FetchManager::new(FakeSource, tx);

        manager.fetch_countries(1, "XX".into());

        match rx.recv().await {
            Some(AppEvent::CountriesLoaded { request_id, result }) => {
                assert_eq!(request_id, 1);
                assert!(matches!(result, Err(ApiError::Status(_))));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_responses_can_complete_out_of_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let manager = FetchManager::new(FakeSource, tx);

        manager.fetch_holidays(1, query("NL"));
        manager.fetch_holidays(2, query("DE"));

        let mut order = Vec::new();
        for _ in 0..2 {
            if let Some(AppEvent::HolidaysLoaded {
                request_id,
                country_iso_code,
                ..
            }) = rx.recv().await
            {
                order.push((request_id, country_iso_code));
            }
        }
        assert_eq!(order, vec![(2, "DE".to_string()), (1, "NL".to_string())]);
    }
}
