//! HTTP client for the OpenHolidays REST API.

use crate::api::error::{ApiError, ApiResult};
use crate::config::ApiConfig;
use crate::holidays::{Country, DateRange, Holiday};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

/// Parameters of a public-holidays lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayQuery {
    pub country_iso_code: String,
    pub range: DateRange,
    pub language_iso_code: String,
}

/// Anything that can answer the two lookups the app needs.
pub trait HolidaysSource: Send + Sync + 'static {
    fn fetch_countries(
        &self,
        language_iso_code: &str,
    ) -> impl Future<Output = ApiResult<Vec<Country>>> + Send;

    fn fetch_holidays(
        &self,
        query: &HolidayQuery,
    ) -> impl Future<Output = ApiResult<Vec<Holiday>>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpHolidaysClient {
    client: Client,
    base_url: String,
}

impl HttpHolidaysClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    /// Build a client from config. No timeout is applied unless one is set.
    pub fn from_config(config: &ApiConfig) -> ApiResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self::new(builder.build()?, config.base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        route: &str,
        params: &[(&str, &str)],
    ) -> ApiResult<T> {
        let url = format!("{}/{}", self.base_url, route);
        tracing::debug!(%url, ?params, "GET");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl HolidaysSource for HttpHolidaysClient {
    async fn fetch_countries(&self, language_iso_code: &str) -> ApiResult<Vec<Country>> {
        self.get_json("Countries", &[("languageIsoCode", language_iso_code)])
            .await
    }

    async fn fetch_holidays(&self, query: &HolidayQuery) -> ApiResult<Vec<Holiday>> {
        let valid_from = query.range.valid_from();
        let valid_to = query.range.valid_to();
        self.get_json(
            "PublicHolidays",
            &[
                ("countryIsoCode", query.country_iso_code.as_str()),
                ("validFrom", valid_from.as_str()),
                ("validTo", valid_to.as_str()),
                ("languageIsoCode", query.language_iso_code.as_str()),
            ],
        )
        .await
    }
}
