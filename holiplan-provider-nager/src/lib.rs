//! Official public holidays from the Nager.Date API.
//!
//! `GET {base}/api/v3/PublicHolidays/{year}/{countryCode}` returns every
//! public holiday of a country, with `counties` listing the regions a regional
//! holiday applies to (null for nationwide ones).

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use holiplan_core::source::HolidaySource;
use holiplan_core::{Holiday, HoliplanError, HoliplanResult};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://date.nager.at";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// One entry of the PublicHolidays response. Unused fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublicHolidayDto {
    date: NaiveDate,
    local_name: String,
    name: String,
    country_code: String,
    #[serde(default)]
    counties: Option<Vec<String>>,
}

impl From<PublicHolidayDto> for Holiday {
    fn from(dto: PublicHolidayDto) -> Self {
        Holiday::official(dto.date, dto.name, dto.local_name, dto.country_code, dto.counties)
    }
}

fn parse_holidays(body: &str) -> serde_json::Result<Vec<Holiday>> {
    let dtos: Vec<PublicHolidayDto> = serde_json::from_str(body)?;
    Ok(dtos.into_iter().map(Holiday::from).collect())
}

/// HTTP client for Nager.Date.
#[derive(Debug, Clone)]
pub struct NagerClient {
    http: reqwest::Client,
    base_url: Url,
}

impl NagerClient {
    pub fn new() -> HoliplanResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at another deployment of the same API.
    pub fn with_base_url(base_url: &str) -> HoliplanResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| HoliplanError::Config(format!("Invalid holiday API URL '{base_url}': {e}")))?;

        let http = reqwest::Client::builder()
            .user_agent(format!("holiplan/{}", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| HoliplanError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(NagerClient { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn holidays_url(&self, country_code: &str, year: i32) -> HoliplanResult<Url> {
        self.base_url
            .join(&format!("api/v3/PublicHolidays/{year}/{country_code}"))
            .map_err(|e| HoliplanError::Config(format!("Invalid holiday API URL: {e}")))
    }
}

#[async_trait]
impl HolidaySource for NagerClient {
    async fn fetch_holidays(&self, country_code: &str, year: i32) -> HoliplanResult<Vec<Holiday>> {
        let fetch_error = |reason: String| HoliplanError::HolidayFetch {
            country: country_code.to_string(),
            year,
            reason,
        };

        let url = self.holidays_url(country_code, year)?;
        tracing::debug!(%url, "requesting public holidays");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP {status}")));
        }

        let body = response.text().await.map_err(|e| fetch_error(e.to_string()))?;
        let holidays = parse_holidays(&body).map_err(|e| fetch_error(format!("Invalid response: {e}")))?;

        tracing::info!(country = country_code, year, count = holidays.len(), "fetched public holidays");
        Ok(holidays)
    }
}
