use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::{fmt, time::Duration};
use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::{
    config::{Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS},
    error::{FetchError, WeatherError},
    mapper,
    model::{WeatherObservation, WeatherRequest},
};

use super::WeatherProvider;

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Result<Self, FetchError> {
        Self::with_options(
            api_key,
            DEFAULT_BASE_URL,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    pub fn with_options(
        api_key: String,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn from_config(api_key: String, config: &Config) -> Result<Self, FetchError> {
        Self::with_options(
            api_key,
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> String {
        format!("{}/weather", self.base_url)
    }

    #[instrument(skip(self, request), fields(location = %request.location, unit = request.unit.as_query()))]
    async fn fetch_current(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherObservation, WeatherError> {
        let url = self.endpoint();
        debug!(%url, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", request.location.as_str()),
                ("units", request.unit.as_query()),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(FetchError::from)
            .inspect_err(|e| debug!(error = %e, "OpenWeather request failed"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(FetchError::from)
            .inspect_err(|e| debug!(error = %e, "failed to read OpenWeather response body"))?;

        if !status.is_success() {
            let message = error_message(status, &body);
            debug!(%status, %message, "OpenWeather returned an error status");
            return Err(FetchError::Status { status, message }.into());
        }

        let observation = mapper::parse_body(&body, request.unit)
            .inspect_err(|e| debug!(error = %e, "unexpected OpenWeather response"))?;

        debug!(
            name = observation.location(),
            temp = observation.temperature(),
            conditions = observation.conditions(),
            "parsed observation"
        );

        Ok(observation)
    }
}

// Keep the credential out of logs and panics.
impl fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn get_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherObservation, WeatherError> {
        self.fetch_current(request).await
    }
}

/// Error bodies look like `{"cod":"404","message":"city not found"}`.
#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: String,
}

fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<OwErrorBody>(body) {
        Ok(err) if !err.message.trim().is_empty() => err.message,
        _ if !body.trim().is_empty() => truncate_body(body),
        _ => status.canonical_reason().unwrap_or("no response body").to_string(),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
