use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the weather provider.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or body read failure.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    /// The provider answered with a non-success status.
    #[error("provider returned {status}: {message}")]
    Status { status: StatusCode, message: String },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Network(err)
        }
    }
}

/// Errors returned by a weather lookup.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The provider's body did not have the expected shape.
    #[error("malformed weather response: {0}")]
    MalformedResponse(String),

    #[error("weather lookup was cancelled")]
    Cancelled,
}

impl WeatherError {
    pub fn is_fetch(&self) -> bool {
        matches!(self, WeatherError::Fetch(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, WeatherError::MalformedResponse(_))
    }

    /// Text shown to the user when a lookup fails.
    pub fn user_message(&self) -> String {
        format!("Error fetching weather: {self}")
    }
}

/// A value that a [`WeatherObservation`](crate::WeatherObservation) cannot hold.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidObservation {
    #[error("humidity out of range: {0} (expected 0 to 100)")]
    Humidity(u8),

    #[error("wind speed must be non-negative, got {0}")]
    WindSpeed(f64),
}

impl From<InvalidObservation> for WeatherError {
    fn from(err: InvalidObservation) -> Self {
        WeatherError::MalformedResponse(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit '{0}'. Supported units: celsius (metric), fahrenheit (imperial).")]
pub struct ParseUnitError(pub String);
