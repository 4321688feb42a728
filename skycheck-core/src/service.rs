use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    Config,
    error::WeatherError,
    model::{Unit, WeatherReport, WeatherRequest},
    provider::{WeatherProvider, provider_from_config},
};

/// Entry point used by front ends: location and unit in, report out.
#[derive(Debug, Clone)]
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Build the service from config. Errors if no API key is set.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let provider = provider_from_config(config)?;
        Ok(Self::new(Arc::from(provider)))
    }

    pub async fn lookup(
        &self,
        location: &str,
        unit: Unit,
    ) -> Result<WeatherReport, WeatherError> {
        self.lookup_request(&WeatherRequest::new(location, unit)).await
    }

    pub async fn lookup_request(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherReport, WeatherError> {
        match self.provider.get_weather(request).await {
            Ok(observation) => {
                info!(
                    location = observation.location(),
                    unit = request.unit.as_query(),
                    "weather lookup succeeded"
                );
                Ok(WeatherReport::new(observation, Utc::now()))
            }
            Err(err) => {
                warn!(location = %request.location, error = %err, "weather lookup failed");
                Err(err)
            }
        }
    }
}
