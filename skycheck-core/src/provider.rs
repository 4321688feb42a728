use crate::{
    Config, WeatherObservation, WeatherRequest, error::WeatherError,
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current weather observations.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherObservation, WeatherError>;
}

/// Construct the OpenWeather provider from config.
///
/// Fails when no API key is configured, before any request is made.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    config.validate()?;
    let api_key = config.api_key()?;
    let provider = OpenWeatherProvider::from_config(api_key.to_owned(), config)?;

    Ok(Box::new(provider))
}
