//! Maps an OpenWeather "current weather" body to a [`WeatherObservation`].

use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::WeatherError,
    model::{Unit, WeatherObservation},
};

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

/// Extract an observation from a decoded JSON body.
pub fn parse(raw: &Value, unit: Unit) -> Result<WeatherObservation, WeatherError> {
    let parsed = OwCurrentResponse::deserialize(raw)
        .map_err(|e| WeatherError::MalformedResponse(e.to_string()))?;

    let conditions = parsed
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or_else(|| WeatherError::MalformedResponse("`weather` is empty".to_string()))?;

    let observation = WeatherObservation::new(
        parsed.name,
        parsed.main.temp,
        parsed.main.humidity,
        parsed.wind.speed,
        conditions,
        unit,
    )?;

    Ok(observation)
}

/// Like [`parse`], starting from the raw response text.
pub fn parse_body(body: &str, unit: Unit) -> Result<WeatherObservation, WeatherError> {
    let raw: Value = serde_json::from_str(body)
        .map_err(|e| WeatherError::MalformedResponse(format!("invalid JSON: {e}")))?;

    parse(&raw, unit)
}
