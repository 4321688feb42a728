use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{
    advice,
    error::{InvalidObservation, ParseUnitError},
    icon::IconKind,
};

/// Measurement system used for both the request and the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Celsius, wind in m/s.
    #[default]
    #[serde(alias = "celsius", alias = "c")]
    Metric,
    /// Fahrenheit, wind in mph.
    #[serde(alias = "fahrenheit", alias = "f")]
    Imperial,
}

impl Unit {
    /// Value of the provider's `units` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            Unit::Metric => "metric",
            Unit::Imperial => "imperial",
        }
    }

    pub fn temperature_name(&self) -> &'static str {
        match self {
            Unit::Metric => "Celsius",
            Unit::Imperial => "Fahrenheit",
        }
    }

    pub fn temperature_symbol(&self) -> &'static str {
        match self {
            Unit::Metric => "°C",
            Unit::Imperial => "°F",
        }
    }

    pub fn wind_speed_label(&self) -> &'static str {
        match self {
            Unit::Metric => "m/s",
            Unit::Imperial => "mph",
        }
    }

    pub const fn all() -> &'static [Unit] {
        &[Unit::Metric, Unit::Imperial]
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.temperature_name())
    }
}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "celsius" | "c" | "metric" => Ok(Unit::Metric),
            "fahrenheit" | "f" | "imperial" => Ok(Unit::Imperial),
            _ => Err(ParseUnitError(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    pub location: String,
    pub unit: Unit,
}

impl WeatherRequest {
    pub fn new(location: impl Into<String>, unit: Unit) -> Self {
        Self { location: location.into(), unit }
    }
}

/// Current conditions for one location, in the unit that was requested.
///
/// Built once per successful fetch and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherObservation {
    location: String,
    temperature: f64,
    humidity: u8,
    wind_speed: f64,
    conditions: String,
    unit: Unit,
}

impl WeatherObservation {
    /// Fails if humidity is above 100 or wind speed is negative or not finite.
    pub fn new(
        location: impl Into<String>,
        temperature: f64,
        humidity: u8,
        wind_speed: f64,
        conditions: impl Into<String>,
        unit: Unit,
    ) -> Result<Self, InvalidObservation> {
        if humidity > 100 {
            return Err(InvalidObservation::Humidity(humidity));
        }
        if !wind_speed.is_finite() || wind_speed < 0.0 {
            return Err(InvalidObservation::WindSpeed(wind_speed));
        }

        Ok(Self {
            location: location.into(),
            temperature,
            humidity,
            wind_speed,
            conditions: conditions.into(),
            unit,
        })
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn humidity(&self) -> u8 {
        self.humidity
    }

    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    pub fn conditions(&self) -> &str {
        &self.conditions
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn wind_speed_label(&self) -> &'static str {
        self.unit.wind_speed_label()
    }

    pub fn icon(&self) -> IconKind {
        IconKind::select(&self.conditions)
    }

    pub fn advice(&self) -> &'static str {
        advice::advise(self.temperature, self.unit)
    }
}

/// Everything the front end needs to render a result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub observation: WeatherObservation,
    pub icon: IconKind,
    pub advice: &'static str,
    pub wind_unit: &'static str,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherReport {
    pub fn new(observation: WeatherObservation, fetched_at: DateTime<Utc>) -> Self {
        Self {
            icon: observation.icon(),
            advice: observation.advice(),
            wind_unit: observation.wind_speed_label(),
            observation,
            fetched_at,
        }
    }
}
