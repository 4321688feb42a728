//! Temperature based advice.
//!
//! Bands are defined in Celsius. Imperial readings are converted before the
//! comparison so the same weather gives the same advice in either unit.

use serde::Serialize;

use crate::model::Unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceBand {
    /// 39 °C and above.
    ExtremeHeat,
    /// 35 to 39 °C.
    HighHeat,
    /// 25 to 35 °C.
    Warm,
    /// 15 to 25 °C.
    Mild,
    /// 8 to 15 °C.
    Cool,
    /// 0 to 8 °C.
    Cold,
    /// Below 0 °C.
    ExtremeCold,
}

impl AdviceBand {
    /// Hottest band first.
    pub const ALL: [AdviceBand; 7] = [
        AdviceBand::ExtremeHeat,
        AdviceBand::HighHeat,
        AdviceBand::Warm,
        AdviceBand::Mild,
        AdviceBand::Cool,
        AdviceBand::Cold,
        AdviceBand::ExtremeCold,
    ];

    /// Lower bounds are inclusive. NaN ends up in the coldest band.
    pub fn from_celsius(celsius: f64) -> Self {
        match celsius {
            t if t >= 39.0 => AdviceBand::ExtremeHeat,
            t if t >= 35.0 => AdviceBand::HighHeat,
            t if t >= 25.0 => AdviceBand::Warm,
            t if t >= 15.0 => AdviceBand::Mild,
            t if t >= 8.0 => AdviceBand::Cool,
            t if t >= 0.0 => AdviceBand::Cold,
            _ => AdviceBand::ExtremeCold,
        }
    }

    pub fn for_temperature(temperature: f64, unit: Unit) -> Self {
        Self::from_celsius(to_celsius(temperature, unit))
    }

    pub fn text(&self) -> &'static str {
        match self {
            AdviceBand::ExtremeHeat => concat!(
                "Advice:\n",
                " - Caution: High heat!\n",
                " - Stay hydrated.\n",
                " - Wear light clothes.\n",
                " - Avoid the sun as much as possible.\n",
                " - Not suitable for running.\n",
                " - Try to avoid going out if possible.\n",
            ),
            AdviceBand::HighHeat => concat!(
                "Advice:\n",
                " - Stay hydrated.\n",
                " - Apply sunscreen.\n",
                " - Wear light clothes.\n",
                " - Wear sunglasses.\n",
                " - Drink fresh juices like orange juice.\n",
            ),
            AdviceBand::Warm => concat!(
                "Advice:\n",
                " - Great weather for outdoor activities!\n",
                " - Remember to stay hydrated.\n",
                " - Wear light and comfortable clothing.\n",
                " - Enjoy the sunshine but apply sunscreen.\n",
            ),
            AdviceBand::Mild => concat!(
                "Advice:\n",
                " - Perfect weather for a walk or jog.\n",
                " - Light layers are ideal.\n",
                " - Stay hydrated and enjoy the pleasant weather.\n",
            ),
            AdviceBand::Cool => concat!(
                "Advice:\n",
                " - A bit chilly, consider wearing a jacket.\n",
                " - Good weather for outdoor exercise.\n",
                " - Enjoy the cool breeze.\n",
            ),
            AdviceBand::Cold => concat!(
                "Advice:\n",
                " - Wear warm clothes.\n",
                " - Drink hot beverages to stay warm.\n",
                " - Wear gloves and a hat.\n",
                " - Consider indoor activities if it's too cold.\n",
            ),
            AdviceBand::ExtremeCold => concat!(
                "Advice:\n",
                " - Caution: Extremely cold!\n",
                " - Stay indoors if possible.\n",
                " - Drink hot tea or hot chocolate.\n",
                " - Wear multiple layers of warm clothing.\n",
            ),
        }
    }
}

pub fn to_celsius(temperature: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Metric => temperature,
        Unit::Imperial => (temperature - 32.0) * 5.0 / 9.0,
    }
}

/// Advice text for a temperature measured in `unit`.
pub fn advise(temperature: f64, unit: Unit) -> &'static str {
    AdviceBand::for_temperature(temperature, unit).text()
}
