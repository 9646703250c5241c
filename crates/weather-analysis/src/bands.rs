//! Categorical bands for averaged weather values.
//!
//! Each ladder uses strict greater-than thresholds, so a value sitting
//! exactly on a threshold falls into the band below it. `NaN` compares
//! false against every threshold and lands in the lowest band.
//!
//! # Example
//!
//! ```
//! use weather_analysis::{TemperatureBand, WindBand};
//!
//! assert_eq!(TemperatureBand::from_average(30.0), TemperatureBand::Warm);
//! assert_eq!(TemperatureBand::from_average(30.5).phrase(), "Very hot.");
//! assert_eq!(WindBand::from_average(15.0), WindBand::Calm);
//! ```

use serde::{Deserialize, Serialize};

/// Temperature above which it is very hot (°C).
pub const VERY_HOT_ABOVE: f64 = 30.0;
/// Temperature above which it is warm (°C).
pub const WARM_ABOVE: f64 = 20.0;
/// Temperature above which it is mild (°C).
pub const MILD_ABOVE: f64 = 10.0;

/// Humidity above which it is very humid (%).
pub const VERY_HUMID_ABOVE: f64 = 80.0;
/// Humidity above which it is humid (%).
pub const HUMID_ABOVE: f64 = 60.0;

/// Wind speed above which it is very windy.
pub const VERY_WINDY_ABOVE: f64 = 30.0;
/// Wind speed above which it is windy.
pub const WINDY_ABOVE: f64 = 15.0;

/// Temperature category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureBand {
    VeryHot,
    Warm,
    Mild,
    Cold,
}

impl TemperatureBand {
    /// Categorise an average temperature.
    pub fn from_average(average: f64) -> Self {
        if average > VERY_HOT_ABOVE {
            TemperatureBand::VeryHot
        } else if average > WARM_ABOVE {
            TemperatureBand::Warm
        } else if average > MILD_ABOVE {
            TemperatureBand::Mild
        } else {
            TemperatureBand::Cold
        }
    }

    /// Summary phrase for this band.
    pub fn phrase(&self) -> &'static str {
        match self {
            TemperatureBand::VeryHot => "Very hot.",
            TemperatureBand::Warm => "Warm.",
            TemperatureBand::Mild => "Mild.",
            TemperatureBand::Cold => "Cold.",
        }
    }
}

/// Humidity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HumidityBand {
    VeryHumid,
    Humid,
    Dry,
}

impl HumidityBand {
    /// Categorise an average humidity.
    pub fn from_average(average: f64) -> Self {
        if average > VERY_HUMID_ABOVE {
            HumidityBand::VeryHumid
        } else if average > HUMID_ABOVE {
            HumidityBand::Humid
        } else {
            HumidityBand::Dry
        }
    }

    /// Summary phrase for this band.
    pub fn phrase(&self) -> &'static str {
        match self {
            HumidityBand::VeryHumid => "Very humid.",
            HumidityBand::Humid => "Humid.",
            HumidityBand::Dry => "Dry.",
        }
    }
}

/// Wind category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindBand {
    VeryWindy,
    Windy,
    Calm,
}

impl WindBand {
    /// Categorise an average wind speed.
    pub fn from_average(average: f64) -> Self {
        if average > VERY_WINDY_ABOVE {
            WindBand::VeryWindy
        } else if average > WINDY_ABOVE {
            WindBand::Windy
        } else {
            WindBand::Calm
        }
    }

    /// Summary phrase for this band.
    pub fn phrase(&self) -> &'static str {
        match self {
            WindBand::VeryWindy => "Very windy.",
            WindBand::Windy => "Windy.",
            WindBand::Calm => "Calm winds.",
        }
    }
}
