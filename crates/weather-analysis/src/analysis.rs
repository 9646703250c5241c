//! Reduction of observations to an analysis report.

use tracing::debug;

use weather_types::{AnalysisReport, DimensionStats, Observation};

use crate::bands::{HumidityBand, TemperatureBand, WindBand};

/// Running high/low/sum for one dimension.
#[derive(Debug, Clone, Copy)]
struct Accumulator {
    high: f64,
    low: f64,
    sum: f64,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            high: f64::NEG_INFINITY,
            low: f64::INFINITY,
            sum: 0.0,
        }
    }

    fn push(&mut self, value: f64) {
        if value > self.high {
            self.high = value;
        }
        if value < self.low {
            self.low = value;
        }
        self.sum += value;
    }

    fn finish(self, count: usize) -> DimensionStats {
        DimensionStats {
            high: self.high,
            low: self.low,
            // 0.0 / 0.0 is NaN for an empty input.
            average: self.sum / count as f64,
        }
    }
}

/// Compute per-dimension statistics and a summary in a single pass.
///
/// Order of `observations` does not affect the result. A `NaN` value never
/// becomes a high or low but does make that dimension's average `NaN`.
pub fn analyze(observations: &[Observation]) -> AnalysisReport {
    let mut temperature = Accumulator::new();
    let mut humidity = Accumulator::new();
    let mut wind_speed = Accumulator::new();

    for observation in observations {
        temperature.push(observation.temperature);
        humidity.push(observation.humidity);
        wind_speed.push(observation.wind_speed);
    }

    let count = observations.len();
    let temperature = temperature.finish(count);
    let humidity = humidity.finish(count);
    let wind_speed = wind_speed.finish(count);

    let summary = summarize(temperature.average, humidity.average, wind_speed.average);
    debug!("Analysed {} observation(s): {}", count, summary);

    AnalysisReport {
        temperature,
        humidity,
        wind_speed,
        summary,
    }
}

/// Build the summary sentence from the three averages.
///
/// ```
/// use weather_analysis::summarize;
///
/// assert_eq!(summarize(35.0, 90.0, 40.0), "Very hot. Very humid. Very windy.");
/// ```
pub fn summarize(temperature: f64, humidity: f64, wind_speed: f64) -> String {
    [
        TemperatureBand::from_average(temperature).phrase(),
        HumidityBand::from_average(humidity).phrase(),
        WindBand::from_average(wind_speed).phrase(),
    ]
    .join(" ")
}
