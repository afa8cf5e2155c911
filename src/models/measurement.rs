use crate::error::{ProcessingError, Result};
use crate::utils::constants::{INCHES_PER_FOOT, METERS_PER_FOOT, METRIC_SUFFIX};
use std::fmt;
use std::str::FromStr;

/// A screen dimension as stored in the metric datasets ("18.29 m")
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricLength {
    pub meters: f64,
}

impl MetricLength {
    pub fn new(meters: f64) -> Self {
        Self { meters }
    }

    pub fn to_imperial(self) -> ImperialLength {
        ImperialLength::from_meters(self.meters)
    }
}

impl FromStr for MetricLength {
    type Err = ProcessingError;

    /// Strips a trailing " m" and parses the rest as meters
    fn from_str(value: &str) -> Result<Self> {
        let number = value.strip_suffix(METRIC_SUFFIX).unwrap_or(value).trim();

        let meters = number
            .parse::<f64>()
            .map_err(|e| ProcessingError::InvalidMeasurement {
                value: value.to_string(),
                reason: e.to_string(),
            })?;

        if !meters.is_finite() {
            return Err(ProcessingError::InvalidMeasurement {
                value: value.to_string(),
                reason: "not a finite number".to_string(),
            });
        }

        Ok(Self { meters })
    }
}

/// Whole feet plus inches rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImperialLength {
    pub feet: i64,
    pub inches: f64,
}

impl ImperialLength {
    pub fn from_meters(meters: f64) -> Self {
        let total_feet = meters / METERS_PER_FOOT;
        let inches = total_feet.rem_euclid(1.0) * INCHES_PER_FOOT;

        Self {
            feet: total_feet.floor() as i64,
            inches: (inches * 100.0).round() / 100.0,
        }
    }
}

impl fmt::Display for ImperialLength {
    // Debug formatting gives the shortest round-trip form and keeps ".0" on whole values
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ft {:?} in", self.feet, self.inches)
    }
}

/// Convert meters to the "<feet> ft <inches> in" display string
pub fn meters_to_feet_inches(meters: f64) -> String {
    ImperialLength::from_meters(meters).to_string()
}
