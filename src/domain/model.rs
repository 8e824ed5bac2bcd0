use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Per-state population growth figures extracted from the ABS CSV export.
///
/// `periods` carries the fixed reporting-year labels the backend attaches;
/// older payloads omit it, so deserialization tolerates its absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthRecord {
    pub state: String,
    pub growth_numbers: Vec<f64>,
    pub growth_rates: Vec<String>,
    #[serde(default)]
    pub periods: Vec<String>,
}

/// One day of parking occupancy, either live telemetry or synthesized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancySample {
    /// Short display label, e.g. "Mon 18 Aug" for weekly views.
    pub period: String,
    /// Percentage of spots in use, 0..=100.
    pub occupancy_rate: f64,
    pub available_spots: u32,
    pub occupied_spots: u32,
    pub total_spots: u32,
    /// RFC 3339 timestamp of the sample.
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Increasing => write!(f, "increasing"),
            TrendDirection::Decreasing => write!(f, "decreasing"),
            TrendDirection::Stable => write!(f, "stable"),
        }
    }
}

/// Summary statistics over a chronological series of occupancy samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendStats {
    pub average_occupancy: f64,
    pub peak_occupancy: f64,
    pub peak_time: String,
    pub trend_direction: TrendDirection,
    /// Percent change between the first and last sample.
    pub change_rate: f64,
}

/// Look-back window selector. Unknown tokens fall back to the 90-day window,
/// matching the backend's handling of the `period` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
}

impl Period {
    pub fn days(self) -> i64 {
        match self {
            Period::SevenDays => 7,
            Period::OneMonth => 30,
            Period::ThreeMonths => 90,
        }
    }

    /// Token sent as the `period` query parameter.
    pub fn as_query(self) -> &'static str {
        match self {
            Period::SevenDays => "7d",
            Period::OneMonth => "1m",
            Period::ThreeMonths => "3m",
        }
    }
}

impl FromStr for Period {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "7d" => Period::SevenDays,
            "1m" => Period::OneMonth,
            _ => Period::ThreeMonths,
        })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

/// Whether a payload came from the live backend or the synthetic fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    Live,
    Synthetic,
}

/// A payload tagged with its origin, so callers can tell real telemetry from
/// mock fallback data instead of the two being silently conflated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sourced<T> {
    pub data: T,
    pub origin: DataOrigin,
}

impl<T> Sourced<T> {
    pub fn live(data: T) -> Self {
        Self {
            data,
            origin: DataOrigin::Live,
        }
    }

    pub fn synthetic(data: T) -> Self {
        Self {
            data,
            origin: DataOrigin::Synthetic,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.origin == DataOrigin::Synthetic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_parses_known_tokens() {
        assert_eq!("7d".parse::<Period>().unwrap(), Period::SevenDays);
        assert_eq!("1m".parse::<Period>().unwrap(), Period::OneMonth);
        assert_eq!("3m".parse::<Period>().unwrap(), Period::ThreeMonths);
    }

    #[test]
    fn period_defaults_unknown_tokens_to_ninety_days() {
        assert_eq!("6w".parse::<Period>().unwrap(), Period::ThreeMonths);
        assert_eq!("".parse::<Period>().unwrap(), Period::ThreeMonths);
        assert_eq!(Period::ThreeMonths.days(), 90);
    }

    #[test]
    fn growth_record_deserializes_backend_payload() {
        let json = r#"{
            "state": "Vic.",
            "growthNumbers": [209495, 214408],
            "growthRates": ["4.2", "4.2"],
            "periods": ["2016-2017", "2017-2018"]
        }"#;
        let record: GrowthRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.state, "Vic.");
        assert_eq!(record.growth_numbers, vec![209495.0, 214408.0]);
        assert_eq!(record.periods.len(), 2);
    }

    #[test]
    fn growth_record_tolerates_missing_periods() {
        let json = r#"{"state": "NSW", "growthNumbers": [1.0], "growthRates": ["0.1"]}"#;
        let record: GrowthRecord = serde_json::from_str(json).unwrap();
        assert!(record.periods.is_empty());
    }
}
