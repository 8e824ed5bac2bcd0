//! Trend statistics over a chronological occupancy series.

use crate::core::round_to_tenth;
use crate::domain::model::{OccupancySample, TrendDirection, TrendStats};

/// Change-rate thresholds (percent) separating a trend from noise.
const INCREASING_THRESHOLD: f64 = 5.0;
const DECREASING_THRESHOLD: f64 = -5.0;

/// Reduce a series of samples (chronological, oldest first) to summary
/// statistics.
///
/// The peak is the first sample attaining the maximum rate; ties resolve to
/// the earliest occurrence. The change rate compares last against first
/// sample. When the first sample's rate is zero the division is undefined, so
/// the change rate is reported as `0` with a `stable` direction rather than
/// propagating a non-finite value.
pub fn calculate_trend_stats(samples: &[OccupancySample]) -> TrendStats {
    let Some(first) = samples.first() else {
        return TrendStats {
            average_occupancy: 0.0,
            peak_occupancy: 0.0,
            peak_time: "N/A".to_string(),
            trend_direction: TrendDirection::Stable,
            change_rate: 0.0,
        };
    };
    let last = samples.last().unwrap_or(first);

    let average =
        samples.iter().map(|s| s.occupancy_rate).sum::<f64>() / samples.len() as f64;

    let peak = samples.iter().skip(1).fold(first, |max, sample| {
        if sample.occupancy_rate > max.occupancy_rate {
            sample
        } else {
            max
        }
    });

    let change_rate = if first.occupancy_rate == 0.0 {
        0.0
    } else {
        round_to_tenth(
            (last.occupancy_rate - first.occupancy_rate) / first.occupancy_rate * 100.0,
        )
    };

    let trend_direction = if change_rate > INCREASING_THRESHOLD {
        TrendDirection::Increasing
    } else if change_rate < DECREASING_THRESHOLD {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    };

    TrendStats {
        average_occupancy: round_to_tenth(average),
        peak_occupancy: peak.occupancy_rate,
        peak_time: peak.period.clone(),
        trend_direction,
        change_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(period: &str, rate: f64) -> OccupancySample {
        let occupied = (3200.0 * rate / 100.0).round() as u32;
        OccupancySample {
            period: period.to_string(),
            occupancy_rate: rate,
            available_spots: 3200 - occupied,
            occupied_spots: occupied,
            total_spots: 3200,
            timestamp: String::new(),
        }
    }

    #[test]
    fn empty_series_yields_the_stable_default() {
        let stats = calculate_trend_stats(&[]);
        assert_eq!(stats.average_occupancy, 0.0);
        assert_eq!(stats.peak_occupancy, 0.0);
        assert_eq!(stats.peak_time, "N/A");
        assert_eq!(stats.trend_direction, TrendDirection::Stable);
        assert_eq!(stats.change_rate, 0.0);
    }

    #[test]
    fn rising_series_is_increasing() {
        let stats = calculate_trend_stats(&[sample("Mon", 50.0), sample("Tue", 60.0)]);
        assert_eq!(stats.change_rate, 20.0);
        assert_eq!(stats.trend_direction, TrendDirection::Increasing);
        assert_eq!(stats.average_occupancy, 55.0);
        assert_eq!(stats.peak_occupancy, 60.0);
        assert_eq!(stats.peak_time, "Tue");
    }

    #[test]
    fn falling_series_is_decreasing() {
        let stats = calculate_trend_stats(&[sample("Mon", 60.0), sample("Tue", 50.0)]);
        assert_eq!(stats.change_rate, -16.7);
        assert_eq!(stats.trend_direction, TrendDirection::Decreasing);
    }

    #[test]
    fn small_change_is_stable() {
        let stats = calculate_trend_stats(&[sample("Mon", 50.0), sample("Tue", 52.0)]);
        assert_eq!(stats.change_rate, 4.0);
        assert_eq!(stats.trend_direction, TrendDirection::Stable);
    }

    #[test]
    fn zero_first_rate_reports_zero_change_not_infinity() {
        let stats = calculate_trend_stats(&[sample("Mon", 0.0), sample("Tue", 10.0)]);
        assert!(stats.change_rate.is_finite());
        assert_eq!(stats.change_rate, 0.0);
        assert_eq!(stats.trend_direction, TrendDirection::Stable);
        assert_eq!(stats.peak_occupancy, 10.0);
    }

    #[test]
    fn peak_ties_resolve_to_the_earliest_sample() {
        let stats = calculate_trend_stats(&[
            sample("Mon", 40.0),
            sample("Tue", 70.0),
            sample("Wed", 70.0),
            sample("Thu", 50.0),
        ]);
        assert_eq!(stats.peak_occupancy, 70.0);
        assert_eq!(stats.peak_time, "Tue");
    }

    #[test]
    fn average_lies_between_min_and_max() {
        let rates = [33.3, 71.2, 45.0, 89.9, 12.5, 64.0];
        let samples: Vec<_> = rates
            .iter()
            .enumerate()
            .map(|(i, r)| sample(&format!("d{}", i), *r))
            .collect();
        let stats = calculate_trend_stats(&samples);
        let min = rates.iter().cloned().fold(f64::MAX, f64::min);
        let max = rates.iter().cloned().fold(f64::MIN, f64::max);
        assert!(stats.average_occupancy >= min);
        assert!(stats.average_occupancy <= max);
        assert_eq!(stats.peak_occupancy, max);
    }

    #[test]
    fn single_sample_is_its_own_peak_and_stable() {
        let stats = calculate_trend_stats(&[sample("Mon", 42.5)]);
        assert_eq!(stats.average_occupancy, 42.5);
        assert_eq!(stats.peak_time, "Mon");
        assert_eq!(stats.change_rate, 0.0);
        assert_eq!(stats.trend_direction, TrendDirection::Stable);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        let stats = calculate_trend_stats(&[
            sample("a", 33.33),
            sample("b", 33.33),
            sample("c", 33.35),
        ]);
        assert_eq!(stats.average_occupancy, 33.3);
    }
}
