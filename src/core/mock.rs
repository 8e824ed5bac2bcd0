//! Synthetic occupancy history, used when the analytics backend is
//! unreachable.
//!
//! The diurnal curve, weekend factor, jitter width and clamp bounds are
//! placeholder values tuned for plausible-looking charts, not a validated
//! model of parking demand. They are kept exactly as the application has
//! always rendered them.

use crate::core::round_to_tenth;
use crate::domain::model::{OccupancySample, Period};
use chrono::{DateTime, Datelike, Duration, Local, Timelike, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Size of the CBD parking inventory the mock models.
pub const TOTAL_SPOTS: u32 = 3200;

/// Synthesize one occupancy sample per day of the look-back window, oldest
/// first, ending today. Output is non-deterministic: it depends on the wall
/// clock and on random jitter.
pub fn generate_mock_historical_data(period: Period) -> Vec<OccupancySample> {
    generate_at(period, Local::now(), &mut StdRng::from_entropy())
}

/// Deterministic inner generator with an injected clock instant and RNG.
pub fn generate_at<R: Rng>(
    period: Period,
    now: DateTime<Local>,
    rng: &mut R,
) -> Vec<OccupancySample> {
    let days = period.days();
    // The curve is keyed to the hour the data is generated, not varied per
    // synthesized day.
    let base = base_occupancy_for_hour(now.hour());

    let mut samples = Vec::with_capacity(days as usize);
    for offset in (0..days).rev() {
        let date = now - Duration::days(offset);

        let mut occupancy = base;
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            occupancy *= 0.7;
        }
        occupancy += rng.gen_range(-10.0..=10.0);
        let occupancy_rate = round_to_tenth(occupancy.clamp(10.0, 95.0));

        let occupied_spots = (f64::from(TOTAL_SPOTS) * occupancy_rate / 100.0).round() as u32;

        samples.push(OccupancySample {
            period: period_label(period, date),
            occupancy_rate,
            available_spots: TOTAL_SPOTS - occupied_spots,
            occupied_spots,
            total_spots: TOTAL_SPOTS,
            timestamp: date.to_rfc3339(),
        });
    }

    samples
}

fn base_occupancy_for_hour(hour: u32) -> f64 {
    match hour {
        8..=10 => 75.0,  // morning peak
        12..=14 => 65.0, // lunch peak
        17..=19 => 80.0, // evening peak
        h if h >= 20 || h <= 6 => 20.0,
        _ => 30.0,
    }
}

fn period_label(period: Period, date: DateTime<Local>) -> String {
    match period {
        Period::SevenDays => date.format("%a %-d %b").to_string(),
        _ => date.format("%-d %b").to_string(),
    }
}
