//! Population CSV processing.
//!
//! The ABS population export quotes fields that contain thousands separators,
//! so a plain `split(',')` breaks on them. The parser here matches the
//! behavior the rest of the application was built against: each `"` toggles
//! quote state and is dropped from the output, and escaped quotes (`""`) are
//! not supported — malformed input mis-parses rather than erroring.

use crate::domain::model::GrowthRecord;

/// Reporting-year labels attached to every growth record.
const REPORTING_PERIODS: [&str; 5] = [
    "2016-2017",
    "2017-2018",
    "2018-2019",
    "2019-2020",
    "2020-2021",
];

/// Column indices holding growth numbers and growth rates. The export
/// interleaves them: state, number, rate, number, rate, ...
const NUMBER_COLUMNS: [usize; 5] = [1, 3, 5, 7, 9];
const RATE_COLUMNS: [usize; 5] = [2, 4, 6, 8, 10];

/// Split one CSV record into trimmed fields, honoring quoted fields that
/// contain embedded commas.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Coerce a locale-formatted numeric string ("209,495") into an f64.
///
/// Strips quote characters and thousands separators only; anything else that
/// fails to parse (including empty input) yields the NaN sentinel, which
/// callers filter out.
pub fn parse_number(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|c| *c != '"' && *c != ',').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return f64::NAN;
    }
    cleaned.parse().unwrap_or(f64::NAN)
}

/// Process a full population CSV blob into per-state growth records.
///
/// The first two lines are headers and skipped. Rows with fewer than 10
/// fields, and rows whose growth numbers or rates all filter out, are dropped
/// silently: partial results beat failing the whole import. Row order is
/// preserved.
pub fn process_population_csv(csv_data: &str) -> Vec<GrowthRecord> {
    let mut records = Vec::new();

    for line in csv_data.lines().skip(2) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let columns = parse_csv_line(line);
        if columns.len() < 10 {
            continue;
        }

        let state = columns[0].replace('"', "");

        let growth_numbers: Vec<f64> = NUMBER_COLUMNS
            .iter()
            .map(|&i| parse_number(&columns[i]))
            .filter(|n| !n.is_nan())
            .collect();

        // A rate column past the end of a short row counts as empty.
        let growth_rates: Vec<String> = RATE_COLUMNS
            .iter()
            .filter_map(|&i| columns.get(i))
            .map(|c| c.replace('"', ""))
            .filter(|r| !r.is_empty())
            .collect();

        if !growth_numbers.is_empty() && !growth_rates.is_empty() {
            records.push(GrowthRecord {
                state,
                growth_numbers,
                growth_rates,
                periods: REPORTING_PERIODS.iter().map(|p| p.to_string()).collect(),
            });
        }
    }

    records
}
