use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::reading::{Reading, Source};

/// Jitter half-width as a fraction of the baseline.
pub const VARIANCE_PCT: f64 = 0.25;

/// Readings are backdated in whole "months" of exactly 30 days, never by
/// calendar-aware month arithmetic.
pub const DAYS_PER_MONTH: i64 = 30;

/// Offsets, in months before the base instant, of each entry's readings.
pub const MONTH_OFFSETS: [i64; 3] = [0, 3, 6];

/// Produces one reading per month offset for every catalog entry, in
/// catalog order. Values are jittered around the baseline by up to
/// [`VARIANCE_PCT`] in either direction; each reading gets a fresh v4 id.
#[must_use]
pub fn generate<R: Rng>(
    catalog: &Catalog,
    base: NaiveDateTime,
    user_id: &str,
    rng: &mut R,
) -> Vec<Reading> {
    let mut readings = Vec::with_capacity(catalog.len() * MONTH_OFFSETS.len());
    for entry in catalog {
        for months_ago in MONTH_OFFSETS {
            readings.push(Reading {
                id: Uuid::new_v4(),
                user_id: user_id.to_string(),
                biometric_name: entry.name.clone(),
                value: jitter(entry.baseline.get(), rng),
                unit: entry.unit.clone(),
                recorded_at: backdate(base, months_ago),
                source: Source::Manual,
            });
        }
    }
    readings
}

fn jitter<R: Rng>(baseline: f64, rng: &mut R) -> f64 {
    let variance = baseline * VARIANCE_PCT;
    baseline + rng.gen_range(-variance..=variance)
}

fn backdate(base: NaiveDateTime, months_ago: i64) -> NaiveDateTime {
    base - Duration::days(DAYS_PER_MONTH * months_ago)
}
