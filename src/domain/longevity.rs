//! Probable death date
//!
//! Derived, non-persisted field attached to clientes in list responses.
//! The value is redrawn on every call, so two calls for the same cliente
//! can return different dates.

use chrono::{Months, NaiveDate};

use super::error::DomainError;
use super::random::RandomSource;

/// Life expectancy used as the baseline, in years
pub const LIFE_EXPECTANCY_YEARS: i32 = 76;

/// Minimum baseline of remaining years before the random variation
pub const MIN_BASELINE_YEARS: i32 = 5;

/// Maximum absolute random variation, in years
pub const MAX_VARIATION_YEARS: i32 = 5;

/// Years left for a cliente of the given age.
///
/// `max(76 - edad, 5) + variation`, floored at 1. The variation is drawn from
/// `[-5, 5]`.
pub fn remaining_years(edad: i32, random: &dyn RandomSource) -> i32 {
    let baseline = LIFE_EXPECTANCY_YEARS.saturating_sub(edad).max(MIN_BASELINE_YEARS);
    let variation = random.next_in_range(-MAX_VARIATION_YEARS, MAX_VARIATION_YEARS);

    baseline.saturating_add(variation).max(1)
}

/// Probable death date for a cliente of the given age, counted from `today`.
pub fn fecha_probable_muerte(
    edad: i32,
    today: NaiveDate,
    random: &dyn RandomSource,
) -> Result<NaiveDate, DomainError> {
    let years = remaining_years(edad, random);
    add_years(today, years)
}

/// Add whole years to a date. Feb 29 lands on Feb 28 in non-leap years.
fn add_years(date: NaiveDate, years: i32) -> Result<NaiveDate, DomainError> {
    u32::try_from(years)
        .ok()
        .and_then(|y| y.checked_mul(12))
        .and_then(|months| date.checked_add_months(Months::new(months)))
        .ok_or(DomainError::DateOutOfRange { date, years })
}
