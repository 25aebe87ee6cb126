//! Night portions between Maghrib and the next day's Fajr.
//!
//! The night here is the span from Maghrib to the following Fajr, not
//! sunset to sunrise. Its middle and the start of its last third are the
//! recommended times for the night prayer.

use chrono::{DateTime, TimeDelta, TimeZone};

use crate::math::round;
use crate::params::CalculationParams;
use crate::times::{calculate_for_day, calculate_prayer_times};
use crate::types::Coordinates;
use crate::{Error, Result};

/// Middle and last third of one night.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunnahTimes<Tz: TimeZone> {
    /// Halfway between Maghrib and Fajr
    pub middle_of_the_night: DateTime<Tz>,
    /// Two thirds of the way from Maghrib to Fajr
    pub last_third_of_the_night: DateTime<Tz>,
}

impl<Tz: TimeZone> SunnahTimes<Tz> {
    /// Night portions for a Maghrib and the following day's Fajr.
    #[must_use]
    pub fn new(maghrib: &DateTime<Tz>, next_fajr: &DateTime<Tz>) -> Self {
        Self {
            middle_of_the_night: night_portion(maghrib, next_fajr, 0.5),
            last_third_of_the_night: night_portion(maghrib, next_fajr, 2.0 / 3.0),
        }
    }
}

/// The instant `fraction` of the way from `maghrib` to `fajr`.
///
/// `0.0` gives `maghrib` and `1.0` gives `fajr`, to the millisecond.
/// Fractions outside that range extrapolate; an instant chrono cannot
/// represent is replaced by `maghrib` for negative fractions and `fajr`
/// otherwise.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use prayer_times::night_portion;
///
/// let maghrib = Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap();
/// let fajr = Utc.with_ymd_and_hms(2024, 1, 2, 6, 0, 0).unwrap();
/// let quarter = Utc.with_ymd_and_hms(2024, 1, 1, 21, 0, 0).unwrap();
/// assert_eq!(night_portion(&maghrib, &fajr, 0.25), quarter);
/// ```
#[must_use]
pub fn night_portion<Tz: TimeZone>(
    maghrib: &DateTime<Tz>,
    fajr: &DateTime<Tz>,
    fraction: f64,
) -> DateTime<Tz> {
    let night = fajr.clone() - maghrib.clone();
    let millis = round(night.num_milliseconds() as f64 * fraction) as i64;
    TimeDelta::try_milliseconds(millis)
        .and_then(|offset| maghrib.clone().checked_add_signed(offset))
        .unwrap_or_else(|| {
            if fraction < 0.0 {
                maghrib.clone()
            } else {
                fajr.clone()
            }
        })
}

/// True when `time` is within the last third of the night, bounds included.
#[must_use]
pub fn is_last_third_of_night<Tz: TimeZone>(
    time: &DateTime<Tz>,
    maghrib: &DateTime<Tz>,
    fajr: &DateTime<Tz>,
) -> bool {
    let start = night_portion(maghrib, fajr, 2.0 / 3.0);
    &start <= time && time <= fajr
}

/// Sunnah times for the night that begins on the calendar day of `date`.
///
/// Calculates Maghrib for `date` and Fajr for the day after, with the same
/// location and parameters. The time of day of `date` is ignored, so a
/// wall-clock time that does not exist tomorrow is not a problem.
///
/// # Errors
/// Propagates errors from [`calculate_prayer_times`], and returns
/// `CalculationFailed` when the following day is out of range.
pub fn calculate_sunnah_times<Tz: TimeZone>(
    date: &DateTime<Tz>,
    coordinates: &Coordinates,
    params: &CalculationParams,
) -> Result<SunnahTimes<Tz>> {
    let tomorrow = date
        .date_naive()
        .succ_opt()
        .ok_or(Error::calculation_failed("next day outside supported dates"))?;

    let today = calculate_prayer_times(date, coordinates, params)?;
    let next = calculate_for_day(tomorrow, &date.timezone(), coordinates, params)?;

    Ok(SunnahTimes::new(&today.maghrib, &next.fajr))
}
