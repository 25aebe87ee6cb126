//! Calendar and clock conversions.
//!
//! Turns civil dates into Julian days for the solar model and turns the
//! solver's fractional hours back into timestamps on the caller's calendar day.

use alloc::format;
use alloc::string::String;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, TimeZone};

use crate::error::check_finite_hours;
use crate::math::{floor, round};
use crate::method::Rounding;
use crate::{Error, Result};

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const J2000_JDN: f64 = 2_451_545.0;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const MINUTES_PER_DAY: i64 = 1_440;

/// Julian date at 0h of a proleptic Gregorian civil date.
///
/// Uses the Meeus formulation: January and February count as months 13 and
/// 14 of the previous year, and the Gregorian correction applies from
/// 1582-10-15 onwards. No range checks are made; the result is defined for
/// any `year`, `month` 1..=12 and `day` 1..=31.
///
/// # Example
/// ```
/// # use prayer_times::time::julian_day;
/// assert_eq!(julian_day(2000, 1, 1), 2_451_544.5);
/// ```
#[must_use]
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let mut y = f64::from(year);
    let mut m = f64::from(month);

    if month < 3 {
        y -= 1.0;
        m += 12.0;
    }

    let mut jd =
        floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + f64::from(day) - 1524.5;

    // JDN 2299161 corresponds to October 15, 1582
    if jd >= 2_299_161.0 {
        let a = floor(y / 100.0);
        jd += 2.0 - a + floor(a / 4.0);
    }

    jd
}

/// Julian date at 0h of a chrono calendar date.
#[must_use]
pub fn julian_day_for_date(date: NaiveDate) -> f64 {
    julian_day(date.year(), date.month(), date.day())
}

/// Formats fractional clock hours as "HH:MM".
///
/// Minutes are rounded to the nearest whole minute and the result wraps
/// into a single 24-hour day, so `24.5` and `-23.5` both print as `"00:30"`.
/// Non-finite input prints as `"--:--"`.
///
/// # Example
/// ```
/// # use prayer_times::time::format_hours;
/// assert_eq!(format_hours(5.25), "05:15");
/// assert_eq!(format_hours(23.999), "00:00");
/// ```
#[must_use]
pub fn format_hours(hours: f64) -> String {
    if !hours.is_finite() {
        return String::from("--:--");
    }
    let total = (round(hours * 60.0) as i64).rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Seconds after midnight for a fractional-hour value under a rounding mode.
///
/// `Rounding::Nearest` takes the hour as `floor(hours)` and the minute as
/// the rounded remainder; that minute may come out as 60, and carrying it is
/// left to calendar arithmetic. `Rounding::Up` moves any leftover seconds to
/// the next whole minute. `Rounding::None` keeps the nearest second.
pub(crate) fn clock_seconds(hours: f64, rounding: Rounding) -> i64 {
    match rounding {
        Rounding::Nearest => {
            let whole_hours = floor(hours);
            let minutes = round((hours - whole_hours) * 60.0) as i64;
            (whole_hours as i64)
                .saturating_mul(SECONDS_PER_HOUR)
                .saturating_add(minutes * SECONDS_PER_MINUTE)
        }
        Rounding::Up => {
            let seconds = round(hours * 3_600.0) as i64;
            seconds
                .saturating_add(SECONDS_PER_MINUTE - 1)
                .div_euclid(SECONDS_PER_MINUTE)
                .saturating_mul(SECONDS_PER_MINUTE)
        }
        Rounding::None => round(hours * 3_600.0) as i64,
    }
}

/// Anchors fractional clock hours to the calendar day of `date`.
///
/// The solver's hours are universal time: solar noon sits at
/// `12 − longitude/15`. They are counted from UTC midnight of `date`'s own
/// calendar fields and the instant is then expressed in `date`'s time zone.
/// Values below 0 or at/above 24 land on the neighbouring UTC days, which
/// is how locations far east or west of Greenwich keep all six times on
/// their local civil day.
///
/// # Errors
/// Returns `CalculationFailed` if the value is not finite or the resulting
/// timestamp is outside chrono's representable range.
///
/// # Example
/// ```
/// # use chrono::{FixedOffset, TimeZone, Timelike};
/// # use prayer_times::{Rounding, time::hours_to_datetime};
/// let doha = FixedOffset::east_opt(3 * 3600).unwrap();
/// let date = doha.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
///
/// let dhuhr = hours_to_datetime(&date, 8.616, Rounding::Nearest).unwrap();
/// assert_eq!((dhuhr.hour(), dhuhr.minute()), (11, 37));
/// ```
pub fn hours_to_datetime<Tz: TimeZone>(
    date: &DateTime<Tz>,
    hours: f64,
    rounding: Rounding,
) -> Result<DateTime<Tz>> {
    anchor_hours(date.date_naive(), &date.timezone(), hours, rounding)
}

/// Same as [`hours_to_datetime`], for a bare calendar day and zone.
pub(crate) fn anchor_hours<Tz: TimeZone>(
    day: NaiveDate,
    tz: &Tz,
    hours: f64,
    rounding: Rounding,
) -> Result<DateTime<Tz>> {
    let hours = check_finite_hours(hours)?;
    let offset = TimeDelta::try_seconds(clock_seconds(hours, rounding))
        .ok_or(Error::calculation_failed("prayer time offset out of range"))?;
    let universal = day
        .and_time(NaiveTime::MIN)
        .checked_add_signed(offset)
        .ok_or(Error::calculation_failed("prayer time outside supported dates"))?;

    Ok(tz.from_utc_datetime(&universal))
}
