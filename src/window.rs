//! Which prayer's window contains a given instant.

use chrono::{DateTime, TimeDelta, TimeZone};

use crate::types::{Prayer, PrayerTimes};

/// The prayer whose window is open and the one that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrayerWindow {
    /// Prayer whose window contains the instant
    pub current: Prayer,
    /// Prayer that closes the window
    pub next: Prayer,
    /// Minutes until `next`, rounded to the nearest minute
    pub minutes_until_next: i64,
}

/// Finds the window containing `now`.
///
/// Windows run from each time (inclusive) to the following one (exclusive)
/// in the order Fajr, Sunrise, Dhuhr, Asr, Maghrib, Isha. Isha's window
/// closes at `next_fajr` when given, otherwise at today's Fajr plus 24 hours.
///
/// Returns `None` when `now` is before today's Fajr or after the end of
/// Isha, for example in the small hours when `times` belongs to the
/// previous day. Calculate the times for the correct day in that case.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use prayer_times::{
///     calculate_prayer_times, current_prayer, CalculationParams, Coordinates, Prayer,
/// };
///
/// let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let doha = Coordinates::new(25.2854, 51.531);
/// let times = calculate_prayer_times(&date, &doha, &CalculationParams::default()).unwrap();
///
/// let now = times.dhuhr + chrono::TimeDelta::minutes(10);
/// let window = current_prayer(&times, &now, None).unwrap();
/// assert_eq!(window.current, Prayer::Dhuhr);
/// assert_eq!(window.next, Prayer::Asr);
/// ```
#[must_use]
pub fn current_prayer<Tz: TimeZone>(
    times: &PrayerTimes<Tz>,
    now: &DateTime<Tz>,
    next_fajr: Option<&DateTime<Tz>>,
) -> Option<PrayerWindow> {
    let night_end = match next_fajr {
        Some(fajr) => fajr.clone(),
        None => times.fajr.clone().checked_add_signed(TimeDelta::days(1))?,
    };

    Prayer::ALL.into_iter().find_map(|prayer| {
        let start = times.time_for(prayer);
        let end = match prayer {
            Prayer::Isha => &night_end,
            _ => times.time_for(prayer.next()),
        };
        (start <= now && now < end).then(|| PrayerWindow {
            current: prayer,
            next: prayer.next(),
            minutes_until_next: rounded_minutes(end.clone() - now.clone()),
        })
    })
}

/// Whole minutes in `delta`, half a minute rounding away from zero.
fn rounded_minutes(delta: TimeDelta) -> i64 {
    let millis = delta.num_milliseconds();
    let minutes = millis.div_euclid(60_000);
    if millis.rem_euclid(60_000) >= 30_000 {
        minutes + 1
    } else {
        minutes
    }
}
