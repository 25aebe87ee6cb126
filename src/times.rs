//! Daily prayer time calculation.

use chrono::{DateTime, NaiveDate, TimeZone};
use log::trace;

use crate::high_latitude::resolve;
use crate::params::CalculationParams;
use crate::solar::solar_position;
use crate::solver::{PrayerTimesNumeric, raw_times};
use crate::time::{anchor_hours, format_hours, julian_day_for_date};
use crate::types::{Coordinates, Prayer, PrayerTimes};
use crate::Result;

/// Calculates the six prayer times for the calendar day of `date`.
///
/// Only the calendar fields of `date` matter; its time of day is ignored.
/// The returned timestamps are in `date`'s time zone. The pipeline runs the
/// solar model for that day, solves the hour angles for the method, applies
/// the high-latitude rule, adds the minute adjustments and finally anchors
/// each value to the day.
///
/// # Arguments
/// * `date` - Civil day to calculate; its fields must already be the location's local date
/// * `coordinates` - Observer location
/// * `params` - Method, Asr convention, high-latitude rule and adjustments
///
/// # Errors
/// Returns `InvalidLatitude`/`InvalidLongitude` for out-of-range coordinates
/// and `CalculationFailed` if any time cannot be represented. Either all six
/// times are produced or none.
///
/// # Example
/// ```
/// use chrono::{FixedOffset, TimeZone, Timelike};
/// use prayer_times::{calculate_prayer_times, CalculationParams, Coordinates, MethodName};
///
/// let doha = FixedOffset::east_opt(3 * 3600).unwrap();
/// let date = doha.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let location = Coordinates::new(25.2854, 51.531);
///
/// let times = calculate_prayer_times(&date, &location, &MethodName::Qatar.into()).unwrap();
/// assert_eq!((times.dhuhr.hour(), times.dhuhr.minute()), (11, 37));
/// assert_eq!((times.isha - times.maghrib).num_minutes(), 90);
/// ```
pub fn calculate_prayer_times<Tz: TimeZone>(
    date: &DateTime<Tz>,
    coordinates: &Coordinates,
    params: &CalculationParams,
) -> Result<PrayerTimes<Tz>> {
    calculate_for_day(date.date_naive(), &date.timezone(), coordinates, params)
}

/// Prayer times for a calendar day, expressed in `tz`.
pub(crate) fn calculate_for_day<Tz: TimeZone>(
    day: NaiveDate,
    tz: &Tz,
    coordinates: &Coordinates,
    params: &CalculationParams,
) -> Result<PrayerTimes<Tz>> {
    coordinates.validate()?;

    let jd = julian_day_for_date(day);
    let sun = solar_position(jd);
    trace!(
        "jd {jd}: declination {:.4}°, equation of time {:.3} min",
        sun.declination, sun.equation_of_time
    );

    let raw = raw_times(coordinates, &sun, &params.method, params.asr_method);
    let resolved = resolve(
        raw,
        coordinates.latitude,
        params.high_latitude_method,
        &params.method,
    );
    let adjusted = apply_adjustments(resolved, params);

    let rounding = params.rounding();
    let at = |prayer| anchor_hours(day, tz, adjusted.get(prayer), rounding);

    Ok(PrayerTimes {
        fajr: at(Prayer::Fajr)?,
        sunrise: at(Prayer::Sunrise)?,
        dhuhr: at(Prayer::Dhuhr)?,
        asr: at(Prayer::Asr)?,
        maghrib: at(Prayer::Maghrib)?,
        isha: at(Prayer::Isha)?,
    })
}

/// Adds the effective minute offsets to each time.
fn apply_adjustments(
    mut times: PrayerTimesNumeric,
    params: &CalculationParams,
) -> PrayerTimesNumeric {
    let adjustments = params.effective_adjustments();
    for prayer in Prayer::ALL {
        let minutes = adjustments.minutes(prayer);
        if minutes != 0 {
            let hours = times.get_mut(prayer);
            *hours += f64::from(minutes) / 60.0;
            trace!("{prayer} adjusted by {minutes} min to {}", format_hours(*hours));
        }
    }
    times
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::high_latitude::HighLatitudeMethod;
    use crate::method::{MethodName, Rounding, get_method};
    use crate::params::{AsrMethod, PrayerAdjustments};
    use crate::Error;
    use chrono::{TimeDelta, Timelike, Utc};

    fn doha() -> Coordinates {
        Coordinates::new(25.2854, 51.531)
    }

    fn new_year() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 15, 30, 0).unwrap()
    }

    fn hhmm(datetime: &DateTime<Utc>) -> (u32, u32) {
        (datetime.hour(), datetime.minute())
    }

    #[test]
    fn test_doha_qatar() {
        let times =
            calculate_prayer_times(&new_year(), &doha(), &MethodName::Qatar.into()).unwrap();
        assert_eq!(hhmm(&times.fajr), (1, 58));
        assert_eq!(hhmm(&times.sunrise), (3, 19));
        assert_eq!(hhmm(&times.dhuhr), (8, 37));
        assert_eq!(hhmm(&times.asr), (11, 35));
        assert_eq!(hhmm(&times.maghrib), (13, 55));
        assert_eq!(times.isha - times.maghrib, TimeDelta::minutes(90));
        assert!(times.is_chronological());
    }

    #[test]
    fn test_time_of_day_is_ignored() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let params = CalculationParams::default();
        assert_eq!(
            calculate_prayer_times(&midnight, &doha(), &params).unwrap(),
            calculate_prayer_times(&new_year(), &doha(), &params).unwrap()
        );
    }

    #[test]
    fn test_invalid_location_rejected() {
        let params = CalculationParams::default();
        assert_eq!(
            calculate_prayer_times(&new_year(), &Coordinates::new(95.0, 0.0), &params),
            Err(Error::invalid_latitude(95.0))
        );
        let result = calculate_prayer_times(&new_year(), &Coordinates::new(0.0, f64::NAN), &params);
        assert!(result.unwrap_err().is_invalid_location());
    }

    #[test]
    fn test_manual_adjustments_shift_only_their_prayers() {
        let base = CalculationParams::from(MethodName::MWL);
        let adjusted = base.with_adjustments(PrayerAdjustments {
            fajr: -2,
            dhuhr: 2,
            asr: 2,
            maghrib: 2,
            ..PrayerAdjustments::NONE
        });

        let before = calculate_prayer_times(&new_year(), &doha(), &base).unwrap();
        let after = calculate_prayer_times(&new_year(), &doha(), &adjusted).unwrap();

        let shift = |prayer| (*after.time_for(prayer) - *before.time_for(prayer)).num_minutes();
        // Each shift may differ by one minute from the offset through rounding
        assert!((shift(Prayer::Fajr) + 2).abs() <= 1);
        assert!((shift(Prayer::Dhuhr) - 2).abs() <= 1);
        assert!((shift(Prayer::Asr) - 2).abs() <= 1);
        assert!((shift(Prayer::Maghrib) - 2).abs() <= 1);
        assert_eq!(after.sunrise, before.sunrise);
        assert_eq!(after.isha, before.isha);
    }

    #[test]
    fn test_preset_adjustments_not_applied_by_default() {
        let plain = CalculationParams::from(MethodName::Turkey);
        let published = plain.with_method_adjustments(true);
        let before = calculate_prayer_times(&new_year(), &doha(), &plain).unwrap();
        let after = calculate_prayer_times(&new_year(), &doha(), &published).unwrap();

        let mwl = CalculationParams::from(MethodName::MWL);
        let reference = calculate_prayer_times(&new_year(), &doha(), &mwl).unwrap();
        assert_eq!(before.dhuhr, reference.dhuhr);

        assert!(((after.sunrise - before.sunrise).num_minutes() + 7).abs() <= 1);
        assert!(((after.dhuhr - before.dhuhr).num_minutes() - 5).abs() <= 1);
        assert_eq!(after.fajr, before.fajr);
    }

    #[test]
    fn test_rounding_opt_in_keeps_whole_minutes() {
        let params = CalculationParams::from(MethodName::Singapore).with_rounding(true);
        assert_eq!(params.rounding(), Rounding::Up);
        let times = calculate_prayer_times(&new_year(), &doha(), &params).unwrap();
        for (_, time) in times.iter() {
            assert_eq!(time.second(), 0);
        }

        let mut seconds = get_method(MethodName::Custom);
        seconds.rounding = Some(Rounding::None);
        let times = calculate_prayer_times(
            &new_year(),
            &doha(),
            &CalculationParams::new(seconds).with_rounding(true),
        )
        .unwrap();
        assert!(times.iter().any(|(_, time)| time.second() != 0));
    }

    #[test]
    fn test_hanafi_asr_later() {
        let standard = CalculationParams::default();
        let hanafi = standard.with_asr_method(AsrMethod::Hanafi);
        let a = calculate_prayer_times(&new_year(), &doha(), &standard).unwrap();
        let b = calculate_prayer_times(&new_year(), &doha(), &hanafi).unwrap();
        assert!(b.asr > a.asr);
        assert_eq!(a.dhuhr, b.dhuhr);
    }

    #[test]
    fn test_high_latitude_rule_bounds_fajr() {
        let oslo = Coordinates::new(59.9139, 10.7522);
        let midsummer = Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();
        let raw = calculate_prayer_times(&midsummer, &oslo, &CalculationParams::default()).unwrap();
        let bounded = calculate_prayer_times(
            &midsummer,
            &oslo,
            &CalculationParams::default().with_high_latitude_method(HighLatitudeMethod::OneSeventh),
        )
        .unwrap();

        assert!(bounded.fajr > raw.fajr);
        assert!(bounded.isha < raw.isha);
        assert_eq!(bounded.sunrise, raw.sunrise);
        assert!(bounded.is_chronological());
    }

    #[test]
    fn test_high_latitude_rule_caps_interval_isha() {
        let oslo = Coordinates::new(59.9139, 10.7522);
        let midsummer = Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();
        let params = CalculationParams::from(MethodName::Makkah)
            .with_high_latitude_method(HighLatitudeMethod::OneSeventh);
        let times = calculate_prayer_times(&midsummer, &oslo, &params).unwrap();

        let night = times.sunrise + TimeDelta::days(1) - times.maghrib;
        let gap = times.isha - times.maghrib;
        assert!(gap < TimeDelta::minutes(90), "{gap}");
        assert!(gap <= night / 7 + TimeDelta::minutes(1), "{gap} vs {night}");
        assert!(times.is_chronological());
    }
}
