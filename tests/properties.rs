//! Property tests over dates, locations and conventions.

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use proptest::prelude::*;
use prayer_times::solar::solar_position;
use prayer_times::time::{hours_to_datetime, julian_day_for_date};
use prayer_times::{
    AsrMethod, CalculationParams, Coordinates, HighLatitudeMethod, MethodName, Rounding,
    calculate_prayer_times, current_prayer, get_method, night_portion,
};

fn date_from(days: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap() + TimeDelta::days(days)
}

fn any_rule() -> impl Strategy<Value = HighLatitudeMethod> {
    prop_oneof![
        Just(HighLatitudeMethod::None),
        Just(HighLatitudeMethod::NightMiddle),
        Just(HighLatitudeMethod::OneSeventh),
        Just(HighLatitudeMethod::AngleBased),
    ]
}

fn any_method() -> impl Strategy<Value = MethodName> {
    proptest::sample::select(MethodName::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_dhuhr_is_solar_noon(
        days in 0i64..36_500,
        latitude in -65.0..65.0f64,
        longitude in -180.0..180.0f64,
        hanafi in any::<bool>(),
    ) {
        let date = date_from(days);
        let asr_method = if hanafi { AsrMethod::Hanafi } else { AsrMethod::Standard };
        let params = CalculationParams::default().with_asr_method(asr_method);
        let location = Coordinates::new(latitude, longitude);
        let times = calculate_prayer_times(&date, &location, &params).unwrap();

        let sun = solar_position(julian_day_for_date(date.date_naive()));
        let noon = 12.0 - longitude / 15.0 - sun.equation_of_time / 60.0;
        prop_assert_eq!(times.dhuhr, hours_to_datetime(&date, noon, Rounding::Nearest).unwrap());
    }

    #[test]
    fn prop_high_latitude_rule_inactive_below_threshold(
        days in 0i64..36_500,
        latitude in -47.999..47.999f64,
        longitude in -180.0..180.0f64,
        rule in any_rule(),
        method in any_method(),
    ) {
        let date = date_from(days);
        let location = Coordinates::new(latitude, longitude);
        let plain = CalculationParams::from(method);
        prop_assert_eq!(
            calculate_prayer_times(&date, &location, &plain.with_high_latitude_method(rule))
                .unwrap(),
            calculate_prayer_times(&date, &location, &plain).unwrap()
        );
    }

    #[test]
    fn prop_hanafi_asr_not_earlier(
        days in 0i64..36_500,
        latitude in -66.0..66.0f64,
        longitude in -180.0..180.0f64,
    ) {
        let date = date_from(days);
        let location = Coordinates::new(latitude, longitude);
        let standard = CalculationParams::default();
        let hanafi = standard.with_asr_method(AsrMethod::Hanafi);
        let a = calculate_prayer_times(&date, &location, &standard).unwrap();
        let b = calculate_prayer_times(&date, &location, &hanafi).unwrap();
        prop_assert!(b.asr >= a.asr);
    }

    #[test]
    fn prop_interval_isha_follows_maghrib(
        days in 0i64..36_500,
        latitude in -60.0..60.0f64,
        longitude in -180.0..180.0f64,
        qatar in any::<bool>(),
        rule in any_rule(),
    ) {
        let method = if qatar { MethodName::Qatar } else { MethodName::Makkah };
        let params = CalculationParams::from(method).with_high_latitude_method(rule);
        let date = date_from(days);
        let location = Coordinates::new(latitude, longitude);
        let times = calculate_prayer_times(&date, &location, &params).unwrap();
        let gap = (times.isha - times.maghrib).num_minutes();
        if rule.applies_at(latitude) {
            prop_assert!(gap <= 91, "gap {gap}");
        } else {
            prop_assert!((gap - 90).abs() <= 1, "gap {gap}");
        }
    }

    #[test]
    fn prop_calculation_total_for_valid_locations(
        days in -36_500i64..36_500,
        latitude in -90.0..=90.0f64,
        longitude in -180.0..=180.0f64,
        elevation in -100.0..9000.0f64,
        method in any_method(),
        rule in any_rule(),
    ) {
        let location = Coordinates::new(latitude, longitude).with_elevation(elevation);
        let params = CalculationParams::from(method).with_high_latitude_method(rule);
        prop_assert!(calculate_prayer_times(&date_from(days), &location, &params).is_ok());
    }

    #[test]
    fn prop_night_portion_endpoints(
        start in 0i64..4_000_000_000,
        night_seconds in 1i64..86_400,
    ) {
        let maghrib = Utc.timestamp_opt(start, 0).unwrap();
        let fajr = maghrib + TimeDelta::seconds(night_seconds);
        prop_assert_eq!(night_portion(&maghrib, &fajr, 0.0), maghrib);
        prop_assert_eq!(night_portion(&maghrib, &fajr, 1.0), fajr);

        let middle = night_portion(&maghrib, &fajr, 0.5);
        prop_assert!(maghrib < middle && middle < fajr);
    }

    #[test]
    fn prop_every_instant_of_the_day_has_a_window(
        days in 0i64..3_650,
        latitude in -45.0..45.0f64,
        longitude in -180.0..180.0f64,
        offset_minutes in 0i64..1_440,
    ) {
        let date = date_from(days);
        let location = Coordinates::new(latitude, longitude);
        let times =
            calculate_prayer_times(&date, &location, &CalculationParams::default()).unwrap();
        let now = times.fajr + TimeDelta::minutes(offset_minutes);
        let window = current_prayer(&times, &now, None);
        prop_assert!(window.is_some());
        prop_assert!(window.unwrap().minutes_until_next >= 0);
    }
}

#[test]
fn test_lookup_mutation_never_leaks() {
    for name in MethodName::ALL {
        let original = get_method(name);
        let mut copy = get_method(name);
        copy.fajr_angle += 5.0;
        copy.isha_interval = Some(1.0);
        copy.maghrib_angle = Some(9.0);
        assert_eq!(get_method(name), original, "{name}");
    }
}

#[test]
fn test_date_helper() {
    assert_eq!(
        date_from(366).date_naive(),
        NaiveDate::from_ymd_opt(2001, 1, 1).unwrap()
    );
}
