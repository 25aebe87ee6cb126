//! Hour-angle solver.
//!
//! Turns a location, the day's solar position and a method's angles into six
//! fractional clock hours. Clock hours here are mean solar time at the prime
//! meridian (solar noon is `12 − longitude/15 − EoT/60`), with no calendar
//! anchoring yet.

use log::{debug, trace};

use crate::math::{acos_deg, atan_deg, cos_deg, sin_deg, sqrt, tan_deg};
use crate::method::CalculationMethod;
use crate::params::AsrMethod;
use crate::solar::SolarPosition;
use crate::time::format_hours;
use crate::types::{Coordinates, Prayer};

/// Depression of the sun's centre at sunrise and sunset: refraction plus
/// the solar semi-diameter, in degrees.
pub const SUNRISE_DEPRESSION: f64 = 0.833;

/// Extra horizon dip per square root of a meter of elevation, in degrees.
const ELEVATION_DIP: f64 = 0.0347;

/// Fractional clock hours for the six markers of one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PrayerTimesNumeric {
    pub fajr: f64,
    pub sunrise: f64,
    pub dhuhr: f64,
    pub asr: f64,
    pub maghrib: f64,
    pub isha: f64,
}

impl PrayerTimesNumeric {
    pub const fn get(&self, prayer: Prayer) -> f64 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    pub fn get_mut(&mut self, prayer: Prayer) -> &mut f64 {
        match prayer {
            Prayer::Fajr => &mut self.fajr,
            Prayer::Sunrise => &mut self.sunrise,
            Prayer::Dhuhr => &mut self.dhuhr,
            Prayer::Asr => &mut self.asr,
            Prayer::Maghrib => &mut self.maghrib,
            Prayer::Isha => &mut self.isha,
        }
    }
}

/// Clamps the hour-angle cosine into the domain of `acos`.
///
/// Invariant: for any non-NaN input the result lies in [−1, 1].
///
/// A cosine above 1 means the sun never climbs to the target altitude that
/// day; the clamp turns it into a zero hour angle (the event collapses onto
/// solar noon). A cosine below −1 means the sun never sinks to the target
/// altitude, as in summer twilight at high latitude; the clamp turns it into
/// a twelve-hour angle (the event collapses onto solar midnight). The
/// high-latitude resolver relies on that midnight saturation: a Fajr or Isha
/// pushed to midnight is always further from sunrise or Maghrib than its
/// fallback, so the fallback wins.
fn clamp_to_acos_domain(cosine: f64) -> f64 {
    cosine.clamp(-1.0, 1.0)
}

/// Hours between solar noon and the moment the sun is at `altitude` degrees.
///
/// Negative altitudes are below the horizon.
pub(crate) fn hour_angle(altitude: f64, latitude: f64, declination: f64) -> f64 {
    let cosine = (sin_deg(altitude) - sin_deg(latitude) * sin_deg(declination))
        / (cos_deg(latitude) * cos_deg(declination));

    let clamped = clamp_to_acos_domain(cosine);
    if clamped != cosine && !cosine.is_nan() {
        debug!(
            "sun does not reach {altitude:.3}° at latitude {latitude:.3}° \
             (cos H = {cosine:.4}); hour angle saturated"
        );
    }

    acos_deg(clamped) / 15.0
}

/// Sun altitude at Asr, in degrees.
///
/// Asr begins when an object's shadow equals `factor` times its length plus
/// its shadow at noon.
pub(crate) fn asr_altitude(asr_method: AsrMethod, latitude: f64, declination: f64) -> f64 {
    atan_deg(1.0 / (asr_method.shadow_factor() + tan_deg((latitude - declination).abs())))
}

/// Depression used for sunrise and sunset, lowered by the horizon dip at `elevation` meters.
pub(crate) fn sunrise_depression(elevation: f64) -> f64 {
    SUNRISE_DEPRESSION + ELEVATION_DIP * sqrt(elevation.max(0.0))
}

/// Solar noon in clock hours.
pub(crate) fn solar_noon(longitude: f64, sun: &SolarPosition) -> f64 {
    12.0 - longitude / 15.0 - sun.equation_of_time / 60.0
}

/// Raw times before high-latitude resolution and adjustments.
pub(crate) fn raw_times(
    coordinates: &Coordinates,
    sun: &SolarPosition,
    method: &CalculationMethod,
    asr_method: AsrMethod,
) -> PrayerTimesNumeric {
    let latitude = coordinates.latitude;
    let declination = sun.declination;
    let noon = solar_noon(coordinates.longitude, sun);
    let horizon = sunrise_depression(coordinates.elevation_meters());

    let sunrise = noon - hour_angle(-horizon, latitude, declination);
    let sunset = noon + hour_angle(-horizon, latitude, declination);

    let maghrib = match method.maghrib_angle {
        Some(angle) => noon + hour_angle(-angle, latitude, declination),
        None => sunset,
    };

    let isha = match method.isha_interval {
        Some(minutes) => maghrib + minutes / 60.0,
        None => noon + hour_angle(-method.isha_angle, latitude, declination),
    };

    let times = PrayerTimesNumeric {
        fajr: noon - hour_angle(-method.fajr_angle, latitude, declination),
        sunrise,
        dhuhr: noon,
        asr: noon
            + hour_angle(
                asr_altitude(asr_method, latitude, declination),
                latitude,
                declination,
            ),
        maghrib,
        isha,
    };

    trace!(
        "raw times for {}: fajr {} sunrise {} dhuhr {} asr {} maghrib {} isha {}",
        method.name,
        format_hours(times.fajr),
        format_hours(times.sunrise),
        format_hours(times.dhuhr),
        format_hours(times.asr),
        format_hours(times.maghrib),
        format_hours(times.isha),
    );

    times
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::{MethodName, get_method};
    use crate::solar::solar_position;
    use crate::time::julian_day;
    use approx::assert_abs_diff_eq;

    const MINUTE: f64 = 1.0 / 60.0;

    fn doha_sun() -> SolarPosition {
        solar_position(julian_day(2024, 1, 1))
    }

    #[test]
    fn test_clamp_keeps_acos_domain() {
        assert_eq!(clamp_to_acos_domain(1.7), 1.0);
        assert_eq!(clamp_to_acos_domain(-3.0), -1.0);
        assert_eq!(clamp_to_acos_domain(0.25), 0.25);
        assert!(clamp_to_acos_domain(f64::NAN).is_nan());
    }

    #[test]
    fn test_hour_angle_saturates() {
        // Polar winter: the sun never climbs to the horizon
        assert_eq!(hour_angle(-0.833, 80.0, -23.0), 0.0);
        // Polar summer: the sun never sinks 18° below the horizon
        assert_abs_diff_eq!(hour_angle(-18.0, 60.0, 23.0), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hour_angle_at_equinox_equator() {
        // Horizon crossing is six hours from noon when latitude and declination are zero
        assert_abs_diff_eq!(hour_angle(0.0, 0.0, 0.0), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_elevation_lowers_horizon() {
        assert_eq!(sunrise_depression(0.0), SUNRISE_DEPRESSION);
        assert_eq!(sunrise_depression(-50.0), SUNRISE_DEPRESSION);
        assert_abs_diff_eq!(sunrise_depression(100.0), 0.833 + 0.347, epsilon = 1e-12);
    }

    #[test]
    fn test_hanafi_asr_altitude_is_lower() {
        for latitude in [-40.0, 0.0, 21.4, 51.5] {
            let standard = asr_altitude(AsrMethod::Standard, latitude, 10.0);
            let hanafi = asr_altitude(AsrMethod::Hanafi, latitude, 10.0);
            assert!(hanafi < standard);
        }
    }

    #[test]
    fn test_doha_qatar_raw_times() {
        let coordinates = Coordinates::new(25.2854, 51.531);
        let times = raw_times(
            &coordinates,
            &doha_sun(),
            &get_method(MethodName::Qatar),
            AsrMethod::Standard,
        );

        assert_abs_diff_eq!(times.fajr, 1.0 + 58.0 * MINUTE, epsilon = MINUTE);
        assert_abs_diff_eq!(times.sunrise, 3.0 + 19.0 * MINUTE, epsilon = MINUTE);
        assert_abs_diff_eq!(times.dhuhr, 8.0 + 37.0 * MINUTE, epsilon = MINUTE);
        assert_abs_diff_eq!(times.asr, 11.0 + 35.0 * MINUTE, epsilon = MINUTE);
        assert_abs_diff_eq!(times.maghrib, 13.0 + 55.0 * MINUTE, epsilon = MINUTE);
        assert_abs_diff_eq!(times.isha - times.maghrib, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_maghrib_angle_delays_maghrib() {
        let coordinates = Coordinates::new(35.6892, 51.389);
        let sun = doha_sun();
        let tehran = raw_times(
            &coordinates,
            &sun,
            &get_method(MethodName::Tehran),
            AsrMethod::Standard,
        );
        let mwl = raw_times(
            &coordinates,
            &sun,
            &get_method(MethodName::MWL),
            AsrMethod::Standard,
        );
        assert!(tehran.maghrib > mwl.maghrib);
        assert_eq!(tehran.dhuhr, mwl.dhuhr);
        assert_eq!(tehran.sunrise, mwl.sunrise);
    }

    #[test]
    fn test_numeric_accessors() {
        let mut times = raw_times(
            &Coordinates::new(0.0, 0.0),
            &doha_sun(),
            &get_method(MethodName::MWL),
            AsrMethod::Standard,
        );
        for prayer in Prayer::ALL {
            *times.get_mut(prayer) += 1.0;
        }
        assert_eq!(times.get(Prayer::Dhuhr), times.dhuhr);
        assert!(times.get(Prayer::Isha) > times.get(Prayer::Maghrib));
    }
}
