//! Approximate solar position for prayer-time work.
//!
//! Mean-sun formulas from the U.S. Naval Observatory's low-precision
//! ephemeris: declination within about 1 arc minute and equation of time
//! within a few seconds for dates between 1950 and 2050. That is enough for
//! timetables published to the minute; it is not a general ephemeris.

#![allow(clippy::unreadable_literal)]

use crate::math::{
    asin_deg, cos_deg, normalize_degrees_0_to_360, radians_to_degrees, sin_deg, tan_deg,
};
use crate::time::J2000_JDN;

/// Orbital eccentricity of the Earth at J2000.0.
const EARTH_ECCENTRICITY: f64 = 0.016708634;

/// Sun declination and equation of time for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Angle between the sun's rays and the equatorial plane, in degrees
    pub declination: f64,
    /// Apparent minus mean solar time, in minutes
    pub equation_of_time: f64,
}

/// Computes the solar position for a Julian date.
///
/// Total for every finite input; never fails.
///
/// # Example
/// ```
/// # use prayer_times::{solar::solar_position, time::julian_day};
/// let june = solar_position(julian_day(2024, 6, 21));
/// assert!((june.declination - 23.4).abs() < 0.1);
/// ```
#[must_use]
pub fn solar_position(jd: f64) -> SolarPosition {
    let d = jd - J2000_JDN;

    let mean_anomaly = normalize_degrees_0_to_360(357.529 + 0.98560028 * d);
    let mean_longitude = normalize_degrees_0_to_360(280.459 + 0.98564736 * d);
    let center = 1.915 * sin_deg(mean_anomaly) + 0.020 * sin_deg(2.0 * mean_anomaly);
    let ecliptic_longitude = normalize_degrees_0_to_360(mean_longitude + center);
    let obliquity = 23.439 - 0.00000036 * d;

    let declination = asin_deg(sin_deg(obliquity) * sin_deg(ecliptic_longitude));

    SolarPosition {
        declination,
        equation_of_time: equation_of_time(obliquity, mean_longitude, mean_anomaly),
    }
}

/// Equation of time in minutes, truncated Fourier form.
///
/// Series in y = tan²(ε/2) over sin 2L, sin g, sin g·cos 2L, sin 4L and
/// sin 2g, with L the mean longitude and g the mean anomaly.
fn equation_of_time(obliquity: f64, mean_longitude: f64, mean_anomaly: f64) -> f64 {
    let half_tan = tan_deg(obliquity / 2.0);
    let y = half_tan * half_tan;
    let e = EARTH_ECCENTRICITY;
    let l2 = 2.0 * mean_longitude;

    let radians = y * sin_deg(l2) - 2.0 * e * sin_deg(mean_anomaly)
        + 4.0 * e * y * sin_deg(mean_anomaly) * cos_deg(l2)
        - 0.5 * y * y * sin_deg(2.0 * l2)
        - 1.25 * e * e * sin_deg(2.0 * mean_anomaly);

    // 4 minutes of clock time per degree of hour angle
    4.0 * radians_to_degrees(radians)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::julian_day;

    #[test]
    fn test_declination_at_solstices_and_equinox() {
        let june = solar_position(julian_day(2024, 6, 20));
        assert!((june.declination - 23.44).abs() < 0.1, "{june:?}");

        let december = solar_position(julian_day(2024, 12, 21));
        assert!((december.declination + 23.44).abs() < 0.1, "{december:?}");

        let march = solar_position(julian_day(2024, 3, 20));
        assert!(march.declination.abs() < 0.5, "{march:?}");
    }

    #[test]
    fn test_equation_of_time_extremes() {
        // Early November: sun fast by about 16.4 minutes
        let november = solar_position(julian_day(2024, 11, 3));
        assert!((november.equation_of_time - 16.4).abs() < 0.3, "{november:?}");

        // Mid February: sun slow by about 14.2 minutes
        let february = solar_position(julian_day(2024, 2, 11));
        assert!((february.equation_of_time + 14.2).abs() < 0.3, "{february:?}");
    }

    #[test]
    fn test_total_for_extreme_dates() {
        for jd in [0.0, 1e7, -1e7, J2000_JDN] {
            let position = solar_position(jd);
            assert!(position.declination.is_finite());
            assert!(position.equation_of_time.is_finite());
        }
    }
}
