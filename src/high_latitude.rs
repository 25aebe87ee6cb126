//! Fallbacks for Fajr and Isha far from the equator.
//!
//! Above about 48° the sun can stay shallow enough in summer that the Fajr
//! and Isha twilight angles are never reached, or reached absurdly close to
//! midnight. The rules here cap how far Fajr may sit before sunrise and how
//! far Isha may sit after Maghrib, as a share of the night.

use log::debug;

use crate::method::CalculationMethod;
use crate::solver::PrayerTimesNumeric;
use crate::time::format_hours;

/// Absolute latitude from which the fallback rules apply, in degrees.
pub const HIGH_LATITUDE_THRESHOLD: f64 = 48.0;

/// Rule used to bound Fajr and Isha at high latitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HighLatitudeMethod {
    /// Keep the raw times
    #[default]
    None,
    /// Half the night
    NightMiddle,
    /// One seventh of the night
    OneSeventh,
    /// The twilight angle over sixty, as a share of the night
    AngleBased,
}

impl HighLatitudeMethod {
    /// Whether the rule does anything at `latitude`.
    #[must_use]
    pub fn applies_at(self, latitude: f64) -> bool {
        self != Self::None && latitude.abs() >= HIGH_LATITUDE_THRESHOLD
    }

    /// Share of the night allowed between Fajr and sunrise, or between
    /// Maghrib and Isha, for a twilight `angle`.
    const fn night_fraction(self, angle: f64) -> f64 {
        match self {
            Self::None => 0.0,
            Self::NightMiddle => 0.5,
            Self::OneSeventh => 1.0 / 7.0,
            Self::AngleBased => angle / 60.0,
        }
    }
}

/// Bounds Fajr and Isha of `times` when `rule` applies at `latitude`.
///
/// Fajr moves later to `sunrise − portion` only when the raw Fajr is earlier
/// than that; Isha moves earlier to `maghrib + portion` only when the raw
/// Isha is later. The Isha ceiling also bounds Isha defined as a fixed
/// interval after Maghrib. Below the threshold, or with
/// [`HighLatitudeMethod::None`], this is the identity.
pub(crate) fn resolve(
    times: PrayerTimesNumeric,
    latitude: f64,
    rule: HighLatitudeMethod,
    method: &CalculationMethod,
) -> PrayerTimesNumeric {
    if !rule.applies_at(latitude) {
        return times;
    }

    let night = times.sunrise - times.maghrib + 24.0;
    let mut resolved = times;

    let fajr_limit = times.sunrise - night * rule.night_fraction(method.fajr_angle);
    if times.fajr < fajr_limit {
        debug!(
            "{rule:?} at latitude {latitude:.3}°: fajr {} -> {}",
            format_hours(times.fajr),
            format_hours(fajr_limit)
        );
        resolved.fajr = fajr_limit;
    }

    let isha_limit = times.maghrib + night * rule.night_fraction(method.isha_angle);
    if times.isha > isha_limit {
        debug!(
            "{rule:?} at latitude {latitude:.3}°: isha {} -> {}",
            format_hours(times.isha),
            format_hours(isha_limit)
        );
        resolved.isha = isha_limit;
    }

    resolved
}
