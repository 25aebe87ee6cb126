//! Core data types for prayer time calculations.

use alloc::string::{String, ToString};
use core::fmt;

use chrono::{DateTime, TimeZone};

use crate::Result;
use crate::error::check_coordinates;

/// Observer location.
///
/// Coordinates are validated when a calculation starts, not on
/// construction, so a value deserialized from configuration can be built
/// freely and rejected later with an `InvalidLatitude`/`InvalidLongitude` error.
///
/// # Example
/// ```
/// # use prayer_times::Coordinates;
/// let doha = Coordinates::new(25.2854, 51.531).with_elevation(10.0);
/// assert_eq!(doha.elevation_meters(), 10.0);
/// assert!(doha.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    /// Latitude in degrees, north positive (-90 to +90)
    pub latitude: f64,
    /// Longitude in degrees, east positive (-180 to +180)
    pub longitude: f64,
    /// Height above sea level in meters
    #[cfg_attr(feature = "serde", serde(default))]
    pub elevation: Option<f64>,
}

impl Coordinates {
    /// Creates a sea-level location.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation: None,
        }
    }

    /// Sets the elevation in meters.
    #[must_use]
    pub const fn with_elevation(mut self, meters: f64) -> Self {
        self.elevation = Some(meters);
        self
    }

    /// Elevation in meters; missing, negative or NaN elevations count as sea level.
    #[must_use]
    pub fn elevation_meters(&self) -> f64 {
        self.elevation.unwrap_or(0.0).max(0.0)
    }

    /// Checks latitude and longitude ranges.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
    pub fn validate(&self) -> Result<()> {
        check_coordinates(self.latitude, self.longitude)
    }
}

/// One of the six daily time markers, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prayer {
    /// Dawn prayer
    Fajr,
    /// Sunrise (end of the Fajr window)
    Sunrise,
    /// Midday prayer
    Dhuhr,
    /// Afternoon prayer
    Asr,
    /// Sunset prayer
    Maghrib,
    /// Night prayer
    Isha,
}

impl Prayer {
    /// All six markers in the order they occur during a day.
    pub const ALL: [Self; 6] = [
        Self::Fajr,
        Self::Sunrise,
        Self::Dhuhr,
        Self::Asr,
        Self::Maghrib,
        Self::Isha,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
        }
    }

    /// The marker that follows this one; Isha is followed by the next day's Fajr.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Fajr => Self::Sunrise,
            Self::Sunrise => Self::Dhuhr,
            Self::Dhuhr => Self::Asr,
            Self::Asr => Self::Maghrib,
            Self::Maghrib => Self::Isha,
            Self::Isha => Self::Fajr,
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// The six prayer times for one calendar day.
///
/// Times carry the time zone of the date they were calculated for. Under
/// ordinary latitudes and methods they are strictly increasing, but this
/// is not enforced: large manual adjustments or polar geometry can reorder
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerTimes<Tz: TimeZone> {
    /// Fajr
    pub fajr: DateTime<Tz>,
    /// Sunrise
    pub sunrise: DateTime<Tz>,
    /// Dhuhr
    pub dhuhr: DateTime<Tz>,
    /// Asr
    pub asr: DateTime<Tz>,
    /// Maghrib
    pub maghrib: DateTime<Tz>,
    /// Isha
    pub isha: DateTime<Tz>,
}

impl<Tz: TimeZone> PrayerTimes<Tz> {
    /// Time of one marker.
    #[must_use]
    pub const fn time_for(&self, prayer: Prayer) -> &DateTime<Tz> {
        match prayer {
            Prayer::Fajr => &self.fajr,
            Prayer::Sunrise => &self.sunrise,
            Prayer::Dhuhr => &self.dhuhr,
            Prayer::Asr => &self.asr,
            Prayer::Maghrib => &self.maghrib,
            Prayer::Isha => &self.isha,
        }
    }

    /// Iterates over the six markers in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, &DateTime<Tz>)> + '_ {
        Prayer::ALL
            .into_iter()
            .map(move |prayer| (prayer, self.time_for(prayer)))
    }

    /// True when each marker is strictly later than the one before it.
    #[must_use]
    pub fn is_chronological(&self) -> bool {
        Prayer::ALL
            .windows(2)
            .all(|pair| self.time_for(pair[0]) < self.time_for(pair[1]))
    }

    /// Wall-clock "HH:MM" strings in chronological order.
    #[must_use]
    pub fn format_hhmm(&self) -> [String; 6]
    where
        Tz::Offset: fmt::Display,
    {
        Prayer::ALL.map(|prayer| self.time_for(prayer).format("%H:%M").to_string())
    }
}
