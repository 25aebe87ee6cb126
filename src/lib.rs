//! # Prayer Times
//!
//! Daily Islamic prayer times from closed-form solar astronomy.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! Given a calendar date, a location and a calculation convention, the
//! library computes the six daily markers: Fajr, Sunrise, Dhuhr, Asr,
//! Maghrib and Isha. It also answers which prayer's window is open at an
//! instant and where the middle and last third of the night fall.
//!
//! - Fourteen published calculation methods, plus custom angles
//! - Standard and Hanafi Asr
//! - Night-middle, one-seventh and angle-based rules for high latitudes
//! - Per-prayer minute adjustments
//! - Stateless and thread-safe: every call is a pure function of its arguments
//!
//! The solar model uses mean-sun formulas accurate to about a minute. That
//! suits timetables; it is not an ephemeris.
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: Serialize and deserialize locations, methods and parameters
//!
//! **Configuration examples:**
//! ```toml
//! # Default
//! prayer-times = "0.1"
//!
//! # no_std
//! prayer-times = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{FixedOffset, TimeZone};
//! use prayer_times::{
//!     calculate_prayer_times, AsrMethod, CalculationParams, Coordinates, HighLatitudeMethod,
//!     MethodName,
//! };
//!
//! // Times come back in the zone of the date passed in
//! let london = FixedOffset::east_opt(3600).unwrap();
//! let date = london.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
//!
//! let params = CalculationParams::from(MethodName::MWL)
//!     .with_asr_method(AsrMethod::Standard)
//!     .with_high_latitude_method(HighLatitudeMethod::NightMiddle);
//!
//! let london = Coordinates::new(51.5074, -0.1278);
//! let times = calculate_prayer_times(&date, &london, &params).unwrap();
//! assert!(times.is_chronological());
//!
//! for (prayer, time) in times.iter() {
//!     println!("{prayer:>8}: {}", time.format("%H:%M"));
//! }
//! ```
//!
//! ## Night portions
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use prayer_times::{calculate_sunnah_times, CalculationParams, Coordinates, MethodName};
//!
//! let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let doha = Coordinates::new(25.2854, 51.531);
//!
//! let night = calculate_sunnah_times(&date, &doha, &MethodName::Qatar.into()).unwrap();
//! assert!(night.middle_of_the_night < night.last_third_of_the_night);
//! ```
//!
//! ## Conventions
//!
//! - **Angles** are degrees. Latitude is north positive, longitude east positive.
//! - **Twilight angles** on a method are depressions: `18.0` means 18° below the horizon.
//! - **Clock hours** inside the solver are universal time; the result is expressed in the
//!   time zone of the input date.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of table values in tests
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("enable either the `std` or the `libm` feature for float math");

extern crate alloc;

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::high_latitude::{HIGH_LATITUDE_THRESHOLD, HighLatitudeMethod};
pub use crate::method::{
    CalculationMethod, MethodName, MethodOverrides, MidnightMode, Region, Rounding, Shafaq,
    available_methods, create_custom_method, get_method, method_description, regional_methods,
};
pub use crate::params::{AsrMethod, CalculationParams, PrayerAdjustments};
pub use crate::solar::SolarPosition;
pub use crate::sunnah::{SunnahTimes, calculate_sunnah_times, is_last_third_of_night, night_portion};
pub use crate::times::calculate_prayer_times;
pub use crate::types::{Coordinates, Prayer, PrayerTimes};
pub use crate::window::{PrayerWindow, current_prayer};

// Astronomy
pub mod solar;
mod solver;

// Conventions
pub mod high_latitude;
pub mod method;
pub mod params;

// Calculation and post-processing
pub mod sunnah;
pub mod times;
pub mod window;

// Core modules
pub mod error;
pub mod types;

// Shared utilities
pub mod math;
pub mod time;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};

    #[test]
    fn test_result_independent_of_zone_type() {
        let fixed = "2024-01-01T00:00:00+03:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let utc = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let doha = Coordinates::new(25.2854, 51.531);
        let params = CalculationParams::from(MethodName::Qatar);

        let in_doha = calculate_prayer_times(&fixed, &doha, &params).unwrap();
        let in_utc = calculate_prayer_times(&utc, &doha, &params).unwrap();

        for prayer in Prayer::ALL {
            assert_eq!(in_doha.time_for(prayer), in_utc.time_for(prayer));
        }
    }

    #[test]
    fn test_pipeline_end_to_end() {
        let date = Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap();
        let makkah = Coordinates::new(21.4225, 39.8262).with_elevation(277.0);
        let params = CalculationParams::from(MethodName::Makkah);

        let times = calculate_prayer_times(&date, &makkah, &params).unwrap();
        assert!(times.is_chronological());

        let window = current_prayer(&times, &times.asr, None).unwrap();
        assert_eq!(window.current, Prayer::Asr);
        assert_eq!(window.next, Prayer::Maghrib);

        let night = calculate_sunnah_times(&date, &makkah, &params).unwrap();
        assert!(night.middle_of_the_night > times.isha);
    }
}
