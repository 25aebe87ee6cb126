//! Calculation method presets.
//!
//! The catalogue is a fixed table of fourteen conventions published by
//! Islamic authorities. Each entry is a plain `Copy` value, so every lookup
//! hands the caller an independent record; nothing a caller does to it can
//! reach the table.

use core::fmt;
use core::str::FromStr;

use crate::params::PrayerAdjustments;
use crate::{Error, Result};

/// Name of a calculation method.
///
/// Closed on purpose: descriptions, regions and presets are exhaustive
/// matches over this enum, so adding a method fails to compile until all of
/// them are updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MethodName {
    /// Muslim World League
    MWL,
    /// Islamic Society of North America
    ISNA,
    /// Egyptian General Authority of Survey
    Egypt,
    /// Umm Al-Qura University, Makkah
    Makkah,
    /// University of Islamic Sciences, Karachi
    Karachi,
    /// Institute of Geophysics, University of Tehran
    Tehran,
    /// Shia Ithna-Ashari, Leva Institute, Qum
    Jafari,
    /// General Authority of Islamic Affairs and Endowments, UAE
    Dubai,
    /// Ministry of Awqaf and Islamic Affairs, Qatar
    Qatar,
    /// Ministry of Awqaf and Islamic Affairs, Kuwait
    Kuwait,
    /// Majlis Ugama Islam Singapura
    Singapore,
    /// Presidency of Religious Affairs, Turkey
    Turkey,
    /// Moonsighting Committee Worldwide
    MoonsightingCommittee,
    /// Caller-defined angles
    Custom,
}

impl MethodName {
    /// Every method, in catalogue order.
    pub const ALL: [Self; 14] = [
        Self::MWL,
        Self::ISNA,
        Self::Egypt,
        Self::Makkah,
        Self::Karachi,
        Self::Tehran,
        Self::Jafari,
        Self::Dubai,
        Self::Qatar,
        Self::Kuwait,
        Self::Singapore,
        Self::Turkey,
        Self::MoonsightingCommittee,
        Self::Custom,
    ];

    /// Short identifier, identical to the variant name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MWL => "MWL",
            Self::ISNA => "ISNA",
            Self::Egypt => "Egypt",
            Self::Makkah => "Makkah",
            Self::Karachi => "Karachi",
            Self::Tehran => "Tehran",
            Self::Jafari => "Jafari",
            Self::Dubai => "Dubai",
            Self::Qatar => "Qatar",
            Self::Kuwait => "Kuwait",
            Self::Singapore => "Singapore",
            Self::Turkey => "Turkey",
            Self::MoonsightingCommittee => "MoonsightingCommittee",
            Self::Custom => "Custom",
        }
    }

    /// Region where the method is primarily used. `Custom` has none.
    #[must_use]
    pub const fn region(self) -> Option<Region> {
        match self {
            Self::MWL | Self::Jafari | Self::MoonsightingCommittee => Some(Region::Worldwide),
            Self::ISNA => Some(Region::NorthAmerica),
            Self::Egypt => Some(Region::Africa),
            Self::Makkah | Self::Tehran | Self::Dubai | Self::Qatar | Self::Kuwait => {
                Some(Region::MiddleEast)
            }
            Self::Karachi => Some(Region::SouthAsia),
            Self::Singapore => Some(Region::SoutheastAsia),
            Self::Turkey => Some(Region::Europe),
            Self::Custom => None,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MethodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MethodName {
    type Err = Error;

    /// Parses a method name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(Error::UnknownMethod)
    }
}

/// Geographic grouping used for method browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    /// Used across many regions
    Worldwide,
    /// Europe, including Turkey
    Europe,
    /// United States and Canada
    NorthAmerica,
    /// Arabian Peninsula, Iran and the Levant
    MiddleEast,
    /// Egypt, North and East Africa
    Africa,
    /// Pakistan, India, Bangladesh, Afghanistan
    SouthAsia,
    /// Singapore, Malaysia, Indonesia, Brunei
    SoutheastAsia,
}

impl Region {
    /// Every region.
    pub const ALL: [Self; 7] = [
        Self::Worldwide,
        Self::Europe,
        Self::NorthAmerica,
        Self::MiddleEast,
        Self::Africa,
        Self::SouthAsia,
        Self::SoutheastAsia,
    ];
}

/// How the middle of the night is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MidnightMode {
    /// Midpoint of sunset to sunrise
    #[default]
    Standard,
    /// Midpoint of sunset to Fajr
    Jafari,
}

/// How seconds are rounded away when a method publishes whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Rounding {
    /// Round to the nearest minute
    #[default]
    Nearest,
    /// Any leftover seconds move the time to the next minute
    Up,
    /// Keep seconds
    None,
}

/// Twilight colour used by the Moonsighting Committee for Isha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Shafaq {
    /// Blend of red and white twilight, by latitude and season
    #[default]
    General,
    /// Red twilight
    Ahmer,
    /// White twilight
    Abyad,
}

/// Parameters of a calculation method.
///
/// `method_adjustments` and `rounding` describe how the publishing
/// authority presents its timetable. The calculation only applies them when
/// asked to through [`CalculationParams`](crate::CalculationParams).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationMethod {
    /// Method identifier
    pub name: MethodName,
    /// Sun depression below the horizon at Fajr, in degrees
    pub fajr_angle: f64,
    /// Sun depression below the horizon at Isha, in degrees (0 when Isha is an interval)
    pub isha_angle: f64,
    /// Isha as minutes after Maghrib instead of an angle
    #[cfg_attr(feature = "serde", serde(default))]
    pub isha_interval: Option<f64>,
    /// Sun depression at Maghrib, when Maghrib is not sunset
    #[cfg_attr(feature = "serde", serde(default))]
    pub maghrib_angle: Option<f64>,
    /// How the middle of the night is measured
    #[cfg_attr(feature = "serde", serde(default))]
    pub midnight: Option<MidnightMode>,
    /// Minute offsets the authority adds to its published times
    #[cfg_attr(feature = "serde", serde(default))]
    pub method_adjustments: Option<PrayerAdjustments>,
    /// Rounding used in the authority's published times
    #[cfg_attr(feature = "serde", serde(default))]
    pub rounding: Option<Rounding>,
    /// Twilight variant for Isha
    #[cfg_attr(feature = "serde", serde(default))]
    pub shafaq: Option<Shafaq>,
}

impl CalculationMethod {
    const fn angles(name: MethodName, fajr_angle: f64, isha_angle: f64) -> Self {
        Self {
            name,
            fajr_angle,
            isha_angle,
            isha_interval: None,
            maghrib_angle: None,
            midnight: None,
            method_adjustments: None,
            rounding: None,
            shafaq: None,
        }
    }

    /// True when Isha is a fixed number of minutes after Maghrib.
    #[must_use]
    pub const fn has_isha_interval(&self) -> bool {
        self.isha_interval.is_some()
    }
}

const DHUHR_PLUS_ONE: PrayerAdjustments = PrayerAdjustments {
    dhuhr: 1,
    ..PrayerAdjustments::NONE
};

/// The catalogue, indexed by `MethodName` discriminant.
static REGISTRY: [CalculationMethod; 14] = [
    CalculationMethod {
        method_adjustments: Some(DHUHR_PLUS_ONE),
        ..CalculationMethod::angles(MethodName::MWL, 18.0, 17.0)
    },
    CalculationMethod {
        method_adjustments: Some(DHUHR_PLUS_ONE),
        ..CalculationMethod::angles(MethodName::ISNA, 15.0, 15.0)
    },
    CalculationMethod {
        method_adjustments: Some(DHUHR_PLUS_ONE),
        ..CalculationMethod::angles(MethodName::Egypt, 19.5, 17.5)
    },
    CalculationMethod {
        isha_interval: Some(90.0),
        ..CalculationMethod::angles(MethodName::Makkah, 18.5, 0.0)
    },
    CalculationMethod {
        method_adjustments: Some(DHUHR_PLUS_ONE),
        ..CalculationMethod::angles(MethodName::Karachi, 18.0, 18.0)
    },
    CalculationMethod {
        maghrib_angle: Some(4.5),
        midnight: Some(MidnightMode::Jafari),
        ..CalculationMethod::angles(MethodName::Tehran, 17.7, 14.0)
    },
    CalculationMethod {
        maghrib_angle: Some(4.0),
        midnight: Some(MidnightMode::Jafari),
        ..CalculationMethod::angles(MethodName::Jafari, 16.0, 14.0)
    },
    CalculationMethod {
        method_adjustments: Some(PrayerAdjustments {
            sunrise: -3,
            dhuhr: 3,
            asr: 3,
            maghrib: 3,
            ..PrayerAdjustments::NONE
        }),
        ..CalculationMethod::angles(MethodName::Dubai, 18.2, 18.2)
    },
    CalculationMethod {
        isha_interval: Some(90.0),
        ..CalculationMethod::angles(MethodName::Qatar, 18.0, 0.0)
    },
    CalculationMethod::angles(MethodName::Kuwait, 18.0, 17.5),
    CalculationMethod {
        method_adjustments: Some(DHUHR_PLUS_ONE),
        rounding: Some(Rounding::Up),
        ..CalculationMethod::angles(MethodName::Singapore, 20.0, 18.0)
    },
    CalculationMethod {
        method_adjustments: Some(PrayerAdjustments {
            sunrise: -7,
            dhuhr: 5,
            asr: 4,
            maghrib: 7,
            ..PrayerAdjustments::NONE
        }),
        ..CalculationMethod::angles(MethodName::Turkey, 18.0, 17.0)
    },
    CalculationMethod {
        method_adjustments: Some(PrayerAdjustments {
            dhuhr: 5,
            maghrib: 3,
            ..PrayerAdjustments::NONE
        }),
        shafaq: Some(Shafaq::General),
        ..CalculationMethod::angles(MethodName::MoonsightingCommittee, 18.0, 18.0)
    },
    CalculationMethod::angles(MethodName::Custom, 18.0, 17.0),
];

/// Returns the preset for `name`.
///
/// The result is a copy; changing it never affects later lookups.
///
/// # Example
/// ```
/// # use prayer_times::{get_method, MethodName};
/// let mut makkah = get_method(MethodName::Makkah);
/// assert_eq!(makkah.isha_interval, Some(90.0));
///
/// makkah.fajr_angle = 12.0;
/// assert_eq!(get_method(MethodName::Makkah).fajr_angle, 18.5);
/// ```
#[must_use]
pub fn get_method(name: MethodName) -> CalculationMethod {
    REGISTRY[name.index()]
}

/// Optional fields for [`create_custom_method`]. Anything set here wins over
/// the positional arguments.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MethodOverrides {
    /// Replaces the Fajr angle
    pub fajr_angle: Option<f64>,
    /// Replaces the Isha angle
    pub isha_angle: Option<f64>,
    /// Isha as minutes after Maghrib
    pub isha_interval: Option<f64>,
    /// Maghrib depression angle
    pub maghrib_angle: Option<f64>,
    /// Midnight convention
    pub midnight: Option<MidnightMode>,
    /// Published-time minute offsets
    pub method_adjustments: Option<PrayerAdjustments>,
    /// Published-time rounding
    pub rounding: Option<Rounding>,
    /// Twilight variant
    pub shafaq: Option<Shafaq>,
}

/// Builds a `Custom` method from explicit angles.
///
/// # Example
/// ```
/// # use prayer_times::{create_custom_method, MethodName, MethodOverrides};
/// let method = create_custom_method(17.0, 16.0, MethodOverrides {
///     isha_angle: Some(15.0),
///     ..MethodOverrides::default()
/// });
/// assert_eq!(method.name, MethodName::Custom);
/// assert_eq!(method.fajr_angle, 17.0);
/// assert_eq!(method.isha_angle, 15.0);
/// ```
#[must_use]
pub fn create_custom_method(
    fajr_angle: f64,
    isha_angle: f64,
    overrides: MethodOverrides,
) -> CalculationMethod {
    CalculationMethod {
        name: MethodName::Custom,
        fajr_angle: overrides.fajr_angle.unwrap_or(fajr_angle),
        isha_angle: overrides.isha_angle.unwrap_or(isha_angle),
        isha_interval: overrides.isha_interval,
        maghrib_angle: overrides.maghrib_angle,
        midnight: overrides.midnight,
        method_adjustments: overrides.method_adjustments,
        rounding: overrides.rounding,
        shafaq: overrides.shafaq,
    }
}

/// Full name of the authority behind a method.
#[must_use]
pub const fn method_description(name: MethodName) -> &'static str {
    match name {
        MethodName::MWL => "Muslim World League",
        MethodName::ISNA => "Islamic Society of North America",
        MethodName::Egypt => "Egyptian General Authority of Survey",
        MethodName::Makkah => "Umm Al-Qura University, Makkah",
        MethodName::Karachi => "University of Islamic Sciences, Karachi",
        MethodName::Tehran => "Institute of Geophysics, University of Tehran",
        MethodName::Jafari => "Shia Ithna-Ashari, Leva Institute, Qum",
        MethodName::Dubai => "General Authority of Islamic Affairs and Endowments, Dubai",
        MethodName::Qatar => "Ministry of Awqaf and Islamic Affairs, Qatar",
        MethodName::Kuwait => "Ministry of Awqaf and Islamic Affairs, Kuwait",
        MethodName::Singapore => "Majlis Ugama Islam Singapura",
        MethodName::Turkey => "Diyanet İşleri Başkanlığı, Turkey",
        MethodName::MoonsightingCommittee => "Moonsighting Committee Worldwide",
        MethodName::Custom => "Custom angles supplied by the caller",
    }
}

/// Methods commonly used in a region. A method may appear in several regions.
#[must_use]
pub const fn regional_methods(region: Region) -> &'static [MethodName] {
    match region {
        Region::Worldwide => &[
            MethodName::MWL,
            MethodName::Jafari,
            MethodName::MoonsightingCommittee,
        ],
        Region::Europe => &[
            MethodName::MWL,
            MethodName::Turkey,
            MethodName::MoonsightingCommittee,
        ],
        Region::NorthAmerica => &[MethodName::ISNA, MethodName::MoonsightingCommittee],
        Region::MiddleEast => &[
            MethodName::Makkah,
            MethodName::Tehran,
            MethodName::Dubai,
            MethodName::Qatar,
            MethodName::Kuwait,
        ],
        Region::Africa => &[MethodName::Egypt, MethodName::MWL],
        Region::SouthAsia => &[MethodName::Karachi],
        Region::SoutheastAsia => &[MethodName::Singapore],
    }
}

/// Every method in the catalogue.
#[must_use]
pub const fn available_methods() -> &'static [MethodName] {
    &MethodName::ALL
}
