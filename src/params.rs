//! Per-call calculation configuration.

use crate::high_latitude::HighLatitudeMethod;
use crate::method::{CalculationMethod, MethodName, Rounding, get_method};
use crate::types::Prayer;

/// Juristic convention for the Asr shadow length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AsrMethod {
    /// Shafi'i, Maliki, Hanbali: shadow equals object length plus noon shadow
    #[default]
    Standard,
    /// Hanafi: shadow equals twice the object length plus noon shadow
    Hanafi,
}

impl AsrMethod {
    /// Shadow-length factor used by the Asr altitude formula.
    #[must_use]
    pub const fn shadow_factor(self) -> f64 {
        match self {
            Self::Standard => 1.0,
            Self::Hanafi => 2.0,
        }
    }
}

/// Signed minute offsets for each of the six times. Unset fields are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrayerAdjustments {
    /// Minutes added to Fajr
    pub fajr: i32,
    /// Minutes added to sunrise
    pub sunrise: i32,
    /// Minutes added to Dhuhr
    pub dhuhr: i32,
    /// Minutes added to Asr
    pub asr: i32,
    /// Minutes added to Maghrib
    pub maghrib: i32,
    /// Minutes added to Isha
    pub isha: i32,
}

impl PrayerAdjustments {
    /// No adjustment.
    pub const NONE: Self = Self {
        fajr: 0,
        sunrise: 0,
        dhuhr: 0,
        asr: 0,
        maghrib: 0,
        isha: 0,
    };

    /// Offset for one prayer, in minutes.
    #[must_use]
    pub const fn minutes(&self, prayer: Prayer) -> i32 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// Field-wise sum of two sets of offsets, saturating at the `i32` bounds.
    #[must_use]
    pub const fn combined(&self, other: &Self) -> Self {
        Self {
            fajr: self.fajr.saturating_add(other.fajr),
            sunrise: self.sunrise.saturating_add(other.sunrise),
            dhuhr: self.dhuhr.saturating_add(other.dhuhr),
            asr: self.asr.saturating_add(other.asr),
            maghrib: self.maghrib.saturating_add(other.maghrib),
            isha: self.isha.saturating_add(other.isha),
        }
    }
}

/// Everything a calculation needs besides the date and location.
///
/// By default only the caller's own `adjustments` are applied; a preset's
/// `method_adjustments` and `rounding` stay descriptive unless switched on
/// with [`with_method_adjustments`](Self::with_method_adjustments) and
/// [`with_rounding`](Self::with_rounding).
///
/// # Example
/// ```
/// # use prayer_times::{AsrMethod, CalculationParams, HighLatitudeMethod, MethodName};
/// let params = CalculationParams::from(MethodName::ISNA)
///     .with_asr_method(AsrMethod::Hanafi)
///     .with_high_latitude_method(HighLatitudeMethod::AngleBased);
/// assert_eq!(params.method.fajr_angle, 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationParams {
    /// Angles and interval conventions
    pub method: CalculationMethod,
    /// Asr shadow convention
    #[cfg_attr(feature = "serde", serde(default))]
    pub asr_method: AsrMethod,
    /// Fallback for Fajr and Isha at high latitudes
    #[cfg_attr(feature = "serde", serde(default))]
    pub high_latitude_method: HighLatitudeMethod,
    /// Caller's minute offsets
    #[cfg_attr(feature = "serde", serde(default))]
    pub adjustments: PrayerAdjustments,
    /// Also apply the method's own published offsets
    #[cfg_attr(feature = "serde", serde(default))]
    pub apply_method_adjustments: bool,
    /// Round with the method's published rounding instead of to the nearest minute
    #[cfg_attr(feature = "serde", serde(default))]
    pub apply_rounding: bool,
}

impl CalculationParams {
    /// Parameters for `method` with Standard Asr, no high-latitude rule and no adjustments.
    #[must_use]
    pub const fn new(method: CalculationMethod) -> Self {
        Self {
            method,
            asr_method: AsrMethod::Standard,
            high_latitude_method: HighLatitudeMethod::None,
            adjustments: PrayerAdjustments::NONE,
            apply_method_adjustments: false,
            apply_rounding: false,
        }
    }

    /// Sets the Asr convention.
    #[must_use]
    pub const fn with_asr_method(mut self, asr_method: AsrMethod) -> Self {
        self.asr_method = asr_method;
        self
    }

    /// Sets the high-latitude fallback.
    #[must_use]
    pub const fn with_high_latitude_method(mut self, method: HighLatitudeMethod) -> Self {
        self.high_latitude_method = method;
        self
    }

    /// Sets the caller's minute offsets.
    #[must_use]
    pub const fn with_adjustments(mut self, adjustments: PrayerAdjustments) -> Self {
        self.adjustments = adjustments;
        self
    }

    /// Chooses whether the method's own published offsets are added.
    #[must_use]
    pub const fn with_method_adjustments(mut self, apply: bool) -> Self {
        self.apply_method_adjustments = apply;
        self
    }

    /// Chooses whether the method's published rounding is honored.
    #[must_use]
    pub const fn with_rounding(mut self, apply: bool) -> Self {
        self.apply_rounding = apply;
        self
    }

    /// Offsets that the calculation will actually add.
    #[must_use]
    pub const fn effective_adjustments(&self) -> PrayerAdjustments {
        match (self.apply_method_adjustments, self.method.method_adjustments) {
            (true, Some(method)) => self.adjustments.combined(&method),
            _ => self.adjustments,
        }
    }

    /// Rounding that the timestamp conversion will use.
    #[must_use]
    pub const fn rounding(&self) -> Rounding {
        match (self.apply_rounding, self.method.rounding) {
            (true, Some(rounding)) => rounding,
            _ => Rounding::Nearest,
        }
    }
}

impl Default for CalculationParams {
    fn default() -> Self {
        Self::from(MethodName::MWL)
    }
}

impl From<MethodName> for CalculationParams {
    fn from(name: MethodName) -> Self {
        Self::new(get_method(name))
    }
}

impl From<CalculationMethod> for CalculationParams {
    fn from(method: CalculationMethod) -> Self {
        Self::new(method)
    }
}
