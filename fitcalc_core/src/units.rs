//! # Unit Types
//!
//! Type-safe wrappers for body-measurement units. These are plain `f64`
//! newtypes so JSON stays clean (just numbers) while conversions stay explicit.
//!
//! ## Metric Units (Primary)
//!
//! All form fields are collected in metric units:
//! - Length: centimeters (cm), converted to meters (m) for BMI-style indices
//! - Mass: kilograms (kg)
//!
//! Some published formulas are defined in imperial units (Devine ideal weight
//! uses inches over five feet, Rockport uses pounds); those convert at the
//! formula boundary using the exact international definitions.
//!
//! ## Example
//!
//! ```rust
//! use fitcalc_core::units::{Centimeters, Inches, Meters};
//!
//! let height = Centimeters(180.0);
//! let meters: Meters = height.into();
//! assert_eq!(meters.0, 1.8);
//!
//! let inches: Inches = Centimeters(254.0).into();
//! assert_eq!(inches.0, 100.0);
//! ```

use serde::{Deserialize, Serialize};

/// Centimeters per inch (exact, international inch)
pub const CM_PER_INCH: f64 = 2.54;

/// Kilograms per pound (exact, international avoirdupois pound)
pub const KG_PER_POUND: f64 = 0.453_592_37;

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

impl From<Centimeters> for Inches {
    fn from(cm: Centimeters) -> Self {
        Inches(cm.0 / CM_PER_INCH)
    }
}

impl From<Inches> for Centimeters {
    fn from(inches: Inches) -> Self {
        Centimeters(inches.0 * CM_PER_INCH)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

impl From<Kilograms> for Pounds {
    fn from(kg: Kilograms) -> Self {
        Pounds(kg.0 / KG_PER_POUND)
    }
}

impl From<Pounds> for Kilograms {
    fn from(lb: Pounds) -> Self {
        Kilograms(lb.0 * KG_PER_POUND)
    }
}

// ============================================================================
// Display
// ============================================================================

/// Unit label attached to a numeric result for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Dimensionless ratio or index
    Ratio,
    /// kg/m²
    KgPerM2,
    /// kcal/day
    KcalPerDay,
    /// Grams per day
    GramsPerDay,
    Kilograms,
    Percent,
    BeatsPerMinute,
    /// mL/kg/min
    MlPerKgMin,
    /// mL/min/1.73m²
    MlPerMin173,
    /// mL/min
    MlPerMin,
    /// mmHg
    MmHg,
}

impl Unit {
    /// Short symbol for display
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Ratio => "",
            Unit::KgPerM2 => "kg/m²",
            Unit::KcalPerDay => "kcal/day",
            Unit::GramsPerDay => "g/day",
            Unit::Kilograms => "kg",
            Unit::Percent => "%",
            Unit::BeatsPerMinute => "bpm",
            Unit::MlPerKgMin => "mL/kg/min",
            Unit::MlPerMin173 => "mL/min/1.73m²",
            Unit::MlPerMin => "mL/min",
            Unit::MmHg => "mmHg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversions() {
        let m: Meters = Centimeters(180.0).into();
        assert_eq!(m.0, 1.8);

        let inches: Inches = Centimeters(152.4).into();
        assert!((inches.0 - 60.0).abs() < 1e-12);

        let cm: Centimeters = Inches(10.0).into();
        assert!((cm.0 - 25.4).abs() < 1e-12);
    }

    #[test]
    fn test_mass_conversions() {
        let lb: Pounds = Kilograms(KG_PER_POUND * 150.0).into();
        assert!((lb.0 - 150.0).abs() < 1e-9);

        let kg: Kilograms = Pounds(1.0).into();
        assert_eq!(kg.0, KG_PER_POUND);
    }

    #[test]
    fn test_unit_symbols() {
        assert_eq!(Unit::KgPerM2.symbol(), "kg/m²");
        assert_eq!(Unit::Ratio.symbol(), "");
    }
}
