//! # Calculators
//!
//! Each calculator follows the same pattern:
//!
//! - read the fields it needs from a validated [`BiometricInput`]
//!   (missing ones fail with `MissingField`)
//! - apply the selected formula variant from [`crate::formulas`]
//! - classify the primary value when a published band table exists
//! - [`assemble`](crate::result::assemble) a [`CalculatorResult`]
//!
//! Formula variants are tagged enums dispatched by [`Calculator`]. When a
//! form does not pick a variant, the documented default is used (marked
//! ★ below); a variant is a method choice, not a clinical measurement.
//!
//! ## Available Calculators
//!
//! - [`body`] - BMI, body fat (★ US Navy), ABSI, BRI, WHtR, WHR,
//!   ideal weight (★ Devine), lean body mass (★ Boer)
//! - [`energy`] - BMR and TDEE (★ Mifflin-St Jeor)
//! - [`strength`] - one-rep max (★ Epley)
//! - [`cardio`] - maximum heart rate (★ Fox), VO2max (★ Uth–Sørensen)
//! - [`clinical`] - eGFR (★ CKD-EPI 2021), blood pressure category
//!
//! ## Example
//!
//! ```rust
//! use fitcalc_core::calculators::compute_raw;
//! use fitcalc_core::validation::RawInput;
//!
//! let raw = RawInput::new().with("lifted", "100").with("reps", "5");
//! let result = compute_raw("one-rep-max", &raw).unwrap();
//! assert_eq!(result.display_value(2), "116.67 kg");
//! ```

pub mod body;
pub mod cardio;
pub mod clinical;
pub mod energy;
pub mod strength;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::classification::classify;
use crate::errors::{CalcError, CalcResult};
use crate::input::BiometricInput;
use crate::result::{assemble, CalculatorResult, Computed};
use crate::validation::{Choice, RawInput};

pub use body::{BodyFatMethod, IdealWeightFormula, LbmFormula};
pub use cardio::{MaxHrFormula, Vo2maxTest};
pub use clinical::EgfrEquation;
pub use energy::BmrFormula;
pub use strength::OneRepMaxFormula;

/// Declares a formula-variant enum selectable through the `formula` form field.
macro_rules! formula_variants {
    (
        $(#[$meta:meta])*
        $name:ident default $default:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $key)] $variant, )+
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl $crate::validation::Choice for $name {
            const FIELD: &'static str = $crate::validation::FORMULA;
            const ALL: &'static [Self] = &[ $( $name::$variant ),+ ];

            fn key(&self) -> &'static str {
                match self {
                    $( $name::$variant => $key, )+
                }
            }
        }
    };
}
pub(crate) use formula_variants;

// ============================================================================
// Calculator identity
// ============================================================================

/// Identifier of a calculator, independent of formula variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorKind {
    Bmi,
    Bmr,
    Tdee,
    OneRepMax,
    BodyFat,
    Absi,
    Bri,
    Whtr,
    Whr,
    IdealWeight,
    LeanBodyMass,
    MaxHeartRate,
    Vo2max,
    Egfr,
    BloodPressure,
}

impl CalculatorKind {
    /// Every calculator, in catalog order
    pub const ALL: &'static [CalculatorKind] = &[
        CalculatorKind::Bmi,
        CalculatorKind::Bmr,
        CalculatorKind::Tdee,
        CalculatorKind::BodyFat,
        CalculatorKind::Absi,
        CalculatorKind::Bri,
        CalculatorKind::Whtr,
        CalculatorKind::Whr,
        CalculatorKind::IdealWeight,
        CalculatorKind::LeanBodyMass,
        CalculatorKind::OneRepMax,
        CalculatorKind::MaxHeartRate,
        CalculatorKind::Vo2max,
        CalculatorKind::Egfr,
        CalculatorKind::BloodPressure,
    ];

    /// URL slug, also the key used by the history store
    pub fn slug(&self) -> &'static str {
        match self {
            CalculatorKind::Bmi => "bmi",
            CalculatorKind::Bmr => "bmr",
            CalculatorKind::Tdee => "tdee",
            CalculatorKind::OneRepMax => "one-rep-max",
            CalculatorKind::BodyFat => "body-fat",
            CalculatorKind::Absi => "absi",
            CalculatorKind::Bri => "bri",
            CalculatorKind::Whtr => "whtr",
            CalculatorKind::Whr => "whr",
            CalculatorKind::IdealWeight => "ideal-weight",
            CalculatorKind::LeanBodyMass => "lean-body-mass",
            CalculatorKind::MaxHeartRate => "max-heart-rate",
            CalculatorKind::Vo2max => "vo2max",
            CalculatorKind::Egfr => "egfr",
            CalculatorKind::BloodPressure => "blood-pressure",
        }
    }

    /// Spellings accepted by the `formula` field, empty for single-formula calculators
    pub fn variant_keys(&self) -> Vec<&'static str> {
        fn keys<C: Choice>() -> Vec<&'static str> {
            C::ALL.iter().map(|c| c.key()).collect()
        }
        match self {
            CalculatorKind::Bmr | CalculatorKind::Tdee => keys::<BmrFormula>(),
            CalculatorKind::OneRepMax => keys::<OneRepMaxFormula>(),
            CalculatorKind::BodyFat => keys::<BodyFatMethod>(),
            CalculatorKind::IdealWeight => keys::<IdealWeightFormula>(),
            CalculatorKind::LeanBodyMass => keys::<LbmFormula>(),
            CalculatorKind::MaxHeartRate => keys::<MaxHrFormula>(),
            CalculatorKind::Vo2max => keys::<Vo2maxTest>(),
            CalculatorKind::Egfr => keys::<EgfrEquation>(),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CalculatorKind {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let needle = s.trim();
        CalculatorKind::ALL
            .iter()
            .copied()
            .find(|k| k.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CalcError::unknown_calculator(s))
    }
}

// ============================================================================
// Calculator dispatch
// ============================================================================

/// A calculator together with its selected formula variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calculator {
    Bmi,
    Bmr(BmrFormula),
    Tdee(BmrFormula),
    OneRepMax(OneRepMaxFormula),
    BodyFat(BodyFatMethod),
    Absi,
    Bri,
    Whtr,
    Whr,
    IdealWeight(IdealWeightFormula),
    LeanBodyMass(LbmFormula),
    MaxHeartRate(MaxHrFormula),
    Vo2max(Vo2maxTest),
    Egfr(EgfrEquation),
    BloodPressure,
}

impl Calculator {
    /// The calculator with its default formula variant
    pub fn with_default_formula(kind: CalculatorKind) -> Self {
        match kind {
            CalculatorKind::Bmi => Calculator::Bmi,
            CalculatorKind::Bmr => Calculator::Bmr(BmrFormula::default()),
            CalculatorKind::Tdee => Calculator::Tdee(BmrFormula::default()),
            CalculatorKind::OneRepMax => Calculator::OneRepMax(OneRepMaxFormula::default()),
            CalculatorKind::BodyFat => Calculator::BodyFat(BodyFatMethod::default()),
            CalculatorKind::Absi => Calculator::Absi,
            CalculatorKind::Bri => Calculator::Bri,
            CalculatorKind::Whtr => Calculator::Whtr,
            CalculatorKind::Whr => Calculator::Whr,
            CalculatorKind::IdealWeight => Calculator::IdealWeight(IdealWeightFormula::default()),
            CalculatorKind::LeanBodyMass => Calculator::LeanBodyMass(LbmFormula::default()),
            CalculatorKind::MaxHeartRate => Calculator::MaxHeartRate(MaxHrFormula::default()),
            CalculatorKind::Vo2max => Calculator::Vo2max(Vo2maxTest::default()),
            CalculatorKind::Egfr => Calculator::Egfr(EgfrEquation::default()),
            CalculatorKind::BloodPressure => Calculator::BloodPressure,
        }
    }

    /// Select the calculator and read its `formula` field from a form.
    ///
    /// Single-formula calculators ignore the field.
    pub fn from_raw(kind: CalculatorKind, raw: &RawInput) -> CalcResult<Self> {
        fn pick<C: Choice + Default>(raw: &RawInput) -> CalcResult<C> {
            Ok(raw.choice::<C>()?.unwrap_or_default())
        }

        Ok(match kind {
            CalculatorKind::Bmr => Calculator::Bmr(pick(raw)?),
            CalculatorKind::Tdee => Calculator::Tdee(pick(raw)?),
            CalculatorKind::OneRepMax => Calculator::OneRepMax(pick(raw)?),
            CalculatorKind::BodyFat => Calculator::BodyFat(pick(raw)?),
            CalculatorKind::IdealWeight => Calculator::IdealWeight(pick(raw)?),
            CalculatorKind::LeanBodyMass => Calculator::LeanBodyMass(pick(raw)?),
            CalculatorKind::MaxHeartRate => Calculator::MaxHeartRate(pick(raw)?),
            CalculatorKind::Vo2max => Calculator::Vo2max(pick(raw)?),
            CalculatorKind::Egfr => Calculator::Egfr(pick(raw)?),
            other => Calculator::with_default_formula(other),
        })
    }

    pub fn kind(&self) -> CalculatorKind {
        match self {
            Calculator::Bmi => CalculatorKind::Bmi,
            Calculator::Bmr(_) => CalculatorKind::Bmr,
            Calculator::Tdee(_) => CalculatorKind::Tdee,
            Calculator::OneRepMax(_) => CalculatorKind::OneRepMax,
            Calculator::BodyFat(_) => CalculatorKind::BodyFat,
            Calculator::Absi => CalculatorKind::Absi,
            Calculator::Bri => CalculatorKind::Bri,
            Calculator::Whtr => CalculatorKind::Whtr,
            Calculator::Whr => CalculatorKind::Whr,
            Calculator::IdealWeight(_) => CalculatorKind::IdealWeight,
            Calculator::LeanBodyMass(_) => CalculatorKind::LeanBodyMass,
            Calculator::MaxHeartRate(_) => CalculatorKind::MaxHeartRate,
            Calculator::Vo2max(_) => CalculatorKind::Vo2max,
            Calculator::Egfr(_) => CalculatorKind::Egfr,
            Calculator::BloodPressure => CalculatorKind::BloodPressure,
        }
    }

    /// Run the calculation. Pure and deterministic.
    pub fn compute(&self, input: &BiometricInput) -> CalcResult<CalculatorResult> {
        let _span = tracing::debug_span!("compute", calculator = self.kind().slug()).entered();

        let result = match *self {
            Calculator::Bmi => body::bmi(input),
            Calculator::Bmr(formula) => energy::bmr(input, formula),
            Calculator::Tdee(formula) => energy::tdee(input, formula),
            Calculator::OneRepMax(formula) => strength::one_rep_max(input, formula),
            Calculator::BodyFat(method) => body::body_fat(input, method),
            Calculator::Absi => body::absi(input),
            Calculator::Bri => body::bri(input),
            Calculator::Whtr => body::whtr(input),
            Calculator::Whr => body::whr(input),
            Calculator::IdealWeight(formula) => body::ideal_weight(input, formula),
            Calculator::LeanBodyMass(formula) => body::lean_body_mass(input, formula),
            Calculator::MaxHeartRate(formula) => cardio::max_heart_rate(input, formula),
            Calculator::Vo2max(test) => cardio::vo2max(input, test),
            Calculator::Egfr(equation) => clinical::egfr(input, equation),
            Calculator::BloodPressure => clinical::blood_pressure(input),
        };

        match &result {
            Ok(r) => tracing::debug!(formula = ?r.formula, value = r.primary.value, label = ?r.label(), "computed"),
            Err(e) => tracing::debug!(code = e.error_code(), "rejected: {}", e),
        }
        result
    }
}

/// Compute with an explicit calculator and variant
pub fn compute(calculator: Calculator, input: &BiometricInput) -> CalcResult<CalculatorResult> {
    calculator.compute(input)
}

/// Full boundary pipeline for a form submission: resolve the calculator by
/// slug, validate the raw fields, compute, classify and assemble.
pub fn compute_raw(slug: &str, raw: &RawInput) -> CalcResult<CalculatorResult> {
    let kind: CalculatorKind = slug.parse()?;
    let calculator = Calculator::from_raw(kind, raw)?;
    let input = BiometricInput::from_raw(raw)?;
    calculator.compute(&input)
}

/// Classify `computed.primary` against `metric` (if any) and assemble.
pub(crate) fn finish(
    input: &BiometricInput,
    computed: Computed,
    metric: Option<&str>,
) -> CalcResult<CalculatorResult> {
    let classification = metric
        .map(|m| classify(m, computed.primary.value))
        .transpose()?;
    Ok(assemble(input, computed, classification))
}
