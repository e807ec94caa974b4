//! Clinical calculators: kidney function and blood pressure category.

use super::{finish, formula_variants, CalculatorKind};
use crate::classification::{classify, more_severe};
use crate::errors::{CalcError, CalcResult};
use crate::formulas::renal as f;
use crate::formulas::Formula;
use crate::input::BiometricInput;
use crate::result::{assemble, CalculatorResult, Computed, Metric};
use crate::units::Unit;

formula_variants! {
    /// Kidney function equation
    EgfrEquation default CkdEpi2021 {
        /// Race-free CKD-EPI creatinine equation
        CkdEpi2021 => "ckd-epi-2021",
        /// Creatinine clearance; not indexed to body surface area
        CockcroftGault => "cockcroft-gault",
    }
}

impl EgfrEquation {
    pub fn formula(&self) -> Formula {
        match self {
            EgfrEquation::CkdEpi2021 => Formula::CkdEpi2021,
            EgfrEquation::CockcroftGault => Formula::CockcroftGault,
        }
    }
}

/// Kidney function. Only the BSA-indexed CKD-EPI value is staged against
/// KDIGO; a Cockcroft-Gault clearance in mL/min is reported unclassified.
pub fn egfr(input: &BiometricInput, equation: EgfrEquation) -> CalcResult<CalculatorResult> {
    let sex = input.require_sex()?;
    let age = f64::from(input.require_age()?);
    let creatinine = input.require_creatinine_mg_dl()?;

    let computed = match equation {
        EgfrEquation::CkdEpi2021 => Computed::new(
            CalculatorKind::Egfr,
            equation.formula(),
            Metric::new("egfr", "eGFR", f::ckd_epi_2021(sex, age, creatinine), Unit::MlPerMin173),
        ),
        EgfrEquation::CockcroftGault => {
            let weight = input.require_weight_kg()?;
            Computed::new(
                CalculatorKind::Egfr,
                equation.formula(),
                Metric::new(
                    "creatinine_clearance",
                    "Creatinine clearance",
                    f::cockcroft_gault(sex, age, weight, creatinine),
                    Unit::MlPerMin,
                ),
            )
        }
    };

    let metric = match equation {
        EgfrEquation::CkdEpi2021 => Some("egfr"),
        EgfrEquation::CockcroftGault => None,
    };
    finish(input, computed, metric)
}

/// ACC/AHA blood pressure category.
///
/// Systolic and diastolic readings are classified separately and the more
/// severe category wins. Systolic must exceed diastolic.
pub fn blood_pressure(input: &BiometricInput) -> CalcResult<CalculatorResult> {
    let systolic = input.require_systolic_mmhg()?;
    let diastolic = input.require_diastolic_mmhg()?;

    let pulse_pressure = systolic - diastolic;
    if pulse_pressure <= 0.0 {
        return Err(CalcError::out_of_range("pulse-pressure", pulse_pressure));
    }
    let mean_arterial = diastolic + pulse_pressure / 3.0;

    let classification = more_severe(
        classify("blood-pressure.systolic", systolic)?,
        classify("blood-pressure.diastolic", diastolic)?,
    );

    let computed = Computed::new(
        CalculatorKind::BloodPressure,
        Formula::BloodPressureAha,
        Metric::new("systolic_mmhg", "Systolic", systolic, Unit::MmHg),
    )
    .with_secondary(Metric::new("diastolic_mmhg", "Diastolic", diastolic, Unit::MmHg))
    .with_secondary(Metric::new("mean_arterial_mmhg", "Mean arterial pressure", mean_arterial, Unit::MmHg))
    .with_secondary(Metric::new("pulse_pressure_mmhg", "Pulse pressure", pulse_pressure, Unit::MmHg));

    Ok(assemble(input, computed, Some(classification)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Sex;

    fn bp(systolic: f64, diastolic: f64) -> CalcResult<CalculatorResult> {
        let input = BiometricInput::builder()
            .systolic_mmhg(systolic)
            .diastolic_mmhg(diastolic)
            .build()
            .unwrap();
        blood_pressure(&input)
    }

    #[test]
    fn test_blood_pressure_categories() {
        assert_eq!(bp(118.0, 76.0).unwrap().label(), Some("Normal"));
        assert_eq!(bp(125.0, 78.0).unwrap().label(), Some("Elevated"));
        // Diastolic pushes an elevated systolic into stage 1
        assert_eq!(bp(125.0, 85.0).unwrap().label(), Some("Hypertension stage 1"));
        assert_eq!(bp(145.0, 70.0).unwrap().label(), Some("Hypertension stage 2"));
        assert_eq!(bp(150.0, 125.0).unwrap().label(), Some("Hypertensive crisis"));
    }

    #[test]
    fn test_blood_pressure_derived_values() {
        let result = bp(120.0, 80.0).unwrap();
        assert_eq!(result.secondary("pulse_pressure_mmhg").unwrap().value, 40.0);
        let map = result.secondary("mean_arterial_mmhg").unwrap().value;
        assert!((map - 93.333_333).abs() < 1e-5);
    }

    #[test]
    fn test_inverted_reading_rejected() {
        assert!(matches!(bp(80.0, 90.0), Err(CalcError::OutOfRange { .. })));
        assert!(matches!(bp(90.0, 90.0), Err(CalcError::OutOfRange { .. })));
    }

    #[test]
    fn test_egfr_ckd_epi_staged() {
        let input = BiometricInput::builder()
            .sex(Sex::Male)
            .age(50)
            .creatinine_mg_dl(1.0)
            .build()
            .unwrap();
        let result = egfr(&input, EgfrEquation::default()).unwrap();
        assert!((result.value() - 91.70).abs() < 0.05);
        assert_eq!(result.label(), Some("G1 Normal or high"));
    }

    #[test]
    fn test_cockcroft_gault_unclassified() {
        let input = BiometricInput::builder()
            .sex(Sex::Male)
            .age(40)
            .creatinine_mg_dl(1.0)
            .build()
            .unwrap();
        assert_eq!(
            egfr(&input, EgfrEquation::CockcroftGault).unwrap_err(),
            CalcError::missing_field("weight")
        );

        let input = BiometricInput::builder()
            .sex(Sex::Male)
            .age(40)
            .weight_kg(72.0)
            .creatinine_mg_dl(1.0)
            .build()
            .unwrap();
        let result = egfr(&input, EgfrEquation::CockcroftGault).unwrap();
        assert!((result.value() - 100.0).abs() < 1e-9);
        assert!(result.classification.is_none());
    }
}
