//! One-rep max calculator.

use super::{finish, formula_variants, CalculatorKind};
use crate::errors::CalcResult;
use crate::formulas::strength as f;
use crate::formulas::Formula;
use crate::input::BiometricInput;
use crate::result::{CalculatorResult, Computed, Metric};
use crate::units::Unit;

/// Training-load percentages reported alongside the estimate
const LOAD_PERCENTAGES: [u32; 10] = [95, 90, 85, 80, 75, 70, 65, 60, 55, 50];

formula_variants! {
    /// One-repetition maximum estimator
    OneRepMaxFormula default Epley {
        Epley => "epley",
        Brzycki => "brzycki",
        Lombardi => "lombardi",
        OConner => "oconner",
        Lander => "lander",
        Mayhew => "mayhew",
        Wathan => "wathan",
    }
}

impl OneRepMaxFormula {
    pub fn formula(&self) -> Formula {
        match self {
            OneRepMaxFormula::Epley => Formula::Epley,
            OneRepMaxFormula::Brzycki => Formula::Brzycki,
            OneRepMaxFormula::Lombardi => Formula::Lombardi,
            OneRepMaxFormula::OConner => Formula::OConner,
            OneRepMaxFormula::Lander => Formula::Lander,
            OneRepMaxFormula::Mayhew => Formula::Mayhew,
            OneRepMaxFormula::Wathan => Formula::Wathan,
        }
    }

    fn estimate(&self, weight: f64, reps: f64) -> f64 {
        match self {
            OneRepMaxFormula::Epley => f::epley(weight, reps),
            OneRepMaxFormula::Brzycki => f::brzycki(weight, reps),
            OneRepMaxFormula::Lombardi => f::lombardi(weight, reps),
            OneRepMaxFormula::OConner => f::oconner(weight, reps),
            OneRepMaxFormula::Lander => f::lander(weight, reps),
            OneRepMaxFormula::Mayhew => f::mayhew(weight, reps),
            OneRepMaxFormula::Wathan => f::wathan(weight, reps),
        }
    }
}

pub fn one_rep_max(input: &BiometricInput, formula: OneRepMaxFormula) -> CalcResult<CalculatorResult> {
    let weight = input.require_lifted_kg()?;
    let reps = f64::from(input.require_reps()?);

    let value = formula.estimate(weight, reps);

    let computed = LOAD_PERCENTAGES.iter().fold(
        Computed::new(
            CalculatorKind::OneRepMax,
            formula.formula(),
            Metric::new("one_rep_max_kg", "Estimated 1RM", value, Unit::Kilograms),
        ),
        |computed, pct| {
            computed.with_secondary(Metric::new(
                format!("pct_{}", pct),
                format!("{}% of 1RM", pct),
                value * f64::from(*pct) / 100.0,
                Unit::Kilograms,
            ))
        },
    );

    finish(input, computed, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    fn lift(kg: f64, reps: u32) -> BiometricInput {
        BiometricInput::builder().lifted_kg(kg).reps(reps).build().unwrap()
    }

    #[test]
    fn test_epley_scenario() {
        let result = one_rep_max(&lift(100.0, 5), OneRepMaxFormula::default()).unwrap();
        assert_eq!(result.display_value(2), "116.67 kg");
        assert_eq!(result.formula, Formula::Epley);
        assert_eq!(result.secondary.len(), 10);
        let pct_90 = result.secondary("pct_90").unwrap();
        assert!((pct_90.value - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_brzycki_variant() {
        let result = one_rep_max(&lift(100.0, 5), OneRepMaxFormula::Brzycki).unwrap();
        assert_eq!(result.value(), 112.5);
        // Lombardi is a pure power law, so one rep returns the lift itself
        let result = one_rep_max(&lift(140.0, 1), OneRepMaxFormula::Lombardi).unwrap();
        assert_eq!(result.value(), 140.0);
    }

    #[test]
    fn test_estimators_agree_roughly_at_low_reps() {
        use crate::validation::Choice;
        let input = lift(100.0, 5);
        for formula in OneRepMaxFormula::ALL {
            let v = one_rep_max(&input, *formula).unwrap().value();
            assert!(v > 105.0 && v < 120.0, "{:?} gave {}", formula, v);
        }
    }

    #[test]
    fn test_missing_reps() {
        let input = BiometricInput::builder().lifted_kg(100.0).build().unwrap();
        assert_eq!(
            one_rep_max(&input, OneRepMaxFormula::Epley).unwrap_err(),
            CalcError::missing_field("reps")
        );
    }
}
