//! Cardio calculators: maximum heart rate with training zones, and VO2max.

use super::{finish, formula_variants, CalculatorKind};
use crate::classification::vo2max_metric;
use crate::errors::{CalcError, CalcResult};
use crate::formulas::cardio as f;
use crate::formulas::Formula;
use crate::input::BiometricInput;
use crate::result::{CalculatorResult, Computed, Metric};
use crate::units::{Kilograms, Pounds, Unit};

/// Five training zones as (low, high) fractions of max HR or HR reserve
const ZONES: [(f64, f64); 5] = [(0.50, 0.60), (0.60, 0.70), (0.70, 0.80), (0.80, 0.90), (0.90, 1.00)];

formula_variants! {
    /// Age-predicted maximum heart rate equation
    MaxHrFormula default Fox {
        Fox => "fox",
        Tanaka => "tanaka",
        Gellish => "gellish",
    }
}

formula_variants! {
    /// VO2max estimation protocol
    Vo2maxTest default Uth {
        /// Resting/max heart-rate ratio
        Uth => "uth",
        /// 12-minute run distance
        Cooper => "cooper",
        /// One-mile walk time and finishing heart rate
        Rockport => "rockport",
    }
}

impl MaxHrFormula {
    pub fn formula(&self) -> Formula {
        match self {
            MaxHrFormula::Fox => Formula::MaxHrFox,
            MaxHrFormula::Tanaka => Formula::MaxHrTanaka,
            MaxHrFormula::Gellish => Formula::MaxHrGellish,
        }
    }
}

impl Vo2maxTest {
    pub fn formula(&self) -> Formula {
        match self {
            Vo2maxTest::Uth => Formula::Vo2maxUth,
            Vo2maxTest::Cooper => Formula::Vo2maxCooper,
            Vo2maxTest::Rockport => Formula::Vo2maxRockport,
        }
    }
}

/// Resting heart rate must sit below max HR for the reserve to be defined
fn check_reserve(max_hr: f64, resting: f64) -> CalcResult<()> {
    let reserve = max_hr - resting;
    if reserve <= 0.0 {
        return Err(CalcError::out_of_range("heart-rate-reserve", reserve));
    }
    Ok(())
}

/// Estimate max HR and derive five training zones.
///
/// Zones use the Karvonen heart-rate reserve method when a resting heart
/// rate is supplied, plain percentages of max HR otherwise.
pub fn max_heart_rate(input: &BiometricInput, formula: MaxHrFormula) -> CalcResult<CalculatorResult> {
    let age = f64::from(input.require_age()?);
    let max_hr = match formula {
        MaxHrFormula::Fox => f::max_hr_fox(age),
        MaxHrFormula::Tanaka => f::max_hr_tanaka(age),
        MaxHrFormula::Gellish => f::max_hr_gellish(age),
    };

    if let Some(resting) = input.resting_hr_bpm() {
        check_reserve(max_hr, resting)?;
    }

    let target = |intensity: f64| match input.resting_hr_bpm() {
        Some(resting) => f::karvonen(max_hr, resting, intensity),
        None => max_hr * intensity,
    };

    let mut computed = Computed::new(
        CalculatorKind::MaxHeartRate,
        formula.formula(),
        Metric::new("max_hr_bpm", "Maximum heart rate", max_hr, Unit::BeatsPerMinute),
    );
    for (i, (low, high)) in ZONES.iter().enumerate() {
        let zone = i + 1;
        computed = computed
            .with_secondary(Metric::new(
                format!("zone{}_low_bpm", zone),
                format!("Zone {} from", zone),
                target(*low),
                Unit::BeatsPerMinute,
            ))
            .with_secondary(Metric::new(
                format!("zone{}_high_bpm", zone),
                format!("Zone {} to", zone),
                target(*high),
                Unit::BeatsPerMinute,
            ));
    }

    finish(input, computed, None)
}

/// Estimate VO2max with the selected field test.
///
/// Classified against Cooper Institute norms only when both sex and age
/// are known.
pub fn vo2max(input: &BiometricInput, test: Vo2maxTest) -> CalcResult<CalculatorResult> {
    let value = match test {
        Vo2maxTest::Uth => {
            let max_hr = input.require_max_hr_bpm()?;
            let resting = input.require_resting_hr_bpm()?;
            check_reserve(max_hr, resting)?;
            f::vo2max_uth(max_hr, resting)
        }
        Vo2maxTest::Cooper => f::vo2max_cooper(input.require_run_distance_m()?),
        Vo2maxTest::Rockport => {
            let sex = input.require_sex()?;
            let age = f64::from(input.require_age()?);
            let weight_lb = Pounds::from(Kilograms(input.require_weight_kg()?)).0;
            f::vo2max_rockport(
                sex,
                age,
                weight_lb,
                input.require_walk_time_min()?,
                input.require_walk_hr_bpm()?,
            )
        }
    };

    let computed = Computed::new(
        CalculatorKind::Vo2max,
        test.formula(),
        Metric::new("vo2max", "VO2max", value, Unit::MlPerKgMin),
    );
    let metric = match (input.sex(), input.age()) {
        (Some(sex), Some(age)) => Some(vo2max_metric(sex, age)),
        _ => None,
    };

    finish(input, computed, metric.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::input::Sex;

    #[test]
    fn test_max_hr_percent_zones() {
        let input = BiometricInput::builder().age(30).build().unwrap();
        let result = max_heart_rate(&input, MaxHrFormula::Fox).unwrap();
        assert_eq!(result.value(), 190.0);
        assert!((result.secondary("zone1_low_bpm").unwrap().value - 95.0).abs() < 1e-9);
        assert!((result.secondary("zone5_high_bpm").unwrap().value - 190.0).abs() < 1e-9);
        assert_eq!(result.secondary.len(), 10);
    }

    #[test]
    fn test_max_hr_karvonen_zones() {
        let input = BiometricInput::builder().age(30).resting_hr_bpm(60.0).build().unwrap();
        let result = max_heart_rate(&input, MaxHrFormula::Fox).unwrap();
        // 60 + 0.5 * (190 - 60) = 125
        assert!((result.secondary("zone1_low_bpm").unwrap().value - 125.0).abs() < 1e-9);
    }

    #[test]
    fn test_zones_are_ascending() {
        let input = BiometricInput::builder().age(45).build().unwrap();
        let result = max_heart_rate(&input, MaxHrFormula::Tanaka).unwrap();
        let values: Vec<f64> = result.secondary.iter().map(|m| m.value).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_vo2max_uth_classified_with_sex_and_age() {
        let input = BiometricInput::builder()
            .max_hr_bpm(190.0)
            .resting_hr_bpm(60.0)
            .build()
            .unwrap();
        let result = vo2max(&input, Vo2maxTest::Uth).unwrap();
        assert!((result.value() - 48.45).abs() < 1e-9);
        assert!(result.classification.is_none());

        let input = BiometricInput::builder()
            .sex(Sex::Male)
            .age(35)
            .max_hr_bpm(190.0)
            .resting_hr_bpm(60.0)
            .build()
            .unwrap();
        let result = vo2max(&input, Vo2maxTest::Uth).unwrap();
        assert_eq!(result.label(), Some("Good"));
        assert_eq!(result.classification.unwrap().metric, "vo2max.male.30-39");
    }

    #[test]
    fn test_vo2max_cooper() {
        let input = BiometricInput::builder().run_distance_m(2400.0).build().unwrap();
        let result = vo2max(&input, Vo2maxTest::Cooper).unwrap();
        assert!((result.value() - (2400.0 - 504.9) / 44.73).abs() < 1e-12);
    }

    #[test]
    fn test_vo2max_rockport_requirements() {
        let input = BiometricInput::builder()
            .sex(Sex::Female)
            .age(40)
            .weight_kg(65.0)
            .walk_time_min(15.0)
            .build()
            .unwrap();
        assert_eq!(
            vo2max(&input, Vo2maxTest::Rockport).unwrap_err(),
            CalcError::missing_field("walk_hr")
        );
    }

    #[test]
    fn test_resting_above_max_rejected() {
        // Fox at 100 years gives 120 bpm
        let input = BiometricInput::builder().age(100).resting_hr_bpm(150.0).build().unwrap();
        assert_eq!(
            max_heart_rate(&input, MaxHrFormula::Fox).unwrap_err(),
            CalcError::out_of_range("heart-rate-reserve", -30.0)
        );

        let input = BiometricInput::builder()
            .max_hr_bpm(120.0)
            .resting_hr_bpm(120.0)
            .build()
            .unwrap();
        assert!(matches!(
            vo2max(&input, Vo2maxTest::Uth),
            Err(CalcError::OutOfRange { ref metric, .. }) if metric == "heart-rate-reserve"
        ));
    }
}
