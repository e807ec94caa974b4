//! # Result Assembly
//!
//! Composes formula output and classification into the [`CalculatorResult`]
//! handed to presentation. Assembly is pure composition: it cannot fail, and
//! upstream errors are propagated by the caller before it runs.
//!
//! Values are kept at full `f64` precision; rounding happens only in the
//! `display*` helpers.

use serde::{Deserialize, Serialize};

use crate::calculators::CalculatorKind;
use crate::classification::ClassificationBand;
use crate::formulas::Formula;
use crate::input::BiometricInput;
use crate::units::Unit;

/// Default number of decimals shown to users
pub const DEFAULT_DECIMALS: usize = 2;

/// One named numeric output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Stable key (e.g. "bmr_kcal", "pct_90")
    pub key: String,
    /// Human-readable label
    pub label: String,
    pub value: f64,
    pub unit: Unit,
}

impl Metric {
    pub fn new(key: impl Into<String>, label: impl Into<String>, value: f64, unit: Unit) -> Self {
        Metric {
            key: key.into(),
            label: label.into(),
            value,
            unit,
        }
    }

    /// Value rounded for display, with its unit symbol
    pub fn display(&self, decimals: usize) -> String {
        let symbol = self.unit.symbol();
        if symbol.is_empty() {
            format!("{:.*}", decimals, self.value)
        } else {
            format!("{:.*} {}", decimals, self.value, symbol)
        }
    }
}

/// Raw formula-engine output before classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Computed {
    pub calculator: CalculatorKind,
    /// Formula variant that produced `primary`
    pub formula: Formula,
    pub primary: Metric,
    pub secondary: Vec<Metric>,
}

impl Computed {
    pub fn new(calculator: CalculatorKind, formula: Formula, primary: Metric) -> Self {
        Computed {
            calculator,
            formula,
            primary,
            secondary: Vec::new(),
        }
    }

    /// Add a secondary value (builder pattern)
    pub fn with_secondary(mut self, metric: Metric) -> Self {
        self.secondary.push(metric);
        self
    }
}

/// Complete, immutable result of one calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "calculator": "bmi",
///   "formula": "bmi",
///   "primary": { "key": "bmi", "label": "BMI", "value": 24.691358024691358, "unit": "kg_per_m2" },
///   "secondary": [],
///   "classification": { "metric": "bmi", "standard": "WHO 2000", "label": "Normal weight",
///                       "level": 3, "lower": 18.5, "upper": 25.0 },
///   "input": { "height_cm": 180.0, "weight_kg": 80.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResult {
    pub calculator: CalculatorKind,
    pub formula: Formula,
    pub primary: Metric,
    pub secondary: Vec<Metric>,
    /// Band of the primary value, for metrics with a published standard
    pub classification: Option<ClassificationBand>,
    /// Input the result was computed from
    pub input: BiometricInput,
}

impl CalculatorResult {
    /// Primary value at full precision
    pub fn value(&self) -> f64 {
        self.primary.value
    }

    /// Classification label, if the metric has a band table
    pub fn label(&self) -> Option<&str> {
        self.classification.as_ref().map(|c| c.label.as_str())
    }

    /// Primary value rounded for display
    pub fn display_value(&self, decimals: usize) -> String {
        self.primary.display(decimals)
    }

    /// Look up a secondary value by key
    pub fn secondary(&self, key: &str) -> Option<&Metric> {
        self.secondary.iter().find(|m| m.key == key)
    }
}

/// Compose the final result. Pure; never fails.
pub fn assemble(
    input: &BiometricInput,
    computed: Computed,
    classification: Option<ClassificationBand>,
) -> CalculatorResult {
    CalculatorResult {
        calculator: computed.calculator,
        formula: computed.formula,
        primary: computed.primary,
        secondary: computed.secondary,
        classification,
        input: input.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::classify;
    use pretty_assertions::assert_eq;

    fn bmi_result() -> CalculatorResult {
        let input = BiometricInput::builder()
            .height_cm(180.0)
            .weight_kg(80.0)
            .build()
            .unwrap();
        let value = 80.0 / (1.8 * 1.8);
        let computed = Computed::new(
            CalculatorKind::Bmi,
            Formula::Bmi,
            Metric::new("bmi", "BMI", value, Unit::KgPerM2),
        );
        assemble(&input, computed, Some(classify("bmi", value).unwrap()))
    }

    #[test]
    fn test_assemble_carries_everything() {
        let result = bmi_result();
        assert_eq!(result.calculator, CalculatorKind::Bmi);
        assert_eq!(result.label(), Some("Normal weight"));
        assert_eq!(result.input.height_cm(), Some(180.0));
    }

    #[test]
    fn test_display_rounds_but_value_does_not() {
        let result = bmi_result();
        assert_eq!(result.display_value(2), "24.69 kg/m²");
        // Internal value keeps precision well beyond the displayed decimals
        let shown: f64 = "24.69".parse().unwrap();
        assert!((result.value() - shown).abs() > 1e-4);
        assert!((result.value() * 1e4).fract() != 0.0);
    }

    #[test]
    fn test_display_without_unit() {
        let metric = Metric::new("whtr", "WHtR", 0.5, Unit::Ratio);
        assert_eq!(metric.display(3), "0.500");
    }

    #[test]
    fn test_result_json_roundtrip() {
        let result = bmi_result();
        let json = serde_json::to_string(&result).unwrap();
        let back: CalculatorResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.calculator, back.calculator);
        assert_eq!(result.classification, back.classification);
        assert_eq!(result.input, back.input);
        assert!((result.value() - back.value()).abs() < 1e-12);
    }
}
