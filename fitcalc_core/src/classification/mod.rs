//! # Classification
//!
//! Maps a computed metric value onto the labelled band of a published
//! standard (WHO BMI, KDIGO eGFR, ACC/AHA blood pressure, ...).
//!
//! Tables are looked up by metric key. Sex- or age-specific standards use
//! dotted keys built by the helpers below, e.g. `body-fat.female` or
//! `vo2max.male.30-39`.
//!
//! ## Example
//!
//! ```rust
//! use fitcalc_core::classification::classify;
//!
//! let band = classify("bmi", 24.69).unwrap();
//! assert_eq!(band.label, "Normal weight");
//! assert!(classify("bmi", -1.0).is_err());
//! ```

pub mod tables;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::input::Sex;

/// One row of a static band table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandSpec {
    /// Inclusive lower bound
    pub lower: f64,
    /// Exclusive upper bound, infinite for the top band
    pub upper: f64,
    /// Ordinal severity, comparable across tables of the same standard
    pub level: u8,
    pub label: &'static str,
}

/// An ordered, contiguous set of bands for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandTable {
    pub metric: &'static str,
    /// Published standard the bands encode
    pub standard: &'static str,
    pub bands: &'static [BandSpec],
}

/// The band a value fell into, as carried on a calculator result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationBand {
    /// Table the band came from
    pub metric: String,
    pub standard: String,
    pub label: String,
    pub level: u8,
    pub lower: f64,
    /// `None` for an open-ended top band
    pub upper: Option<f64>,
}

impl ClassificationBand {
    /// Whether `value` lies in this band's `[lower, upper)` interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && self.upper.map_or(true, |upper| value < upper)
    }
}

impl BandTable {
    /// Smallest classifiable value
    pub fn min(&self) -> f64 {
        self.bands.first().map_or(0.0, |b| b.lower)
    }

    /// Lower bound of the top band, where the table stops resolving detail
    pub fn top(&self) -> f64 {
        self.bands.last().map_or(0.0, |b| b.lower)
    }

    /// Find the band containing `value`.
    ///
    /// Fails with `OutOfRange` for negative or non-finite values.
    pub fn classify(&self, value: f64) -> CalcResult<ClassificationBand> {
        if !value.is_finite() || value < 0.0 {
            return Err(CalcError::out_of_range(self.metric, value));
        }
        self.bands
            .iter()
            .find(|b| value >= b.lower && value < b.upper)
            .map(|b| ClassificationBand {
                metric: self.metric.to_string(),
                standard: self.standard.to_string(),
                label: b.label.to_string(),
                level: b.level,
                lower: b.lower,
                upper: b.upper.is_finite().then_some(b.upper),
            })
            .ok_or_else(|| CalcError::out_of_range(self.metric, value))
    }

    /// Check the table invariants: non-empty, starts at zero, open-ended at
    /// the top, every band non-degenerate, each band starting exactly where
    /// the previous ends.
    pub fn is_well_formed(&self) -> bool {
        let (Some(first), Some(last)) = (self.bands.first(), self.bands.last()) else {
            return false;
        };
        first.lower == 0.0
            && last.upper == f64::INFINITY
            && self.bands.iter().all(|b| b.lower < b.upper)
            && self.bands.windows(2).all(|w| w[0].upper == w[1].lower)
    }
}

static REGISTRY: Lazy<HashMap<&'static str, &'static BandTable>> = Lazy::new(|| {
    tables::ALL_TABLES
        .iter()
        .map(|table| (table.metric, *table))
        .collect()
});

/// Look up the band table for a metric key
pub fn table(metric: &str) -> CalcResult<&'static BandTable> {
    REGISTRY
        .get(metric)
        .copied()
        .ok_or_else(|| CalcError::unknown_metric(metric))
}

/// Classify `value` against the table registered for `metric`
pub fn classify(metric: &str, value: f64) -> CalcResult<ClassificationBand> {
    table(metric)?.classify(value)
}

/// All registered metric keys, sorted
pub fn metric_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = REGISTRY.keys().copied().collect();
    keys.sort_unstable();
    keys
}

/// Of two bands, the one with the higher severity level (first wins ties)
pub fn more_severe(a: ClassificationBand, b: ClassificationBand) -> ClassificationBand {
    if b.level > a.level {
        b
    } else {
        a
    }
}

// ============================================================================
// Metric keys for sex/age-specific tables
// ============================================================================

fn sex_key(sex: Sex) -> &'static str {
    match sex {
        Sex::Male => "male",
        Sex::Female => "female",
    }
}

pub fn body_fat_metric(sex: Sex) -> String {
    format!("body-fat.{}", sex_key(sex))
}

pub fn whr_metric(sex: Sex) -> String {
    format!("whr.{}", sex_key(sex))
}

/// VO2max norm table for a sex and age (age groups by decade, 60+ open-ended)
pub fn vo2max_metric(sex: Sex, age: u32) -> String {
    let group = match age {
        0..=19 => "13-19",
        20..=29 => "20-29",
        30..=39 => "30-39",
        40..=49 => "40-49",
        50..=59 => "50-59",
        _ => "60+",
    };
    format!("vo2max.{}.{}", sex_key(sex), group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_normal_weight() {
        let band = classify("bmi", 80.0 / (1.8 * 1.8)).unwrap();
        assert_eq!(band.label, "Normal weight");
        assert_eq!(band.standard, "WHO 2000");
        assert_eq!((band.lower, band.upper), (18.5, Some(25.0)));
    }

    #[test]
    fn test_band_edges_are_half_open() {
        assert_eq!(classify("bmi", 18.5).unwrap().label, "Normal weight");
        assert_eq!(classify("bmi", 18.499_999).unwrap().label, "Mild thinness");
        assert_eq!(classify("bmi", 25.0).unwrap().label, "Overweight");
        assert_eq!(classify("bmi", 0.0).unwrap().label, "Severe thinness");
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(classify("bmi", -0.1).unwrap_err(), CalcError::out_of_range("bmi", -0.1));
        assert!(matches!(classify("whtr", f64::INFINITY), Err(CalcError::OutOfRange { .. })));
        assert!(matches!(classify("whtr", f64::NAN), Err(CalcError::OutOfRange { .. })));
    }

    #[test]
    fn test_unknown_metric() {
        assert_eq!(classify("iq", 100.0).unwrap_err(), CalcError::unknown_metric("iq"));
    }

    #[test]
    fn test_all_tables_well_formed() {
        for table in tables::ALL_TABLES {
            assert!(table.is_well_formed(), "{} is not contiguous", table.metric);
        }
    }

    #[test]
    fn test_exactly_one_band_matches_across_domain() {
        for table in tables::ALL_TABLES {
            let steps = 2_000;
            let span = 2.0 * table.top() - table.min();
            for i in 0..steps {
                let value = table.min() + span * (i as f64) / (steps as f64);
                let matches = table
                    .bands
                    .iter()
                    .filter(|b| value >= b.lower && value < b.upper)
                    .count();
                assert_eq!(matches, 1, "{} at {}", table.metric, value);
                assert!(table.classify(value).is_ok());
            }
            // Every boundary value also matches exactly one band
            for b in table.bands {
                assert_eq!(table.classify(b.lower).unwrap().lower, b.lower);
            }
        }
    }

    #[test]
    fn test_metric_keys_unique() {
        assert_eq!(metric_keys().len(), tables::ALL_TABLES.len());
    }

    #[test]
    fn test_sex_and_age_keys_resolve() {
        for sex in [Sex::Male, Sex::Female] {
            assert!(table(&body_fat_metric(sex)).is_ok());
            assert!(table(&whr_metric(sex)).is_ok());
            for age in [15, 25, 35, 45, 55, 65, 100] {
                assert!(table(&vo2max_metric(sex, age)).is_ok());
            }
        }
        assert_eq!(vo2max_metric(Sex::Female, 29), "vo2max.female.20-29");
        assert_eq!(vo2max_metric(Sex::Male, 60), "vo2max.male.60+");
    }

    #[test]
    fn test_blood_pressure_levels_align() {
        let sys = classify("blood-pressure.systolic", 125.0).unwrap();
        let dia = classify("blood-pressure.diastolic", 85.0).unwrap();
        assert_eq!(sys.label, "Elevated");
        assert_eq!(dia.label, "Hypertension stage 1");
        assert_eq!(more_severe(sys, dia).label, "Hypertension stage 1");

        let crisis = classify("blood-pressure.systolic", 181.0).unwrap();
        assert_eq!(crisis.label, "Hypertensive crisis");
        let stage2 = classify("blood-pressure.systolic", 180.0).unwrap();
        assert_eq!(stage2.label, "Hypertension stage 2");
    }

    #[test]
    fn test_top_band_is_open_ended() {
        let band = classify("bmi", 208.33).unwrap();
        assert_eq!(band.label, "Obesity class III");
        assert_eq!(band.upper, None);
        assert!(band.contains(1e6));

        assert_eq!(classify("vo2max.male.20-29", 107.1).unwrap().label, "Superior");
        assert_eq!(classify("egfr", 180.0).unwrap().label, "G1 Normal or high");
        assert_eq!(classify("whtr", 2.5).unwrap().label, "High risk");
        assert_eq!(classify("whr.female", 4.0).unwrap().label, "High risk");
        assert_eq!(classify("body-fat.male", 100.0).unwrap().label, "Obese");
    }

    #[test]
    fn test_band_contains() {
        let band = classify("egfr", 91.7).unwrap();
        assert_eq!(band.label, "G1 Normal or high");
        assert!(band.contains(90.0));
        assert!(!band.contains(89.99));
    }
}
