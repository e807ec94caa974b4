//! # Kidney Function Formulas
//!
//! Serum creatinine is in mg/dL throughout.
//!
//! ## References
//!
//! - Inker LA et al. (2021), N Engl J Med 385:1737-1749 (CKD-EPI 2021, race-free)
//! - Cockcroft DW, Gault MH (1976), Nephron 16(1):31-41

use crate::input::Sex;

/// CKD-EPI 2021 creatinine equation, eGFR in mL/min/1.73m²
///
/// # Formula
/// ```text
/// eGFR = 142 · min(Scr/κ, 1)^α · max(Scr/κ, 1)^-1.200 · 0.9938^age · [1.012 if female]
/// ```
///
/// | | κ | α |
/// |---|---|---|
/// | Female | 0.7 | -0.241 |
/// | Male | 0.9 | -0.302 |
pub fn ckd_epi_2021(sex: Sex, age: f64, creatinine_mg_dl: f64) -> f64 {
    let (kappa, alpha, sex_factor) = match sex {
        Sex::Female => (0.7, -0.241, 1.012),
        Sex::Male => (0.9, -0.302, 1.0),
    };
    let ratio = creatinine_mg_dl / kappa;
    142.0
        * ratio.min(1.0).powf(alpha)
        * ratio.max(1.0).powf(-1.200)
        * 0.9938_f64.powf(age)
        * sex_factor
}

/// Cockcroft-Gault creatinine clearance, mL/min
///
/// # Formula
/// ```text
/// CrCl = (140 - age) · w / (72 · Scr) · [0.85 if female]
/// ```
pub fn cockcroft_gault(sex: Sex, age: f64, weight_kg: f64, creatinine_mg_dl: f64) -> f64 {
    let clearance = (140.0 - age) * weight_kg / (72.0 * creatinine_mg_dl);
    match sex {
        Sex::Male => clearance,
        Sex::Female => clearance * 0.85,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ckd_epi_male() {
        let egfr = ckd_epi_2021(Sex::Male, 50.0, 1.0);
        assert!((egfr - 91.70).abs() < 0.05);
    }

    #[test]
    fn test_ckd_epi_female() {
        let egfr = ckd_epi_2021(Sex::Female, 50.0, 0.8);
        assert!((egfr - 89.71).abs() < 0.05);
    }

    #[test]
    fn test_ckd_epi_low_creatinine_branch() {
        // Below κ the α exponent applies and eGFR rises as creatinine falls
        let low = ckd_epi_2021(Sex::Male, 40.0, 0.6);
        let at_kappa = ckd_epi_2021(Sex::Male, 40.0, 0.9);
        assert!(low > at_kappa);
        assert!((at_kappa - 142.0 * 0.9938_f64.powf(40.0)).abs() < 1e-9);
    }

    #[test]
    fn test_cockcroft_gault() {
        assert!((cockcroft_gault(Sex::Male, 50.0, 80.0, 1.0) - 100.0).abs() < 1e-9);
        assert!((cockcroft_gault(Sex::Female, 50.0, 80.0, 1.0) - 85.0).abs() < 1e-9);
    }
}
