//! # Anthropometric Formulas
//!
//! Body-size indices, body-fat estimators, ideal-weight and lean-mass formulas.
//! All functions are closed-form; nothing is rounded here.
//!
//! ## Notation
//!
//! - `w` = body mass (kg)
//! - `h` = height (cm unless suffixed `_m`)
//! - `WC` = waist circumference, `HC` = hip circumference, `NC` = neck circumference
//!
//! ## References
//!
//! - WHO Technical Report Series 894 (2000), BMI
//! - Hodgdon JA, Beckett MB (1984), Naval Health Research Center reports 84-11/84-29
//! - Deurenberg P et al. (1991), Br J Nutr 65(2):105-114
//! - Krakauer NY, Krakauer JC (2012), PLoS ONE 7(7):e39504, ABSI
//! - Thomas DM et al. (2013), Obesity 21(11):2264-2271, BRI
//! - Ashwell M, Hsieh SD (2005), Int J Food Sci Nutr 56(5):303-307, WHtR
//! - Devine BJ (1974); Robinson JD (1983); Miller DR (1983); Hamwi GJ (1964)
//! - Boer P (1984); James WPT (1976); Hume R (1966), lean body mass

use std::f64::consts::PI;

use crate::input::Sex;

// =============================================================================
// SIZE INDICES
// =============================================================================

/// Body mass index (kg/m²)
///
/// # Formula
/// ```text
/// BMI = w / h_m²
/// ```
#[inline]
pub fn bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Waist-to-height ratio (any consistent length unit)
#[inline]
pub fn waist_to_height(waist: f64, height: f64) -> f64 {
    waist / height
}

/// Waist-to-hip ratio (any consistent length unit)
#[inline]
pub fn waist_to_hip(waist: f64, hip: f64) -> f64 {
    waist / hip
}

/// A Body Shape Index (Krakauer 2012)
///
/// # Formula
/// ```text
/// ABSI = WC_m / (BMI^(2/3) · h_m^(1/2))
/// ```
#[inline]
pub fn absi(waist_m: f64, bmi: f64, height_m: f64) -> f64 {
    waist_m / (bmi.powf(2.0 / 3.0) * height_m.sqrt())
}

/// Body Roundness Index (Thomas 2013)
///
/// # Formula
/// ```text
/// BRI = 364.2 - 365.5 · √(1 - (WC/2π)² / (0.5·h)²)
/// ```
///
/// Models the body as an ellipse, so it is undefined once the waist radius
/// exceeds half the height. Returns `None` in that case.
pub fn bri(waist_m: f64, height_m: f64) -> Option<f64> {
    let radius = waist_m / (2.0 * PI);
    let half_height = 0.5 * height_m;
    let eccentricity_sq = 1.0 - (radius * radius) / (half_height * half_height);
    if eccentricity_sq < 0.0 {
        return None;
    }
    Some(364.2 - 365.5 * eccentricity_sq.sqrt())
}

// =============================================================================
// BODY FAT
// =============================================================================

/// US Navy circumference body fat (%), male, measurements in cm
///
/// # Formula
/// ```text
/// BF% = 495 / (1.0324 - 0.19077·log10(WC - NC) + 0.15456·log10(h)) - 450
/// ```
///
/// Returns `None` if waist ≤ neck (log of a non-positive number).
pub fn navy_body_fat_male(waist_cm: f64, neck_cm: f64, height_cm: f64) -> Option<f64> {
    let d = waist_cm - neck_cm;
    if d <= 0.0 {
        return None;
    }
    let density = 1.0324 - 0.19077 * d.log10() + 0.15456 * height_cm.log10();
    Some(495.0 / density - 450.0)
}

/// US Navy circumference body fat (%), female, measurements in cm
///
/// # Formula
/// ```text
/// BF% = 495 / (1.29579 - 0.35004·log10(WC + HC - NC) + 0.22100·log10(h)) - 450
/// ```
pub fn navy_body_fat_female(waist_cm: f64, hip_cm: f64, neck_cm: f64, height_cm: f64) -> Option<f64> {
    let d = waist_cm + hip_cm - neck_cm;
    if d <= 0.0 {
        return None;
    }
    let density = 1.29579 - 0.35004 * d.log10() + 0.22100 * height_cm.log10();
    Some(495.0 / density - 450.0)
}

/// BMI-based adult body fat (%), Deurenberg 1991
///
/// # Formula
/// ```text
/// BF% = 1.20·BMI + 0.23·a - 10.8·s - 5.4      s = 1 (male), 0 (female)
/// ```
#[inline]
pub fn deurenberg_body_fat(bmi: f64, age: f64, sex: Sex) -> f64 {
    let s = match sex {
        Sex::Male => 1.0,
        Sex::Female => 0.0,
    };
    1.20 * bmi + 0.23 * age - 10.8 * s - 5.4
}

// =============================================================================
// IDEAL WEIGHT
// All four are linear in inches of height over five feet.
// =============================================================================

#[inline]
fn over_five_feet(base_kg: f64, kg_per_inch: f64, height_in: f64) -> f64 {
    base_kg + kg_per_inch * (height_in - 60.0)
}

/// Devine (1974): 50 / 45.5 kg + 2.3 kg per inch over 5 ft
pub fn devine(sex: Sex, height_in: f64) -> f64 {
    match sex {
        Sex::Male => over_five_feet(50.0, 2.3, height_in),
        Sex::Female => over_five_feet(45.5, 2.3, height_in),
    }
}

/// Robinson (1983): 52 kg + 1.9 kg/in (male), 49 kg + 1.7 kg/in (female)
pub fn robinson(sex: Sex, height_in: f64) -> f64 {
    match sex {
        Sex::Male => over_five_feet(52.0, 1.9, height_in),
        Sex::Female => over_five_feet(49.0, 1.7, height_in),
    }
}

/// Miller (1983): 56.2 kg + 1.41 kg/in (male), 53.1 kg + 1.36 kg/in (female)
pub fn miller(sex: Sex, height_in: f64) -> f64 {
    match sex {
        Sex::Male => over_five_feet(56.2, 1.41, height_in),
        Sex::Female => over_five_feet(53.1, 1.36, height_in),
    }
}

/// Hamwi (1964): 48 kg + 2.7 kg/in (male), 45.5 kg + 2.2 kg/in (female)
pub fn hamwi(sex: Sex, height_in: f64) -> f64 {
    match sex {
        Sex::Male => over_five_feet(48.0, 2.7, height_in),
        Sex::Female => over_five_feet(45.5, 2.2, height_in),
    }
}

// =============================================================================
// LEAN BODY MASS
// =============================================================================

/// Boer (1984) lean body mass (kg)
///
/// - Male:   0.407w + 0.267h - 19.2
/// - Female: 0.252w + 0.473h - 48.3
pub fn boer_lbm(sex: Sex, weight_kg: f64, height_cm: f64) -> f64 {
    match sex {
        Sex::Male => 0.407 * weight_kg + 0.267 * height_cm - 19.2,
        Sex::Female => 0.252 * weight_kg + 0.473 * height_cm - 48.3,
    }
}

/// James (1976) lean body mass (kg)
///
/// - Male:   1.1w - 128(w/h)²
/// - Female: 1.07w - 148(w/h)²
pub fn james_lbm(sex: Sex, weight_kg: f64, height_cm: f64) -> f64 {
    let ratio = weight_kg / height_cm;
    match sex {
        Sex::Male => 1.1 * weight_kg - 128.0 * ratio * ratio,
        Sex::Female => 1.07 * weight_kg - 148.0 * ratio * ratio,
    }
}

/// Hume (1966) lean body mass (kg)
///
/// - Male:   0.32810w + 0.33929h - 29.5336
/// - Female: 0.29569w + 0.41813h - 43.2933
pub fn hume_lbm(sex: Sex, weight_kg: f64, height_cm: f64) -> f64 {
    match sex {
        Sex::Male => 0.32810 * weight_kg + 0.33929 * height_cm - 29.5336,
        Sex::Female => 0.29569 * weight_kg + 0.41813 * height_cm - 43.2933,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        // 80 / 1.8² = 24.691358...
        let value = bmi(80.0, 1.8);
        assert!((value - 24.691_358).abs() < 1e-6);
    }

    #[test]
    fn test_ratios() {
        assert_eq!(waist_to_height(90.0, 180.0), 0.5);
        assert_eq!(waist_to_hip(80.0, 100.0), 0.8);
    }

    #[test]
    fn test_absi() {
        let b = bmi(80.0, 1.8);
        assert!((absi(0.9, b, 1.8) - 0.07911).abs() < 1e-4);
    }

    #[test]
    fn test_bri() {
        let value = bri(0.9, 1.8).unwrap();
        assert!((value - 3.359).abs() < 0.01);
        // Waist radius beyond half the height has no ellipse
        assert_eq!(bri(2.5, 0.5), None);
    }

    #[test]
    fn test_navy_male() {
        let bf = navy_body_fat_male(90.0, 40.0, 180.0).unwrap();
        assert!((bf - 18.37).abs() < 0.05);
        assert_eq!(navy_body_fat_male(40.0, 40.0, 180.0), None);
    }

    #[test]
    fn test_navy_female() {
        let bf = navy_body_fat_female(75.0, 100.0, 33.0, 165.0).unwrap();
        assert!((bf - 29.43).abs() < 0.1);
    }

    #[test]
    fn test_deurenberg() {
        let bf = deurenberg_body_fat(bmi(80.0, 1.8), 30.0, Sex::Male);
        assert!((bf - 20.33).abs() < 0.01);
    }

    #[test]
    fn test_ideal_weight_at_five_feet_is_base() {
        assert_eq!(devine(Sex::Male, 60.0), 50.0);
        assert_eq!(robinson(Sex::Female, 60.0), 49.0);
        assert_eq!(miller(Sex::Male, 60.0), 56.2);
        assert_eq!(hamwi(Sex::Female, 60.0), 45.5);
    }

    #[test]
    fn test_devine_male_180cm() {
        let height_in = 180.0 / 2.54;
        assert!((devine(Sex::Male, height_in) - 74.99).abs() < 0.01);
    }

    #[test]
    fn test_lean_body_mass() {
        assert!((boer_lbm(Sex::Male, 80.0, 180.0) - 61.42).abs() < 1e-9);
        assert!((james_lbm(Sex::Male, 80.0, 180.0) - 62.716).abs() < 1e-3);
        assert!((hume_lbm(Sex::Male, 80.0, 180.0) - 57.7866).abs() < 1e-4);
    }
}
