//! # Energy Expenditure Formulas
//!
//! Basal metabolic rate estimators and the TDEE multiplier.
//!
//! ## Notation
//!
//! - `w` = body mass (kg)
//! - `h` = height (cm)
//! - `a` = age (years)
//! - `bf` = body fat (%)
//!
//! ## References
//!
//! - Mifflin MD, St Jeor ST et al. (1990), Am J Clin Nutr 51(2):241-247
//! - Roza AM, Shizgal HM (1984), Am J Clin Nutr 40(1):168-182
//! - McArdle WD, Katch FI, Katch VL, Exercise Physiology (Katch-McArdle)

use crate::input::Sex;

/// Energy per gram of protein (kcal)
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Energy per gram of carbohydrate (kcal)
pub const KCAL_PER_G_CARB: f64 = 4.0;
/// Energy per gram of fat (kcal)
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Mifflin-St Jeor BMR (kcal/day)
///
/// # Formula
/// ```text
/// BMR = 10w + 6.25h - 5a + s      s = +5 (male), -161 (female)
/// ```
#[inline]
pub fn mifflin_st_jeor(sex: Sex, weight_kg: f64, height_cm: f64, age: f64) -> f64 {
    let s = match sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age + s
}

/// Revised Harris-Benedict BMR (Roza & Shizgal 1984), kcal/day
///
/// # Formulas
/// - Male:   88.362 + 13.397w + 4.799h - 5.677a
/// - Female: 447.593 + 9.247w + 3.098h - 4.330a
#[inline]
pub fn harris_benedict(sex: Sex, weight_kg: f64, height_cm: f64, age: f64) -> f64 {
    match sex {
        Sex::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Sex::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    }
}

/// Katch-McArdle BMR from lean body mass, kcal/day
///
/// # Formula
/// ```text
/// LBM = w(1 - bf/100)
/// BMR = 370 + 21.6·LBM
/// ```
#[inline]
pub fn katch_mcardle(weight_kg: f64, body_fat_pct: f64) -> f64 {
    let lbm = weight_kg * (1.0 - body_fat_pct / 100.0);
    370.0 + 21.6 * lbm
}

/// Total daily energy expenditure: BMR × activity factor
#[inline]
pub fn tdee(bmr: f64, activity_factor: f64) -> f64 {
    bmr * activity_factor
}

/// Split a daily calorie target into macronutrient grams.
///
/// Shares are fractions of total energy and should sum to 1.0.
///
/// # Returns
/// (protein_g, carbs_g, fat_g)
pub fn macro_grams(kcal: f64, protein_share: f64, carb_share: f64, fat_share: f64) -> (f64, f64, f64) {
    (
        kcal * protein_share / KCAL_PER_G_PROTEIN,
        kcal * carb_share / KCAL_PER_G_CARB,
        kcal * fat_share / KCAL_PER_G_FAT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mifflin_male() {
        // 10*80 + 6.25*180 - 5*30 + 5 = 1780
        assert_eq!(mifflin_st_jeor(Sex::Male, 80.0, 180.0, 30.0), 1780.0);
    }

    #[test]
    fn test_mifflin_female() {
        // 10*60 + 6.25*165 - 5*40 - 161 = 1270.25
        assert_eq!(mifflin_st_jeor(Sex::Female, 60.0, 165.0, 40.0), 1270.25);
    }

    #[test]
    fn test_harris_benedict() {
        let male = harris_benedict(Sex::Male, 80.0, 180.0, 30.0);
        assert!((male - 1853.632).abs() < 1e-9);
        let female = harris_benedict(Sex::Female, 60.0, 165.0, 40.0);
        assert!((female - 1340.383).abs() < 1e-9);
    }

    #[test]
    fn test_katch_mcardle() {
        // LBM = 80 * 0.8 = 64; 370 + 21.6*64 = 1752.4
        assert!((katch_mcardle(80.0, 20.0) - 1752.4).abs() < 1e-9);
    }

    #[test]
    fn test_tdee_moderate() {
        assert!((tdee(1780.0, 1.55) - 2759.0).abs() < 1e-9);
    }

    #[test]
    fn test_macro_grams_balance() {
        let (p, c, f) = macro_grams(2000.0, 0.3, 0.4, 0.3);
        assert!((p - 150.0).abs() < 1e-9);
        assert!((c - 200.0).abs() < 1e-9);
        assert!((f - 66.666_666).abs() < 1e-4);
        // Energy is conserved
        let kcal = p * KCAL_PER_G_PROTEIN + c * KCAL_PER_G_CARB + f * KCAL_PER_G_FAT;
        assert!((kcal - 2000.0).abs() < 1e-9);
    }
}
