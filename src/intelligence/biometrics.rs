// ABOUTME: Biometric calculations for diet planning: BMR, TDEE, target calories, BMI, macros
// ABOUTME: Pure numeric functions driven by the nutrition configuration coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Biometric Calculator
//!
//! Energy and body composition formulas used by plan generation. Every function
//! is total: inputs are validated by the caller before they reach this module.
//!
//! # Scientific References
//!
//! - Roza, A.M. & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated:
//!   resting energy requirements and the body cell mass.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology.

use crate::config::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacroDistribution, NutritionConfig,
};
use dietplan_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use dietplan_core::models::{ActivityLevel, Gender, Goal, Macros};
use serde::{Deserialize, Serialize};

/// Round half away from zero to a whole number
#[must_use]
pub fn round_whole(value: f64) -> i64 {
    value.round() as i64
}

/// Round to a fixed number of decimals
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Calculate Basal Metabolic Rate using the revised Harris-Benedict equation
///
/// Formula: BMR = constant + (w x `weight_kg`) + (h x `height_cm`) - (a x age)
/// - Men: 88.362 + 13.397w + 4.799h - 5.677a
/// - Women: 447.593 + 9.247w + 3.098h - 4.330a
///
/// Returns the unrounded value; callers round at use sites.
#[must_use]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: f64,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let coefficients = match gender {
        Gender::Male => &config.male,
        Gender::Female => &config.female,
    };

    let weight_component = coefficients.weight_coef * weight_kg;
    let height_component = coefficients.height_coef * height_cm;
    let age_component = coefficients.age_coef * age;

    coefficients.constant + weight_component + height_component - age_component
}

/// Activity multiplier for a level; unrecognized levels use the fallback factor
#[must_use]
pub fn activity_factor(activity_level: &ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::High => config.high,
        ActivityLevel::Other(_) => config.fallback,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = round(BMR x Activity Factor)
#[must_use]
pub fn calculate_tdee(
    bmr: i64,
    activity_level: &ActivityLevel,
    config: &ActivityFactorsConfig,
) -> i64 {
    round_whole(bmr as f64 * activity_factor(activity_level, config))
}

/// Calculate the goal-adjusted daily calorie target
///
/// - Weight loss: TDEE x 0.8
/// - Muscle gain: TDEE x 1.15
/// - Maintain, health, or anything else: TDEE
#[must_use]
pub fn calculate_target_calories(tdee: i64, goal: &Goal, config: &GoalAdjustmentConfig) -> i64 {
    let factor = match goal {
        Goal::WeightLoss => config.weight_loss,
        Goal::MuscleGain => config.muscle_gain,
        Goal::Maintain | Goal::Health | Goal::Other(_) => 1.0,
    };
    round_whole(tdee as f64 * factor)
}

/// Calculate Body Mass Index, rounded to two decimals
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)^2
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round_to(weight_kg / (height_m * height_m), 2)
}

/// Split target calories into macro grams
///
/// Each macro is `round(target x share / kcal_per_gram)`, so the energy of the
/// returned grams differs from the target by at most 8.5 kcal.
#[must_use]
pub fn calculate_macros(target_calories: i64, split: &MacroDistribution) -> Macros {
    let target = target_calories as f64;
    let share = |pct: u8| f64::from(pct) / 100.0;

    Macros {
        protein: round_whole(target * share(split.protein_pct) / KCAL_PER_GRAM_PROTEIN),
        carbs: round_whole(target * share(split.carbs_pct) / KCAL_PER_GRAM_CARBS),
        fat: round_whole(target * share(split.fat_pct) / KCAL_PER_GRAM_FAT),
    }
}

/// Energy content of a macro set in kcal
#[must_use]
pub fn macro_energy(macros: &Macros) -> f64 {
    macros.fat as f64 * KCAL_PER_GRAM_FAT
        + macros.carbs as f64 * KCAL_PER_GRAM_CARBS
        + macros.protein as f64 * KCAL_PER_GRAM_PROTEIN
}

/// Biometric parameters for a standalone energy calculation
#[derive(Debug, Clone, PartialEq)]
pub struct BiometricParams {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: f64,
    /// BMR formula branch
    pub gender: Gender,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Goal for the calorie adjustment
    pub goal: Goal,
}

/// Rounded energy figures for one person
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiometricSummary {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: i64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: i64,
    /// Goal-adjusted calorie target (kcal/day)
    pub target_calories: i64,
    /// Body Mass Index
    pub bmi: f64,
    /// Macro gram targets
    pub macros: Macros,
}

impl BiometricSummary {
    /// Run the full calculation chain
    ///
    /// BMR is rounded before TDEE is derived from it, and TDEE is rounded
    /// before the goal adjustment, matching the per-step rounding of the plan.
    #[must_use]
    pub fn calculate(params: &BiometricParams, config: &NutritionConfig) -> Self {
        let bmr = round_whole(calculate_bmr(
            params.weight_kg,
            params.height_cm,
            params.age,
            params.gender,
            &config.bmr,
        ));
        let tdee = calculate_tdee(bmr, &params.activity_level, &config.activity_factors);
        let target_calories =
            calculate_target_calories(tdee, &params.goal, &config.goal_adjustments);

        Self {
            bmr,
            tdee,
            target_calories,
            bmi: calculate_bmi(params.weight_kg, params.height_cm),
            macros: calculate_macros(target_calories, &config.macro_split),
        }
    }
}
