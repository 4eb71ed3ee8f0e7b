// ABOUTME: Algorithm tests for the biometric calculator
// ABOUTME: Covers BMR branches, TDEE factors, goal adjustments, BMI rounding and macro consistency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use dietplan_engine::{
    config::{EngineConfig, MacroDistribution},
    intelligence::biometrics::{
        calculate_bmi, calculate_bmr, calculate_macros, calculate_target_calories,
        calculate_tdee, macro_energy, round_whole, BiometricParams, BiometricSummary,
    },
    models::{ActivityLevel, Gender, Goal},
};

mod common;

// ============================================================================
// BMR - Revised Harris-Benedict
// ============================================================================

#[test]
fn test_bmr_male_reference_case() {
    let config = &EngineConfig::defaults().nutrition;

    // 88.362 + 13.397*70 + 4.799*170 - 5.677*30 = 1671.672
    let bmr = calculate_bmr(70.0, 170.0, 30.0, Gender::Male, &config.bmr);

    assert!((bmr - 1671.672).abs() < 1e-6);
    assert_eq!(round_whole(bmr), 1672);
}

#[test]
fn test_bmr_female_branch() {
    let config = &EngineConfig::defaults().nutrition;

    // 447.593 + 9.247*60 + 3.098*165 - 4.330*25 = 1405.333
    let bmr = calculate_bmr(60.0, 165.0, 25.0, Gender::Female, &config.bmr);

    assert!((bmr - 1405.333).abs() < 1e-6);
}

#[test]
fn test_bmr_decreases_with_age() {
    let config = &EngineConfig::defaults().nutrition;

    let young = calculate_bmr(80.0, 180.0, 25.0, Gender::Male, &config.bmr);
    let old = calculate_bmr(80.0, 180.0, 65.0, Gender::Male, &config.bmr);

    assert!(young > old);
}

// ============================================================================
// TDEE - activity factors
// ============================================================================

#[test]
fn test_tdee_for_every_activity_level() {
    let factors = &EngineConfig::defaults().nutrition.activity_factors;

    assert_eq!(calculate_tdee(1672, &ActivityLevel::Sedentary, factors), 2006);
    assert_eq!(calculate_tdee(1672, &ActivityLevel::Light, factors), 2299);
    assert_eq!(calculate_tdee(1672, &ActivityLevel::Moderate, factors), 2592);
    assert_eq!(calculate_tdee(1672, &ActivityLevel::High, factors), 2884);
}

#[test]
fn test_tdee_unknown_activity_matches_sedentary() {
    let factors = &EngineConfig::defaults().nutrition.activity_factors;
    let unknown = ActivityLevel::parse("couch_potato");

    assert_eq!(
        calculate_tdee(1500, &unknown, factors),
        calculate_tdee(1500, &ActivityLevel::Sedentary, factors)
    );
}

// ============================================================================
// Target calories - goal adjustments
// ============================================================================

#[test]
fn test_target_calories_per_goal() {
    let goals = &EngineConfig::defaults().nutrition.goal_adjustments;

    assert_eq!(calculate_target_calories(2592, &Goal::WeightLoss, goals), 2074);
    assert_eq!(calculate_target_calories(2592, &Goal::MuscleGain, goals), 2981);
    assert_eq!(calculate_target_calories(2592, &Goal::Maintain, goals), 2592);
    assert_eq!(calculate_target_calories(2592, &Goal::Health, goals), 2592);
    assert_eq!(
        calculate_target_calories(2592, &Goal::parse("bulk"), goals),
        2592
    );
}

#[test]
fn test_goal_ordering_holds_across_range() {
    let goals = &EngineConfig::defaults().nutrition.goal_adjustments;

    for tdee in (1200..=4000).step_by(37) {
        let loss = calculate_target_calories(tdee, &Goal::WeightLoss, goals);
        let keep = calculate_target_calories(tdee, &Goal::Maintain, goals);
        let gain = calculate_target_calories(tdee, &Goal::MuscleGain, goals);
        assert!(loss < keep && keep < gain, "ordering broken at tdee {tdee}");
    }
}

// ============================================================================
// BMI
// ============================================================================

#[test]
fn test_bmi_rounded_to_two_decimals() {
    assert!((calculate_bmi(70.0, 170.0) - 24.22).abs() < 1e-9);
    assert!((calculate_bmi(80.0, 180.0) - 24.69).abs() < 1e-9);
}

// ============================================================================
// Macros
// ============================================================================

#[test]
fn test_macros_reference_case() {
    let macros = calculate_macros(2074, &MacroDistribution::default());

    assert_eq!(macros.protein, 130);
    assert_eq!(macros.carbs, 233);
    assert_eq!(macros.fat, 69);
}

#[test]
fn test_macro_energy_stays_close_to_target() {
    let split = MacroDistribution::default();

    for target in 800..=4500 {
        let macros = calculate_macros(target, &split);
        let diff = (macro_energy(&macros) - target as f64).abs();
        // Three independent roundings: at most 2 + 2 + 4.5 kcal
        assert!(diff <= 8.5, "target {target} off by {diff}");
    }
}

#[test]
fn test_custom_macro_split() {
    let macros = calculate_macros(2000, &MacroDistribution::new(30, 40, 30));

    assert_eq!(macros.protein, 150);
    assert_eq!(macros.carbs, 200);
    assert_eq!(macros.fat, 67);
}

// ============================================================================
// Summary
// ============================================================================

#[test]
fn test_summary_chains_rounded_steps() {
    common::init_test_logging();
    let params = BiometricParams {
        weight_kg: 70.0,
        height_cm: 170.0,
        age: 30.0,
        gender: Gender::Male,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::WeightLoss,
    };

    let summary = BiometricSummary::calculate(&params, &EngineConfig::defaults().nutrition);

    assert_eq!(summary.bmr, 1672);
    assert_eq!(summary.tdee, 2592);
    assert_eq!(summary.target_calories, 2074);
    assert!((summary.bmi - 24.22).abs() < 1e-9);
    assert_eq!(summary.macros.protein, 130);
}

#[test]
fn test_summary_female_is_lower_for_same_body() {
    let config = &EngineConfig::defaults().nutrition;
    let male = BiometricParams {
        weight_kg: 65.0,
        height_cm: 168.0,
        age: 35.0,
        gender: Gender::Male,
        activity_level: ActivityLevel::Light,
        goal: Goal::Maintain,
    };
    let female = BiometricParams {
        gender: Gender::Female,
        ..male.clone()
    };

    let male_summary = BiometricSummary::calculate(&male, config);
    let female_summary = BiometricSummary::calculate(&female, config);

    assert!(female_summary.bmr < male_summary.bmr);
    assert!(female_summary.target_calories < male_summary.target_calories);
}
