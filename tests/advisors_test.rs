// ABOUTME: Tests for beverage, supplement, guideline and substitution sections
// ABOUTME: Flag and goal driven branches plus fixed bilingual content
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use dietplan_engine::{
    intelligence::{
        advisors::{build_guidelines, recommend_beverages, recommend_supplements},
        alternatives::substitution_table,
        DietaryFlags,
    },
    models::{GuidelineKind, Goal},
};

// ============================================================================
// Beverages
// ============================================================================

#[test]
fn test_water_guidance_always_present() {
    for bits in 0..=DietaryFlags::all().bits() {
        let policy = recommend_beverages(DietaryFlags::from_bits_truncate(bits));
        assert!(policy.water.en.contains("8-10"));
        assert!(!policy.water.ar.is_empty());
    }
}

#[test]
fn test_allowed_list_fixed_except_coffee_amount() {
    let relaxed = recommend_beverages(DietaryFlags::empty());
    let strict = recommend_beverages(DietaryFlags::HIGH_PRESSURE | DietaryFlags::DIABETES);

    let names = |policy: &dietplan_engine::models::BeveragePolicy| {
        policy
            .allowed
            .iter()
            .map(|drink| drink.name.en.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(&relaxed), names(&strict));

    let coffee_amount = |policy: &dietplan_engine::models::BeveragePolicy| {
        policy
            .allowed
            .iter()
            .find(|drink| drink.name.en == "Coffee")
            .unwrap()
            .amount
            .en
            .clone()
    };
    assert!(coffee_amount(&relaxed).contains("max 2 cups"));
    assert!(coffee_amount(&strict).contains("1 cup"));
}

#[test]
fn test_forbidden_list_grows_with_diabetes_only() {
    let base = recommend_beverages(DietaryFlags::empty()).forbidden;
    let other_flags = recommend_beverages(
        DietaryFlags::ACIDITY | DietaryFlags::HIGH_PRESSURE | DietaryFlags::DAIRY_FREE,
    )
    .forbidden;
    let diabetic = recommend_beverages(DietaryFlags::DIABETES).forbidden;

    assert_eq!(base.len(), 3);
    assert_eq!(other_flags, base);
    assert_eq!(diabetic.len(), 4);
    assert_eq!(diabetic[..3], base[..]);
    assert!(diabetic[3].en.to_lowercase().contains("juice"));
}

// ============================================================================
// Supplements
// ============================================================================

#[test]
fn test_base_supplements_for_every_goal() {
    for goal in ["weight_loss", "muscle_gain", "maintain", "health", "unknown"] {
        let plan = recommend_supplements(&Goal::parse(goal));
        let names: Vec<&str> = plan
            .recommended
            .iter()
            .map(|entry| entry.name.en.as_str())
            .collect();

        assert_eq!(names[..2], ["Vitamin D", "Omega-3"]);
        assert!(plan.disclaimer.en.contains("doctor"));
        assert!(!plan.disclaimer.ar.is_empty());
    }
}

#[test]
fn test_b12_follows_goal() {
    assert_eq!(recommend_supplements(&Goal::WeightLoss).recommended.len(), 3);
    assert_eq!(recommend_supplements(&Goal::MuscleGain).recommended.len(), 3);
    assert_eq!(recommend_supplements(&Goal::Maintain).recommended.len(), 2);
    assert_eq!(recommend_supplements(&Goal::Health).recommended.len(), 2);

    let b12 = &recommend_supplements(&Goal::WeightLoss).recommended[2];
    assert_eq!(b12.name.en, "Vitamin B12");
    assert!(b12.dosage.en.contains("mcg"));
}

#[test]
fn test_vitamin_d_dosage_and_timing() {
    let plan = recommend_supplements(&Goal::Health);
    let vitamin_d = &plan.recommended[0];

    assert!(vitamin_d.dosage.en.contains("1000-2000 IU"));
    assert!(vitamin_d.timing.en.to_lowercase().contains("fat"));
}

// ============================================================================
// Guidelines
// ============================================================================

#[test]
fn test_guideline_categories_order() {
    let keys: Vec<GuidelineKind> = build_guidelines(DietaryFlags::ACIDITY)
        .into_iter()
        .map(|category| category.key)
        .collect();

    assert_eq!(
        keys,
        [
            GuidelineKind::CookingMethods,
            GuidelineKind::MealTiming,
            GuidelineKind::MindfulEating,
            GuidelineKind::AcidityTips,
        ]
    );
}

#[test]
fn test_acidity_tips_only_with_flag() {
    for bits in 0..=DietaryFlags::all().bits() {
        let flags = DietaryFlags::from_bits_truncate(bits);
        let has_tips = build_guidelines(flags)
            .iter()
            .any(|category| category.key == GuidelineKind::AcidityTips);
        assert_eq!(has_tips, flags.has_acidity());
    }
}

#[test]
fn test_guideline_keys_serialize_snake_case() {
    let json = serde_json::to_value(build_guidelines(DietaryFlags::ACIDITY)).unwrap();
    assert_eq!(json[0]["key"], "cooking_methods");
    assert_eq!(json[3]["key"], "acidity_tips");
}

// ============================================================================
// Alternatives
// ============================================================================

#[test]
fn test_substitution_table_is_fixed() {
    assert_eq!(substitution_table(), substitution_table());
}

#[test]
fn test_substitution_table_groups() {
    let table = substitution_table();

    assert!(!table.protein.is_empty());
    assert!(!table.carbs.is_empty());
    assert!(!table.fats.is_empty());

    let butter = table
        .fats
        .iter()
        .find(|entry| entry.original.en == "Butter")
        .unwrap();
    assert!(butter
        .alternatives
        .iter()
        .any(|alt| alt.en == "Olive oil"));
}
