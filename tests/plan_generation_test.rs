// ABOUTME: End-to-end tests for diet plan generation through the service layer
// ABOUTME: Validation errors, reference scenarios, determinism, and JSON output shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use dietplan_engine::{
    errors::{ErrorCode, ErrorResponse},
    models::PatientProfileInput,
    services::{generate_plan, PlanGenerationService},
};
use serde_json::Value;

mod common;

fn service() -> PlanGenerationService<'static> {
    common::init_test_logging();
    PlanGenerationService::new(common::default_assembler())
}

fn missing_fields(input: &PatientProfileInput) -> Vec<String> {
    let error = service().generate(input).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingFields);
    serde_json::from_value(error.context.details["missingFields"].clone()).unwrap()
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_empty_input_reports_every_required_field() {
    let missing = missing_fields(&PatientProfileInput::default());
    assert_eq!(
        missing,
        ["name", "age", "weight", "height", "goal", "activityLevel"]
    );
}

#[test]
fn test_falsy_values_count_as_missing() {
    let input = PatientProfileInput {
        name: Some("   ".to_owned()),
        age: Some(0.0),
        weight: Some(f64::NAN),
        height: Some(0.0),
        goal: Some(String::new()),
        ..common::reference_input()
    };

    assert_eq!(
        missing_fields(&input),
        ["name", "age", "weight", "height", "goal"]
    );
}

#[test]
fn test_single_missing_field() {
    let input = PatientProfileInput {
        activity_level: None,
        ..common::reference_input()
    };
    assert_eq!(missing_fields(&input), ["activityLevel"]);
}

#[test]
fn test_missing_fields_error_response_shape() {
    let error = service()
        .generate(&PatientProfileInput::default())
        .unwrap_err();
    assert_eq!(error.http_status(), 400);

    let json = serde_json::to_value(ErrorResponse::from(error)).unwrap();
    assert_eq!(json["error"]["code"], "MISSING_FIELDS");
    assert_eq!(json["error"]["details"]["missingFields"][0], "name");
}

#[test]
fn test_optional_lists_default_to_empty() {
    let plan = service()
        .generate_at(&common::reference_input(), common::fixed_clock())
        .unwrap();

    assert!(plan.restrictions.allergies.is_empty());
    assert!(plan.restrictions.disliked_foods.is_empty());
    assert!(plan.restrictions.health_conditions.is_empty());
    assert!(plan.restrictions.dietary_restrictions.is_empty());
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_reference_profile_numbers() {
    let plan = service()
        .generate_at(&common::reference_input(), common::fixed_clock())
        .unwrap();

    assert!((plan.patient_info.bmi - 24.22).abs() < 1e-9);
    assert_eq!(plan.calculations.bmr, 1672);
    assert_eq!(plan.calculations.tdee, 2592);
    assert_eq!(plan.calculations.target_calories, 2074);

    let macros = plan.calculations.macros;
    let energy = macros.protein * 4 + macros.carbs * 4 + macros.fat * 9;
    assert!((energy - 2074).abs() <= 3);

    assert_eq!(plan.patient_info.goal.en, "Weight Loss");
    assert_eq!(plan.patient_info.goal.ar, "إنقاص الوزن");
    assert_eq!(plan.patient_info.activity_level.en, "Moderately Active");
}

#[test]
fn test_diabetic_maintenance_scenario() {
    let input = PatientProfileInput {
        name: Some("Test".to_owned()),
        age: Some(40.0),
        weight: Some(90.0),
        height: Some(160.0),
        goal: Some("maintain".to_owned()),
        activity_level: Some("sedentary".to_owned()),
        health_conditions: Some(vec!["diabetes".to_owned()]),
        ..PatientProfileInput::default()
    };

    let service = service();
    let profile = input.validate().unwrap();
    assert!(service.assembler().classify(&profile).has_diabetes());

    let plan = service.generate_at(&input, common::fixed_clock()).unwrap();
    assert_eq!(plan.beverages.forbidden.len(), 4);
    assert!(plan
        .supplements
        .recommended
        .iter()
        .all(|entry| entry.name.en != "Vitamin B12"));
    assert_eq!(plan.restrictions.health_conditions, ["diabetes"]);
}

#[test]
fn test_unknown_goal_and_activity_degrade_to_defaults() {
    let input = PatientProfileInput {
        goal: Some("keto".to_owned()),
        activity_level: Some("athlete".to_owned()),
        ..common::reference_input()
    };
    let maintain_sedentary = PatientProfileInput {
        goal: Some("maintain".to_owned()),
        activity_level: Some("sedentary".to_owned()),
        ..common::reference_input()
    };

    let plan = service().generate_at(&input, common::fixed_clock()).unwrap();
    let baseline = service()
        .generate_at(&maintain_sedentary, common::fixed_clock())
        .unwrap();

    assert_eq!(plan.calculations, baseline.calculations);
    assert_eq!(plan.patient_info.goal.en, "keto");
    assert_eq!(plan.patient_info.goal.ar, "keto");
    assert_eq!(plan.patient_info.activity_level.en, "athlete");
    assert_eq!(plan.supplements.recommended.len(), 2);
}

#[test]
fn test_goal_monotonicity_end_to_end() {
    let target = |goal: &str| {
        let input = PatientProfileInput {
            goal: Some(goal.to_owned()),
            ..common::reference_input()
        };
        service()
            .generate_at(&input, common::fixed_clock())
            .unwrap()
            .calculations
            .target_calories
    };

    assert!(target("weight_loss") < target("maintain"));
    assert!(target("maintain") < target("muscle_gain"));
    assert_eq!(target("maintain"), target("health"));
}

#[test]
fn test_acidity_and_dairy_shape_the_plan() {
    let input = common::input_with_constraints(&["dairy"], &["حموضة"], &[]);
    let plan = service().generate_at(&input, common::fixed_clock()).unwrap();

    assert_eq!(plan.guidelines.len(), 4);
    assert!(plan
        .meal_plan
        .slots()
        .flat_map(|(_, options)| options)
        .all(|option| !option.name.en.contains("Yogurt") && !option.name.en.contains("Milk")));
}

// ============================================================================
// Determinism and output shape
// ============================================================================

#[test]
fn test_identical_input_yields_identical_bytes() {
    let input = common::input_with_constraints(
        &["shellfish"],
        &["hypertension", "diabetes"],
        &["vegetarian"],
    );
    let service = service();

    let first = serde_json::to_string(&service.generate_at(&input, common::fixed_clock()).unwrap())
        .unwrap();
    let second =
        serde_json::to_string(&service.generate_at(&input, common::fixed_clock()).unwrap())
            .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_plans_differ_only_in_generated_at() {
    let strip = |mut value: Value| {
        value.as_object_mut().unwrap().remove("generatedAt");
        value
    };

    let first = generate_plan(&common::reference_input()).unwrap();
    let second = generate_plan(&common::reference_input()).unwrap();

    assert_eq!(
        strip(serde_json::to_value(&first).unwrap()),
        strip(serde_json::to_value(&second).unwrap())
    );
}

#[test]
fn test_plan_json_uses_camel_case_sections() {
    let plan = service()
        .generate_at(&common::reference_input(), common::fixed_clock())
        .unwrap();
    let json = serde_json::to_value(&plan).unwrap();

    for key in [
        "patientInfo",
        "calculations",
        "mealPlan",
        "beverages",
        "supplements",
        "guidelines",
        "alternatives",
        "restrictions",
        "generatedAt",
    ] {
        assert!(json.get(key).is_some(), "missing section {key}");
    }
    assert!(json["calculations"]["targetCalories"].is_i64());
    assert!(json["mealPlan"]["morningSnack"].is_array());
    assert!(json["mealPlan"]["eveningSnack"].is_array());
    assert!(json["patientInfo"]["activityLevel"]["ar"].is_string());
    assert_eq!(json["generatedAt"], "2025-01-15T09:30:00Z");
}

#[test]
fn test_json_request_round_trip_through_service() {
    let body = r#"{
        "name": "Huda",
        "age": 52,
        "weight": 68.5,
        "height": 158,
        "goal": "health",
        "activityLevel": "light",
        "allergies": ["fish"],
        "dislikedFoods": ["okra"]
    }"#;

    let plan = service().generate_from_json(body).unwrap();

    assert_eq!(plan.patient_info.name, "Huda");
    assert_eq!(plan.restrictions.disliked_foods, ["okra"]);
    assert!(plan
        .meal_plan
        .lunch
        .iter()
        .all(|option| !option.name.en.contains("Fish")));
}

#[test]
fn test_any_non_zero_json_age_is_accepted() {
    let service = service();
    let body = |age: &str| {
        format!(
            r#"{{"name": "Amal", "age": {age}, "weight": 70, "height": 170,
                "goal": "weight_loss", "activityLevel": "moderate"}}"#
        )
    };

    let whole = service.generate_from_json(&body("40")).unwrap();
    let float_whole = service.generate_from_json(&body("40.0")).unwrap();
    assert_eq!(whole.calculations, float_whole.calculations);
    assert!((float_whole.patient_info.age - 40.0).abs() < f64::EPSILON);

    let fractional = service.generate_from_json(&body("40.5")).unwrap();
    assert!((fractional.patient_info.age - 40.5).abs() < f64::EPSILON);
    // 5.677 kcal per year of age, half a year older lowers BMR by about 3
    assert!(fractional.calculations.bmr < whole.calculations.bmr);

    let negative = service.generate_from_json(&body("-3")).unwrap();
    assert!((negative.patient_info.age + 3.0).abs() < f64::EPSILON);

    let zero = service.generate_from_json(&body("0")).unwrap_err();
    assert_eq!(zero.code, ErrorCode::MissingFields);
}

#[test]
fn test_batch_generation_matches_single_generation() {
    let inputs = vec![
        common::reference_input(),
        common::input_with_constraints(&[], &["cholesterol"], &["vegan"]),
    ];
    let service = service();

    let batch = service.generate_batch(&inputs);
    for (input, result) in inputs.iter().zip(batch) {
        let single = service.generate(input).unwrap();
        let batched = result.unwrap();
        assert_eq!(batched.calculations, single.calculations);
        assert_eq!(batched.meal_plan, single.meal_plan);
    }
}
