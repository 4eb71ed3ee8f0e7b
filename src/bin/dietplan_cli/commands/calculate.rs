// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: `calculate` command: energy figures without a full plan
// ABOUTME: Exposes the sex-specific BMR branch that plan generation does not use

use crate::helpers::io::print_json;
use dietplan_engine::config::EngineConfig;
use dietplan_engine::errors::{AppError, AppResult};
use dietplan_engine::intelligence::{BiometricParams, BiometricSummary};
use dietplan_engine::models::{ActivityLevel, Gender, Goal};

/// Print BMR, TDEE, target calories, BMI and macros
pub fn run(
    weight: f64,
    height: f64,
    age: f64,
    gender: &str,
    activity: &str,
    goal: &str,
) -> AppResult<()> {
    if ![weight, height, age].iter().all(|v| v.is_finite() && *v > 0.0) {
        return Err(AppError::invalid_input(
            "weight, height and age must be positive numbers",
        ));
    }

    let params = BiometricParams {
        weight_kg: weight,
        height_cm: height,
        age,
        gender: Gender::parse(gender)?,
        activity_level: ActivityLevel::parse(activity),
        goal: Goal::parse(goal),
    };
    let summary = BiometricSummary::calculate(&params, &EngineConfig::global().nutrition);
    print_json(&summary, true)
}
