// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: `generate` command: one patient profile JSON in, one diet plan JSON out
// ABOUTME: Validation failures are reported as the MISSING_FIELDS error envelope

use crate::helpers::io::{print_json, read_input};
use dietplan_engine::errors::AppResult;
use dietplan_engine::services::PlanGenerationService;
use std::path::Path;
use tracing::info;

/// Generate a plan for the profile read from `input` (or stdin)
pub fn run(input: Option<&Path>, pretty: bool) -> AppResult<()> {
    let body = read_input(input)?;
    let plan = PlanGenerationService::global().generate_from_json(&body)?;

    info!(
        target_calories = plan.calculations.target_calories,
        "Diet plan generated"
    );
    print_json(&plan, pretty)
}
