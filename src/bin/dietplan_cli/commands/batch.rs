// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: `batch` command: a JSON array of profiles in, an array of plans or errors out
// ABOUTME: Entries are generated in parallel and reported in input order

use crate::helpers::io::{print_json, read_input};
use dietplan_engine::errors::{AppError, AppResult, ErrorResponse};
use dietplan_engine::models::{DietPlan, PatientProfileInput};
use dietplan_engine::services::PlanGenerationService;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// One batch result: a plan or the error envelope for that entry
#[derive(Serialize)]
#[serde(untagged)]
enum BatchEntry {
    Plan(Box<DietPlan>),
    Failed(ErrorResponse),
}

impl From<AppResult<DietPlan>> for BatchEntry {
    fn from(result: AppResult<DietPlan>) -> Self {
        match result {
            Ok(plan) => Self::Plan(Box::new(plan)),
            Err(error) => Self::Failed(error.into()),
        }
    }
}

/// Generate plans for every profile in the array read from `input`
pub fn run(input: Option<&Path>, pretty: bool) -> AppResult<()> {
    let body = read_input(input)?;
    let inputs: Vec<PatientProfileInput> =
        serde_json::from_str(&body).map_err(AppError::from)?;

    let results = PlanGenerationService::global().generate_batch(&inputs);
    let failed = results.iter().filter(|result| result.is_err()).count();
    info!(total = results.len(), failed, "Batch generation finished");

    let entries: Vec<BatchEntry> = results.into_iter().map(BatchEntry::from).collect();
    print_json(&entries, pretty)
}
