// ABOUTME: Plan generation service: validates raw input, assembles plans, logs outcomes
// ABOUTME: Supports single requests, JSON payloads, and order-preserving parallel batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::intelligence::PlanAssembler;
use chrono::{DateTime, Utc};
use dietplan_core::models::{DietPlan, PatientProfile, PatientProfileInput};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info_span, warn};

/// Validates requests and produces diet plans
///
/// Log events carry the goal, activity level and flag names only. Patient
/// names and free-text lists never reach the logs.
#[derive(Debug, Clone, Copy)]
pub struct PlanGenerationService<'a> {
    assembler: PlanAssembler<'a>,
}

impl PlanGenerationService<'static> {
    /// Service over the process-wide configuration and classifier
    #[must_use]
    pub fn global() -> Self {
        Self::new(PlanAssembler::global())
    }
}

impl Default for PlanGenerationService<'static> {
    fn default() -> Self {
        Self::global()
    }
}

impl<'a> PlanGenerationService<'a> {
    /// Service over an explicit assembler
    #[must_use]
    pub const fn new(assembler: PlanAssembler<'a>) -> Self {
        Self { assembler }
    }

    /// Underlying assembler
    #[must_use]
    pub const fn assembler(&self) -> &PlanAssembler<'a> {
        &self.assembler
    }

    /// Generate a plan stamped with the current time
    ///
    /// # Errors
    ///
    /// Returns `MISSING_FIELDS` listing every absent or falsy required field
    pub fn generate(&self, input: &PatientProfileInput) -> AppResult<DietPlan> {
        self.generate_at(input, Utc::now())
    }

    /// Generate a plan stamped with `generated_at`
    ///
    /// # Errors
    ///
    /// Returns `MISSING_FIELDS` listing every absent or falsy required field
    pub fn generate_at(
        &self,
        input: &PatientProfileInput,
        generated_at: DateTime<Utc>,
    ) -> AppResult<DietPlan> {
        let profile = input.validate().inspect_err(|error| {
            warn!(
                missing = ?error.context.details.get("missingFields"),
                "Rejected diet plan request"
            );
        })?;
        Ok(self.assemble(&profile, generated_at))
    }

    /// Parse a JSON request body and generate a plan
    ///
    /// # Errors
    ///
    /// Returns `INVALID_FORMAT` for malformed JSON or wrongly typed fields,
    /// otherwise the same errors as [`Self::generate`]
    pub fn generate_from_json(&self, body: &str) -> AppResult<DietPlan> {
        let input: PatientProfileInput = serde_json::from_str(body).map_err(AppError::from)?;
        self.generate(&input)
    }

    /// Generate plans for many requests in parallel
    ///
    /// Results keep the order of `inputs`; one failing request does not
    /// affect the others.
    #[must_use]
    pub fn generate_batch(&self, inputs: &[PatientProfileInput]) -> Vec<AppResult<DietPlan>> {
        let generated_at = Utc::now();
        let started = Instant::now();

        let results: Vec<AppResult<DietPlan>> = inputs
            .par_iter()
            .map(|input| self.generate_at(input, generated_at))
            .collect();

        let failed = results.iter().filter(|result| result.is_err()).count();
        debug!(
            total = inputs.len(),
            failed,
            duration_ms = started.elapsed().as_millis(),
            "Diet plan batch completed"
        );
        results
    }

    fn assemble(&self, profile: &PatientProfile, generated_at: DateTime<Utc>) -> DietPlan {
        let flags = self.assembler.classify(profile);
        let span = info_span!(
            "generate_diet_plan",
            goal = %profile.goal,
            activity_level = %profile.activity_level,
            flags = %flags.describe(),
            target_calories = tracing::field::Empty,
        );
        let _guard = span.enter();

        let plan = self.assembler.assemble_at(profile, generated_at);
        span.record("target_calories", plan.calculations.target_calories);
        debug!(
            breakfast = plan.meal_plan.breakfast.len(),
            lunch = plan.meal_plan.lunch.len(),
            dinner = plan.meal_plan.dinner.len(),
            guidelines = plan.guidelines.len(),
            "Diet plan assembled"
        );
        plan
    }
}

/// Generate a plan with the process-wide service
///
/// # Errors
///
/// Returns `MISSING_FIELDS` listing every absent or falsy required field
pub fn generate_plan(input: &PatientProfileInput) -> AppResult<DietPlan> {
    PlanGenerationService::global().generate(input)
}
