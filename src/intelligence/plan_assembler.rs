// ABOUTME: Assembles a complete diet plan from a validated patient profile
// ABOUTME: Runs biometrics, classification, meal selection and advisors into one document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Assembly
//!
//! [`PlanAssembler`] is the deterministic core of plan generation: given the
//! same profile, configuration and timestamp it produces an identical
//! [`DietPlan`]. The only non-deterministic input, the generation time, is a
//! parameter of [`PlanAssembler::assemble_at`].

use super::advisors::{build_guidelines, recommend_beverages, recommend_supplements};
use super::alternatives::substitution_table;
use super::biometrics::{
    calculate_bmi, calculate_bmr, calculate_macros, calculate_target_calories, calculate_tdee,
    round_whole,
};
use super::constraints::{ConstraintClassifier, DietaryFlags, KeywordClassifier};
use super::labels::{activity_label, goal_label};
use super::meal_catalog::generate_meal_plan;
use crate::config::EngineConfig;
use chrono::{DateTime, Utc};
use dietplan_core::models::{
    Calculations, DietPlan, Gender, PatientInfo, PatientProfile, Restrictions,
};

/// Builds diet plans from validated profiles
#[derive(Clone, Copy)]
pub struct PlanAssembler<'a> {
    config: &'a EngineConfig,
    classifier: &'a dyn ConstraintClassifier,
}

impl PlanAssembler<'static> {
    /// Assembler over the process-wide configuration and keyword classifier
    #[must_use]
    pub fn global() -> Self {
        Self::new(EngineConfig::global(), KeywordClassifier::shared())
    }
}

impl<'a> PlanAssembler<'a> {
    /// Assembler over explicit collaborators
    #[must_use]
    pub fn new(config: &'a EngineConfig, classifier: &'a dyn ConstraintClassifier) -> Self {
        Self { config, classifier }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &'a EngineConfig {
        self.config
    }

    /// Dietary flags for a profile
    #[must_use]
    pub fn classify(&self, profile: &PatientProfile) -> DietaryFlags {
        self.classifier.classify_profile(profile)
    }

    /// Energy figures for a profile
    ///
    /// Plans have no sex input, so the male BMR branch is always used.
    #[must_use]
    pub fn calculations(&self, profile: &PatientProfile) -> Calculations {
        let nutrition = &self.config.nutrition;

        let bmr = round_whole(calculate_bmr(
            profile.weight,
            profile.height,
            profile.age,
            Gender::Male,
            &nutrition.bmr,
        ));
        let tdee = calculate_tdee(bmr, &profile.activity_level, &nutrition.activity_factors);
        let target_calories =
            calculate_target_calories(tdee, &profile.goal, &nutrition.goal_adjustments);

        Calculations {
            bmr,
            tdee,
            target_calories,
            macros: calculate_macros(target_calories, &nutrition.macro_split),
        }
    }

    /// Assemble a plan stamped with the current time
    #[must_use]
    pub fn assemble(&self, profile: &PatientProfile) -> DietPlan {
        self.assemble_at(profile, Utc::now())
    }

    /// Assemble a plan stamped with `generated_at`
    #[must_use]
    pub fn assemble_at(&self, profile: &PatientProfile, generated_at: DateTime<Utc>) -> DietPlan {
        let flags = self.classify(profile);
        let calculations = self.calculations(profile);

        DietPlan {
            patient_info: PatientInfo {
                name: profile.name.clone(),
                age: profile.age,
                weight: profile.weight,
                height: profile.height,
                bmi: calculate_bmi(profile.weight, profile.height),
                goal: goal_label(&profile.goal),
                activity_level: activity_label(&profile.activity_level),
            },
            meal_plan: generate_meal_plan(
                calculations.target_calories,
                flags,
                &self.config.nutrition.meal_slots,
            ),
            calculations,
            beverages: recommend_beverages(flags),
            supplements: recommend_supplements(&profile.goal),
            guidelines: build_guidelines(flags),
            alternatives: substitution_table(),
            restrictions: Restrictions {
                allergies: profile.allergies.clone(),
                disliked_foods: profile.disliked_foods.clone(),
                health_conditions: profile.health_conditions.clone(),
                dietary_restrictions: profile.dietary_restrictions.clone(),
            },
            generated_at,
        }
    }
}

impl std::fmt::Debug for PlanAssembler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanAssembler")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
