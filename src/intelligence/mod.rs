// ABOUTME: Diet plan intelligence: biometrics, constraint classification, meal catalog, advisors
// ABOUTME: Pure, deterministic building blocks composed by the plan assembler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Every function in this module is pure and synchronous. Plan generation is
//! a straight pipeline over a validated profile:
//!
//! 1. [`biometrics`] computes BMR, TDEE, target calories, BMI and macros
//! 2. [`constraints`] turns free-text constraints into [`DietaryFlags`]
//! 3. [`meal_catalog`] selects allowed options per meal slot
//! 4. [`advisors`] and [`alternatives`] fill the advisory sections
//! 5. [`plan_assembler`] composes the final document

/// Beverage, supplement and guideline sections
pub mod advisors;
/// Healthy substitution table
pub mod alternatives;
/// BMR, TDEE, target calories, BMI and macro calculations
pub mod biometrics;
/// Free-text constraint classification into dietary flags
pub mod constraints;
/// Bilingual goal and activity labels
pub mod labels;
/// Static meal tables and per-slot selection
pub mod meal_catalog;
/// Plan composition
pub mod plan_assembler;

pub use biometrics::{BiometricParams, BiometricSummary};
pub use constraints::{
    ConstraintClassifier, ConstraintInput, ConstraintSource, DietaryFlags, KeywordClassifier,
    KeywordRule,
};
pub use meal_catalog::{generate_meal_plan, MealTemplate};
pub use plan_assembler::PlanAssembler;
