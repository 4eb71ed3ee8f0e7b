// ABOUTME: Configuration management for the diet plan engine
// ABOUTME: Environment-only configuration with validated defaults and a global singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine configuration
//!
//! All numeric constants used by plan generation live here as data. Defaults
//! reproduce the reference formulas exactly; `DIETPLAN_*` environment variables
//! may override them and the result is validated before use.

/// Top-level engine configuration and loader
pub mod engine_config;
/// Configuration error types
pub mod error;
/// Nutrition formula coefficients and proportions
pub mod nutrition;

pub use engine_config::EngineConfig;
pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, HarrisBenedictCoefficients,
    MacroDistribution, MealSlotProportionsConfig, NutritionConfig,
};
