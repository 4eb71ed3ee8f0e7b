// ABOUTME: Engine configuration container with environment overrides and validation
// ABOUTME: Provides the process-wide validated configuration used by plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export DIETPLAN_WEIGHT_LOSS_FACTOR=0.85
//!    export DIETPLAN_MACRO_PROTEIN_PCT=30
//!    ```
//!
//! 2. Default values (if env vars not set)
//!
//! # Examples
//!
//! ```rust
//! use dietplan_engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert!((config.nutrition.activity_factors.moderate - 1.55).abs() < f64::EPSILON);
//! assert_eq!(config.nutrition.macro_split.as_tuple(), (25, 45, 30));
//! ```

use super::error::ConfigError;
use super::nutrition::NutritionConfig;
use dietplan_core::constants::env_vars;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Main engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Formula coefficients and calorie proportions
    pub nutrition: NutritionConfig,
}

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

static DEFAULT_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

impl EngineConfig {
    /// Get the global configuration instance
    ///
    /// Loaded once per process; falls back to defaults when the environment
    /// holds invalid overrides.
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Shared built-in defaults, ignoring the environment
    pub fn defaults() -> &'static Self {
        DEFAULT_CONFIG.get_or_init(Self::default)
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first section that fails validation
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let nutrition = &mut self.nutrition;

        // Activity factor overrides
        override_from_env(
            env_vars::ACTIVITY_SEDENTARY,
            &mut nutrition.activity_factors.sedentary,
        )?;
        override_from_env(env_vars::ACTIVITY_LIGHT, &mut nutrition.activity_factors.light)?;
        override_from_env(
            env_vars::ACTIVITY_MODERATE,
            &mut nutrition.activity_factors.moderate,
        )?;
        override_from_env(env_vars::ACTIVITY_HIGH, &mut nutrition.activity_factors.high)?;
        override_from_env(
            env_vars::ACTIVITY_FALLBACK,
            &mut nutrition.activity_factors.fallback,
        )?;

        // Goal adjustment overrides
        override_from_env(
            env_vars::WEIGHT_LOSS_FACTOR,
            &mut nutrition.goal_adjustments.weight_loss,
        )?;
        override_from_env(
            env_vars::MUSCLE_GAIN_FACTOR,
            &mut nutrition.goal_adjustments.muscle_gain,
        )?;

        // Macro split overrides
        override_from_env(
            env_vars::MACRO_PROTEIN_PCT,
            &mut nutrition.macro_split.protein_pct,
        )?;
        override_from_env(env_vars::MACRO_CARBS_PCT, &mut nutrition.macro_split.carbs_pct)?;
        override_from_env(env_vars::MACRO_FAT_PCT, &mut nutrition.macro_split.fat_pct)?;

        // Meal slot overrides
        override_from_env(env_vars::SLOT_BREAKFAST, &mut nutrition.meal_slots.breakfast)?;
        override_from_env(env_vars::SLOT_LUNCH, &mut nutrition.meal_slots.lunch)?;
        override_from_env(env_vars::SLOT_DINNER, &mut nutrition.meal_slots.dinner)?;
        override_from_env(env_vars::SLOT_SNACKS, &mut nutrition.meal_slots.snacks)?;

        Ok(self)
    }
}

/// Overwrite `target` when `key` is set; unset variables leave the default in place
fn override_from_env<T: FromStr>(key: &str, target: &mut T) -> Result<(), ConfigError> {
    match env::var(key) {
        Ok(val) => {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {key}: {val}")))?;
            Ok(())
        }
        Err(env::VarError::NotPresent) => Ok(()),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}
