// ABOUTME: Nutrition configuration for energy targets and meal slot budgets
// ABOUTME: Configures BMR coefficients, activity factors, goal adjustments, and macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Formula Configuration
//!
//! Coefficients and proportions used by the biometric calculator and the meal
//! catalog generator.
//!
//! # References
//!
//! - BMR: Roza, A.M. & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//! - Activity factors: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology

use super::error::ConfigError;
use dietplan_core::models::MealSlot;
use serde::{Deserialize, Serialize};

/// Nutrition formula configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Goal multipliers applied to TDEE
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Share of target calories per macronutrient
    pub macro_split: MacroDistribution,
    /// Share of target calories per meal slot
    pub meal_slots: MealSlotProportionsConfig,
}

impl NutritionConfig {
    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.activity_factors.validate()?;
        self.goal_adjustments.validate()?;
        self.macro_split.validate()?;
        self.meal_slots.validate()
    }
}

/// Coefficients of one Harris-Benedict branch
///
/// BMR = constant + `weight_coef` x kg + `height_coef` x cm - `age_coef` x years
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarrisBenedictCoefficients {
    /// Constant term
    pub constant: f64,
    /// Multiplier for weight in kilograms
    pub weight_coef: f64,
    /// Multiplier for height in centimeters
    pub height_coef: f64,
    /// Multiplier for age in years (subtracted)
    pub age_coef: f64,
}

/// Revised Harris-Benedict coefficients per sex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Male branch, also used when sex is unknown
    pub male: HarrisBenedictCoefficients,
    /// Female branch
    pub female: HarrisBenedictCoefficients,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            male: HarrisBenedictCoefficients {
                constant: 88.362,
                weight_coef: 13.397,
                height_coef: 4.799,
                age_coef: 5.677,
            },
            female: HarrisBenedictCoefficients {
                constant: 447.593,
                weight_coef: 9.247,
                height_coef: 3.098,
                age_coef: 4.330,
            },
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// High (6-7 days/week): 1.725
    pub high: f64,
    /// Applied to unrecognized activity levels: 1.2
    pub fallback: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            high: 1.725,
            fallback: 1.2,
        }
    }
}

impl ActivityFactorsConfig {
    /// Validate factors are at least 1.0 and non-decreasing with activity
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` or `ConfigError::InvalidRange`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = [
            ("sedentary", self.sedentary),
            ("light", self.light),
            ("moderate", self.moderate),
            ("high", self.high),
        ];

        for (name, value) in ordered.iter().copied().chain([("fallback", self.fallback)]) {
            if !value.is_finite() || value < 1.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} activity factor must be >= 1.0, got {value}"
                )));
            }
        }

        if ordered.windows(2).any(|pair| pair[0].1 > pair[1].1) {
            return Err(ConfigError::InvalidRange(
                "activity factors must not decrease from sedentary to high".to_owned(),
            ));
        }

        Ok(())
    }
}

/// Multipliers applied to TDEE for goals that change body composition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Weight loss deficit multiplier: 0.8
    pub weight_loss: f64,
    /// Muscle gain surplus multiplier: 1.15
    pub muscle_gain: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            weight_loss: 0.8,
            muscle_gain: 1.15,
        }
    }
}

impl GoalAdjustmentConfig {
    /// Validate `0 < weight_loss < 1 < muscle_gain`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` when the ordering is broken
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.weight_loss > 0.0 && self.weight_loss < 1.0) {
            return Err(ConfigError::InvalidRange(format!(
                "weight_loss factor must be between 0 and 1, got {}",
                self.weight_loss
            )));
        }
        if !(self.muscle_gain > 1.0 && self.muscle_gain.is_finite()) {
            return Err(ConfigError::InvalidRange(format!(
                "muscle_gain factor must be greater than 1, got {}",
                self.muscle_gain
            )));
        }
        Ok(())
    }
}

/// Macro distribution (protein%, carbs%, fat%)
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    /// Get as a tuple (protein, carbs, fat)
    #[must_use]
    pub const fn as_tuple(&self) -> (u8, u8, u8) {
        (self.protein_pct, self.carbs_pct, self.fat_pct)
    }

    /// Validate that the percentages sum to 100
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` otherwise
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = u16::from(self.protein_pct) + u16::from(self.carbs_pct) + u16::from(self.fat_pct);
        if sum != 100 {
            return Err(ConfigError::InvalidWeights(format!(
                "macro percentages must sum to 100, got {sum}"
            )));
        }
        Ok(())
    }
}

impl Default for MacroDistribution {
    fn default() -> Self {
        // Balanced distribution: 25% protein, 45% carbs, 30% fat
        Self::new(25, 45, 30)
    }
}

/// Share of daily target calories given to each meal slot
///
/// The two snacks split the `snacks` share evenly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealSlotProportionsConfig {
    /// Breakfast share: 0.25
    pub breakfast: f64,
    /// Lunch share: 0.35
    pub lunch: f64,
    /// Dinner share: 0.25
    pub dinner: f64,
    /// Combined snack share: 0.15
    pub snacks: f64,
}

impl Default for MealSlotProportionsConfig {
    fn default() -> Self {
        Self {
            breakfast: 0.25,
            lunch: 0.35,
            dinner: 0.25,
            snacks: 0.15,
        }
    }
}

impl MealSlotProportionsConfig {
    /// Validate that each proportion is within 0.0-1.0 and that they sum to 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` or `ConfigError::InvalidWeights`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let configs = [
            ("breakfast", self.breakfast),
            ("lunch", self.lunch),
            ("dinner", self.dinner),
            ("snacks", self.snacks),
        ];

        for (name, value) in configs {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} proportion must be between 0.0 and 1.0, got {value}"
                )));
            }
        }

        let total: f64 = configs.iter().map(|(_, value)| value).sum();
        if (total - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(format!(
                "meal slot proportions must sum to 1.0, got {total:.3}"
            )));
        }

        Ok(())
    }

    /// Calorie budget for a slot, rounded to whole kcal
    ///
    /// Snack slots take half of the rounded snack pool, rounded again.
    #[must_use]
    pub fn calories_for_slot(&self, slot: MealSlot, target_calories: i64) -> i64 {
        let target = target_calories as f64;
        let budget = match slot {
            MealSlot::Breakfast => target * self.breakfast,
            MealSlot::Lunch => target * self.lunch,
            MealSlot::Dinner => target * self.dinner,
            MealSlot::MorningSnack | MealSlot::EveningSnack => {
                (target * self.snacks).round() / 2.0
            }
        };
        budget.round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        NutritionConfig::default().validate().unwrap();
    }

    #[test]
    fn test_macro_distribution_must_sum_to_100() {
        let result = MacroDistribution::new(30, 45, 30).validate();
        assert!(matches!(result, Err(ConfigError::InvalidWeights(_))));
    }

    #[test]
    fn test_goal_adjustments_reject_inverted_factors() {
        let config = GoalAdjustmentConfig {
            weight_loss: 1.1,
            muscle_gain: 1.15,
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_activity_factors_must_not_decrease() {
        let config = ActivityFactorsConfig {
            moderate: 1.3,
            ..ActivityFactorsConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_slot_budgets_for_2074_kcal() {
        let slots = MealSlotProportionsConfig::default();

        assert_eq!(slots.calories_for_slot(MealSlot::Breakfast, 2074), 519);
        assert_eq!(slots.calories_for_slot(MealSlot::Lunch, 2074), 726);
        assert_eq!(slots.calories_for_slot(MealSlot::Dinner, 2074), 519);
        // round(2074 * 0.15) = 311, 311 / 2 = 155.5 -> 156
        assert_eq!(slots.calories_for_slot(MealSlot::MorningSnack, 2074), 156);
        assert_eq!(slots.calories_for_slot(MealSlot::EveningSnack, 2074), 156);
    }
}
