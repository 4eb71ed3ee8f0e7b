// ABOUTME: Diet plan output schema handed to persistence collaborators unchanged
// ABOUTME: Patient info, calculations, meal slots, beverages, supplements, guidelines, alternatives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::localized::LocalizedText;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Patient summary echoed at the top of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientInfo {
    /// Patient display name
    pub name: String,
    /// Age in years
    pub age: f64,
    /// Body weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    /// Body mass index, two decimals
    pub bmi: f64,
    /// Localized goal label
    pub goal: LocalizedText,
    /// Localized activity level label
    pub activity_level: LocalizedText,
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    /// Protein grams
    pub protein: i64,
    /// Carbohydrate grams
    pub carbs: i64,
    /// Fat grams
    pub fat: i64,
}

/// Energy calculations behind the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculations {
    /// Basal metabolic rate (kcal/day)
    pub bmr: i64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: i64,
    /// Goal-adjusted daily calorie target
    pub target_calories: i64,
    /// Macro gram targets
    pub macros: Macros,
}

/// One candidate meal within a slot
///
/// `calories` carries the slot budget, so every option in a slot reports the
/// same figure; the macro grams are authored per recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealOption {
    /// Meal name
    pub name: LocalizedText,
    /// Short preparation description
    pub description: LocalizedText,
    /// Slot calorie budget
    pub calories: i64,
    /// Protein grams
    pub protein: u32,
    /// Carbohydrate grams
    pub carbs: u32,
    /// Fat grams
    pub fat: u32,
}

/// The five daily meal periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MealSlot {
    /// Breakfast
    Breakfast,
    /// Mid-morning snack
    MorningSnack,
    /// Lunch
    Lunch,
    /// Evening snack
    EveningSnack,
    /// Dinner
    Dinner,
}

impl MealSlot {
    /// All slots in daily order
    pub const ALL: [Self; 5] = [
        Self::Breakfast,
        Self::MorningSnack,
        Self::Lunch,
        Self::EveningSnack,
        Self::Dinner,
    ];

    /// Wire key for this slot
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::MorningSnack => "morningSnack",
            Self::Lunch => "lunch",
            Self::EveningSnack => "eveningSnack",
            Self::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate options for each meal slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// Breakfast options
    pub breakfast: Vec<MealOption>,
    /// Morning snack options
    pub morning_snack: Vec<MealOption>,
    /// Lunch options
    pub lunch: Vec<MealOption>,
    /// Evening snack options
    pub evening_snack: Vec<MealOption>,
    /// Dinner options
    pub dinner: Vec<MealOption>,
}

impl MealPlan {
    /// Options for one slot
    #[must_use]
    pub fn slot(&self, slot: MealSlot) -> &[MealOption] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::MorningSnack => &self.morning_snack,
            MealSlot::Lunch => &self.lunch,
            MealSlot::EveningSnack => &self.evening_snack,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Mutable options for one slot
    pub fn slot_mut(&mut self, slot: MealSlot) -> &mut Vec<MealOption> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::MorningSnack => &mut self.morning_snack,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::EveningSnack => &mut self.evening_snack,
            MealSlot::Dinner => &mut self.dinner,
        }
    }

    /// Iterate slots in daily order
    pub fn slots(&self) -> impl Iterator<Item = (MealSlot, &[MealOption])> {
        MealSlot::ALL.into_iter().map(move |slot| (slot, self.slot(slot)))
    }
}

/// A permitted drink and how much of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedBeverage {
    /// Drink name
    pub name: LocalizedText,
    /// Quantity advice
    pub amount: LocalizedText,
}

/// Drinking guidance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeveragePolicy {
    /// Daily water guidance
    pub water: LocalizedText,
    /// Permitted drinks
    pub allowed: Vec<AllowedBeverage>,
    /// Drinks to avoid
    pub forbidden: Vec<LocalizedText>,
}

/// One supplement recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementEntry {
    /// Supplement name
    pub name: LocalizedText,
    /// Daily dose
    pub dosage: LocalizedText,
    /// When to take it
    pub timing: LocalizedText,
    /// Extra notes
    pub notes: LocalizedText,
}

/// Supplement advice with its mandatory disclaimer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementPlan {
    /// Recommended supplements
    pub recommended: Vec<SupplementEntry>,
    /// Consult-a-doctor disclaimer, never blank
    pub disclaimer: LocalizedText,
}

/// Identifies a guideline category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidelineKind {
    /// Healthy cooking methods
    CookingMethods,
    /// Meal timing
    MealTiming,
    /// Mindful eating habits
    MindfulEating,
    /// Reflux and acidity management
    AcidityTips,
}

/// A titled list of behavioral tips
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineCategory {
    /// Category identifier
    pub key: GuidelineKind,
    /// Category title
    pub title: LocalizedText,
    /// Tips in display order
    pub tips: Vec<LocalizedText>,
}

/// A food and its healthier swaps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionEntry {
    /// Food being replaced
    pub original: LocalizedText,
    /// Suggested replacements
    pub alternatives: Vec<LocalizedText>,
}

/// Food substitution table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternatives {
    /// Protein swaps
    pub protein: Vec<SubstitutionEntry>,
    /// Carbohydrate swaps
    pub carbs: Vec<SubstitutionEntry>,
    /// Fat swaps
    pub fats: Vec<SubstitutionEntry>,
}

/// Raw constraint lists echoed back to the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restrictions {
    /// Allergies as supplied
    pub allergies: Vec<String>,
    /// Disliked foods as supplied
    pub disliked_foods: Vec<String>,
    /// Health conditions as supplied
    pub health_conditions: Vec<String>,
    /// Dietary restrictions as supplied
    pub dietary_restrictions: Vec<String>,
}

/// Complete generated nutrition plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    /// Patient summary
    pub patient_info: PatientInfo,
    /// Energy and macro targets
    pub calculations: Calculations,
    /// Meal options per slot
    pub meal_plan: MealPlan,
    /// Drinking guidance
    pub beverages: BeveragePolicy,
    /// Supplement advice
    pub supplements: SupplementPlan,
    /// Behavioral guideline categories
    pub guidelines: Vec<GuidelineCategory>,
    /// Food substitution table
    pub alternatives: Alternatives,
    /// Raw constraint lists
    pub restrictions: Restrictions,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
}
