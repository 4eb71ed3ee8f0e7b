// ABOUTME: Patient profile models for diet plan generation requests
// ABOUTME: Raw request input, required-field validation, and the goal/activity/gender enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::fields;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dietary goal of the patient
///
/// Unrecognized keys are kept verbatim in [`Goal::Other`]; calculations treat
/// them like [`Goal::Maintain`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    /// Caloric deficit
    WeightLoss,
    /// Caloric surplus
    MuscleGain,
    /// Caloric balance
    Maintain,
    /// General health improvement at caloric balance
    Health,
    /// Any key outside the known vocabulary
    Other(String),
}

impl Goal {
    /// Parse a goal key (`weight_loss`, `muscle_gain`, `maintain`, `health`)
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "weight_loss" => Self::WeightLoss,
            "muscle_gain" => Self::MuscleGain,
            "maintain" => Self::Maintain,
            "health" => Self::Health,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Wire key for this goal
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Maintain => "maintain",
            Self::Health => "health",
            Self::Other(raw) => raw,
        }
    }

    /// Goals that move target calories away from TDEE
    #[must_use]
    pub const fn changes_body_composition(&self) -> bool {
        matches!(self, Self::WeightLoss | Self::MuscleGain)
    }
}

impl From<String> for Goal {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        match goal {
            Goal::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Habitual activity level used for the TDEE multiplier
///
/// Unrecognized keys are kept verbatim in [`ActivityLevel::Other`] and use the
/// fallback multiplier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    High,
    /// Any key outside the known vocabulary
    Other(String),
}

impl ActivityLevel {
    /// Parse an activity key (`sedentary`, `light`, `moderate`, `high`)
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "sedentary" => Self::Sedentary,
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "high" => Self::High,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Wire key for this activity level
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<ActivityLevel> for String {
    fn from(level: ActivityLevel) -> Self {
        match level {
            ActivityLevel::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sex branch of the BMR formula
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male coefficients (also the default branch)
    #[default]
    Male,
    /// Female coefficients
    Female,
}

impl Gender {
    /// Parse `male`/`female` (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for any other value
    pub fn parse(raw: &str) -> AppResult<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "gender must be male or female, got '{other}'"
            ))),
        }
    }
}

/// Plan generation request as received from the caller
///
/// Every field is optional so that absent and empty values can be reported
/// together as `MISSING_FIELDS` instead of failing on the first one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfileInput {
    /// Patient display name
    pub name: Option<String>,
    /// Age in years
    pub age: Option<f64>,
    /// Body weight in kilograms
    pub weight: Option<f64>,
    /// Height in centimeters
    pub height: Option<f64>,
    /// Goal key
    pub goal: Option<String>,
    /// Activity level key
    pub activity_level: Option<String>,
    /// Free-text allergies (either language)
    #[serde(default)]
    pub allergies: Option<Vec<String>>,
    /// Free-text disliked foods, echoed only
    #[serde(default)]
    pub disliked_foods: Option<Vec<String>>,
    /// Free-text health conditions (either language)
    #[serde(default)]
    pub health_conditions: Option<Vec<String>>,
    /// Free-text dietary restrictions (either language)
    #[serde(default)]
    pub dietary_restrictions: Option<Vec<String>>,
}

fn present_text(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn present_measure(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

impl PatientProfileInput {
    /// Names of required fields that are absent or falsy, in reporting order
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let checks = [
            (fields::NAME, present_text(self.name.as_ref()).is_some()),
            (fields::AGE, present_measure(self.age).is_some()),
            (fields::WEIGHT, present_measure(self.weight).is_some()),
            (fields::HEIGHT, present_measure(self.height).is_some()),
            (fields::GOAL, present_text(self.goal.as_ref()).is_some()),
            (
                fields::ACTIVITY_LEVEL,
                present_text(self.activity_level.as_ref()).is_some(),
            ),
        ];

        checks
            .into_iter()
            .filter_map(|(field, present)| (!present).then_some(field))
            .collect()
    }

    /// Validate required fields and produce a profile ready for generation
    ///
    /// # Errors
    ///
    /// Returns `MISSING_FIELDS` when any of `name`, `age`, `weight`, `height`,
    /// `goal` or `activityLevel` is absent, blank, zero or not a finite number.
    pub fn validate(&self) -> AppResult<PatientProfile> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::missing_fields(&missing));
        }

        let (Some(name), Some(age), Some(weight), Some(height), Some(goal), Some(activity)) = (
            present_text(self.name.as_ref()),
            present_measure(self.age),
            present_measure(self.weight),
            present_measure(self.height),
            present_text(self.goal.as_ref()),
            present_text(self.activity_level.as_ref()),
        ) else {
            return Err(AppError::missing_fields(&fields::REQUIRED));
        };

        Ok(PatientProfile {
            name: name.to_owned(),
            age,
            weight,
            height,
            goal: Goal::parse(goal),
            activity_level: ActivityLevel::parse(activity),
            allergies: self.allergies.clone().unwrap_or_default(),
            disliked_foods: self.disliked_foods.clone().unwrap_or_default(),
            health_conditions: self.health_conditions.clone().unwrap_or_default(),
            dietary_restrictions: self.dietary_restrictions.clone().unwrap_or_default(),
        })
    }
}

/// Validated patient profile consumed by the plan assembler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    /// Patient display name
    pub name: String,
    /// Age in years
    pub age: f64,
    /// Body weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    /// Dietary goal
    pub goal: Goal,
    /// Habitual activity level
    pub activity_level: ActivityLevel,
    /// Free-text allergies
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Free-text disliked foods
    #[serde(default)]
    pub disliked_foods: Vec<String>,
    /// Free-text health conditions
    #[serde(default)]
    pub health_conditions: Vec<String>,
    /// Free-text dietary restrictions
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
}

impl PatientProfile {
    /// Profile with empty constraint lists
    pub fn new(
        name: impl Into<String>,
        age: f64,
        weight: f64,
        height: f64,
        goal: Goal,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            weight,
            height,
            goal,
            activity_level,
            allergies: Vec::new(),
            disliked_foods: Vec::new(),
            health_conditions: Vec::new(),
            dietary_restrictions: Vec::new(),
        }
    }

    /// Replace the allergy list
    #[must_use]
    pub fn with_allergies<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergies = items.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the disliked foods list
    #[must_use]
    pub fn with_disliked_foods<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disliked_foods = items.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the health condition list
    #[must_use]
    pub fn with_health_conditions<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.health_conditions = items.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the dietary restriction list
    #[must_use]
    pub fn with_dietary_restrictions<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dietary_restrictions = items.into_iter().map(Into::into).collect();
        self
    }
}
