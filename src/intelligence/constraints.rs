// ABOUTME: Classifies free-text allergies, restrictions and conditions into dietary flags
// ABOUTME: Keyword table matching in Arabic and English behind a pluggable classifier trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dietary Constraint Classification
//!
//! Patients describe allergies, restrictions and health conditions in free text,
//! in Arabic or English. [`KeywordClassifier`] turns those lists into a compact
//! [`DietaryFlags`] set by case-insensitive substring matching against a
//! keyword table.
//!
//! Substring matching over-matches: an entry such as "no meat allergy" still
//! contains "meat" and sets [`DietaryFlags::VEGETARIAN`]. Over-restricting a
//! plan is the accepted failure mode.
//!
//! Health condition flags read only `health_conditions`. Food avoidance flags
//! read `allergies` and `dietary_restrictions` together.

use bitflags::bitflags;
use dietplan_core::models::PatientProfile;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

bitflags! {
    /// Dietary constraints derived from a patient profile
    ///
    /// Meal options, beverages and guidelines are gated on these flags.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DietaryFlags: u8 {
        /// Acid reflux or heartburn
        const ACIDITY = 0b0000_0001;
        /// Diabetes
        const DIABETES = 0b0000_0010;
        /// Hypertension
        const HIGH_PRESSURE = 0b0000_0100;
        /// High cholesterol
        const CHOLESTEROL = 0b0000_1000;
        /// Avoids dairy
        const DAIRY_FREE = 0b0001_0000;
        /// Avoids fish and shellfish
        const SEAFOOD_FREE = 0b0010_0000;
        /// Avoids meat
        const VEGETARIAN = 0b0100_0000;
    }
}

impl DietaryFlags {
    /// Check for acid reflux
    #[must_use]
    pub const fn has_acidity(self) -> bool {
        self.contains(Self::ACIDITY)
    }

    /// Check for diabetes
    #[must_use]
    pub const fn has_diabetes(self) -> bool {
        self.contains(Self::DIABETES)
    }

    /// Check for hypertension
    #[must_use]
    pub const fn has_high_pressure(self) -> bool {
        self.contains(Self::HIGH_PRESSURE)
    }

    /// Check for high cholesterol
    #[must_use]
    pub const fn has_cholesterol(self) -> bool {
        self.contains(Self::CHOLESTEROL)
    }

    /// Check for dairy avoidance
    #[must_use]
    pub const fn is_dairy_free(self) -> bool {
        self.contains(Self::DAIRY_FREE)
    }

    /// Check for seafood avoidance
    #[must_use]
    pub const fn is_seafood_free(self) -> bool {
        self.contains(Self::SEAFOOD_FREE)
    }

    /// Check for meat avoidance
    #[must_use]
    pub const fn is_vegetarian(self) -> bool {
        self.contains(Self::VEGETARIAN)
    }

    /// Lowercase names of the set flags, for logging
    #[must_use]
    pub fn describe(&self) -> String {
        if self.is_empty() {
            return "none".to_owned();
        }
        self.iter_names()
            .map(|(name, _)| name.to_lowercase())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Which profile lists a keyword rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintSource {
    /// `allergies` and `dietary_restrictions`
    FoodAvoidance,
    /// `health_conditions`
    HealthConditions,
}

/// Free-text lists to classify
#[derive(Debug, Clone, Default)]
pub struct ConstraintInput<'a> {
    /// Allergies followed by dietary restrictions
    pub food_avoidance: Vec<&'a str>,
    /// Health conditions
    pub health_conditions: Vec<&'a str>,
}

impl<'a> ConstraintInput<'a> {
    /// Borrow the constraint lists of a profile
    #[must_use]
    pub fn from_profile(profile: &'a PatientProfile) -> Self {
        Self {
            food_avoidance: profile
                .allergies
                .iter()
                .chain(&profile.dietary_restrictions)
                .map(String::as_str)
                .collect(),
            health_conditions: profile.health_conditions.iter().map(String::as_str).collect(),
        }
    }

    fn entries(&self, source: ConstraintSource) -> &[&'a str] {
        match source {
            ConstraintSource::FoodAvoidance => &self.food_avoidance,
            ConstraintSource::HealthConditions => &self.health_conditions,
        }
    }
}

/// Maps free-text constraints to dietary flags
///
/// Implementations must be pure: the same input always yields the same flags.
pub trait ConstraintClassifier: Send + Sync {
    /// Derive flags from the given lists
    fn classify(&self, input: &ConstraintInput<'_>) -> DietaryFlags;

    /// Derive flags from a profile
    fn classify_profile(&self, profile: &PatientProfile) -> DietaryFlags {
        self.classify(&ConstraintInput::from_profile(profile))
    }
}

/// One row of the keyword table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    /// Flag set when any keyword matches
    pub flag: DietaryFlags,
    /// Lists inspected by this rule
    pub source: ConstraintSource,
    /// Lowercased keywords
    pub keywords: Vec<String>,
}

impl KeywordRule {
    /// Build a rule; keywords are lowercased
    pub fn new<I, S>(flag: DietaryFlags, source: ConstraintSource, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            flag,
            source,
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().trim().to_lowercase())
                .filter(|keyword| !keyword.is_empty())
                .collect(),
        }
    }

    /// True when any entry contains any keyword
    #[must_use]
    pub fn matches(&self, input: &ConstraintInput<'_>) -> bool {
        input.entries(self.source).iter().any(|entry| {
            let entry = entry.to_lowercase();
            self.keywords
                .iter()
                .any(|keyword| entry.contains(keyword.as_str()))
        })
    }
}

type KeywordRow = (DietaryFlags, ConstraintSource, &'static [&'static str]);

const DEFAULT_KEYWORDS: &[KeywordRow] = &[
    (
        DietaryFlags::ACIDITY,
        ConstraintSource::HealthConditions,
        &["acidity", "reflux", "gerd", "heartburn", "حموضة", "حموضه", "ارتجاع"],
    ),
    (
        DietaryFlags::DIABETES,
        ConstraintSource::HealthConditions,
        &["diabetes", "diabetic", "سكري", "السكر"],
    ),
    (
        DietaryFlags::HIGH_PRESSURE,
        ConstraintSource::HealthConditions,
        &["pressure", "hypertension", "ضغط"],
    ),
    (
        DietaryFlags::CHOLESTEROL,
        ConstraintSource::HealthConditions,
        &["cholesterol", "كوليسترول", "كولسترول", "كوليستيرول"],
    ),
    (
        DietaryFlags::DAIRY_FREE,
        ConstraintSource::FoodAvoidance,
        &["dairy", "milk", "lactose", "ألبان", "البان", "حليب", "لبن", "لاكتوز"],
    ),
    (
        DietaryFlags::SEAFOOD_FREE,
        ConstraintSource::FoodAvoidance,
        &[
            "seafood",
            "fish",
            "shellfish",
            "shrimp",
            "مأكولات بحرية",
            "بحري",
            "سمك",
            "أسماك",
            "اسماك",
            "جمبري",
        ],
    ),
    (
        DietaryFlags::VEGETARIAN,
        ConstraintSource::FoodAvoidance,
        &["vegetarian", "vegan", "meat", "نباتي", "لحم", "لحوم"],
    ),
];

/// Keyword-table classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordClassifier {
    rules: Vec<KeywordRule>,
}

static SHARED_CLASSIFIER: OnceLock<KeywordClassifier> = OnceLock::new();

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self {
            rules: DEFAULT_KEYWORDS
                .iter()
                .map(|&(flag, source, keywords)| KeywordRule::new(flag, source, keywords))
                .collect(),
        }
    }
}

impl KeywordClassifier {
    /// Classifier with no rules; classifies everything as unconstrained
    #[must_use]
    pub const fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Process-wide classifier with the default keyword table
    pub fn shared() -> &'static Self {
        SHARED_CLASSIFIER.get_or_init(Self::default)
    }

    /// Append a rule
    #[must_use]
    pub fn with_rule(mut self, rule: KeywordRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rules in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }
}

impl ConstraintClassifier for KeywordClassifier {
    fn classify(&self, input: &ConstraintInput<'_>) -> DietaryFlags {
        self.rules
            .iter()
            .filter(|rule| rule.matches(input))
            .fold(DietaryFlags::empty(), |flags, rule| flags | rule.flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(avoid: &[&'a str], conditions: &[&'a str]) -> ConstraintInput<'a> {
        ConstraintInput {
            food_avoidance: avoid.to_vec(),
            health_conditions: conditions.to_vec(),
        }
    }

    #[test]
    fn test_every_flag_has_a_default_rule() {
        let covered = KeywordClassifier::default()
            .rules()
            .iter()
            .fold(DietaryFlags::empty(), |flags, rule| flags | rule.flag);
        assert_eq!(covered, DietaryFlags::all());
    }

    #[test]
    fn test_condition_keywords_ignore_food_lists() {
        let classifier = KeywordClassifier::default();
        let flags = classifier.classify(&input(&["diabetes"], &[]));
        assert!(!flags.has_diabetes());
    }

    #[test]
    fn test_with_rule_extends_table() {
        let classifier = KeywordClassifier::empty().with_rule(KeywordRule::new(
            DietaryFlags::DAIRY_FREE,
            ConstraintSource::FoodAvoidance,
            ["Cheese"],
        ));
        let flags = classifier.classify(&input(&["no CHEESE please"], &[]));
        assert_eq!(flags, DietaryFlags::DAIRY_FREE);
    }

    #[test]
    fn test_describe_lists_flag_names() {
        let flags = DietaryFlags::DIABETES | DietaryFlags::DAIRY_FREE;
        assert_eq!(flags.describe(), "diabetes,dairy_free");
        assert_eq!(DietaryFlags::empty().describe(), "none");
    }
}
