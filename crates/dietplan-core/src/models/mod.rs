// ABOUTME: Data models shared between the plan engine and its collaborators
// ABOUTME: Re-exports the bilingual text types, patient profile, and diet plan schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Bilingual (Arabic/English) text pairs
pub mod localized;
/// Generated diet plan schema
pub mod plan;
/// Patient profile input and validation
pub mod profile;

pub use localized::{LocalizedStr, LocalizedText};
pub use plan::{
    AllowedBeverage, Alternatives, BeveragePolicy, Calculations, DietPlan, GuidelineCategory,
    GuidelineKind, Macros, MealOption, MealPlan, MealSlot, PatientInfo, Restrictions,
    SubstitutionEntry, SupplementEntry, SupplementPlan,
};
pub use profile::{ActivityLevel, Gender, Goal, PatientProfile, PatientProfileInput};
