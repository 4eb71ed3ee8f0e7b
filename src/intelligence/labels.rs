// ABOUTME: Bilingual display labels for goal and activity level keys
// ABOUTME: Unrecognized keys are echoed verbatim in both languages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dietplan_core::models::{ActivityLevel, Goal, LocalizedStr, LocalizedText};

/// Display label for a goal
#[must_use]
pub fn goal_label(goal: &Goal) -> LocalizedText {
    let known = match goal {
        Goal::WeightLoss => LocalizedStr::new("إنقاص الوزن", "Weight Loss"),
        Goal::MuscleGain => LocalizedStr::new("بناء العضلات", "Muscle Gain"),
        Goal::Maintain => LocalizedStr::new("الحفاظ على الوزن", "Weight Maintenance"),
        Goal::Health => LocalizedStr::new("تحسين الصحة", "General Health"),
        Goal::Other(raw) => return LocalizedText::untranslated(raw.as_str()),
    };
    known.into()
}

/// Display label for an activity level
#[must_use]
pub fn activity_label(level: &ActivityLevel) -> LocalizedText {
    let known = match level {
        ActivityLevel::Sedentary => LocalizedStr::new("قليل الحركة", "Sedentary"),
        ActivityLevel::Light => LocalizedStr::new("نشاط خفيف", "Lightly Active"),
        ActivityLevel::Moderate => LocalizedStr::new("نشاط متوسط", "Moderately Active"),
        ActivityLevel::High => LocalizedStr::new("نشاط عالي", "Highly Active"),
        ActivityLevel::Other(raw) => return LocalizedText::untranslated(raw.as_str()),
    };
    known.into()
}
