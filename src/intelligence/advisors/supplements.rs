// ABOUTME: Supplement recommendations: vitamin D and omega-3 always, B12 for composition goals
// ABOUTME: Every recommendation set carries the same consult-your-doctor disclaimer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dietplan_core::models::{Goal, LocalizedStr, SupplementEntry, SupplementPlan};

#[derive(Clone, Copy)]
struct SupplementTemplate {
    name: LocalizedStr,
    dosage: LocalizedStr,
    timing: LocalizedStr,
    notes: LocalizedStr,
}

impl SupplementTemplate {
    fn to_entry(self) -> SupplementEntry {
        SupplementEntry {
            name: self.name.into(),
            dosage: self.dosage.into(),
            timing: self.timing.into(),
            notes: self.notes.into(),
        }
    }
}

const VITAMIN_D: SupplementTemplate = SupplementTemplate {
    name: LocalizedStr::new("فيتامين د", "Vitamin D"),
    dosage: LocalizedStr::new("1000-2000 وحدة دولية يومياً", "1000-2000 IU daily"),
    timing: LocalizedStr::new("مع وجبة تحتوي على دهون", "With a meal containing fat"),
    notes: LocalizedStr::new(
        "يفضل قياس مستوى فيتامين د في الدم أولاً",
        "Check your blood vitamin D level first",
    ),
};

const OMEGA_3: SupplementTemplate = SupplementTemplate {
    name: LocalizedStr::new("أوميغا 3", "Omega-3"),
    dosage: LocalizedStr::new("1000 ملغ يومياً", "1000 mg daily"),
    timing: LocalizedStr::new("مع الوجبات", "With meals"),
    notes: LocalizedStr::new(
        "يدعم صحة القلب ويقلل الالتهابات",
        "Supports heart health and reduces inflammation",
    ),
};

const VITAMIN_B12: SupplementTemplate = SupplementTemplate {
    name: LocalizedStr::new("فيتامين ب12", "Vitamin B12"),
    dosage: LocalizedStr::new("500-1000 ميكروغرام يومياً", "500-1000 mcg daily"),
    timing: LocalizedStr::new("في الصباح", "In the morning"),
    notes: LocalizedStr::new(
        "يدعم الطاقة والتمثيل الغذائي أثناء تغيير الوزن",
        "Supports energy and metabolism while body weight is changing",
    ),
};

const DISCLAIMER: LocalizedStr = LocalizedStr::new(
    "استشر طبيبك قبل البدء بأي مكمل غذائي، خاصة إذا كنت تتناول أدوية",
    "Consult your doctor before starting any supplement, especially if you take medication",
);

/// Supplement section for a goal
///
/// B12 is added only for weight loss and muscle gain.
#[must_use]
pub fn recommend_supplements(goal: &Goal) -> SupplementPlan {
    let mut recommended = vec![VITAMIN_D.to_entry(), OMEGA_3.to_entry()];
    if goal.changes_body_composition() {
        recommended.push(VITAMIN_B12.to_entry());
    }

    SupplementPlan {
        recommended,
        disclaimer: DISCLAIMER.into(),
    }
}
