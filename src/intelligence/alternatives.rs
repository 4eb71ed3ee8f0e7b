// ABOUTME: Fixed healthy substitution table grouped by protein, carbohydrate and fat sources
// ABOUTME: Identical for every plan; suggests leaner or less refined swaps for common foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dietplan_core::models::{Alternatives, LocalizedStr, SubstitutionEntry};

type Swap = (LocalizedStr, &'static [LocalizedStr]);

const fn food(ar: &'static str, en: &'static str) -> LocalizedStr {
    LocalizedStr::new(ar, en)
}

const PROTEIN_SWAPS: &[Swap] = &[
    (
        food("لحم أحمر دهني", "Fatty red meat"),
        &[
            food("صدر دجاج", "Chicken breast"),
            food("سمك", "Fish"),
            food("عدس", "Lentils"),
        ],
    ),
    (
        food("دجاج مقلي", "Fried chicken"),
        &[
            food("دجاج مشوي", "Grilled chicken"),
            food("صدر ديك رومي", "Turkey breast"),
        ],
    ),
    (
        food("لحوم مصنعة", "Processed meats"),
        &[
            food("بيض مسلوق", "Boiled eggs"),
            food("فول", "Fava beans"),
        ],
    ),
];

const CARB_SWAPS: &[Swap] = &[
    (
        food("أرز أبيض", "White rice"),
        &[
            food("أرز بني", "Brown rice"),
            food("كينوا", "Quinoa"),
            food("برغل", "Bulgur"),
        ],
    ),
    (
        food("خبز أبيض", "White bread"),
        &[
            food("خبز أسمر", "Whole wheat bread"),
            food("خبز الشوفان", "Oat bread"),
        ],
    ),
    (
        food("مكرونة عادية", "Regular pasta"),
        &[
            food("مكرونة قمح كامل", "Whole wheat pasta"),
            food("شرائح الكوسا", "Zucchini noodles"),
        ],
    ),
];

const FAT_SWAPS: &[Swap] = &[
    (
        food("زبدة", "Butter"),
        &[food("زيت زيتون", "Olive oil"), food("أفوكادو", "Avocado")],
    ),
    (
        food("مقرمشات مقلية", "Fried snacks"),
        &[
            food("مكسرات غير مملحة", "Unsalted nuts"),
            food("فشار منزلي", "Homemade popcorn"),
        ],
    ),
    (
        food("كريمة", "Cream"),
        &[
            food("زبادي يوناني", "Greek yogurt"),
            food("حليب قليل الدسم", "Low-fat milk"),
        ],
    ),
    (
        food("مايونيز", "Mayonnaise"),
        &[food("طحينة", "Tahini"), food("زبادي قليل الدسم", "Low-fat yogurt")],
    ),
];

fn entries(swaps: &[Swap]) -> Vec<SubstitutionEntry> {
    swaps
        .iter()
        .map(|&(original, alternatives)| SubstitutionEntry {
            original: original.into(),
            alternatives: alternatives.iter().copied().map(Into::into).collect(),
        })
        .collect()
}

/// The substitution table included in every plan
#[must_use]
pub fn substitution_table() -> Alternatives {
    Alternatives {
        protein: entries(PROTEIN_SWAPS),
        carbs: entries(CARB_SWAPS),
        fats: entries(FAT_SWAPS),
    }
}
