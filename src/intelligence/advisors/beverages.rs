// ABOUTME: Beverage policy: water target, allowed drinks with amounts, forbidden drinks
// ABOUTME: Coffee allowance tightens with hypertension and juices are forbidden with diabetes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::intelligence::constraints::DietaryFlags;
use dietplan_core::models::{AllowedBeverage, BeveragePolicy, LocalizedStr, LocalizedText};

const WATER: LocalizedStr = LocalizedStr::new(
    "اشرب 8-10 أكواب من الماء يومياً، وزد الكمية في الأيام الحارة وعند ممارسة الرياضة",
    "Drink 8-10 glasses of water daily, more on hot days and when exercising",
);

const COFFEE: LocalizedStr = LocalizedStr::new("قهوة", "Coffee");
const COFFEE_LIMITED: LocalizedStr =
    LocalizedStr::new("كوب واحد يومياً كحد أقصى", "1 cup per day at most");
const COFFEE_STANDARD: LocalizedStr =
    LocalizedStr::new("كوبان يومياً كحد أقصى", "max 2 cups per day");

const FIXED_ALLOWED: [(LocalizedStr, LocalizedStr); 3] = [
    (
        LocalizedStr::new("شاي أخضر", "Green tea"),
        LocalizedStr::new("2-3 أكواب يومياً بدون سكر", "2-3 cups daily without sugar"),
    ),
    (
        LocalizedStr::new("شاي الأعشاب (بابونج، نعناع، يانسون)", "Herbal tea (chamomile, mint, anise)"),
        LocalizedStr::new("حسب الرغبة بدون سكر", "As desired, without sugar"),
    ),
    (
        LocalizedStr::new("ماء بالليمون والنعناع", "Water with lemon and mint"),
        LocalizedStr::new("حسب الرغبة", "As desired"),
    ),
];

const ALWAYS_FORBIDDEN: [LocalizedStr; 3] = [
    LocalizedStr::new("المشروبات الغازية", "Soft drinks"),
    LocalizedStr::new("العصائر المحلاة", "Sweetened juices"),
    LocalizedStr::new("مشروبات الطاقة", "Energy drinks"),
];

const JUICES_IN_QUANTITY: LocalizedStr =
    LocalizedStr::new("العصائر الطبيعية بكميات كبيرة", "Natural juices in large quantities");

/// Beverage section for a flag set
#[must_use]
pub fn recommend_beverages(flags: DietaryFlags) -> BeveragePolicy {
    let coffee_amount = if flags.has_high_pressure() {
        COFFEE_LIMITED
    } else {
        COFFEE_STANDARD
    };

    let mut allowed: Vec<AllowedBeverage> = FIXED_ALLOWED
        .iter()
        .map(|&(name, amount)| AllowedBeverage {
            name: name.into(),
            amount: amount.into(),
        })
        .collect();
    allowed.insert(
        2,
        AllowedBeverage {
            name: COFFEE.into(),
            amount: coffee_amount.into(),
        },
    );

    let mut forbidden: Vec<LocalizedText> =
        ALWAYS_FORBIDDEN.iter().copied().map(Into::into).collect();
    if flags.has_diabetes() {
        forbidden.push(JUICES_IN_QUANTITY.into());
    }

    BeveragePolicy {
        water: WATER.into(),
        allowed,
        forbidden,
    }
}
