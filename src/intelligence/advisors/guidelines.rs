// ABOUTME: Behavioral guideline categories: cooking methods, meal timing, mindful eating
// ABOUTME: Acidity tips are appended only when the acidity flag is set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::intelligence::constraints::DietaryFlags;
use dietplan_core::models::{GuidelineCategory, GuidelineKind, LocalizedStr};

struct GuidelineTemplate {
    key: GuidelineKind,
    title: LocalizedStr,
    tips: &'static [LocalizedStr],
}

impl GuidelineTemplate {
    fn to_category(&self) -> GuidelineCategory {
        GuidelineCategory {
            key: self.key,
            title: self.title.into(),
            tips: self.tips.iter().copied().map(Into::into).collect(),
        }
    }
}

const fn tip(ar: &'static str, en: &'static str) -> LocalizedStr {
    LocalizedStr::new(ar, en)
}

const COOKING_METHODS: GuidelineTemplate = GuidelineTemplate {
    key: GuidelineKind::CookingMethods,
    title: LocalizedStr::new("طرق الطهي الصحية", "Healthy Cooking Methods"),
    tips: &[
        tip(
            "اعتمد الشوي والسلق والطهي على البخار بدلاً من القلي",
            "Prefer grilling, boiling and steaming over frying",
        ),
        tip("استخدم زيت الزيتون باعتدال", "Use olive oil in moderation"),
        tip(
            "قلل الملح واستبدله بالأعشاب والتوابل",
            "Reduce salt and season with herbs and spices instead",
        ),
        tip(
            "أزل الدهون الظاهرة وجلد الدجاج قبل الطهي",
            "Trim visible fat and remove chicken skin before cooking",
        ),
    ],
};

const MEAL_TIMING: GuidelineTemplate = GuidelineTemplate {
    key: GuidelineKind::MealTiming,
    title: LocalizedStr::new("مواعيد الوجبات", "Meal Timing"),
    tips: &[
        tip(
            "تناول الإفطار خلال ساعة من الاستيقاظ",
            "Eat breakfast within an hour of waking up",
        ),
        tip(
            "اترك 3-4 ساعات بين الوجبات الرئيسية",
            "Leave 3-4 hours between main meals",
        ),
        tip(
            "تناول العشاء قبل النوم بساعتين إلى ثلاث ساعات على الأقل",
            "Have dinner at least 2-3 hours before bedtime",
        ),
        tip("لا تتخطَّ الوجبات", "Do not skip meals"),
    ],
};

const MINDFUL_EATING: GuidelineTemplate = GuidelineTemplate {
    key: GuidelineKind::MindfulEating,
    title: LocalizedStr::new("الأكل الواعي", "Mindful Eating"),
    tips: &[
        tip("تناول الطعام ببطء وامضغه جيداً", "Eat slowly and chew thoroughly"),
        tip(
            "استخدم أطباقاً أصغر للتحكم في الكميات",
            "Use smaller plates to control portions",
        ),
        tip("تجنب الأكل أمام الشاشات", "Avoid eating in front of screens"),
        tip(
            "توقف عن الأكل عند الشعور بالشبع بنسبة 80%",
            "Stop eating when you feel about 80% full",
        ),
    ],
};

const ACIDITY_TIPS: GuidelineTemplate = GuidelineTemplate {
    key: GuidelineKind::AcidityTips,
    title: LocalizedStr::new("نصائح للحموضة", "Acidity Tips"),
    tips: &[
        tip(
            "تجنب الأطعمة الحارة والدهنية والمقلية",
            "Avoid spicy and fried foods",
        ),
        tip(
            "قلل من الحمضيات والطماطم والشوكولاتة",
            "Limit citrus, tomatoes and chocolate",
        ),
        tip("لا تستلقِ مباشرة بعد الأكل", "Do not lie down right after eating"),
        tip(
            "ارفع رأس السرير قليلاً عند النوم",
            "Raise the head of the bed slightly when sleeping",
        ),
        tip("تناول وجبات صغيرة ومتكررة", "Eat small, frequent meals"),
    ],
};

/// Guideline categories for a flag set, in output order
#[must_use]
pub fn build_guidelines(flags: DietaryFlags) -> Vec<GuidelineCategory> {
    let mut categories = vec![
        COOKING_METHODS.to_category(),
        MEAL_TIMING.to_category(),
        MINDFUL_EATING.to_category(),
    ];
    if flags.has_acidity() {
        categories.push(ACIDITY_TIPS.to_category());
    }
    categories
}
