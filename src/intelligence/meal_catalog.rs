// ABOUTME: Static bilingual meal catalog and flag-gated meal option selection per slot
// ABOUTME: Every slot keeps at least one unconditional option so no flag combination empties it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Catalog
//!
//! Each slot owns a static table of [`MealTemplate`]s. A template lists the
//! dietary flags that exclude it; a template with no excluding flags is
//! unconditional. Unconditional templates come first in every table so the
//! output order is stable and every slot is non-empty for all flag sets.
//!
//! Calories are not per option: every option in a slot carries the slot budget
//! from [`MealSlotProportionsConfig::calories_for_slot`]. Macro grams are fixed
//! per template.

use super::constraints::DietaryFlags;
use crate::config::MealSlotProportionsConfig;
use dietplan_core::models::{LocalizedStr, MealOption, MealPlan, MealSlot};

/// Catalog entry for one meal option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealTemplate {
    /// Display name
    pub name: LocalizedStr,
    /// Short description
    pub description: LocalizedStr,
    /// Protein grams
    pub protein: u32,
    /// Carbohydrate grams
    pub carbs: u32,
    /// Fat grams
    pub fat: u32,
    /// Any of these flags removes the option
    pub excluded_by: DietaryFlags,
}

impl MealTemplate {
    /// Option offered to every patient
    #[must_use]
    pub const fn always(
        name: LocalizedStr,
        description: LocalizedStr,
        protein: u32,
        carbs: u32,
        fat: u32,
    ) -> Self {
        Self {
            name,
            description,
            protein,
            carbs,
            fat,
            excluded_by: DietaryFlags::empty(),
        }
    }

    /// Restrict the option to patients without any of `flags`
    #[must_use]
    pub const fn unless(self, flags: DietaryFlags) -> Self {
        Self {
            excluded_by: self.excluded_by.union(flags),
            ..self
        }
    }

    /// True when the option has no excluding flags
    #[must_use]
    pub const fn is_unconditional(&self) -> bool {
        self.excluded_by.is_empty()
    }

    /// True when the option is allowed for `flags`
    #[must_use]
    pub const fn allowed_for(&self, flags: DietaryFlags) -> bool {
        !flags.intersects(self.excluded_by)
    }

    /// Materialize the option with a calorie budget
    #[must_use]
    pub fn to_option(&self, calories: i64) -> MealOption {
        MealOption {
            name: self.name.into(),
            description: self.description.into(),
            calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }
}

const fn text(ar: &'static str, en: &'static str) -> LocalizedStr {
    LocalizedStr::new(ar, en)
}

const ACIDITY: DietaryFlags = DietaryFlags::ACIDITY;
const DIABETES: DietaryFlags = DietaryFlags::DIABETES;
const HIGH_PRESSURE: DietaryFlags = DietaryFlags::HIGH_PRESSURE;
const CHOLESTEROL: DietaryFlags = DietaryFlags::CHOLESTEROL;
const DAIRY_FREE: DietaryFlags = DietaryFlags::DAIRY_FREE;
const SEAFOOD_FREE: DietaryFlags = DietaryFlags::SEAFOOD_FREE;
const VEGETARIAN: DietaryFlags = DietaryFlags::VEGETARIAN;

/// Breakfast options
pub static BREAKFAST: &[MealTemplate] = &[
    MealTemplate::always(
        text("شوفان بالفواكه", "Oatmeal with Fruit"),
        text(
            "شوفان مطبوخ بالماء مع موز وتوت ورشة قرفة",
            "Oats cooked in water with banana, berries and a pinch of cinnamon",
        ),
        10,
        55,
        7,
    ),
    MealTemplate::always(
        text("فول مدمس بزيت الزيتون", "Foul Medames with Olive Oil"),
        text(
            "فول مدمس مع الكمون وزيت الزيتون وشريحة خبز أسمر",
            "Slow-cooked fava beans with cumin, olive oil and a slice of whole wheat bread",
        ),
        18,
        50,
        10,
    ),
    MealTemplate::always(
        text("بيض مسلوق مع خبز أسمر", "Boiled Eggs with Whole Wheat Bread"),
        text(
            "بيضتان مسلوقتان مع خيار وطماطم وشريحة خبز أسمر",
            "Two boiled eggs with cucumber, tomato and a slice of whole wheat bread",
        ),
        20,
        30,
        14,
    )
    .unless(CHOLESTEROL),
    MealTemplate::always(
        text("زبادي يوناني بالمكسرات والعسل", "Greek Yogurt with Nuts and Honey"),
        text(
            "زبادي يوناني قليل الدسم مع ملعقة صغيرة عسل وجوز",
            "Low-fat Greek yogurt with a teaspoon of honey and walnuts",
        ),
        20,
        30,
        12,
    )
    .unless(DAIRY_FREE.union(DIABETES)),
    MealTemplate::always(
        text("جبنة بيضاء مع خضار", "White Cheese with Vegetables"),
        text(
            "جبنة بيضاء قليلة الملح مع خيار وزيتون وخبز أسمر",
            "Low-salt white cheese with cucumber, olives and whole wheat bread",
        ),
        18,
        35,
        14,
    )
    .unless(DAIRY_FREE.union(HIGH_PRESSURE)),
    MealTemplate::always(
        text("سلمون مدخن على توست أسمر", "Smoked Salmon on Whole Grain Toast"),
        text(
            "شرائح سلمون مدخن على توست أسمر مع أفوكادو",
            "Smoked salmon slices on whole grain toast with avocado",
        ),
        22,
        28,
        16,
    )
    .unless(SEAFOOD_FREE.union(VEGETARIAN).union(HIGH_PRESSURE)),
];

/// Mid-morning snack options
pub static MORNING_SNACK: &[MealTemplate] = &[
    MealTemplate::always(
        text("فاكهة طازجة", "Fresh Fruit"),
        text("تفاحة أو كمثرى متوسطة الحجم", "One medium apple or pear"),
        1,
        25,
        0,
    ),
    MealTemplate::always(
        text("حفنة من المكسرات النيئة", "Handful of Raw Nuts"),
        text(
            "لوز أو جوز غير مملح (حوالي 15 حبة)",
            "Unsalted almonds or walnuts (about 15 pieces)",
        ),
        6,
        6,
        14,
    ),
    MealTemplate::always(
        text("خضار مع حمص", "Vegetable Sticks with Hummus"),
        text(
            "أعواد جزر وخيار مع ملعقتين حمص",
            "Carrot and cucumber sticks with two tablespoons of hummus",
        ),
        5,
        15,
        6,
    ),
    MealTemplate::always(
        text("زبادي قليل الدسم", "Low-fat Yogurt"),
        text(
            "علبة زبادي قليل الدسم مع رشة قرفة",
            "A cup of low-fat yogurt with a pinch of cinnamon",
        ),
        8,
        12,
        3,
    )
    .unless(DAIRY_FREE),
    MealTemplate::always(
        text("تمر", "Dates"),
        text("ثلاث حبات تمر مع كوب ماء", "Three dates with a glass of water"),
        1,
        30,
        0,
    )
    .unless(DIABETES),
];

/// Lunch options
pub static LUNCH: &[MealTemplate] = &[
    MealTemplate::always(
        text("عدس مع أرز بني", "Lentil Stew with Brown Rice"),
        text(
            "يخنة عدس بالخضار مع نصف كوب أرز بني وسلطة خضراء",
            "Lentil and vegetable stew with half a cup of brown rice and green salad",
        ),
        20,
        65,
        9,
    ),
    MealTemplate::always(
        text("طبق الحمص بالطحينة", "Chickpea Tahini Bowl"),
        text(
            "حمص مسلوق مع خضار مشكلة وصلصة الطحينة",
            "Boiled chickpeas with mixed vegetables and tahini dressing",
        ),
        18,
        55,
        16,
    ),
    MealTemplate::always(
        text("صدر دجاج مشوي مع أرز بني", "Grilled Chicken Breast with Brown Rice"),
        text(
            "150 جرام صدر دجاج مشوي مع أرز بني وسلطة",
            "150 g grilled chicken breast with brown rice and salad",
        ),
        40,
        50,
        10,
    )
    .unless(VEGETARIAN),
    MealTemplate::always(
        text("سمك مشوي مع كينوا", "Grilled Fish with Quinoa"),
        text(
            "فيليه سمك مشوي مع كينوا وخضار على البخار",
            "Grilled fish fillet with quinoa and steamed vegetables",
        ),
        38,
        45,
        12,
    )
    .unless(SEAFOOD_FREE.union(VEGETARIAN)),
    MealTemplate::always(
        text("كفتة لحم قليل الدهن مع برغل", "Lean Beef Kofta with Bulgur"),
        text(
            "كفتة لحم بقري قليل الدهن مشوية مع برغل وسلطة",
            "Grilled lean beef kofta with bulgur and salad",
        ),
        35,
        45,
        18,
    )
    .unless(VEGETARIAN.union(CHOLESTEROL)),
    MealTemplate::always(
        text("محشي خضار بالأرز", "Rice-Stuffed Vegetables"),
        text(
            "كوسا وفلفل محشي بالأرز والأعشاب بصلصة الطماطم",
            "Zucchini and peppers stuffed with herbed rice in tomato sauce",
        ),
        10,
        70,
        10,
    )
    .unless(DIABETES.union(ACIDITY)),
];

/// Evening snack options
pub static EVENING_SNACK: &[MealTemplate] = &[
    MealTemplate::always(
        text("أعواد الخيار والجزر", "Cucumber and Carrot Sticks"),
        text("طبق خضار نيئة مقطعة", "A plate of sliced raw vegetables"),
        2,
        12,
        0,
    ),
    MealTemplate::always(
        text("فشار منزلي بدون زبدة", "Air-popped Popcorn"),
        text(
            "كوبان من الفشار المحضر بدون زبدة",
            "Two cups of popcorn made without butter",
        ),
        3,
        20,
        2,
    ),
    MealTemplate::always(
        text("جبن قريش مع خيار", "Cottage Cheese with Cucumber"),
        text(
            "نصف كوب جبن قريش مع شرائح خيار",
            "Half a cup of cottage cheese with cucumber slices",
        ),
        12,
        5,
        3,
    )
    .unless(DAIRY_FREE),
    MealTemplate::always(
        text("كوب حليب دافئ قليل الدسم", "Warm Low-fat Milk"),
        text(
            "كوب حليب قليل الدسم مع رشة قرفة",
            "A cup of low-fat milk with a pinch of cinnamon",
        ),
        8,
        12,
        3,
    )
    .unless(DAIRY_FREE),
    MealTemplate::always(
        text("شوكولاتة داكنة مع لوز", "Dark Chocolate with Almonds"),
        text(
            "مربعان من الشوكولاتة الداكنة 70% مع 5 حبات لوز",
            "Two squares of 70% dark chocolate with 5 almonds",
        ),
        4,
        12,
        12,
    )
    .unless(DIABETES.union(ACIDITY)),
];

/// Dinner options
pub static DINNER: &[MealTemplate] = &[
    MealTemplate::always(
        text("شوربة خضار مع توست أسمر", "Vegetable Soup with Whole Grain Toast"),
        text(
            "شوربة خضار منزلية مع شريحة توست أسمر",
            "Homemade vegetable soup with a slice of whole grain toast",
        ),
        8,
        35,
        6,
    ),
    MealTemplate::always(
        text("سلطة خضراء بالحمص", "Green Salad with Chickpeas"),
        text(
            "سلطة خضراء مع حمص مسلوق وزيت زيتون",
            "Green salad with boiled chickpeas and olive oil",
        ),
        12,
        30,
        10,
    ),
    MealTemplate::always(
        text("أومليت بالخضار", "Vegetable Omelette"),
        text(
            "بيضتان مع سبانخ وفلفل مطهوة بملعقة صغيرة زيت زيتون",
            "Two eggs with spinach and peppers cooked in a teaspoon of olive oil",
        ),
        16,
        8,
        14,
    )
    .unless(CHOLESTEROL),
    MealTemplate::always(
        text("زبادي بالخيار مع خبز أسمر", "Yogurt with Cucumber and Whole Wheat Bread"),
        text(
            "زبادي قليل الدسم بالخيار والنعناع مع ربع رغيف أسمر",
            "Low-fat yogurt with cucumber and mint and a quarter of a whole wheat loaf",
        ),
        12,
        30,
        5,
    )
    .unless(DAIRY_FREE),
    MealTemplate::always(
        text("سلطة دجاج مشوي", "Grilled Chicken Salad"),
        text(
            "شرائح دجاج مشوي على خضار ورقية مع الليمون",
            "Grilled chicken strips over leafy greens with lemon",
        ),
        30,
        12,
        10,
    )
    .unless(VEGETARIAN),
    MealTemplate::always(
        text("سلطة تونة", "Tuna Salad"),
        text(
            "تونة بالماء مصفاة مع خضار وذرة",
            "Drained water-packed tuna with vegetables and sweet corn",
        ),
        28,
        15,
        6,
    )
    .unless(SEAFOOD_FREE.union(VEGETARIAN).union(HIGH_PRESSURE)),
    MealTemplate::always(
        text("مكرونة قمح كامل بصلصة الطماطم", "Whole Wheat Pasta with Tomato Sauce"),
        text(
            "كوب مكرونة قمح كامل بصلصة طماطم منزلية",
            "One cup of whole wheat pasta with homemade tomato sauce",
        ),
        12,
        55,
        7,
    )
    .unless(ACIDITY.union(DIABETES)),
];

/// Static catalog table for a slot
#[must_use]
pub fn templates(slot: MealSlot) -> &'static [MealTemplate] {
    match slot {
        MealSlot::Breakfast => BREAKFAST,
        MealSlot::MorningSnack => MORNING_SNACK,
        MealSlot::Lunch => LUNCH,
        MealSlot::EveningSnack => EVENING_SNACK,
        MealSlot::Dinner => DINNER,
    }
}

/// Allowed options for one slot, in catalog order
#[must_use]
pub fn options_for_slot(slot: MealSlot, flags: DietaryFlags, calories: i64) -> Vec<MealOption> {
    templates(slot)
        .iter()
        .filter(|template| template.allowed_for(flags))
        .map(|template| template.to_option(calories))
        .collect()
}

/// Build the five-slot meal plan for a calorie target
#[must_use]
pub fn generate_meal_plan(
    target_calories: i64,
    flags: DietaryFlags,
    proportions: &MealSlotProportionsConfig,
) -> MealPlan {
    let mut plan = MealPlan::default();
    for slot in MealSlot::ALL {
        let calories = proportions.calories_for_slot(slot, target_calories);
        *plan.slot_mut(slot) = options_for_slot(slot, flags, calories);
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconditional_templates_lead_every_slot() {
        for slot in MealSlot::ALL {
            let table = templates(slot);
            let leading = table
                .iter()
                .take_while(|template| template.is_unconditional())
                .count();

            assert!(leading >= 1, "{slot} has no unconditional option");
            assert!(
                table[leading..].iter().all(|t| !t.is_unconditional()),
                "{slot} has an unconditional option after a gated one"
            );
        }
    }

    #[test]
    fn test_unless_accumulates_flags() {
        let template = MealTemplate::always(text("أ", "A"), text("ب", "B"), 1, 2, 3)
            .unless(DAIRY_FREE)
            .unless(DIABETES);
        assert_eq!(template.excluded_by, DAIRY_FREE | DIABETES);
        assert!(!template.allowed_for(DIABETES));
        assert!(template.allowed_for(ACIDITY));
    }

    #[test]
    fn test_options_share_slot_budget() {
        let options = options_for_slot(MealSlot::Lunch, DietaryFlags::empty(), 726);
        assert_eq!(options.len(), LUNCH.len());
        assert!(options.iter().all(|option| option.calories == 726));
    }
}
