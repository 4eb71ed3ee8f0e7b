// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy densities, service identifiers, and environment variable names

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single list.

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Carbohydrate: 4 kcal/g
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Engine service name
    pub const DIETPLAN_ENGINE: &str = "dietplan-engine";
    /// CLI service name
    pub const DIETPLAN_CLI: &str = "dietplan-cli";
}

/// Required profile field names, in the order they are reported
pub mod fields {
    /// Patient display name
    pub const NAME: &str = "name";
    /// Age in years
    pub const AGE: &str = "age";
    /// Body weight in kilograms
    pub const WEIGHT: &str = "weight";
    /// Height in centimeters
    pub const HEIGHT: &str = "height";
    /// Goal key
    pub const GOAL: &str = "goal";
    /// Activity level key
    pub const ACTIVITY_LEVEL: &str = "activityLevel";

    /// All required fields in reporting order
    pub const REQUIRED: [&str; 6] = [NAME, AGE, WEIGHT, HEIGHT, GOAL, ACTIVITY_LEVEL];
}

/// Environment variable names recognized by the engine configuration
pub mod env_vars {
    /// Sedentary activity multiplier
    pub const ACTIVITY_SEDENTARY: &str = "DIETPLAN_ACTIVITY_FACTOR_SEDENTARY";
    /// Light activity multiplier
    pub const ACTIVITY_LIGHT: &str = "DIETPLAN_ACTIVITY_FACTOR_LIGHT";
    /// Moderate activity multiplier
    pub const ACTIVITY_MODERATE: &str = "DIETPLAN_ACTIVITY_FACTOR_MODERATE";
    /// High activity multiplier
    pub const ACTIVITY_HIGH: &str = "DIETPLAN_ACTIVITY_FACTOR_HIGH";
    /// Multiplier applied for unrecognized activity levels
    pub const ACTIVITY_FALLBACK: &str = "DIETPLAN_ACTIVITY_FACTOR_FALLBACK";
    /// Weight loss calorie factor
    pub const WEIGHT_LOSS_FACTOR: &str = "DIETPLAN_WEIGHT_LOSS_FACTOR";
    /// Muscle gain calorie factor
    pub const MUSCLE_GAIN_FACTOR: &str = "DIETPLAN_MUSCLE_GAIN_FACTOR";
    /// Protein share of calories (percent)
    pub const MACRO_PROTEIN_PCT: &str = "DIETPLAN_MACRO_PROTEIN_PCT";
    /// Carbohydrate share of calories (percent)
    pub const MACRO_CARBS_PCT: &str = "DIETPLAN_MACRO_CARBS_PCT";
    /// Fat share of calories (percent)
    pub const MACRO_FAT_PCT: &str = "DIETPLAN_MACRO_FAT_PCT";
    /// Breakfast share of target calories
    pub const SLOT_BREAKFAST: &str = "DIETPLAN_SLOT_BREAKFAST";
    /// Lunch share of target calories
    pub const SLOT_LUNCH: &str = "DIETPLAN_SLOT_LUNCH";
    /// Dinner share of target calories
    pub const SLOT_DINNER: &str = "DIETPLAN_SLOT_DINNER";
    /// Combined snack share of target calories
    pub const SLOT_SNACKS: &str = "DIETPLAN_SLOT_SNACKS";

    /// Every override recognized by the configuration loader
    pub const ALL: [&str; 14] = [
        ACTIVITY_SEDENTARY,
        ACTIVITY_LIGHT,
        ACTIVITY_MODERATE,
        ACTIVITY_HIGH,
        ACTIVITY_FALLBACK,
        WEIGHT_LOSS_FACTOR,
        MUSCLE_GAIN_FACTOR,
        MACRO_PROTEIN_PCT,
        MACRO_CARBS_PCT,
        MACRO_FAT_PCT,
        SLOT_BREAKFAST,
        SLOT_LUNCH,
        SLOT_DINNER,
        SLOT_SNACKS,
    ];
}
