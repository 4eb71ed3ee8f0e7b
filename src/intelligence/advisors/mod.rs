// ABOUTME: Advisory sections of a diet plan derived from dietary flags and goal
// ABOUTME: Beverage policy, supplement recommendations, and behavioral guidelines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan advisors
//!
//! Each advisor is a pure function of the dietary flags (or the goal) and
//! returns one serialized section of the plan.

/// Water guidance and allowed/forbidden drinks
pub mod beverages;
/// Behavioral guideline categories
pub mod guidelines;
/// Supplement recommendations with a fixed disclaimer
pub mod supplements;

pub use beverages::recommend_beverages;
pub use guidelines::build_guidelines;
pub use supplements::recommend_supplements;
