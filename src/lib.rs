// ABOUTME: Main library entry point for the diet plan generation engine
// ABOUTME: Turns patient profiles into deterministic bilingual (Arabic/English) diet plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Diet Plan Engine
//!
//! Generates a personalized daily diet plan from a patient profile: energy
//! targets (BMR, TDEE, goal-adjusted calories, macros), flag-filtered meal
//! options for five daily slots, beverage and supplement advice, behavioral
//! guidelines, and a substitution table. All text is bilingual.
//!
//! Generation is deterministic: identical input yields an identical plan
//! except for the `generatedAt` timestamp.
//!
//! ## Architecture
//!
//! - **Config**: formula coefficients with environment overrides
//! - **Intelligence**: pure calculators, classifier, catalog and advisors
//! - **Services**: input validation, logging, and batch generation
//! - **Models**: request and plan schemas (from `dietplan-core`)
//!
//! ## Example Usage
//!
//! ```rust
//! use dietplan_engine::models::PatientProfileInput;
//! use dietplan_engine::services::generate_plan;
//!
//! let input = PatientProfileInput {
//!     name: Some("Sara".to_owned()),
//!     age: Some(30.0),
//!     weight: Some(70.0),
//!     height: Some(170.0),
//!     goal: Some("weight_loss".to_owned()),
//!     activity_level: Some("moderate".to_owned()),
//!     ..PatientProfileInput::default()
//! };
//!
//! let plan = generate_plan(&input).unwrap();
//! assert_eq!(plan.calculations.target_calories, 2074);
//! ```

/// Formula coefficients, proportions and environment overrides
pub mod config;

/// Error types and `AppResult`
pub mod errors;

/// Biometrics, constraint classification, meal catalog, advisors and assembly
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Request and plan data models
pub mod models;

/// Plan generation services
pub mod services;

pub use errors::{AppError, AppResult, ErrorCode};
pub use services::{generate_plan, PlanGenerationService};
