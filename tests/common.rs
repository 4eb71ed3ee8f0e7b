// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, profile fixtures, and a fixed generation clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `dietplan_engine`

use chrono::{DateTime, TimeZone, Utc};
use dietplan_engine::config::EngineConfig;
use dietplan_engine::intelligence::{KeywordClassifier, PlanAssembler};
use dietplan_engine::models::{ActivityLevel, Goal, PatientProfile, PatientProfileInput};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed generation time so plans compare equal
pub fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap()
}

/// Default configuration with the default keyword classifier
pub fn default_assembler() -> PlanAssembler<'static> {
    PlanAssembler::new(EngineConfig::defaults(), KeywordClassifier::shared())
}

/// The reference request: 70 kg, 170 cm, 30 years, moderate, weight loss
pub fn reference_input() -> PatientProfileInput {
    PatientProfileInput {
        name: Some("Sara Ahmed".to_owned()),
        age: Some(30.0),
        weight: Some(70.0),
        height: Some(170.0),
        goal: Some("weight_loss".to_owned()),
        activity_level: Some("moderate".to_owned()),
        ..PatientProfileInput::default()
    }
}

/// Reference request with constraint lists filled in
pub fn input_with_constraints(
    allergies: &[&str],
    health_conditions: &[&str],
    dietary_restrictions: &[&str],
) -> PatientProfileInput {
    let owned = |items: &[&str]| Some(items.iter().map(|s| (*s).to_owned()).collect());
    PatientProfileInput {
        allergies: owned(allergies),
        health_conditions: owned(health_conditions),
        dietary_restrictions: owned(dietary_restrictions),
        ..reference_input()
    }
}

/// Validated profile for the reference request
pub fn reference_profile() -> PatientProfile {
    PatientProfile::new(
        "Sara Ahmed",
        30.0,
        70.0,
        170.0,
        Goal::WeightLoss,
        ActivityLevel::Moderate,
    )
}
