// ABOUTME: Service layer wrapping the deterministic plan pipeline for callers
// ABOUTME: Validation, logging and batch fan-out live here, not in the intelligence modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Service layer
//!
//! Entry points used by the CLI, tests and embedding applications. Services
//! accept raw request input and return `AppResult`s.

/// Diet plan generation from raw patient input
pub mod plan_generation;

pub use plan_generation::{generate_plan, PlanGenerationService};
