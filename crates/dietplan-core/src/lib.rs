// ABOUTME: Core types and constants for the diet plan generation engine
// ABOUTME: Foundation crate with error handling, constants, and the shared plan schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Diet Plan Core
//!
//! Foundation crate shared by the generation engine and its collaborators
//! (HTTP handlers, persistence). It is designed to change infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy densities, service names, environment variable names
//! - **models**: Patient profile input and the generated `DietPlan` schema

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Patient profile and diet plan data models
pub mod models;
