// ABOUTME: Error types for the diet plan engine, re-exported from dietplan-core
// ABOUTME: Keeps `crate::errors` paths stable for the binary and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! All fallible engine operations return [`AppResult`]. Clients receive an
//! [`ErrorResponse`] whose `code` is a stable SCREAMING_SNAKE_CASE string such
//! as `MISSING_FIELDS`.

pub use dietplan_core::errors::*;
