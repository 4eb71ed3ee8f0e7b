// ABOUTME: Request and plan data models, re-exported from dietplan-core
// ABOUTME: Patient profile input, validated profile, and the serialized diet plan schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use dietplan_core::models::*;
