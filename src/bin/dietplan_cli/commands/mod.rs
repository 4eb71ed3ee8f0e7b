// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for dietplan-cli
// ABOUTME: Plan generation, batch generation, standalone calculation and config display

pub mod batch;
pub mod calculate;
pub mod config;
pub mod generate;
