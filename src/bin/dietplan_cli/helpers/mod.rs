// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Shared helpers for dietplan-cli commands
// ABOUTME: Input reading and JSON output formatting

pub mod io;
