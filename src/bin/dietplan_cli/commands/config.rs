// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: `config` command: prints the effective engine configuration
// ABOUTME: Fails with CONFIG_INVALID when environment overrides do not validate

use crate::helpers::io::print_json;
use dietplan_engine::config::EngineConfig;
use dietplan_engine::errors::AppResult;

/// Load the configuration from the environment and print it
pub fn run() -> AppResult<()> {
    let config = EngineConfig::load()?;
    print_json(&config, true)
}
