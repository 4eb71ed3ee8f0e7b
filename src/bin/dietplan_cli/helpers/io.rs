// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Input and output helpers for dietplan-cli
// ABOUTME: Reads request JSON from a file or stdin and prints JSON to stdout

use dietplan_engine::errors::{AppError, AppResult, ErrorResponse};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read the request body from `path`, or from stdin when no path is given
pub fn read_input(path: Option<&Path>) -> AppResult<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            AppError::invalid_input(format!("Cannot read {}: {e}", path.display())).with_source(e)
        }),
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .map_err(|e| AppError::invalid_input(format!("Cannot read stdin: {e}")))?;
            Ok(body)
        }
    }
}

/// Print a value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// Print an error as the client-facing JSON envelope
pub fn print_error(error: AppError) {
    let response = ErrorResponse::from(error);
    match serde_json::to_string(&response) {
        Ok(rendered) => println!("{rendered}"),
        Err(_) => println!("{{\"error\":{{\"code\":\"INTERNAL_ERROR\"}}}}"),
    }
}
