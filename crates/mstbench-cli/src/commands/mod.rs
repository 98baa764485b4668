// Dweve MSTBench - Minimum Spanning Tree Benchmark Analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! CLI command implementations

mod export;
mod report;
mod validate;

pub use export::export;
pub use report::report;
pub use validate::validate;

use crate::error::CliError;
use clap::ValueEnum;
use colored::Colorize;
use mstbench_core::Diagnostic;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Output format of the `report` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text report
    #[default]
    Text,
    /// Pretty-printed JSON with records, diagnostics and aggregates
    Json,
}

/// Table format of the `export` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, one row per graph or scope
    #[default]
    Csv,
    /// Pretty-printed JSON array
    Json,
}

/// Write content to a file or stdout.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the file cannot be written, or if stdout is
/// closed.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Print one line per diagnostic to stdout.
pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        println!("{} {}", "✗".red().bold(), diagnostic);
    }
}

/// One-line notice on stderr when inputs were skipped.
pub fn warn_skipped(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    eprintln!(
        "{} {} file(s) or entries skipped; run `mstbench validate` for details",
        "⚠".yellow().bold(),
        diagnostics.len()
    );
}
