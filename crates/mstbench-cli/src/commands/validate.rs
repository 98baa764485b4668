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


//! Validate command - ingestion check of a results directory

use super::print_diagnostics;
use crate::error::CliError;
use colored::Colorize;
use mstbench_core::{AnalysisConfig, RecordParser};

/// Parse every result file and list what would be skipped.
///
/// Nothing is aggregated, so an empty directory validates cleanly.
///
/// # Errors
///
/// Returns [`CliError::DiagnosticsFound`] when any file or entry was skipped,
/// and propagates directory errors.
///
/// # Output
///
/// Prints one `✗` line per diagnostic followed by a summary line.
pub fn validate(config: &AnalysisConfig) -> Result<(), CliError> {
    let parser = RecordParser::new(config.clone());
    let ingest = parser.load()?;
    print_diagnostics(&ingest.diagnostics);

    let summary = format!(
        "{} valid record(s) from {} file(s) in {}",
        ingest.records.len(),
        ingest.sources,
        parser.config().results_dir.display()
    );

    if ingest.diagnostics.is_empty() {
        println!("{} {}", "✓".green().bold(), summary);
        Ok(())
    } else {
        println!(
            "{} {}, {} diagnostic(s)",
            "✗".red().bold(),
            summary,
            ingest.diagnostics.len()
        );
        Err(CliError::DiagnosticsFound {
            count: ingest.diagnostics.len(),
        })
    }
}
