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


//! Export command - tabular output for plotting tools

use super::{warn_skipped, write_output, ExportFormat};
use crate::error::CliError;
use mstbench_core::export::{aggregates_to_csv, record_rows, records_to_csv, to_json};
use mstbench_core::{Analysis, AnalysisConfig};
use std::path::Path;
use tracing::info;

/// Write the per-graph table and/or the aggregate table.
///
/// With neither path given the per-graph table goes to stdout.
///
/// # Errors
///
/// Returns `Err` if the analysis fails or a table cannot be written.
pub fn export(
    config: &AnalysisConfig,
    records: Option<&Path>,
    aggregates: Option<&Path>,
    format: ExportFormat,
) -> Result<(), CliError> {
    if let (Some(r), Some(a)) = (records, aggregates) {
        if r == a {
            return Err(CliError::invalid_input(
                "--records and --aggregates must be different files",
            ));
        }
    }

    let analysis = Analysis::run(config)?;
    warn_skipped(&analysis.diagnostics);

    if records.is_none() && aggregates.is_none() {
        return write_output(&records_table(&analysis, format)?, None);
    }

    if let Some(path) = records {
        write_output(&records_table(&analysis, format)?, Some(path))?;
        info!(path = %path.display(), rows = analysis.records.len(), "wrote records table");
    }
    if let Some(path) = aggregates {
        let rows = analysis.rows();
        let table = match format {
            ExportFormat::Csv => aggregates_to_csv(&rows)?,
            ExportFormat::Json => to_json(&rows)?,
        };
        write_output(&table, Some(path))?;
        info!(path = %path.display(), rows = rows.len(), "wrote aggregates table");
    }
    Ok(())
}

fn records_table(analysis: &Analysis, format: ExportFormat) -> Result<String, CliError> {
    let pair = analysis.overall.pair;
    let table = match format {
        ExportFormat::Csv => records_to_csv(&analysis.records, pair)?,
        ExportFormat::Json => to_json(&record_rows(&analysis.records, pair))?,
    };
    Ok(table)
}
