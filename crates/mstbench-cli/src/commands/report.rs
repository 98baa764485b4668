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


//! Report command - full analysis of a results directory

use super::{warn_skipped, write_output, ReportFormat};
use crate::error::CliError;
use mstbench_core::{format_json, Analysis, AnalysisConfig};

/// Load, aggregate and print the comparison report.
///
/// The report goes to stdout; skipped inputs are summarized on stderr.
///
/// # Errors
///
/// Returns `Err` if the results directory is missing or unreadable, if no
/// valid record was loaded, or if the output cannot be written.
pub fn report(config: &AnalysisConfig, format: ReportFormat) -> Result<(), CliError> {
    let analysis = Analysis::run(config)?;
    warn_skipped(&analysis.diagnostics);

    let output = match format {
        ReportFormat::Text => analysis.report(),
        ReportFormat::Json => {
            let mut json = format_json(&analysis)?;
            json.push('\n');
            json
        }
    };
    write_output(&output, None)
}
