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


//! Report and validate commands.

use super::SourceArgs;
use crate::commands::{self, ReportFormat};
use crate::error::CliError;
use clap::Subcommand;

/// Commands that analyze a results directory.
#[derive(Subcommand)]
pub enum AnalysisCommands {
    /// Print the comparative performance report
    ///
    /// Loads every result file, aggregates overall and per size category, and
    /// prints the report to stdout. Skipped inputs are summarized on stderr.
    Report {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// Check result files without aggregating
    ///
    /// Lists every skipped file or entry. Exits non-zero when anything was
    /// skipped.
    Validate {
        #[command(flatten)]
        source: SourceArgs,
    },
}

impl AnalysisCommands {
    /// Execute the analysis command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            AnalysisCommands::Report { source, format } => {
                commands::report(&source.config(), format)
            }
            AnalysisCommands::Validate { source } => commands::validate(&source.config()),
        }
    }
}
