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


//! CLI command definitions and argument parsing.
//!
//! - [`analysis`]: report and validate
//! - [`export`]: tabular export

mod analysis;
mod export;

use crate::error::CliError;
use clap::{Args, Subcommand};
use mstbench_core::config::{DEFAULT_FILE_SUFFIX, DEFAULT_RESULTS_DIR};
use mstbench_core::{AnalysisConfig, ComparisonPair};
use std::path::PathBuf;

pub use analysis::AnalysisCommands;
pub use export::ExportCommands;

/// Top-level CLI commands.
///
/// ```text
/// Commands
/// ├── Analysis (report, validate)
/// └── Export (export)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Analysis commands - flattened to appear at top level
    #[command(flatten)]
    Analysis(AnalysisCommands),

    // Export commands - flattened to appear at top level
    #[command(flatten)]
    Export(ExportCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if loading, aggregation or output fails, or if
    /// validation finds skipped inputs.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Analysis(cmd) => cmd.execute(),
            Commands::Export(cmd) => cmd.execute(),
        }
    }
}

/// Where result files come from and how they are compared.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Directory containing solver result files
    #[arg(short = 'd', long, value_name = "DIR", default_value = DEFAULT_RESULTS_DIR)]
    pub results_dir: PathBuf,

    /// Only files ending with this suffix are read
    #[arg(long, value_name = "SUFFIX", default_value = DEFAULT_FILE_SUFFIX)]
    pub suffix: String,

    /// Ratio direction as FIRST/SECOND (ratios are FIRST divided by SECOND)
    #[arg(long, value_name = "FIRST/SECOND", default_value = "prim/kruskal")]
    pub pair: ComparisonPair,
}

impl SourceArgs {
    /// Build the analysis configuration.
    pub fn config(&self) -> AnalysisConfig {
        AnalysisConfig::new(&self.results_dir)
            .with_suffix(&self.suffix)
            .with_pair(self.pair)
    }
}
