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


//! Tabular export command.

use super::SourceArgs;
use crate::commands::{self, ExportFormat};
use crate::error::CliError;
use clap::Subcommand;
use std::path::PathBuf;

/// Commands that write tables for external plotting.
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export per-graph and aggregate tables
    ///
    /// Without --records or --aggregates the per-graph table is written to
    /// stdout.
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file for the per-graph table
        #[arg(long, value_name = "FILE")]
        records: Option<PathBuf>,

        /// Output file for the overall and per-category table
        #[arg(long, value_name = "FILE")]
        aggregates: Option<PathBuf>,

        /// Table format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },
}

impl ExportCommands {
    /// Execute the export command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ExportCommands::Export {
                source,
                records,
                aggregates,
                format,
            } => commands::export(
                &source.config(),
                records.as_deref(),
                aggregates.as_deref(),
                format,
            ),
        }
    }
}
