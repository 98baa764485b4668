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


//! MSTBench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **report**: Aggregate a results directory and print the comparison
//! - **validate**: List every result file or entry that would be skipped
//! - **export**: Write the per-graph and aggregate tables as CSV or JSON
//!
//! # Examples
//!
//! ```no_run
//! use mstbench_cli::commands::{report, ReportFormat};
//! use mstbench_core::AnalysisConfig;
//!
//! # fn main() -> Result<(), mstbench_cli::error::CliError> {
//! report(&AnalysisConfig::new("../results"), ReportFormat::Text)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
