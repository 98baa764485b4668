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

//! MST benchmark result aggregation.
//!
//! Loads the JSON result files written by the Prim and Kruskal solvers,
//! derives per-graph metrics, aggregates them overall and per size category,
//! and renders a comparative report.
//!
//! ## Pipeline
//!
//! ```text
//! discovery -> parser -> aggregate -> report / export
//! ```
//!
//! Malformed files and entries never abort a batch; they are collected as
//! [`Diagnostic`]s next to the valid records.
//!
//! ## Usage
//!
//! ```no_run
//! use mstbench_core::{Analysis, AnalysisConfig};
//!
//! let analysis = Analysis::run(&AnalysisConfig::new("results")).unwrap();
//! println!("{}", analysis.report());
//! ```

pub mod aggregate;
pub mod category;
pub mod config;
pub mod discovery;
pub mod error;
pub mod export;
pub mod metrics;
pub mod parser;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod stats;
pub mod trend;

pub use aggregate::{aggregate, AggregateStats, AlgorithmStats, Aggregator, GroupBy, Scope, Verdict};
pub use category::{classify, SizeCategory};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, IngestError, Result};
pub use metrics::{MetricValue, RecordMetrics};
pub use parser::{Diagnostic, Ingest, RecordParser};
pub use pipeline::Analysis;
pub use record::{Algorithm, AlgorithmRun, BenchmarkRecord, ComparisonPair};
pub use report::{format_json, format_report};
