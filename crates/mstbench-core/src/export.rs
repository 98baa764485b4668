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

//! Tabular export of records and aggregates.
//!
//! These tables are what plotting tools consume. Undefined metrics become
//! empty CSV cells and `null` in JSON.

use crate::aggregate::AggregateStats;
use crate::category::SizeCategory;
use crate::error::{AnalysisError, Result};
use crate::metrics::{MetricValue, RecordMetrics};
use crate::record::{Algorithm, AlgorithmRun, BenchmarkRecord, ComparisonPair};
use serde::Serialize;
use std::collections::BTreeMap;

/// One row of the per-graph table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordRow<'a> {
    /// Source file identifier.
    pub source_file: &'a str,
    /// Graph identifier.
    pub graph_id: &'a str,
    /// Vertex count.
    pub vertices: u64,
    /// Edge count.
    pub edges: u64,
    /// Size category.
    pub category: SizeCategory,
    /// Raw measurements per algorithm.
    pub runs: &'a BTreeMap<Algorithm, AlgorithmRun>,
    /// Derived metrics.
    pub metrics: RecordMetrics,
}

/// Build the per-graph table.
pub fn record_rows(records: &[BenchmarkRecord], pair: ComparisonPair) -> Vec<RecordRow<'_>> {
    records
        .iter()
        .map(|record| RecordRow {
            source_file: &record.source_file,
            graph_id: &record.graph_id,
            vertices: record.vertices,
            edges: record.edges,
            category: record.category(),
            runs: &record.runs,
            metrics: RecordMetrics::derive(record, pair),
        })
        .collect()
}

/// Render the per-graph table as CSV.
///
/// Columns: `source_file, graph_id, vertices, edges, density, category`, then
/// `<alg>_cost, <alg>_time_ms, <alg>_operations, <alg>_ms_per_op` for every
/// algorithm, then `time_ratio, operations_ratio`.
pub fn records_to_csv(records: &[BenchmarkRecord], pair: ComparisonPair) -> Result<String> {
    let mut header: Vec<String> = ["source_file", "graph_id", "vertices", "edges", "density", "category"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    for alg in Algorithm::ALL {
        for column in ["cost", "time_ms", "operations", "ms_per_op"] {
            header.push(format!("{}_{}", alg.key(), column));
        }
    }
    header.push("time_ratio".to_string());
    header.push("operations_ratio".to_string());

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&header).map_err(csv_error)?;

    for row in record_rows(records, pair) {
        let mut fields = vec![
            row.source_file.to_string(),
            row.graph_id.to_string(),
            row.vertices.to_string(),
            row.edges.to_string(),
            row.metrics.density.to_string(),
            row.category.name().to_string(),
        ];
        for alg in Algorithm::ALL {
            match row.runs.get(&alg) {
                Some(run) => {
                    fields.push(run.total_cost.to_string());
                    fields.push(run.execution_time_ms.to_string());
                    fields.push(run.operations_count.to_string());
                    fields.push(cell(
                        row.metrics
                            .efficiency
                            .get(&alg)
                            .copied()
                            .unwrap_or(MetricValue::Undefined),
                    ));
                }
                None => fields.extend(std::iter::repeat(String::new()).take(4)),
            }
        }
        fields.push(cell(row.metrics.time_ratio));
        fields.push(cell(row.metrics.operations_ratio));
        writer.write_record(&fields).map_err(csv_error)?;
    }

    finish(writer)
}

/// Render aggregate rows as CSV, one line per scope.
pub fn aggregates_to_csv(rows: &[AggregateStats]) -> Result<String> {
    let mut header: Vec<String> = vec!["scope".to_string(), "count".to_string()];
    for alg in Algorithm::ALL {
        for column in ["mean_time_ms", "stddev_time_ms", "mean_operations", "stddev_operations"] {
            header.push(format!("{}_{}", alg.key(), column));
        }
    }
    header.push("time_ratio".to_string());
    header.push("operations_ratio".to_string());

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&header).map_err(csv_error)?;

    for row in rows {
        let mut fields = vec![row.scope.label().to_string(), row.count.to_string()];
        for alg in Algorithm::ALL {
            match row.algorithm(alg) {
                Some(stats) => {
                    fields.push(stats.time.mean.to_string());
                    fields.push(cell(stats.time.stddev));
                    fields.push(stats.operations.mean.to_string());
                    fields.push(cell(stats.operations.stddev));
                }
                None => fields.extend(std::iter::repeat(String::new()).take(4)),
            }
        }
        fields.push(cell(row.time_ratio));
        fields.push(cell(row.operations_ratio));
        writer.write_record(&fields).map_err(csv_error)?;
    }

    finish(writer)
}

/// Pretty JSON for any exported table.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| AnalysisError::export(e.to_string()))
}

fn cell(value: MetricValue) -> String {
    value.value().map(|v| v.to_string()).unwrap_or_default()
}

fn csv_error(err: csv::Error) -> AnalysisError {
    AnalysisError::export(format!("CSV write error: {}", err))
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| AnalysisError::export(format!("CSV flush error: {}", e)))?;
    String::from_utf8(bytes).map_err(|_| AnalysisError::export("CSV output is not valid UTF-8"))
}
