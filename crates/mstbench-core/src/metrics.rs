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

//! Derived per-record metrics.
//!
//! Every division here is guarded. A zero or non-finite denominator produces
//! [`MetricValue::Undefined`] rather than `0`, `inf` or `NaN`, and consumers
//! have to branch on it.

use crate::record::{Algorithm, AlgorithmRun, BenchmarkRecord, ComparisonPair};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A derived number that may be undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// A finite value.
    Value(f64),
    /// The metric has no meaningful value (e.g. division by zero).
    Undefined,
}

impl MetricValue {
    /// `numerator / denominator`, undefined for a zero or non-finite operand.
    pub fn ratio(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 || !numerator.is_finite() || !denominator.is_finite() {
            return MetricValue::Undefined;
        }
        MetricValue::from(numerator / denominator)
    }

    /// The inner value, if defined.
    pub fn value(self) -> Option<f64> {
        match self {
            MetricValue::Value(v) => Some(v),
            MetricValue::Undefined => None,
        }
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        if v.is_finite() {
            MetricValue::Value(v)
        } else {
            MetricValue::Undefined
        }
    }
}

impl From<Option<f64>> for MetricValue {
    fn from(v: Option<f64>) -> Self {
        v.map_or(MetricValue::Undefined, MetricValue::from)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Value(v) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, v),
                None => write!(f, "{}", v),
            },
            // Right-aligned like numbers; precision must not truncate the marker.
            MetricValue::Undefined => write!(f, "{:>1$}", "n/a", f.width().unwrap_or(0)),
        }
    }
}

// Undefined serializes as null so tabular consumers see an empty cell.
impl Serialize for MetricValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

/// Edge capacity of a simple undirected graph: `v(v-1)/2`.
pub fn max_edges(vertices: u64) -> u128 {
    let v = u128::from(vertices);
    v * v.saturating_sub(1) / 2
}

/// Fraction of possible edges present. Exactly 0 when `vertices < 2`.
pub fn density(vertices: u64, edges: u64) -> f64 {
    let capacity = max_edges(vertices);
    if capacity == 0 {
        0.0
    } else {
        edges as f64 / capacity as f64
    }
}

/// Milliseconds per counted operation.
pub fn efficiency(run: &AlgorithmRun) -> MetricValue {
    MetricValue::ratio(run.execution_time_ms, run.operations_count as f64)
}

/// `first.time / second.time` for one record.
pub fn time_ratio(record: &BenchmarkRecord, pair: ComparisonPair) -> MetricValue {
    pair_ratio(record, pair, |run| run.execution_time_ms)
}

/// `first.ops / second.ops` for one record.
///
/// Undefined when either count is 0: a solver that counted nothing has no
/// comparable workload.
pub fn operations_ratio(record: &BenchmarkRecord, pair: ComparisonPair) -> MetricValue {
    match (record.run(pair.first), record.run(pair.second)) {
        (Some(a), Some(b)) if a.operations_count > 0 && b.operations_count > 0 => {
            MetricValue::ratio(a.operations_count as f64, b.operations_count as f64)
        }
        _ => MetricValue::Undefined,
    }
}

fn pair_ratio(
    record: &BenchmarkRecord,
    pair: ComparisonPair,
    metric: impl Fn(&AlgorithmRun) -> f64,
) -> MetricValue {
    match (record.run(pair.first), record.run(pair.second)) {
        (Some(a), Some(b)) => MetricValue::ratio(metric(a), metric(b)),
        _ => MetricValue::Undefined,
    }
}

/// All derived metrics of one record, computed on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordMetrics {
    /// Graph density.
    pub density: f64,
    /// Per-record time ratio.
    pub time_ratio: MetricValue,
    /// Per-record operations ratio.
    pub operations_ratio: MetricValue,
    /// Milliseconds per operation, per algorithm.
    pub efficiency: BTreeMap<Algorithm, MetricValue>,
}

impl RecordMetrics {
    /// Derive every metric of `record` for `pair`.
    pub fn derive(record: &BenchmarkRecord, pair: ComparisonPair) -> Self {
        Self {
            density: record.density,
            time_ratio: time_ratio(record, pair),
            operations_ratio: operations_ratio(record, pair),
            efficiency: record
                .runs
                .iter()
                .map(|(alg, run)| (*alg, efficiency(run)))
                .collect(),
        }
    }
}
