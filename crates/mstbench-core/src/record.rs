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

//! Canonical benchmark record model.
//!
//! One [`BenchmarkRecord`] exists per graph instance per source file. The
//! per-algorithm results are keyed by the closed [`Algorithm`] set, so adding
//! an algorithm is a matter of adding a variant.

use crate::category::{classify, SizeCategory};
use crate::metrics;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// MST algorithms reported by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Prim's algorithm.
    Prim,
    /// Kruskal's algorithm.
    Kruskal,
}

impl Algorithm {
    /// Every known algorithm, in report order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Prim, Algorithm::Kruskal];

    /// Key of this algorithm's object in a result entry.
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Prim => "prim",
            Algorithm::Kruskal => "kruskal",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Prim => "Prim",
            Algorithm::Kruskal => "Kruskal",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.key() == lower)
            .ok_or_else(|| format!("unknown algorithm '{}'", s))
    }
}

/// Ordered pair of algorithms being compared.
///
/// Every ratio is computed as `first / second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComparisonPair {
    /// Numerator of every ratio.
    pub first: Algorithm,
    /// Denominator of every ratio.
    pub second: Algorithm,
}

impl ComparisonPair {
    /// Create a pair.
    pub fn new(first: Algorithm, second: Algorithm) -> Self {
        Self { first, second }
    }

    /// The pair with its direction reversed.
    pub fn reversed(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}

impl Default for ComparisonPair {
    fn default() -> Self {
        Self::new(Algorithm::Prim, Algorithm::Kruskal)
    }
}

impl fmt::Display for ComparisonPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.first, self.second)
    }
}

impl FromStr for ComparisonPair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (first, second) = s
            .split_once('/')
            .ok_or_else(|| format!("expected '<first>/<second>', got '{}'", s))?;
        let pair = Self::new(first.parse()?, second.parse()?);
        if pair.first == pair.second {
            return Err(format!("cannot compare {} with itself", pair.first));
        }
        Ok(pair)
    }
}

/// Summary numbers of one algorithm run on one graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmRun {
    /// Total weight of the spanning tree.
    pub total_cost: f64,
    /// Wall-clock time in milliseconds.
    pub execution_time_ms: f64,
    /// Elementary operations counted by the solver.
    pub operations_count: u64,
}

impl AlgorithmRun {
    /// Create a run.
    pub fn new(total_cost: f64, execution_time_ms: f64, operations_count: u64) -> Self {
        Self {
            total_cost,
            execution_time_ms,
            operations_count,
        }
    }
}

/// One graph instance from one result file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRecord {
    /// File the record was read from.
    pub source_file: String,
    /// Identifier within `source_file`; not globally unique.
    pub graph_id: String,
    /// Vertex count.
    pub vertices: u64,
    /// Edge count.
    pub edges: u64,
    /// `edges / max_edges`, or 0 when `vertices < 2`.
    pub density: f64,
    /// Result per algorithm.
    pub runs: BTreeMap<Algorithm, AlgorithmRun>,
}

impl BenchmarkRecord {
    /// Create a record without algorithm runs. Density is derived here.
    pub fn new(
        source_file: impl Into<String>,
        graph_id: impl Into<String>,
        vertices: u64,
        edges: u64,
    ) -> Self {
        Self {
            source_file: source_file.into(),
            graph_id: graph_id.into(),
            vertices,
            edges,
            density: metrics::density(vertices, edges),
            runs: BTreeMap::new(),
        }
    }

    /// Attach the result of one algorithm.
    pub fn with_run(mut self, algorithm: Algorithm, run: AlgorithmRun) -> Self {
        self.runs.insert(algorithm, run);
        self
    }

    /// Result of `algorithm`, if present.
    pub fn run(&self, algorithm: Algorithm) -> Option<&AlgorithmRun> {
        self.runs.get(&algorithm)
    }

    /// Edge capacity of a simple undirected graph with this many vertices.
    pub fn max_edges(&self) -> u128 {
        metrics::max_edges(self.vertices)
    }

    /// True when `edges` exceeds the simple-graph bound.
    ///
    /// Such records are kept; callers only flag them.
    pub fn exceeds_edge_bound(&self) -> bool {
        u128::from(self.edges) > self.max_edges()
    }

    /// Size bucket of this graph.
    pub fn category(&self) -> SizeCategory {
        classify(self.vertices)
    }
}
