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

//! Grouped aggregation and cross-algorithm comparison.
//!
//! The aggregator holds no state between calls: every invocation reduces the
//! record slice it is given into fresh, immutable [`AggregateStats`].
//!
//! Ratios are always ratio-of-means (`mean(first) / mean(second)`), for the
//! overall row and for every category row alike. The mean of per-record
//! ratios is carried separately as [`AggregateStats::mean_time_ratio`].

use crate::category::{classify, SizeCategory};
use crate::error::{AnalysisError, Result};
use crate::metrics::{self, MetricValue};
use crate::record::{Algorithm, BenchmarkRecord, ComparisonPair};
use crate::stats::{self, Summary};
use crate::trend::ScalingTrends;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// What an aggregate row covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(tag = "kind", content = "category", rename_all = "snake_case")]
pub enum Scope {
    /// Every record.
    Overall,
    /// Records of one size category.
    Category(SizeCategory),
}

impl Scope {
    /// Label used in reports and exports.
    pub fn label(self) -> &'static str {
        match self {
            Scope::Overall => "Overall",
            Scope::Category(category) => category.label(),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Grouping applied by [`Aggregator::aggregate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupBy {
    /// A single row over all records.
    #[default]
    Overall,
    /// One row per non-empty size category.
    Category,
}

/// Interpretation of a `first / second` ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    /// Ratio below 1: the first algorithm wins by `factor = 1 / ratio`.
    FirstAhead {
        /// Advantage factor
        factor: f64,
    },
    /// Ratio above 1: the second algorithm wins by `factor = ratio`.
    SecondAhead {
        /// Advantage factor
        factor: f64,
    },
    /// Ratio exactly 1.
    Equal,
    /// Ratio undefined, or zero so no finite factor exists.
    Undetermined,
}

impl Verdict {
    /// Interpret `ratio`.
    pub fn from_ratio(ratio: MetricValue) -> Self {
        match ratio.value() {
            Some(r) if r > 0.0 && r < 1.0 => Verdict::FirstAhead { factor: 1.0 / r },
            Some(r) if r > 1.0 => Verdict::SecondAhead { factor: r },
            Some(r) if r == 1.0 => Verdict::Equal,
            _ => Verdict::Undetermined,
        }
    }

    /// The winning algorithm and its factor, if any.
    pub fn winner(self, pair: ComparisonPair) -> Option<(Algorithm, f64)> {
        match self {
            Verdict::FirstAhead { factor } => Some((pair.first, factor)),
            Verdict::SecondAhead { factor } => Some((pair.second, factor)),
            Verdict::Equal | Verdict::Undetermined => None,
        }
    }
}

/// Inclusive range of an integer attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueRange {
    /// Smallest value.
    pub min: u64,
    /// Largest value.
    pub max: u64,
}

impl ValueRange {
    fn of(values: impl Iterator<Item = u64>) -> Option<Self> {
        values.fold(None, |range, v| {
            Some(match range {
                None => ValueRange { min: v, max: v },
                Some(ValueRange { min, max }) => ValueRange {
                    min: min.min(v),
                    max: max.max(v),
                },
            })
        })
    }
}

/// Statistics of one algorithm within a row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmStats {
    /// Execution time in milliseconds.
    pub time: Summary,
    /// Operation counts.
    pub operations: Summary,
    /// Milliseconds per operation over records with a non-zero count.
    pub efficiency: Option<Summary>,
    /// Mean spanning-tree cost.
    pub mean_cost: f64,
    /// Least-squares scaling trends.
    pub trends: ScalingTrends,
}

/// Aggregate statistics of one row (overall or one category).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStats {
    /// What the row covers.
    pub scope: Scope,
    /// Number of records.
    pub count: usize,
    /// Vertex count range.
    pub vertices: ValueRange,
    /// Edge count range.
    pub edges: ValueRange,
    /// Mean graph density.
    pub mean_density: f64,
    /// Records whose edge count exceeds the simple-graph bound.
    pub edge_bound_violations: usize,
    /// Direction of every ratio below.
    pub pair: ComparisonPair,
    /// Per-algorithm statistics.
    pub algorithms: BTreeMap<Algorithm, AlgorithmStats>,
    /// `mean(first.time) / mean(second.time)`.
    pub time_ratio: MetricValue,
    /// `mean(first.ops) / mean(second.ops)` over records where both counts
    /// are non-zero.
    pub operations_ratio: MetricValue,
    /// Mean of the defined per-record time ratios.
    pub mean_time_ratio: MetricValue,
    /// Mean of the defined per-record operations ratios.
    pub mean_operations_ratio: MetricValue,
    /// Interpretation of `time_ratio`.
    pub time_verdict: Verdict,
    /// Interpretation of `operations_ratio`.
    pub operations_verdict: Verdict,
}

impl AggregateStats {
    /// Statistics of `algorithm`, if any record carried it.
    pub fn algorithm(&self, algorithm: Algorithm) -> Option<&AlgorithmStats> {
        self.algorithms.get(&algorithm)
    }
}

/// Reduces record collections into [`AggregateStats`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    pair: ComparisonPair,
}

impl Aggregator {
    /// Create an aggregator comparing `pair.first` against `pair.second`.
    pub fn new(pair: ComparisonPair) -> Self {
        Self { pair }
    }

    /// Aggregate `records` by `group_by`.
    ///
    /// Empty groups are omitted, so zero records yield an empty vector.
    /// Category rows come back in ascending [`SizeCategory`] order.
    pub fn aggregate(&self, records: &[BenchmarkRecord], group_by: GroupBy) -> Vec<AggregateStats> {
        match group_by {
            GroupBy::Overall => {
                let all: Vec<&BenchmarkRecord> = records.iter().collect();
                self.reduce(Scope::Overall, &all).into_iter().collect()
            }
            GroupBy::Category => group_by_category(records)
                .into_iter()
                .filter_map(|(category, group)| self.reduce(Scope::Category(category), &group))
                .collect(),
        }
    }

    /// Overall row, or [`AnalysisError::NoRecords`] for an empty slice.
    pub fn summarize(&self, records: &[BenchmarkRecord]) -> Result<AggregateStats> {
        self.aggregate(records, GroupBy::Overall)
            .into_iter()
            .next()
            .ok_or(AnalysisError::NoRecords)
    }

    fn reduce(&self, scope: Scope, records: &[&BenchmarkRecord]) -> Option<AggregateStats> {
        let vertices = ValueRange::of(records.iter().map(|r| r.vertices))?;
        let edges = ValueRange::of(records.iter().map(|r| r.edges))?;

        let densities: Vec<f64> = records.iter().map(|r| r.density).collect();
        let mean_density = stats::mean(&densities)?;

        let algorithms: BTreeMap<Algorithm, AlgorithmStats> = Algorithm::ALL
            .into_iter()
            .filter_map(|alg| algorithm_stats(records, alg).map(|s| (alg, s)))
            .collect();

        let time_ratio = ratio_of_means(
            algorithms.get(&self.pair.first).map(|s| s.time.mean),
            algorithms.get(&self.pair.second).map(|s| s.time.mean),
        );
        let operations_ratio = self.operations_ratio_of_means(records);

        let per_record_time: Vec<f64> = records
            .iter()
            .filter_map(|r| metrics::time_ratio(r, self.pair).value())
            .collect();
        let per_record_operations: Vec<f64> = records
            .iter()
            .filter_map(|r| metrics::operations_ratio(r, self.pair).value())
            .collect();

        Some(AggregateStats {
            scope,
            count: records.len(),
            vertices,
            edges,
            mean_density,
            edge_bound_violations: records.iter().filter(|r| r.exceeds_edge_bound()).count(),
            pair: self.pair,
            algorithms,
            time_ratio,
            operations_ratio,
            mean_time_ratio: stats::mean(&per_record_time).into(),
            mean_operations_ratio: stats::mean(&per_record_operations).into(),
            time_verdict: Verdict::from_ratio(time_ratio),
            operations_verdict: Verdict::from_ratio(operations_ratio),
        })
    }

    // A zero count means the solver reported no work, so such records carry
    // no comparable workload and stay out of both means.
    fn operations_ratio_of_means(&self, records: &[&BenchmarkRecord]) -> MetricValue {
        let (firsts, seconds): (Vec<f64>, Vec<f64>) = records
            .iter()
            .filter_map(|r| match (r.run(self.pair.first), r.run(self.pair.second)) {
                (Some(a), Some(b)) if a.operations_count > 0 && b.operations_count > 0 => {
                    Some((a.operations_count as f64, b.operations_count as f64))
                }
                _ => None,
            })
            .unzip();
        ratio_of_means(stats::mean(&firsts), stats::mean(&seconds))
    }
}

/// Aggregate with the default Prim/Kruskal pair.
pub fn aggregate(records: &[BenchmarkRecord], group_by: GroupBy) -> Vec<AggregateStats> {
    Aggregator::default().aggregate(records, group_by)
}

/// Partition records by size category; only non-empty groups appear.
pub fn group_by_category(records: &[BenchmarkRecord]) -> BTreeMap<SizeCategory, Vec<&BenchmarkRecord>> {
    let mut grouped: BTreeMap<SizeCategory, Vec<&BenchmarkRecord>> = BTreeMap::new();
    for record in records {
        grouped.entry(classify(record.vertices)).or_default().push(record);
    }
    grouped
}

fn ratio_of_means(first: Option<f64>, second: Option<f64>) -> MetricValue {
    match (first, second) {
        (Some(a), Some(b)) => MetricValue::ratio(a, b),
        _ => MetricValue::Undefined,
    }
}

fn algorithm_stats(records: &[&BenchmarkRecord], algorithm: Algorithm) -> Option<AlgorithmStats> {
    let runs: Vec<_> = records.iter().filter_map(|r| r.run(algorithm)).collect();

    let times: Vec<f64> = runs.iter().map(|r| r.execution_time_ms).collect();
    let operations: Vec<f64> = runs.iter().map(|r| r.operations_count as f64).collect();
    let costs: Vec<f64> = runs.iter().map(|r| r.total_cost).collect();
    let efficiency: Vec<f64> = runs
        .iter()
        .filter_map(|r| metrics::efficiency(r).value())
        .collect();

    Some(AlgorithmStats {
        time: Summary::from_values(&times)?,
        operations: Summary::from_values(&operations)?,
        efficiency: Summary::from_values(&efficiency),
        mean_cost: stats::mean(&costs)?,
        trends: ScalingTrends::fit(records.iter().copied(), algorithm),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::AlgorithmRun;

    fn record(id: &str, vertices: u64, prim: (f64, u64), kruskal: (f64, u64)) -> BenchmarkRecord {
        BenchmarkRecord::new("test_results.json", id, vertices, vertices)
            .with_run(Algorithm::Prim, AlgorithmRun::new(10.0, prim.0, prim.1))
            .with_run(Algorithm::Kruskal, AlgorithmRun::new(10.0, kruskal.0, kruskal.1))
    }

    #[test]
    fn test_ratio_of_means_example() {
        let records = vec![
            record("1", 10, (2.0, 100), (1.0, 100)),
            record("2", 10, (2.0, 100), (1.0, 100)),
        ];
        let stats = Aggregator::default().summarize(&records).unwrap();
        assert_eq!(stats.time_ratio, MetricValue::Value(2.0));
        assert_eq!(stats.time_verdict, Verdict::SecondAhead { factor: 2.0 });
        assert_eq!(
            stats.time_verdict.winner(stats.pair),
            Some((Algorithm::Kruskal, 2.0))
        );
    }

    #[test]
    fn test_ratio_of_means_differs_from_mean_of_ratios() {
        let skewed = vec![
            record("1", 10, (1.0, 1), (1.0, 1)),
            record("2", 10, (10.0, 1), (100.0, 1)),
        ];
        let stats = aggregate(&skewed, GroupBy::Overall).remove(0);
        assert_eq!(stats.time_ratio, MetricValue::Value(11.0 / 101.0));

        let mean_of_ratios = stats.mean_time_ratio.value().unwrap();
        assert!((mean_of_ratios - 0.55).abs() < 1e-12);
        assert_eq!(stats.time_verdict.winner(stats.pair).map(|w| w.0), Some(Algorithm::Prim));
    }

    #[test]
    fn test_verdict_directions() {
        assert_eq!(
            Verdict::from_ratio(MetricValue::Value(0.5)),
            Verdict::FirstAhead { factor: 2.0 }
        );
        assert_eq!(Verdict::from_ratio(MetricValue::Value(1.0)), Verdict::Equal);
        assert_eq!(Verdict::from_ratio(MetricValue::Value(0.0)), Verdict::Undetermined);
        assert_eq!(Verdict::from_ratio(MetricValue::Undefined), Verdict::Undetermined);
        assert_eq!(Verdict::Equal.winner(ComparisonPair::default()), None);
    }

    #[test]
    fn test_group_by_category_skips_empty() {
        let records = vec![
            record("1", 10, (1.0, 1), (1.0, 1)),
            record("2", 10, (1.0, 1), (1.0, 1)),
            record("3", 200, (1.0, 1), (1.0, 1)),
            record("4", 2000, (1.0, 1), (1.0, 1)),
        ];
        let rows = aggregate(&records, GroupBy::Category);
        let scopes: Vec<(Scope, usize)> = rows.iter().map(|r| (r.scope, r.count)).collect();
        assert_eq!(
            scopes,
            vec![
                (Scope::Category(SizeCategory::Small), 2),
                (Scope::Category(SizeCategory::Medium), 1),
                (Scope::Category(SizeCategory::ExtraLarge), 1),
            ]
        );
        assert_eq!(aggregate(&records, GroupBy::Overall)[0].count, 4);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&[], GroupBy::Overall).is_empty());
        assert!(aggregate(&[], GroupBy::Category).is_empty());
        assert_eq!(
            Aggregator::default().summarize(&[]),
            Err(AnalysisError::NoRecords)
        );
    }

    #[test]
    fn test_zero_operations_excluded_from_efficiency() {
        let records = vec![
            record("1", 10, (4.0, 0), (1.0, 10)),
            record("2", 10, (6.0, 3), (1.0, 10)),
        ];
        let stats = Aggregator::default().summarize(&records).unwrap();
        let prim = stats.algorithm(Algorithm::Prim).unwrap();
        let efficiency = prim.efficiency.unwrap();
        assert_eq!(efficiency.count, 1);
        assert_eq!(efficiency.mean, 2.0);
        // raw summary keeps the zero; the ratio only sees record 2
        assert_eq!(prim.operations.mean, 1.5);
        assert_eq!(stats.operations_ratio, MetricValue::Value(0.3));
    }

    #[test]
    fn test_zero_operations_records_excluded_from_operations_ratio() {
        let records = vec![
            record("1", 10, (1.0, 0), (1.0, 100)),
            record("2", 10, (1.0, 100), (1.0, 100)),
        ];
        let stats = Aggregator::default().summarize(&records).unwrap();
        assert_eq!(stats.operations_ratio, MetricValue::Value(1.0));
        assert_eq!(stats.operations_verdict, Verdict::Equal);
        assert_eq!(stats.mean_operations_ratio, MetricValue::Value(1.0));
        assert_eq!(stats.algorithm(Algorithm::Prim).unwrap().operations.mean, 50.0);
    }

    #[test]
    fn test_mean_operations_ratio_uses_defined_ratios_only() {
        let records = vec![
            record("1", 10, (1.0, 10), (1.0, 40)),
            record("2", 10, (1.0, 90), (1.0, 10)),
            record("3", 10, (1.0, 7), (1.0, 0)),
        ];
        let stats = Aggregator::default().summarize(&records).unwrap();
        let mean_of_ratios = stats.mean_operations_ratio.value().unwrap();
        assert!((mean_of_ratios - (0.25 + 9.0) / 2.0).abs() < 1e-12);
        assert_eq!(stats.operations_ratio, MetricValue::Value(2.0));
    }

    #[test]
    fn test_all_zero_operations_gives_no_efficiency_and_undefined_ratio() {
        let records = vec![record("1", 10, (4.0, 5), (1.0, 0))];
        let stats = Aggregator::default().summarize(&records).unwrap();
        assert!(stats.algorithm(Algorithm::Kruskal).unwrap().efficiency.is_none());
        assert_eq!(stats.operations_ratio, MetricValue::Undefined);
        assert_eq!(stats.operations_verdict, Verdict::Undetermined);
    }

    #[test]
    fn test_zero_time_denominator_is_undefined() {
        let records = vec![record("1", 10, (4.0, 5), (0.0, 5))];
        let stats = Aggregator::default().summarize(&records).unwrap();
        assert_eq!(stats.time_ratio, MetricValue::Undefined);
        assert_eq!(stats.mean_time_ratio, MetricValue::Undefined);
    }

    #[test]
    fn test_reversed_pair() {
        let records = vec![record("1", 10, (2.0, 1), (1.0, 1))];
        let stats = Aggregator::new(ComparisonPair::default().reversed())
            .summarize(&records)
            .unwrap();
        assert_eq!(stats.time_ratio, MetricValue::Value(0.5));
        assert_eq!(stats.time_verdict, Verdict::FirstAhead { factor: 2.0 });
        assert_eq!(
            stats.time_verdict.winner(stats.pair),
            Some((Algorithm::Kruskal, 2.0))
        );
    }

    #[test]
    fn test_ranges_and_density() {
        let records = vec![
            BenchmarkRecord::new("f", "1", 4, 6),
            BenchmarkRecord::new("f", "2", 1, 0),
        ];
        let stats = Aggregator::default().summarize(&records).unwrap();
        assert_eq!(stats.vertices, ValueRange { min: 1, max: 4 });
        assert_eq!(stats.edges, ValueRange { min: 0, max: 6 });
        assert_eq!(stats.mean_density, 0.5);
        assert!(stats.algorithms.is_empty());
        assert_eq!(stats.time_ratio, MetricValue::Undefined);
    }

    #[test]
    fn test_edge_bound_violations_counted() {
        let records = vec![
            BenchmarkRecord::new("f", "1", 3, 5),
            BenchmarkRecord::new("f", "2", 3, 3),
        ];
        let stats = Aggregator::default().summarize(&records).unwrap();
        assert_eq!(stats.edge_bound_violations, 1);
    }
}
