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

//! Text rendering of aggregate statistics.
//!
//! The report is a pure function of its inputs. Overall statistics come
//! first, then one block per non-empty category in ascending size order; the
//! order of the `per_category` slice is ignored.

use crate::aggregate::{AggregateStats, AlgorithmStats, Scope, Verdict};
use crate::category::SizeCategory;
use crate::error::{AnalysisError, Result};
use crate::pipeline::Analysis;
use crate::record::{Algorithm, ComparisonPair};
use crate::trend::TrendLine;
use std::fmt;

const RULE_WIDTH: usize = 70;

/// Render the full comparison report.
pub fn format_report(overall: &AggregateStats, per_category: &[AggregateStats]) -> String {
    Report::new(overall, per_category).to_string()
}

/// Render a whole analysis as pretty JSON.
pub fn format_json(analysis: &Analysis) -> Result<String> {
    serde_json::to_string_pretty(analysis).map_err(|e| AnalysisError::export(e.to_string()))
}

/// Borrowed view of the statistics making up one report.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    overall: &'a AggregateStats,
    categories: Vec<&'a AggregateStats>,
}

impl<'a> Report<'a> {
    /// Select and order the rows to render.
    pub fn new(overall: &'a AggregateStats, per_category: &'a [AggregateStats]) -> Self {
        let categories = SizeCategory::ALL
            .into_iter()
            .filter_map(|category| {
                per_category
                    .iter()
                    .find(|row| row.scope == Scope::Category(category) && row.count > 0)
            })
            .collect();
        Self {
            overall,
            categories,
        }
    }

    fn write_basic(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = self.overall;
        writeln!(f, "\nBASIC STATISTICS:")?;
        writeln!(f, "   Total graphs analyzed: {}", o.count)?;
        writeln!(f, "   Vertices range: {} - {}", o.vertices.min, o.vertices.max)?;
        writeln!(f, "   Edges range: {} - {}", o.edges.min, o.edges.max)?;
        writeln!(f, "   Average graph density: {:.3}", o.mean_density)?;
        if o.edge_bound_violations > 0 {
            writeln!(
                f,
                "   Graphs exceeding the simple-graph edge bound: {}",
                o.edge_bound_violations
            )?;
        }
        Ok(())
    }

    fn write_performance(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nPERFORMANCE:")?;
        for (alg, stats) in ordered(self.overall) {
            writeln!(
                f,
                "   {} - Average time: {:.2} \u{b1} {:.2} ms",
                alg, stats.time.mean, stats.time.stddev
            )?;
        }
        for (alg, stats) in ordered(self.overall) {
            writeln!(
                f,
                "   {} - Average operations: {:.0} \u{b1} {:.0}",
                alg, stats.operations.mean, stats.operations.stddev
            )?;
        }
        for (alg, stats) in ordered(self.overall) {
            match &stats.efficiency {
                Some(eff) => writeln!(
                    f,
                    "   {} - Time per operation: {:.6} ms/op ({} of {} graphs)",
                    alg, eff.mean, eff.count, stats.operations.count
                )?,
                None => writeln!(f, "   {} - Time per operation: n/a (no operations counted)", alg)?,
            }
        }
        Ok(())
    }

    fn write_comparison(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = self.overall;
        let pair = o.pair;
        writeln!(f, "\nALGORITHM COMPARISON:")?;
        writeln!(f, "   Time ratio {}: {:.3}", pair, o.time_ratio)?;
        writeln!(f, "   Operations ratio {}: {:.3}", pair, o.operations_ratio)?;
        writeln!(f, "   Average per-graph time ratio: {:.3}", o.mean_time_ratio)?;
        writeln!(f, "   Average per-graph operations ratio: {:.3}", o.mean_operations_ratio)?;
        writeln!(f, "   CONCLUSION: {} on average", speed_sentence(o.time_verdict, pair))?;
        writeln!(f, "   {}", operations_sentence(o.operations_verdict, pair))
    }

    fn write_trends(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<_> = ordered(self.overall)
            .filter(|(_, s)| s.trends.time_vs_vertices.is_some() || s.trends.time_vs_edges.is_some())
            .collect();
        if rows.is_empty() {
            return Ok(());
        }

        writeln!(f, "\nSCALING TRENDS:")?;
        for (alg, stats) in rows {
            let t = &stats.trends;
            writeln!(
                f,
                "   {} - time slope: {} ms/vertex, {} ms/edge",
                alg,
                slope(t.time_vs_vertices, 4),
                slope(t.time_vs_edges, 6)
            )?;
            writeln!(
                f,
                "   {} - operations slope: {} ops/vertex, {} ops/edge",
                alg,
                slope(t.operations_vs_vertices, 1),
                slope(t.operations_vs_edges, 3)
            )?;
        }
        Ok(())
    }

    fn write_categories(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.categories.is_empty() {
            return Ok(());
        }

        writeln!(f, "\nPERFORMANCE BY SIZE CATEGORIES:")?;
        for row in &self.categories {
            let pair = row.pair;
            writeln!(f, "   {}:", row.scope)?;
            write!(f, "      Graphs: {}", row.count)?;
            for (alg, stats) in ordered(row) {
                write!(f, ", {}: {:.1}ms", alg, stats.time.mean)?;
            }
            writeln!(f)?;
            writeln!(f, "      {}", speed_sentence(row.time_verdict, pair))?;
        }
        Ok(())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{}", rule)?;
        writeln!(f, "DETAILED MST ALGORITHMS PERFORMANCE REPORT")?;
        writeln!(f, "{}", rule)?;

        self.write_basic(f)?;
        self.write_performance(f)?;
        self.write_comparison(f)?;
        self.write_trends(f)?;
        self.write_categories(f)?;

        writeln!(f, "{}", rule)
    }
}

/// Sentence describing which algorithm ran faster.
pub fn speed_sentence(verdict: Verdict, pair: ComparisonPair) -> String {
    match verdict {
        Verdict::FirstAhead { factor } => {
            format!("{} is {:.2}x faster than {}", pair.first, factor, pair.second)
        }
        Verdict::SecondAhead { factor } => {
            format!("{} is {:.2}x faster than {}", pair.second, factor, pair.first)
        }
        Verdict::Equal => format!("{} and {} are equally fast", pair.first, pair.second),
        Verdict::Undetermined => format!(
            "speed of {} and {} cannot be compared (zero or missing times)",
            pair.first, pair.second
        ),
    }
}

fn operations_sentence(verdict: Verdict, pair: ComparisonPair) -> String {
    match verdict {
        Verdict::FirstAhead { factor } => format!(
            "{} performs {:.2}x fewer operations than {}",
            pair.first, factor, pair.second
        ),
        Verdict::SecondAhead { factor } => format!(
            "{} performs {:.2}x fewer operations than {}",
            pair.second, factor, pair.first
        ),
        Verdict::Equal => format!(
            "{} and {} perform the same number of operations",
            pair.first, pair.second
        ),
        Verdict::Undetermined => "Operation counts cannot be compared".to_string(),
    }
}

fn ordered(stats: &AggregateStats) -> impl Iterator<Item = (Algorithm, &AlgorithmStats)> {
    Algorithm::ALL
        .into_iter()
        .filter_map(move |alg| stats.algorithm(alg).map(|s| (alg, s)))
}

fn slope(line: Option<TrendLine>, precision: usize) -> String {
    match line {
        Some(line) => format!("{:.*}", precision, line.slope),
        None => "n/a".to_string(),
    }
}
