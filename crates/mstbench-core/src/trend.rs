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

//! Least-squares scaling trends of time and operations against graph size.

use crate::record::{Algorithm, AlgorithmRun, BenchmarkRecord};
use serde::Serialize;

/// `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendLine {
    /// Change in y per unit of x.
    pub slope: f64,
    /// Value of y at x = 0.
    pub intercept: f64,
}

/// Fit a line through `points` by ordinary least squares.
///
/// Returns `None` for fewer than two points or when every x is equal.
pub fn fit_line(points: &[(f64, f64)]) -> Option<TrendLine> {
    if points.len() < 2 {
        return None;
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let n = sorted.len() as f64;
    let mean_x = sorted.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = sorted.iter().map(|p| p.1).sum::<f64>() / n;

    let sxx: f64 = sorted.iter().map(|p| (p.0 - mean_x).powi(2)).sum();
    let sxy: f64 = sorted
        .iter()
        .map(|p| (p.0 - mean_x) * (p.1 - mean_y))
        .sum();

    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    let line = TrendLine {
        slope,
        intercept: mean_y - slope * mean_x,
    };
    (line.slope.is_finite() && line.intercept.is_finite()).then_some(line)
}

/// Scaling trends of one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScalingTrends {
    /// Milliseconds per additional vertex.
    pub time_vs_vertices: Option<TrendLine>,
    /// Milliseconds per additional edge.
    pub time_vs_edges: Option<TrendLine>,
    /// Operations per additional vertex.
    pub operations_vs_vertices: Option<TrendLine>,
    /// Operations per additional edge.
    pub operations_vs_edges: Option<TrendLine>,
}

impl ScalingTrends {
    /// Fit every trend of `algorithm` over `records`.
    pub fn fit<'a, I>(records: I, algorithm: Algorithm) -> Self
    where
        I: IntoIterator<Item = &'a BenchmarkRecord>,
    {
        let samples: Vec<(&BenchmarkRecord, &AlgorithmRun)> = records
            .into_iter()
            .filter_map(|r| r.run(algorithm).map(|run| (r, run)))
            .collect();

        let series = |x: fn(&BenchmarkRecord) -> f64, y: fn(&AlgorithmRun) -> f64| {
            let points: Vec<(f64, f64)> = samples.iter().map(|(r, run)| (x(r), y(run))).collect();
            fit_line(&points)
        };

        Self {
            time_vs_vertices: series(|r| r.vertices as f64, |run| run.execution_time_ms),
            time_vs_edges: series(|r| r.edges as f64, |run| run.execution_time_ms),
            operations_vs_vertices: series(|r| r.vertices as f64, |run| run.operations_count as f64),
            operations_vs_edges: series(|r| r.edges as f64, |run| run.operations_count as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_exact_line() {
        let line = fit_line(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]).unwrap();
        assert!((line.slope - 2.0).abs() < 1e-12);
        assert!((line.intercept - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_fit_degenerate() {
        assert!(fit_line(&[]).is_none());
        assert!(fit_line(&[(1.0, 1.0)]).is_none());
        assert!(fit_line(&[(3.0, 1.0), (3.0, 9.0)]).is_none());
    }

    #[test]
    fn test_scaling_trends_from_records() {
        let records: Vec<BenchmarkRecord> = (1..=4u64)
            .map(|i| {
                BenchmarkRecord::new("f", i.to_string(), i * 10, i * 20).with_run(
                    Algorithm::Prim,
                    AlgorithmRun::new(0.0, i as f64 * 2.0, i * 100),
                )
            })
            .collect();

        let trends = ScalingTrends::fit(&records, Algorithm::Prim);
        let slope = trends.time_vs_vertices.unwrap().slope;
        assert!((slope - 0.2).abs() < 1e-12);
        let ops = trends.operations_vs_edges.unwrap().slope;
        assert!((ops - 5.0).abs() < 1e-12);

        let missing = ScalingTrends::fit(&records, Algorithm::Kruskal);
        assert_eq!(missing, ScalingTrends::default());
    }
}
