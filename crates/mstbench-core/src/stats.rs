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

//! Descriptive statistics over samples.
//!
//! Inputs are sorted before any summation so a reduction yields the same bits
//! regardless of the order records arrived in.

use crate::metrics::MetricValue;
use serde::Serialize;

/// Statistical summary of one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Number of samples.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n-1); undefined for a single sample.
    pub stddev: MetricValue,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
}

impl Summary {
    /// Summarize `values`. Returns `None` for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let sorted = sorted(values);
        let (&min, &max) = (sorted.first()?, sorted.last()?);
        let mean = sum(&sorted) / sorted.len() as f64;

        Some(Self {
            count: sorted.len(),
            mean,
            stddev: sample_stddev(&sorted, mean),
            min,
            max,
        })
    }
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(sum(&sorted(values)) / values.len() as f64)
}

fn sample_stddev(sorted: &[f64], mean: f64) -> MetricValue {
    if sorted.len() < 2 {
        return MetricValue::Undefined;
    }
    let squares: Vec<f64> = sorted.iter().map(|x| (x - mean) * (x - mean)).collect();
    let variance = sum(&squares) / (sorted.len() - 1) as f64;
    MetricValue::from(variance.sqrt())
}

fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut v = values.to_vec();
    v.sort_by(f64::total_cmp);
    v
}
