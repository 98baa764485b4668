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

//! The load, aggregate, report pipeline.

use crate::aggregate::{AggregateStats, Aggregator, GroupBy};
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::parser::{Diagnostic, Ingest, RecordParser};
use crate::record::{BenchmarkRecord, ComparisonPair};
use crate::report::format_report;
use serde::Serialize;
use tracing::info;

/// Everything one analysis run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Valid records, in source order.
    pub records: Vec<BenchmarkRecord>,
    /// Skipped files and entries.
    pub diagnostics: Vec<Diagnostic>,
    /// Statistics over every record.
    pub overall: AggregateStats,
    /// One row per non-empty size category, ascending.
    pub categories: Vec<AggregateStats>,
}

impl Analysis {
    /// Load `config.results_dir` and aggregate it.
    ///
    /// # Errors
    ///
    /// Directory preconditions fail before any parsing; an ingestion that
    /// yields no valid record fails with [`AnalysisError::NoRecords`].
    pub fn run(config: &AnalysisConfig) -> Result<Self> {
        let ingest = RecordParser::new(config.clone()).load()?;
        Self::from_ingest(ingest, config.pair)
    }

    /// Aggregate an already parsed batch.
    pub fn from_ingest(ingest: Ingest, pair: ComparisonPair) -> Result<Self> {
        if ingest.is_empty() {
            return Err(AnalysisError::NoRecords);
        }

        let aggregator = Aggregator::new(pair);
        let overall = aggregator.summarize(&ingest.records)?;
        let categories = aggregator.aggregate(&ingest.records, GroupBy::Category);
        info!(
            records = overall.count,
            categories = categories.len(),
            "aggregation complete"
        );

        Ok(Self {
            records: ingest.records,
            diagnostics: ingest.diagnostics,
            overall,
            categories,
        })
    }

    /// Overall row followed by the category rows.
    pub fn rows(&self) -> Vec<AggregateStats> {
        std::iter::once(self.overall.clone())
            .chain(self.categories.iter().cloned())
            .collect()
    }

    /// The text report.
    pub fn report(&self) -> String {
        format_report(&self.overall, &self.categories)
    }
}
