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

//! Analysis configuration.
//!
//! The results directory and every limit are explicit values handed to the
//! parser at construction; nothing is resolved against the working directory
//! at a distance.

use crate::record::ComparisonPair;
use std::path::PathBuf;

/// Default location of solver output, relative to the analysis tool.
pub const DEFAULT_RESULTS_DIR: &str = "../results";

/// Only files whose name ends with this suffix are ingested.
pub const DEFAULT_FILE_SUFFIX: &str = "_results.json";

/// Default maximum size of one result file (256 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`], in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "MSTBENCH_MAX_FILE_SIZE";

/// File count from which ingestion runs on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 8;

/// Configuration of one analysis run.
///
/// # Example
///
/// ```no_run
/// use mstbench_core::config::AnalysisConfig;
///
/// let config = AnalysisConfig::new("results")
///     .with_suffix("_results.json")
///     .with_parallel_threshold(4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Directory scanned for result files.
    pub results_dir: PathBuf,
    /// Required file-name suffix.
    pub file_suffix: String,
    /// Files larger than this are skipped with a diagnostic.
    pub max_file_size: u64,
    /// Minimum number of files before parsing in parallel. 0 disables it.
    pub parallel_threshold: usize,
    /// Direction of every ratio.
    pub pair: ComparisonPair,
}

impl AnalysisConfig {
    /// Create a configuration for `results_dir` with default limits.
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
            file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
            max_file_size: resolve_max_file_size(std::env::var(MAX_FILE_SIZE_ENV).ok()),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            pair: ComparisonPair::default(),
        }
    }

    /// Sets the required file-name suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.file_suffix = suffix.into();
        self
    }

    /// Sets the per-file size limit.
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Sets the parallel ingestion threshold.
    pub fn with_parallel_threshold(mut self, files: usize) -> Self {
        self.parallel_threshold = files;
        self
    }

    /// Sets the comparison direction.
    pub fn with_pair(mut self, pair: ComparisonPair) -> Self {
        self.pair = pair;
        self
    }

    /// Whether `file_count` files should be parsed in parallel.
    pub fn parallel_for(&self, file_count: usize) -> bool {
        self.parallel_threshold > 0 && file_count >= self.parallel_threshold
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RESULTS_DIR)
    }
}

/// Interpret the raw value of [`MAX_FILE_SIZE_ENV`].
fn resolve_max_file_size(raw: Option<String>) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|&bytes| bytes > 0)
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Algorithm;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.results_dir, PathBuf::from(DEFAULT_RESULTS_DIR));
        assert_eq!(config.file_suffix, DEFAULT_FILE_SUFFIX);
        assert_eq!(config.pair, ComparisonPair::default());
    }

    #[test]
    fn test_builders() {
        let pair = ComparisonPair::new(Algorithm::Kruskal, Algorithm::Prim);
        let config = AnalysisConfig::new("out")
            .with_suffix(".json")
            .with_max_file_size(1024)
            .with_parallel_threshold(2)
            .with_pair(pair);
        assert_eq!(config.results_dir, PathBuf::from("out"));
        assert_eq!(config.file_suffix, ".json");
        assert_eq!(config.max_file_size, 1024);
        assert_eq!(config.pair, pair);
    }

    #[test]
    fn test_parallel_for() {
        let config = AnalysisConfig::default().with_parallel_threshold(3);
        assert!(!config.parallel_for(2));
        assert!(config.parallel_for(3));
        assert!(!config.with_parallel_threshold(0).parallel_for(100));
    }

    #[test]
    fn test_resolve_max_file_size() {
        assert_eq!(resolve_max_file_size(None), DEFAULT_MAX_FILE_SIZE);
        assert_eq!(resolve_max_file_size(Some("4096".into())), 4096);
        assert_eq!(resolve_max_file_size(Some("lots".into())), DEFAULT_MAX_FILE_SIZE);
        assert_eq!(resolve_max_file_size(Some("0".into())), DEFAULT_MAX_FILE_SIZE);
    }
}
