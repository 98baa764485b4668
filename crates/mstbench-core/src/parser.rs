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

//! Result file ingestion.
//!
//! Turns raw solver output into validated [`BenchmarkRecord`]s. Failures are
//! isolated at two levels:
//!
//! - **File**: malformed JSON or a missing `results` list skips the whole file
//!   with exactly one [`Diagnostic`].
//! - **Entry**: each element of `results` is validated on its own. A bad entry
//!   yields one diagnostic carrying its index and the remaining entries are
//!   still ingested.
//!
//! No batch call ever returns an ingestion error; only the directory
//! precondition in [`RecordParser::load`] can fail.
//!
//! # Input shape
//!
//! ```text
//! { "results": [
//!     { "graph_id": 1,
//!       "input_stats": { "vertices": 10, "edges": 20 },
//!       "prim":    { "total_cost": 42, "execution_time_ms": 0.8, "operations_count": 310 },
//!       "kruskal": { "total_cost": 42, "execution_time_ms": 0.5, "operations_count": 190 } } ] }
//! ```

use crate::config::AnalysisConfig;
use crate::discovery::{discover_result_files, read_source, source_id};
use crate::error::{IngestError, Result};
use crate::record::{Algorithm, AlgorithmRun, BenchmarkRecord};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

/// A skipped file or entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Source file identifier.
    pub source: String,
    /// Index within `results`, or `None` when the whole file was skipped.
    pub entry: Option<usize>,
    /// Why it was skipped.
    pub error: IngestError,
}

impl Diagnostic {
    fn file(source: &str, error: IngestError) -> Self {
        Self {
            source: source.to_string(),
            entry: None,
            error,
        }
    }

    fn entry(source: &str, index: usize, error: IngestError) -> Self {
        Self {
            source: source.to_string(),
            entry: Some(index),
            error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entry {
            Some(index) => write!(f, "{} [entry {}]: {}", self.source, index, self.error),
            None => write!(f, "{}: {}", self.source, self.error),
        }
    }
}

/// Outcome of parsing one source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSource {
    /// Valid records, in entry order.
    pub records: Vec<BenchmarkRecord>,
    /// Skipped file or entries.
    pub diagnostics: Vec<Diagnostic>,
}

/// Outcome of a whole ingestion batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ingest {
    /// Valid records from every source, in source order.
    pub records: Vec<BenchmarkRecord>,
    /// Every diagnostic, in source order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of sources looked at.
    pub sources: usize,
}

impl Ingest {
    fn push(&mut self, parsed: ParsedSource) {
        self.records.extend(parsed.records);
        self.diagnostics.extend(parsed.diagnostics);
        self.sources += 1;
    }

    /// True when no valid record was ingested.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Deserialize)]
struct RawInputStats {
    vertices: u64,
    edges: u64,
}

/// Parses solver result files into benchmark records.
#[derive(Debug, Clone)]
pub struct RecordParser {
    config: AnalysisConfig,
}

impl RecordParser {
    /// Create a parser bound to `config`.
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// The configuration this parser was built with.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Discover, read and parse every result file of the configured directory.
    ///
    /// # Errors
    ///
    /// Only the directory precondition fails; unreadable or oversized files
    /// become diagnostics.
    pub fn load(&self) -> Result<Ingest> {
        let files = discover_result_files(&self.config.results_dir, &self.config.file_suffix)?;

        let parsed: Vec<ParsedSource> = if self.config.parallel_for(files.len()) {
            debug!(files = files.len(), "parsing result files in parallel");
            files.par_iter().map(|path| self.load_file(path)).collect()
        } else {
            files.iter().map(|path| self.load_file(path)).collect()
        };

        let ingest = collect(parsed);
        info!(
            files = ingest.sources,
            records = ingest.records.len(),
            diagnostics = ingest.diagnostics.len(),
            "ingestion finished"
        );
        Ok(ingest)
    }

    /// Parse already-read sources given as `(identifier, bytes)` pairs.
    pub fn parse_sources<S, B>(&self, sources: &[(S, B)]) -> Ingest
    where
        S: AsRef<str> + Sync,
        B: AsRef<[u8]> + Sync,
    {
        let parse = |(source, bytes): &(S, B)| self.parse_source(source.as_ref(), bytes.as_ref());

        let parsed: Vec<ParsedSource> = if self.config.parallel_for(sources.len()) {
            sources.par_iter().map(parse).collect()
        } else {
            sources.iter().map(parse).collect()
        };
        collect(parsed)
    }

    /// Parse one raw blob.
    pub fn parse_source(&self, source: &str, bytes: &[u8]) -> ParsedSource {
        let mut parsed = ParsedSource::default();

        let entries = match results_list(bytes) {
            Ok(entries) => entries,
            Err(error) => {
                warn!(source, %error, "skipping result file");
                parsed.diagnostics.push(Diagnostic::file(source, error));
                return parsed;
            }
        };

        for (index, entry) in entries.iter().enumerate() {
            match parse_entry(source, entry) {
                Ok(record) => {
                    if record.exceeds_edge_bound() {
                        warn!(
                            source,
                            graph_id = %record.graph_id,
                            vertices = record.vertices,
                            edges = record.edges,
                            "edge count exceeds simple-graph bound"
                        );
                    }
                    parsed.records.push(record);
                }
                Err(error) => {
                    warn!(source, entry = index, %error, "skipping result entry");
                    parsed.diagnostics.push(Diagnostic::entry(source, index, error));
                }
            }
        }

        debug!(
            source,
            records = parsed.records.len(),
            skipped = parsed.diagnostics.len(),
            "parsed result file"
        );
        parsed
    }

    fn load_file(&self, path: &Path) -> ParsedSource {
        let source = source_id(path);
        match read_source(path, self.config.max_file_size) {
            Ok(bytes) => self.parse_source(&source, &bytes),
            Err(error) => {
                warn!(source = %source, %error, "cannot read result file");
                ParsedSource {
                    records: Vec::new(),
                    diagnostics: vec![Diagnostic::file(&source, error)],
                }
            }
        }
    }
}

fn collect(parsed: Vec<ParsedSource>) -> Ingest {
    let mut ingest = Ingest::default();
    for source in parsed {
        ingest.push(source);
    }
    ingest
}

fn results_list(bytes: &[u8]) -> std::result::Result<Vec<Value>, IngestError> {
    let document: Value = serde_json::from_slice(bytes)?;
    match document {
        Value::Object(mut root) => match root.remove("results") {
            Some(Value::Array(entries)) => Ok(entries),
            Some(_) => Err(IngestError::invalid("results", "expected a list")),
            None => Err(IngestError::MissingResults),
        },
        _ => Err(IngestError::MissingResults),
    }
}

fn parse_entry(source: &str, entry: &Value) -> std::result::Result<BenchmarkRecord, IngestError> {
    let object = entry
        .as_object()
        .ok_or_else(|| IngestError::invalid("entry", "expected an object"))?;

    let graph_id = graph_id(object)?;

    let stats: RawInputStats = decode(required(object, "input_stats")?, "input_stats")?;
    if stats.vertices == 0 {
        return Err(IngestError::invalid(
            "input_stats.vertices",
            "must be at least 1",
        ));
    }

    let mut record = BenchmarkRecord::new(source, graph_id, stats.vertices, stats.edges);
    for algorithm in Algorithm::ALL {
        let run = algorithm_run(object, algorithm)?;
        record = record.with_run(algorithm, run);
    }
    Ok(record)
}

fn graph_id(object: &Map<String, Value>) -> std::result::Result<String, IngestError> {
    match required(object, "graph_id")? {
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) if !s.is_empty() => Ok(s.clone()),
        _ => Err(IngestError::invalid(
            "graph_id",
            "expected a number or a non-empty string",
        )),
    }
}

fn algorithm_run(
    object: &Map<String, Value>,
    algorithm: Algorithm,
) -> std::result::Result<AlgorithmRun, IngestError> {
    let key = algorithm.key();
    let run: AlgorithmRun = decode(required(object, key)?, key)?;

    if !run.execution_time_ms.is_finite() || run.execution_time_ms < 0.0 {
        return Err(IngestError::invalid(
            format!("{}.execution_time_ms", key),
            "must be a finite, non-negative number",
        ));
    }
    if !run.total_cost.is_finite() {
        return Err(IngestError::invalid(
            format!("{}.total_cost", key),
            "must be a finite number",
        ));
    }
    Ok(run)
}

fn required<'a>(
    object: &'a Map<String, Value>,
    field: &str,
) -> std::result::Result<&'a Value, IngestError> {
    match object.get(field) {
        Some(Value::Null) | None => Err(IngestError::missing(field)),
        Some(value) => Ok(value),
    }
}

fn decode<'a, T: Deserialize<'a>>(
    value: &'a Value,
    field: &str,
) -> std::result::Result<T, IngestError> {
    T::deserialize(value).map_err(|e| IngestError::invalid(field, e.to_string()))
}
