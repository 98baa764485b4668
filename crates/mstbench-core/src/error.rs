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

//! Error types for result ingestion and analysis.
//!
//! Two layers of failure exist:
//!
//! - [`AnalysisError`] halts the pipeline. Only precondition failures (the
//!   results directory), the empty result set and export failures live here.
//! - [`IngestError`] describes why one file or one entry was skipped. These
//!   never escape a batch call; they are collected as diagnostics instead.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Terminal outcomes that stop the analysis pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The configured results directory does not exist.
    #[error("results directory '{}' not found", .path.display())]
    ResultsDirMissing {
        /// Directory that was looked up
        path: PathBuf,
    },

    /// The results directory exists but cannot be listed.
    #[error("results directory '{}' is not readable: {message}", .path.display())]
    ResultsDirUnreadable {
        /// Directory that was looked up
        path: PathBuf,
        /// Underlying reason
        message: String,
    },

    /// Ingestion produced zero valid records; there is nothing to analyze.
    #[error("nothing to analyze: no valid benchmark records were loaded")]
    NoRecords,

    /// Serializing an output table failed.
    #[error("export failed: {0}")]
    Export(String),
}

impl AnalysisError {
    /// Create an unreadable-directory error from an I/O error.
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ResultsDirUnreadable {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an export error.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}

/// Reason a result file or a single result entry was skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IngestError {
    /// The file could not be read.
    #[error("I/O error: {message}")]
    Io {
        /// Underlying reason
        message: String,
    },

    /// The file exceeds the configured size limit.
    #[error("file is too large ({actual} bytes, maximum allowed {max} bytes)")]
    FileTooLarge {
        /// Actual size in bytes
        actual: u64,
        /// Configured limit in bytes
        max: u64,
    },

    /// The blob is not well-formed JSON.
    #[error("malformed JSON: {message}")]
    Json {
        /// Parser message, including line and column
        message: String,
    },

    /// The document has no top-level `results` list.
    #[error("missing top-level \"results\" list")]
    MissingResults,

    /// A required field is absent.
    #[error("missing required field '{field}'")]
    MissingField {
        /// Dotted path of the field
        field: String,
    },

    /// A field is present but its value is unusable.
    #[error("invalid value for '{field}': {reason}")]
    InvalidField {
        /// Dotted path of the field
        field: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl IngestError {
    /// Create an I/O ingestion error.
    pub fn io(source: std::io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
        }
    }

    /// Create a missing-field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid-field error.
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_dir_missing_display() {
        let err = AnalysisError::ResultsDirMissing {
            path: PathBuf::from("../results"),
        };
        assert_eq!(err.to_string(), "results directory '../results' not found");
    }

    #[test]
    fn test_no_records_display() {
        assert!(AnalysisError::NoRecords
            .to_string()
            .starts_with("nothing to analyze"));
    }

    #[test]
    fn test_unreadable_keeps_reason() {
        let err = AnalysisError::unreadable(
            "/tmp/results",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/results"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_ingest_error_display() {
        assert_eq!(
            IngestError::missing("input_stats").to_string(),
            "missing required field 'input_stats'"
        );
        assert_eq!(
            IngestError::invalid("prim.execution_time_ms", "must be non-negative").to_string(),
            "invalid value for 'prim.execution_time_ms': must be non-negative"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: IngestError = json_err.into();
        assert!(matches!(err, IngestError::Json { .. }));
    }

    #[test]
    fn test_ingest_error_serializes_with_kind_tag() {
        let json = serde_json::to_value(IngestError::MissingResults).unwrap();
        assert_eq!(json["kind"], "missing_results");
    }
}
