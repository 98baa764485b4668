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


//! Structured error types for the MSTBench CLI.
//!
//! Every command returns `Result<(), CliError>`; `main` prints the error and
//! maps it to a process exit code with [`CliError::exit_code`].

use mstbench_core::AnalysisError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a run that loaded no valid record.
pub const EXIT_NO_RECORDS: u8 = 2;

/// Exit code for every other failure.
pub const EXIT_FAILURE: u8 = 1;

/// The error type of CLI commands.
///
/// # Examples
///
/// ```rust,no_run
/// use mstbench_cli::error::CliError;
///
/// fn save(path: &str, content: &str) -> Result<(), CliError> {
///     std::fs::write(path, content).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Loading or aggregating the results failed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// Writing an output file failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// JSON serialization failed.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// Validation found skipped files or entries.
    #[error("validation failed: {count} file(s) or entries were skipped")]
    DiagnosticsFound {
        /// Number of diagnostics
        count: usize,
    },

    /// Invalid combination of arguments.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Process exit code for this error.
    ///
    /// An empty result set gets its own code so scripts can tell "nothing to
    /// analyze" apart from a broken run.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Analysis(AnalysisError::NoRecords) => EXIT_NO_RECORDS,
            _ => EXIT_FAILURE,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "out.csv",
            io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("out.csv"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn test_analysis_error_is_transparent() {
        let err = CliError::from(AnalysisError::NoRecords);
        assert_eq!(err.to_string(), AnalysisError::NoRecords.to_string());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::from(AnalysisError::NoRecords).exit_code(), EXIT_NO_RECORDS);
        assert_eq!(CliError::DiagnosticsFound { count: 3 }.exit_code(), EXIT_FAILURE);
        assert_eq!(
            CliError::from(AnalysisError::ResultsDirMissing { path: "x".into() }).exit_code(),
            EXIT_FAILURE
        );
        assert_eq!(CliError::invalid_input("bad").exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(CliError::from(json_err), CliError::JsonFormat { .. }));
    }
}
