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

//! Result file discovery and size-checked reads.

use crate::error::{AnalysisError, IngestError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// List result files directly under `dir` whose name ends with `suffix`.
///
/// Paths are returned sorted so ingestion order, and everything derived from
/// it, is stable across platforms.
///
/// # Errors
///
/// - [`AnalysisError::ResultsDirMissing`] if `dir` does not exist
/// - [`AnalysisError::ResultsDirUnreadable`] if it is not a directory or cannot be listed
pub fn discover_result_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(AnalysisError::ResultsDirMissing {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(AnalysisError::ResultsDirUnreadable {
            path: dir.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| AnalysisError::unreadable(dir, e))? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        let path = entry.path();
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(suffix));
        if matches && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    debug!(dir = %dir.display(), count = files.len(), "discovered result files");
    Ok(files)
}

/// Read a result file, refusing files larger than `max_size` bytes.
pub fn read_source(path: &Path, max_size: u64) -> std::result::Result<Vec<u8>, IngestError> {
    let metadata = fs::metadata(path).map_err(IngestError::io)?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            actual: metadata.len(),
            max: max_size,
        });
    }
    fs::read(path).map_err(IngestError::io)
}

/// Identifier of a source file in records and diagnostics: its file name.
pub fn source_id(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
