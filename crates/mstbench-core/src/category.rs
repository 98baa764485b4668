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

//! Graph size categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed, ordered partition of vertex counts.
///
/// Lower bounds are exclusive, upper bounds inclusive. The derived `Ord`
/// follows declaration order, which is the report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeCategory {
    /// 0 < n <= 50
    Small,
    /// 50 < n <= 300
    Medium,
    /// 300 < n <= 1000
    Large,
    /// n > 1000
    ExtraLarge,
}

impl SizeCategory {
    /// All categories in ascending order.
    pub const ALL: [SizeCategory; 4] = [
        SizeCategory::Small,
        SizeCategory::Medium,
        SizeCategory::Large,
        SizeCategory::ExtraLarge,
    ];

    /// `(exclusive lower, inclusive upper)`; `None` is unbounded.
    pub fn bounds(self) -> (u64, Option<u64>) {
        match self {
            SizeCategory::Small => (0, Some(50)),
            SizeCategory::Medium => (50, Some(300)),
            SizeCategory::Large => (300, Some(1000)),
            SizeCategory::ExtraLarge => (1000, None),
        }
    }

    /// Short name.
    pub fn name(self) -> &'static str {
        match self {
            SizeCategory::Small => "Small",
            SizeCategory::Medium => "Medium",
            SizeCategory::Large => "Large",
            SizeCategory::ExtraLarge => "Extra Large",
        }
    }

    /// Name with its range, as printed in reports.
    pub fn label(self) -> &'static str {
        match self {
            SizeCategory::Small => "Small (n<=50)",
            SizeCategory::Medium => "Medium (51-300)",
            SizeCategory::Large => "Large (301-1000)",
            SizeCategory::ExtraLarge => "Extra Large (n>1000)",
        }
    }

    /// True when `vertices` lies within [`bounds`](Self::bounds). Small also
    /// admits 0.
    pub fn contains(self, vertices: u64) -> bool {
        let (lower, upper) = self.bounds();
        let above = self == SizeCategory::Small || vertices > lower;
        above && upper.map_or(true, |upper| vertices <= upper)
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Map a vertex count to its size category.
///
/// Categories are scanned in ascending order and the first whose upper bound
/// admits `vertices` wins, so every integer (including 0) classifies.
pub fn classify(vertices: u64) -> SizeCategory {
    SizeCategory::ALL
        .into_iter()
        .find(|category| match category.bounds().1 {
            Some(upper) => vertices <= upper,
            None => true,
        })
        .unwrap_or(SizeCategory::ExtraLarge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(50), SizeCategory::Small);
        assert_eq!(classify(51), SizeCategory::Medium);
        assert_eq!(classify(300), SizeCategory::Medium);
        assert_eq!(classify(301), SizeCategory::Large);
        assert_eq!(classify(1000), SizeCategory::Large);
        assert_eq!(classify(1001), SizeCategory::ExtraLarge);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify(0), SizeCategory::Small);
        assert_eq!(classify(1), SizeCategory::Small);
        assert_eq!(classify(u64::MAX), SizeCategory::ExtraLarge);
    }

    #[test]
    fn test_bounds_are_contiguous() {
        for pair in SizeCategory::ALL.windows(2) {
            assert_eq!(pair[0].bounds().1, Some(pair[1].bounds().0));
        }
    }

    #[test]
    fn test_order_matches_declaration() {
        let mut sorted = SizeCategory::ALL;
        sorted.sort();
        assert_eq!(sorted, SizeCategory::ALL);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SizeCategory::ExtraLarge.name(), "Extra Large");
        assert_eq!(SizeCategory::Medium.label(), "Medium (51-300)");
        assert!(SizeCategory::Large.contains(1000));
        assert!(!SizeCategory::Large.contains(1001));
    }
}
