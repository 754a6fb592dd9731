// Dweve Microbench - Micro-benchmark harness
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

//! JSON export for benchmark reports.

use crate::reporters::types::BenchmarkReport;
use std::fs;
use std::io;
use std::path::Path;

/// Serializes a report as pretty-printed JSON.
pub fn to_json(report: &BenchmarkReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Exports benchmark report as JSON.
///
/// # Arguments
///
/// * `report` - The benchmark report to export
/// * `path` - Output file path
pub fn export_json(report: &BenchmarkReport, path: &Path) -> io::Result<()> {
    let json = to_json(report).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collector::CollectionDelta;
    use crate::core::measurement::BenchmarkResult;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_json() {
        let mut report = BenchmarkReport::new("Test");
        report.add_result(
            BenchmarkResult::from_run(Duration::from_millis(12), CollectionDelta::default(), 4)
                .with_name("op"),
        );
        let temp = NamedTempFile::new().unwrap();

        export_json(&report, temp.path()).unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        let parsed: BenchmarkReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, report);
        assert!(content.contains("\"average_ms\": 3"));
    }
}
