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

//! Built-in workloads the driver can measure.

use crate::error::CliError;
use std::hint::black_box;

/// A named, repeatable unit of work.
#[derive(Debug, Clone, Copy)]
pub struct Workload {
    /// Name used on the command line.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// The operation itself.
    pub run: fn(),
}

fn substring_contains() {
    let haystack = black_box("ABCDEFG");
    black_box(haystack.contains("BCD"));
}

fn substring_find() {
    let haystack = black_box("ABCDEFG");
    black_box(haystack.find("BCD"));
}

fn format_string() {
    black_box(format!("{}-{}", black_box("ABC"), black_box(42)));
}

fn push_str_with_capacity() {
    let mut s = String::with_capacity(16);
    s.push_str(black_box("ABC"));
    s.push('-');
    s.push_str(black_box("42"));
    black_box(s);
}

fn vec_push() {
    let mut v = Vec::new();
    for i in 0..32u32 {
        v.push(black_box(i));
    }
    black_box(v);
}

fn vec_with_capacity() {
    let mut v = Vec::with_capacity(32);
    for i in 0..32u32 {
        v.push(black_box(i));
    }
    black_box(v);
}

/// All built-in workloads.
pub const WORKLOADS: &[Workload] = &[
    Workload {
        name: "contains",
        description: "str::contains on a short literal",
        run: substring_contains,
    },
    Workload {
        name: "find",
        description: "str::find on a short literal",
        run: substring_find,
    },
    Workload {
        name: "format",
        description: "format! with two arguments",
        run: format_string,
    },
    Workload {
        name: "push-str",
        description: "String::with_capacity then push_str",
        run: push_str_with_capacity,
    },
    Workload {
        name: "vec-push",
        description: "32 pushes into a growing Vec",
        run: vec_push,
    },
    Workload {
        name: "vec-with-capacity",
        description: "32 pushes into a preallocated Vec",
        run: vec_with_capacity,
    },
];

/// Looks a workload up by name.
pub fn find_workload(name: &str) -> Result<&'static Workload, CliError> {
    WORKLOADS
        .iter()
        .find(|w| w.name == name)
        .ok_or_else(|| CliError::UnknownWorkload {
            name: name.to_string(),
            available: WORKLOADS
                .iter()
                .map(|w| w.name)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Resolves a list of names, or every workload when the list is empty.
pub fn resolve_workloads(names: &[String]) -> Result<Vec<&'static Workload>, CliError> {
    if names.is_empty() {
        return Ok(WORKLOADS.iter().collect());
    }
    names.iter().map(|name| find_workload(name)).collect()
}
