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


//! MSTBench Command Line Interface

use clap::Parser;
use colored::Colorize;
use mstbench_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// MSTBench - Prim vs Kruskal benchmark analysis
///
/// Reads the JSON result files written by the MST solvers and compares the
/// two algorithms overall and per graph size category.
///
/// # Examples
///
/// ```bash
/// # Text report over ../results
/// mstbench report
///
/// # JSON report over another directory
/// mstbench report -d runs/2025-06 --format json
///
/// # Tables for plotting
/// mstbench export --records graphs.csv --aggregates summary.csv
/// ```
#[derive(Parser)]
#[command(name = "mstbench")]
#[command(author, version, about = "MSTBench - Prim vs Kruskal benchmark analysis", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::from(e.exit_code())
        }
    }
}

// RUST_LOG takes precedence over --verbose.
fn init_logging(verbose: bool) {
    let default = if verbose { "mstbench=debug" } else { "mstbench=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
