//! A simple CLI for the squigit library.

#![warn(clippy::all, clippy::pedantic)]

extern crate squigit_common;
use squigit_common::benchmark::{BenchmarkMode, get_benchmark_upper_bound};
use squigit_common::chain_stats::{get_chain_length_distribution, longest_chain};
use squigit_common::report::{StrategyReport, check_agreement, run_strategy};
use squigit_common::{CLIENT_VERSION, Strategy, TEN_MILLION};

use anyhow::Result;
use clap::Parser;
use log::debug;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Count starting numbers strictly below this bound
    #[arg(short = 'n', long, default_value_t = TEN_MILLION, env = "SQUIGIT_UPPER_BOUND")]
    upper_bound: u32,

    /// Run an offline benchmark instead (overrides the upper bound)
    #[arg(short, long, env = "SQUIGIT_BENCHMARK")]
    benchmark: Option<BenchmarkMode>,

    /// Only run these strategies (they still run in the usual order)
    #[arg(
        short,
        long = "strategy",
        value_enum,
        value_delimiter = ',',
        env = "SQUIGIT_STRATEGY"
    )]
    strategies: Vec<Strategy>,

    /// Check that every strategy agrees, exiting with an error if not
    #[arg(long, env = "SQUIGIT_VALIDATE")]
    validate: bool,

    /// Also print how many steps chains take to settle
    #[arg(long, env = "SQUIGIT_CHAIN_STATS")]
    chain_stats: bool,

    /// Print results as JSON lines
    #[arg(long, env = "SQUIGIT_JSON")]
    json: bool,

    /// Only print the results
    #[arg(short, long, env = "SQUIGIT_QUIET")]
    quiet: bool,

    /// Show additional output
    #[arg(short, long, env = "SQUIGIT_VERBOSE")]
    verbose: bool,
}

/// The strategies to run, always in the fixed order of `Strategy::ALL`.
/// An empty selection means all of them.
fn selected_strategies(selection: &[Strategy]) -> Vec<Strategy> {
    Strategy::ALL
        .into_iter()
        .filter(|strategy| selection.is_empty() || selection.contains(strategy))
        .collect()
}

/// Print a single report in the requested format.
fn print_report(report: &StrategyReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

/// Print the distribution of chain lengths below the upper bound.
fn print_chain_stats(upper_bound: u32, json: bool) -> Result<()> {
    let distribution = get_chain_length_distribution(upper_bound);

    if json {
        println!("{}", serde_json::to_string(&distribution)?);
        return Ok(());
    }

    println!("Chain lengths below {upper_bound}:");
    for bin in &distribution {
        println!("  {:>3} steps: {}", bin.steps, bin.count);
    }
    if let Some(longest) = longest_chain(&distribution) {
        println!("Longest chain: {longest} steps");
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let upper_bound = cli
        .benchmark
        .map_or(cli.upper_bound, get_benchmark_upper_bound);
    let strategies = selected_strategies(&cli.strategies);
    debug!("Running {strategies:?} below {upper_bound}");

    if !cli.quiet && !cli.json {
        if let Some(benchmark) = cli.benchmark {
            println!("Beginning benchmark:  {benchmark}");
        }
        println!(
            "Squigit Client v{CLIENT_VERSION} counting starting numbers below {upper_bound} that arrive at 89."
        );
    }
    if cli.verbose {
        println!("CLI Inputs: {cli:?}");
    }

    // Run each strategy in order, printing as soon as it finishes
    let mut reports = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let report = run_strategy(strategy, upper_bound)?;
        print_report(&report, cli.json)?;
        reports.push(report);
    }

    if cli.verbose {
        println!("Reports: {}", serde_json::to_string_pretty(&reports)?);
    }

    if cli.validate {
        let count = check_agreement(&reports)?;
        if !cli.quiet && !cli.json {
            println!(
                "Validation passed! All {} strategies counted {count}.",
                reports.len()
            );
        }
    }

    if cli.chain_stats {
        print_chain_stats(upper_bound, cli.json)?;
    }

    Ok(())
}

fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Set up logger
    env_logger::init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
