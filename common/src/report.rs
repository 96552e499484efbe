//! Time strategies and compare their results.

use crate::Strategy;
use anyhow::{Context, Result, bail, ensure};
use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use std::fmt;
use std::time::Instant;

/// The outcome of running a single strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyReport {
    pub strategy: Strategy,
    pub upper_bound: u32,
    pub count: u64,
    pub elapsed_ms: u128,
    pub started_at: DateTime<Utc>,
}

impl fmt::Display for StrategyReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} result: {}, execution time in ms: {}",
            self.strategy, self.count, self.elapsed_ms
        )
    }
}

/// Run a strategy and measure how long it takes in wall-clock time.
///
/// # Errors
/// Returns an error if the strategy cannot handle the upper bound.
pub fn run_strategy(strategy: Strategy, upper_bound: u32) -> Result<StrategyReport> {
    let started_at = Utc::now();
    let start_time = Instant::now();

    let count = strategy
        .count(upper_bound)
        .with_context(|| format!("{strategy} failed below {upper_bound}"))?;

    let elapsed = start_time.elapsed();
    debug!("{strategy} finished in {elapsed:?} with count {count}");

    Ok(StrategyReport {
        strategy,
        upper_bound,
        count,
        elapsed_ms: elapsed.as_millis(),
        started_at,
    })
}

/// Check that every report counted the same thing, returning the shared count.
/// The first report is treated as the reference.
///
/// # Errors
/// Returns an error if there are no reports, if the reports cover different
/// upper bounds, or if any count differs from the reference.
pub fn check_agreement(reports: &[StrategyReport]) -> Result<u64> {
    let Some((reference, rest)) = reports.split_first() else {
        bail!("no reports to compare");
    };

    for report in rest {
        ensure!(
            report.upper_bound == reference.upper_bound,
            "{} ran below {} but {} ran below {}",
            reference.strategy,
            reference.upper_bound,
            report.strategy,
            report.upper_bound
        );
        ensure!(
            report.count == reference.count,
            "{} counted {} but {} counted {}",
            reference.strategy,
            reference.count,
            report.strategy,
            report.count
        );
    }

    Ok(reference.count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_report(strategy: Strategy, upper_bound: u32, count: u64) -> StrategyReport {
        StrategyReport {
            strategy,
            upper_bound,
            count,
            elapsed_ms: 0,
            started_at: Utc::now(),
        }
    }

    #[test_log::test]
    fn test_run_strategy() {
        let report = run_strategy(Strategy::Squigits, 100).unwrap();
        assert_eq!(report.strategy, Strategy::Squigits);
        assert_eq!(report.upper_bound, 100);
        assert_eq!(report.count, 80);
    }

    #[test_log::test]
    fn test_run_strategy_error() {
        let err = run_strategy(Strategy::Digits, 50).unwrap_err();
        assert!(format!("{err:#}").contains("power of ten"));
    }

    #[test]
    fn test_display() {
        let mut report = fake_report(Strategy::Digits, 10_000_000, 8_581_146);
        report.elapsed_ms = 6;
        assert_eq!(
            report.to_string(),
            "digits_method result: 8581146, execution time in ms: 6"
        );
    }

    #[test]
    fn test_serialize() {
        let report = fake_report(Strategy::BruteForceCached, 100, 80);
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["strategy"], "brute_force_cached");
        assert_eq!(json["upper_bound"], 100);
        assert_eq!(json["count"], 80);
    }

    #[test_log::test]
    fn test_check_agreement() {
        let reports: Vec<StrategyReport> = Strategy::ALL
            .into_iter()
            .map(|strategy| run_strategy(strategy, 1000).unwrap())
            .collect();
        assert_eq!(
            check_agreement(&reports).unwrap(),
            crate::chain_count::count_brute_force(1000)
        );
    }

    #[test]
    fn test_check_agreement_failures() {
        assert!(check_agreement(&[]).is_err());

        let disagree = [
            fake_report(Strategy::BruteForce, 100, 80),
            fake_report(Strategy::Digits, 100, 81),
        ];
        let err = check_agreement(&disagree).unwrap_err();
        assert!(err.to_string().contains("digits_method counted 81"));

        let different_bounds = [
            fake_report(Strategy::BruteForce, 100, 80),
            fake_report(Strategy::Squigits, 10, 80),
        ];
        assert!(check_agreement(&different_bounds).is_err());

        let single = [fake_report(Strategy::Squigits, 10, 7)];
        assert_eq!(check_agreement(&single).unwrap(), 7);
    }
}
