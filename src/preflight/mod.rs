//! Checks run before any probe, to flag host state that skews numbers.
//!
//! # Checks Performed
//!
//! - **Governor**: the pinned core is not on the `performance` governor
//! - **Clock**: the pinned core is below 90% of its maximum frequency
//! - **Sibling**: the pinned core's SMT sibling is busy
//! - **Timer**: clock steps are large next to the ops in one timed body
//!
//! Every warning is informational; none of them stops a run.

mod system;

pub use system::{system_check, SystemWarning};

use serde::{Deserialize, Serialize};

use crate::measurement::Timer;

/// Per-op timer error above which a run is flagged.
pub const MAX_PER_OP_ERROR_NS: f64 = 0.01;

/// Fewest groups any probe body executes per loop trip.
pub const MIN_GROUPS_PER_TRIP: u64 = 10;

/// Result of running all preflight checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreflightResult {
    /// All warnings collected, in check order.
    pub warnings: Vec<SystemWarning>,
}

impl PreflightResult {
    /// Check if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Human-readable description of every warning.
    pub fn descriptions(&self) -> impl Iterator<Item = String> + '_ {
        self.warnings.iter().map(SystemWarning::description)
    }
}

/// Run all preflight checks for a run pinned to `core` with `runs` loop
/// trips per body.
pub fn run_all_checks(core: usize, runs: u64) -> PreflightResult {
    let mut warnings = system_check(core);
    if let Some(warning) = timer_check(Timer::resolution_ns(), runs) {
        warnings.push(warning);
    }
    PreflightResult { warnings }
}

/// One clock step spread over the smallest body's operation count.
fn per_op_error_ns(resolution_ns: f64, runs: u64) -> f64 {
    let ops = runs.saturating_mul(MIN_GROUPS_PER_TRIP).max(1);
    resolution_ns / ops as f64
}

fn timer_check(resolution_ns: f64, runs: u64) -> Option<SystemWarning> {
    let per_op_error_ns = per_op_error_ns(resolution_ns, runs);
    (per_op_error_ns > MAX_PER_OP_ERROR_NS).then_some(SystemWarning::CoarseTimer {
        resolution_ns,
        per_op_error_ns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_RUNS;

    #[test]
    fn test_default_runs_hide_a_microsecond_clock() {
        assert!(timer_check(1_000.0, DEFAULT_RUNS).is_none());
    }

    #[test]
    fn test_short_runs_expose_a_coarse_clock() {
        let warning = timer_check(1_000.0, 1_000).unwrap();
        assert_eq!(
            warning,
            SystemWarning::CoarseTimer {
                resolution_ns: 1_000.0,
                per_op_error_ns: 0.1,
            }
        );
        assert!(timer_check(40.0, 1_000).is_none());
    }

    #[test]
    fn test_zero_runs_do_not_divide_by_zero() {
        assert_eq!(per_op_error_ns(50.0, 0), 50.0);
    }

    #[test]
    fn test_run_all_checks_does_not_panic() {
        let result = run_all_checks(0, DEFAULT_RUNS);
        assert_eq!(result.descriptions().count(), result.warnings.len());
    }
}
