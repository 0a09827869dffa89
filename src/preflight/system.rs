//! Checks on the core a CPU run is pinned to.
//!
//! Every per-op figure is wall time divided by operations, so anything that
//! changes how fast the pinned core retires instructions shows up directly
//! in the result: a slow clock, a governor that may change it mid-run, or a
//! hyperthread sibling competing for the same ports.
//!
//! Linux exposes all of this through sysfs and `/proc/stat`; other
//! platforms report nothing.

#![cfg_attr(not(target_os = "linux"), allow(dead_code))]

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fraction of the maximum clock below which the core counts as slow.
pub const CLOCK_RATIO_FLOOR: f64 = 0.9;

/// Sibling busy fraction above which throughput numbers are suspect.
pub const SIBLING_BUSY_THRESHOLD: f64 = 0.10;

/// Window over which the sibling's activity is sampled.
pub const SIBLING_SAMPLE: Duration = Duration::from_millis(50);

/// Something about the pinned core that skews per-op figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemWarning {
    /// The core's cpufreq governor may move the clock during a run.
    GovernorNotPerformance {
        /// Pinned core.
        core: usize,
        /// Active governor.
        governor: String,
    },

    /// cpufreq exists for the core but could not be read.
    GovernorUnreadable {
        /// Pinned core.
        core: usize,
        /// I/O error text.
        reason: String,
    },

    /// The core is running below its maximum clock.
    ClockBelowMax {
        /// Pinned core.
        core: usize,
        /// `scaling_cur_freq`, kHz.
        current_khz: u64,
        /// `cpuinfo_max_freq`, kHz.
        max_khz: u64,
    },

    /// The core's SMT sibling was busy while sampled.
    BusySibling {
        /// Pinned core.
        core: usize,
        /// Logical CPU sharing the physical core.
        sibling: usize,
        /// Busy fraction over [`SIBLING_SAMPLE`].
        busy: f64,
    },

    /// Timer steps are large relative to the ops in one timed body.
    CoarseTimer {
        /// Smallest observed clock step.
        resolution_ns: f64,
        /// Worst-case error this adds to each per-op figure.
        per_op_error_ns: f64,
    },
}

impl SystemWarning {
    /// Human-readable description.
    pub fn description(&self) -> String {
        match self {
            SystemWarning::GovernorNotPerformance { core, governor } => format!(
                "core {core} uses the '{governor}' governor, so its clock may change \
                 between probes. Set with: sudo cpupower -c {core} frequency-set -g performance"
            ),
            SystemWarning::GovernorUnreadable { core, reason } => {
                format!("could not read the governor of core {core}: {reason}")
            }
            SystemWarning::ClockBelowMax {
                core,
                current_khz,
                max_khz,
            } => format!(
                "core {core} is at {} MHz of {} MHz; per-op ns may read up to {:.2}x high",
                current_khz / 1000,
                max_khz / 1000,
                slowdown(*current_khz, *max_khz)
            ),
            SystemWarning::BusySibling {
                core,
                sibling,
                busy,
            } => format!(
                "core {core} shares its ports with cpu {sibling}, which was {:.0}% busy; \
                 throughput figures will read low",
                busy * 100.0
            ),
            SystemWarning::CoarseTimer {
                resolution_ns,
                per_op_error_ns,
            } => format!(
                "clock resolution is {resolution_ns:.0} ns, up to {per_op_error_ns:.3} ns \
                 of error per op at this --runs; raise --runs"
            ),
        }
    }
}

/// Run every check for a run pinned to `core`.
///
/// On unsupported platforms, returns an empty vector.
pub fn system_check(core: usize) -> Vec<SystemWarning> {
    #[allow(unused_mut)]
    let mut warnings = Vec::new();

    #[cfg(target_os = "linux")]
    {
        warnings.extend(linux::governor(core));
        warnings.extend(linux::clock(core));
        warnings.extend(linux::sibling(core));
    }

    #[cfg(not(target_os = "linux"))]
    let _ = core;

    warnings
}

/// How much slower than peak a core at `current_khz` retires work.
fn slowdown(current_khz: u64, max_khz: u64) -> f64 {
    if current_khz == 0 {
        return 1.0;
    }
    max_khz as f64 / current_khz as f64
}

fn clock_warning(core: usize, current_khz: u64, max_khz: u64) -> Option<SystemWarning> {
    if max_khz == 0 || (current_khz as f64) >= max_khz as f64 * CLOCK_RATIO_FLOOR {
        return None;
    }
    Some(SystemWarning::ClockBelowMax {
        core,
        current_khz,
        max_khz,
    })
}

/// Parse a sysfs cpu list such as `0-3,8,10-11`.
fn parse_cpu_list(text: &str) -> Option<Vec<usize>> {
    let mut cpus = Vec::new();
    for part in text.trim().split(',').filter(|p| !p.is_empty()) {
        match part.split_once('-') {
            Some((lo, hi)) => {
                let (lo, hi): (usize, usize) = (lo.parse().ok()?, hi.parse().ok()?);
                cpus.extend(lo..=hi);
            }
            None => cpus.push(part.parse().ok()?),
        }
    }
    Some(cpus)
}

/// First logical CPU in `siblings` other than `core`.
fn sibling_of(core: usize, siblings: &[usize]) -> Option<usize> {
    siblings.iter().copied().find(|&cpu| cpu != core)
}

/// Busy and total jiffies for one `cpuN` line of `/proc/stat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CpuTimes {
    busy: u64,
    total: u64,
}

fn parse_cpu_times(stat: &str, cpu: usize) -> Option<CpuTimes> {
    let label = format!("cpu{cpu}");
    let line = stat
        .lines()
        .find(|line| line.split_whitespace().next() == Some(label.as_str()))?;
    let fields: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;
    // user nice system idle iowait irq softirq steal ...
    let idle = fields.get(3)? + fields.get(4).copied().unwrap_or(0);
    let total: u64 = fields.iter().take(8).sum();
    Some(CpuTimes {
        busy: total.saturating_sub(idle),
        total,
    })
}

fn busy_fraction(before: CpuTimes, after: CpuTimes) -> f64 {
    let total = after.total.saturating_sub(before.total);
    if total == 0 {
        return 0.0;
    }
    after.busy.saturating_sub(before.busy) as f64 / total as f64
}

#[cfg(target_os = "linux")]
mod linux {
    use std::io::ErrorKind;

    use super::*;

    fn cpu_file(core: usize, leaf: &str) -> std::io::Result<String> {
        std::fs::read_to_string(format!("/sys/devices/system/cpu/cpu{core}/{leaf}"))
    }

    fn read_khz(core: usize, leaf: &str) -> Option<u64> {
        cpu_file(core, leaf).ok()?.trim().parse().ok()
    }

    pub(super) fn governor(core: usize) -> Option<SystemWarning> {
        match cpu_file(core, "cpufreq/scaling_governor") {
            Ok(governor) => {
                let governor = governor.trim().to_lowercase();
                (governor != "performance")
                    .then_some(SystemWarning::GovernorNotPerformance { core, governor })
            }
            // No cpufreq driver: nothing to tune.
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => Some(SystemWarning::GovernorUnreadable {
                core,
                reason: e.to_string(),
            }),
        }
    }

    pub(super) fn clock(core: usize) -> Option<SystemWarning> {
        let current = read_khz(core, "cpufreq/scaling_cur_freq")?;
        let max = read_khz(core, "cpufreq/cpuinfo_max_freq")?;
        clock_warning(core, current, max)
    }

    pub(super) fn sibling(core: usize) -> Option<SystemWarning> {
        let list = cpu_file(core, "topology/thread_siblings_list").ok()?;
        let sibling = sibling_of(core, &parse_cpu_list(&list)?)?;

        let before = parse_cpu_times(&std::fs::read_to_string("/proc/stat").ok()?, sibling)?;
        std::thread::sleep(SIBLING_SAMPLE);
        let after = parse_cpu_times(&std::fs::read_to_string("/proc/stat").ok()?, sibling)?;

        let busy = busy_fraction(before, after);
        (busy > SIBLING_BUSY_THRESHOLD).then_some(SystemWarning::BusySibling {
            core,
            sibling,
            busy,
        })
    }
}
