//! Drives a probe table against a [`FeatureSet`].
//!
//! For each family: skip it entirely if none of its probes may run,
//! otherwise run the family warmup (result discarded) and then measure every
//! runnable probe in table order. Probes whose guard is missing produce no
//! output at all unless verbose mode is on.

use std::io::Write;

use serde::Serialize;

use crate::features::{Capability, FeatureSet};
use crate::measurement::{BenchmarkRunner, MeasurementResult};
use crate::output::terminal;
use crate::probe::{ProbeFamily, ProbeSpec, ScratchBuffer};
use crate::{Config, Result};

/// A probe that was not run, and the first capability it was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skipped {
    /// Probe name.
    pub name: &'static str,
    /// First unsupported capability in its guard.
    pub missing: Capability,
}

/// Everything a catalog run produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogReport {
    /// Results in execution order.
    pub measured: Vec<MeasurementResult>,
    /// Probes not run.
    pub skipped: Vec<Skipped>,
}

fn missing_guard(
    features: &FeatureSet,
    family: &ProbeFamily,
    probe: &ProbeSpec,
) -> Option<Capability> {
    features
        .first_missing(family.requires)
        .or_else(|| features.first_missing(probe.requires))
}

/// Run every family in `families` whose guards `features` satisfies.
pub fn run_catalog<W: Write>(
    families: &[ProbeFamily],
    features: &FeatureSet,
    config: &Config,
    runner: &mut BenchmarkRunner<W>,
) -> Result<CatalogReport> {
    let scratch = ScratchBuffer::global();
    let mut report = CatalogReport::default();

    for family in families {
        let runnable = family
            .probes
            .iter()
            .any(|probe| missing_guard(features, family, probe).is_none());

        if config.verbose {
            eprintln!("{}", terminal::format_family_header(family.title));
        }

        if runnable {
            for _ in 0..config.warmup {
                // SAFETY: at least one probe in the family passed its guard,
                // which includes the family guard the warmup body relies on.
                unsafe {
                    (family.warmup)(config.runs, scratch.as_mut_ptr());
                }
            }
        }

        for probe in family.probes {
            if let Some(missing) = missing_guard(features, family, probe) {
                if config.verbose {
                    eprintln!("{}", terminal::format_skip(probe.name, missing));
                }
                report.skipped.push(Skipped {
                    name: probe.name,
                    missing,
                });
                continue;
            }

            // SAFETY: family and probe guards both checked above.
            let mut pair = unsafe { probe.bind(config.runs, scratch) };
            report.measured.push(runner.run(&mut pair)?);
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use crate::probe::ProbeSpec;
    use std::sync::atomic::{AtomicU64, Ordering};

    static WARMUPS: AtomicU64 = AtomicU64::new(0);

    unsafe fn body(runs: u64, _scratch: *mut u8) -> u64 {
        runs * 10
    }

    unsafe fn counted_warmup(runs: u64, _scratch: *mut u8) -> u64 {
        WARMUPS.fetch_add(1, Ordering::SeqCst);
        runs
    }

    static FAMILIES: &[ProbeFamily] = &[
        ProbeFamily {
            title: "base",
            requires: &[Capability::Sse2],
            warmup: body,
            probes: &[
                ProbeSpec::new("plain", body, body),
                ProbeSpec::new("needs_fma", body, body).requires(&[Capability::Fma]),
            ],
        },
        ProbeFamily {
            title: "wide",
            requires: &[Capability::Avx512],
            warmup: counted_warmup,
            probes: &[ProbeSpec::new("wide", body, body).width(16)],
        },
    ];

    #[test]
    fn test_skips_are_silent_and_recorded() {
        let features = FeatureSet::from_capabilities([Capability::Sse2]);
        let config = Config::default().runs(3).warmup(1);
        let mut runner = BenchmarkRunner::new(Vec::new(), OutputFormat::Text);

        let report = run_catalog(FAMILIES, &features, &config, &mut runner).unwrap();
        let out = String::from_utf8(runner.into_inner()).unwrap();

        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("plain throughput: "));
        assert_eq!(report.measured.len(), 1);
        assert_eq!(
            report.skipped,
            vec![
                Skipped { name: "needs_fma", missing: Capability::Fma },
                Skipped { name: "wide", missing: Capability::Avx512 },
            ]
        );
        assert_eq!(WARMUPS.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_threshold_removes_later_probes() {
        let features = FeatureSet::from_capabilities(Capability::ALL)
            .with_disabled_from(Capability::Fma);
        let config = Config::default().runs(3).warmup(0);
        let mut runner = BenchmarkRunner::new(Vec::new(), OutputFormat::Text);

        let report = run_catalog(FAMILIES, &features, &config, &mut runner).unwrap();
        let names: Vec<&str> = report.measured.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["plain"]);
    }
}
