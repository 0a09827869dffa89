//! Hardware properties of the real host catalog.
//!
//! Only probes the running core supports are exercised, with a short trip
//! count so the whole catalog finishes quickly.

use peakprobe::probe::ScratchBuffer;
use peakprobe::{host_catalog, BenchmarkRunner, FeatureSet, MeasurementResult, OutputFormat};

const RUNS: u64 = 20_000;

/// Best (lowest) per-op figures over `rounds` measurements of one probe.
fn best_of(rounds: usize, f: impl Fn() -> MeasurementResult) -> (f64, f64) {
    (0..rounds).map(|_| f()).fold((f64::MAX, f64::MAX), |(tp, lat), r| {
        (tp.min(r.throughput_ns), lat.min(r.latency_ns))
    })
}

fn measure_all(rounds: usize) -> Vec<(&'static str, f64, f64)> {
    let features = FeatureSet::detect();
    let scratch = ScratchBuffer::global();
    let mut out = Vec::new();

    for family in host_catalog() {
        for probe in family.probes {
            if !features.supports_all(family.requires) || !features.supports_all(probe.requires) {
                continue;
            }
            let (tp, lat) = best_of(rounds, || {
                let mut runner = BenchmarkRunner::new(std::io::sink(), OutputFormat::Text);
                // SAFETY: both guards checked above.
                let mut pair = unsafe { probe.bind(RUNS, scratch) };
                runner.measure(&mut pair)
            });
            out.push((probe.name, tp, lat));
        }
    }
    out
}

/// A dependent chain is never meaningfully faster than independent issue.
#[test]
fn latency_not_below_throughput() {
    for (name, tp, lat) in measure_all(3) {
        assert!(tp > 0.0, "{}: zero throughput figure", name);
        assert!(
            lat >= tp * 0.7,
            "{}: latency {:.4} ns below throughput {:.4} ns",
            name,
            lat,
            tp
        );
    }
}

/// Two back-to-back passes agree within a relative tolerance.
#[test]
#[ignore = "timing-sensitive - run with --ignored on a quiet machine"]
fn throughput_is_repeatable() {
    let first = measure_all(5);
    let second = measure_all(5);
    for ((name, a, _), (_, b, _)) in first.iter().zip(&second) {
        let rel = (a - b).abs() / a.max(*b);
        assert!(rel < 0.10, "{}: {:.4} vs {:.4} ns", name, a, b);
    }
}

/// Every family names its probes uniquely.
#[test]
fn catalog_names_are_unique() {
    let mut names: Vec<&str> = host_catalog()
        .iter()
        .flat_map(|f| f.probes.iter().map(|p| p.name))
        .collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}
