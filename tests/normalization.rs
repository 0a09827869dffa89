//! Per-op normalization and result line formatting.

use peakprobe::measurement::per_op_ns;
use peakprobe::output::terminal::format_line;
use peakprobe::{BenchmarkRunner, MeasurementResult, OutputFormat, ProbePair};

#[test]
fn thousand_ns_over_hundred_ops_is_ten() {
    assert_eq!(per_op_ns(1000.0, 100), 10.0);
}

#[test]
fn zero_ops_reports_zero() {
    assert_eq!(per_op_ns(1234.0, 0), 0.0);
}

#[test]
fn gflops_uses_width() {
    let r = MeasurementResult::from_timings("vfmadd132ps_avx", 16, None, (1000.0, 100), (4000.0, 100));
    assert_eq!(r.throughput_ns, 10.0);
    assert_eq!(r.latency_ns, 40.0);
    assert!((r.gflops - 1.6).abs() < 1e-12);
}

#[test]
fn runner_writes_one_line_per_pair() {
    let mut runner = BenchmarkRunner::new(Vec::new(), OutputFormat::Text);
    let mut a = ProbePair::new("first", || 100, || 100).with_width(8);
    let mut b = ProbePair::new("second", || 100, || 100).with_annotation("note");
    runner.run(&mut a).unwrap();
    runner.run(&mut b).unwrap();

    let out = String::from_utf8(runner.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("first throughput: "));
    assert!(lines[0].contains(" GFlops latency: "));
    assert!(lines[1].ends_with(" ns : note"));
}

#[test]
fn zero_op_pair_formats_as_zero() {
    let mut runner = BenchmarkRunner::new(Vec::new(), OutputFormat::Text);
    let mut pair = ProbePair::new("empty", || 0, || 0);
    let result = runner.run(&mut pair).unwrap();
    assert_eq!(
        format_line(&result),
        "empty throughput: 0.000000 ns 0.000000 GFlops latency: 0.000000 ns"
    );
}
