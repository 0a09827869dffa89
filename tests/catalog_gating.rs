//! End-to-end catalog runs against synthetic probe tables.

use peakprobe::{
    run_catalog, BenchmarkRunner, Capability, Config, FeatureSet, MeasurementResult,
    OutputFormat, ProbeFamily, ProbeSpec,
};

unsafe fn ten_ops(runs: u64, _scratch: *mut u8) -> u64 {
    runs * 10
}

unsafe fn twenty_ops(runs: u64, _scratch: *mut u8) -> u64 {
    runs * 20
}

/// Two probes guarded by Neon, one by DotProd, and a DotProd-only family.
static TABLE: &[ProbeFamily] = &[
    ProbeFamily {
        title: "base",
        requires: &[Capability::Neon],
        warmup: ten_ops,
        probes: &[
            ProbeSpec::new("a_first", ten_ops, ten_ops).width(8),
            ProbeSpec::new("b_guarded", twenty_ops, twenty_ops)
                .width(32)
                .requires(&[Capability::DotProd]),
            ProbeSpec::new("a_second", ten_ops, ten_ops).note("dual issue"),
        ],
    },
    ProbeFamily {
        title: "dot",
        requires: &[Capability::DotProd],
        warmup: twenty_ops,
        probes: &[ProbeSpec::new("b_only", twenty_ops, twenty_ops)],
    },
];

fn run(features: &FeatureSet, format: OutputFormat) -> (String, peakprobe::CatalogReport) {
    let config = Config::default().runs(1_000).warmup(2).format(format);
    let mut runner = BenchmarkRunner::new(Vec::new(), format);
    let report = run_catalog(TABLE, features, &config, &mut runner).unwrap();
    (String::from_utf8(runner.into_inner()).unwrap(), report)
}

/// Only A supported: every A probe prints, nothing at all for B.
#[test]
fn successor_capability_prints_nothing() {
    let features = FeatureSet::from_capabilities([Capability::Neon]);
    let (out, report) = run(&features, OutputFormat::Text);

    let names: Vec<&str> = out
        .lines()
        .map(|l| l.split_whitespace().next().unwrap())
        .collect();
    assert_eq!(names, ["a_first", "a_second"]);
    assert!(!out.contains("b_"));
    assert!(!out.contains("requires"));
    assert!(out.lines().nth(1).unwrap().ends_with(" : dual issue"));
    assert_eq!(report.skipped.len(), 2);
}

/// Both supported, but the threshold cuts B off.
#[test]
fn threshold_hides_successor() {
    let features = FeatureSet::from_capabilities([Capability::Neon, Capability::DotProd])
        .with_disabled_from(Capability::DotProd);
    let (out, _) = run(&features, OutputFormat::Text);
    assert_eq!(out.lines().count(), 2);
}

/// Everything supported: table order is preserved.
#[test]
fn full_support_runs_in_table_order() {
    let features = FeatureSet::from_capabilities([Capability::Neon, Capability::DotProd]);
    let (_, report) = run(&features, OutputFormat::Text);
    let names: Vec<&str> = report.measured.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["a_first", "b_guarded", "a_second", "b_only"]);
    assert!(report.skipped.is_empty());
}

/// JSON mode emits one parseable object per measured probe.
#[test]
fn json_lines_parse_back() {
    let features = FeatureSet::from_capabilities([Capability::Neon]);
    let (out, report) = run(&features, OutputFormat::Json);

    let parsed: Vec<MeasurementResult> = out
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid json line"))
        .collect();
    assert_eq!(parsed.len(), report.measured.len());
    assert_eq!(parsed[0].name, "a_first");
    assert_eq!(parsed[0].width, 8);
    assert_eq!(parsed[1].annotation.as_deref(), Some("dual issue"));
}

/// No capabilities at all: empty output, no error.
#[test]
fn nothing_supported_is_not_an_error() {
    let (out, report) = run(&FeatureSet::none(), OutputFormat::Text);
    assert!(out.is_empty());
    assert!(report.measured.is_empty());
    assert_eq!(report.skipped.len(), 4);
}
