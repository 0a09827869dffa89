use criterion::{black_box, criterion_group, criterion_main, Criterion};
use peakprobe::output::terminal::format_line;
use peakprobe::probe::ScratchBuffer;
use peakprobe::{host_catalog, BenchmarkRunner, FeatureSet, MeasurementResult, OutputFormat};

fn bench_runner_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("runner");
    group.sample_size(20);

    group.bench_function("normalize_and_format", |b| {
        b.iter(|| {
            let r = MeasurementResult::from_timings(
                black_box("fmla"),
                8,
                Some("dual issue"),
                (black_box(1_000_000.0), 200_000),
                (black_box(4_000_000.0), 200_000),
            );
            black_box(format_line(&r))
        });
    });

    // First host probe the core supports, with a short trip count.
    let features = FeatureSet::detect();
    let probe = host_catalog().iter().find_map(|family| {
        family.probes.iter().find(|p| {
            features.supports_all(family.requires) && features.supports_all(p.requires)
        })
    });
    if let Some(probe) = probe {
        let scratch = ScratchBuffer::global();
        group.bench_function(probe.name, |b| {
            let mut runner = BenchmarkRunner::new(std::io::sink(), OutputFormat::Text);
            b.iter(|| {
                // SAFETY: guards checked when the probe was selected.
                let mut pair = unsafe { probe.bind(1_000, scratch) };
                black_box(runner.measure(&mut pair))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_runner_overhead);
criterion_main!(benches);
