//! Single point through which every CPU probe is measured and reported.

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::Timer;
use crate::output::{self, OutputFormat};
use crate::probe::ProbePair;
use crate::Result;

/// Normalized figures for one probe pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementResult {
    /// Probe name.
    pub name: String,
    /// Nanoseconds per operation with independent operands.
    pub throughput_ns: f64,
    /// `width / throughput_ns`, i.e. operations of the given width per ns.
    pub gflops: f64,
    /// Nanoseconds per operation along a dependency chain.
    pub latency_ns: f64,
    /// Width multiplier used for `gflops`.
    pub width: u32,
    /// Optional note carried from the probe table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

/// Time per operation.
///
/// Returns 0.0 when no operations were executed.
pub fn per_op_ns(elapsed_ns: f64, ops: u64) -> f64 {
    if ops == 0 {
        return 0.0;
    }
    elapsed_ns / ops as f64
}

impl MeasurementResult {
    /// Build a result from raw elapsed times and reported operation counts.
    pub fn from_timings(
        name: &str,
        width: u32,
        annotation: Option<&str>,
        (tp_elapsed_ns, tp_ops): (f64, u64),
        (lat_elapsed_ns, lat_ops): (f64, u64),
    ) -> Self {
        let throughput_ns = per_op_ns(tp_elapsed_ns, tp_ops);
        let latency_ns = per_op_ns(lat_elapsed_ns, lat_ops);
        let gflops = if throughput_ns > 0.0 {
            width as f64 / throughput_ns
        } else {
            0.0
        };
        Self {
            name: name.to_string(),
            throughput_ns,
            gflops,
            latency_ns,
            width,
            annotation: annotation.map(str::to_string),
        }
    }
}

/// Times probe pairs and writes one line per pair to `out`.
#[derive(Debug)]
pub struct BenchmarkRunner<W: Write> {
    out: W,
    format: OutputFormat,
    timer: Timer,
}

impl<W: Write> BenchmarkRunner<W> {
    /// Runner writing in `format` to `out`.
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            timer: Timer::new(),
        }
    }

    /// Output format in use.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Time both bodies of `pair` without writing anything.
    pub fn measure(&mut self, pair: &mut ProbePair<'_>) -> MeasurementResult {
        self.timer.reset();
        let tp_ops = pair.run_throughput();
        let tp_ns = self.timer.elapsed_ns();

        self.timer.reset();
        let lat_ops = pair.run_latency();
        let lat_ns = self.timer.elapsed_ns();

        MeasurementResult::from_timings(
            pair.name(),
            pair.width(),
            pair.annotation(),
            (tp_ns, tp_ops),
            (lat_ns, lat_ops),
        )
    }

    /// Write an already computed result.
    pub fn report(&mut self, result: &MeasurementResult) -> Result<()> {
        let line = match self.format {
            OutputFormat::Text => output::terminal::format_line(result),
            OutputFormat::Json => output::json::to_json(result)?,
        };
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        Ok(())
    }

    /// Measure `pair` and write its line.
    pub fn run(&mut self, pair: &mut ProbePair<'_>) -> Result<MeasurementResult> {
        let result = self.measure(pair);
        self.report(&result)?;
        Ok(result)
    }

    /// Mutable access to the sink.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Recover the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_op_normalization() {
        assert_eq!(per_op_ns(1000.0, 100), 10.0);
        assert_eq!(per_op_ns(1000.0, 0), 0.0);
    }

    #[test]
    fn test_from_timings_metric() {
        let r = MeasurementResult::from_timings("x", 8, None, (1000.0, 100), (4000.0, 100));
        assert_eq!(r.throughput_ns, 10.0);
        assert_eq!(r.latency_ns, 40.0);
        assert!((r.gflops - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_zero_ops_does_not_divide_by_zero() {
        let r = MeasurementResult::from_timings("x", 8, None, (10.0, 0), (10.0, 0));
        assert_eq!(r.gflops, 0.0);
        assert!(r.throughput_ns.is_finite());
    }

    #[test]
    fn test_run_writes_one_line() {
        let mut runner = BenchmarkRunner::new(Vec::new(), OutputFormat::Text);
        let mut pair = ProbePair::new("spin", || 1_000, || 1_000).with_annotation("n");
        let result = runner.run(&mut pair).unwrap();
        let text = String::from_utf8(runner.into_inner()).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("spin throughput: "));
        assert!(text.trim_end().ends_with(" : n"));
        assert_eq!(result.annotation.as_deref(), Some("n"));
    }

    #[test]
    fn test_json_line_parses() {
        let mut runner = BenchmarkRunner::new(Vec::new(), OutputFormat::Json);
        let mut pair = ProbePair::new("spin", || 10, || 10).with_width(2);
        runner.run(&mut pair).unwrap();
        let text = String::from_utf8(runner.into_inner()).unwrap();
        let parsed: MeasurementResult = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(parsed.name, "spin");
        assert_eq!(parsed.width, 2);
        assert_eq!(parsed.annotation, None);
    }
}
