//! CPU backend: pin, report, copy bandwidth, then the probe catalog.

pub mod affinity;
pub mod bandwidth;

use std::io::Write;

use colored::Colorize;

use crate::catalog::{run_catalog, CatalogReport};
use crate::features::{Capability, FeatureSet};
use crate::measurement::BenchmarkRunner;
use crate::output::{json, terminal, OutputFormat};
use crate::preflight;
use crate::probe::host_catalog;
use crate::{Config, Result};

/// Runs the full CPU sequence, writing result lines to `out`.
pub struct CpuBackend<'a> {
    config: &'a Config,
}

impl<'a> CpuBackend<'a> {
    /// Backend for `config.dev_id` as the core id.
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Preflight, pin, print the core line and copy bandwidth, then run the
    /// host catalog.
    pub fn execute<W: Write>(&self, out: W) -> Result<CatalogReport> {
        let core = self.config.dev_id;

        for warning in preflight::run_all_checks(core, self.config.runs).descriptions() {
            eprintln!("{}", terminal::format_warning(&warning));
        }

        if let Err(e) = affinity::pin_current_thread(core) {
            eprintln!("{} {}", "warning:".yellow().bold(), e);
        }

        let mut runner = BenchmarkRunner::new(out, self.config.format);
        let cores = affinity::cpu_count();
        let gbps = bandwidth::measure_copy_bandwidth(
            bandwidth::COPY_BYTES,
            bandwidth::COPY_WARMUP,
            bandwidth::COPY_RUNS,
        );
        write_host_lines(runner.writer_mut(), self.config.format, cores, core, gbps)?;

        let mut features = FeatureSet::detect();
        if let Some(cap) = self.config.disabled_from {
            features = features.with_disabled_from(cap);
        }
        if self.config.verbose {
            eprintln!("{} {}", "features:".bold(), features);
        }
        if let Some(note) = baseline_note(&features) {
            eprintln!("{}", terminal::format_warning(note));
        }

        run_catalog(host_catalog(), &features, self.config, &mut runner)
    }
}

/// Printed regardless of verbosity when the x86 SSE family cannot run.
fn baseline_note(features: &FeatureSet) -> Option<&'static str> {
    (cfg!(target_arch = "x86_64") && !features.is_supported(Capability::Sse2))
        .then_some("this x86 CPU does not support sse2.")
}

fn write_host_lines<W: Write>(
    out: &mut W,
    format: OutputFormat,
    cores: usize,
    core: usize,
    gbps: f64,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "there are {} cores, currently use core id :{}", cores, core)?;
            writeln!(out)?;
            writeln!(out, "bandwidth: {:.6} Gbps", gbps)?;
        }
        OutputFormat::Json => {
            let host = serde_json::json!({ "cores": cores, "core_id": core });
            writeln!(out, "{}", json::to_json(&host)?)?;
            let copy = serde_json::json!({ "bandwidth_gbps": gbps });
            writeln!(out, "{}", json::to_json(&copy)?)?;
        }
    }
    Ok(())
}
