//! # peakprobe
//!
//! Measure the peak throughput and latency of individual instructions on the
//! host CPU, and the memory bandwidth and arithmetic throughput of an
//! attached OpenCL device.
//!
//! Every CPU probe comes as a pair: a throughput body that issues the
//! instruction on independent registers, and a latency body that chains each
//! instruction on the previous result. Both run the same number of
//! instructions, so the two figures are directly comparable.
//!
//! ```text
//! fmla throughput: 0.125000 ns 64.000000 GFlops latency: 0.500000 ns
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use peakprobe::{Backend, Config};
//!
//! let config = Config::from_env()?.runs(100_000);
//! Backend::Cpu.execute(&config, std::io::stdout().lock())?;
//! ```
//!
//! Probes needing an instruction set extension the host lacks are skipped;
//! see [`FeatureSet`] and [`Capability`].

#![warn(missing_docs)]
#![warn(clippy::all)]

mod backend;
mod config;
mod error;

pub mod catalog;
pub mod cpu;
pub mod features;
pub mod measurement;
pub mod opencl;
pub mod output;
pub mod preflight;
pub mod probe;

pub use backend::Backend;
pub use catalog::{run_catalog, CatalogReport, Skipped};
pub use config::{Config, DEFAULT_RUNS, DEFAULT_WARMUP};
pub use error::{Error, Result};
pub use features::{Capability, FeatureSet};
pub use measurement::{BenchmarkRunner, MeasurementResult, Timer};
pub use output::OutputFormat;
pub use probe::{host_catalog, ProbeFamily, ProbePair, ProbeSpec};
