//! Timing and normalization for probe pairs.
//!
//! - [`Timer`] is the monotonic stopwatch placed around each probe body.
//! - [`BenchmarkRunner`] times one [`ProbePair`](crate::probe::ProbePair),
//!   normalizes by the operation count each body reports, and writes the
//!   result line.
//!
//! Normalization lives in [`per_op_ns`] and [`MeasurementResult::from_timings`]
//! so it can be checked without touching hardware.

mod runner;
mod timer;

pub use runner::{per_op_ns, BenchmarkRunner, MeasurementResult};
pub use timer::Timer;
