//! Probe pairs and the per-architecture probe tables.
//!
//! A probe is a pair of generated functions around one instruction (or a
//! short group of instructions):
//!
//! - the **throughput** body repeats the group across disjoint registers, so
//!   the core is free to overlap the copies;
//! - the **latency** body repeats the same group on a single register, so
//!   every copy waits for the previous result.
//!
//! Both bodies clear their registers before the loop, declare everything
//! they touch as clobbered, and return the number of groups executed. The
//! bodies themselves are produced by the emitter macros in the
//! architecture modules; this module holds the table types and the runtime
//! [`ProbePair`] wrapper handed to the runner.

use crate::features::Capability;

mod scratch;

#[cfg(target_arch = "aarch64")]
pub mod aarch64;
#[cfg(all(target_arch = "arm", target_feature = "neon"))]
pub mod armv7;
#[cfg(target_arch = "x86_64")]
pub mod x86_64;

pub use scratch::{ScratchBuffer, SCRATCH_ALIGN, SCRATCH_BYTES};

/// Signature of a generated probe body.
///
/// `runs` is the loop trip count; the return value is the number of groups
/// executed (trip count times unroll factor).
///
/// # Safety
///
/// Every instruction in the body must be supported by the current core,
/// and `scratch` must point at [`SCRATCH_BYTES`] writable bytes aligned to
/// [`SCRATCH_ALIGN`].
pub type ProbeFn = unsafe fn(runs: u64, scratch: *mut u8) -> u64;

/// Default SIMD width multiplier.
pub const DEFAULT_WIDTH: u32 = 4;

/// One row of a probe table.
#[derive(Debug, Clone, Copy)]
pub struct ProbeSpec {
    /// Display name.
    pub name: &'static str,
    /// Independent-register body.
    pub throughput: ProbeFn,
    /// Dependency-chain body.
    pub latency: ProbeFn,
    /// Operations per group, used for the throughput metric.
    pub width: u32,
    /// Capabilities required on top of the family's.
    pub requires: &'static [Capability],
    /// Free-text note printed after the result.
    pub annotation: Option<&'static str>,
}

/// An ordered group of probes that share a warmup and a base guard.
#[derive(Debug, Clone, Copy)]
pub struct ProbeFamily {
    /// Human-readable family title.
    pub title: &'static str,
    /// Capabilities required by every probe in the family.
    pub requires: &'static [Capability],
    /// Body run (and discarded) before the first measurement.
    pub warmup: ProbeFn,
    /// Probes in execution order.
    pub probes: &'static [ProbeSpec],
}

impl ProbeSpec {
    /// Table row with the default width and no extra guard.
    pub const fn new(name: &'static str, throughput: ProbeFn, latency: ProbeFn) -> Self {
        Self {
            name,
            throughput,
            latency,
            width: DEFAULT_WIDTH,
            requires: &[],
            annotation: None,
        }
    }

    /// Set the width multiplier.
    pub const fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Require additional capabilities.
    pub const fn requires(mut self, caps: &'static [Capability]) -> Self {
        self.requires = caps;
        self
    }

    /// Attach a note to the result line.
    pub const fn note(mut self, text: &'static str) -> Self {
        self.annotation = Some(text);
        self
    }

    /// Bind this row to a trip count and scratch buffer.
    ///
    /// # Safety
    ///
    /// The caller must have checked that every capability in
    /// `family_requires` and `self.requires` is supported by the host.
    pub unsafe fn bind(&self, runs: u64, scratch: &ScratchBuffer) -> ProbePair<'static> {
        let ptr = scratch.as_mut_ptr() as usize;
        let (tp, lat) = (self.throughput, self.latency);
        ProbePair {
            name: self.name,
            width: self.width,
            annotation: self.annotation,
            // SAFETY: guard checked by the caller, scratch buffer is 'static.
            throughput: Box::new(move || unsafe { tp(runs, ptr as *mut u8) }),
            latency: Box::new(move || unsafe { lat(runs, ptr as *mut u8) }),
        }
    }
}

/// A named throughput/latency pair ready to be timed.
///
/// Each callable returns the number of operations it actually executed.
pub struct ProbePair<'a> {
    name: &'a str,
    width: u32,
    annotation: Option<&'a str>,
    throughput: Box<dyn FnMut() -> u64 + 'a>,
    latency: Box<dyn FnMut() -> u64 + 'a>,
}

impl<'a> ProbePair<'a> {
    /// Build a pair from arbitrary callables.
    pub fn new<T, L>(name: &'a str, throughput: T, latency: L) -> Self
    where
        T: FnMut() -> u64 + 'a,
        L: FnMut() -> u64 + 'a,
    {
        Self {
            name,
            width: DEFAULT_WIDTH,
            annotation: None,
            throughput: Box::new(throughput),
            latency: Box::new(latency),
        }
    }

    /// Set the width multiplier.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Attach a note to the result line.
    pub fn with_annotation(mut self, text: &'a str) -> Self {
        self.annotation = Some(text);
        self
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Width multiplier.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Attached note, if any.
    pub fn annotation(&self) -> Option<&str> {
        self.annotation
    }

    /// Run the throughput body once.
    pub fn run_throughput(&mut self) -> u64 {
        (self.throughput)()
    }

    /// Run the latency body once.
    pub fn run_latency(&mut self) -> u64 {
        (self.latency)()
    }
}

impl std::fmt::Debug for ProbePair<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbePair")
            .field("name", &self.name)
            .field("width", &self.width)
            .field("annotation", &self.annotation)
            .finish()
    }
}

/// Probe families for the architecture this binary was built for.
///
/// 32-bit Arm builds carry a table only when NEON is enabled at compile
/// time; other architectures have none.
pub fn host_catalog() -> &'static [ProbeFamily] {
    #[cfg(target_arch = "x86_64")]
    {
        x86_64::CATALOG
    }

    #[cfg(target_arch = "aarch64")]
    {
        aarch64::CATALOG
    }

    #[cfg(all(target_arch = "arm", target_feature = "neon"))]
    {
        armv7::CATALOG
    }

    #[cfg(not(any(
        target_arch = "x86_64",
        target_arch = "aarch64",
        all(target_arch = "arm", target_feature = "neon")
    )))]
    {
        &[]
    }
}
