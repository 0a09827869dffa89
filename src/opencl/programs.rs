//! Embedded kernel programs.

use crate::{Error, Result};

/// Options passed to every program build.
pub const BUILD_OPTIONS: &str = "-cl-fast-relaxed-math -cl-mad-enable";

/// Program name to source text.
pub static PROGRAMS: &[(&str, &str)] = &[
    ("compute_dp_kernels", include_str!("kernels/compute_dp.cl")),
    ("compute_sp_kernels", include_str!("kernels/compute_sp.cl")),
    ("compute_hp_kernels", include_str!("kernels/compute_hp.cl")),
    ("compute_int_kernels", include_str!("kernels/compute_int.cl")),
    ("global_memory_bandwidth", include_str!("kernels/global_memory_bandwidth.cl")),
    ("local_memory_bandwidth", include_str!("kernels/local_memory_bandwidth.cl")),
];

/// Source of the program called `name`.
///
/// # Errors
///
/// [`Error::UnknownProgram`] if no program has that name.
pub fn program_source(name: &str) -> Result<&'static str> {
    PROGRAMS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, src)| *src)
        .ok_or_else(|| Error::UnknownProgram(name.to_string()))
}
