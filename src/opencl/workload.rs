//! The fixed set of accelerator workloads and their figures of merit.
//!
//! Each workload names its program, its kernels per vector width, the
//! number of timed dispatches, and how to turn an average device time into
//! GB/s or GFLOPS. The device session executes them; nothing here touches a
//! device.

use serde::{Deserialize, Serialize};

use super::DeviceInfo;

/// Elements in the local-memory workload's buffer.
pub const LOCAL_ELEMS: usize = 1024 * 1024;
/// Swap rounds per work-item in the local-memory kernels.
pub const LOCAL_ROUNDS: usize = 16;
/// Vectors fetched per work-item in the global-memory kernels.
pub const FETCH_PER_WI: usize = 16;
/// Arithmetic operations per work-item in the compute kernels.
pub const WORK_PER_WI: usize = 4096;
/// Floats staged on the host per write when seeding the global buffer.
pub const SEED_CHUNK_ELEMS: usize = 1 << 20;

/// Element type of a compute workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericType {
    /// 32-bit integer.
    Int,
    /// Single precision.
    Float,
    /// Half precision.
    Half,
    /// Double precision.
    Double,
}

impl NumericType {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            NumericType::Int => "int",
            NumericType::Float => "float",
            NumericType::Half => "half",
            NumericType::Double => "double",
        }
    }

    /// Embedded program holding the kernels.
    pub fn program(self) -> &'static str {
        match self {
            NumericType::Int => "compute_int_kernels",
            NumericType::Float => "compute_sp_kernels",
            NumericType::Half => "compute_hp_kernels",
            NumericType::Double => "compute_dp_kernels",
        }
    }

    fn kernel_prefix(self) -> &'static str {
        match self {
            NumericType::Int => "compute_integer_v",
            NumericType::Float => "compute_sp_v",
            NumericType::Half => "compute_hp_v",
            NumericType::Double => "compute_dp_v",
        }
    }

    /// Bytes per element.
    pub fn size(self) -> usize {
        match self {
            NumericType::Int | NumericType::Float => 4,
            NumericType::Half => 2,
            NumericType::Double => 8,
        }
    }

    /// Whether `info` says the device can run this type.
    pub fn supported(self, info: &DeviceInfo) -> bool {
        match self {
            NumericType::Half => info.half_supported,
            NumericType::Double => info.double_supported,
            NumericType::Int | NumericType::Float => true,
        }
    }
}

/// One accelerator workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Workload {
    /// Work-group local memory juggling.
    LocalBandwidth,
    /// Streaming reads from global memory.
    GlobalBandwidth,
    /// Dependent multiply-add chains.
    Compute(NumericType),
}

impl Workload {
    /// Execution order.
    pub const SEQUENCE: [Workload; 6] = [
        Workload::LocalBandwidth,
        Workload::GlobalBandwidth,
        Workload::Compute(NumericType::Int),
        Workload::Compute(NumericType::Float),
        Workload::Compute(NumericType::Half),
        Workload::Compute(NumericType::Double),
    ];

    /// Header printed before the variant lines.
    pub fn title(self) -> String {
        match self {
            Workload::LocalBandwidth => "Local memory bandwidth (GBPS)".to_string(),
            Workload::GlobalBandwidth => "Global memory bandwidth (GBPS)".to_string(),
            Workload::Compute(ty) => format!("{} compute (GFLOPS)", ty.name()),
        }
    }

    /// Embedded program name.
    pub fn program(self) -> &'static str {
        match self {
            Workload::LocalBandwidth => "local_memory_bandwidth",
            Workload::GlobalBandwidth => "global_memory_bandwidth",
            Workload::Compute(ty) => ty.program(),
        }
    }

    /// Vector widths measured.
    pub fn widths(self) -> &'static [usize] {
        match self {
            Workload::LocalBandwidth => &[1, 2, 4],
            _ => &[1, 2, 4, 8, 16],
        }
    }

    /// Timed dispatches per kernel.
    pub fn iters(self) -> usize {
        match self {
            Workload::LocalBandwidth | Workload::GlobalBandwidth => 50,
            Workload::Compute(_) => 10,
        }
    }

    /// Kernel names for `width`. The global workload times two layouts and
    /// keeps the faster.
    pub fn kernel_names(self, width: usize) -> Vec<String> {
        match self {
            Workload::LocalBandwidth => vec![format!("krn_localmem_juggling_int{}", width)],
            Workload::GlobalBandwidth => vec![
                format!("global_bandwidth_v{}_global_offset", width),
                format!("global_bandwidth_v{}_local_offset", width),
            ],
            Workload::Compute(ty) => vec![format!("{}{}", ty.kernel_prefix(), width)],
        }
    }

    /// Label on the result line for `width`.
    pub fn variant(self, width: usize) -> String {
        match self {
            Workload::LocalBandwidth => format!("int{}", width),
            Workload::GlobalBandwidth => format!("float{}", width),
            Workload::Compute(ty) => format!("{}{}", ty.name(), width),
        }
    }
}

/// One measured kernel variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelResult {
    /// Workload that produced the figure.
    pub workload: Workload,
    /// Variant label, e.g. `float4`.
    pub variant: String,
    /// GB/s or GFLOPS, depending on the workload.
    pub value: f64,
}

/// GB/s for the local-memory kernels over `nr_elems` ints in `us`.
///
/// Each work-item does 6 initial stores, 5 swaps (4 accesses each) per
/// round, and 6 final loads.
pub fn local_gbps(nr_elems: usize, us: f64) -> f64 {
    let accesses = (6 + 4 * 5 * LOCAL_ROUNDS + 6) as f64;
    accesses * nr_elems as f64 * 4.0 / us / 1e3
}

/// Number of float elements the global workload streams.
pub fn global_elems(info: &DeviceInfo) -> usize {
    global_elems_for(info.max_alloc_size)
}

/// Half the largest allocation, in floats, rounded down to a power of two.
pub fn global_elems_for(max_alloc_size: u64) -> usize {
    super::device_info::round_to_power2(max_alloc_size / 4 / 2) as usize
}

/// `(offset, len)` element ranges that seed `nr_elems` floats from a host
/// staging slice of at most [`SEED_CHUNK_ELEMS`].
pub fn seed_chunks(nr_elems: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..nr_elems)
        .step_by(SEED_CHUNK_ELEMS)
        .map(move |offset| (offset, SEED_CHUNK_ELEMS.min(nr_elems - offset)))
}

/// GB/s for reading `nr_elems` floats in `us`.
pub fn global_gbps(nr_elems: usize, us: f64) -> f64 {
    nr_elems as f64 * 4.0 / us / 1e3
}

/// GFLOPS for `global_size` work-items in `us`.
pub fn compute_gflops(global_size: usize, us: f64) -> f64 {
    global_size as f64 * WORK_PER_WI as f64 / us / 1e3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opencl::programs::program_source;

    #[test]
    fn test_every_kernel_is_in_its_program() {
        for workload in Workload::SEQUENCE {
            let src = program_source(workload.program()).unwrap();
            for &width in workload.widths() {
                for name in workload.kernel_names(width) {
                    let decl = format!("void {}(", name);
                    assert!(src.contains(&decl), "{} missing from {}", name, workload.program());
                }
            }
        }
    }

    #[test]
    fn test_titles_and_variants() {
        assert_eq!(Workload::LocalBandwidth.title(), "Local memory bandwidth (GBPS)");
        assert_eq!(Workload::Compute(NumericType::Half).title(), "half compute (GFLOPS)");
        assert_eq!(Workload::GlobalBandwidth.variant(16), "float16");
        assert_eq!(
            Workload::Compute(NumericType::Int).kernel_names(4),
            vec!["compute_integer_v4".to_string()]
        );
    }

    #[test]
    fn test_formulas() {
        // (6 + 320 + 6) * 1 Mi * 4 bytes in 1 s.
        let gbps = local_gbps(LOCAL_ELEMS, 1e6);
        assert!((gbps - 332.0 * 4.0 * LOCAL_ELEMS as f64 / 1e9).abs() < 1e-9);
        assert!((global_gbps(1_000_000, 1_000.0) - 4.0).abs() < 1e-12);
        assert!((compute_gflops(1_000, 4_096.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_global_elems_on_a_large_device() {
        const GIB: u64 = 1 << 30;
        let nr_elems = global_elems_for(16 * GIB);
        assert_eq!(nr_elems, 1 << 31);
        assert_eq!(global_elems_for(3 * GIB), 1 << 28);
        assert_eq!(global_elems_for(4), 0);

        // Host staging stays one chunk no matter how large the buffer.
        let chunks: Vec<(usize, usize)> = seed_chunks(nr_elems).collect();
        assert_eq!(chunks.len(), nr_elems / SEED_CHUNK_ELEMS);
        assert!(chunks.iter().all(|&(_, len)| len <= SEED_CHUNK_ELEMS));
        let (last_offset, last_len) = *chunks.last().unwrap();
        assert_eq!(last_offset + last_len, nr_elems);
    }

    #[test]
    fn test_seed_chunks_cover_a_ragged_tail() {
        let nr_elems = SEED_CHUNK_ELEMS * 2 + 5;
        let chunks: Vec<_> = seed_chunks(nr_elems).collect();
        assert_eq!(
            chunks,
            vec![
                (0, SEED_CHUNK_ELEMS),
                (SEED_CHUNK_ELEMS, SEED_CHUNK_ELEMS),
                (2 * SEED_CHUNK_ELEMS, 5),
            ]
        );
        assert_eq!(seed_chunks(0).count(), 0);
    }
}
