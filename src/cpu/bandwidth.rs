//! Memory copy bandwidth.

use std::hint::black_box;

use crate::measurement::Timer;

/// Bytes per buffer.
pub const COPY_BYTES: usize = 100 * 1024 * 1024;
/// Untimed copies.
pub const COPY_WARMUP: usize = 5;
/// Timed copies.
pub const COPY_RUNS: usize = 40;

/// GiB/s moved when one copy of `bytes` takes `ms_per_copy`.
///
/// A copy both reads and writes every byte, hence the factor of two.
pub fn copy_gbps(bytes: usize, ms_per_copy: f64) -> f64 {
    2.0 * bytes as f64 / (1024.0 * 1024.0 * 1024.0) * 1000.0 / ms_per_copy
}

/// Copy `bytes` between two buffers `warmup + runs` times and return the
/// average bandwidth of the timed copies.
pub fn measure_copy_bandwidth(bytes: usize, warmup: usize, runs: usize) -> f64 {
    let src = vec![1u8; bytes];
    let mut dst = vec![0u8; bytes];

    let mut sink = 0u8;
    for _ in 0..warmup {
        dst.copy_from_slice(black_box(&src));
        sink = sink.wrapping_add(dst[0]);
    }

    let timer = Timer::new();
    for _ in 0..runs {
        dst.copy_from_slice(black_box(&src));
        sink = sink.wrapping_add(dst[0]);
    }
    let ms_per_copy = timer.elapsed_ms() / runs.max(1) as f64;
    black_box(sink);

    copy_gbps(bytes, ms_per_copy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_gbps_formula() {
        // 1 GiB read + 1 GiB written in one second.
        let gbps = copy_gbps(1024 * 1024 * 1024, 1000.0);
        assert!((gbps - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_small_copy_is_positive() {
        let gbps = measure_copy_bandwidth(1 << 20, 1, 4);
        assert!(gbps.is_finite() && gbps > 0.0);
    }
}
