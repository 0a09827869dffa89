//! 32-bit Arm detection.

use super::Capability;

// linux/arch/arm/include/uapi/asm/hwcap.h
#[cfg(any(target_os = "linux", target_os = "android"))]
const HWCAP_NEON: u64 = 1 << 12;

/// Probe the running processor.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub(super) fn detect() -> Vec<Capability> {
    // SAFETY: getauxval only reads the process auxiliary vector.
    let hwcap = unsafe { libc::getauxval(libc::AT_HWCAP) } as u64;
    from_hwcap(hwcap)
}

/// Probe the running processor.
///
/// Without an auxiliary vector the compile-time target is all we know.
#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub(super) fn detect() -> Vec<Capability> {
    if cfg!(target_feature = "neon") {
        vec![Capability::Neon]
    } else {
        Vec::new()
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn from_hwcap(hwcap: u64) -> Vec<Capability> {
    if hwcap & HWCAP_NEON != 0 {
        vec![Capability::Neon]
    } else {
        Vec::new()
    }
}

#[cfg(all(test, any(target_os = "linux", target_os = "android")))]
mod tests {
    use super::*;

    #[test]
    fn test_from_hwcap_neon_bit() {
        assert!(from_hwcap(0).is_empty());
        assert_eq!(from_hwcap(HWCAP_NEON), vec![Capability::Neon]);
        // VFPv4 and friends say nothing about Advanced SIMD.
        assert!(from_hwcap(1 << 16).is_empty());
    }
}
