//! Auxiliary-vector based detection.

use super::Capability;

#[cfg(any(target_os = "linux", target_os = "android"))]
mod hwcap {
    // linux/arch/arm64/include/uapi/asm/hwcap.h
    pub const HWCAP_ASIMDDP: u64 = 1 << 20;
    pub const HWCAP2_I8MM: u64 = 1 << 13;
    pub const HWCAP2_BF16: u64 = 1 << 14;
}

/// Probe the running processor.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub(super) fn detect() -> Vec<Capability> {
    // SAFETY: getauxval only reads the process auxiliary vector.
    let (hwcap, hwcap2) = unsafe {
        (
            libc::getauxval(libc::AT_HWCAP) as u64,
            libc::getauxval(libc::AT_HWCAP2) as u64,
        )
    };
    from_hwcaps(hwcap, hwcap2)
}

/// Probe the running processor.
#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub(super) fn detect() -> Vec<Capability> {
    let mut caps = vec![Capability::Neon];
    if std::arch::is_aarch64_feature_detected!("dotprod") {
        caps.push(Capability::DotProd);
    }
    if std::arch::is_aarch64_feature_detected!("i8mm") {
        caps.push(Capability::I8mm);
    }
    if std::arch::is_aarch64_feature_detected!("bf16") {
        caps.push(Capability::Bf16);
    }
    caps
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn from_hwcaps(hwcap: u64, hwcap2: u64) -> Vec<Capability> {
    // Advanced SIMD is mandatory on every AArch64 Linux target.
    let mut caps = vec![Capability::Neon];
    if hwcap & hwcap::HWCAP_ASIMDDP != 0 {
        caps.push(Capability::DotProd);
    }
    if hwcap2 & hwcap::HWCAP2_I8MM != 0 {
        caps.push(Capability::I8mm);
    }
    if hwcap2 & hwcap::HWCAP2_BF16 != 0 {
        caps.push(Capability::Bf16);
    }
    caps
}
