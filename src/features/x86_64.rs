//! CPUID / XGETBV based detection.

use std::arch::x86_64::{CpuidResult, __cpuid_count, _xgetbv};

use super::Capability;

/// XMM + YMM state enabled by the OS.
const XCR0_AVX: u64 = 0x6;
/// XMM + YMM + opmask + ZMM_Hi256 + Hi16_ZMM.
const XCR0_AVX512: u64 = 0xE6;

fn bit(reg: u32, n: u32) -> bool {
    (reg >> n) & 1 == 1
}

#[allow(unused_unsafe)]
fn cpuid(leaf: u32, subleaf: u32) -> CpuidResult {
    // SAFETY: cpuid is available on every x86_64 processor.
    unsafe { __cpuid_count(leaf, subleaf) }
}

/// Probe the running processor.
pub(super) fn detect() -> Vec<Capability> {
    let mut caps = Vec::new();

    let max_leaf = cpuid(0, 0).eax;
    let leaf1 = cpuid(1, 0);

    if bit(leaf1.edx, 25) {
        caps.push(Capability::Sse);
    }
    if bit(leaf1.edx, 26) {
        caps.push(Capability::Sse2);
    }
    if bit(leaf1.ecx, 0) {
        caps.push(Capability::Sse3);
    }
    if bit(leaf1.ecx, 19) {
        caps.push(Capability::Sse41);
    }
    if bit(leaf1.ecx, 20) {
        caps.push(Capability::Sse42);
    }

    // OSXSAVE must be set before XGETBV may execute.
    let xcr0 = if bit(leaf1.ecx, 27) {
        // SAFETY: OSXSAVE reported above.
        unsafe { _xgetbv(0) }
    } else {
        0
    };
    let os_avx = xcr0 & XCR0_AVX == XCR0_AVX;
    let os_avx512 = xcr0 & XCR0_AVX512 == XCR0_AVX512;

    if os_avx && bit(leaf1.ecx, 28) {
        caps.push(Capability::Avx);
    }
    if os_avx && bit(leaf1.ecx, 12) {
        caps.push(Capability::Fma);
    }

    if max_leaf >= 7 {
        let leaf7 = cpuid(7, 0);

        if os_avx && bit(leaf7.ebx, 3) && bit(leaf7.ebx, 5) && bit(leaf7.ebx, 8) {
            caps.push(Capability::Avx2);
        }
        if os_avx512 && bit(leaf7.ebx, 16) && bit(leaf7.ebx, 30) {
            caps.push(Capability::Avx512);
        }
        let vnni_bits = bit(leaf7.ebx, 16)
            && bit(leaf7.ebx, 17)
            && bit(leaf7.ebx, 30)
            && bit(leaf7.ebx, 31)
            && bit(leaf7.ecx, 11);
        if os_avx512 && vnni_bits {
            caps.push(Capability::Vnni);
        }
    }

    caps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_helper() {
        assert!(bit(0b100, 2));
        assert!(!bit(0b100, 1));
        assert!(bit(1 << 31, 31));
    }

    #[test]
    fn test_detect_agrees_with_std() {
        let caps = detect();
        assert_eq!(
            caps.contains(&Capability::Sse2),
            std::arch::is_x86_feature_detected!("sse2")
        );
        assert_eq!(
            caps.contains(&Capability::Sse41),
            std::arch::is_x86_feature_detected!("sse4.1")
        );
        if caps.contains(&Capability::Avx2) {
            assert!(std::arch::is_x86_feature_detected!("avx2"));
        }
        if caps.contains(&Capability::Fma) {
            assert!(std::arch::is_x86_feature_detected!("fma"));
        }
    }
}
