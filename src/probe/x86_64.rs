//! x86_64 probe bodies and catalog.
//!
//! Each probe is declared once with [`x86_probe!`]: a register class and the
//! instruction template, written against the assembler placeholder `\i`.
//! The emitter wraps the template in `.irp` so the throughput body expands
//! it over registers 0..9 and the latency body expands it ten times over
//! register 0.

use super::{ProbeFamily, ProbeSpec};
use crate::features::Capability;

/// Copies of the group per loop iteration.
pub const UNROLL: u64 = 10;

macro_rules! disjoint {
    () => {
        "0,1,2,3,4,5,6,7,8,9"
    };
}

macro_rules! chained {
    () => {
        "0,0,0,0,0,0,0,0,0,0"
    };
}

macro_rules! zero {
    (sse) => {
        "xorps xmm\\i, xmm\\i"
    };
    (vex128) => {
        "vxorps xmm\\i, xmm\\i, xmm\\i"
    };
    (avx) => {
        "vxorps ymm\\i, ymm\\i, ymm\\i"
    };
    (avx512) => {
        "vpxord zmm\\i, zmm\\i, zmm\\i"
    };
}

macro_rules! epilogue {
    (sse) => {
        ""
    };
    (vex128) => {
        ""
    };
    (avx) => {
        "vzeroupper"
    };
    (avx512) => {
        "vzeroupper"
    };
}

macro_rules! emit {
    ($class:ident, $regs:expr, [$($body:literal),+], $runs:expr) => {{
        let runs: u64 = $runs;
        if runs == 0 {
            return 0;
        }
        ::std::arch::asm!(
            ".irp i, 0,1,2,3,4,5,6,7,8,9,10,11,12,13,14,15",
            zero!($class),
            ".endr",
            "2:",
            concat!(".irp i, ", $regs),
            $($body,)+
            ".endr",
            "dec {n}",
            "jnz 2b",
            epilogue!($class),
            n = inout(reg) runs => _,
            // Only xmm0-15 are named: ymm/zmm clobbers need the AVX target
            // feature at compile time. The upper lanes are volatile under
            // both SysV and Win64, the wide classes end in `vzeroupper`, and
            // no template touches registers 16-31.
            out("xmm0") _, out("xmm1") _, out("xmm2") _, out("xmm3") _,
            out("xmm4") _, out("xmm5") _, out("xmm6") _, out("xmm7") _,
            out("xmm8") _, out("xmm9") _, out("xmm10") _, out("xmm11") _,
            out("xmm12") _, out("xmm13") _, out("xmm14") _, out("xmm15") _,
            options(nostack, nomem),
        );
        runs * UNROLL
    }};
}

macro_rules! x86_probe {
    ($name:ident, $class:ident, [$($body:literal),+ $(,)?]) => {
        #[allow(missing_docs)]
        pub mod $name {
            use super::UNROLL;

            /// Ten independent copies per iteration.
            ///
            /// # Safety
            ///
            /// The host must support every instruction in the template.
            #[inline(never)]
            pub unsafe fn throughput(runs: u64, _scratch: *mut u8) -> u64 {
                emit!($class, disjoint!(), [$($body),+], runs)
            }

            /// Ten dependent copies per iteration.
            ///
            /// # Safety
            ///
            /// The host must support every instruction in the template.
            #[inline(never)]
            pub unsafe fn latency(runs: u64, _scratch: *mut u8) -> u64 {
                emit!($class, chained!(), [$($body),+], runs)
            }
        }
    };
}

x86_probe!(mulps_sse, sse, ["mulps xmm\\i, xmm\\i"]);
x86_probe!(mulpd_sse, sse, ["mulpd xmm\\i, xmm\\i"]);
x86_probe!(vfmadd132ps_sse, vex128, ["vfmadd132ps xmm\\i, xmm\\i, xmm\\i"]);
x86_probe!(
    vpmaddwd_vpaddd_sse,
    vex128,
    ["vpmaddwd xmm\\i, xmm\\i, xmm\\i", "vpaddd xmm\\i, xmm\\i, xmm\\i"]
);

x86_probe!(vfmadd132ps_avx, avx, ["vfmadd132ps ymm\\i, ymm\\i, ymm\\i"]);
x86_probe!(vfmadd132pd_avx, avx, ["vfmadd132pd ymm\\i, ymm\\i, ymm\\i"]);

x86_probe!(vpmaddwd_avx2, avx, ["vpmaddwd ymm\\i, ymm\\i, ymm\\i"]);
x86_probe!(vpaddd_avx2, avx, ["vpaddd ymm\\i, ymm\\i, ymm\\i"]);
x86_probe!(vpand_avx2, avx, ["vpand ymm\\i, ymm\\i, ymm\\i"]);
x86_probe!(
    vpmaddwd_vpaddd_avx2,
    avx,
    ["vpmaddwd ymm\\i, ymm\\i, ymm\\i", "vpaddd ymm\\i, ymm\\i, ymm\\i"]
);
x86_probe!(vpackssdw_avx2, avx, ["vpackssdw ymm\\i, ymm\\i, ymm\\i"]);
x86_probe!(vpacksswb_avx2, avx, ["vpacksswb ymm\\i, ymm\\i, ymm\\i"]);

x86_probe!(vpmaddwd_512, avx512, ["vpmaddwd zmm\\i, zmm\\i, zmm\\i"]);
x86_probe!(vpaddd_512, avx512, ["vpaddd zmm\\i, zmm\\i, zmm\\i"]);
x86_probe!(vfmadd132ps_512, avx512, ["vfmadd132ps zmm\\i, zmm\\i, zmm\\i"]);

x86_probe!(vpdpbusd_vnni, avx512, ["vpdpbusd zmm\\i, zmm\\i, zmm\\i"]);

/// Probe families in execution order.
pub static CATALOG: &[ProbeFamily] = &[
    ProbeFamily {
        title: "AVX/FMA",
        requires: &[Capability::Avx, Capability::Fma],
        warmup: vfmadd132ps_avx::throughput,
        probes: &[
            ProbeSpec::new(
                "vfmadd132ps_avx",
                vfmadd132ps_avx::throughput,
                vfmadd132ps_avx::latency,
            )
            .width(8 * 2),
            ProbeSpec::new(
                "vfmadd132pd_avx",
                vfmadd132pd_avx::throughput,
                vfmadd132pd_avx::latency,
            )
            .width(4 * 2),
        ],
    },
    ProbeFamily {
        title: "AVX2",
        requires: &[Capability::Avx2],
        warmup: vpmaddwd_avx2::throughput,
        probes: &[
            ProbeSpec::new("vpmaddwd_avx2", vpmaddwd_avx2::throughput, vpmaddwd_avx2::latency)
                .width(8 * 3),
            ProbeSpec::new("vpaddd_avx2", vpaddd_avx2::throughput, vpaddd_avx2::latency).width(8),
            ProbeSpec::new("vpand_avx2", vpand_avx2::throughput, vpand_avx2::latency).width(8),
            ProbeSpec::new(
                "vpmaddwd_vpaddd_avx2",
                vpmaddwd_vpaddd_avx2::throughput,
                vpmaddwd_vpaddd_avx2::latency,
            )
            .width(16 + 8 + 8),
            ProbeSpec::new("vpackssdw_avx2", vpackssdw_avx2::throughput, vpackssdw_avx2::latency)
                .width(16),
            ProbeSpec::new("vpacksswb_avx2", vpacksswb_avx2::throughput, vpacksswb_avx2::latency)
                .width(32),
        ],
    },
    ProbeFamily {
        title: "AVX-512",
        requires: &[Capability::Avx512],
        warmup: vpmaddwd_512::throughput,
        probes: &[
            ProbeSpec::new("vpmaddwd_512", vpmaddwd_512::throughput, vpmaddwd_512::latency)
                .width(16 * 3),
            ProbeSpec::new("vpaddd_512", vpaddd_512::throughput, vpaddd_512::latency).width(16),
            ProbeSpec::new(
                "vfmadd132ps_512",
                vfmadd132ps_512::throughput,
                vfmadd132ps_512::latency,
            )
            .width(16 * 2),
        ],
    },
    ProbeFamily {
        title: "AVX-512 VNNI",
        requires: &[Capability::Vnni],
        warmup: vpdpbusd_vnni::throughput,
        probes: &[ProbeSpec::new(
            "vpdpbusd_vnni",
            vpdpbusd_vnni::throughput,
            vpdpbusd_vnni::latency,
        )
        .width(112)],
    },
    ProbeFamily {
        title: "SSE",
        requires: &[Capability::Sse2],
        warmup: mulps_sse::throughput,
        probes: &[
            ProbeSpec::new("mulps_sse", mulps_sse::throughput, mulps_sse::latency).width(4 * 2),
            ProbeSpec::new("mulpd_sse", mulpd_sse::throughput, mulpd_sse::latency).width(2 * 2),
            ProbeSpec::new(
                "vfmadd132ps_sse",
                vfmadd132ps_sse::throughput,
                vfmadd132ps_sse::latency,
            )
            .width(4 * 2)
            .requires(&[Capability::Fma]),
            ProbeSpec::new(
                "vpmaddwd_vpaddd_sse",
                vpmaddwd_vpaddd_sse::throughput,
                vpmaddwd_vpaddd_sse::latency,
            )
            .width(8 + 4 + 4)
            .requires(&[Capability::Avx]),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureSet;

    #[test]
    fn test_register_lists_match_unroll() {
        let disjoint: Vec<&str> = disjoint!().split(',').collect();
        let chained: Vec<&str> = chained!().split(',').collect();
        assert_eq!(disjoint.len() as u64, UNROLL);
        assert_eq!(chained.len() as u64, UNROLL);
        assert!(chained.iter().all(|r| *r == "0"));
        let mut unique = disjoint.clone();
        unique.dedup();
        assert_eq!(unique.len(), disjoint.len());
    }

    #[test]
    fn test_probe_reports_executed_groups() {
        // SAFETY: SSE2 is part of the x86_64 baseline.
        unsafe {
            assert_eq!(mulps_sse::throughput(1_000, std::ptr::null_mut()), 10_000);
            assert_eq!(mulps_sse::latency(1_000, std::ptr::null_mut()), 10_000);
            assert_eq!(mulpd_sse::throughput(0, std::ptr::null_mut()), 0);
        }
    }

    #[test]
    fn test_guarded_probes_execute_when_supported() {
        let host = FeatureSet::detect();
        for family in CATALOG {
            if !host.supports_all(family.requires) {
                continue;
            }
            for probe in family.probes {
                if !host.supports_all(probe.requires) {
                    continue;
                }
                // SAFETY: guards checked above.
                let ops = unsafe { (probe.throughput)(100, std::ptr::null_mut()) };
                assert_eq!(ops, 100 * UNROLL, "{}", probe.name);
                let ops = unsafe { (probe.latency)(100, std::ptr::null_mut()) };
                assert_eq!(ops, 100 * UNROLL, "{}", probe.name);
            }
        }
    }

    #[test]
    fn test_wide_bodies_preserve_caller_vectors() {
        let host = FeatureSet::detect();
        let live = std::hint::black_box([1.5f64, -2.25, 3.0, 0.125]);
        let mut ran = 0;
        for family in CATALOG {
            let wide = family
                .requires
                .iter()
                .any(|c| matches!(c, Capability::Avx | Capability::Avx2 | Capability::Avx512));
            if !wide || !host.supports_all(family.requires) {
                continue;
            }
            for probe in family.probes {
                if !host.supports_all(probe.requires) {
                    continue;
                }
                // SAFETY: guards checked above.
                unsafe { (probe.latency)(10, std::ptr::null_mut()) };
                ran += 1;
            }
        }
        // The vector kept live across every call must come back bit-exact.
        let after = std::hint::black_box(live);
        assert_eq!(after.map(f64::to_bits), [1.5f64, -2.25, 3.0, 0.125].map(f64::to_bits));
        assert_eq!(after.iter().sum::<f64>(), 2.375, "after {ran} wide bodies");
    }
}
