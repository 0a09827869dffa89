//! 32-bit Arm NEON probe bodies and catalog.
//!
//! Ten-way unroll over `d`/`q` registers. Templates whose multiply takes a
//! scalar operand from `d0` (the by-element forms only encode `d0`..`d7`
//! for 16-bit lanes) run their throughput copies over registers 6..15 so
//! the destinations never alias the scalar source.
//!
//! Only compiled when the build enables NEON, since the bodies clobber the
//! `q` registers.

use super::{ProbeFamily, ProbeSpec};
use crate::features::Capability;

macro_rules! regs {
    (disjoint, 10) => {
        "0,1,2,3,4,5,6,7,8,9"
    };
    (start6, 10) => {
        "6,7,8,9,10,11,12,13,14,15"
    };
    (chained, 10) => {
        "0,0,0,0,0,0,0,0,0,0"
    };
    (single, $n:tt) => {
        "0"
    };
}

macro_rules! emit {
    (@run $runs:expr, $regs:expr, [$($body:literal),+], $ops:expr, [$($operand:tt)*], $options:tt) => {{
        // General-purpose registers are 32 bits wide here.
        let trips = u32::try_from($runs).unwrap_or(u32::MAX);
        if trips == 0 {
            return 0;
        }
        ::std::arch::asm!(
            ".irp i, 0,1,2,3,4,5,6,7,8,9,10,11,12,13,14,15",
            "veor q\\i, q\\i, q\\i",
            ".endr",
            "2:",
            concat!(".irp i, ", $regs),
            $($body,)+
            ".endr",
            "subs {n}, {n}, #1",
            "bne 2b",
            n = inout(reg) trips => _,
            $($operand)*
            out("q0") _, out("q1") _, out("q2") _, out("q3") _,
            out("q4") _, out("q5") _, out("q6") _, out("q7") _,
            out("q8") _, out("q9") _, out("q10") _, out("q11") _,
            out("q12") _, out("q13") _, out("q14") _, out("q15") _,
            options $options,
        );
        u64::from(trips) * $ops
    }};
    (reg, $regs:expr, [$($body:literal),+], $runs:expr, $ptr:expr, $ops:expr) => {{
        let _ = $ptr;
        emit!(@run $runs, $regs, [$($body),+], $ops, [], (nostack, nomem))
    }};
    (mem, $regs:expr, [$($body:literal),+], $runs:expr, $ptr:expr, $ops:expr) => {{
        let ptr: *mut u8 = $ptr;
        emit!(@run $runs, $regs, [$($body),+], $ops, [ptr = in(reg) ptr,], (nostack))
    }};
}

macro_rules! v7_probe {
    ($name:ident, $kind:ident, $spread:ident, [$($body:literal),+ $(,)?]) => {
        #[allow(missing_docs)]
        pub mod $name {
            /// Independent copies across disjoint registers.
            ///
            /// # Safety
            ///
            /// The host must support NEON, and `scratch` must be valid for
            /// memory templates.
            #[inline(never)]
            pub unsafe fn throughput(runs: u64, scratch: *mut u8) -> u64 {
                emit!($kind, regs!($spread, 10), [$($body),+], runs, scratch, 10)
            }

            /// Dependent copies through register 0.
            ///
            /// # Safety
            ///
            /// Same as [`throughput`].
            #[inline(never)]
            pub unsafe fn latency(runs: u64, scratch: *mut u8) -> u64 {
                emit!($kind, regs!(chained, 10), [$($body),+], runs, scratch, 10)
            }
        }
    };
    ($name:ident, $kind:ident, ops = $ops:tt,
     throughput: [$($tp:literal),+ $(,)?],
     latency: [$($lat:literal),+ $(,)?] $(,)?) => {
        #[allow(missing_docs)]
        pub mod $name {
            /// Independent body.
            ///
            /// # Safety
            ///
            /// The host must support NEON, and `scratch` must be valid.
            #[inline(never)]
            pub unsafe fn throughput(runs: u64, scratch: *mut u8) -> u64 {
                emit!($kind, regs!(single, $ops), [$($tp),+], runs, scratch, $ops)
            }

            /// Dependent body.
            ///
            /// # Safety
            ///
            /// Same as [`throughput`].
            #[inline(never)]
            pub unsafe fn latency(runs: u64, scratch: *mut u8) -> u64 {
                emit!($kind, regs!(single, $ops), [$($lat),+], runs, scratch, $ops)
            }
        }
    };
}

v7_probe!(nop, reg, disjoint, ["nop"]);
v7_probe!(eor_d, reg, disjoint, ["veor d\\i, d\\i, d\\i"]);
v7_probe!(eor_q, reg, disjoint, ["veor q\\i, q\\i, q\\i"]);

// Loads and stores.
v7_probe!(ld1_d, mem, disjoint, ["vld1.32 {{d\\i}}, [{ptr}]"]);
v7_probe!(
    vld1d_x2,
    mem,
    ops = 10,
    throughput: [
        "vld1.32 {{d0, d1}}, [{ptr}]", "vld1.32 {{d2, d3}}, [{ptr}]",
        "vld1.32 {{d4, d5}}, [{ptr}]", "vld1.32 {{d6, d7}}, [{ptr}]",
        "vld1.32 {{d8, d9}}, [{ptr}]", "vld1.32 {{d10, d11}}, [{ptr}]",
        "vld1.32 {{d12, d13}}, [{ptr}]", "vld1.32 {{d14, d15}}, [{ptr}]",
        "vld1.32 {{d16, d17}}, [{ptr}]", "vld1.32 {{d18, d19}}, [{ptr}]",
    ],
    latency: [".rept 10", "vld1.32 {{d0, d1}}, [{ptr}]", ".endr"],
);
v7_probe!(ld1_q, mem, disjoint, ["vld1.32 {{q\\i}}, [{ptr}]"]);
v7_probe!(pld, mem, disjoint, ["pld [{ptr}]"]);
v7_probe!(st1_d, mem, disjoint, ["vst1.32 {{d\\i}}, [{ptr}]"]);
v7_probe!(
    ldst1_d,
    mem,
    disjoint,
    ["vld1.32 {{d\\i}}, [{ptr}]", "vst1.32 {{d\\i}}, [{ptr}]"]
);

// Integer.
v7_probe!(padal, reg, disjoint, ["vpadal.s16 q\\i, q\\i"]);
v7_probe!(padd, reg, disjoint, ["vpadd.i32 d\\i, d\\i, d\\i"]);
v7_probe!(mla_s32, reg, disjoint, ["vmla.i32 q\\i, q\\i, q\\i"]);
v7_probe!(vmovl_s8, reg, start6, ["vmovl.s8 q\\i, d0"]);
v7_probe!(mla_s16, reg, disjoint, ["vmla.i16 q\\i, q\\i, q\\i"]);
v7_probe!(mla_s16_lane, reg, start6, ["vmla.i16 q\\i, q1, d0[0]"]);
v7_probe!(mla_s16_lane_d, reg, start6, ["vmla.i16 d\\i, d1, d0[0]"]);
v7_probe!(
    ldrd_mla_s16_lane,
    mem,
    ops = 10,
    throughput: [
        ".irp j, 2,3,4,5,6,7,8,9,10,11",
        "vld1.32 {{d3}}, [{ptr}]",
        "vmla.i16 q\\j, q0, d0[0]",
        ".endr",
    ],
    latency: [".rept 10", "vld1.32 {{d0}}, [{ptr}]", "vmla.i16 q1, q0, d0[0]", ".endr"],
);
v7_probe!(
    ldrd_mla_s16_lane_1_4,
    mem,
    ops = 12,
    throughput: [
        "vld1.32 {{d3}}, [{ptr}]",
        "vmla.i16 q2, q0, d0[0]", "vmla.i16 q3, q0, d0[0]",
        "vmla.i16 q4, q0, d0[0]", "vmla.i16 q5, q0, d0[0]",
        "vld1.32 {{d3}}, [{ptr}]",
        "vmla.i16 q6, q0, d0[0]", "vmla.i16 q7, q0, d0[0]",
        "vmla.i16 q8, q0, d0[0]", "vmla.i16 q9, q0, d0[0]",
        "vld1.32 {{d3}}, [{ptr}]",
        "vmla.i16 q10, q0, d0[0]", "vmla.i16 q11, q0, d0[0]",
        "vmla.i16 q12, q0, d0[0]", "vmla.i16 q13, q0, d0[0]",
    ],
    latency: [".rept 12", "vld1.32 {{d0}}, [{ptr}]", "vmla.i16 q1, q0, d0[0]", ".endr"],
);
v7_probe!(
    ld1d_mlad_s16,
    mem,
    disjoint,
    ["vld1.32 {{d10}}, [{ptr}]", "vmla.i16 d\\i, d\\i, d\\i"]
);
v7_probe!(mlal_s8, reg, start6, ["vmlal.s8 q\\i, d0, d0"]);
v7_probe!(mlal_s16, reg, start6, ["vmlal.s16 q\\i, d0, d0"]);
v7_probe!(mlal_s16_lane, reg, start6, ["vmlal.s16 q\\i, d\\i, d0[0]"]);

// Float.
v7_probe!(mla_f32, reg, disjoint, ["vmla.f32 q\\i, q\\i, q\\i"]);
v7_probe!(mla_f32_d, reg, disjoint, ["vmla.f32 d\\i, d\\i, d\\i"]);
v7_probe!(mla_f32d_lane, reg, start6, ["vmla.f32 d\\i, d\\i, d0[0]"]);
v7_probe!(mla_f32q_lane, reg, start6, ["vmla.f32 q\\i, q\\i, d0[0]"]);
v7_probe!(
    ld1d_fmlad,
    mem,
    disjoint,
    ["vld1.32 {{d22}}, [{ptr}]", "vmla.f32 d\\i, d\\i, d\\i"]
);
v7_probe!(
    ld1d_fmlaq,
    mem,
    disjoint,
    ["vld1.32 {{d22}}, [{ptr}]", "vmla.f32 q\\i, q\\i, q\\i"]
);
v7_probe!(
    ld1dx2_fmlad_lane,
    mem,
    start6,
    ["vld1.32 {{d2, d3}}, [{ptr}]", "vmla.f32 d\\i, d\\i, d0[0]"]
);
v7_probe!(
    ld1dx2_fmlaq_lane,
    mem,
    start6,
    ["vld1.32 {{d2, d3}}, [{ptr}]", "vmla.f32 q\\i, q\\i, d0[0]"]
);

v7_probe!(mul_s32, reg, disjoint, ["vmul.i32 q\\i, q\\i, q\\i"]);
v7_probe!(mul_f32, reg, disjoint, ["vmul.f32 q\\i, q\\i, q\\i"]);
v7_probe!(cvt, reg, disjoint, ["vcvt.f32.s32 q\\i, q\\i"]);
v7_probe!(qrdmulh, reg, disjoint, ["vqrdmulh.s32 q\\i, q\\i, q\\i"]);
v7_probe!(rshl, reg, disjoint, ["vrshl.s32 q\\i, q\\i, q\\i"]);

macro_rules! row {
    ($name:ident) => {
        ProbeSpec::new(stringify!($name), $name::throughput, $name::latency)
    };
}

/// Probe families in execution order.
pub static CATALOG: &[ProbeFamily] = &[ProbeFamily {
    title: "NEON",
    requires: &[Capability::Neon],
    warmup: mla_s32::throughput,
    probes: &[
        row!(nop).width(1),
        row!(eor_d).width(2),
        row!(eor_q).width(4),
        row!(ld1_d).width(2),
        row!(vld1d_x2).width(4),
        row!(ld1_q).width(4),
        row!(pld).width(4),
        row!(st1_d).width(2),
        row!(ldst1_d).width(2),
        row!(padal),
        row!(padd),
        row!(mla_s32).width(8),
        row!(vmovl_s8).width(8),
        row!(mla_s16).width(16),
        row!(mla_s16_lane).width(16),
        row!(mla_s16_lane_d).width(8),
        row!(ldrd_mla_s16_lane).width(16),
        row!(ldrd_mla_s16_lane_1_4).width(16),
        row!(ld1d_mlad_s16).width(8),
        row!(mlal_s8).width(16),
        row!(mlal_s16).width(8),
        row!(mlal_s16_lane).width(8),
        row!(mla_f32).width(8),
        row!(mla_f32_d).width(4),
        row!(mla_f32d_lane).width(4),
        row!(mla_f32q_lane).width(8),
        row!(ld1d_fmlad).width(4),
        row!(ld1d_fmlaq).width(8),
        row!(ld1dx2_fmlad_lane).width(4),
        row!(ld1dx2_fmlaq_lane).width(8),
        row!(mul_s32),
        row!(mul_f32),
        row!(cvt),
        row!(qrdmulh),
        row!(rshl),
    ],
}];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureSet;
    use crate::probe::ScratchBuffer;

    #[test]
    fn test_register_lists() {
        let start6: Vec<u32> = regs!(start6, 10)
            .split(',')
            .map(|r| r.parse().unwrap())
            .collect();
        assert_eq!(start6, (6..16).collect::<Vec<_>>());
        assert_eq!(regs!(disjoint, 10).split(',').count(), 10);
        assert!(regs!(chained, 10).split(',').all(|r| r == "0"));
    }

    #[test]
    fn test_table_shape() {
        let family = &CATALOG[0];
        assert_eq!(family.requires, &[Capability::Neon]);
        assert_eq!(family.probes.len(), 35);
        let names: Vec<&str> = family.probes.iter().map(|p| p.name).collect();
        for expected in ["eor_d", "ld1_d", "mla_s32", "mlal_s8", "mla_f32", "rshl"] {
            assert!(names.contains(&expected), "{expected} missing");
        }
    }

    #[test]
    fn test_every_supported_body_runs() {
        let host = FeatureSet::detect();
        if !host.is_supported(Capability::Neon) {
            return;
        }
        let scratch = ScratchBuffer::global().as_mut_ptr();
        for probe in CATALOG[0].probes {
            // SAFETY: NEON checked above, scratch is the shared buffer.
            let tp = unsafe { (probe.throughput)(32, scratch) };
            let lat = unsafe { (probe.latency)(32, scratch) };
            assert!(tp > 0, "{}", probe.name);
            assert_eq!(tp, lat, "{}", probe.name);
        }
        assert_eq!(unsafe { ldrd_mla_s16_lane_1_4::throughput(2, scratch) }, 24);
    }
}
