//! AArch64 probe bodies and catalog.
//!
//! Same scheme as the x86_64 table: one template per probe, expanded by
//! `.irp` over disjoint vector registers (throughput) or over `v0` only
//! (latency). Templates use `\i` for the register number and `\()` to
//! separate it from an arrangement suffix. Load/store templates address the
//! scratch buffer through `{ptr}`.
//!
//! Most dual-issue bodies interleave a load, `ins` or `dup` with a fixed
//! number of multiply-accumulates, so they are written out in full rather
//! than templated. Bodies that move through a general-purpose register name
//! it `{x}`.
//!
//! Instructions the assembler may reject without `+dotprod`/`+i8mm`/`+bf16`
//! are written as `.inst` words with the register fields filled in.

use super::{ProbeFamily, ProbeSpec};
use crate::features::Capability;

macro_rules! regs {
    (disjoint, 20) => {
        "0,1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18,19"
    };
    (chained, 20) => {
        "0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0"
    };
    (single, $n:tt) => {
        "0"
    };
}

macro_rules! emit {
    (@run $runs:expr, $regs:expr, [$($body:literal),+], $ops:expr, [$($operand:tt)*], $options:tt) => {{
        let runs: u64 = $runs;
        if runs == 0 {
            return 0;
        }
        ::std::arch::asm!(
            ".irp i, 0,1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18,19,20,21,22,23,24,25,26,27,28,29,30,31",
            "movi v\\i\\().16b, #0",
            ".endr",
            "2:",
            concat!(".irp i, ", $regs),
            $($body,)+
            ".endr",
            "subs {n}, {n}, #1",
            "b.ne 2b",
            n = inout(reg) runs => _,
            $($operand)*
            out("v0") _, out("v1") _, out("v2") _, out("v3") _,
            out("v4") _, out("v5") _, out("v6") _, out("v7") _,
            out("v8") _, out("v9") _, out("v10") _, out("v11") _,
            out("v12") _, out("v13") _, out("v14") _, out("v15") _,
            out("v16") _, out("v17") _, out("v18") _, out("v19") _,
            out("v20") _, out("v21") _, out("v22") _, out("v23") _,
            out("v24") _, out("v25") _, out("v26") _, out("v27") _,
            out("v28") _, out("v29") _, out("v30") _, out("v31") _,
            options $options,
        );
        runs * $ops
    }};
    (reg, $regs:expr, [$($body:literal),+], $runs:expr, $ptr:expr, $ops:expr) => {{
        let _ = $ptr;
        emit!(@run $runs, $regs, [$($body),+], $ops, [], (nostack, nomem))
    }};
    (mem, $regs:expr, [$($body:literal),+], $runs:expr, $ptr:expr, $ops:expr) => {{
        let ptr: *mut u8 = $ptr;
        emit!(@run $runs, $regs, [$($body),+], $ops, [ptr = in(reg) ptr,], (nostack))
    }};
    // Memory bodies that also need a general-purpose register as `{x}`.
    (memx, $regs:expr, [$($body:literal),+], $runs:expr, $ptr:expr, $ops:expr) => {{
        let ptr: *mut u8 = $ptr;
        emit!(@run $runs, $regs, [$($body),+], $ops, [ptr = in(reg) ptr, x = out(reg) _,], (nostack))
    }};
}

macro_rules! a64_probe {
    // Template expanded over the register list.
    ($name:ident, $kind:ident, $unroll:tt, [$($body:literal),+ $(,)?]) => {
        #[allow(missing_docs)]
        pub mod $name {
            /// Independent copies across disjoint registers.
            ///
            /// # Safety
            ///
            /// The host must support every instruction in the template, and
            /// `scratch` must be valid for memory templates.
            #[inline(never)]
            pub unsafe fn throughput(runs: u64, scratch: *mut u8) -> u64 {
                emit!($kind, regs!(disjoint, $unroll), [$($body),+], runs, scratch, $unroll)
            }

            /// Dependent copies through `v0`.
            ///
            /// # Safety
            ///
            /// Same as [`throughput`].
            #[inline(never)]
            pub unsafe fn latency(runs: u64, scratch: *mut u8) -> u64 {
                emit!($kind, regs!(chained, $unroll), [$($body),+], runs, scratch, $unroll)
            }
        }
    };
    // Fully written bodies, one expansion per iteration. Nested `.irp`
    // blocks in these bodies must not reuse `i`.
    ($name:ident, $kind:ident, ops = $ops:tt,
     throughput: [$($tp:literal),+ $(,)?],
     latency: [$($lat:literal),+ $(,)?] $(,)?) => {
        #[allow(missing_docs)]
        pub mod $name {
            /// Independent body.
            ///
            /// # Safety
            ///
            /// The host must support every instruction in the body, and
            /// `scratch` must be valid for memory bodies.
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

// Loads and stores.
a64_probe!(ldd, mem, 20, ["ldr d\\i, [{ptr}]"]);
a64_probe!(ldq, mem, 20, ["ldr q\\i, [{ptr}]"]);
a64_probe!(stq, mem, 20, ["str q\\i, [{ptr}]"]);
a64_probe!(
    ldpq,
    mem,
    ops = 16,
    throughput: [
        "ldp q0, q1, [{ptr}]", "ldp q2, q3, [{ptr}]",
        "ldp q4, q5, [{ptr}]", "ldp q6, q7, [{ptr}]",
        "ldp q8, q9, [{ptr}]", "ldp q10, q11, [{ptr}]",
        "ldp q12, q13, [{ptr}]", "ldp q14, q15, [{ptr}]",
        "ldp q16, q17, [{ptr}]", "ldp q18, q19, [{ptr}]",
        "ldp q20, q21, [{ptr}]", "ldp q22, q23, [{ptr}]",
        "ldp q24, q25, [{ptr}]", "ldp q26, q27, [{ptr}]",
        "ldp q28, q29, [{ptr}]", "ldp q30, q31, [{ptr}]",
    ],
    latency: [
        ".rept 16",
        "ldp q0, q1, [{ptr}]",
        ".endr",
    ],
);
a64_probe!(
    lddx2,
    mem,
    ops = 10,
    throughput: [
        "ld1 {{v0.2s, v1.2s}}, [{ptr}]", "ld1 {{v2.2s, v3.2s}}, [{ptr}]",
        "ld1 {{v4.2s, v5.2s}}, [{ptr}]", "ld1 {{v6.2s, v7.2s}}, [{ptr}]",
        "ld1 {{v8.2s, v9.2s}}, [{ptr}]", "ld1 {{v10.2s, v11.2s}}, [{ptr}]",
        "ld1 {{v12.2s, v13.2s}}, [{ptr}]", "ld1 {{v14.2s, v15.2s}}, [{ptr}]",
        "ld1 {{v16.2s, v17.2s}}, [{ptr}]", "ld1 {{v18.2s, v19.2s}}, [{ptr}]",
    ],
    latency: [
        ".rept 10",
        "ld1 {{v0.2s, v1.2s}}, [{ptr}]",
        ".endr",
    ],
);
a64_probe!(ld1q, mem, 20, ["ld1 {{v\\i\\().4s}}, [{ptr}]"]);

// Arithmetic.
a64_probe!(eor, reg, 20, ["eor v\\i\\().16b, v\\i\\().16b, v\\i\\().16b"]);
a64_probe!(fmla, reg, 20, ["fmla v\\i\\().4s, v\\i\\().4s, v\\i\\().4s"]);
a64_probe!(fmlad, reg, 20, ["fmla v\\i\\().2s, v\\i\\().2s, v\\i\\().2s"]);
a64_probe!(
    fmla_x2,
    reg,
    20,
    [
        "fmla v\\i\\().4s, v\\i\\().4s, v\\i\\().4s",
        "fmla v\\i\\().4s, v\\i\\().4s, v\\i\\().4s",
    ]
);
a64_probe!(mla, reg, 20, ["mla v\\i\\().4s, v\\i\\().4s, v\\i\\().4s"]);
a64_probe!(fmul, reg, 20, ["fmul v\\i\\().4s, v\\i\\().4s, v\\i\\().4s"]);
a64_probe!(mul, reg, 20, ["mul v\\i\\().4s, v\\i\\().4s, v\\i\\().4s"]);
a64_probe!(addp, reg, 20, ["addp v\\i\\().4s, v\\i\\().4s, v\\i\\().4s"]);
// sdot v\i.4s, v\i.16b, v\i.16b
a64_probe!(sdot, reg, 20, [".inst 0x4e809400 | (\\i << 16) | (\\i << 5) | \\i"]);
// smmla v\i.4s, v\i.16b, v\i.16b
a64_probe!(smmla, reg, 20, [".inst 0x4e80a400 | (\\i << 16) | (\\i << 5) | \\i"]);
// bfmmla v\i.4s, v\i.8h, v\i.8h
a64_probe!(bfmmla, reg, 20, [".inst 0x6e40ec00 | (\\i << 16) | (\\i << 5) | \\i"]);
a64_probe!(sadalp, reg, 20, ["sadalp v\\i\\().4s, v\\i\\().8h"]);
a64_probe!(add, reg, 20, ["add v\\i\\().4s, v\\i\\().4s, v\\i\\().4s"]);
a64_probe!(fadd, reg, 20, ["fadd v\\i\\().4s, v\\i\\().4s, v\\i\\().4s"]);
a64_probe!(smull, reg, 20, ["smull v\\i\\().4s, v\\i\\().4h, v\\i\\().4h"]);
a64_probe!(smlal_4b, reg, 20, ["smlal v\\i\\().4s, v\\i\\().4h, v\\i\\().4h"]);
a64_probe!(smlal_8b, reg, 20, ["smlal v\\i\\().8h, v\\i\\().8b, v\\i\\().8b"]);
a64_probe!(
    dupd_lane_s8,
    reg,
    ops = 20,
    throughput: [
        ".irp j, 0,1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18,19",
        "dup v\\j\\().8b, v21.b[0]",
        ".endr",
    ],
    latency: [
        ".rept 20",
        "dup v0.8b, v0.b[0]",
        ".endr",
    ],
);
// The 16-bit by-element form only encodes v0..v15 as the index operand, so
// v15 is held out of the disjoint set.
a64_probe!(
    mlaq_lane_s16,
    reg,
    ops = 15,
    throughput: [
        ".irp j, 0,1,2,3,4,5,6,7,8,9,10,11,12,13,14",
        "mla v\\j\\().8h, v\\j\\().8h, v15.h[0]",
        ".endr",
    ],
    latency: [
        ".rept 15",
        "mla v0.8h, v0.8h, v0.h[0]",
        ".endr",
    ],
);
a64_probe!(sshll, reg, 20, ["sshll v\\i\\().8h, v\\i\\().8b, #0"]);
a64_probe!(tbl, reg, 20, ["tbl v\\i\\().8b, {{v\\i\\().16b}}, v\\i\\().8b"]);
a64_probe!(ins, reg, 20, ["ins v\\i\\().d[0], xzr"]);
a64_probe!(sqrdmulh, reg, 20, ["sqrdmulh v\\i\\().4s, v\\i\\().4s, v\\i\\().4s"]);
a64_probe!(usubl, reg, 20, ["usubl v\\i\\().4s, v\\i\\().4h, v\\i\\().4h"]);
a64_probe!(abs, reg, 20, ["abs v\\i\\().4s, v\\i\\().4s"]);
a64_probe!(fcvtzs, reg, 20, ["fcvtzs v\\i\\().4s, v\\i\\().4s"]);
a64_probe!(scvtf, reg, 20, ["scvtf v\\i\\().4s, v\\i\\().4s"]);
a64_probe!(fcvtns, reg, 20, ["fcvtns v\\i\\().4s, v\\i\\().4s"]);
a64_probe!(fcvtms, reg, 20, ["fcvtms v\\i\\().4s, v\\i\\().4s"]);
a64_probe!(fcvtps, reg, 20, ["fcvtps v\\i\\().4s, v\\i\\().4s"]);
a64_probe!(fcvtas, reg, 20, ["fcvtas v\\i\\().4s, v\\i\\().4s"]);
a64_probe!(fcvtn, reg, 20, ["fcvtn v\\i\\().4h, v\\i\\().4s"]);
a64_probe!(fcvtl, reg, 20, ["fcvtl v\\i\\().4s, v\\i\\().4h"]);

// Dual issue.
a64_probe!(ins_ldd, mem, 20, ["ldr d\\i, [{ptr}]", "ins v20.d[1], xzr"]);
a64_probe!(ldqstq, mem, 20, ["ldr q\\i, [{ptr}]", "str q\\i, [{ptr}, #64]"]);
a64_probe!(
    ldq_fmlaq,
    mem,
    20,
    ["ldr q\\i, [{ptr}]", "fmla v\\i\\().4s, v\\i\\().4s, v\\i\\().4s"]
);
a64_probe!(
    ldd_fmlad,
    mem,
    20,
    ["ldr d\\i, [{ptr}]", "fmla v\\i\\().2s, v\\i\\().2s, v\\i\\().2s"]
);
a64_probe!(
    smlal_8b_addp,
    reg,
    20,
    [
        "smlal v\\i\\().8h, v\\i\\().8b, v\\i\\().8b",
        "addp v\\i\\().4s, v\\i\\().4s, v\\i\\().4s",
    ]
);
a64_probe!(ldd_ldx_ins, memx, 20, ["ldr d\\i, [{ptr}]", "ldr {x}, [{ptr}]", "ins v20.d[1], {x}"]);
a64_probe!(
    stq_fmlaq_lane,
    mem,
    ops = 15,
    throughput: [
        "str q0, [{ptr}]", "fmla v16.4s, v16.4s, v16.s[0]", "fmla v17.4s, v17.4s, v17.s[0]",
        "fmla v18.4s, v18.4s, v18.s[0]", "str q0, [{ptr}]", "fmla v19.4s, v19.4s, v19.s[0]",
        "fmla v20.4s, v20.4s, v20.s[0]", "fmla v21.4s, v21.4s, v21.s[0]", "str q0, [{ptr}]",
        "fmla v22.4s, v22.4s, v22.s[0]", "fmla v23.4s, v23.4s, v23.s[0]",
        "fmla v24.4s, v24.4s, v24.s[0]", "str q0, [{ptr}]", "fmla v25.4s, v25.4s, v25.s[0]",
        "fmla v26.4s, v26.4s, v26.s[0]", "fmla v27.4s, v27.4s, v27.s[0]", "str q0, [{ptr}]",
        "fmla v28.4s, v28.4s, v28.s[0]", "fmla v29.4s, v29.4s, v29.s[0]",
        "fmla v30.4s, v30.4s, v30.s[0]",
    ],
    latency: [
        ".rept 15", "str q0, [{ptr}]", "fmla v0.4s, v0.4s, v0.s[0]", ".endr",
    ],
);
a64_probe!(
    ldq_fmlaq_sep,
    mem,
    ops = 16,
    throughput: [
        "ldr q0, [{ptr}]", "fmla v16.4s, v16.4s, v16.4s", "fmla v17.4s, v17.4s, v17.4s",
        "ldr q2, [{ptr}]", "fmla v18.4s, v18.4s, v18.4s", "fmla v19.4s, v19.4s, v19.4s",
        "ldr q4, [{ptr}]", "fmla v20.4s, v20.4s, v20.4s", "fmla v21.4s, v21.4s, v21.4s",
        "ldr q6, [{ptr}]", "fmla v22.4s, v22.4s, v22.4s", "fmla v23.4s, v23.4s, v23.4s",
        "ldr q8, [{ptr}]", "fmla v24.4s, v24.4s, v24.4s", "fmla v25.4s, v25.4s, v25.4s",
        "ldr q10, [{ptr}]", "fmla v26.4s, v26.4s, v26.4s", "fmla v27.4s, v27.4s, v27.4s",
        "ldr q12, [{ptr}]", "fmla v28.4s, v28.4s, v28.4s", "fmla v29.4s, v29.4s, v29.4s",
        "ldr q14, [{ptr}]", "fmla v30.4s, v30.4s, v30.4s", "fmla v31.4s, v31.4s, v31.4s",
    ],
    latency: [
        ".rept 16", "ldr q0, [{ptr}]", "fmla v1.4s, v1.4s, v1.4s", ".endr",
    ],
);
a64_probe!(
    ldq_fmlaq_lane_sep,
    mem,
    ops = 16,
    throughput: [
        "ldr q0, [{ptr}]", "fmla v16.4s, v16.4s, v16.s[0]", "fmla v17.4s, v17.4s, v17.s[0]",
        "ldr q2, [{ptr}]", "fmla v18.4s, v18.4s, v18.s[0]", "fmla v19.4s, v19.4s, v19.s[0]",
        "ldr q4, [{ptr}]", "fmla v20.4s, v20.4s, v20.s[0]", "fmla v21.4s, v21.4s, v21.s[0]",
        "ldr q6, [{ptr}]", "fmla v22.4s, v22.4s, v22.s[0]", "fmla v23.4s, v23.4s, v23.s[0]",
        "ldr q8, [{ptr}]", "fmla v24.4s, v24.4s, v24.s[0]", "fmla v25.4s, v25.4s, v25.s[0]",
        "ldr q10, [{ptr}]", "fmla v26.4s, v26.4s, v26.s[0]", "fmla v27.4s, v27.4s, v27.s[0]",
        "ldr q12, [{ptr}]", "fmla v28.4s, v28.4s, v28.s[0]", "fmla v29.4s, v29.4s, v29.s[0]",
        "ldr q14, [{ptr}]", "fmla v30.4s, v30.4s, v30.s[0]", "fmla v31.4s, v31.4s, v31.s[0]",
    ],
    latency: [
        ".rept 16", "ldr q0, [{ptr}]", "fmla v1.4s, v1.4s, v1.s[0]", ".endr",
    ],
);
a64_probe!(
    ldd_fmlaq_sep,
    mem,
    ops = 16,
    throughput: [
        "ldr d0, [{ptr}]", "fmla v16.4s, v16.4s, v16.4s", "ldr d1, [{ptr}]",
        "fmla v17.4s, v17.4s, v17.4s", "ldr d2, [{ptr}]", "fmla v18.4s, v18.4s, v18.4s",
        "ldr d3, [{ptr}]", "fmla v19.4s, v19.4s, v19.4s", "ldr d4, [{ptr}]",
        "fmla v20.4s, v20.4s, v20.4s", "ldr d5, [{ptr}]", "fmla v21.4s, v21.4s, v21.4s",
        "ldr d6, [{ptr}]", "fmla v22.4s, v22.4s, v22.4s", "ldr d7, [{ptr}]",
        "fmla v23.4s, v23.4s, v23.4s", "ldr d8, [{ptr}]", "fmla v24.4s, v24.4s, v24.4s",
        "ldr d9, [{ptr}]", "fmla v25.4s, v25.4s, v25.4s", "ldr d10, [{ptr}]",
        "fmla v26.4s, v26.4s, v26.4s", "ldr d11, [{ptr}]", "fmla v27.4s, v27.4s, v27.4s",
        "ldr d12, [{ptr}]", "fmla v28.4s, v28.4s, v28.4s", "ldr d13, [{ptr}]",
        "fmla v29.4s, v29.4s, v29.4s", "ldr d14, [{ptr}]", "fmla v30.4s, v30.4s, v30.4s",
        "ldr d15, [{ptr}]", "fmla v31.4s, v31.4s, v31.4s",
    ],
    latency: [
        ".rept 16", "ldr d0, [{ptr}]", "fmla v1.4s, v1.4s, v1.4s", ".endr",
    ],
);
a64_probe!(
    lds_fmlaq_lane_sep,
    mem,
    20,
    [
        "ldr s21, [{ptr}]",
        "fmla v\\i\\().4s, v\\i\\().4s, v\\i\\().s[0]",
    ]
);
a64_probe!(
    ldd_fmlaq_lane_sep,
    mem,
    20,
    [
        "ldr d21, [{ptr}]",
        "fmla v\\i\\().4s, v\\i\\().4s, v\\i\\().s[0]",
    ]
);
a64_probe!(
    ldx_fmlaq_lane_sep,
    memx,
    20,
    [
        "ldr {x}, [{ptr}]",
        "fmla v\\i\\().4s, v\\i\\().4s, v\\i\\().s[0]",
    ]
);
a64_probe!(
    ldd_ldx_ins_fmlaq_lane_sep,
    memx,
    ops = 16,
    throughput: [
        "ldr d0, [{ptr}]", "fmla v16.4s, v16.4s, v16.s[0]", "ldr {x}, [{ptr}]",
        "fmla v17.4s, v17.4s, v17.s[0]", "ins v2.d[1], {x}", "fmla v18.4s, v18.4s, v18.s[0]",
        "ldr d3, [{ptr}]", "fmla v19.4s, v19.4s, v19.s[0]", "ldr {x}, [{ptr}]",
        "fmla v20.4s, v20.4s, v20.s[0]", "ins v5.d[1], {x}", "fmla v21.4s, v21.4s, v21.s[0]",
        "ldr d6, [{ptr}]", "fmla v22.4s, v22.4s, v22.s[0]", "ldr {x}, [{ptr}]",
        "fmla v23.4s, v23.4s, v23.s[0]", "ins v8.d[1], {x}", "fmla v24.4s, v24.4s, v24.s[0]",
        "ldr d9, [{ptr}]", "fmla v25.4s, v25.4s, v25.s[0]", "ldr {x}, [{ptr}]",
        "fmla v26.4s, v26.4s, v26.s[0]", "ins v11.d[1], {x}", "fmla v27.4s, v27.4s, v27.s[0]",
        "ldr d12, [{ptr}]", "fmla v28.4s, v28.4s, v28.s[0]", "ldr {x}, [{ptr}]",
        "fmla v29.4s, v29.4s, v29.s[0]", "ins v14.d[1], {x}", "fmla v30.4s, v30.4s, v30.s[0]",
        "ldr d15, [{ptr}]", "fmla v31.4s, v31.4s, v31.s[0]",
    ],
    latency: [
        ".rept 16", "ldr d0, [{ptr}]", "ldr {x}, [{ptr}]", "fmla v1.4s, v1.4s, v1.s[0]", ".endr",
    ],
);
a64_probe!(
    ldd_nop_ldx_ins_fmlaq_lane_sep,
    memx,
    ops = 16,
    throughput: [
        "ldr d0, [{ptr}]", "fmla v16.4s, v16.4s, v16.s[0]", "fmla v17.4s, v17.4s, v17.s[0]",
        "ldr {x}, [{ptr}]", "fmla v18.4s, v18.4s, v18.s[0]", "ins v2.d[1], {x}",
        "fmla v19.4s, v19.4s, v19.s[0]", "ldr d3, [{ptr}]", "fmla v20.4s, v20.4s, v20.s[0]",
        "fmla v21.4s, v21.4s, v21.s[0]", "ldr {x}, [{ptr}]", "fmla v22.4s, v22.4s, v22.s[0]",
        "ins v5.d[1], {x}", "fmla v23.4s, v23.4s, v23.s[0]", "ldr d6, [{ptr}]",
        "fmla v24.4s, v24.4s, v24.s[0]", "fmla v25.4s, v25.4s, v25.s[0]", "ldr {x}, [{ptr}]",
        "fmla v26.4s, v26.4s, v26.s[0]", "ins v8.d[1], {x}", "fmla v27.4s, v27.4s, v27.s[0]",
        "ldr d9, [{ptr}]", "fmla v28.4s, v28.4s, v28.s[0]", "fmla v29.4s, v29.4s, v29.s[0]",
        "ldr {x}, [{ptr}]", "fmla v30.4s, v30.4s, v30.s[0]", "ins v11.d[1], {x}",
        "fmla v31.4s, v31.4s, v31.s[0]",
    ],
    latency: [
        ".rept 16", "ldr d0, [{ptr}]", "ldr {x}, [{ptr}]", "fmla v1.4s, v1.4s, v1.s[0]", ".endr",
    ],
);
a64_probe!(
    ins_fmlaq_lane_1_4_sep,
    reg,
    ops = 16,
    throughput: [
        "ins v0.d[0], xzr", "fmla v16.4s, v16.4s, v16.s[0]", "fmla v17.4s, v17.4s, v17.s[0]",
        "fmla v18.4s, v18.4s, v18.s[0]", "fmla v19.4s, v19.4s, v19.s[0]", "ins v0.d[0], xzr",
        "fmla v20.4s, v20.4s, v20.s[0]", "fmla v21.4s, v21.4s, v21.s[0]",
        "fmla v22.4s, v22.4s, v22.s[0]", "fmla v23.4s, v23.4s, v23.s[0]", "ins v0.d[0], xzr",
        "fmla v24.4s, v24.4s, v24.s[0]", "fmla v25.4s, v25.4s, v25.s[0]",
        "fmla v26.4s, v26.4s, v26.s[0]", "fmla v27.4s, v27.4s, v27.s[0]", "ins v0.d[0], xzr",
        "fmla v28.4s, v28.4s, v28.s[0]", "fmla v29.4s, v29.4s, v29.s[0]",
        "fmla v30.4s, v30.4s, v30.s[0]", "fmla v31.4s, v31.4s, v31.s[0]",
    ],
    latency: [
        ".rept 16", "ins v0.d[0], xzr", "fmla v1.4s, v1.4s, v1.s[0]", ".endr",
    ],
);
a64_probe!(
    ldd_fmlaq_lane_1_4_sep,
    mem,
    ops = 16,
    throughput: [
        "ldr d0, [{ptr}]", "fmla v16.4s, v16.4s, v16.s[0]", "fmla v17.4s, v17.4s, v17.s[0]",
        "fmla v18.4s, v18.4s, v18.s[0]", "fmla v19.4s, v19.4s, v19.s[0]", "ldr d2, [{ptr}]",
        "fmla v20.4s, v20.4s, v20.s[0]", "fmla v21.4s, v21.4s, v21.s[0]",
        "fmla v22.4s, v22.4s, v22.s[0]", "fmla v23.4s, v23.4s, v23.s[0]", "ldr d6, [{ptr}]",
        "fmla v24.4s, v24.4s, v24.s[0]", "fmla v25.4s, v25.4s, v25.s[0]",
        "fmla v26.4s, v26.4s, v26.s[0]", "fmla v27.4s, v27.4s, v27.s[0]", "ldr d11, [{ptr}]",
        "fmla v28.4s, v28.4s, v28.s[0]", "fmla v29.4s, v29.4s, v29.s[0]",
        "fmla v30.4s, v30.4s, v30.s[0]", "fmla v31.4s, v31.4s, v31.s[0]",
    ],
    latency: [
        ".rept 16", "ldr d0, [{ptr}]", "fmla v1.4s, v1.4s, v1.s[0]", ".endr",
    ],
);
a64_probe!(
    ldq_fmlaq_lane_1_4_sep,
    mem,
    ops = 16,
    throughput: [
        "ldr q0, [{ptr}]", "fmla v16.4s, v16.4s, v16.s[0]", "fmla v17.4s, v17.4s, v17.s[0]",
        "fmla v18.4s, v18.4s, v18.s[0]", "fmla v19.4s, v19.4s, v19.s[0]", "ldr q2, [{ptr}]",
        "fmla v20.4s, v20.4s, v20.s[0]", "fmla v21.4s, v21.4s, v21.s[0]",
        "fmla v22.4s, v22.4s, v22.s[0]", "fmla v23.4s, v23.4s, v23.s[0]", "ldr q6, [{ptr}]",
        "fmla v24.4s, v24.4s, v24.s[0]", "fmla v25.4s, v25.4s, v25.s[0]",
        "fmla v26.4s, v26.4s, v26.s[0]", "fmla v27.4s, v27.4s, v27.s[0]", "ldr q11, [{ptr}]",
        "fmla v28.4s, v28.4s, v28.s[0]", "fmla v29.4s, v29.4s, v29.s[0]",
        "fmla v30.4s, v30.4s, v30.s[0]", "fmla v31.4s, v31.4s, v31.s[0]",
    ],
    latency: [
        ".rept 16", "ldr q0, [{ptr}]", "fmla v1.4s, v1.4s, v1.s[0]", ".endr",
    ],
);
a64_probe!(
    ins_fmlaq_lane_1_3_sep,
    reg,
    ops = 15,
    throughput: [
        "ins v1.d[0], xzr", "fmla v16.4s, v16.4s, v16.s[0]", "fmla v17.4s, v17.4s, v17.s[0]",
        "fmla v18.4s, v18.4s, v18.s[0]", "ins v3.d[0], xzr", "fmla v19.4s, v19.4s, v19.s[0]",
        "fmla v20.4s, v20.4s, v20.s[0]", "fmla v21.4s, v21.4s, v21.s[0]", "ins v5.d[0], xzr",
        "fmla v22.4s, v22.4s, v22.s[0]", "fmla v23.4s, v23.4s, v23.s[0]",
        "fmla v24.4s, v24.4s, v24.s[0]", "ins v7.d[0], xzr", "fmla v25.4s, v25.4s, v25.s[0]",
        "fmla v26.4s, v26.4s, v26.s[0]", "fmla v27.4s, v27.4s, v27.s[0]", "ins v12.d[0], xzr",
        "fmla v28.4s, v28.4s, v28.s[0]", "fmla v29.4s, v29.4s, v29.s[0]",
        "fmla v30.4s, v30.4s, v30.s[0]",
    ],
    latency: [
        ".rept 15", "ins v0.d[0], xzr", "fmla v1.4s, v1.4s, v1.s[0]", ".endr",
    ],
);
a64_probe!(
    ldd_fmlaq_lane_1_3_sep,
    memx,
    ops = 15,
    throughput: [
        "ldr d0, [{ptr}]", "ins v1.d[0], xzr", "fmla v16.4s, v16.4s, v16.s[0]", "ldr {x}, [{ptr}]",
        "fmla v17.4s, v17.4s, v17.s[0]", "nop", "fmla v18.4s, v18.4s, v18.s[0]", "nop",
        "ldr d2, [{ptr}]", "ins v3.d[0], xzr", "fmla v19.4s, v19.4s, v19.s[0]", "ldr {x}, [{ptr}]",
        "fmla v20.4s, v20.4s, v20.s[0]", "nop", "fmla v21.4s, v21.4s, v21.s[0]", "nop",
        "ldr d4, [{ptr}]", "ins v5.d[0], xzr", "fmla v22.4s, v22.4s, v22.s[0]", "ldr {x}, [{ptr}]",
        "fmla v23.4s, v23.4s, v23.s[0]", "nop", "fmla v24.4s, v24.4s, v24.s[0]", "nop",
        "ldr d6, [{ptr}]", "ins v7.d[0], xzr", "fmla v25.4s, v25.4s, v25.s[0]", "ldr {x}, [{ptr}]",
        "fmla v26.4s, v26.4s, v26.s[0]", "nop", "fmla v27.4s, v27.4s, v27.s[0]", "nop",
        "ldr d8, [{ptr}]", "ins v9.d[0], xzr", "fmla v28.4s, v28.4s, v28.s[0]", "ldr {x}, [{ptr}]",
        "fmla v29.4s, v29.4s, v29.s[0]", "nop", "fmla v30.4s, v30.4s, v30.s[0]", "nop",
    ],
    latency: [
        ".rept 15", "ldr {x}, [{ptr}]", "ins v0.d[0], {x}", "fmla v1.4s, v1.4s, v1.s[0]", ".endr",
    ],
);
a64_probe!(
    ldq_fmlaq_lane_1_3_sep,
    mem,
    ops = 15,
    throughput: [
        "ldr q0, [{ptr}]", "fmla v16.4s, v16.4s, v16.s[0]", "fmla v17.4s, v17.4s, v17.s[0]",
        "fmla v18.4s, v18.4s, v18.s[0]", "ldr q2, [{ptr}]", "fmla v19.4s, v19.4s, v19.s[0]",
        "fmla v20.4s, v20.4s, v20.s[0]", "fmla v21.4s, v21.4s, v21.s[0]", "ldr q4, [{ptr}]",
        "fmla v22.4s, v22.4s, v22.s[0]", "fmla v23.4s, v23.4s, v23.s[0]",
        "fmla v24.4s, v24.4s, v24.s[0]", "ldr q6, [{ptr}]", "fmla v25.4s, v25.4s, v25.s[0]",
        "fmla v26.4s, v26.4s, v26.s[0]", "fmla v27.4s, v27.4s, v27.s[0]", "ldr q8, [{ptr}]",
        "fmla v28.4s, v28.4s, v28.s[0]", "fmla v29.4s, v29.4s, v29.s[0]",
        "fmla v30.4s, v30.4s, v30.s[0]",
    ],
    latency: [
        ".rept 15", "ldr q0, [{ptr}]", "fmla v1.4s, v1.4s, v1.s[0]", ".endr",
    ],
);
a64_probe!(
    ldq_fmlaq_lane_1_2_sep,
    mem,
    ops = 16,
    throughput: [
        "ldr q0, [{ptr}]", "fmla v16.4s, v16.4s, v16.s[0]", "fmla v17.4s, v17.4s, v17.s[0]",
        "ldr q2, [{ptr}]", "fmla v18.4s, v18.4s, v18.s[0]", "fmla v19.4s, v19.4s, v19.s[0]",
        "ldr q4, [{ptr}]", "fmla v20.4s, v20.4s, v20.s[0]", "fmla v21.4s, v21.4s, v21.s[0]",
        "ldr q6, [{ptr}]", "fmla v22.4s, v22.4s, v22.s[0]", "fmla v23.4s, v23.4s, v23.s[0]",
        "ldr q7, [{ptr}]", "fmla v24.4s, v24.4s, v24.s[0]", "fmla v25.4s, v25.4s, v25.s[0]",
        "ldr q8, [{ptr}]", "fmla v26.4s, v26.4s, v26.s[0]", "fmla v27.4s, v27.4s, v27.s[0]",
        "ldr q9, [{ptr}]", "fmla v28.4s, v28.4s, v28.s[0]", "fmla v29.4s, v29.4s, v29.s[0]",
        "ldr q10, [{ptr}]", "fmla v30.4s, v30.4s, v30.s[0]", "fmla v31.4s, v31.4s, v31.s[0]",
    ],
    latency: [
        ".rept 16", "ldr q0, [{ptr}]", "fmla v1.4s, v1.4s, v1.s[0]", ".endr",
    ],
);
a64_probe!(
    ins_fmlaq_lane_sep,
    reg,
    20,
    [
        "ins v21.d[0], xzr",
        "fmla v\\i\\().4s, v\\i\\().4s, v\\i\\().s[0]",
    ]
);
a64_probe!(
    dupd_fmlaq_lane_sep,
    reg,
    20,
    [
        "dup v21.2d, xzr",
        "fmla v\\i\\().4s, v\\i\\().4s, v\\i\\().s[0]",
    ]
);
a64_probe!(
    smlal_8b_dupd,
    reg,
    20,
    [
        "dup v21.8b, v22.b[0]",
        "smlal v\\i\\().8h, v\\i\\().8b, v\\i\\().8b",
    ]
);
a64_probe!(
    ldd_smlalq_sep_8b,
    mem,
    20,
    [
        "ldr d21, [{ptr}]",
        "smlal v\\i\\().8h, v\\i\\().8b, v\\i\\().8b",
    ]
);
a64_probe!(
    ldq_smlalq_sep,
    mem,
    20,
    [
        "ldr q21, [{ptr}]",
        "smlal v\\i\\().8h, v\\i\\().8b, v\\i\\().8b",
    ]
);
a64_probe!(
    lddx2_smlalq_sep,
    mem,
    20,
    [
        "ld1 {{v21.2s, v22.2s}}, [{ptr}]",
        "smlal v\\i\\().8h, v\\i\\().8b, v\\i\\().8b",
    ]
);
a64_probe!(
    smlal_sadalp,
    reg,
    20,
    [
        "smlal v\\i\\().8h, v\\i\\().8b, v\\i\\().8b",
        "sadalp v\\i\\().4s, v\\i\\().8h",
    ]
);
a64_probe!(
    smull_smlal_sadalp,
    reg,
    20,
    [
        "smull v\\i\\().8h, v\\i\\().8b, v\\i\\().8b",
        "smlal v\\i\\().8h, v\\i\\().8b, v\\i\\().8b",
        "sadalp v\\i\\().4s, v\\i\\().8h",
    ]
);
a64_probe!(
    smull_smlal_sadalp_sep,
    reg,
    ops = 18,
    throughput: [
        "smull v0.8h, v0.8b, v0.8b", "smlal v1.8h, v1.8b, v1.8b", "sadalp v2.4s, v2.8h",
        "smull v3.8h, v3.8b, v3.8b", "smlal v4.8h, v4.8b, v4.8b", "sadalp v5.4s, v5.8h",
        "smull v6.8h, v6.8b, v6.8b", "smlal v7.8h, v7.8b, v7.8b", "sadalp v8.4s, v8.8h",
        "smull v9.8h, v9.8b, v9.8b", "smlal v10.8h, v10.8b, v10.8b", "sadalp v11.4s, v11.8h",
        "smull v12.8h, v12.8b, v12.8b", "smlal v13.8h, v13.8b, v13.8b", "sadalp v14.4s, v14.8h",
        "smull v15.8h, v15.8b, v15.8b", "smlal v16.8h, v16.8b, v16.8b", "sadalp v17.4s, v17.8h",
    ],
    latency: [
        ".rept 6", "smull v0.8h, v0.8b, v0.8b", "smlal v0.8h, v0.8b, v0.8b", "sadalp v0.4s, v0.8h",
        ".endr",
    ],
);
a64_probe!(
    ins_smlalq_sep_1_2,
    reg,
    ops = 16,
    throughput: [
        "smlal v16.8h, v16.8b, v16.8b", "smlal v17.8h, v17.8b, v17.8b", "ins v3.d[0], xzr",
        "smlal v18.8h, v18.8b, v18.8b", "smlal v19.8h, v19.8b, v19.8b", "ins v3.d[0], xzr",
        "smlal v20.8h, v20.8b, v20.8b", "smlal v21.8h, v21.8b, v21.8b", "ins v3.d[0], xzr",
        "smlal v22.8h, v22.8b, v22.8b", "smlal v23.8h, v23.8b, v23.8b", "ins v3.d[0], xzr",
        "smlal v24.8h, v24.8b, v24.8b", "smlal v25.8h, v25.8b, v25.8b", "ins v3.d[0], xzr",
        "smlal v26.8h, v26.8b, v26.8b", "smlal v27.8h, v27.8b, v27.8b", "ins v3.d[0], xzr",
        "smlal v28.8h, v28.8b, v28.8b", "smlal v29.8h, v29.8b, v29.8b", "ins v3.d[0], xzr",
        "smlal v30.8h, v30.8b, v30.8b", "smlal v31.8h, v31.8b, v31.8b", "ins v3.d[0], xzr",
    ],
    latency: [
        ".rept 16", "ins v1.d[0], xzr", "smlal v1.8h, v1.8b, v1.8b", ".endr",
    ],
);
a64_probe!(
    ldx_ins_smlalq_sep,
    memx,
    ops = 16,
    throughput: [
        "smlal v16.8h, v16.8b, v16.8b", "ldr {x}, [{ptr}]", "smlal v17.8h, v17.8b, v17.8b",
        "smlal v18.8h, v18.8b, v18.8b", "smlal v19.8h, v19.8b, v19.8b", "ldr d3, [{ptr}]",
        "ins v4.d[0], {x}", "smlal v20.8h, v20.8b, v20.8b", "ldr {x}, [{ptr}]",
        "smlal v21.8h, v21.8b, v21.8b", "smlal v22.8h, v22.8b, v22.8b",
        "smlal v23.8h, v23.8b, v23.8b", "ldr d3, [{ptr}]", "ins v8.d[0], {x}",
        "smlal v24.8h, v24.8b, v24.8b", "ldr {x}, [{ptr}]", "smlal v25.8h, v25.8b, v25.8b",
        "smlal v26.8h, v26.8b, v26.8b", "smlal v27.8h, v27.8b, v27.8b", "ldr d3, [{ptr}]",
        "ins v12.d[0], {x}", "smlal v28.8h, v28.8b, v28.8b", "ldr {x}, [{ptr}]",
        "smlal v29.8h, v29.8b, v29.8b", "smlal v30.8h, v30.8b, v30.8b",
        "smlal v31.8h, v31.8b, v31.8b", "ldr d3, [{ptr}]", "ins v15.d[0], {x}",
    ],
    latency: [
        ".rept 16", "ldr {x}, [{ptr}]", "ins v1.d[0], {x}", "smlal v1.8h, v1.8b, v1.8b", ".endr",
    ],
);
// sdot v\i.4s, v\i.16b, v21.4b[0]
a64_probe!(ldrd_sdot_lane, mem, 20, ["ldr d21, [{ptr}]", ".inst 0x4f95e000 | (\\i << 5) | \\i"]);
a64_probe!(ldrq_sdot_lane, mem, 20, ["ldr q21, [{ptr}]", ".inst 0x4f95e000 | (\\i << 5) | \\i"]);
a64_probe!(
    dupd_lane_smlal_s8,
    reg,
    20,
    [
        "dup v20.8b, v21.b[0]",
        "smlal v\\i\\().8h, v\\i\\().8b, v\\i\\().8b",
    ]
);
a64_probe!(
    ldd_mla_s16_lane_1_4_sep,
    mem,
    ops = 16,
    throughput: [
        "ldr d0, [{ptr}]", "mla v16.8h, v16.8h, v1.h[0]", "mla v17.8h, v17.8h, v1.h[0]",
        "mla v18.8h, v18.8h, v1.h[0]", "mla v19.8h, v19.8h, v1.h[0]", "ldr d2, [{ptr}]",
        "mla v20.8h, v20.8h, v1.h[0]", "mla v21.8h, v21.8h, v1.h[0]", "mla v22.8h, v22.8h, v1.h[0]",
        "mla v23.8h, v23.8h, v1.h[0]", "ldr d6, [{ptr}]", "mla v24.8h, v24.8h, v1.h[0]",
        "mla v25.8h, v25.8h, v1.h[0]", "mla v26.8h, v26.8h, v1.h[0]", "mla v27.8h, v27.8h, v1.h[0]",
        "ldr d11, [{ptr}]", "mla v28.8h, v28.8h, v1.h[0]", "mla v29.8h, v29.8h, v1.h[0]",
        "mla v30.8h, v30.8h, v1.h[0]", "mla v31.8h, v31.8h, v1.h[0]",
    ],
    latency: [
        ".rept 16", "ldr d2, [{ptr}]", "mla v1.8h, v1.8h, v1.h[0]", ".endr",
    ],
);
a64_probe!(ldrd_sshll, mem, 20, ["ldr d21, [{ptr}]", "sshll v\\i\\().8h, v\\i\\().8b, #0"]);
a64_probe!(
    sshll_ins_sep,
    reg,
    ops = 10,
    throughput: [
        "sshll v0.8h, v0.8b, #0", "ins v1.d[0], xzr", "sshll v2.8h, v2.8b, #0", "ins v3.d[0], xzr",
        "sshll v4.8h, v4.8b, #0", "ins v5.d[0], xzr", "sshll v6.8h, v6.8b, #0", "ins v7.d[0], xzr",
        "sshll v8.8h, v8.8b, #0", "ins v9.d[0], xzr", "sshll v10.8h, v10.8b, #0",
        "ins v11.d[0], xzr", "sshll v12.8h, v12.8b, #0", "ins v13.d[0], xzr",
        "sshll v14.8h, v14.8b, #0", "ins v15.d[0], xzr", "sshll v16.8h, v16.8b, #0",
        "ins v17.d[0], xzr", "sshll v18.8h, v18.8b, #0", "ins v19.d[0], xzr",
    ],
    latency: [
        ".rept 10", "ins v1.d[0], xzr", "sshll v1.8h, v1.8b, #0", ".endr",
    ],
);


macro_rules! row {
    ($name:ident) => {
        ProbeSpec::new(stringify!($name), $name::throughput, $name::latency)
    };
}

/// Probe families in execution order.
pub static CATALOG: &[ProbeFamily] = &[
    ProbeFamily {
        title: "NEON",
        requires: &[Capability::Neon],
        warmup: fmla::throughput,
        probes: &[
            row!(ldd).width(2),
            row!(ldq).width(4),
            row!(stq).width(4),
            row!(ldpq).width(8),
            row!(lddx2).width(4),
            row!(ld1q).width(4),
            row!(eor).width(4),
            row!(fmla).width(8),
            row!(fmlad).width(4),
            row!(fmla_x2).width(16),
            row!(mla).width(8),
            row!(fmul),
            row!(mul),
            row!(addp),
            row!(sdot).width(32).requires(&[Capability::DotProd]),
            row!(smmla).width(64).requires(&[Capability::I8mm]),
            row!(bfmmla).width(32).requires(&[Capability::Bf16]),
            row!(sadalp),
            row!(add),
            row!(fadd),
            row!(smull),
            row!(smlal_4b).width(8),
            row!(smlal_8b).width(16),
            row!(dupd_lane_s8).width(8),
            row!(mlaq_lane_s16).width(16),
            row!(sshll).width(8),
            row!(tbl).width(16),
            row!(ins).width(2),
            row!(sqrdmulh),
            row!(usubl),
            row!(abs),
            row!(fcvtzs),
            row!(scvtf),
            row!(fcvtns),
            row!(fcvtms),
            row!(fcvtps),
            row!(fcvtas),
            row!(fcvtn),
            row!(fcvtl),
        ],
    },
    ProbeFamily {
        title: "dual issue",
        requires: &[Capability::Neon],
        warmup: fmla::throughput,
        probes: &[
            row!(ins_ldd).width(2).note("Test ldd ins dual issue"),
            row!(ldd_ldx_ins).width(4),
            row!(ldqstq).width(4).note("Test ldq stq dual issue"),
            row!(ldq_fmlaq).width(8),
            row!(stq_fmlaq_lane).width(8).note("Test stq fmlaq_lane dual issue"),
            row!(ldd_fmlad).width(4).note("Test ldd fmlad dual issue"),
            row!(ldq_fmlaq_sep).width(8).note("Test throughput ldq + 2 x fmlaq"),
            row!(ldq_fmlaq_lane_sep)
                .width(8)
                .note("Test compute throughput ldq + 2 x fmlaq_lane"),
            row!(ldd_fmlaq_sep).width(8).note("Test compute throughput ldq + fmlaq"),
            row!(lds_fmlaq_lane_sep).width(8),
            row!(ldd_fmlaq_lane_sep)
                .width(8)
                .note("Test compute throughput ldd + fmlaq_lane"),
            row!(ldx_fmlaq_lane_sep).width(8),
            row!(ldd_ldx_ins_fmlaq_lane_sep)
                .width(8)
                .note("Test compute throughput ldd+fmlaq+ldx+fmlaq+ins+fmlaq"),
            row!(ldd_nop_ldx_ins_fmlaq_lane_sep).width(8),
            row!(ins_fmlaq_lane_1_4_sep)
                .width(8)
                .note("Test compute throughput ins + 4 x fmlaq_lane"),
            row!(ldd_fmlaq_lane_1_4_sep)
                .width(8)
                .note("Test compute throughput ldd + 4 x fmlaq_lane"),
            row!(ldq_fmlaq_lane_1_4_sep)
                .width(8)
                .note("Test compute throughput ldq + 4 x fmlaq_lane"),
            row!(ins_fmlaq_lane_1_3_sep)
                .width(8)
                .note("Test compute throughput ins + 3 x fmlaq_lane"),
            row!(ldd_fmlaq_lane_1_3_sep).width(8),
            row!(ldq_fmlaq_lane_1_3_sep)
                .width(8)
                .note("Test compute throughput ldq + 3 x fmlaq_lane"),
            row!(ldq_fmlaq_lane_1_2_sep)
                .width(8)
                .note("Test compute throughput ldq + 2 x fmlaq_lane"),
            row!(ins_fmlaq_lane_sep).width(8),
            row!(dupd_fmlaq_lane_sep).width(8),
            row!(smlal_8b_addp).width(16),
            row!(smlal_8b_dupd).width(16),
            row!(ldd_smlalq_sep_8b).width(16).note("Test ldd smlalq dual issue"),
            row!(ldq_smlalq_sep).width(16).note("Test ldq smlalq dual issue"),
            row!(lddx2_smlalq_sep).width(16),
            row!(smlal_sadalp).width(16),
            row!(smull_smlal_sadalp).width(32).note("Test smull smlal dual issue"),
            row!(smull_smlal_sadalp_sep).width(16),
            row!(ins_smlalq_sep_1_2).width(16),
            row!(ldx_ins_smlalq_sep).width(16),
            row!(ldrd_sdot_lane).width(32).requires(&[Capability::DotProd]),
            row!(ldrq_sdot_lane).width(32).requires(&[Capability::DotProd]),
            row!(dupd_lane_smlal_s8).width(16),
            row!(ldd_mla_s16_lane_1_4_sep).width(16),
            row!(ldrd_sshll).width(8),
            row!(sshll_ins_sep).width(8),
        ],
    },
];
