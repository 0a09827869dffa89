//! Cache-resident scratch memory for load/store probes.

use std::cell::UnsafeCell;
use std::sync::OnceLock;

/// Size of the scratch buffer in bytes.
pub const SCRATCH_BYTES: usize = 2048;

/// Alignment of the scratch buffer in bytes.
pub const SCRATCH_ALIGN: usize = 64;

#[repr(C, align(64))]
struct Aligned(UnsafeCell<[u8; SCRATCH_BYTES]>);

/// Process-wide scratch buffer shared by every memory probe.
///
/// The contents are never inspected; probes only need somewhere in L1 to
/// point their loads and stores at.
pub struct ScratchBuffer {
    bytes: Box<Aligned>,
}

// SAFETY: the bytes are only ever touched through raw pointers by probe
// bodies, and their values carry no meaning.
unsafe impl Sync for ScratchBuffer {}

impl ScratchBuffer {
    /// The shared buffer, allocated on first use.
    pub fn global() -> &'static ScratchBuffer {
        static SCRATCH: OnceLock<ScratchBuffer> = OnceLock::new();
        SCRATCH.get_or_init(|| ScratchBuffer {
            bytes: Box::new(Aligned(UnsafeCell::new([0; SCRATCH_BYTES]))),
        })
    }

    /// Raw pointer to the first byte.
    pub fn as_mut_ptr(&self) -> *mut u8 {
        self.bytes.0.get().cast()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        SCRATCH_BYTES
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }
}
