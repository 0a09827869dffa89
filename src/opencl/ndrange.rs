//! N-dimensional iteration space.

use std::fmt;

use crate::{Error, Result};

/// A 0- to 3-dimensional work size.
///
/// Unused components are 1 (0 for the empty range) so [`NdRange::total_size`]
/// is always the product of all three. Ordering compares the dimension
/// first, then the components in order, so ranges can key a `BTreeMap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NdRange {
    dimension: usize,
    size: [usize; 3],
}

impl NdRange {
    /// Zero-dimensional range.
    pub const fn empty() -> Self {
        Self {
            dimension: 0,
            size: [0, 0, 0],
        }
    }

    /// One-dimensional range.
    pub const fn d1(s0: usize) -> Self {
        Self {
            dimension: 1,
            size: [s0, 1, 1],
        }
    }

    /// Two-dimensional range.
    pub const fn d2(s0: usize, s1: usize) -> Self {
        Self {
            dimension: 2,
            size: [s0, s1, 1],
        }
    }

    /// Three-dimensional range.
    pub const fn d3(s0: usize, s1: usize, s2: usize) -> Self {
        Self {
            dimension: 3,
            size: [s0, s1, s2],
        }
    }

    /// Number of declared dimensions.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Component `idx`.
    ///
    /// # Errors
    ///
    /// [`Error::NdRangeIndex`] if `idx` is not below the dimension.
    pub fn get(&self, idx: usize) -> Result<usize> {
        if idx >= self.dimension {
            return Err(Error::NdRangeIndex {
                index: idx,
                dimension: self.dimension,
            });
        }
        Ok(self.size[idx])
    }

    /// Declared components, as passed to an enqueue call.
    pub fn as_slice(&self) -> &[usize] {
        &self.size[..self.dimension]
    }

    /// Product of all components.
    pub fn total_size(&self) -> usize {
        self.size.iter().product()
    }

    /// Round every component of `global` down to a multiple of the matching
    /// component of `local`.
    ///
    /// Rounding down keeps the dispatch inside the buffers it was sized for.
    ///
    /// # Errors
    ///
    /// Fails when `local` declares fewer dimensions than `global`, or when a
    /// local component is zero.
    pub fn divide_down(global: &NdRange, local: &NdRange) -> Result<NdRange> {
        let mut out = *global;
        for i in 0..global.dimension {
            let l = local.get(i)?;
            if l == 0 {
                return Err(Error::InvalidConfig {
                    key: "local work size".to_string(),
                    value: local.to_string(),
                });
            }
            out.size[i] = global.size[i] / l * l;
        }
        Ok(out)
    }
}

impl Default for NdRange {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<usize> for NdRange {
    fn from(s0: usize) -> Self {
        Self::d1(s0)
    }
}

impl fmt::Display for NdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, s) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", s)?;
        }
        f.write_str("}")
    }
}
