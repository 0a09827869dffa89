//! Instruction-set capability detection and gating.
//!
//! The host is queried once (see [`FeatureSet::detect`]) and the answer is
//! carried around as a plain value. Probe catalogs consult it through
//! [`FeatureSet::is_supported`] before executing any instruction that might
//! not exist on the current core.
//!
//! A "disabled from" threshold can be applied on top of the detected set:
//! every capability whose ordinal is at or above the threshold reports as
//! unsupported regardless of hardware. This is how speculative probes for
//! newer extensions are switched off without editing the catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(target_arch = "arm")]
mod arm;
#[cfg(target_arch = "x86_64")]
mod x86_64;

/// A named instruction-set extension.
///
/// Declaration order is the threshold order used by
/// [`FeatureSet::with_disabled_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// x86 SSE.
    Sse,
    /// x86 SSE2.
    Sse2,
    /// x86 SSE3.
    Sse3,
    /// x86 SSE4.1.
    Sse41,
    /// x86 SSE4.2.
    Sse42,
    /// x86 AVX with OS-enabled YMM state.
    Avx,
    /// x86 AVX2.
    Avx2,
    /// x86 FMA3.
    Fma,
    /// x86 AVX-512 (F + BW) with OS-enabled ZMM state.
    Avx512,
    /// x86 AVX-512 VNNI.
    Vnni,
    /// Arm Advanced SIMD.
    Neon,
    /// Arm dot product (`sdot`/`udot`).
    DotProd,
    /// Arm 8-bit integer matrix multiply (`smmla`).
    I8mm,
    /// Arm BFloat16 (`bfmmla`).
    Bf16,
}

impl Capability {
    /// Every capability, in ordinal order.
    pub const ALL: [Capability; 14] = [
        Capability::Sse,
        Capability::Sse2,
        Capability::Sse3,
        Capability::Sse41,
        Capability::Sse42,
        Capability::Avx,
        Capability::Avx2,
        Capability::Fma,
        Capability::Avx512,
        Capability::Vnni,
        Capability::Neon,
        Capability::DotProd,
        Capability::I8mm,
        Capability::Bf16,
    ];

    /// Position of this capability in the threshold order.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Capability::ordinal`].
    pub fn from_ordinal(ordinal: u8) -> Option<Capability> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// Short lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Capability::Sse => "sse",
            Capability::Sse2 => "sse2",
            Capability::Sse3 => "sse3",
            Capability::Sse41 => "sse4.1",
            Capability::Sse42 => "sse4.2",
            Capability::Avx => "avx",
            Capability::Avx2 => "avx2",
            Capability::Fma => "fma",
            Capability::Avx512 => "avx512",
            Capability::Vnni => "vnni",
            Capability::Neon => "neon",
            Capability::DotProd => "dotprod",
            Capability::I8mm => "i8mm",
            Capability::Bf16 => "bf16",
        }
    }

    fn bit(self) -> u32 {
        1 << self.ordinal()
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown capability name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCapability(pub String);

impl fmt::Display for UnknownCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown cpu feature: {}", self.0)
    }
}

impl std::error::Error for UnknownCapability {}

impl FromStr for Capability {
    type Err = UnknownCapability;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !matches!(c, '.' | '_' | '-'))
            .collect();
        let cap = match key.as_str() {
            "sse" => Capability::Sse,
            "sse2" => Capability::Sse2,
            "sse3" => Capability::Sse3,
            "sse41" => Capability::Sse41,
            "sse42" => Capability::Sse42,
            "avx" => Capability::Avx,
            "avx2" => Capability::Avx2,
            "fma" => Capability::Fma,
            "avx512" => Capability::Avx512,
            "vnni" => Capability::Vnni,
            "neon" | "asimd" => Capability::Neon,
            "dotprod" | "dot" => Capability::DotProd,
            "i8mm" => Capability::I8mm,
            "bf16" => Capability::Bf16,
            _ => return Err(UnknownCapability(s.to_string())),
        };
        Ok(cap)
    }
}

/// The set of capabilities a run is allowed to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSet {
    supported: u32,
    disabled_from: Option<Capability>,
}

impl FeatureSet {
    /// Query the host processor.
    ///
    /// The underlying hardware query runs at most once per process; later
    /// calls return a copy of the cached answer.
    pub fn detect() -> Self {
        use std::sync::OnceLock;
        static HOST: OnceLock<u32> = OnceLock::new();

        Self {
            supported: *HOST.get_or_init(detect_host),
            disabled_from: None,
        }
    }

    /// A set in which nothing is supported.
    pub fn none() -> Self {
        Self {
            supported: 0,
            disabled_from: None,
        }
    }

    /// Build a set from an explicit list, ignoring the host.
    pub fn from_capabilities<I>(caps: I) -> Self
    where
        I: IntoIterator<Item = Capability>,
    {
        let supported = caps.into_iter().fold(0, |acc, cap| acc | cap.bit());
        Self {
            supported,
            disabled_from: None,
        }
    }

    /// Report `cap` and every later capability as unsupported.
    pub fn with_disabled_from(mut self, cap: Capability) -> Self {
        self.disabled_from = Some(cap);
        self
    }

    /// Threshold currently applied, if any.
    pub fn disabled_from(&self) -> Option<Capability> {
        self.disabled_from
    }

    /// Whether probes guarded by `cap` may run.
    pub fn is_supported(&self, cap: Capability) -> bool {
        if let Some(threshold) = self.disabled_from {
            if cap >= threshold {
                return false;
            }
        }
        self.supported & cap.bit() != 0
    }

    /// Like [`FeatureSet::is_supported`] for a raw ordinal.
    ///
    /// An ordinal that names no capability prints a diagnostic and is
    /// treated as unsupported.
    pub fn is_supported_ordinal(&self, ordinal: u8) -> bool {
        match Capability::from_ordinal(ordinal) {
            Some(cap) => self.is_supported(cap),
            None => {
                eprintln!("unknown cpu feature: ordinal {}", ordinal);
                false
            }
        }
    }

    /// Whether every capability in `caps` is supported. Empty means yes.
    pub fn supports_all(&self, caps: &[Capability]) -> bool {
        caps.iter().all(|&cap| self.is_supported(cap))
    }

    /// First capability in `caps` that is not supported.
    pub fn first_missing(&self, caps: &[Capability]) -> Option<Capability> {
        caps.iter().copied().find(|&cap| !self.is_supported(cap))
    }

    /// Supported capabilities after the threshold, in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL
            .iter()
            .copied()
            .filter(move |&cap| self.is_supported(cap))
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Capability::name).collect();
        if names.is_empty() {
            f.write_str("(none)")
        } else {
            f.write_str(&names.join(" "))
        }
    }
}

#[cfg(target_arch = "x86_64")]
fn detect_host() -> u32 {
    FeatureSet::from_capabilities(x86_64::detect()).supported
}

#[cfg(target_arch = "aarch64")]
fn detect_host() -> u32 {
    FeatureSet::from_capabilities(aarch64::detect()).supported
}

#[cfg(target_arch = "arm")]
fn detect_host() -> u32 {
    FeatureSet::from_capabilities(arm::detect()).supported
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "arm")))]
fn detect_host() -> u32 {
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_follow_declaration_order() {
        for (i, cap) in Capability::ALL.iter().enumerate() {
            assert_eq!(cap.ordinal() as usize, i);
            assert_eq!(Capability::from_ordinal(i as u8), Some(*cap));
        }
        assert_eq!(Capability::from_ordinal(Capability::ALL.len() as u8), None);
    }

    #[test]
    fn test_threshold_disables_capability_and_successors() {
        let all = FeatureSet::from_capabilities(Capability::ALL);
        let gated = all.with_disabled_from(Capability::Avx2);

        assert!(gated.is_supported(Capability::Avx));
        assert!(!gated.is_supported(Capability::Avx2));
        assert!(!gated.is_supported(Capability::Fma));
        assert!(!gated.is_supported(Capability::Avx512));
        assert!(!gated.is_supported(Capability::Bf16));
    }

    #[test]
    fn test_threshold_never_enables() {
        let set = FeatureSet::from_capabilities([Capability::Sse2])
            .with_disabled_from(Capability::Bf16);
        assert!(set.is_supported(Capability::Sse2));
        assert!(!set.is_supported(Capability::Sse3));
    }

    #[test]
    fn test_unknown_ordinal_is_unsupported() {
        let all = FeatureSet::from_capabilities(Capability::ALL);
        assert!(all.is_supported_ordinal(Capability::Sse.ordinal()));
        assert!(!all.is_supported_ordinal(200));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("SSE4.1".parse::<Capability>(), Ok(Capability::Sse41));
        assert_eq!("sse4_2".parse::<Capability>(), Ok(Capability::Sse42));
        assert_eq!("AVX-512".parse::<Capability>(), Ok(Capability::Avx512));
        assert_eq!("asimd".parse::<Capability>(), Ok(Capability::Neon));
        assert!("mmx".parse::<Capability>().is_err());
        for cap in Capability::ALL {
            assert_eq!(cap.name().parse::<Capability>(), Ok(cap));
        }
    }

    #[test]
    fn test_supports_all_and_first_missing() {
        let set = FeatureSet::from_capabilities([Capability::Avx, Capability::Fma]);
        assert!(set.supports_all(&[]));
        assert!(set.supports_all(&[Capability::Avx, Capability::Fma]));
        assert_eq!(
            set.first_missing(&[Capability::Avx, Capability::Avx2]),
            Some(Capability::Avx2)
        );
    }

    #[test]
    fn test_detect_is_stable() {
        assert_eq!(FeatureSet::detect(), FeatureSet::detect());
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn test_x86_64_baseline_present() {
        let host = FeatureSet::detect();
        assert!(host.is_supported(Capability::Sse));
        assert!(host.is_supported(Capability::Sse2));
        assert!(!host.is_supported(Capability::Neon));
    }

    #[cfg(target_arch = "aarch64")]
    #[test]
    fn test_aarch64_baseline_present() {
        let host = FeatureSet::detect();
        assert!(host.is_supported(Capability::Neon));
        assert!(!host.is_supported(Capability::Sse2));
    }

    #[test]
    fn test_display_lists_names() {
        let set = FeatureSet::from_capabilities([Capability::Sse, Capability::Avx2]);
        assert_eq!(set.to_string(), "sse avx2");
        assert_eq!(FeatureSet::none().to_string(), "(none)");
    }
}
