//! Run configuration.
//!
//! Defaults are per-architecture constants; environment variables override
//! them and command-line flags override the environment.

use std::str::FromStr;

use crate::features::Capability;
use crate::output::OutputFormat;
use crate::{Error, Result};

/// Loop trip count for every CPU probe body.
#[cfg(target_arch = "x86_64")]
pub const DEFAULT_RUNS: u64 = 800_000 * 100;
/// Loop trip count for every CPU probe body.
#[cfg(not(target_arch = "x86_64"))]
pub const DEFAULT_RUNS: u64 = 800_000;

/// Warmup invocations of a family's warmup body.
#[cfg(target_arch = "x86_64")]
pub const DEFAULT_WARMUP: u32 = 10;
/// Warmup invocations of a family's warmup body.
#[cfg(not(target_arch = "x86_64"))]
pub const DEFAULT_WARMUP: u32 = 100;

/// Configuration for a probe run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Loop iterations per probe body (default: [`DEFAULT_RUNS`]).
    pub runs: u64,

    /// Warmup invocations per family (default: [`DEFAULT_WARMUP`]).
    pub warmup: u32,

    /// Treat this capability and every later one as unsupported.
    pub disabled_from: Option<Capability>,

    /// Print family headers and skipped probes.
    pub verbose: bool,

    /// Result line format.
    pub format: OutputFormat,

    /// CPU core to pin to, or accelerator device index.
    pub dev_id: usize,

    /// Extra runtime library candidates, colon separated.
    pub opencl_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runs: DEFAULT_RUNS,
            warmup: DEFAULT_WARMUP,
            disabled_from: None,
            verbose: false,
            format: OutputFormat::Text,
            dev_id: 0,
            opencl_path: None,
        }
    }
}

impl Config {
    /// Defaults overridden by `PEAKPROBE_*` and `LIBOPENCL_PATH`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(v) = lookup("PEAKPROBE_RUNS") {
            config.runs = parse_value("PEAKPROBE_RUNS", &v)?;
        }
        if let Some(v) = lookup("PEAKPROBE_WARMUP") {
            config.warmup = parse_value("PEAKPROBE_WARMUP", &v)?;
        }
        if let Some(v) = lookup("PEAKPROBE_DISABLE_FROM") {
            config.disabled_from = Some(parse_value("PEAKPROBE_DISABLE_FROM", &v)?);
        }
        if let Some(v) = lookup("PEAKPROBE_VERBOSE") {
            config.verbose = parse_flag("PEAKPROBE_VERBOSE", &v)?;
        }
        config.opencl_path = lookup("LIBOPENCL_PATH").filter(|v| !v.is_empty());
        Ok(config)
    }

    /// Set the probe loop trip count.
    pub fn runs(mut self, runs: u64) -> Self {
        self.runs = runs;
        self
    }

    /// Set warmup invocations per family.
    pub fn warmup(mut self, warmup: u32) -> Self {
        self.warmup = warmup;
        self
    }

    /// Disable `cap` and every capability after it.
    pub fn disabled_from(mut self, cap: Capability) -> Self {
        self.disabled_from = Some(cap);
        self
    }

    /// Enable or disable verbose notes.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the result format.
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the core / device index.
    pub fn dev_id(mut self, dev_id: usize) -> Self {
        self.dev_id = dev_id;
        self
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| Error::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        _ => Err(Error::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.runs, DEFAULT_RUNS);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PEAKPROBE_RUNS", "1000"),
            ("PEAKPROBE_WARMUP", "2"),
            ("PEAKPROBE_DISABLE_FROM", "AVX-512"),
            ("PEAKPROBE_VERBOSE", "yes"),
            ("LIBOPENCL_PATH", "/opt/a.so:/opt/b.so"),
        ]))
        .unwrap();
        assert_eq!(config.runs, 1000);
        assert_eq!(config.warmup, 2);
        assert_eq!(config.disabled_from, Some(Capability::Avx512));
        assert!(config.verbose);
        assert_eq!(config.opencl_path.as_deref(), Some("/opt/a.so:/opt/b.so"));
    }

    #[test]
    fn test_invalid_value_names_key() {
        let err = Config::from_lookup(lookup(&[("PEAKPROBE_RUNS", "lots")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid value 'lots' for PEAKPROBE_RUNS");

        let err = Config::from_lookup(lookup(&[("PEAKPROBE_DISABLE_FROM", "mmx")])).unwrap_err();
        assert!(err.to_string().contains("PEAKPROBE_DISABLE_FROM"));
    }

    #[test]
    fn test_builder_overrides_env() {
        let config = Config::from_lookup(lookup(&[("PEAKPROBE_RUNS", "1000")]))
            .unwrap()
            .runs(5)
            .dev_id(3)
            .format(OutputFormat::Json);
        assert_eq!(config.runs, 5);
        assert_eq!(config.dev_id, 3);
        assert_eq!(config.format, OutputFormat::Json);
    }
}
