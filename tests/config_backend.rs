//! Configuration layering and backend selection through the public API.

use std::collections::HashMap;

use peakprobe::{Backend, Capability, Config, Error, FeatureSet, OutputFormat};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn builder_values_win_over_environment() {
    let config = Config::from_lookup(env(&[("PEAKPROBE_RUNS", "50"), ("PEAKPROBE_VERBOSE", "0")]))
        .unwrap()
        .runs(7)
        .verbose(true)
        .format(OutputFormat::Json);
    assert_eq!(config.runs, 7);
    assert!(config.verbose);
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn empty_library_path_is_ignored() {
    let config = Config::from_lookup(env(&[("LIBOPENCL_PATH", "")])).unwrap();
    assert_eq!(config.opencl_path, None);
}

#[test]
fn bad_flag_value_is_rejected() {
    let err = Config::from_lookup(env(&[("PEAKPROBE_VERBOSE", "maybe")])).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { ref key, .. } if key == "PEAKPROBE_VERBOSE"));
}

#[test]
fn disable_threshold_applies_to_later_ordinals() {
    let config = Config::from_lookup(env(&[("PEAKPROBE_DISABLE_FROM", "avx2")])).unwrap();
    let cap = config.disabled_from.unwrap();
    assert_eq!(cap, Capability::Avx2);

    let features = FeatureSet::from_capabilities(Capability::ALL).with_disabled_from(cap);
    assert!(features.is_supported(Capability::Avx));
    for later in Capability::ALL.iter().filter(|c| **c >= Capability::Avx2) {
        assert!(!features.is_supported(*later), "{} still enabled", later);
    }
}

#[test]
fn capability_names_parse_loosely() {
    assert_eq!("SSE4.1".parse::<Capability>().unwrap(), Capability::Sse41);
    assert_eq!("avx_512".parse::<Capability>().unwrap(), Capability::Avx512);
    assert_eq!("DotProd".parse::<Capability>().unwrap(), Capability::DotProd);
    assert!("mmx".parse::<Capability>().is_err());
}

#[test]
fn backend_names() {
    assert_eq!("OPENCL".parse::<Backend>().unwrap(), Backend::OpenCl);
    assert_eq!(Backend::default(), Backend::Cpu);
    let err = "vulkan".parse::<Backend>().unwrap_err();
    assert_eq!(err.to_string(), "Invalid device: vulkan");
}

#[cfg(not(feature = "opencl"))]
#[test]
fn opencl_backend_reports_disabled_build() {
    let err = Backend::OpenCl.execute(&Config::default(), std::io::sink()).unwrap_err();
    assert!(matches!(err, Error::BackendDisabled("opencl")));
}
