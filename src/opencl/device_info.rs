//! Device properties and the rules derived from them.
//!
//! [`DeviceQuery`] holds raw answers from the runtime; [`DeviceInfo`] is what
//! the workload runners read. Keeping the derivation separate from the
//! queries lets the vendor rules be checked without a device.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Context property key naming the platform.
pub const CONTEXT_PLATFORM: isize = 0x1084;
/// Qualcomm performance hint property key.
pub const CONTEXT_PERF_HINT_QCOM: isize = 0x40C2;
/// Qualcomm performance hint: high.
pub const PERF_HINT_HIGH_QCOM: isize = 0x40C3;
/// Qualcomm priority hint property key.
pub const CONTEXT_PRIORITY_HINT_QCOM: isize = 0x40C9;
/// Qualcomm priority hint: high.
pub const PRIORITY_HINT_HIGH_QCOM: isize = 0x40CA;

/// Floor for the reported work-item size limit.
const MIN_WORK_GROUP: usize = 256;
/// Kernel launches fail above this on Qualcomm drivers.
const QUALCOMM_MAX_WORK_GROUP: usize = 128;
const NVIDIA_MAX_WORK_GROUP: usize = 256;

/// Raw answers to device queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceQuery {
    /// `CL_DEVICE_NAME`.
    pub name: String,
    /// `CL_DEVICE_VENDOR`.
    pub vendor: String,
    /// `CL_DRIVER_VERSION`.
    pub driver_version: String,
    /// `CL_DEVICE_EXTENSIONS`, space separated.
    pub extensions: String,
    /// `CL_DEVICE_MAX_COMPUTE_UNITS`.
    pub compute_units: u32,
    /// `CL_DEVICE_MAX_WORK_ITEM_SIZES`.
    pub max_work_item_sizes: Vec<usize>,
    /// `CL_DEVICE_MAX_MEM_ALLOC_SIZE`.
    pub max_mem_alloc_size: u64,
    /// `CL_DEVICE_GLOBAL_MEM_SIZE`.
    pub global_mem_size: u64,
    /// `CL_DEVICE_MAX_CLOCK_FREQUENCY`, MHz.
    pub max_clock_frequency: u32,
}

/// Properties the workload runners depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Device name.
    pub device_name: String,
    /// Driver version string.
    pub driver_version: String,
    /// Extension list.
    pub extensions: String,
    /// Compute unit count.
    pub num_cus: u32,
    /// Work-group size used for dispatch, after vendor caps.
    pub max_wg_size: usize,
    /// Largest single allocation, bytes.
    pub max_alloc_size: u64,
    /// Global memory, bytes.
    pub max_global_size: u64,
    /// Clock, MHz.
    pub max_clock_freq: u32,
    /// `cl_khr_fp16` present.
    pub half_supported: bool,
    /// `cl_khr_fp64` or `cl_amd_fp64` present.
    pub double_supported: bool,
}

/// Whether `extensions` lists `name` as a whole word.
pub fn has_extension(extensions: &str, name: &str) -> bool {
    extensions.split_whitespace().any(|ext| ext == name)
}

fn vendor_is(vendor: &str, needle: &str) -> bool {
    vendor.to_ascii_lowercase().contains(needle)
}

/// Work-group size to dispatch with.
///
/// The first work-item dimension, raised to at least 256, then capped for
/// vendors whose drivers misbehave at the reported maximum.
pub fn max_work_group_size(max_work_item_sizes: &[usize], vendor: &str) -> usize {
    let reported = max_work_item_sizes.first().copied().unwrap_or(0);
    let mut wg = reported.max(MIN_WORK_GROUP);
    if vendor_is(vendor, "qualcomm") {
        wg = wg.min(QUALCOMM_MAX_WORK_GROUP);
    }
    if vendor_is(vendor, "nvidia") {
        wg = wg.min(NVIDIA_MAX_WORK_GROUP);
    }
    wg
}

impl DeviceInfo {
    /// Apply the derivation rules to raw query results.
    pub fn from_query(q: &DeviceQuery) -> Self {
        Self {
            device_name: q.name.clone(),
            driver_version: q.driver_version.clone(),
            extensions: q.extensions.clone(),
            num_cus: q.compute_units,
            max_wg_size: max_work_group_size(&q.max_work_item_sizes, &q.vendor),
            max_alloc_size: q.max_mem_alloc_size,
            max_global_size: q.global_mem_size,
            max_clock_freq: q.max_clock_frequency,
            half_supported: has_extension(&q.extensions, "cl_khr_fp16"),
            double_supported: has_extension(&q.extensions, "cl_khr_fp64")
                || has_extension(&q.extensions, "cl_amd_fp64"),
        }
    }

    /// The identity lines printed after session creation.
    pub fn identity_lines(&self) -> [String; 5] {
        [
            format!("Device: {}", self.device_name),
            format!("Extensions: {}", self.extensions),
            format!("Driver version: {}", self.driver_version),
            format!("Compute units: {}", self.num_cus),
            format!("Clock frequency: {}", self.max_clock_freq),
        ]
    }
}

/// Zero-terminated context property list for `platform`.
///
/// Adds the Qualcomm performance and priority hints when the device
/// advertises `cl_qcom_perf_hint`.
pub fn context_properties(platform: isize, extensions: &str) -> Vec<isize> {
    let mut props = vec![CONTEXT_PLATFORM, platform];
    if has_extension(extensions, "cl_qcom_perf_hint") {
        props.extend_from_slice(&[
            CONTEXT_PERF_HINT_QCOM,
            PERF_HINT_HIGH_QCOM,
            CONTEXT_PRIORITY_HINT_QCOM,
            PRIORITY_HINT_HIGH_QCOM,
        ]);
    }
    props.push(0);
    props
}

/// Device `index` out of `devices`.
///
/// # Errors
///
/// [`Error::InvalidDeviceIndex`] when `index` is out of range; there is no
/// fallback to device 0.
pub fn select_device<T>(devices: &[T], index: usize) -> Result<&T> {
    devices.get(index).ok_or(Error::InvalidDeviceIndex {
        index,
        count: devices.len(),
    })
}

/// Largest power of two not above `n` (0 stays 0).
pub fn round_to_power2(n: u64) -> u64 {
    if n == 0 {
        0
    } else {
        1 << (63 - n.leading_zeros())
    }
}

/// Work-item count for a compute workload over elements of `elem_size`
/// bytes.
///
/// `num_cus × 2048 × max_wg` items, clamped so the output buffer fits in one
/// allocation, rounded down to a power of two in bytes.
pub fn compute_global_size(info: &DeviceInfo, elem_size: usize) -> usize {
    let items = info.num_cus as u64 * 2048 * info.max_wg_size as u64;
    let bytes = (items * elem_size as u64).min(info.max_alloc_size);
    (round_to_power2(bytes) / elem_size as u64) as usize
}
