//! Device-independent parts of the accelerator track.

use rand::Rng;

use peakprobe::opencl::device_info::{compute_global_size, round_to_power2, select_device};
use peakprobe::opencl::workload::{self, NumericType, Workload};
use peakprobe::opencl::{error_name, loader, DeviceInfo, DeviceQuery, NdRange};
use peakprobe::Error;

#[test]
fn divide_down_rounds_to_local_multiple() {
    let global = NdRange::divide_down(&NdRange::d1(37), &NdRange::d1(8)).unwrap();
    assert_eq!(global, NdRange::d1(32));
    assert_eq!(global.to_string(), "{32}");

    let global = NdRange::divide_down(&NdRange::d2(100, 30), &NdRange::d2(16, 8)).unwrap();
    assert_eq!(global.as_slice(), &[96, 24]);
    assert_eq!(global.total_size(), 96 * 24);
}

#[test]
fn divide_down_never_exceeds_global() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let g = rng.gen_range(0..100_000);
        let l = rng.gen_range(1..1024);
        let d = NdRange::divide_down(&NdRange::d1(g), &NdRange::d1(l)).unwrap();
        let v = d.get(0).unwrap();
        assert!(v <= g);
        assert_eq!(v % l, 0);
        assert!(g - v < l);
    }
}

/// Sorting ranges agrees with sorting `(dimension, s0, s1, s2)` tuples.
#[test]
fn ordering_matches_tuple_order() {
    let mut rng = rand::thread_rng();
    let mut ranges: Vec<NdRange> = (0..500)
        .map(|_| {
            let (a, b, c) = (rng.gen_range(1..8), rng.gen_range(1..8), rng.gen_range(1..8));
            match rng.gen_range(0..4) {
                0 => NdRange::empty(),
                1 => NdRange::d1(a),
                2 => NdRange::d2(a, b),
                _ => NdRange::d3(a, b, c),
            }
        })
        .collect();

    let key = |r: &NdRange| {
        let mut parts = [1usize; 3];
        for (i, part) in parts.iter_mut().enumerate().take(r.dimension()) {
            *part = r.get(i).unwrap();
        }
        if r.dimension() == 0 {
            parts = [0; 3];
        }
        (r.dimension(), parts[0], parts[1], parts[2])
    };
    let mut by_tuple = ranges.clone();
    by_tuple.sort_by_key(key);
    ranges.sort();
    assert_eq!(ranges, by_tuple);
}

#[test]
fn component_beyond_dimension_is_an_error() {
    let err = NdRange::d2(4, 4).get(2).unwrap_err();
    assert!(matches!(err, Error::NdRangeIndex { index: 2, dimension: 2 }));
}

#[test]
fn device_index_out_of_range_fails() {
    let devices = ["gpu0", "gpu1"];
    assert_eq!(*select_device(&devices, 1).unwrap(), "gpu1");

    let err = select_device(&devices, 2).unwrap_err();
    assert!(matches!(err, Error::InvalidDeviceIndex { index: 2, count: 2 }));
    assert!(err.to_string().contains('2'));

    let none: [&str; 0] = [];
    assert!(select_device(&none, 0).is_err());
}

fn adreno() -> DeviceInfo {
    DeviceInfo::from_query(&DeviceQuery {
        name: "Adreno 740".to_string(),
        vendor: "QUALCOMM".to_string(),
        extensions: "cl_khr_fp16 cl_qcom_perf_hint".to_string(),
        compute_units: 6,
        max_work_item_sizes: vec![1024, 1024, 1024],
        max_mem_alloc_size: 1 << 30,
        ..Default::default()
    })
}

#[test]
fn device_info_derivation() {
    let info = adreno();
    assert_eq!(info.max_wg_size, 128);
    assert!(info.half_supported);
    assert!(!info.double_supported);
    assert!(NumericType::Half.supported(&info));
    assert!(!NumericType::Double.supported(&info));
    assert_eq!(info.identity_lines()[0], "Device: Adreno 740");
}

#[test]
fn workload_sizes() {
    let info = adreno();
    // 6 CUs x 2048 x 128 items of 4 bytes is 6 MiB, rounded down to 4 MiB.
    assert_eq!(compute_global_size(&info, 4), (4 << 20) / 4);
    assert_eq!(workload::global_elems(&info), round_to_power2((1 << 30) / 8) as usize);
    assert_eq!(round_to_power2(37), 32);
    assert_eq!(round_to_power2(64), 64);
}

#[test]
fn workloads_run_in_fixed_order() {
    let titles: Vec<String> = Workload::SEQUENCE.iter().map(|w| w.title()).collect();
    assert_eq!(
        titles,
        [
            "Local memory bandwidth (GBPS)",
            "Global memory bandwidth (GBPS)",
            "int compute (GFLOPS)",
            "float compute (GFLOPS)",
            "half compute (GFLOPS)",
            "double compute (GFLOPS)",
        ]
    );
}

#[test]
fn error_names_and_library_candidates() {
    assert_eq!(error_name(-5), "CL_OUT_OF_RESOURCES");
    assert_eq!(error_name(12345), "unknown error");

    let paths = loader::candidate_paths(Some("/opt/a.so::/opt/b.so"));
    assert_eq!(paths[0].to_str(), Some("/opt/a.so"));
    assert_eq!(paths[1].to_str(), Some("/opt/b.so"));
    assert_eq!(paths.len(), 2 + loader::default_paths().len());
}
