//! Runtime library discovery.
//!
//! Candidates from `LIBOPENCL_PATH` (colon separated) come first, then a
//! per-platform default list. The first candidate that opens wins and stays
//! loaded for the rest of the run.
//!
//! The device session binds through the OpenCL ICD the process was linked
//! against, so the resolved path is a diagnostic: it tells the user which
//! runtime on the search list is loadable, not which one the session uses.

use std::path::PathBuf;

/// Environment variable holding extra candidates.
pub const ENV_VAR: &str = "LIBOPENCL_PATH";

#[cfg(target_os = "macos")]
const DEFAULT_PATHS: &[&str] = &[
    "/System/Library/Frameworks/OpenCL.framework/OpenCL",
    "libOpenCL.so",
];

#[cfg(all(target_os = "android", target_pointer_width = "64"))]
const DEFAULT_PATHS: &[&str] = &[
    "/system/lib64/libOpenCL.so",
    "/system/lib64/libOpenCL_system.so",
    "/system/lib64/egl/libGLES_mali.so",
    "/system/vendor/lib64/libOpenCL.so",
    "/system/vendor/lib64/egl/libGLES_mali.so",
    "/system/vendor/lib64/libPVROCL.so",
    "/vendor/lib64/libOpenCL.so",
    "/data/data/org.pocl.libs/files/lib64/libpocl.so",
    "libOpenCL.so",
];

#[cfg(all(target_os = "android", target_pointer_width = "32"))]
const DEFAULT_PATHS: &[&str] = &[
    "/system/lib/libOpenCL.so",
    "/system/lib/libOpenCL_system.so",
    "/system/lib/egl/libGLES_mali.so",
    "/system/vendor/lib/libOpenCL.so",
    "/system/vendor/lib/egl/libGLES_mali.so",
    "/system/vendor/lib/libPVROCL.so",
    "/vendor/lib/libOpenCL.so",
    "/data/data/org.pocl.libs/files/lib/libpocl.so",
    "libOpenCL.so",
];

#[cfg(target_os = "windows")]
const DEFAULT_PATHS: &[&str] = &["OpenCL.dll"];

#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
const DEFAULT_PATHS: &[&str] = &[
    "/usr/lib64/libOpenCL.so",
    "/usr/local/lib64/libOpenCL.so",
    "/usr/local/cuda/lib64/libOpenCL.so",
    "/opt/intel/opencl/libOpenCL.so",
    "/usr/lib/libOpenCL.so",
    "libOpenCL.so",
];

#[cfg(all(target_os = "linux", not(target_arch = "x86_64")))]
const DEFAULT_PATHS: &[&str] = &[
    "/usr/lib/libOpenCL.so",
    "/lib/aarch64-linux-gnu/libmali.so",
    "/usr/lib32/libOpenCL.so",
    "/usr/local/lib/libOpenCL.so",
    "/usr/local/lib/libpocl.so",
    "/usr/local/cuda/lib/libOpenCL.so",
    "libOpenCL.so",
];

#[cfg(not(any(
    target_os = "macos",
    target_os = "android",
    target_os = "windows",
    target_os = "linux"
)))]
const DEFAULT_PATHS: &[&str] = &["libOpenCL.so"];

/// Platform default candidates, in search order.
pub fn default_paths() -> &'static [&'static str] {
    DEFAULT_PATHS
}

/// Every candidate to try: entries of `env` (the value of [`ENV_VAR`]) first,
/// then the defaults. Empty entries are ignored.
pub fn candidate_paths(env: Option<&str>) -> Vec<PathBuf> {
    env.into_iter()
        .flat_map(|value| value.split(':'))
        .filter(|entry| !entry.is_empty())
        .chain(default_paths().iter().copied())
        .map(PathBuf::from)
        .collect()
}

/// A loaded runtime library and the path it was opened from.
#[cfg(feature = "opencl")]
#[derive(Debug)]
pub struct RuntimeLibrary {
    path: PathBuf,
    library: libloading::Library,
}

#[cfg(feature = "opencl")]
impl RuntimeLibrary {
    /// Candidate that opened.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// The open handle. Dropping the [`RuntimeLibrary`] unloads it.
    pub fn library(&self) -> &libloading::Library {
        &self.library
    }
}

/// Open the first loadable candidate and keep it open.
///
/// # Errors
///
/// [`Error::LibraryNotFound`](crate::Error::LibraryNotFound) listing every
/// path tried.
#[cfg(feature = "opencl")]
pub fn resolve(env: Option<&str>) -> crate::Result<RuntimeLibrary> {
    use libloading::Library;

    let searched = candidate_paths(env);
    let opened = searched.iter().find_map(|path| {
        // SAFETY: loading a runtime library runs its initializers; these are
        // vendor compute runtimes expected to be safe to load.
        unsafe { Library::new(path.as_os_str()) }
            .ok()
            .map(|library| RuntimeLibrary {
                path: path.clone(),
                library,
            })
    });
    opened.ok_or(crate::Error::LibraryNotFound { searched })
}
