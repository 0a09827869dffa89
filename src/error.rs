//! Error type shared by both backends.
//!
//! Every failure that should abort a run ends up here. Library code returns
//! these up to `main`, which prints them and exits with status 1; nothing in
//! the library terminates the process on its own.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a probe run.
#[derive(Debug)]
pub enum Error {
    /// `--device` named something other than `cpu` or `opencl`.
    InvalidDevice(String),

    /// The requested device index does not exist.
    InvalidDeviceIndex {
        /// Index that was requested.
        index: usize,
        /// Number of devices that were discovered.
        count: usize,
    },

    /// No compute platform exposed a GPU-class device.
    NoGpuDevice,

    /// The backend was compiled out of this binary.
    BackendDisabled(&'static str),

    /// A compute API call returned a non-success code.
    Api {
        /// Source text of the failing call.
        call: &'static str,
        /// Source file of the call site.
        file: &'static str,
        /// Source line of the call site.
        line: u32,
        /// Raw error code reported by the runtime.
        code: i32,
    },

    /// A compute program failed to build.
    Build {
        /// Name of the embedded program.
        program: String,
        /// Compiler options that were passed.
        options: &'static str,
        /// Build log reported by the driver.
        log: String,
    },

    /// An embedded program with this name does not exist.
    UnknownProgram(String),

    /// No compute runtime library could be opened.
    LibraryNotFound {
        /// Every path that was tried, in order.
        searched: Vec<PathBuf>,
    },

    /// NDRange component accessed beyond its dimension.
    NdRangeIndex {
        /// Requested component.
        index: usize,
        /// Declared dimension.
        dimension: usize,
    },

    /// Only 1-dimensional dispatch is supported.
    UnsupportedDimension(usize),

    /// A configuration value could not be interpreted.
    InvalidConfig {
        /// Setting name (flag or environment variable).
        key: String,
        /// Offending value.
        value: String,
    },

    /// Underlying I/O error while writing results.
    Io(std::io::Error),

    /// A result could not be encoded as JSON.
    Json(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidDevice(name) => write!(f, "Invalid device: {}", name),
            Error::InvalidDeviceIndex { index, count } => {
                write!(f, "Invalid device id: {}, max size is {}", index, count)
            }
            Error::NoGpuDevice => write!(f, "no opencl platform exposes a GPU device"),
            Error::BackendDisabled(name) => write!(f, "{} disabled at compile time", name),
            Error::Api {
                call,
                file,
                line,
                code,
            } => write!(
                f,
                "opencl error {}: {} ({} at {}:{})",
                code,
                crate::opencl::error_name(*code),
                call,
                file,
                line
            ),
            Error::Build {
                program,
                options,
                log,
            } => write!(
                f,
                "build program error: src={} opt={} errno={}\n{}",
                program,
                options,
                crate::opencl::error_name(crate::opencl::BUILD_PROGRAM_FAILURE),
                log
            ),
            Error::UnknownProgram(name) => write!(f, "no embedded program named '{}'", name),
            Error::LibraryNotFound { searched } => {
                write!(f, "can not find opencl, searched:")?;
                for path in searched {
                    write!(f, " {}", path.display())?;
                }
                Ok(())
            }
            Error::NdRangeIndex { index, dimension } => {
                write!(f, "invalid index: {} expected < {}", index, dimension)
            }
            Error::UnsupportedDimension(dim) => {
                write!(f, "only support 1-dim ndrange, got: {}", dim)
            }
            Error::InvalidConfig { key, value } => {
                write!(f, "invalid value '{}' for {}", value, key)
            }
            Error::Io(e) => write!(f, "output error: {}", e),
            Error::Json(e) => write!(f, "json encoding error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}
