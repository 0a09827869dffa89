//! Top-level backend selection.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cpu::CpuBackend;
use crate::{Config, Error, Result};

/// Where probes run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Backend {
    /// Host CPU instruction probes.
    #[default]
    Cpu,
    /// Attached accelerator through OpenCL.
    OpenCl,
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cpu" => Ok(Backend::Cpu),
            "opencl" => Ok(Backend::OpenCl),
            _ => Err(Error::InvalidDevice(s.to_string())),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Cpu => write!(f, "cpu"),
            Backend::OpenCl => write!(f, "opencl"),
        }
    }
}

impl Backend {
    /// Run this backend's full sequence, writing results to `out`.
    ///
    /// # Errors
    ///
    /// [`Error::BackendDisabled`] for OpenCL in a build without the `opencl`
    /// feature; otherwise whatever the backend reports.
    pub fn execute<W: Write>(self, config: &Config, out: W) -> Result<()> {
        match self {
            Backend::Cpu => CpuBackend::new(config).execute(out).map(|_| ()),
            Backend::OpenCl => execute_opencl(config, out),
        }
    }
}

#[cfg(feature = "opencl")]
fn execute_opencl<W: Write>(config: &Config, mut out: W) -> Result<()> {
    use colored::Colorize;

    use crate::opencl::{loader, DeviceSession, Workload};
    use crate::output::{json, OutputFormat};

    // Held until the workloads finish.
    let runtime = loader::resolve(config.opencl_path.as_deref())?;
    eprintln!("{} {}", "opencl runtime:".dimmed(), runtime.path().display());

    let session = DeviceSession::open(config.dev_id)?;
    match config.format {
        OutputFormat::Text => session.print_device_info(&mut out)?,
        OutputFormat::Json => writeln!(out, "{}", json::to_json(session.info())?)?,
    }

    for workload in Workload::SEQUENCE {
        session.run(workload, config.format, &mut out)?;
    }
    drop(runtime);
    Ok(())
}

#[cfg(not(feature = "opencl"))]
fn execute_opencl<W: Write>(_config: &Config, _out: W) -> Result<()> {
    Err(Error::BackendDisabled("opencl"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("cpu".parse::<Backend>().unwrap(), Backend::Cpu);
        assert_eq!("OpenCL".parse::<Backend>().unwrap(), Backend::OpenCl);
        assert_eq!("CPU".parse::<Backend>().unwrap(), Backend::Cpu);
    }

    #[test]
    fn test_parse_invalid() {
        let err = "cuda".parse::<Backend>().unwrap_err();
        assert!(matches!(err, Error::InvalidDevice(ref name) if name == "cuda"));
    }

    #[test]
    fn test_display_round_trips() {
        for backend in [Backend::Cpu, Backend::OpenCl] {
            assert_eq!(backend.to_string().parse::<Backend>().unwrap(), backend);
        }
    }

    #[cfg(not(feature = "opencl"))]
    #[test]
    fn test_opencl_disabled() {
        let err = Backend::OpenCl
            .execute(&Config::default(), Vec::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "opencl disabled at compile time");
    }
}
