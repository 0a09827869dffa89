//! peakprobe command line.
//!
//! ```bash
//! # Host CPU probes on core 0
//! peakprobe
//!
//! # Pin to core 3, JSON lines, shorter loops
//! peakprobe --dev-id 3 --json --runs 100000
//!
//! # Second GPU (needs the `opencl` feature)
//! peakprobe --device opencl --dev-id 1
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use peakprobe::{Backend, Config, Error, OutputFormat};

/// Peak instruction throughput/latency and device bandwidth probe
#[derive(Parser, Debug)]
#[command(name = "peakprobe")]
#[command(version)]
struct Args {
    /// Backend to run: cpu or opencl (case-insensitive)
    #[arg(short, long, default_value = "cpu")]
    device: String,

    /// CPU core to pin to, or GPU index for the opencl backend
    #[arg(short = 'i', long, default_value_t = 0)]
    dev_id: usize,

    /// Emit one JSON object per result line
    #[arg(long)]
    json: bool,

    /// Print family headers, detected features and skipped probes
    #[arg(short, long)]
    verbose: bool,

    /// Loop iterations per probe body (overrides PEAKPROBE_RUNS)
    #[arg(long)]
    runs: Option<u64>,

    /// Treat this capability and every later one as unsupported
    #[arg(long, value_name = "CAPABILITY")]
    disable_from: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let backend = match args.device.parse::<Backend>() {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", Args::command().render_usage());
            return ExitCode::FAILURE;
        }
    };

    match run(backend, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = io::stdout().flush();
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(backend: Backend, args: &Args) -> peakprobe::Result<()> {
    let mut config = Config::from_env()?.dev_id(args.dev_id);
    if let Some(runs) = args.runs {
        config = config.runs(runs);
    }
    if let Some(name) = &args.disable_from {
        let cap = name.parse().map_err(|_| Error::InvalidConfig {
            key: "--disable-from".to_string(),
            value: name.clone(),
        })?;
        config = config.disabled_from(cap);
    }
    if args.verbose {
        config = config.verbose(true);
    }
    if args.json {
        config = config.format(OutputFormat::Json);
    }

    backend.execute(&config, io::stdout().lock())
}
