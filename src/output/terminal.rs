//! Terminal output formatting.
//!
//! Result lines are plain so they can be grepped and diffed; headers, skip
//! notes and warnings use color.

use colored::Colorize;

use crate::features::Capability;
use crate::measurement::MeasurementResult;

/// Format one result line.
///
/// `<name> throughput: <ns> ns <gflops> GFlops latency: <ns> ns[ : <note>]`
pub fn format_line(result: &MeasurementResult) -> String {
    let mut line = format!(
        "{} throughput: {:.6} ns {:.6} GFlops latency: {:.6} ns",
        result.name, result.throughput_ns, result.gflops, result.latency_ns
    );
    if let Some(note) = &result.annotation {
        line.push_str(" : ");
        line.push_str(note);
    }
    line
}

/// Header printed before a probe family in verbose mode.
pub fn format_family_header(title: &str) -> String {
    format!("{}", format!("== {} ==", title).bold())
}

/// Note for a probe that was not run.
pub fn format_skip(name: &str, missing: Capability) -> String {
    format!("{} {}: requires {}", "skip".dimmed(), name, missing)
}

/// Preflight warning line.
pub fn format_warning(description: &str) -> String {
    format!("{} {}", "\u{26A0}".yellow().bold(), description)
}

/// Header before a group of accelerator kernel results.
pub fn format_kernel_header(title: &str) -> String {
    format!("{}", title.bold())
}

/// One accelerator kernel variant result.
pub fn format_kernel_line(variant: &str, value: f64) -> String {
    format!("    {} : {:.6}", variant, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_without_annotation() {
        let r = MeasurementResult::from_timings("mulps_sse", 8, None, (1000.0, 100), (4000.0, 100));
        assert_eq!(
            format_line(&r),
            "mulps_sse throughput: 10.000000 ns 0.800000 GFlops latency: 40.000000 ns"
        );
    }

    #[test]
    fn test_line_with_annotation() {
        let r = MeasurementResult::from_timings(
            "ins_ldd",
            2,
            Some("Test ldd ins dual issue"),
            (100.0, 100),
            (100.0, 100),
        );
        assert!(format_line(&r).ends_with("latency: 1.000000 ns : Test ldd ins dual issue"));
    }

    #[test]
    fn test_skip_and_kernel_lines() {
        colored::control::set_override(false);
        assert_eq!(format_skip("sdot", Capability::DotProd), "skip sdot: requires dotprod");
        assert_eq!(format_kernel_line("float4", 1.5), "    float4 : 1.500000");
        assert_eq!(format_family_header("SSE"), "== SSE ==");
        colored::control::unset_override();
    }
}
