//! JSON serialization for measurement results.

use serde::Serialize;

/// Serialize a value to a compact, single-line JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for the
/// crate's result types).
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Serialize a value to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::MeasurementResult;

    fn make_result(annotation: Option<&str>) -> MeasurementResult {
        MeasurementResult::from_timings("fmla", 8, annotation, (500.0, 1000), (2000.0, 1000))
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&make_result(None)).unwrap();
        assert!(json.contains("\"name\":\"fmla\""));
        assert!(json.contains("\"throughput_ns\":0.5"));
        assert!(json.contains("\"gflops\":16.0"));
        assert!(!json.contains("annotation"));
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json_pretty(&make_result(Some("dual"))).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"annotation\": \"dual\""));
    }
}
