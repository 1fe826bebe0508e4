//! Visual mapping from values to track geometry
//!
//! Pure and stateless: percentages along the track for handles, fill and
//! step marks, plus the pixel metrics a handle needs to center itself on
//! the rail. The widget crate turns these into inline styles.

use crate::options::HandleSize;
use crate::value::Value;

/// Horizontal span on the track, in percent of track width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub left: f64,
    pub width: f64,
}

/// Fill span: [0, v] for a single value, [low, high] for a range
pub const fn fill_span(value: Value) -> Span {
    match value {
        Value::Single(v) => Span {
            left: 0.0,
            width: v,
        },
        Value::Range(low, high) => Span {
            left: low,
            width: high - low,
        },
    }
}

/// Handle offsets in percent: the start handle, and the end handle for a
/// range value. A scalar value renders one handle.
pub const fn handle_offsets(value: Value) -> (f64, Option<f64>) {
    match value {
        Value::Single(v) => (v, None),
        Value::Range(low, high) => (low, Some(high)),
    }
}

/// Pixel metrics for a handle: diameter, and the top offset that centers
/// it vertically on the track line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleMetrics {
    pub size_px: f64,
    pub top_px: f64,
}

pub const fn handle_metrics(size: HandleSize) -> HandleMetrics {
    let px = size.px();
    HandleMetrics {
        size_px: px,
        top_px: -(px / 2.0),
    }
}

/// Step mark offsets in percent, `index / (steps - 1) * 100` for each of
/// the `steps` marks. Empty below 2 steps (nothing to mark).
pub fn step_marks(steps: u32) -> Vec<f64> {
    if steps < 2 {
        return Vec::new();
    }
    (0..steps)
        .map(|index| f64::from(index) / f64::from(steps - 1) * 100.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_fill_spans_from_zero() {
        assert_eq!(
            fill_span(Value::Single(42.0)),
            Span {
                left: 0.0,
                width: 42.0
            }
        );
    }

    #[test]
    fn test_range_fill_spans_between_endpoints() {
        assert_eq!(
            fill_span(Value::Range(25.0, 75.0)),
            Span {
                left: 25.0,
                width: 50.0
            }
        );
    }

    #[test]
    fn test_handle_offsets() {
        assert_eq!(handle_offsets(Value::Single(30.0)), (30.0, None));
        assert_eq!(
            handle_offsets(Value::Range(10.0, 90.0)),
            (10.0, Some(90.0))
        );
    }

    #[test]
    fn test_handle_metrics_center_on_track() {
        assert_eq!(
            handle_metrics(HandleSize::Size24),
            HandleMetrics {
                size_px: 24.0,
                top_px: -12.0
            }
        );
        assert_eq!(
            handle_metrics(HandleSize::Size32),
            HandleMetrics {
                size_px: 32.0,
                top_px: -16.0
            }
        );
    }

    #[test]
    fn test_step_marks_evenly_spaced() {
        assert_eq!(step_marks(5), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(step_marks(2), vec![0.0, 100.0]);
        assert!(step_marks(1).is_empty());
    }
}
