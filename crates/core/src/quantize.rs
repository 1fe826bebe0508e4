//! Step quantizer for discrete mode
//!
//! `steps` evenly spaced positions divide the 0-100 scale into `steps - 1`
//! intervals. Options validation refuses discrete configs with fewer than
//! 2 steps; `snap` still guards the division and passes the value through
//! unchanged rather than ever producing a NaN.

/// Width of one step interval on the 0-100 scale. `steps` must be at
/// least 2; `snap` is the guarded entry point.
pub fn step_size(steps: u32) -> f64 {
    100.0 / f64::from(steps - 1)
}

/// Snap a raw position to the nearest step
pub fn snap(raw: f64, steps: u32) -> f64 {
    if steps < 2 {
        return raw;
    }
    let step = step_size(steps);
    (raw / step).round() * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_nearest_step() {
        // 5 steps -> step size 25; 47 is nearer to 50 than 25
        assert_eq!(snap(47.0, 5), 50.0);
        assert_eq!(snap(12.0, 5), 0.0);
        assert_eq!(snap(12.5, 5), 25.0);
        assert_eq!(snap(100.0, 5), 100.0);
    }

    #[test]
    fn test_snap_endpoints_are_fixed_points() {
        for steps in 2..=10 {
            assert_eq!(snap(0.0, steps), 0.0);
            assert_eq!(snap(100.0, steps), 100.0);
        }
    }

    #[test]
    fn test_snap_is_multiple_within_half_step() {
        for steps in 2..=10_u32 {
            let step = step_size(steps);
            for tenth in 0..=1000 {
                let raw = f64::from(tenth) / 10.0;
                let snapped = snap(raw, steps);
                let index = snapped / step;
                assert!(
                    (index - index.round()).abs() < 1e-9,
                    "snap({raw}, {steps}) = {snapped} is not on a step"
                );
                assert!(
                    (snapped - raw).abs() <= step / 2.0 + 1e-9,
                    "snap({raw}, {steps}) = {snapped} moved more than half a step"
                );
            }
        }
    }

    #[test]
    fn test_degenerate_step_count_passes_through() {
        assert_eq!(snap(37.5, 1), 37.5);
        assert_eq!(snap(37.5, 0), 37.5);
    }
}
