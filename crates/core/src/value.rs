//! Slider value model
//!
//! Positions live on a normalized 0-100 scale. A `Range` value keeps the
//! `low <= high` invariant; the drag state machine enforces it on every
//! update. Serialized untagged so a change payload is either a bare number
//! or a two-element array, matching what callers expect from an onChange
//! emission.

use crate::options::Arity;
use serde::{Deserialize, Serialize};

/// Current slider position(s) on the 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Single(f64),
    /// (low, high) with low <= high
    Range(f64, f64),
}

impl Value {
    /// Arity-dependent default: 0 for Single, the full span for Range
    pub const fn default_for(arity: Arity) -> Self {
        match arity {
            Arity::Single => Self::Single(0.0),
            Arity::Range => Self::Range(0.0, 100.0),
        }
    }

    pub const fn is_range(self) -> bool {
        matches!(self, Self::Range(_, _))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Value::default_for(Arity::Single), Value::Single(0.0));
        assert_eq!(Value::default_for(Arity::Range), Value::Range(0.0, 100.0));
    }

    #[test]
    fn test_change_payload_shape() {
        // Callback payloads serialize as a bare number or a pair
        let single = serde_json::to_string(&Value::Single(42.5)).unwrap();
        assert_eq!(single, "42.5");
        let range = serde_json::to_string(&Value::Range(25.0, 75.0)).unwrap();
        assert_eq!(range, "[25.0,75.0]");
    }
}
