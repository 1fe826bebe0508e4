//! Slider configuration surface
//!
//! `SliderOptions` is the full constructor surface of the widget. Discrete
//! mode with fewer than 2 steps has no meaningful step size (the interval
//! count would be zero), so `validate` rejects it up front instead of
//! letting the quantizer divide by zero.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Whether values snap to steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Continuous,
    Discrete,
}

/// One value or an ordered (low, high) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arity {
    Single,
    Range,
}

/// Visual handle diameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandleSize {
    Size24,
    Size32,
}

impl HandleSize {
    /// Diameter in CSS pixels
    pub const fn px(self) -> f64 {
        match self {
            Self::Size24 => 24.0,
            Self::Size32 => 32.0,
        }
    }
}

/// Invalid configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("discrete mode requires at least 2 steps, got {0}")]
    TooFewSteps(u32),
    #[error("unrecognized option value: {0}")]
    Unrecognized(String),
}

/// Full widget configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderOptions {
    pub mode: Mode,
    pub arity: Arity,
    /// Step count, meaningful only under `Mode::Discrete`
    pub steps: u32,
    pub handle_size: HandleSize,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Continuous,
            arity: Arity::Single,
            steps: 5,
            handle_size: HandleSize::Size24,
        }
    }
}

impl SliderOptions {
    /// Reject configurations the quantizer cannot serve.
    /// Continuous mode ignores `steps` entirely.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        match self.mode {
            Mode::Discrete if self.steps < 2 => Err(OptionsError::TooFewSteps(self.steps)),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Continuous => "continuous",
            Self::Discrete => "discrete",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Mode {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "continuous" => Ok(Self::Continuous),
            "discrete" => Ok(Self::Discrete),
            other => Err(OptionsError::Unrecognized(other.to_string())),
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Single => "single",
            Self::Range => "range",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Arity {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "range" => Ok(Self::Range),
            other => Err(OptionsError::Unrecognized(other.to_string())),
        }
    }
}

impl std::fmt::Display for HandleSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Size24 => "24",
            Self::Size32 => "32",
        };
        write!(f, "{s}")
    }
}

impl FromStr for HandleSize {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24" => Ok(Self::Size24),
            "32" => Ok(Self::Size32),
            other => Err(OptionsError::Unrecognized(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discrete_rejects_too_few_steps() {
        let opts = SliderOptions {
            mode: Mode::Discrete,
            steps: 1,
            ..SliderOptions::default()
        };
        assert_eq!(opts.validate(), Err(OptionsError::TooFewSteps(1)));

        let opts = SliderOptions { steps: 0, ..opts };
        assert_eq!(opts.validate(), Err(OptionsError::TooFewSteps(0)));
    }

    #[test]
    fn test_continuous_ignores_steps() {
        let opts = SliderOptions {
            mode: Mode::Continuous,
            steps: 0,
            ..SliderOptions::default()
        };
        assert_eq!(opts.validate(), Ok(()));
    }

    #[test]
    fn test_discrete_accepts_two_steps() {
        let opts = SliderOptions {
            mode: Mode::Discrete,
            steps: 2,
            ..SliderOptions::default()
        };
        assert_eq!(opts.validate(), Ok(()));
    }

    #[test]
    fn test_round_trip_tokens() {
        assert_eq!("discrete".parse::<Mode>(), Ok(Mode::Discrete));
        assert_eq!("range".parse::<Arity>(), Ok(Arity::Range));
        assert_eq!("32".parse::<HandleSize>(), Ok(HandleSize::Size32));
        assert!(matches!(
            "diagonal".parse::<Mode>(),
            Err(OptionsError::Unrecognized(_))
        ));
    }

    #[test]
    fn test_handle_px() {
        assert_eq!(HandleSize::Size24.px(), 24.0);
        assert_eq!(HandleSize::Size32.px(), 32.0);
    }
}
