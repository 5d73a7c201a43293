//! Error types for the simulation core.
//!
//! Every failure here is unrecoverable at the point where it happens and is
//! handed back to the caller unchanged. Nothing is clamped or defaulted.

use colonia_data::State;
use thiserror::Error;

/// Main error type for simulation operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Growth field matrix is not a non-empty square of valid values
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// No next state for a (state, symbol) pair, or a symbol outside `a`..`e`
    #[error("Unknown transition: no next state from {state} on symbol {symbol:?}")]
    UnknownTransition { state: State, symbol: char },

    /// A state referenced somewhere is not declared by the transition table
    #[error("Undeclared state: {0}")]
    UndeclaredState(State),

    /// Field lookup landed outside the grid
    #[error("Out of bounds: position ({x}, {y}) falls outside the {size}x{size} field")]
    OutOfBounds { x: f64, y: f64, size: usize },

    /// Payoff formula is undefined for the population size
    #[error("Undefined payoff: {kind} payoff needs a population above {minimum}, got {population}")]
    UndefinedPayoff {
        kind: &'static str,
        population: usize,
        minimum: usize,
    },

    /// Strategy label outside `a`..`e`
    #[error("Invalid strategy: {0:?} is not one of a, b, c, d, e")]
    InvalidStrategy(String),

    /// Configuration values that cannot describe a run
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    /// Creates a new shape error.
    #[must_use]
    pub fn invalid_shape<S: Into<String>>(msg: S) -> Self {
        Self::InvalidShape(msg.into())
    }

    /// Creates a new config error.
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimError::UnknownTransition {
            state: State(7),
            symbol: 'z',
        };
        assert_eq!(
            err.to_string(),
            "Unknown transition: no next state from 7 on symbol 'z'"
        );
    }

    #[test]
    fn test_payoff_error_display() {
        let err = SimError::UndefinedPayoff {
            kind: "defect",
            population: 1,
            minimum: 1,
        };
        assert!(err.to_string().contains("defect payoff"));
        assert!(err.to_string().contains("got 1"));
    }
}
