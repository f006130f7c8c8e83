//! Errors of the 2D Newton-Raphson solver.
//!
//! Only two things ever reach the caller:
//! - the iteration budget is spent without convergence ([`NewtonRaphsonError::NoSolutionFound`])
//! - a configuration value is rejected when it is set
//!
//! Singular jacobians, non-finite values and constraint violations are outcomes of an
//! attempt (`AttemptFailure` in the measures module) and are absorbed by restarting.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NewtonRaphsonError {
    #[error(
        "no solution found: {attempts} attempts, {total_iterations} iterations in total"
    )]
    NoSolutionFound {
        attempts: usize,
        total_iterations: usize,
    },

    #[error("invalid accuracy: must be finite and > 0. got {got}")]
    InvalidAccuracy { got: f64 },

    #[error("invalid iterations per try: must be >= 1. got {got}")]
    InvalidIterationsPerTry { got: usize },

    #[error(
        "invalid total iterations: must be >= 1 and >= iterations per try ({per_try}). got {got}"
    )]
    InvalidIterationsTotal { got: usize, per_try: usize },

    #[error("invalid search range: bounds must be finite and lower < upper. got [{lower_x}, {upper_x}] x [{lower_y}, {upper_y}]")]
    InvalidSearchRange {
        lower_x: f64,
        lower_y: f64,
        upper_x: f64,
        upper_y: f64,
    },

    #[error("invalid derivation step: epsilon must be finite and > 0. got {got}")]
    InvalidEpsilon { got: f64 },

    #[error("loglevel must be debug, info, warn, error, off or none. got {got}")]
    InvalidLogLevel { got: String },

    #[error("logger setup failed: {0}")]
    Logger(String),
}
