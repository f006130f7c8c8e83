//! Configuration of [`NewtonRaphson2D`](super::solver_2D::NewtonRaphson2D).
//!
//! [`NR2DConfig`]
//! ├ `accuracy`           : converged when |(F, G)| < accuracy (Euclidean norm)
//! ├ `iterations_per_try` : Newton steps allowed from one random start
//! ├ `iterations_total`   : Newton steps allowed over all starts of one `solve()`
//! ├ `lower`, `upper`     : box the random starts are drawn from, finite with finite width
//! ├ `seed`               : fixed seed of the random starts (None = OS entropy)
//! └ `loglevel`           : if set, `solve()` installs a terminal logger with this level
use super::errors::NewtonRaphsonError;
use super::linalg_2D::Vector2D;

pub const DEFAULT_ACCURACY: f64 = 1e-6;
pub const DEFAULT_ITERATIONS_PER_TRY: usize = 1000;
pub const DEFAULT_ITERATIONS_TOTAL: usize = 100000;
pub const DEFAULT_SEARCH_BOUND: f64 = 10.0;

pub const LOG_LEVELS: [&str; 6] = ["debug", "info", "warn", "error", "off", "none"];

#[derive(Debug, Clone, PartialEq)]
pub struct NR2DConfig {
    pub accuracy: f64,
    pub iterations_per_try: usize,
    pub iterations_total: usize,
    pub lower: Vector2D,
    pub upper: Vector2D,
    pub seed: Option<u64>,
    pub loglevel: Option<String>,
}

impl Default for NR2DConfig {
    fn default() -> Self {
        NR2DConfig {
            accuracy: DEFAULT_ACCURACY,
            iterations_per_try: DEFAULT_ITERATIONS_PER_TRY,
            iterations_total: DEFAULT_ITERATIONS_TOTAL,
            lower: Vector2D::new(-DEFAULT_SEARCH_BOUND, -DEFAULT_SEARCH_BOUND),
            upper: Vector2D::new(DEFAULT_SEARCH_BOUND, DEFAULT_SEARCH_BOUND),
            seed: None,
            loglevel: None,
        }
    }
}

pub(crate) fn check_accuracy(v: f64) -> Result<f64, NewtonRaphsonError> {
    if !v.is_finite() || v <= 0.0 {
        return Err(NewtonRaphsonError::InvalidAccuracy { got: v });
    }
    Ok(v)
}

pub(crate) fn check_iterations_per_try(v: usize) -> Result<usize, NewtonRaphsonError> {
    if v == 0 {
        return Err(NewtonRaphsonError::InvalidIterationsPerTry { got: v });
    }
    Ok(v)
}

pub(crate) fn check_iterations_total(v: usize, per_try: usize) -> Result<usize, NewtonRaphsonError> {
    if v == 0 || v < per_try {
        return Err(NewtonRaphsonError::InvalidIterationsTotal { got: v, per_try });
    }
    Ok(v)
}

pub(crate) fn check_search_range(
    lower: Vector2D,
    upper: Vector2D,
) -> Result<(Vector2D, Vector2D), NewtonRaphsonError> {
    let width = upper - lower;
    if !lower.is_finite()
        || !upper.is_finite()
        || !width.is_finite()
        || lower.x >= upper.x
        || lower.y >= upper.y
    {
        return Err(NewtonRaphsonError::InvalidSearchRange {
            lower_x: lower.x,
            lower_y: lower.y,
            upper_x: upper.x,
            upper_y: upper.y,
        });
    }
    Ok((lower, upper))
}

pub(crate) fn check_loglevel(level: &str) -> Result<String, NewtonRaphsonError> {
    let level = level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(NewtonRaphsonError::InvalidLogLevel { got: level });
    }
    Ok(level)
}

impl NR2DConfig {
    /// checks every field and the cross-field invariant iterations_total >= iterations_per_try
    pub fn validate(&self) -> Result<(), NewtonRaphsonError> {
        check_accuracy(self.accuracy)?;
        check_iterations_per_try(self.iterations_per_try)?;
        check_iterations_total(self.iterations_total, self.iterations_per_try)?;
        check_search_range(self.lower, self.upper)?;
        if let Some(level) = &self.loglevel {
            check_loglevel(level)?;
        }
        Ok(())
    }
}
