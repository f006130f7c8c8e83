//! Numerical partial derivatives for objectives without a closed-form jacobian.
//!
//! Central differences with step `epsilon`:
//!
//! ```text
//! df/dx ~ ( f(x + eps, y) - f(x - eps, y) ) / (2 eps)
//! df/dy ~ ( f(x, y + eps) - f(x, y - eps) ) / (2 eps)
//! ```
//!
//! Truncation error is O(eps^2), cancellation error grows like |f| * EPSILON / eps,
//! so eps around 1e-6 is the usual compromise for O(1) functions.
//! Nothing is cached: every evaluation of a derivative calls `f` twice.
use super::errors::NewtonRaphsonError;
use super::functions_2D::Function2D;
use super::linalg_2D::Vector2D;

pub const DEFAULT_EPSILON: f64 = 1e-6;

/// the variable a [`PartialDerivative2D`] differentiates by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable2D {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivation2D {
    epsilon: f64,
}

impl Default for Derivation2D {
    fn default() -> Self {
        Derivation2D {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl Derivation2D {
    pub fn new(epsilon: f64) -> Result<Derivation2D, NewtonRaphsonError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(NewtonRaphsonError::InvalidEpsilon { got: epsilon });
        }
        Ok(Derivation2D { epsilon })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// approximation of df/dx
    pub fn derive1<F: Function2D>(&self, function: F) -> PartialDerivative2D<F> {
        PartialDerivative2D {
            function,
            epsilon: self.epsilon,
            variable: Variable2D::X,
        }
    }

    /// approximation of df/dy
    pub fn derive2<F: Function2D>(&self, function: F) -> PartialDerivative2D<F> {
        PartialDerivative2D {
            function,
            epsilon: self.epsilon,
            variable: Variable2D::Y,
        }
    }
}

/// A `Function2D` evaluating the central difference of the wrapped function
#[derive(Debug, Clone)]
pub struct PartialDerivative2D<F> {
    function: F,
    epsilon: f64,
    variable: Variable2D,
}

impl<F> PartialDerivative2D<F> {
    pub fn variable(&self) -> Variable2D {
        self.variable
    }
}

impl<F: Function2D> Function2D for PartialDerivative2D<F> {
    fn evaluate(&self, input: &Vector2D) -> f64 {
        let eps = self.epsilon;
        let (forward, backward) = match self.variable {
            Variable2D::X => (
                Vector2D::new(input.x + eps, input.y),
                Vector2D::new(input.x - eps, input.y),
            ),
            Variable2D::Y => (
                Vector2D::new(input.x, input.y + eps),
                Vector2D::new(input.x, input.y - eps),
            ),
        };
        (self.function.evaluate(&forward) - self.function.evaluate(&backward)) / (2.0 * eps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::cell::Cell;

    fn grid() -> Vec<Vector2D> {
        let mut points = Vec::new();
        for i in 0..=10 {
            for j in 0..=10 {
                points.push(Vector2D::new(-5.0 + i as f64, -2.5 + 0.5 * j as f64));
            }
        }
        points
    }

    #[test]
    fn test_rejects_bad_epsilon() {
        assert!(Derivation2D::new(0.0).is_err());
        assert!(Derivation2D::new(-1e-6).is_err());
        assert!(Derivation2D::new(f64::NAN).is_err());
        assert!(Derivation2D::new(f64::INFINITY).is_err());
        assert_eq!(
            Derivation2D::new(-2.0).unwrap_err(),
            NewtonRaphsonError::InvalidEpsilon { got: -2.0 }
        );
        assert_eq!(Derivation2D::default().epsilon(), DEFAULT_EPSILON);
        assert_eq!(Derivation2D::new(1e-3).unwrap().epsilon(), 1e-3);
    }

    #[test]
    fn test_square_derivative() {
        // f = x^2, df/dx = 2x, df/dy = 0
        for &eps in &[1e-3, 1e-6] {
            let derivation = Derivation2D::new(eps).unwrap();
            let d1 = derivation.derive1(|p: &Vector2D| p.x * p.x);
            let d2 = derivation.derive2(|p: &Vector2D| p.x * p.x);
            assert_eq!(d1.variable(), Variable2D::X);
            assert_eq!(d2.variable(), Variable2D::Y);
            // central difference is exact for quadratics, only rounding is left
            let tol = 100.0 * f64::EPSILON / eps;
            for p in grid() {
                assert!((d1.evaluate(&p) - 2.0 * p.x).abs() <= tol);
                assert_eq!(d2.evaluate(&p), 0.0);
            }
        }
    }

    #[test]
    fn test_mixed_function_derivative() {
        // f = x^3 y + sin(y), df/dx = 3x^2 y, df/dy = x^3 + cos(y)
        let f = |p: &Vector2D| p.x.powi(3) * p.y + p.y.sin();
        for &eps in &[1e-3, 1e-6] {
            let derivation = Derivation2D::new(eps).unwrap();
            let d1 = derivation.derive1(f);
            let d2 = derivation.derive2(f);
            for p in grid() {
                // third derivatives are bounded by 6|y| + 1 on the grid, values by ~ 320
                let tol = 6.0 * eps * eps * (p.y.abs() + 1.0) + 2000.0 * f64::EPSILON / eps;
                assert!((d1.evaluate(&p) - 3.0 * p.x * p.x * p.y).abs() <= tol);
                assert!((d2.evaluate(&p) - (p.x.powi(3) + p.y.cos())).abs() <= tol + eps * eps);
            }
        }
    }

    #[test]
    fn test_two_evaluations_per_call_no_caching() {
        let calls = Cell::new(0usize);
        let f = |p: &Vector2D| {
            calls.set(calls.get() + 1);
            p.x * p.y
        };
        let derivation = Derivation2D::default();
        let d = derivation.derive2(&f);
        let p = Vector2D::new(2.0, 3.0);
        assert_relative_eq!(d.evaluate(&p), 2.0, epsilon = 1e-8);
        assert_relative_eq!(d.evaluate(&p), 2.0, epsilon = 1e-8);
        assert_eq!(calls.get(), 4);
    }
}
