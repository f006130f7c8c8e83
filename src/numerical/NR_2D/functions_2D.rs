//! Callable abstractions consumed by the solver
//!
//! - [`Function2D`]: scalar function of a point, an objective or one partial derivative
//! - [`CombinedFunction2D`]: objective values and jacobian in one call ("master function"),
//!   lets the caller share sub-computations between values and derivatives
//! - [`Constraint2D`]: admissible-domain predicate
//!
//! Closures implement all three through blanket impls, so
//! `|p: &Vector2D| p.x * p.x - 4.0` is a `Function2D` and
//! `|p: &Vector2D| p.x > -1.0` is a `Constraint2D`.
use super::linalg_2D::{SquareMatrix2D, Vector2D};

/// Scalar function f(x, y). Expected to be pure: same input, same output.
pub trait Function2D {
    fn evaluate(&self, input: &Vector2D) -> f64;
}

impl<F> Function2D for F
where
    F: Fn(&Vector2D) -> f64,
{
    fn evaluate(&self, input: &Vector2D) -> f64 {
        self(input)
    }
}

/// Objective values (F, G) together with the jacobian at the same point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Evaluation2D {
    pub objective: Vector2D,
    pub derivatives: SquareMatrix2D,
}

impl Evaluation2D {
    pub fn new(objective: Vector2D, derivatives: SquareMatrix2D) -> Evaluation2D {
        Evaluation2D {
            objective,
            derivatives,
        }
    }
}

/// Point -> (objective vector, jacobian). Results are owned by the caller,
/// `&mut self` only allows an implementation to keep scratch state between calls.
pub trait CombinedFunction2D {
    fn evaluate(&mut self, input: &Vector2D) -> Evaluation2D;
}

impl<F> CombinedFunction2D for F
where
    F: FnMut(&Vector2D) -> Evaluation2D,
{
    fn evaluate(&mut self, input: &Vector2D) -> Evaluation2D {
        self(input)
    }
}

/// Must be side-effect free and cheap, evaluated at every start point and every step
pub trait Constraint2D {
    fn evaluate(&self, input: &Vector2D) -> bool;
}

impl<F> Constraint2D for F
where
    F: Fn(&Vector2D) -> bool,
{
    fn evaluate(&self, input: &Vector2D) -> bool {
        self(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_function() {
        let f = |p: &Vector2D| 3.0 * p.x * p.x + 2.0 * p.y * p.y - 35.0;
        assert_eq!(Function2D::evaluate(&f, &Vector2D::new(3.0, 2.0)), 0.0);
        assert_eq!(Function2D::evaluate(&f, &Vector2D::new(-3.0, -2.0)), 0.0);
        assert_eq!(Function2D::evaluate(&f, &Vector2D::new(0.0, 0.0)), -35.0);
    }

    #[test]
    fn test_pure_function_is_repeatable() {
        let f = |p: &Vector2D| (p.x.sin() * p.y.exp()).ln_1p() / (1.0 + p.x * p.y);
        for &(x, y) in &[(0.3, 0.7), (1.1, -0.4), (2.5, 0.01)] {
            let p = Vector2D::new(x, y);
            let first = Function2D::evaluate(&f, &p);
            let second = Function2D::evaluate(&f, &p);
            assert_eq!(first.to_bits(), second.to_bits());
        }
    }

    #[test]
    fn test_combined_closure_with_state() {
        let mut calls = 0usize;
        let mut master = |p: &Vector2D| {
            calls += 1;
            Evaluation2D::new(
                Vector2D::new(p.x * p.x - 4.0, p.y - 1.0),
                SquareMatrix2D::new(2.0 * p.x, 0.0, 0.0, 1.0),
            )
        };
        let first = CombinedFunction2D::evaluate(&mut master, &Vector2D::new(1.0, 1.0));
        let second = CombinedFunction2D::evaluate(&mut master, &Vector2D::new(2.0, 3.0));
        // earlier results stay valid after later calls
        assert_eq!(first.objective, Vector2D::new(-3.0, 0.0));
        assert_eq!(second.objective, Vector2D::new(0.0, 2.0));
        assert_eq!(second.derivatives.x1, 4.0);
        drop(master);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_closure_constraint() {
        let c = |p: &Vector2D| p.x + p.y > -1.0;
        assert!(Constraint2D::evaluate(&c, &Vector2D::new(0.0, 0.0)));
        assert!(!Constraint2D::evaluate(&c, &Vector2D::new(-1.0, -0.5)));
    }
}
