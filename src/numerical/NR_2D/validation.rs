//! Sampling checks that two functions agree, or that a function is the partial
//! derivative of another, along one axis of the plane.
//!
//! Useful to verify a closed-form objective against a slow reference implementation
//! or a hand-written derivative against central differences before handing them to
//! the solver.
use super::derivation_2D::Derivation2D;
use super::errors::NewtonRaphsonError;
use super::functions_2D::Function2D;
use super::linalg_2D::Vector2D;

#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Function2DUtil {
    derivation: Derivation2D,
}

impl Function2DUtil {
    /// `epsilon` is the step of the central differences used by `is_derivative_function*`
    pub fn new(epsilon: f64) -> Result<Function2DUtil, NewtonRaphsonError> {
        Ok(Self::with_derivation(Derivation2D::new(epsilon)?))
    }

    pub fn with_derivation(derivation: Derivation2D) -> Function2DUtil {
        Function2DUtil { derivation }
    }

    /// both values agree within `accuracy` relative to max(1, |a|, |b|);
    /// identical infinities agree, NaN never does
    pub fn agree(a: f64, b: f64, accuracy: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return false;
        }
        if a.is_infinite() || b.is_infinite() {
            return a == b;
        }
        (a - b).abs() <= accuracy * 1f64.max(a.abs()).max(b.abs())
    }

    /// sample points start, start + step, ... <= end along `axis`, the other coordinate fixed;
    /// None for an empty, non-finite or uncountable range
    fn samples(
        axis: Axis,
        start: f64,
        end: f64,
        step: f64,
        fixed: f64,
    ) -> Option<impl Iterator<Item = Vector2D>> {
        if !(step > 0.0) || !start.is_finite() || !end.is_finite() || start > end {
            return None;
        }
        let count = ((end - start) / step).floor();
        if !count.is_finite() || count >= usize::MAX as f64 {
            return None;
        }
        let n = count as usize;
        let points = (0..=n).map(move |i| {
            let t = start + i as f64 * step;
            match axis {
                Axis::X => Vector2D::new(t, fixed),
                Axis::Y => Vector2D::new(fixed, t),
            }
        });
        Some(points)
    }

    fn compare<F1, F2>(
        f1: &F1,
        f2: &F2,
        axis: Axis,
        range: (f64, f64, f64),
        fixed: f64,
        accuracy: f64,
    ) -> bool
    where
        F1: Function2D + ?Sized,
        F2: Function2D + ?Sized,
    {
        let (start, end, step) = range;
        match Self::samples(axis, start, end, step, fixed) {
            Some(mut points) => {
                points.all(|p| Self::agree(f1.evaluate(&p), f2.evaluate(&p), accuracy))
            }
            None => false,
        }
    }

    /// f1 == f2 at (x, y) for x in start..=end by step
    pub fn is_same_function1<F1, F2>(
        &self,
        f1: &F1,
        f2: &F2,
        start: f64,
        end: f64,
        step: f64,
        y: f64,
        accuracy: f64,
    ) -> bool
    where
        F1: Function2D + ?Sized,
        F2: Function2D + ?Sized,
    {
        Self::compare(f1, f2, Axis::X, (start, end, step), y, accuracy)
    }

    /// f1 == f2 at (x, y) for y in start..=end by step
    pub fn is_same_function2<F1, F2>(
        &self,
        f1: &F1,
        f2: &F2,
        start: f64,
        end: f64,
        step: f64,
        x: f64,
        accuracy: f64,
    ) -> bool
    where
        F1: Function2D + ?Sized,
        F2: Function2D + ?Sized,
    {
        Self::compare(f1, f2, Axis::Y, (start, end, step), x, accuracy)
    }

    /// derivative == df/dx along x in start..=end by step
    pub fn is_derivative_function1<F, D>(
        &self,
        function: &F,
        derivative: &D,
        start: f64,
        end: f64,
        step: f64,
        y: f64,
        accuracy: f64,
    ) -> bool
    where
        F: Function2D + ?Sized,
        D: Function2D + ?Sized,
    {
        let numerical = self.derivation.derive1(|p: &Vector2D| function.evaluate(p));
        Self::compare(&numerical, derivative, Axis::X, (start, end, step), y, accuracy)
    }

    /// derivative == df/dy along y in start..=end by step
    pub fn is_derivative_function2<F, D>(
        &self,
        function: &F,
        derivative: &D,
        start: f64,
        end: f64,
        step: f64,
        x: f64,
        accuracy: f64,
    ) -> bool
    where
        F: Function2D + ?Sized,
        D: Function2D + ?Sized,
    {
        let numerical = self.derivation.derive2(|p: &Vector2D| function.evaluate(p));
        Self::compare(&numerical, derivative, Axis::Y, (start, end, step), x, accuracy)
    }
}
