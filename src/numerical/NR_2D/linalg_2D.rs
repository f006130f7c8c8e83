//! Value types of the 2D Newton-Raphson solver: a point/residual vector and a 2x2 Jacobian.
//!
//! Both are plain `Copy` aggregates, every evaluation hands out fresh values so nothing
//! returned by a function is ever invalidated by the next call.
use nalgebra::{Matrix2, Vector2};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// point (x, y) or vector of objective values (F(x,y), G(x,y))
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Vector2D {
        Vector2D { x, y }
    }
    /// Euclidean norm sqrt(x^2 + y^2)
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }
    /// false if any component is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
    pub fn distance(&self, other: &Vector2D) -> f64 {
        (*self - *other).norm()
    }
}

impl Add for Vector2D {
    type Output = Vector2D;
    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;
    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;
    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;
    fn mul(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl From<Vector2<f64>> for Vector2D {
    fn from(v: Vector2<f64>) -> Self {
        Vector2D::new(v[0], v[1])
    }
}

impl From<Vector2D> for Vector2<f64> {
    fn from(v: Vector2D) -> Self {
        Vector2::new(v.x, v.y)
    }
}

/// Jacobian of the system  F(x,y) = 0, G(x,y) = 0
///
/// ```text
/// | x1  x2 |   | dF/dx  dF/dy |
/// | y1  y2 | = | dG/dx  dG/dy |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SquareMatrix2D {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
}

impl SquareMatrix2D {
    pub fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> SquareMatrix2D {
        SquareMatrix2D { x1, x2, y1, y2 }
    }

    pub fn determinant(&self) -> f64 {
        self.x1 * self.y2 - self.x2 * self.y1
    }

    pub fn is_finite(&self) -> bool {
        self.x1.is_finite() && self.x2.is_finite() && self.y1.is_finite() && self.y2.is_finite()
    }

    /// Singular when the determinant vanishes relative to the size of its two products,
    /// i.e. the cancellation x1*y2 - x2*y1 leaves nothing but rounding noise.
    pub fn is_singular(&self) -> bool {
        let det = self.determinant();
        let scale = (self.x1 * self.y2).abs().max((self.x2 * self.y1).abs());
        !det.is_finite() || det.abs() <= f64::EPSILON * scale
    }

    /// Solve `self * v = rhs` by Cramer's rule; `None` for a (near-)singular matrix
    pub fn solve(&self, rhs: &Vector2D) -> Option<Vector2D> {
        if !self.is_finite() || self.is_singular() {
            return None;
        }
        let det = self.determinant();
        let x = (rhs.x * self.y2 - self.x2 * rhs.y) / det;
        let y = (self.x1 * rhs.y - rhs.x * self.y1) / det;
        let v = Vector2D::new(x, y);
        if v.is_finite() { Some(v) } else { None }
    }
}

impl Mul<Vector2D> for SquareMatrix2D {
    type Output = Vector2D;
    fn mul(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(
            self.x1 * rhs.x + self.x2 * rhs.y,
            self.y1 * rhs.x + self.y2 * rhs.y,
        )
    }
}

impl fmt::Display for SquareMatrix2D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[[{}, {}], [{}, {}]]", self.x1, self.x2, self.y1, self.y2)
    }
}

impl From<Matrix2<f64>> for SquareMatrix2D {
    fn from(m: Matrix2<f64>) -> Self {
        SquareMatrix2D::new(m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)])
    }
}

impl From<SquareMatrix2D> for Matrix2<f64> {
    fn from(m: SquareMatrix2D) -> Self {
        Matrix2::new(m.x1, m.x2, m.y1, m.y2)
    }
}
