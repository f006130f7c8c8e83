//! Newton-Raphson solver for systems of two nonlinear equations in two unknowns
//! F(x, y) = 0, G(x, y) = 0 with optional admissible-domain constraints and
//! random restarts.
//!
//! Example#1: numerical derivatives
//! ```
//! use RustedNewton2D::numerical::NR_2D::{NewtonRaphson2D, System2D, Vector2D};
//! let system = System2D::from_objectives(
//!     |p: &Vector2D| 3.0 * p.x * p.x + 2.0 * p.y * p.y - 35.0,
//!     |p: &Vector2D| 4.0 * p.x * p.x - 3.0 * p.y * p.y - 24.0,
//! );
//! let mut solver = NewtonRaphson2D::new(system)
//!     .configure(1e-6, 1000, 100000)
//!     .unwrap()
//!     .seed(42);
//! let root = solver.solve().unwrap();
//! // one of (3, 2), (3, -2), (-3, 2), (-3, -2)
//! assert!((root.x.abs() - 3.0).abs() < 1e-4);
//! assert!((root.y.abs() - 2.0).abs() < 1e-4);
//! println!("{}", solver.get_measures().unwrap());
//! ```
//! Example#2: analytic jacobian and a constraint picking the root in the third quadrant
//! ```
//! use RustedNewton2D::numerical::NR_2D::{NewtonRaphson2D, System2D, Vector2D};
//! let system = System2D::from_objectives_and_derivatives(
//!     |p: &Vector2D| 3.0 * p.x * p.x + 2.0 * p.y * p.y - 35.0,
//!     |p: &Vector2D| 4.0 * p.x * p.x - 3.0 * p.y * p.y - 24.0,
//!     |p: &Vector2D| 6.0 * p.x,
//!     |p: &Vector2D| 4.0 * p.y,
//!     |p: &Vector2D| 8.0 * p.x,
//!     |p: &Vector2D| -6.0 * p.y,
//! )
//! .with_constraint(|p: &Vector2D| p.x < 0.0 && p.y < 0.0);
//! let mut solver = NewtonRaphson2D::new(system).seed(1);
//! let root = solver.solve().unwrap();
//! assert!((root.x + 3.0).abs() < 1e-4 && (root.y + 2.0).abs() < 1e-4);
//! ```
/// plain 2-vector and 2x2 matrix with Cramer's rule
pub mod linalg_2D;
/// traits for objectives, derivatives, combined evaluations and constraints
pub mod functions_2D;
/// central finite differences
pub mod derivation_2D;
/// equation system: objectives + jacobian + constraints
pub mod system_2D;
pub mod config;
pub mod errors;
/// statistics of a solve call
pub mod measures;
/// main loop
pub mod solver_2D;
/// check objectives and derivatives against reference implementations
pub mod validation;

mod NR_2D_tests;

pub use config::NR2DConfig;
pub use derivation_2D::{DEFAULT_EPSILON, Derivation2D, PartialDerivative2D, Variable2D};
pub use errors::NewtonRaphsonError;
pub use functions_2D::{CombinedFunction2D, Constraint2D, Evaluation2D, Function2D};
pub use linalg_2D::{SquareMatrix2D, Vector2D};
pub use measures::{AttemptFailure, FailureCounts, Measures};
pub use solver_2D::NewtonRaphson2D;
pub use system_2D::{ObjectiveSystem2D, System2D};
pub use validation::Function2DUtil;
