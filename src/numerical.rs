/// Newton-Raphson solver for two equations in two unknowns with constraints and random restarts
///  Example#1
/// ```
/// use RustedNewton2D::numerical::NR_2D::{NewtonRaphson2D, System2D, Vector2D};
/// // x + y = 3, x - y = 1
/// let system = System2D::from_objectives(
///     |p: &Vector2D| p.x + p.y - 3.0,
///     |p: &Vector2D| p.x - p.y - 1.0,
/// );
/// let mut solver = NewtonRaphson2D::new(system).seed(0);
/// let solution = solver.solve().unwrap();
/// assert!((solution.x - 2.0).abs() < 1e-6 && (solution.y - 1.0).abs() < 1e-6);
/// ```
pub mod NR_2D;
