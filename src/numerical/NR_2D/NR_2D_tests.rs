/////////////////////////////TESTS////////////////////////////////////////////////////
/*
whole-solver scenarios:
polynomial system 3x^2+2y^2-35 = 0, 4x^2-3y^2-24 = 0 with the roots (±3, ±2)
random restarts reach every root
constraint selects one root
every way of giving the jacobian finds the same roots
budgets: attempts >= 1, total iterations never above iterations_total
residual at the returned point is below accuracy and shrinks along the way
*/

#[cfg(test)]
mod tests {
    use crate::numerical::NR_2D::{
        Derivation2D, Evaluation2D, NR2DConfig, NewtonRaphson2D,
        NewtonRaphsonError, SquareMatrix2D, System2D, Vector2D,
    };
    use approx::assert_relative_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    const ROOTS: [(f64, f64); 4] = [(3.0, 2.0), (3.0, -2.0), (-3.0, 2.0), (-3.0, -2.0)];

    fn f(p: &Vector2D) -> f64 {
        3.0 * p.x * p.x + 2.0 * p.y * p.y - 35.0
    }

    fn g(p: &Vector2D) -> f64 {
        4.0 * p.x * p.x - 3.0 * p.y * p.y - 24.0
    }

    fn polynomial_evaluation(p: &Vector2D) -> Evaluation2D {
        Evaluation2D::new(
            Vector2D::new(f(p), g(p)),
            SquareMatrix2D::new(6.0 * p.x, 4.0 * p.y, 8.0 * p.x, -6.0 * p.y),
        )
    }

    fn polynomial_analytic() -> System2D {
        System2D::from_objectives_and_derivatives(
            f,
            g,
            |p: &Vector2D| 6.0 * p.x,
            |p: &Vector2D| 4.0 * p.y,
            |p: &Vector2D| 8.0 * p.x,
            |p: &Vector2D| -6.0 * p.y,
        )
    }

    /// index of the root `solution` is close to, panics if none
    fn which_root(solution: &Vector2D) -> usize {
        ROOTS
            .iter()
            .position(|(x, y)| (solution.x - x).abs() < 1e-4 && (solution.y - y).abs() < 1e-4)
            .unwrap_or_else(|| panic!("{} is not a root", solution))
    }

    fn assert_residual_below(solution: &Vector2D, accuracy: f64) {
        let residual = Vector2D::new(f(solution), g(solution)).norm();
        assert!(residual < accuracy, "residual {} at {}", residual, solution);
    }

    #[test]
    fn test_random_restarts_reach_all_roots() {
        let mut found = [0usize; 4];
        for seed in 0..200 {
            let mut solver = NewtonRaphson2D::new(System2D::from_objectives(f, g))
                .configure(1e-6, 1000, 100000)
                .unwrap()
                .seed(seed);
            let solution = solver.solve().unwrap();
            assert_residual_below(&solution, 1e-6);
            found[which_root(&solution)] += 1;

            let measures = solver.get_measures().unwrap();
            assert!(measures.attempts >= 1);
            assert!(measures.total_iterations <= 100000);
            assert!(measures.residual.unwrap() < 1e-6);
        }
        assert!(found.iter().all(|&n| n > 0), "roots found {:?}", found);
        assert_eq!(found.iter().sum::<usize>(), 200);
    }

    #[test]
    fn test_constraint_selects_third_quadrant_root() {
        for seed in 0..50 {
            let system = System2D::from_objectives(f, g)
                .with_constraint(|p: &Vector2D| p.x < 0.0)
                .with_constraint(|p: &Vector2D| p.y < 0.0);
            let mut solver = NewtonRaphson2D::new(system).seed(seed);
            let solution = solver.solve().unwrap();
            assert_relative_eq!(solution.x, -3.0, epsilon = 1e-6);
            assert_relative_eq!(solution.y, -2.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_every_system_shape_agrees() {
        let derivation = Derivation2D::new(1e-4).unwrap();
        let shapes: Vec<(&str, System2D)> = vec![
            ("numerical", System2D::from_objectives(f, g)),
            (
                "numerical, eps = 1e-4",
                System2D::from_objectives_with_derivation(f, g, derivation),
            ),
            ("analytic", polynomial_analytic()),
            ("combined", System2D::from_combined(polynomial_evaluation)),
        ];
        for (name, system) in shapes {
            // same seed -> same start -> same quadrant -> same root
            let mut solver = NewtonRaphson2D::new(system).seed(2024);
            let solution = solver.solve().unwrap();
            let reference = NewtonRaphson2D::new(polynomial_analytic())
                .seed(2024)
                .solve()
                .unwrap();
            assert_eq!(which_root(&solution), which_root(&reference), "{}", name);
            assert_residual_below(&solution, 1e-6);
        }
    }

    #[test]
    fn test_tiny_budget_is_no_solution() {
        let mut solver = NewtonRaphson2D::new(System2D::from_objectives(f, g))
            .configure(1e-6, 1, 1)
            .unwrap()
            .seed(0);
        assert_eq!(
            solver.solve(),
            Err(NewtonRaphsonError::NoSolutionFound {
                attempts: 1,
                total_iterations: 1
            })
        );
        let measures = solver.get_measures().unwrap();
        assert_eq!(measures.failures.exhausted, 1);
        assert!(measures.residual.is_none());
    }

    #[test]
    fn test_budget_is_never_exceeded_without_roots() {
        // x^2 + y^2 + 1 = 0 has no real solution
        let system = System2D::from_objectives(
            |p: &Vector2D| p.x * p.x + p.y * p.y + 1.0,
            |p: &Vector2D| p.x - p.y,
        );
        let mut solver = NewtonRaphson2D::new(system)
            .configure(1e-8, 20, 500)
            .unwrap()
            .seed(17);
        match solver.solve() {
            Err(NewtonRaphsonError::NoSolutionFound {
                attempts,
                total_iterations,
            }) => {
                assert!(attempts >= 1);
                assert!(total_iterations <= 500);
            }
            other => panic!("unexpected {:?}", other),
        }
        let measures = solver.get_measures().unwrap();
        assert_eq!(measures.failures.total(), measures.attempts);
        assert!(measures.total_iterations <= 500);
    }

    #[test]
    fn test_residual_shrinks_towards_zero() {
        let residuals = Rc::new(RefCell::new(Vec::new()));
        let recorded = Rc::clone(&residuals);
        let system = System2D::from_combined(move |p: &Vector2D| {
            let evaluation = polynomial_evaluation(p);
            recorded.borrow_mut().push(evaluation.objective.norm());
            evaluation
        });
        let mut solver = NewtonRaphson2D::new(system).seed(99);
        let solution = solver.solve().unwrap();
        assert_residual_below(&solution, 1e-6);

        let measures = solver.get_measures().unwrap();
        assert_eq!(measures.attempts, 1);
        let residuals = residuals.borrow();
        // one evaluation per step plus the final check
        assert_eq!(residuals.len(), measures.iterations + 1);
        // past the first step x^2 and y^2 approach 9 and 4 from above
        for pair in residuals[1..].windows(2) {
            assert!(pair[1] < pair[0], "{:?}", residuals);
        }
        assert!(*residuals.last().unwrap() < 1e-6);
    }

    #[test]
    fn test_measures_are_fresh_per_solve() {
        let mut solver = NewtonRaphson2D::new(polynomial_analytic()).seed(8);
        solver.solve().unwrap();
        let first = solver.get_measures().unwrap().clone();
        solver.solve().unwrap();
        let second = solver.get_measures().unwrap();
        assert_eq!(second.attempts, 1);
        assert!(second.total_iterations <= 100000);
        assert_eq!(first.attempts, 1);
        assert_eq!(second.failures.total(), 0);
    }

    #[test]
    fn test_singular_start_is_retried() {
        // the first evaluation reports a singular jacobian, the restart has to succeed
        let calls = Rc::new(RefCell::new(0usize));
        let counter = Rc::clone(&calls);
        let system = System2D::from_combined(move |p: &Vector2D| {
            *counter.borrow_mut() += 1;
            let mut evaluation = polynomial_evaluation(p);
            if *counter.borrow() == 1 {
                evaluation.derivatives = SquareMatrix2D::new(1.0, 2.0, 2.0, 4.0);
            }
            evaluation
        });
        let mut solver = NewtonRaphson2D::new(system).seed(4);
        let solution = solver.solve().unwrap();
        which_root(&solution);
        let measures = solver.get_measures().unwrap();
        assert_eq!(measures.attempts, 2);
        assert_eq!(measures.failures.singular, 1);
        assert_eq!(measures.failures.total(), 1);
        // failed attempt before its first step still costs one iteration
        assert!(measures.total_iterations > measures.iterations);
    }

    #[test]
    fn test_config_drives_solver() {
        let config = NR2DConfig {
            accuracy: 1e-10,
            lower: Vector2D::new(0.5, 0.5),
            upper: Vector2D::new(5.0, 5.0),
            seed: Some(31),
            ..NR2DConfig::default()
        };
        let system = System2D::from_combined(polynomial_evaluation);
        let mut solver = NewtonRaphson2D::with_config(system, config).unwrap();
        let solution = solver.solve().unwrap();
        // first quadrant box -> (3, 2)
        assert_eq!(which_root(&solution), 0);
        assert!(solver.get_measures().unwrap().residual.unwrap() < 1e-10);
        assert_eq!(solver.get_measures().unwrap().failures.total(), 0);
    }
}
