//! Newton-Raphson for two equations in two unknowns with random restarts.
//!
//! One `solve()`:
//! ```text
//! ┌> draw start point uniformly in [lower, upper], redraw while a constraint rejects it
//! │   loop
//! │     (F, J) = system(point)
//! │     F non-finite                         -> attempt failed
//! │     |F| < accuracy                       -> return point
//! │     per-try or total budget spent        -> attempt failed
//! │     delta = J^-1 * (-F), J singular      -> attempt failed
//! │     point += delta, non-finite/violation -> attempt failed
//! └─ attempt failed: restart while total iterations < iterations_total, else NoSolutionFound
//! ```
//! Every attempt that fails costs at least one iteration, so the loop always ends.
use super::config::{
    NR2DConfig, check_accuracy, check_iterations_per_try, check_iterations_total,
    check_loglevel, check_search_range,
};
use super::errors::NewtonRaphsonError;
use super::linalg_2D::Vector2D;
use super::measures::{AttemptFailure, Measures};
use super::system_2D::System2D;
use crate::Utils::logger::init_logger;
use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

/// outcome of one random start
enum Attempt {
    Converged { solution: Vector2D, residual: f64 },
    Failed(AttemptFailure),
}

pub struct NewtonRaphson2D {
    system: System2D,
    config: NR2DConfig,
    rng: StdRng,
    measures: Option<Measures>,
}

impl NewtonRaphson2D {
    /// solver with default configuration, random starts seeded from OS entropy
    pub fn new(system: System2D) -> NewtonRaphson2D {
        NewtonRaphson2D {
            system,
            config: NR2DConfig::default(),
            rng: StdRng::from_os_rng(),
            measures: None,
        }
    }

    pub fn with_config(
        system: System2D,
        config: NR2DConfig,
    ) -> Result<NewtonRaphson2D, NewtonRaphsonError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(NewtonRaphson2D {
            system,
            config,
            rng,
            measures: None,
        })
    }
    ////////////////////////////SETTERS///////////////////////////////////////////////////////////////////
    /// set all three stopping parameters at once, invariants are checked here and not deferred
    pub fn configure(
        self,
        accuracy: f64,
        iterations_per_try: usize,
        iterations_total: usize,
    ) -> Result<Self, NewtonRaphsonError> {
        check_iterations_per_try(iterations_per_try)?;
        check_iterations_total(iterations_total, iterations_per_try)?;
        let mut solver = self.accuracy(accuracy)?;
        solver.config.iterations_per_try = iterations_per_try;
        solver.config.iterations_total = iterations_total;
        Ok(solver)
    }

    pub fn accuracy(mut self, accuracy: f64) -> Result<Self, NewtonRaphsonError> {
        self.config.accuracy = check_accuracy(accuracy)?;
        Ok(self)
    }

    /// iterations_total >= iterations_per_try is checked by `configure` and by `solve`
    pub fn iterations_per_try(mut self, iterations: usize) -> Result<Self, NewtonRaphsonError> {
        self.config.iterations_per_try = check_iterations_per_try(iterations)?;
        Ok(self)
    }

    /// iterations_total >= iterations_per_try is checked by `configure` and by `solve`
    pub fn iterations_total(mut self, iterations: usize) -> Result<Self, NewtonRaphsonError> {
        self.config.iterations_total = check_iterations_total(iterations, 1)?;
        Ok(self)
    }

    /// box the random start points are drawn from
    pub fn search_range(mut self, lower: Vector2D, upper: Vector2D) -> Result<Self, NewtonRaphsonError> {
        let (lower, upper) = check_search_range(lower, upper)?;
        self.config.lower = lower;
        self.config.upper = upper;
        Ok(self)
    }

    /// reseed the random starts, makes runs reproducible
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// inject a generator directly
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.config.seed = None;
        self.rng = rng;
        self
    }

    pub fn loglevel(mut self, loglevel: &str) -> Result<Self, NewtonRaphsonError> {
        self.config.loglevel = Some(check_loglevel(loglevel)?);
        Ok(self)
    }
    ////////////////////////////GETTERS///////////////////////////////////////////////////////////////////
    pub fn config(&self) -> &NR2DConfig {
        &self.config
    }

    /// measures of the last `solve()`, None before the first call
    pub fn get_measures(&self) -> Option<&Measures> {
        self.measures.as_ref()
    }
    /////////////////////////////////////////////////////////////////////////////////////////////
    //                ITERATIONS
    /////////////////////////////////////////////////////////////////////////////////////////////
    /// uniform sample of the search box, None once the sampling budget is spent
    fn random_start(&mut self, measures: &mut Measures) -> Option<Vector2D> {
        let (lower, upper) = (self.config.lower, self.config.upper);
        loop {
            let candidate = Vector2D::new(
                self.rng.random_range(lower.x..upper.x),
                self.rng.random_range(lower.y..upper.y),
            );
            if self.system.is_admissible(&candidate) {
                return Some(candidate);
            }
            measures.rejected_starts += 1;
            // rejected samples draw on their own budget of iterations_total
            if measures.rejected_starts >= self.config.iterations_total {
                warn!(
                    "{} start points rejected by constraints, giving up sampling",
                    measures.rejected_starts
                );
                return None;
            }
        }
    }

    /// Newton iterations from `start`; adds the spent iterations to `measures`
    fn attempt(&mut self, start: Vector2D, measures: &mut Measures) -> Attempt {
        let accuracy = self.config.accuracy;
        let per_try = self.config.iterations_per_try;
        let budget_left = self.config.iterations_total - measures.total_iterations;
        let mut point = start;
        let mut iterations = 0;

        let outcome = loop {
            let evaluation = self.system.evaluate(&point);
            let residual_vector = evaluation.objective;
            if !residual_vector.is_finite() {
                break Attempt::Failed(AttemptFailure::NonFinite);
            }
            let residual = residual_vector.norm();
            if residual < accuracy {
                break Attempt::Converged {
                    solution: point,
                    residual,
                };
            }
            // the point reached by the last allowed step has been checked above
            if iterations >= per_try || iterations >= budget_left {
                break Attempt::Failed(AttemptFailure::Exhausted);
            }
            iterations += 1;
            debug!("iteration = {}, point = {}, residual = {}", iterations, point, residual);

            let delta = match evaluation.derivatives.solve(&(-residual_vector)) {
                Some(delta) => delta,
                None => break Attempt::Failed(AttemptFailure::Singular),
            };
            let next = point + delta;
            if !next.is_finite() {
                break Attempt::Failed(AttemptFailure::NonFinite);
            }
            if !self.system.is_admissible(&next) {
                break Attempt::Failed(AttemptFailure::ConstraintViolated);
            }
            point = next;
        };

        measures.attempts += 1;
        measures.iterations = iterations;
        measures.total_iterations += iterations;
        // a failure before the first step still has to consume budget
        if let Attempt::Failed(failure) = outcome {
            if iterations == 0 {
                measures.iterations = 1;
                measures.total_iterations += 1;
            }
            measures.failures.record(failure);
            debug!(
                "attempt {} from {} failed: {:?} after {} iterations",
                measures.attempts, start, failure, measures.iterations
            );
        }
        outcome
    }

    fn run(&mut self) -> (Result<Vector2D, NewtonRaphsonError>, Measures) {
        let mut measures = Measures::default();
        let total = self.config.iterations_total;
        while measures.total_iterations < total {
            let start = match self.random_start(&mut measures) {
                Some(start) => start,
                None => {
                    // sampling gave up: counts as one failed attempt
                    measures.attempts += 1;
                    measures.failures.record(AttemptFailure::ConstraintViolated);
                    break;
                }
            };
            if let Attempt::Converged { solution, residual } = self.attempt(start, &mut measures) {
                measures.residual = Some(residual);
                return (Ok(solution), measures);
            }
        }
        let err = NewtonRaphsonError::NoSolutionFound {
            attempts: measures.attempts,
            total_iterations: measures.total_iterations,
        };
        (Err(err), measures)
    }
    ////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
    //                                       main function to start the solver
    ////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
    /// Root of the system or `NoSolutionFound` once `iterations_total` is spent.
    /// Configuration invariants are re-checked on every call.
    pub fn solve(&mut self) -> Result<Vector2D, NewtonRaphsonError> {
        self.config.validate()?;
        if let Some(level) = self.config.loglevel.clone() {
            init_logger(&level, false)?;
        }
        let begin = Instant::now();
        let (result, mut measures) = self.run();
        measures.elapsed = begin.elapsed();
        match &result {
            Ok(solution) => info!(
                "solution {} found after {} attempts, {} iterations in total",
                solution, measures.attempts, measures.total_iterations
            ),
            Err(e) => error!("{}", e),
        }
        self.measures = Some(measures);
        result
    }
}
