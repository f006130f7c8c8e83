#![allow(non_snake_case)]
use crate::Utils::logger::save_points_to_csv;
use crate::numerical::NR_2D::{
    Derivation2D, Evaluation2D, Function2D, Function2DUtil, NewtonRaphson2D, SquareMatrix2D,
    System2D, Vector2D,
};
use std::time::Instant;

/// terms of the summation system
pub const N: usize = 123456;
/// sum[b/(a+i), i=1..N] at a = 10000, b = 0.01
pub const C1: f64 = 0.025911404898870522;
/// sum[1/(a+b+i)^2, i=1..N] at a = 10000, b = 0.01
pub const C2: f64 = 9.25018224693155E-5;
/// agreement required between closed and iterative forms
const ACCURACY: f64 = 0.01;

////////////////////////////////////////////////////////////////////////////////////////
//         polygamma functions for the closed forms
////////////////////////////////////////////////////////////////////////////////////////
/// digamma via recurrence up to x >= 10 and the asymptotic series
pub fn digamma(mut x: f64) -> f64 {
    let mut acc = 0.0;
    while x < 10.0 {
        acc -= 1.0 / x;
        x += 1.0;
    }
    let inv = 1.0 / x;
    let inv2 = inv * inv;
    acc + x.ln()
        - 0.5 * inv
        - inv2 * (1.0 / 12.0 - inv2 * (1.0 / 120.0 - inv2 * (1.0 / 252.0 - inv2 * (1.0 / 240.0 - inv2 / 132.0))))
}

/// trigamma via recurrence up to x >= 10 and the asymptotic series
pub fn trigamma(mut x: f64) -> f64 {
    let mut acc = 0.0;
    while x < 10.0 {
        acc += 1.0 / (x * x);
        x += 1.0;
    }
    let inv = 1.0 / x;
    let inv2 = inv * inv;
    acc + inv
        + 0.5 * inv2
        + inv * inv2 * (1.0 / 6.0 - inv2 * (1.0 / 30.0 - inv2 * (1.0 / 42.0 - inv2 * (1.0 / 30.0 - inv2 * 5.0 / 66.0))))
}

////////////////////////////////////////////////////////////////////////////////////////
//         summation system:  F = sum[b/(a+i)] - C1, G = sum[1/(a+b+i)^2] - C2
////////////////////////////////////////////////////////////////////////////////////////
pub fn object1_iterative(p: &Vector2D) -> f64 {
    let (a, b) = (p.x, p.y);
    (1..=N).map(|i| b / (a + i as f64)).sum::<f64>() - C1
}

pub fn object2_iterative(p: &Vector2D) -> f64 {
    let ab = p.x + p.y;
    (1..=N)
        .map(|i| {
            let t = ab + i as f64;
            1.0 / (t * t)
        })
        .sum::<f64>()
        - C2
}

pub fn object1_closed(p: &Vector2D) -> f64 {
    let (a, b) = (p.x, p.y);
    b * (digamma(a + N as f64 + 1.0) - digamma(a + 1.0)) - C1
}

pub fn object2_closed(p: &Vector2D) -> f64 {
    let ab = p.x + p.y;
    trigamma(ab + 1.0) - trigamma(ab + N as f64 + 1.0) - C2
}

/// dF/da = -sum[b/(a+i)^2]
pub fn derivative11_closed(p: &Vector2D) -> f64 {
    let (a, b) = (p.x, p.y);
    b * (trigamma(a + N as f64 + 1.0) - trigamma(a + 1.0))
}

/// dF/db = sum[1/(a+i)]
pub fn derivative12_closed(p: &Vector2D) -> f64 {
    let a = p.x;
    digamma(a + N as f64 + 1.0) - digamma(a + 1.0)
}

/// dF/da = -sum[b/(a+i)^2], dF/db = sum[1/(a+i)], dG/da = dG/db = -2 sum[1/(a+b+i)^3]
pub fn iterative_derivatives() -> [fn(&Vector2D) -> f64; 4] {
    fn d11(p: &Vector2D) -> f64 {
        (1..=N).map(|i| -p.y / (p.x + i as f64).powi(2)).sum()
    }
    fn d12(p: &Vector2D) -> f64 {
        (1..=N).map(|i| 1.0 / (p.x + i as f64)).sum()
    }
    fn d2(p: &Vector2D) -> f64 {
        (1..=N).map(|i| -2.0 / (p.x + p.y + i as f64).powi(3)).sum()
    }
    [d11, d12, d2, d2]
}

/// "master function": objectives and jacobian in one pass, G derivatives by central differences
pub fn master_function() -> impl FnMut(&Vector2D) -> Evaluation2D {
    let derivation = Derivation2D::default();
    let derivative21 = derivation.derive1(object2_closed);
    let derivative22 = derivation.derive2(object2_closed);
    move |p: &Vector2D| {
        let (a, b) = (p.x, p.y);
        let val0 = digamma(a + N as f64 + 1.0) - digamma(a + 1.0);
        let val1 = trigamma(a + b + 1.0) - trigamma(a + b + N as f64 + 1.0);
        let val2 = b * (trigamma(a + N as f64 + 1.0) - trigamma(a + 1.0));
        Evaluation2D::new(
            Vector2D::new(b * val0 - C1, val1 - C2),
            SquareMatrix2D::new(
                val2,
                val0,
                derivative21.evaluate(p),
                derivative22.evaluate(p),
            ),
        )
    }
}

/// the summation objectives are only defined for a > -1 and a + b > -1
fn with_domain(system: System2D) -> System2D {
    system
        .with_constraint(|p: &Vector2D| p.x > -1.0)
        .with_constraint(|p: &Vector2D| p.x + p.y > -1.0)
}

/// repeated solves, mean time per solve, measures of the last one
fn solve_and_report(
    title: &str,
    solver: &mut NewtonRaphson2D,
    object1: &dyn Function2D,
    object2: &dyn Function2D,
    repetitions: usize,
) -> Option<Vector2D> {
    let begin = Instant::now();
    let mut result = None;
    for _ in 0..repetitions {
        result = solver.solve().ok();
    }
    let time = begin.elapsed().as_secs_f64() * 1e3 / repetitions as f64;
    println!("\n{}", title);
    println!("*******");
    println!("time per solve, ms: {:.3}", time);
    if let Some(measures) = solver.get_measures() {
        println!("{}", measures);
    }
    match &result {
        Some(solution) => {
            let residual = Vector2D::new(object1.evaluate(solution), object2.evaluate(solution));
            println!("result  : {}, residual = {:e}", solution, residual.norm());
        }
        None => println!("result  : no solution"),
    }
    result
}

fn summation_solver(system: System2D) -> NewtonRaphson2D {
    let solver = NewtonRaphson2D::new(system)
        .configure(1e-6, 1000, 100000)
        .and_then(|s| s.search_range(Vector2D::new(0.0, 0.0), Vector2D::new(20000.0, 1.0)));
    match solver {
        Ok(solver) => solver,
        Err(e) => panic!("invalid solver settings: {}", e),
    }
}

pub fn nr_2d_examples(example: usize) {
    match example {
        0 => {
            // 3x^2 + 2y^2 - 35 = 0, 4x^2 - 3y^2 - 24 = 0: roots (±3, ±2)
            // every random start lands in one quadrant and Newton stays there
            let mut roots: Vec<Vector2D> = Vec::new();
            for seed in 0..200 {
                let system = System2D::from_objectives(
                    |p: &Vector2D| 3.0 * p.x * p.x + 2.0 * p.y * p.y - 35.0,
                    |p: &Vector2D| 4.0 * p.x * p.x - 3.0 * p.y * p.y - 24.0,
                );
                let mut solver = NewtonRaphson2D::new(system).seed(seed);
                if let Ok(root) = solver.solve() {
                    if roots.iter().all(|r| r.distance(&root) > 1e-4) {
                        roots.push(root);
                    }
                }
            }
            println!("distinct roots: ");
            for root in &roots {
                println!("{}", root);
            }
            if let Err(e) = save_points_to_csv(&roots, "polynomial_roots.csv") {
                println!("failed to save roots: {}", e);
            }
        }
        1 => {
            // same system, constraint picks the root in the third quadrant
            let F = |p: &Vector2D| 3.0 * p.x * p.x + 2.0 * p.y * p.y - 35.0;
            let G = |p: &Vector2D| 4.0 * p.x * p.x - 3.0 * p.y * p.y - 24.0;
            let system = System2D::from_objectives_and_derivatives(
                F,
                G,
                |p: &Vector2D| 6.0 * p.x,
                |p: &Vector2D| 4.0 * p.y,
                |p: &Vector2D| 8.0 * p.x,
                |p: &Vector2D| -6.0 * p.y,
            )
            .with_constraint(|p: &Vector2D| p.x < 0.0 && p.y < 0.0);
            let mut solver = match NewtonRaphson2D::new(system).loglevel("info") {
                Ok(solver) => solver,
                Err(e) => panic!("{}", e),
            };
            solve_and_report("constrained polynomial", &mut solver, &F, &G, 100);
        }
        2 => {
            // iterative implementations, numerical derivatives
            let system = System2D::from_objectives(object1_iterative, object2_iterative);
            let mut solver = summation_solver(system);
            solve_and_report(
                "iterative, no derivatives",
                &mut solver,
                &object1_iterative,
                &object2_iterative,
                10,
            );
        }
        3 => {
            // iterative implementations, analytic derivatives and constraints
            let [d11, d12, d21, d22] = iterative_derivatives();
            let system = with_domain(System2D::from_objectives_and_derivatives(
                object1_iterative,
                object2_iterative,
                d11,
                d12,
                d21,
                d22,
            ));
            let mut solver = summation_solver(system);
            solve_and_report(
                "iterative, derivatives and constraints",
                &mut solver,
                &object1_iterative,
                &object2_iterative,
                10,
            );
        }
        4 => {
            // closed forms: check them against the sums first
            let util = Function2DUtil::default();
            let checks = [
                util.is_same_function1(&object1_closed, &object1_iterative, 0.0, 100.0, 0.1, 1.0, ACCURACY),
                util.is_same_function1(&object1_closed, &object1_iterative, 0.0, 1.0, 0.001, 1.0, ACCURACY),
                util.is_same_function2(&object1_closed, &object1_iterative, 0.0, 100.0, 0.1, 1.0, ACCURACY),
                util.is_same_function2(&object1_closed, &object1_iterative, 0.0, 100.0, 0.1, -1000.0, ACCURACY),
                util.is_same_function1(&object2_closed, &object2_iterative, 0.0, 100.0, 0.1, 1.0, ACCURACY),
                util.is_same_function2(&object2_closed, &object2_iterative, 0.0, 1.0, 0.001, 1.0, ACCURACY),
                util.is_same_function1(&object2_closed, &object2_iterative, 1e7, 1e7 + 100.0, 0.1, -1000.0, ACCURACY),
            ];
            println!("\nChecking object functions: {:?}", checks);

            let system = System2D::from_objectives(object1_closed, object2_closed);
            let mut solver = summation_solver(system);
            solve_and_report(
                "closed, no derivatives",
                &mut solver,
                &object1_closed,
                &object2_closed,
                1000,
            );
        }
        5 => {
            // closed forms, two analytic derivatives and two numerical ones
            let util = Function2DUtil::default();
            println!(
                "\nChecking derivatives: dF/da {}, dF/db {}",
                util.is_derivative_function1(&object1_closed, &derivative11_closed, 0.0, 100.0, 0.1, 1.0, ACCURACY),
                util.is_derivative_function2(&object1_closed, &derivative12_closed, 0.0, 100.0, 0.1, 1.0, ACCURACY)
            );
            let derivation = Derivation2D::default();
            let system = System2D::from_objectives_and_derivatives(
                object1_closed,
                object2_closed,
                derivative11_closed,
                derivative12_closed,
                derivation.derive1(object2_closed),
                derivation.derive2(object2_closed),
            );
            let mut solver = summation_solver(system);
            solve_and_report(
                "closed, two derivatives",
                &mut solver,
                &object1_closed,
                &object2_closed,
                1000,
            );
        }
        6 => {
            // master function
            let system = System2D::from_combined(master_function());
            let mut solver = summation_solver(system);
            solve_and_report(
                "master function",
                &mut solver,
                &object1_closed,
                &object2_closed,
                1000,
            );
        }
        _ => {
            println!("example not found");
        }
    }
}
