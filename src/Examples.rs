//! examples of usage of RustedNewton2D
/// Newton-Raphson 2D examples: polynomial roots, summation system with closed and iterative forms
pub mod nr_2d_examples;
