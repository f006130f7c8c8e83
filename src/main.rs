#![allow(non_snake_case)]
use RustedNewton2D::Examples::nr_2d_examples::nr_2d_examples;

fn main() {
    // 0 - polynomial roots, 1 - constrained polynomial, 2..6 - summation system
    let example = 0;
    nr_2d_examples(example);
}
