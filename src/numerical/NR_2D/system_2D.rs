//! Description of the system F(x,y) = 0, G(x,y) = 0 handed to the solver.
//!
//! Whatever way the system is given, it is normalized at construction into one
//! [`CombinedFunction2D`] "point -> (objective vector, jacobian)":
//!
//! | constructor                              | jacobian source                      |
//! |------------------------------------------|--------------------------------------|
//! | `from_objectives`                        | central differences, eps = 1e-6      |
//! | `from_objectives_with_derivation`        | central differences, caller's eps    |
//! | `from_objectives_and_derivatives`        | the four analytic partials           |
//! | `from_combined`                          | the master function itself           |
//!
//! Constraints are optional for every shape, no constraint means every point is admissible.
use super::derivation_2D::Derivation2D;
use super::functions_2D::{CombinedFunction2D, Constraint2D, Evaluation2D, Function2D};
use super::linalg_2D::{SquareMatrix2D, Vector2D};
use std::rc::Rc;

/// objectives with their four partial derivatives, d_ij = d(objective i)/d(variable j)
pub struct ObjectiveSystem2D {
    object1: Rc<dyn Function2D>,
    object2: Rc<dyn Function2D>,
    derivative11: Box<dyn Function2D>,
    derivative12: Box<dyn Function2D>,
    derivative21: Box<dyn Function2D>,
    derivative22: Box<dyn Function2D>,
}

impl ObjectiveSystem2D {
    /// jacobian estimated numerically, every objective is shared (`Rc`) with its two derivatives
    pub fn numerical(
        object1: Rc<dyn Function2D>,
        object2: Rc<dyn Function2D>,
        derivation: Derivation2D,
    ) -> ObjectiveSystem2D {
        let shared = |f: &Rc<dyn Function2D>| {
            let f = Rc::clone(f);
            move |p: &Vector2D| f.evaluate(p)
        };
        ObjectiveSystem2D {
            derivative11: Box::new(derivation.derive1(shared(&object1))),
            derivative12: Box::new(derivation.derive2(shared(&object1))),
            derivative21: Box::new(derivation.derive1(shared(&object2))),
            derivative22: Box::new(derivation.derive2(shared(&object2))),
            object1,
            object2,
        }
    }

    pub fn analytic(
        object1: Rc<dyn Function2D>,
        object2: Rc<dyn Function2D>,
        derivative11: Box<dyn Function2D>,
        derivative12: Box<dyn Function2D>,
        derivative21: Box<dyn Function2D>,
        derivative22: Box<dyn Function2D>,
    ) -> ObjectiveSystem2D {
        ObjectiveSystem2D {
            object1,
            object2,
            derivative11,
            derivative12,
            derivative21,
            derivative22,
        }
    }
}

impl CombinedFunction2D for ObjectiveSystem2D {
    fn evaluate(&mut self, input: &Vector2D) -> Evaluation2D {
        let objective = Vector2D::new(self.object1.evaluate(input), self.object2.evaluate(input));
        let derivatives = SquareMatrix2D::new(
            self.derivative11.evaluate(input),
            self.derivative12.evaluate(input),
            self.derivative21.evaluate(input),
            self.derivative22.evaluate(input),
        );
        Evaluation2D::new(objective, derivatives)
    }
}

pub struct System2D {
    function: Box<dyn CombinedFunction2D>,
    constraints: Vec<Box<dyn Constraint2D>>,
}

impl System2D {
    /// two objectives, jacobian by central differences with the default step
    pub fn from_objectives<F1, F2>(object1: F1, object2: F2) -> System2D
    where
        F1: Function2D + 'static,
        F2: Function2D + 'static,
    {
        Self::from_objectives_with_derivation(object1, object2, Derivation2D::default())
    }

    pub fn from_objectives_with_derivation<F1, F2>(
        object1: F1,
        object2: F2,
        derivation: Derivation2D,
    ) -> System2D
    where
        F1: Function2D + 'static,
        F2: Function2D + 'static,
    {
        let system = ObjectiveSystem2D::numerical(Rc::new(object1), Rc::new(object2), derivation);
        Self::from_combined(system)
    }

    /// two objectives and their partials: d11 = dF/dx, d12 = dF/dy, d21 = dG/dx, d22 = dG/dy
    pub fn from_objectives_and_derivatives<F1, F2, D11, D12, D21, D22>(
        object1: F1,
        object2: F2,
        derivative11: D11,
        derivative12: D12,
        derivative21: D21,
        derivative22: D22,
    ) -> System2D
    where
        F1: Function2D + 'static,
        F2: Function2D + 'static,
        D11: Function2D + 'static,
        D12: Function2D + 'static,
        D21: Function2D + 'static,
        D22: Function2D + 'static,
    {
        let system = ObjectiveSystem2D::analytic(
            Rc::new(object1),
            Rc::new(object2),
            Box::new(derivative11),
            Box::new(derivative12),
            Box::new(derivative21),
            Box::new(derivative22),
        );
        Self::from_combined(system)
    }

    /// "master function" returning objective values and jacobian in one call
    pub fn from_combined<C>(function: C) -> System2D
    where
        C: CombinedFunction2D + 'static,
    {
        System2D {
            function: Box::new(function),
            constraints: Vec::new(),
        }
    }

    pub fn with_constraint<C>(mut self, constraint: C) -> System2D
    where
        C: Constraint2D + 'static,
    {
        self.constraints.push(Box::new(constraint));
        self
    }

    pub fn number_of_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn evaluate(&mut self, input: &Vector2D) -> Evaluation2D {
        self.function.evaluate(input)
    }

    /// true if every constraint accepts the point
    pub fn is_admissible(&self, input: &Vector2D) -> bool {
        self.constraints.iter().all(|c| c.evaluate(input))
    }
}
