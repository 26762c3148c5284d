//! Friction models applied to a signed velocity signal.
//!
//! All three are memoryless: the output depends only on the current sample
//! and the coefficients fixed at construction.

use super::Filter;

/// Static / kinetic (Coulomb) friction.
///
/// Velocities whose magnitude does not exceed the static threshold stick
/// to zero. Anything faster loses `kinetic` in magnitude, keeping its sign.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coulomb<A> {
    threshold: A,
    kinetic: A,
}

impl<A> Coulomb<A> {
    pub fn new(threshold: A, kinetic: A) -> Self {
        Coulomb { threshold, kinetic }
    }
}

impl<A> Filter<A> for Coulomb<A> where A: num::Float {
    type Output = A;
    fn apply(&mut self, value: A) -> Self::Output {
        if value > self.threshold {
            value - self.kinetic
        } else if value < -self.threshold {
            value + self.kinetic
        } else {
            A::zero()
        }
    }
}

stateless_design!(Coulomb);

/// Viscous friction, proportional to velocity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Linear<A> {
    coefficient: A,
}

impl<A> Linear<A> {
    pub fn new(coefficient: A) -> Self {
        Linear { coefficient }
    }
}

impl<A> Filter<A> for Linear<A> where A: num::Float {
    type Output = A;
    fn apply(&mut self, value: A) -> Self::Output {
        value * (A::one() - self.coefficient)
    }
}

stateless_design!(Linear);

/// Drag proportional to the square of velocity.
///
/// The drag term is `coefficient * v * |v|`, so it always opposes the
/// direction of motion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quadratic<A> {
    coefficient: A,
}

impl<A> Quadratic<A> {
    pub fn new(coefficient: A) -> Self {
        Quadratic { coefficient }
    }
}

impl<A> Filter<A> for Quadratic<A> where A: num::Float {
    type Output = A;
    fn apply(&mut self, value: A) -> Self::Output {
        // not v * v: that would speed up negative velocities
        value - self.coefficient * value * value.abs()
    }
}

stateless_design!(Quadratic);
