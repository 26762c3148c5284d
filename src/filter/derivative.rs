use super::{Filter, FilterDesign};

/// Backward difference, `(x[n] - x[n-1]) / dt`, with `x[-1] = 0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Derivative;

/// Running sum of `x * dt`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Integral;

#[derive(Clone, Debug)]
pub struct Differentiator<A> {
    rate: A,
    previous: A,
}

#[derive(Clone, Debug)]
pub struct Integrator<A> {
    dt: A,
    sum: A,
}

fn from_rate<A: num::Float>(rate: f32) -> A {
    // f32 always fits a Float
    A::from(rate).unwrap_or_else(A::one)
}

impl<A> Filter<A> for Differentiator<A> where A: num::Float {
    type Output = A;
    fn apply(&mut self, value: A) -> Self::Output {
        let derivative = (value - self.previous) * self.rate;
        self.previous = value;
        derivative
    }
}

impl<A> FilterDesign<A> for Derivative where A: num::Float {
    type Output = A;
    type Filter = Differentiator<A>;
    fn design(self, rate: f32) -> Self::Filter {
        Differentiator {
            rate: from_rate(rate),
            previous: A::zero(),
        }
    }
}

impl<A> Filter<A> for Integrator<A> where A: num::Float {
    type Output = A;
    fn apply(&mut self, value: A) -> Self::Output {
        self.sum = self.sum + value * self.dt;
        self.sum
    }
}

impl<A> FilterDesign<A> for Integral where A: num::Float {
    type Output = A;
    type Filter = Integrator<A>;
    fn design(self, rate: f32) -> Self::Filter {
        Integrator {
            dt: from_rate::<A>(rate).recip(),
            sum: A::zero(),
        }
    }
}
