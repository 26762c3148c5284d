use super::Filter;

/// Proportional block: scales every sample by a fixed factor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gain<A> {
    factor: A,
}

impl<A> Gain<A> {
    pub fn new(factor: A) -> Self {
        Gain { factor }
    }
}

impl<A> Filter<A> for Gain<A> where A: num::Float {
    type Output = A;
    fn apply(&mut self, value: A) -> Self::Output {
        value * self.factor
    }
}

stateless_design!(Gain);

/// Limits every sample to `[min, max]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Clip<A> {
    min: A,
    max: A,
}

impl<A> Clip<A> where A: num::Float {
    /// Returns `None` when the range is empty (`min > max`) or either
    /// bound is NaN.
    pub fn new(min: A, max: A) -> Option<Self> {
        if min <= max {
            Some(Clip { min, max })
        } else {
            None
        }
    }
}

impl<A> Filter<A> for Clip<A> where A: num::Float {
    type Output = A;
    fn apply(&mut self, value: A) -> Self::Output {
        self.min.max(self.max.min(value))
    }
}

stateless_design!(Clip);
