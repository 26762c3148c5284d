use super::{Filter, FilterDesign};

/// First-order recursive filter, `y[n] = a * x[n] + b * y[n-1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Iir1<A> {
    // coefficients
    a: A,
    b: A,

    // state
    y1: A,
}

impl<A> Iir1<A> where A: num::Float {
    pub fn new(a: A, b: A) -> Self {
        Iir1 {
            a,
            b,
            y1: A::zero(),
        }
    }
}

impl<A> Filter<A> for Iir1<A> where A: num::Float {
    type Output = A;
    fn apply(&mut self, value: A) -> Self::Output {
        let out = self.a * value + self.b * self.y1;
        self.y1 = out;
        out
    }
}

impl<A> FilterDesign<A> for Iir1<A> where A: num::Float {
    type Output = A;
    type Filter = Iir1<A>;
    fn design(self, _rate: f32) -> Self::Filter {
        Iir1 {
            y1: A::zero(),
            .. self
        }
    }
}
