use super::{Filter, FilterDesign};

use std::num::NonZeroUsize;

/// Fixed-length delay, measured in samples.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Delay(pub NonZeroUsize);

/// Circular buffer that hands back each sample `len()` pushes later.
#[derive(Clone, Debug)]
pub struct DelayLine<A> {
    buffer: Vec<A>,
    index: usize,
}

impl<A> DelayLine<A> where A: num::Zero + Clone {
    pub fn new(length: NonZeroUsize) -> Self {
        DelayLine {
            buffer: vec![A::zero(); length.get()],
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Stores `value` and returns the sample stored `len()` pushes ago,
    /// or zero while the line is still filling.
    pub fn push(&mut self, value: A) -> A {
        let output = std::mem::replace(&mut self.buffer[self.index], value);
        self.index = (self.index + 1) % self.buffer.len();
        output
    }

    pub fn clear(&mut self) {
        for v in self.buffer.iter_mut() {
            *v = A::zero();
        }
        self.index = 0;
    }
}

impl<A> Filter<A> for DelayLine<A> where A: num::Zero + Clone {
    type Output = A;
    fn apply(&mut self, value: A) -> Self::Output {
        self.push(value)
    }
}

impl<A> FilterDesign<A> for Delay where A: num::Zero + Clone {
    type Output = A;
    type Filter = DelayLine<A>;
    fn design(self, _rate: f32) -> Self::Filter {
        DelayLine::new(self.0)
    }
}
