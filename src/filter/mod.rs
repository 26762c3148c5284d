use crate::Signal;

// stateless filters are their own design: the rate is irrelevant
macro_rules! stateless_design {
    ($name:ident) => {
        impl<A> crate::filter::FilterDesign<A> for $name<A> where A: num::Float {
            type Output = A;
            type Filter = $name<A>;
            fn design(self, _rate: f32) -> Self::Filter {
                self
            }
        }
    };
}

mod simple;
pub use simple::*;

mod friction;
pub use friction::*;

mod delay;
pub use delay::*;

mod derivative;
pub use derivative::*;

mod iir;
pub use iir::*;

// by rights, this should just be FnMut(A) -> A
// but... fn_traits is not yet stable (??!)
pub trait Filter<A> {
    type Output;
    fn apply(&mut self, value: A) -> Self::Output;
}

pub trait FilterDesign<A>: Sized {
    type Output;
    type Filter: Filter<A, Output=Self::Output>;
    fn design(self, rate: f32) -> Self::Filter;

    fn design_for<S>(self, signal: &S) -> Self::Filter
    where
        S: Signal<Sample=A>
    {
        self.design(signal.rate())
    }
}
