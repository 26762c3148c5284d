use crate::filter::FilterDesign;

mod sources;
pub use sources::*;

mod adapters;
pub use adapters::*;

pub trait Signal {
    type Sample;
    fn next(&mut self) -> Option<Self::Sample>;
    fn rate(&self) -> f32;

    fn filter<F>(self, filter: F) -> Filter<Self, F::Filter>
    where
        F: FilterDesign<Self::Sample>,
        Self: Sized,
    {
        Filter::new(self, filter)
    }

    fn iter(self) -> Iter<Self> where Self: Sized {
        Iter::new(self)
    }

    fn map<F, A>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Sample) -> A,
        Self: Sized,
    {
        Map::new(self, f)
    }

    fn take(self, duration: f32) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, duration)
    }
}
