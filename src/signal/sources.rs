use super::Signal;

#[derive(Debug, Clone)]
pub struct FromIter<I> {
    iter: I,
    rate: f32,
}

impl<I> FromIter<I> {
    pub fn new(rate: f32, iter: I) -> Self {
        FromIter {
            iter,
            rate,
        }
    }
}

impl<I> Signal for FromIter<I> where I: Iterator {
    type Sample = I::Item;
    fn next(&mut self) -> Option<Self::Sample> {
        self.iter.next()
    }
    fn rate(&self) -> f32 {
        self.rate
    }
}

pub fn from_iter<I>(rate: f32, iter: I) -> FromIter<I>
where
    I: Iterator,
{
    FromIter::new(rate, iter)
}

pub fn constant<A>(rate: f32, value: A) -> impl Signal<Sample=A>
where
    A: Clone,
{
    from_iter(rate, std::iter::repeat(value))
}

pub fn zero<A>(rate: f32) -> impl Signal<Sample=A>
where
    A: num::Zero + Clone
{
    constant(rate, A::zero())
}
