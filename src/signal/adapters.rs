use super::Signal;
use crate::filter;

#[derive(Debug, Clone)]
pub struct Filter<S, F> {
    signal: S,
    filter: F,
}

impl<S, F> Filter<S, F>
where
    S: Signal,
    F: filter::Filter<S::Sample>,
{
    pub(super) fn new<D>(signal: S, fd: D) -> Self
    where
        D: filter::FilterDesign<S::Sample, Filter=F, Output=F::Output>,
    {
        Filter {
            filter: fd.design_for(&signal),
            signal,
        }
    }
}

impl<S, F> Signal for Filter<S, F>
where
    S: Signal,
    F: filter::Filter<S::Sample>,
{
    type Sample = F::Output;
    fn next(&mut self) -> Option<Self::Sample> {
        self.signal.next().map(|v| self.filter.apply(v))
    }
    fn rate(&self) -> f32 {
        self.signal.rate()
    }
}

#[derive(Debug, Clone)]
pub struct Iter<S> {
    signal: S,
}

impl<S> Iter<S> where S: Signal {
    pub(super) fn new(signal: S) -> Self {
        Iter { signal }
    }
}

impl<S> Iterator for Iter<S> where S: Signal {
    type Item = S::Sample;
    fn next(&mut self) -> Option<Self::Item> {
        self.signal.next()
    }
}

#[derive(Clone, Debug)]
pub struct Map<S, F> {
    signal: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub(super) fn new(signal: S, f: F) -> Self {
        Map { signal, f }
    }
}

impl<S, F, A> Signal for Map<S, F>
where
    F: FnMut(S::Sample) -> A,
    S: Signal,
{
    type Sample = A;
    fn next(&mut self) -> Option<Self::Sample> {
        self.signal.next().map(&mut self.f)
    }
    fn rate(&self) -> f32 {
        self.signal.rate()
    }
}

#[derive(Clone, Debug)]
pub struct Take<S> {
    signal: S,
    duration: usize,
}

impl<S> Take<S> where S: Signal {
    pub(super) fn new(signal: S, duration: f32) -> Self {
        Take {
            duration: (signal.rate() * duration).round() as usize,
            signal,
        }
    }
}

impl<S> Signal for Take<S> where S: Signal {
    type Sample = S::Sample;
    fn next(&mut self) -> Option<Self::Sample> {
        if self.duration > 0 {
            self.duration -= 1;
            self.signal.next()
        } else {
            None
        }
    }
    fn rate(&self) -> f32 {
        self.signal.rate()
    }
}
