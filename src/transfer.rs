//! Named transfer functions for the `transfer` demo.
//!
//! A transfer function maps the current value and the step index to the
//! next value.

pub type TransferFunction = fn(f32, usize) -> f32;

/// How many times the demo applies its function.
pub const ITERATIONS: usize = 11;

pub fn identical(value: f32, _index: usize) -> f32 {
    value
}

const FUNCTIONS: &[(&str, TransferFunction)] = &[
    ("identical", identical),
];

pub fn names() -> Vec<&'static str> {
    FUNCTIONS.iter().map(|(name, _)| *name).collect()
}

pub fn lookup(name: &str) -> Option<TransferFunction> {
    FUNCTIONS.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
}

/// Feeds `input` through `f` for step indices `0..iterations`.
pub fn iterate<A, F>(mut f: F, input: A, iterations: usize) -> A
where
    F: FnMut(A, usize) -> A,
{
    (0..iterations).fold(input, |value, i| f(value, i))
}

/// The line the demo prints for its final value.
pub fn report(value: f32) -> String {
    format!("Output: {:.6}", value)
}
