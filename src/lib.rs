pub mod signal;
pub use signal::Signal;

pub mod filter;
pub use filter::{Filter, FilterDesign};

pub mod stdio;

pub mod cli;

pub mod transfer;
