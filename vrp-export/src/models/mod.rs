//! A collection of models to represent a computed solution of a Vehicle Routing Problem.
//!
//! The models are passive values: they are filled by the optimization engine once and only read by
//! exporters afterwards.

mod common;
pub use self::common::*;

mod solution;
pub use self::solution::*;
