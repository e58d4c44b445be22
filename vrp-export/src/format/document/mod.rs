//! Specifies logic to create a json document from a solution and write it.

mod model;
pub use self::model::*;

mod writer;
pub use self::writer::*;
