//! Specifies logic to flatten a solution into fixed-layout step records.

mod fixed_text;
pub use self::fixed_text::FixedText;

mod step_tag;
pub use self::step_tag::StepTag;

mod writer;
pub use self::writer::*;
