#[cfg(test)]
#[path = "../../../tests/unit/format/records/step_tag_test.rs"]
mod step_tag_test;

use crate::models::{JobType, StepKind};
use std::str::FromStr;

/// A textual step category used by fixed-layout records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepTag {
    /// A vehicle start.
    Start,
    /// A vehicle end.
    End,
    /// A vehicle break.
    Break,
    /// A single job visit.
    Job,
    /// A delivery visit.
    Delivery,
    /// A pickup visit.
    Pickup,
}

impl StepTag {
    /// All categories in their canonical order.
    pub const ALL: [StepTag; 6] =
        [StepTag::Start, StepTag::End, StepTag::Break, StepTag::Job, StepTag::Delivery, StepTag::Pickup];

    /// Derives a tag from the step kind: start, end and break come first, job visits are refined by
    /// their visit kind.
    pub fn from_kind(kind: &StepKind) -> Self {
        match kind {
            StepKind::Start => StepTag::Start,
            StepKind::End => StepTag::End,
            StepKind::Break => StepTag::Break,
            StepKind::Job(JobType::Single) => StepTag::Job,
            StepKind::Job(JobType::Pickup) => StepTag::Pickup,
            StepKind::Job(JobType::Delivery) => StepTag::Delivery,
        }
    }

    /// Returns tag text.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepTag::Start => "start",
            StepTag::End => "end",
            StepTag::Break => "break",
            StepTag::Job => "job",
            StepTag::Delivery => "delivery",
            StepTag::Pickup => "pickup",
        }
    }
}

impl FromStr for StepTag {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        StepTag::ALL
            .iter()
            .find(|tag| tag.as_str() == value)
            .copied()
            .ok_or_else(|| format!("unknown step tag: '{value}'"))
    }
}

impl std::fmt::Display for StepTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
