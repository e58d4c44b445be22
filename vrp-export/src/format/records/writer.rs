#[cfg(test)]
#[path = "../../../tests/unit/format/records/writer_test.rs"]
mod writer_test;

use super::{FixedText, StepTag};
use crate::format::{NA_SUBSTITUTE, NA_SUBSTITUTE_FLOAT};
use crate::models::{Id, Route, Solution, Step};

/// A step type text: up to 8 visible bytes and a terminator.
pub type TypeText = FixedText<9>;

/// A step description text: up to 39 visible bytes and a terminator.
pub type DescriptionText = FixedText<40>;

/// A fixed-layout record which describes one step of a route.
///
/// Fields which do not apply to the step are set to [`NA_SUBSTITUTE`] (or [`NA_SUBSTITUTE_FLOAT`]).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepRecord {
    /// Vehicle id.
    pub vehicle_id: i64,
    /// Step type tag.
    pub type_tag: TypeText,
    /// Arrival time.
    pub arrival: i64,
    /// Cumulated travel duration.
    pub duration: i64,
    /// Setup time.
    pub setup: i64,
    /// Service time.
    pub service: i64,
    /// Waiting time.
    pub waiting_time: i64,
    /// Cumulated distance.
    pub distance: i64,
    /// Index in routing matrix.
    pub location_index: i64,
    /// Longitude.
    pub longitude: f64,
    /// Latitude.
    pub latitude: f64,
    /// Job or break id.
    pub id: i64,
    /// Step description, possibly truncated.
    pub description: DescriptionText,
}

impl StepRecord {
    /// Creates a record for the step performed by given vehicle.
    pub fn new(vehicle: Id, step: &Step) -> Self {
        let coordinates = step.location.coordinates();

        Self {
            vehicle_id: i64::from(vehicle),
            type_tag: TypeText::new(StepTag::from_kind(&step.kind).as_str()),
            arrival: to_record_value(step.arrival),
            duration: to_record_value(step.duration),
            setup: to_record_value(step.setup),
            service: to_record_value(step.service),
            waiting_time: to_record_value(step.waiting_time),
            distance: to_record_value(step.distance),
            location_index: step.location.index().map_or(NA_SUBSTITUTE, i64::from),
            longitude: coordinates.map_or(NA_SUBSTITUTE_FLOAT, |coordinates| coordinates.lon),
            latitude: coordinates.map_or(NA_SUBSTITUTE_FLOAT, |coordinates| coordinates.lat),
            id: if step.kind.has_id() { i64::from(step.id) } else { NA_SUBSTITUTE },
            description: DescriptionText::new(step.description.as_str()),
        }
    }

    /// Returns step tag parsed back from type text.
    pub fn step_tag(&self) -> Option<StepTag> {
        self.type_tag.as_str().parse().ok()
    }
}

/// A trait to flatten solution into fixed-layout records.
pub trait RecordSolution {
    /// Returns one record per step, in route order and then step order.
    fn to_step_records(&self) -> Vec<StepRecord>;
}

impl RecordSolution for Solution {
    fn to_step_records(&self) -> Vec<StepRecord> {
        create_step_records(self)
    }
}

/// Flattens all route steps into records. The output is allocated once for the total step count.
pub fn create_step_records(solution: &Solution) -> Vec<StepRecord> {
    let mut records = Vec::with_capacity(solution.total_steps());

    records.extend(solution.routes.iter().flat_map(create_route_records));

    records
}

/// Converts a metric to record value, values above `i64::MAX` are clamped.
fn to_record_value(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn create_route_records(route: &Route) -> impl Iterator<Item = StepRecord> + '_ {
    route.steps.iter().map(move |step| StepRecord::new(route.vehicle, step))
}
