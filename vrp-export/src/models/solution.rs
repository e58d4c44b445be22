#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use crate::models::common::*;

/// Specifies a kind of job or of a job visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JobType {
    /// A job which requires a single visit.
    Single,
    /// A pickup part of a shipment.
    Pickup,
    /// A delivery part of a shipment.
    Delivery,
}

impl JobType {
    /// Returns a raw discriminator value.
    pub fn discriminator(&self) -> u8 {
        match self {
            JobType::Single => 0,
            JobType::Pickup => 1,
            JobType::Delivery => 2,
        }
    }
}

/// A primary step discriminator without any payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepType {
    /// A vehicle start.
    Start,
    /// A job visit.
    Job,
    /// A vehicle break.
    Break,
    /// A vehicle end.
    End,
}

impl StepType {
    /// Returns a raw discriminator value.
    pub fn discriminator(&self) -> u8 {
        match self {
            StepType::Start => 0,
            StepType::Job => 1,
            StepType::Break => 2,
            StepType::End => 3,
        }
    }
}

/// Specifies a kind of step. Only job visits carry a visit kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// A vehicle start.
    Start,
    /// A job visit of given kind.
    Job(JobType),
    /// A vehicle break.
    Break,
    /// A vehicle end.
    End,
}

impl StepKind {
    /// Returns primary discriminator.
    pub fn step_type(&self) -> StepType {
        match self {
            StepKind::Start => StepType::Start,
            StepKind::Job(_) => StepType::Job,
            StepKind::Break => StepType::Break,
            StepKind::End => StepType::End,
        }
    }

    /// Returns visit kind for job steps.
    pub fn job_type(&self) -> Option<JobType> {
        match self {
            StepKind::Job(job_type) => Some(*job_type),
            _ => None,
        }
    }

    /// Returns true if step id is meaningful for this kind of step.
    pub fn has_id(&self) -> bool {
        matches!(self, StepKind::Job(_) | StepKind::Break)
    }
}

/// Aggregated solution metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Total cost.
    pub cost: Cost,
    /// Amount of unassigned jobs.
    pub unassigned: usize,
    /// Total service time.
    pub service: Duration,
    /// Total duration.
    pub duration: Duration,
    /// Total waiting time.
    pub waiting_time: Duration,
    /// Total setup time.
    pub setup: Duration,
    /// Total distance.
    pub distance: Distance,
}

/// A point along a route.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// Step kind.
    pub kind: StepKind,
    /// Job or break id, producer defined for start and end.
    pub id: Id,
    /// Free text description, can be empty.
    pub description: String,
    /// Visited place.
    pub location: Location,
    /// Arrival time.
    pub arrival: Timestamp,
    /// Cumulated travel time when arriving at this step.
    pub duration: Duration,
    /// Setup time at this step.
    pub setup: Duration,
    /// Service time at this step.
    pub service: Duration,
    /// Waiting time at this step.
    pub waiting_time: Duration,
    /// Cumulated distance when arriving at this step.
    pub distance: Distance,
}

impl Step {
    /// Creates a new step with zero metrics.
    pub fn new(kind: StepKind, location: Location) -> Self {
        Self {
            kind,
            id: 0,
            description: String::new(),
            location,
            arrival: 0,
            duration: 0,
            setup: 0,
            service: 0,
            waiting_time: 0,
            distance: 0,
        }
    }

    /// Creates a vehicle start step.
    pub fn start(location: Location) -> Self {
        Self::new(StepKind::Start, location)
    }

    /// Creates a vehicle end step.
    pub fn end(location: Location) -> Self {
        Self::new(StepKind::End, location)
    }

    /// Creates a break step. Breaks have no location on their own.
    pub fn new_break(id: Id) -> Self {
        Self::new(StepKind::Break, Location::default()).with_id(id)
    }

    /// Creates a job visit step.
    pub fn job(id: Id, job_type: JobType, location: Location) -> Self {
        Self::new(StepKind::Job(job_type), location).with_id(id)
    }

    /// Sets step id.
    pub fn with_id(mut self, id: Id) -> Self {
        self.id = id;
        self
    }

    /// Sets step description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Sets arrival time and cumulated travel duration.
    pub fn with_arrival(mut self, arrival: Timestamp, duration: Duration) -> Self {
        self.arrival = arrival;
        self.duration = duration;
        self
    }

    /// Sets setup, service and waiting times.
    pub fn with_times(mut self, setup: Duration, service: Duration, waiting_time: Duration) -> Self {
        self.setup = setup;
        self.service = service;
        self.waiting_time = waiting_time;
        self
    }

    /// Sets cumulated distance.
    pub fn with_distance(mut self, distance: Distance) -> Self {
        self.distance = distance;
        self
    }
}

/// An ordered sequence of steps performed by one vehicle.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    /// Vehicle id.
    pub vehicle: Id,
    /// Steps in visiting order.
    pub steps: Vec<Step>,
}

impl Route {
    /// Creates a new instance of `Route`.
    pub fn new(vehicle: Id, steps: Vec<Step>) -> Self {
        Self { vehicle, steps }
    }
}

/// A job which is not assigned to any route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    /// Job id.
    pub id: Id,
    /// Job type.
    pub job_type: JobType,
}

/// A result of one optimization run.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Status code: zero means success.
    pub code: u32,
    /// Error message, meaningful only when code is not zero.
    pub error: String,
    /// Aggregated metrics.
    pub summary: Summary,
    /// Routes in vehicle assignment order.
    pub routes: Vec<Route>,
    /// Jobs which could not be assigned.
    pub unassigned: Vec<Job>,
}

impl Solution {
    /// Creates a solution which carries only status code and error message.
    pub fn new(code: u32, error: &str) -> Self {
        Self { code, error: error.to_string(), summary: Summary::default(), routes: vec![], unassigned: vec![] }
    }

    /// Creates a solution from routes and unassigned jobs, summary is aggregated from route steps.
    ///
    /// Step duration and distance are cumulative along a route, so route totals are taken from the last
    /// step. Cost follows a default per-hour cost model and equals total duration. Sums saturate.
    pub fn from_routes(code: u32, routes: Vec<Route>, unassigned: Vec<Job>) -> Self {
        let summary = routes.iter().fold(
            Summary { unassigned: unassigned.len(), ..Summary::default() },
            |mut acc, route| {
                route.steps.iter().for_each(|step| {
                    acc.service = acc.service.saturating_add(step.service);
                    acc.setup = acc.setup.saturating_add(step.setup);
                    acc.waiting_time = acc.waiting_time.saturating_add(step.waiting_time);
                });

                if let Some(last) = route.steps.last() {
                    acc.duration = acc.duration.saturating_add(last.duration);
                    acc.distance = acc.distance.saturating_add(last.distance);
                }

                acc
            },
        );

        let summary = Summary { cost: summary.duration, ..summary };

        Self { code, error: String::new(), summary, routes, unassigned }
    }

    /// Returns total amount of steps in all routes.
    pub fn total_steps(&self) -> usize {
        self.routes.iter().map(|route| route.steps.len()).sum()
    }
}
