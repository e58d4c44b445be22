#[cfg(test)]
#[path = "../../../tests/unit/format/document/writer_test.rs"]
mod writer_test;

use super::*;
use crate::models::{Job, Route, Solution, Step, Summary};
use crate::utils::GenericResult;
use std::fs::{create_dir_all, write};
use std::io::{BufWriter, Write};
use std::path::Path;

/// A trait to serialize solution into json document.
pub trait DocumentSolution {
    /// Returns solution as compact json text.
    fn to_json(&self) -> GenericResult<String>;

    /// Returns solution as parsed json value.
    fn to_value(&self) -> GenericResult<serde_json::Value>;

    /// Writes solution as json into given writer.
    fn write_document<W: Write>(&self, writer: BufWriter<W>, pretty: bool) -> GenericResult<()>;
}

impl DocumentSolution for Solution {
    fn to_json(&self) -> GenericResult<String> {
        to_json(self, false)
    }

    fn to_value(&self) -> GenericResult<serde_json::Value> {
        to_value(self)
    }

    fn write_document<W: Write>(&self, writer: BufWriter<W>, pretty: bool) -> GenericResult<()> {
        serialize_document(writer, &create_document(self), pretty)
    }
}

/// Creates a document which mirrors solution structure.
pub fn create_document(solution: &Solution) -> Document {
    Document {
        code: solution.code,
        error: solution.error.clone(),
        summary: create_summary(&solution.summary),
        routes: solution.routes.iter().map(create_route).collect(),
        unassigned: solution.unassigned.iter().map(create_job).collect(),
    }
}

/// Encodes solution as json text.
pub fn to_json(solution: &Solution, pretty: bool) -> GenericResult<String> {
    let mut buffer = Vec::new();
    serialize_document(BufWriter::new(&mut buffer), &create_document(solution), pretty)?;

    String::from_utf8(buffer).map_err(|err| format!("cannot encode document: '{err}'").into())
}

/// Returns solution as a parsed json value. The value is obtained from the encoded text.
pub fn to_value(solution: &Solution) -> GenericResult<serde_json::Value> {
    let json = to_json(solution, false)?;

    serde_json::from_str(json.as_str()).map_err(|err| format!("cannot parse document: '{err}'").into())
}

/// Writes solution document into a file, creating missing parent directories.
///
/// The document is encoded before the file is touched, so nothing is written on encoding failure.
pub fn save_document<P: AsRef<Path>>(path: P, solution: &Solution, pretty: bool) -> GenericResult<()> {
    let path = path.as_ref();
    let json = to_json(solution, pretty)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }

    write(path, json)?;

    Ok(())
}

fn create_summary(summary: &Summary) -> DocumentSummary {
    DocumentSummary {
        cost: summary.cost,
        unassigned: summary.unassigned,
        service: summary.service,
        duration: summary.duration,
        waiting_time: summary.waiting_time,
        setup: summary.setup,
        distance: summary.distance,
    }
}

fn create_route(route: &Route) -> DocumentRoute {
    DocumentRoute { vehicle: route.vehicle, steps: route.steps.iter().map(create_step).collect() }
}

fn create_step(step: &Step) -> DocumentStep {
    DocumentStep {
        id: step.id,
        step_type: step.kind.step_type().discriminator(),
        arrival: step.arrival,
        duration: step.duration,
        setup: step.setup,
        service: step.service,
        waiting_time: step.waiting_time,
        description: step.description.clone(),
        location: step.location.coordinates().map(|c| DocumentLocation { lon: c.lon, lat: c.lat }),
        location_index: step.location.index(),
    }
}

fn create_job(job: &Job) -> DocumentJob {
    DocumentJob { id: job.id, job_type: job.job_type.discriminator() }
}
