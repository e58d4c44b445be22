use crate::models::{Cost, Distance, Duration, Id, Index, Timestamp};
use crate::utils::GenericResult;
use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use std::io::{BufReader, BufWriter, Read, Write};

/// Aggregated solution metrics.
#[derive(Clone, Default, Deserialize, Serialize, PartialEq, Debug)]
pub struct DocumentSummary {
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

/// Geographic coordinates of a step.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct DocumentLocation {
    /// Longitude.
    #[serde(serialize_with = "serialize_finite")]
    pub lon: f64,
    /// Latitude.
    #[serde(serialize_with = "serialize_finite")]
    pub lat: f64,
}

/// A route step.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct DocumentStep {
    /// Step id.
    pub id: Id,
    /// Raw step type discriminator.
    #[serde(rename(serialize = "type", deserialize = "type"))]
    pub step_type: u8,
    /// Arrival time.
    pub arrival: Timestamp,
    /// Cumulated travel duration.
    pub duration: Duration,
    /// Setup time.
    pub setup: Duration,
    /// Service time.
    pub service: Duration,
    /// Waiting time.
    pub waiting_time: Duration,
    /// Description.
    pub description: String,
    /// Coordinates, present only if location has them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<DocumentLocation>,
    /// Matrix index, present only if location has it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_index: Option<Index>,
}

/// A vehicle route.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct DocumentRoute {
    /// Vehicle id.
    pub vehicle: Id,
    /// Steps in visiting order.
    pub steps: Vec<DocumentStep>,
}

/// Unassigned job.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct DocumentJob {
    /// Job id.
    pub id: Id,
    /// Raw job type discriminator.
    #[serde(rename(serialize = "type", deserialize = "type"))]
    pub job_type: u8,
}

/// A solution document.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct Document {
    /// Status code.
    pub code: u32,
    /// Error message.
    pub error: String,
    /// Aggregated metrics.
    pub summary: DocumentSummary,
    /// List of routes.
    pub routes: Vec<DocumentRoute>,
    /// List of unassigned jobs.
    pub unassigned: Vec<DocumentJob>,
}

/// Serializes document into json format.
pub fn serialize_document<W: Write>(mut writer: BufWriter<W>, document: &Document, pretty: bool) -> GenericResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, document)?;
    } else {
        serde_json::to_writer(&mut writer, document)?;
    }

    writer.flush()?;

    Ok(())
}

/// Fails on NaN and infinite values: json has no representation for them.
fn serialize_finite<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        Err(S::Error::custom(format!("non-finite coordinate: {value}")))
    }
}

/// Deserializes document from json format.
pub fn deserialize_document<R: Read>(reader: BufReader<R>) -> GenericResult<Document> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize document: '{err}'").into())
}
