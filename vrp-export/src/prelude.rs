//! This module reimports commonly used types.

pub use crate::config::{read_config, ExportConfig};
pub use crate::context::ExportContext;
pub use crate::format::document::{create_document, save_document, Document, DocumentSolution};
pub use crate::format::records::{create_step_records, RecordSolution, StepRecord, StepTag};
pub use crate::format::{RouteTable, NA_SUBSTITUTE, NA_SUBSTITUTE_FLOAT};
pub use crate::models::{Coordinates, Id, Job, JobType, Location, Route, Solution, Step, StepKind, StepType, Summary};
pub use crate::utils::{GenericError, GenericResult, InfoLogger};
