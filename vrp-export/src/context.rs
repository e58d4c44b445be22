//! Export context which applies configuration and telemetry to exporters.

#[cfg(test)]
#[path = "../tests/unit/context_test.rs"]
mod context_test;

use crate::config::ExportConfig;
use crate::format::RouteTable;
use crate::format::document::{save_document, to_json};
use crate::format::records::{create_step_records, StepRecord};
use crate::models::Solution;
use crate::utils::{create_stdout_logger, GenericResult, InfoLogger, Timer};
use std::path::Path;

/// Keeps resolved export settings and a logger.
#[derive(Clone)]
pub struct ExportContext {
    pretty: bool,
    drop_absent_columns: bool,
    logger: Option<InfoLogger>,
}

impl Default for ExportContext {
    fn default() -> Self {
        Self::new(&ExportConfig::default(), create_stdout_logger())
    }
}

impl ExportContext {
    /// Creates a new instance of `ExportContext`. Logger is used only if logging is enabled in config.
    pub fn new(config: &ExportConfig, logger: InfoLogger) -> Self {
        Self {
            pretty: config.is_pretty(),
            drop_absent_columns: config.drop_absent_columns(),
            logger: if config.is_logging_enabled() { Some(logger) } else { None },
        }
    }

    /// Flattens solution into step records.
    pub fn records(&self, solution: &Solution) -> Vec<StepRecord> {
        self.measure("records", solution, || create_step_records(solution))
    }

    /// Creates a column view over solution step records.
    pub fn table(&self, solution: &Solution) -> RouteTable {
        self.measure("table", solution, || {
            RouteTable::from_records(create_step_records(solution).as_slice(), self.drop_absent_columns)
        })
    }

    /// Encodes solution as json document.
    pub fn document(&self, solution: &Solution) -> GenericResult<String> {
        self.measure("document", solution, || to_json(solution, self.pretty))
    }

    /// Writes solution as json document into a file.
    pub fn save_document<P: AsRef<Path>>(&self, path: P, solution: &Solution) -> GenericResult<()> {
        self.measure("save", solution, || save_document(path, solution, self.pretty))
    }

    fn measure<R, F: FnOnce() -> R>(&self, name: &str, solution: &Solution, action: F) -> R {
        match &self.logger {
            Some(logger) => Timer::measure_duration_with_callback(action, |_, duration| {
                (logger)(
                    format!(
                        "{name} export: {} routes, {} steps, took {}ms",
                        solution.routes.len(),
                        solution.total_steps(),
                        duration.as_millis()
                    )
                    .as_str(),
                )
            }),
            None => action(),
        }
    }
}
