//! Export configuration.

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use crate::utils::GenericError;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// An export configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct ExportConfig {
    /// Specifies document output configuration.
    pub document: Option<DocumentConfig>,
    /// Specifies column view configuration.
    pub table: Option<TableConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A document output configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct DocumentConfig {
    /// Specifies whether document is pretty printed. Default is false.
    pub pretty: Option<bool>,
}

/// A column view configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    /// Specifies whether optional columns without any value are dropped. Default is true.
    pub drop_absent_columns: Option<bool>,
}

/// A telemetry configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: Option<bool>,
}

impl ExportConfig {
    /// Returns true if document should be pretty printed.
    pub fn is_pretty(&self) -> bool {
        self.document.as_ref().and_then(|document| document.pretty).unwrap_or(false)
    }

    /// Returns true if optional columns without values should be dropped.
    pub fn drop_absent_columns(&self) -> bool {
        self.table.as_ref().and_then(|table| table.drop_absent_columns).unwrap_or(true)
    }

    /// Returns true if logging is enabled.
    pub fn is_logging_enabled(&self) -> bool {
        self.telemetry
            .as_ref()
            .and_then(|telemetry| telemetry.logging.as_ref())
            .and_then(|logging| logging.enabled)
            .unwrap_or(false)
    }
}

/// Reads config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<ExportConfig, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}
