#[cfg(test)]
#[path = "../../tests/unit/format/table_test.rs"]
mod table_test;

use crate::format::records::{StepRecord, StepTag};
use crate::format::{NA_SUBSTITUTE, NA_SUBSTITUTE_FLOAT};

/// A column oriented view over step records.
///
/// Sentinels in `longitude`, `latitude` and `id` columns are decoded as `None`. When every value of
/// such a column is absent, the column itself can be dropped. `location_index` keeps raw values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteTable {
    /// Vehicle ids.
    pub vehicle_id: Vec<i64>,
    /// Step categories, `None` for unknown type text.
    pub step_type: Vec<Option<StepTag>>,
    /// Arrival times.
    pub arrival: Vec<i64>,
    /// Cumulated durations.
    pub duration: Vec<i64>,
    /// Setup times.
    pub setup: Vec<i64>,
    /// Service times.
    pub service: Vec<i64>,
    /// Waiting times.
    pub waiting_time: Vec<i64>,
    /// Cumulated distances.
    pub distance: Vec<i64>,
    /// Raw matrix indices.
    pub location_index: Vec<i64>,
    /// Longitudes.
    pub longitude: Option<Vec<Option<f64>>>,
    /// Latitudes.
    pub latitude: Option<Vec<Option<f64>>>,
    /// Job or break ids.
    pub id: Option<Vec<Option<i64>>>,
    /// Descriptions.
    pub description: Vec<String>,
}

impl RouteTable {
    /// Creates a table from records keeping their order.
    pub fn from_records(records: &[StepRecord], drop_absent: bool) -> Self {
        let decode_float = |value: f64| if value == NA_SUBSTITUTE_FLOAT { None } else { Some(value) };
        let decode_int = |value: i64| if value == NA_SUBSTITUTE { None } else { Some(value) };

        Self {
            vehicle_id: records.iter().map(|r| r.vehicle_id).collect(),
            step_type: records.iter().map(|r| r.step_tag()).collect(),
            arrival: records.iter().map(|r| r.arrival).collect(),
            duration: records.iter().map(|r| r.duration).collect(),
            setup: records.iter().map(|r| r.setup).collect(),
            service: records.iter().map(|r| r.service).collect(),
            waiting_time: records.iter().map(|r| r.waiting_time).collect(),
            distance: records.iter().map(|r| r.distance).collect(),
            location_index: records.iter().map(|r| r.location_index).collect(),
            longitude: optional_column(records.iter().map(|r| decode_float(r.longitude)).collect(), drop_absent),
            latitude: optional_column(records.iter().map(|r| decode_float(r.latitude)).collect(), drop_absent),
            id: optional_column(records.iter().map(|r| decode_int(r.id)).collect(), drop_absent),
            description: records.iter().map(|r| r.description.as_str().to_string()).collect(),
        }
    }

    /// Returns amount of rows.
    pub fn len(&self) -> usize {
        self.vehicle_id.len()
    }

    /// Returns true if table has no rows.
    pub fn is_empty(&self) -> bool {
        self.vehicle_id.is_empty()
    }

    /// Returns names of present columns in their order.
    pub fn column_names(&self) -> Vec<&'static str> {
        [
            ("vehicle_id", true),
            ("type", true),
            ("arrival", true),
            ("duration", true),
            ("setup", true),
            ("service", true),
            ("waiting_time", true),
            ("distance", true),
            ("location_index", true),
            ("longitude", self.longitude.is_some()),
            ("latitude", self.latitude.is_some()),
            ("id", self.id.is_some()),
            ("description", true),
        ]
        .into_iter()
        .filter(|(_, is_present)| *is_present)
        .map(|(name, _)| name)
        .collect()
    }
}

fn optional_column<T>(column: Vec<Option<T>>, drop_absent: bool) -> Option<Vec<Option<T>>> {
    if drop_absent && column.iter().all(Option::is_none) { None } else { Some(column) }
}
