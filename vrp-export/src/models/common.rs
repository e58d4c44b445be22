#[cfg(test)]
#[path = "../../tests/unit/models/common_test.rs"]
mod common_test;

/// Represents an identifier of a job, break or vehicle.
///
/// Limited to signed 32 bit range, so it never reaches the record sentinel.
pub type Id = i32;

/// Represents an index in the routing matrix.
pub type Index = u16;

/// Represents a time duration in solver units.
pub type Duration = u64;

/// Represents a timestamp in solver units.
pub type Timestamp = u64;

/// Represents a distance in solver units.
pub type Distance = u64;

/// Represents a cost value.
pub type Cost = u64;

/// Geographic coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinates {
    /// Longitude.
    pub lon: f64,
    /// Latitude.
    pub lat: f64,
}

/// A place visited by a step.
///
/// Coordinates and matrix index are independent facets: a location may carry both, either or none.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Location {
    index: Option<Index>,
    coordinates: Option<Coordinates>,
}

impl Location {
    /// Creates a new instance of `Location` with optional matrix index and coordinates.
    pub fn new(index: Option<Index>, coordinates: Option<Coordinates>) -> Self {
        Self { index, coordinates }
    }

    /// Creates a location which is known only by its index in the routing matrix.
    pub fn new_index(index: Index) -> Self {
        Self { index: Some(index), coordinates: None }
    }

    /// Creates a location which is known only by its coordinates.
    pub fn new_coordinates(lon: f64, lat: f64) -> Self {
        Self { index: None, coordinates: Some(Coordinates { lon, lat }) }
    }

    /// Returns matrix index if it was specified.
    pub fn index(&self) -> Option<Index> {
        self.index
    }

    /// Returns coordinates if they were specified.
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// Returns true if location has coordinates.
    pub fn has_coordinates(&self) -> bool {
        self.coordinates.is_some()
    }

    /// Returns true if location has a matrix index.
    pub fn has_index(&self) -> bool {
        self.index.is_some()
    }
}
