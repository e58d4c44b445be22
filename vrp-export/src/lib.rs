//! This crate converts a computed solution of a Vehicle Routing Problem into representations consumed
//! by other systems:
//!
//! - **records**: a flat array of fixed-layout step records for bulk numeric consumption, optional
//!   values are encoded with a sentinel
//! - **document**: a nested json document, optional values are omitted
//!
//! # Examples
//!
//! ```
//! use vrp_export::prelude::*;
//!
//! let solution = Solution::from_routes(
//!     0,
//!     vec![Route::new(
//!         1,
//!         vec![
//!             Step::start(Location::new_index(0)),
//!             Step::job(5, JobType::Single, Location::new_coordinates(2.35, 48.85)),
//!             Step::end(Location::new_index(0)),
//!         ],
//!     )],
//!     vec![],
//! );
//!
//! let records = solution.to_step_records();
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[1].type_tag.as_str(), "job");
//! assert_eq!(records[0].id, NA_SUBSTITUTE);
//!
//! let json = solution.to_json().unwrap();
//! assert!(json.contains(r#""location":{"lon":2.35,"lat":48.85}"#));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub(crate) mod helpers;

pub mod config;
pub mod context;
pub mod format;
pub mod models;
pub mod prelude;
pub mod utils;
