//! This module defines the two external representations of a solution: a flat array of fixed-layout
//! step records and a nested json document.
//!
//! Both read the same [`Solution`](crate::models::Solution) and share no state. They encode missing
//! values differently: records use the [`NA_SUBSTITUTE`] sentinel, documents omit the key.

/// A value which stands for "not applicable" in fixed-layout records.
///
/// It is outside of signed 32 bit range used by ids, longitudes and latitudes never exceed 180 by
/// absolute value and matrix indices are limited to 16 bits.
pub const NA_SUBSTITUTE: i64 = 4_293_967_297;

/// A sentinel for floating point record fields, exactly representable as `f64`.
pub const NA_SUBSTITUTE_FLOAT: f64 = NA_SUBSTITUTE as f64;

pub mod document;
pub mod records;

mod table;
pub use self::table::RouteTable;
