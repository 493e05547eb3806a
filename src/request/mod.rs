//! Validated render requests and the query-parameter boundary that produces them.

/// Request value types and their derived fields.
pub mod model;
/// Query-parameter parsing and validation.
pub mod params;
