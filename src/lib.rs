//! hexbridge: ABI introspection bridge for the hexagonal-grid library.
//!
//! The host runtime is dynamically typed and cannot see native struct
//! layouts at compile time, so it can neither size its marshaling buffers
//! nor read 64-bit integers out of them. This crate closes that gap with
//! two things and nothing else:
//!
//! - size/alignment queries for each record type the host marshals
//!   ([`layout`] for Rust callers, [`ffi`] for the host), and
//! - a lossy-by-contract widening of `i64` to `f64` ([`widen`]).
//!
//! The grid algorithms themselves (cell indexing, traversal, polygon
//! conversion) live in the external library; this crate never creates,
//! mutates, or frees any of the records it measures.

pub mod ffi;
pub mod layout;
pub mod types;
pub mod widen;

pub use layout::{layout_of, layout_report, layout_report_json, TypeLayout};
pub use types::{
    CellBoundary, CellIndex, CoordIJ, ErrorCode, GeoLoop, GeoPolygon, LatLng, LinkedGeoLoop,
    LinkedGeoPolygon, LinkedLatLng, MAX_CELL_BNDRY_VERTS,
};
pub use widen::{widen_i64, MAX_SAFE_INTEGER};
