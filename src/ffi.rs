//! The extern "C" surface the host runtime binds against.
//!
//! The host calls each size query once at startup to learn how big its
//! marshaling buffers must be, then calls `int64PointerAsDouble` whenever it
//! reads a 64-bit field out of one of those buffers. Every function here is
//! a pure query against compile-time type metadata, safe to call from any
//! thread with no coordination.

#![allow(non_snake_case)]

use crate::types::{
    CellBoundary, CellIndex, CoordIJ, ErrorCode, GeoLoop, GeoPolygon, LatLng, LinkedGeoPolygon,
};
use crate::widen::widen_i64;
use std::mem;
use std::os::raw::c_int;

#[no_mangle]
pub extern "C" fn sizeOfCellIndex() -> c_int {
    mem::size_of::<CellIndex>() as c_int
}

#[no_mangle]
pub extern "C" fn sizeOfErrorCode() -> c_int {
    mem::size_of::<ErrorCode>() as c_int
}

#[no_mangle]
pub extern "C" fn sizeOfLatLng() -> c_int {
    mem::size_of::<LatLng>() as c_int
}

#[no_mangle]
pub extern "C" fn sizeOfCellBoundary() -> c_int {
    mem::size_of::<CellBoundary>() as c_int
}

#[no_mangle]
pub extern "C" fn sizeOfGeoLoop() -> c_int {
    mem::size_of::<GeoLoop>() as c_int
}

#[no_mangle]
pub extern "C" fn sizeOfGeoPolygon() -> c_int {
    mem::size_of::<GeoPolygon>() as c_int
}

#[no_mangle]
pub extern "C" fn sizeOfLinkedGeoPolygon() -> c_int {
    mem::size_of::<LinkedGeoPolygon>() as c_int
}

#[no_mangle]
pub extern "C" fn sizeOfCoordIJ() -> c_int {
    mem::size_of::<CoordIJ>() as c_int
}

/// Reads a 64-bit signed integer through `input` and returns it as the
/// nearest double. The host has no 64-bit integer type, so this is how it
/// pulls encoded cell indexes and error codes out of native buffers.
/// Exact below 2^53, nearest approximation above.
///
/// # Safety
///
/// `input` must be non-null, aligned for `i64`, and point to readable
/// memory holding an `i64` for the duration of the call. No validation is
/// performed; an invalid pointer is undefined behavior.
#[no_mangle]
pub unsafe extern "C" fn int64PointerAsDouble(input: *const i64) -> f64 {
    widen_i64(*input)
}
