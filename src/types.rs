use std::os::raw::c_int;

/// Encoded identifier of a cell in the hierarchical hexagonal grid.
///
/// The bit layout (mode, resolution, base cell, digits) is owned by the
/// external grid library; this crate only ever treats it as an opaque
/// 64-bit value.
pub type CellIndex = u64;

/// Discriminant for the outcome of a grid-library operation.
///
/// The error values themselves are defined by the external library; the
/// host only needs the width of the carrier type.
pub type ErrorCode = u32;

/// Maximum number of vertices a single cell boundary can have.
/// Hexagon edges can be subdivided at icosahedron face crossings, so the
/// cap is above six.
pub const MAX_CELL_BNDRY_VERTS: usize = 10;

/// A latitude/longitude pair, in radians.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    /// Latitude in radians.
    pub lat: f64,
    /// Longitude in radians.
    pub lng: f64,
}

/// The vertices of a single cell, as written by the grid library.
///
/// Fixed capacity so the host can allocate one buffer per call without a
/// follow-up length query.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CellBoundary {
    /// Number of vertices actually populated in `verts`.
    pub num_verts: c_int,
    /// Vertex storage; entries past `num_verts` are unspecified.
    pub verts: [LatLng; MAX_CELL_BNDRY_VERTS],
}

/// One closed ring of vertices (an outer boundary or a hole).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct GeoLoop {
    /// Number of vertices in the ring.
    pub num_verts: c_int,
    /// Pointer to `num_verts` vertices owned by the caller.
    pub verts: *mut LatLng,
}

/// An input polygon: one outer ring plus zero or more hole rings.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct GeoPolygon {
    /// The outer ring.
    pub geoloop: GeoLoop,
    /// Number of hole rings.
    pub num_holes: c_int,
    /// Pointer to `num_holes` hole rings owned by the caller.
    pub holes: *mut GeoLoop,
}

/// A vertex node in a linked loop.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct LinkedLatLng {
    /// The vertex itself.
    pub vertex: LatLng,
    /// Next vertex in the loop, or null at the end.
    pub next: *mut LinkedLatLng,
}

/// A ring node in a linked polygon.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct LinkedGeoLoop {
    /// First vertex of the ring.
    pub first: *mut LinkedLatLng,
    /// Last vertex of the ring.
    pub last: *mut LinkedLatLng,
    /// Next ring in the polygon, or null at the end.
    pub next: *mut LinkedGeoLoop,
}

/// Head node of a linked list of polygons, each made of linked loops.
///
/// The grid library allocates and frees the whole chain; each node owns
/// its vertex data until the library releases it. This crate never walks
/// or mutates the chain, it only reports the node size so the host can
/// reserve space for the head the library writes into.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct LinkedGeoPolygon {
    /// First ring of this polygon.
    pub first: *mut LinkedGeoLoop,
    /// Last ring of this polygon.
    pub last: *mut LinkedGeoLoop,
    /// Next polygon in the chain, or null at the end.
    pub next: *mut LinkedGeoPolygon,
}

/// Integer offsets in the discrete IJ coordinate system over the grid.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordIJ {
    /// Offset along the i axis.
    pub i: c_int,
    /// Offset along the j axis.
    pub j: c_int,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn fixed_width_types_have_stable_sizes() {
        assert_eq!(mem::size_of::<CellIndex>(), 8);
        assert_eq!(mem::size_of::<ErrorCode>(), 4);
        assert_eq!(mem::size_of::<LatLng>(), 16);
        assert_eq!(mem::size_of::<CoordIJ>(), 8);
    }

    #[test]
    fn cell_boundary_matches_reference_layout() {
        // c_int count, 4 bytes padding, then 10 * 16 bytes of vertices.
        assert_eq!(mem::align_of::<CellBoundary>(), mem::align_of::<f64>());
        assert_eq!(mem::size_of::<CellBoundary>(), 168);
    }

    #[test]
    fn linked_nodes_are_three_pointers_wide() {
        let ptr = mem::size_of::<*mut ()>();
        assert_eq!(mem::size_of::<LinkedGeoLoop>(), 3 * ptr);
        assert_eq!(mem::size_of::<LinkedGeoPolygon>(), 3 * ptr);
    }
}
