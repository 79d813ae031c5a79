use crate::types::{
    CellBoundary, CellIndex, CoordIJ, ErrorCode, GeoLoop, GeoPolygon, LatLng, LinkedGeoPolygon,
};
use anyhow::Result;
use serde::Serialize;
use std::mem;

/// The compiled layout of one record type, as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeLayout {
    /// Type identifier the host asks for.
    pub name: &'static str,
    /// Byte size as compiled in this build.
    pub size: usize,
    /// Alignment as compiled in this build.
    pub align: usize,
}

const fn layout_of_type<T>(name: &'static str) -> TypeLayout {
    TypeLayout {
        name,
        size: mem::size_of::<T>(),
        align: mem::align_of::<T>(),
    }
}

/// Every record type the host marshals, in a stable order.
const LAYOUTS: [TypeLayout; 8] = [
    layout_of_type::<CellIndex>("CellIndex"),
    layout_of_type::<ErrorCode>("ErrorCode"),
    layout_of_type::<LatLng>("LatLng"),
    layout_of_type::<CellBoundary>("CellBoundary"),
    layout_of_type::<GeoLoop>("GeoLoop"),
    layout_of_type::<GeoPolygon>("GeoPolygon"),
    layout_of_type::<LinkedGeoPolygon>("LinkedGeoPolygon"),
    layout_of_type::<CoordIJ>("CoordIJ"),
];

/// Looks up the compiled layout of a record type by its identifier.
///
/// # Arguments
///
/// * `name` - The type identifier, e.g. `"CellBoundary"`.
///
/// # Returns
///
/// * `Option<TypeLayout>` - The layout, or `None` for an unknown identifier.
pub fn layout_of(name: &str) -> Option<TypeLayout> {
    LAYOUTS.iter().copied().find(|l| l.name == name)
}

/// Returns the layout of every record type, in a stable order.
pub fn layout_report() -> Vec<TypeLayout> {
    LAYOUTS.to_vec()
}

/// Renders the full layout report as JSON for a one-shot fetch at host
/// startup.
pub fn layout_report_json() -> Result<String> {
    let json = serde_json::to_string(&layout_report())?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_covers_every_marshaled_type() {
        let names: Vec<&str> = layout_report().iter().map(|l| l.name).collect();
        assert_eq!(
            names,
            [
                "CellIndex",
                "ErrorCode",
                "LatLng",
                "CellBoundary",
                "GeoLoop",
                "GeoPolygon",
                "LinkedGeoPolygon",
                "CoordIJ",
            ]
        );
    }

    #[test]
    fn lookup_matches_compiled_sizes() {
        let latlng = layout_of("LatLng").unwrap();
        assert_eq!(latlng.size, mem::size_of::<LatLng>());
        assert_eq!(latlng.align, mem::align_of::<LatLng>());
        assert!(layout_of("NoSuchType").is_none());
    }

    #[test]
    fn report_is_deterministic() {
        assert_eq!(layout_report(), layout_report());
    }

    #[test]
    fn json_report_is_parseable() {
        let json = layout_report_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 8);
        assert_eq!(parsed[0]["name"], "CellIndex");
        assert_eq!(parsed[0]["size"], 8);
    }
}
