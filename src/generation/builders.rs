use geo::{Coord, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};

use crate::area::Area;

pub fn build_point(coord: Coord<f64>) -> Point<f64> {
    Point::from(coord)
}

/// Four points per area, in area order then corner order. Shared corners are
/// kept as separate members.
pub fn build_multipoint(areas: &[Area]) -> MultiPoint<f64> {
    areas
        .iter()
        .flat_map(|area| area.corners())
        .map(Point::from)
        .collect()
}

pub fn build_linestring(area: &Area) -> LineString<f64> {
    area.as_line()
}

/// One open four-point line per area.
pub fn build_multilinestring(areas: &[Area]) -> MultiLineString<f64> {
    MultiLineString::new(areas.iter().map(Area::as_line).collect())
}

/// A single polygon whose first ring is the exterior and whose remaining
/// rings are holes. An empty slice gives an empty polygon.
pub fn build_polygon(areas: &[Area]) -> Polygon<f64> {
    let mut rings = areas.iter().map(Area::as_ring);
    let exterior = rings.next().unwrap_or_else(|| LineString::new(vec![]));
    Polygon::new(exterior, rings.collect())
}

/// One single-ring polygon per area.
pub fn build_multipolygon(areas: &[Area]) -> MultiPolygon<f64> {
    MultiPolygon::new(
        areas
            .iter()
            .map(|area| Polygon::new(area.as_ring(), vec![]))
            .collect(),
    )
}
