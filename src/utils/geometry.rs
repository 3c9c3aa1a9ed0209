use std::fmt;

use geo::{BoundingRect, HasDimensions, Rect};
use geo::{LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};

/// Shape-kind tag carried by a layer and by every geometry stored in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
}

impl GeometryKind {
    /// Geometry type name as registered in `gpkg_geometry_columns`.
    pub fn gpkg_name(&self) -> &'static str {
        match self {
            GeometryKind::Point => "POINT",
            GeometryKind::LineString => "LINESTRING",
            GeometryKind::Polygon => "POLYGON",
            GeometryKind::MultiPoint => "MULTIPOINT",
            GeometryKind::MultiLineString => "MULTILINESTRING",
            GeometryKind::MultiPolygon => "MULTIPOLYGON",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.gpkg_name())
    }
}

/// Enum to hold the 2D geometries a fixture can store.
///
/// Linear rings never appear on their own: they only exist as the rings of a
/// `Polygon`, closed explicitly by repeating the first coordinate.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoGeometry {
    Point(Point<f64>),
    LineString(LineString<f64>),
    Polygon(Polygon<f64>),
    MultiPoint(MultiPoint<f64>),
    MultiLineString(MultiLineString<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl GeoGeometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            GeoGeometry::Point(_) => GeometryKind::Point,
            GeoGeometry::LineString(_) => GeometryKind::LineString,
            GeoGeometry::Polygon(_) => GeometryKind::Polygon,
            GeoGeometry::MultiPoint(_) => GeometryKind::MultiPoint,
            GeoGeometry::MultiLineString(_) => GeometryKind::MultiLineString,
            GeoGeometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }

    /// XY bounding box, `None` for empty geometries.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        match self {
            GeoGeometry::Point(point) => Some(point.bounding_rect()),
            GeoGeometry::LineString(line) => line.bounding_rect(),
            GeoGeometry::Polygon(polygon) => polygon.bounding_rect(),
            GeoGeometry::MultiPoint(points) => points.bounding_rect(),
            GeoGeometry::MultiLineString(lines) => lines.bounding_rect(),
            GeoGeometry::MultiPolygon(polygons) => polygons.bounding_rect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            GeoGeometry::Point(point) => point.is_empty(),
            GeoGeometry::LineString(line) => line.is_empty(),
            GeoGeometry::Polygon(polygon) => polygon.is_empty(),
            GeoGeometry::MultiPoint(points) => points.is_empty(),
            GeoGeometry::MultiLineString(lines) => lines.is_empty(),
            GeoGeometry::MultiPolygon(polygons) => polygons.is_empty(),
        }
    }
}

impl From<Point<f64>> for GeoGeometry {
    fn from(point: Point<f64>) -> Self {
        GeoGeometry::Point(point)
    }
}

impl From<LineString<f64>> for GeoGeometry {
    fn from(line: LineString<f64>) -> Self {
        GeoGeometry::LineString(line)
    }
}

impl From<Polygon<f64>> for GeoGeometry {
    fn from(polygon: Polygon<f64>) -> Self {
        GeoGeometry::Polygon(polygon)
    }
}

impl From<MultiPoint<f64>> for GeoGeometry {
    fn from(points: MultiPoint<f64>) -> Self {
        GeoGeometry::MultiPoint(points)
    }
}

impl From<MultiLineString<f64>> for GeoGeometry {
    fn from(lines: MultiLineString<f64>) -> Self {
        GeoGeometry::MultiLineString(lines)
    }
}

impl From<MultiPolygon<f64>> for GeoGeometry {
    fn from(polygons: MultiPolygon<f64>) -> Self {
        GeoGeometry::MultiPolygon(polygons)
    }
}

/// One feature of a fixture: its geometry and the value of the `id_no` field.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureFeature {
    pub geometry: GeoGeometry,
    pub id_no: i32,
}

impl FixtureFeature {
    pub fn new(geometry: impl Into<GeoGeometry>, id_no: i32) -> Self {
        Self {
            geometry: geometry.into(),
            id_no,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Coord, coord, line_string};

    #[test]
    fn test_kind_matches_variant() {
        let point = GeoGeometry::from(Point::new(2.0, 3.0));
        assert_eq!(point.kind(), GeometryKind::Point);
        assert_eq!(point.kind().gpkg_name(), "POINT");

        let lines = GeoGeometry::from(MultiLineString::<f64>::new(vec![]));
        assert_eq!(lines.kind(), GeometryKind::MultiLineString);
        assert_eq!(lines.kind().to_string(), "MULTILINESTRING");
    }

    #[test]
    fn test_bounding_rect_of_line() {
        let line = GeoGeometry::from(line_string![
            (x: -12.3, y: 10.2),
            (x: -11.5, y: 10.2),
            (x: -11.5, y: -5.4),
        ]);
        let rect = line.bounding_rect().unwrap();
        assert_eq!(rect.min(), coord! { x: -12.3, y: -5.4 });
        assert_eq!(rect.max(), coord! { x: -11.5, y: 10.2 });
    }

    #[test]
    fn test_empty_multi_geometry_has_no_bounding_rect() {
        let points = GeoGeometry::from(MultiPoint::<f64>::new(vec![]));
        assert!(points.is_empty());
        assert!(points.bounding_rect().is_none());

        let point = GeoGeometry::from(Point::from(Coord { x: 0.0, y: 0.0 }));
        assert!(!point.is_empty());
    }
}
