//! GeoPackage binary geometry: a small `GP` header followed by ISO WKB.
//!
//! Only little-endian XY geometries are produced. Points carry no envelope,
//! every other geometry carries the `[min_x, max_x, min_y, max_y]` envelope.

use geo_traits::GeometryTrait;
use wkb::Endianness;
use wkb::writer::{WriteOptions, write_geometry};

use crate::utils::error::{Error, Result};
use crate::utils::geometry::GeoGeometry;

const MAGIC: &[u8; 2] = b"GP";
const VERSION: u8 = 0;

const FLAG_LITTLE_ENDIAN: u8 = 0b0000_0001;
const FLAG_ENVELOPE_XY: u8 = 0b0000_0010;
const FLAG_EMPTY: u8 = 0b0001_0000;

/// Encode a geometry as a GeoPackage geometry blob tagged with `srs_id`.
pub fn encode(geometry: &GeoGeometry, srs_id: i32) -> Result<Vec<u8>> {
    let envelope = match geometry {
        GeoGeometry::Point(_) => None,
        _ => geometry.bounding_rect(),
    };
    let mut flags = FLAG_LITTLE_ENDIAN;
    if envelope.is_some() {
        flags |= FLAG_ENVELOPE_XY;
    }
    if geometry.is_empty() {
        flags |= FLAG_EMPTY;
    }

    let mut buf = Vec::with_capacity(64);
    buf.extend_from_slice(MAGIC);
    buf.push(VERSION);
    buf.push(flags);
    buf.extend_from_slice(&srs_id.to_le_bytes());
    if let Some(rect) = envelope {
        for value in [rect.min().x, rect.max().x, rect.min().y, rect.max().y] {
            buf.extend_from_slice(&value.to_le_bytes());
        }
    }

    match geometry {
        GeoGeometry::Point(point) => write_body(&mut buf, point)?,
        GeoGeometry::LineString(line) => write_body(&mut buf, line)?,
        GeoGeometry::Polygon(polygon) => write_body(&mut buf, polygon)?,
        GeoGeometry::MultiPoint(points) => write_body(&mut buf, points)?,
        GeoGeometry::MultiLineString(lines) => write_body(&mut buf, lines)?,
        GeoGeometry::MultiPolygon(polygons) => write_body(&mut buf, polygons)?,
    }
    Ok(buf)
}

fn write_body(buf: &mut Vec<u8>, geometry: &impl GeometryTrait<T = f64>) -> Result<()> {
    let options = WriteOptions {
        endianness: Endianness::LittleEndian,
    };
    write_geometry(buf, geometry, &options).map_err(|err| Error::Wkb(err.to_string()))
}


#[cfg(test)]
mod tests {
    use super::decode::decode;
    use super::*;
    use crate::area::Area;
    use crate::generation::builders::{build_multilinestring, build_multipolygon, build_polygon};
    use geo::Point;

    #[test]
    fn test_point_blob_layout() {
        let blob = encode(&GeoGeometry::Point(Point::new(2.0, 3.0)), 4326).unwrap();
        // header (8) + byte order (1) + type (4) + two ordinates (16)
        assert_eq!(blob.len(), 29);
        assert_eq!(&blob[..2], b"GP");
        assert_eq!(blob[2], 0);
        assert_eq!(blob[3], FLAG_LITTLE_ENDIAN);
        assert_eq!(i32::from_le_bytes(blob[4..8].try_into().unwrap()), 4326);
        assert_eq!(blob[8], 1);
        assert_eq!(u32::from_le_bytes(blob[9..13].try_into().unwrap()), 1);
        assert_eq!(f64::from_le_bytes(blob[13..21].try_into().unwrap()), 2.0);
        assert_eq!(f64::from_le_bytes(blob[21..29].try_into().unwrap()), 3.0);
    }

    #[test]
    fn test_polygon_carries_envelope() {
        let polygon = GeoGeometry::Polygon(build_polygon(&[Area::new(-12.3, 10.2, -11.5, -5.4)]));
        let decoded = decode(&encode(&polygon, 4326).unwrap()).unwrap();
        assert_eq!(decoded.flags, FLAG_LITTLE_ENDIAN | FLAG_ENVELOPE_XY);
        assert_eq!(decoded.envelope, Some([-12.3, -11.5, -5.4, 10.2]));
        assert_eq!(decoded.geometry, polygon);
    }

    #[test]
    fn test_multi_geometries_decode_to_input() {
        let areas = [
            Area::new(-12.3, 10.2, -11.5, -5.4),
            Area::new(42.0, -39.6, 45.6, -42.1),
        ];
        let polygons = GeoGeometry::MultiPolygon(build_multipolygon(&areas));
        let decoded = decode(&encode(&polygons, 4326).unwrap()).unwrap();
        assert_eq!(decoded.geometry, polygons);
        assert_eq!(decoded.envelope, Some([-12.3, 45.6, -42.1, 10.2]));

        let lines = GeoGeometry::MultiLineString(build_multilinestring(&areas));
        let decoded = decode(&encode(&lines, 4326).unwrap()).unwrap();
        assert_eq!(decoded.geometry, lines);
    }

    #[test]
    fn test_empty_geometry_sets_flag_without_envelope() {
        let empty = GeoGeometry::MultiPoint(geo::MultiPoint::new(vec![]));
        let blob = encode(&empty, 4326).unwrap();
        assert_eq!(blob[3], FLAG_LITTLE_ENDIAN | FLAG_EMPTY);
        let decoded = decode(&blob).unwrap();
        assert_eq!(decoded.envelope, None);
        assert_eq!(decoded.geometry, empty);
    }

    #[test]
    fn test_empty_polygon_has_no_rings() {
        let empty = GeoGeometry::Polygon(build_polygon(&[]));
        let blob = encode(&empty, 4326).unwrap();
        assert_eq!(blob[3], FLAG_LITTLE_ENDIAN | FLAG_EMPTY);
        // header (8) + byte order (1) + type (4) + ring count (4)
        assert_eq!(blob.len(), 17);
        assert_eq!(u32::from_le_bytes(blob[13..17].try_into().unwrap()), 0);
        assert_eq!(decode(&blob).unwrap().geometry, empty);
    }
}
