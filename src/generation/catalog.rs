use geo::Coord;

use crate::area::Area;
use crate::generation::builders::{
    build_linestring, build_multilinestring, build_multipoint, build_multipolygon, build_point,
    build_polygon,
};
use crate::utils::geometry::{FixtureFeature, GeometryKind};

pub const FIRST_AREA: Area = Area::new(-12.3, 10.2, -11.5, -5.4);
pub const SECOND_AREA: Area = Area::new(42.0, -39.6, 45.6, -42.1);

const DEFAULT_ID: i32 = 42;

/// Everything needed to write one fixture container.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSpec {
    pub name: &'static str,
    pub kind: Option<GeometryKind>,
    pub features: Vec<FixtureFeature>,
}

impl FixtureSpec {
    fn single(name: &'static str, kind: GeometryKind, feature: FixtureFeature) -> Self {
        Self {
            name,
            kind: Some(kind),
            features: vec![feature],
        }
    }
}

/// All fixtures, in the order they are generated.
pub fn catalog() -> Vec<FixtureSpec> {
    vec![
        FixtureSpec {
            name: "empty",
            kind: None,
            features: vec![],
        },
        FixtureSpec::single(
            "simple",
            GeometryKind::Point,
            FixtureFeature::new(build_point(Coord { x: 2.0, y: 3.0 }), DEFAULT_ID),
        ),
        FixtureSpec::single(
            "multi_point",
            GeometryKind::MultiPoint,
            FixtureFeature::new(build_multipoint(&[FIRST_AREA]), DEFAULT_ID),
        ),
        FixtureSpec::single(
            "polygon",
            GeometryKind::Polygon,
            FixtureFeature::new(build_polygon(&[FIRST_AREA]), DEFAULT_ID),
        ),
        FixtureSpec::single(
            "multi_polygon",
            GeometryKind::MultiPolygon,
            FixtureFeature::new(build_multipolygon(&[FIRST_AREA, SECOND_AREA]), DEFAULT_ID),
        ),
        FixtureSpec {
            name: "multiple_features",
            kind: Some(GeometryKind::Point),
            features: vec![
                FixtureFeature::new(build_point(Coord { x: 2.0, y: 3.0 }), 42),
                FixtureFeature::new(build_point(Coord { x: -2.0, y: -3.0 }), 43),
            ],
        },
        FixtureSpec::single(
            "linestring",
            GeometryKind::LineString,
            FixtureFeature::new(build_linestring(&FIRST_AREA), DEFAULT_ID),
        ),
        FixtureSpec::single(
            "multi_linestring",
            GeometryKind::MultiLineString,
            FixtureFeature::new(build_multilinestring(&[FIRST_AREA, SECOND_AREA]), DEFAULT_ID),
        ),
    ]
}
