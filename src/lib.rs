//! Generator for small GeoPackage test fixtures.
//!
//! Every fixture holds at most one layer, `onlylayer`, in EPSG:4326 with an
//! integer `id_no` field, and covers one shape of the simple-feature model
//! (point, multipoint, line string, multi line string, polygon, multipolygon),
//! plus an empty container and a multi-feature container.

pub mod area;
pub mod generation;
pub mod gpkg;
pub mod utils;

pub use area::Area;
pub use generation::fixture::write_fixture;
pub use generation::generate::{GeneratorConfig, generate_fixtures};
pub use utils::error::{Error, Result, Stage};
pub use utils::geometry::{FixtureFeature, GeoGeometry, GeometryKind};
