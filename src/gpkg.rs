//! Minimal GeoPackage writer on top of SQLite.
//!
//! Exposes exactly the primitives the fixture writer needs: create a
//! container, create a layer, define a field, append a feature, finalize.

pub mod container;
pub mod field;
pub mod schema;
pub mod srs;
pub mod wkb;

pub use container::{GeoPackage, LayerHandle};
pub use field::{FieldType, FieldValue};
pub use srs::{SpatialReference, WGS84};

/// File extension of every container written by this crate.
pub const EXTENSION: &str = "gpkg";
