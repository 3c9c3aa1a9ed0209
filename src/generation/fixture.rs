use std::path::{Path, PathBuf};

use log::info;

use crate::gpkg::{self, FieldType, FieldValue, GeoPackage};
use crate::utils::error::{Error, Result, Stage};
use crate::utils::geometry::{FixtureFeature, GeometryKind};

pub const LAYER_NAME: &str = "onlylayer";
pub const ID_FIELD: &str = "id_no";

/// Path of the container written for fixture `name` inside `output_dir`.
pub fn fixture_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(format!("{}.{}", name, gpkg::EXTENSION))
}

/// Write one fixture container, replacing any previous output of that name.
///
/// Without a geometry kind the container is finalized with no layers.
/// Otherwise it holds the single layer `onlylayer` in EPSG:4326 with the
/// integer field `id_no`, and the features in the given order.
pub fn write_fixture(
    output_dir: &Path,
    name: &str,
    kind: Option<GeometryKind>,
    features: &[FixtureFeature],
) -> Result<PathBuf> {
    if kind.is_none() && !features.is_empty() {
        return Err(Error::MissingGeometryKind.in_fixture(name, Stage::Layer));
    }

    let path = fixture_path(output_dir, name);
    let mut package = GeoPackage::create(&path).map_err(|e| e.in_fixture(name, Stage::Create))?;

    let Some(kind) = kind else {
        package
            .finalize()
            .map_err(|e| e.in_fixture(name, Stage::Finalize))?;
        info!("Wrote {} (no layers)", path.display());
        return Ok(path);
    };

    let layer = package
        .create_layer(LAYER_NAME, kind, &gpkg::WGS84)
        .map_err(|e| e.in_fixture(name, Stage::Layer))?;
    package
        .define_field(layer, ID_FIELD, FieldType::Integer)
        .map_err(|e| e.in_fixture(name, Stage::Field))?;

    for feature in features {
        package
            .create_feature(
                layer,
                &feature.geometry,
                &[(ID_FIELD, FieldValue::Integer(feature.id_no))],
            )
            .map_err(|e| e.in_fixture(name, Stage::Feature))?;
    }

    package
        .finalize()
        .map_err(|e| e.in_fixture(name, Stage::Finalize))?;
    info!(
        "Wrote {} ({} feature(s), {})",
        path.display(),
        features.len(),
        kind
    );
    Ok(path)
}
