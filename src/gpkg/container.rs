use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use geo::{Coord, Rect};
use log::{debug, warn};
use rusqlite::{Connection, ToSql, params};

use crate::gpkg::field::{FieldDefn, FieldType, FieldValue};
use crate::gpkg::schema::{self, quote_identifier};
use crate::gpkg::srs::{self, SpatialReference};
use crate::gpkg::wkb;
use crate::utils::error::{Error, Result};
use crate::utils::geometry::{GeoGeometry, GeometryKind};

pub const FID_COLUMN: &str = "fid";
pub const GEOMETRY_COLUMN: &str = "geom";

/// Refers to a layer created through [`GeoPackage::create_layer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerHandle(usize);

#[derive(Debug)]
struct LayerState {
    name: String,
    kind: GeometryKind,
    srs_id: i32,
    fields: Vec<FieldDefn>,
    feature_count: u64,
    extent: Option<Rect<f64>>,
}

impl LayerState {
    fn field(&self, name: &str) -> Option<&FieldDefn> {
        self.fields.iter().find(|field| field.name == name)
    }

    fn extend_extent(&mut self, rect: Rect<f64>) {
        self.extent = Some(match self.extent {
            None => rect,
            Some(extent) => Rect::new(
                Coord {
                    x: extent.min().x.min(rect.min().x),
                    y: extent.min().y.min(rect.min().y),
                },
                Coord {
                    x: extent.max().x.max(rect.max().x),
                    y: extent.max().y.max(rect.max().y),
                },
            ),
        });
    }
}

/// A GeoPackage file being written.
///
/// The handle owns the SQLite connection. [`GeoPackage::finalize`] records the
/// layer extents and closes the file; a handle dropped on an error path is
/// finalized on a best-effort basis.
#[derive(Debug)]
pub struct GeoPackage {
    path: PathBuf,
    conn: Option<Connection>,
    layers: Vec<LayerState>,
}

impl GeoPackage {
    /// Create a fresh GeoPackage at `path`, replacing any existing file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        match fs::remove_file(&path) {
            Ok(()) => debug!("Removed previous {}", path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "application_id", schema::APPLICATION_ID)?;
        conn.pragma_update(None, "user_version", schema::USER_VERSION)?;
        conn.execute(schema::CREATE_SPATIAL_REF_SYS, [])?;
        conn.execute(schema::CREATE_CONTENTS, [])?;
        conn.execute(schema::CREATE_GEOMETRY_COLUMNS, [])?;

        let package = Self {
            path,
            conn: Some(conn),
            layers: Vec::new(),
        };
        for srs in &srs::REQUIRED {
            package.register_srs(srs)?;
        }
        debug!("Created {}", package.path.display());
        Ok(package)
    }

    fn conn(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or(Error::Finalized)
    }

    fn layer(&self, handle: LayerHandle) -> Result<&LayerState> {
        self.layers.get(handle.0).ok_or(Error::UnknownLayer(handle.0))
    }

    fn layer_mut(&mut self, handle: LayerHandle) -> Result<&mut LayerState> {
        self.layers
            .get_mut(handle.0)
            .ok_or(Error::UnknownLayer(handle.0))
    }

    fn register_srs(&self, srs: &SpatialReference) -> Result<()> {
        let conn = self.conn()?;
        let known: i64 = conn.query_row(
            "SELECT count(*) FROM gpkg_spatial_ref_sys WHERE srs_id = ?1",
            [srs.srs_id],
            |row| row.get(0),
        )?;
        if known == 0 {
            conn.execute(
                schema::INSERT_SPATIAL_REF_SYS,
                params![
                    srs.srs_name,
                    srs.srs_id,
                    srs.organization,
                    srs.organization_coordsys_id,
                    srs.definition,
                    srs.description,
                ],
            )?;
        }
        Ok(())
    }

    /// Create a feature table and register it in the metadata tables.
    pub fn create_layer(
        &mut self,
        name: &str,
        kind: GeometryKind,
        srs: &SpatialReference,
    ) -> Result<LayerHandle> {
        if self.layers.iter().any(|layer| layer.name == name) {
            return Err(Error::DuplicateLayer(name.to_string()));
        }
        self.register_srs(srs)?;

        let conn = self.conn()?;
        conn.execute(
            &format!(
                "CREATE TABLE {} ({} INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL, {} {})",
                quote_identifier(name),
                quote_identifier(FID_COLUMN),
                quote_identifier(GEOMETRY_COLUMN),
                kind.gpkg_name(),
            ),
            [],
        )?;
        conn.execute(schema::INSERT_CONTENTS, params![name, srs.srs_id])?;
        conn.execute(
            schema::INSERT_GEOMETRY_COLUMNS,
            params![name, GEOMETRY_COLUMN, kind.gpkg_name(), srs.srs_id],
        )?;

        debug!("Created layer {} ({}, EPSG:{})", name, kind, srs.srs_id);
        self.layers.push(LayerState {
            name: name.to_string(),
            kind,
            srs_id: srs.srs_id,
            fields: Vec::new(),
            feature_count: 0,
            extent: None,
        });
        Ok(LayerHandle(self.layers.len() - 1))
    }

    /// Add an attribute column. Only allowed before the first feature.
    pub fn define_field(
        &mut self,
        layer: LayerHandle,
        name: &str,
        field_type: FieldType,
    ) -> Result<()> {
        let state = self.layer(layer)?;
        if state.feature_count > 0 {
            return Err(Error::SchemaFrozen(state.name.clone()));
        }
        if state.field(name).is_some() || name == FID_COLUMN || name == GEOMETRY_COLUMN {
            return Err(Error::DuplicateField(name.to_string()));
        }

        self.conn()?.execute(
            &format!(
                "ALTER TABLE {} ADD COLUMN {} {}",
                quote_identifier(&state.name),
                quote_identifier(name),
                field_type.sql_type(),
            ),
            [],
        )?;

        debug!("Defined field {} {} on {}", name, field_type.name(), state.name);
        self.layer_mut(layer)?.fields.push(FieldDefn {
            name: name.to_string(),
            field_type,
        });
        Ok(())
    }

    /// Append a feature and return its fid.
    pub fn create_feature(
        &mut self,
        layer: LayerHandle,
        geometry: &GeoGeometry,
        values: &[(&str, FieldValue)],
    ) -> Result<i64> {
        let state = self.layer(layer)?;
        if geometry.kind() != state.kind {
            return Err(Error::GeometryKindMismatch {
                layer: state.name.clone(),
                expected: state.kind,
                got: geometry.kind(),
            });
        }

        let mut columns = vec![quote_identifier(GEOMETRY_COLUMN)];
        for (name, value) in values {
            let field = state
                .field(name)
                .ok_or_else(|| Error::UnknownField(name.to_string()))?;
            if field.field_type != value.field_type() {
                return Err(Error::FieldTypeMismatch {
                    field: name.to_string(),
                    expected: field.field_type.name(),
                    got: value.field_type().name(),
                });
            }
            columns.push(quote_identifier(name));
        }

        let blob = wkb::encode(geometry, state.srs_id)?;
        let placeholders = (1..=columns.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote_identifier(&state.name),
            columns.join(", "),
            placeholders,
        );

        let mut bound: Vec<&dyn ToSql> = Vec::with_capacity(columns.len());
        bound.push(&blob);
        bound.extend(values.iter().map(|(_, value)| value as &dyn ToSql));

        let conn = self.conn()?;
        conn.execute(&sql, bound.as_slice())?;
        let fid = conn.last_insert_rowid();

        let state = self.layer_mut(layer)?;
        state.feature_count += 1;
        if let Some(rect) = geometry.bounding_rect() {
            state.extend_extent(rect);
        }
        debug!("Inserted feature {} into {}", fid, state.name);
        Ok(fid)
    }

    /// Record layer extents and close the file.
    pub fn finalize(mut self) -> Result<()> {
        self.finish()
    }

    fn finish(&mut self) -> Result<()> {
        let conn = self.conn.take().ok_or(Error::Finalized)?;
        for layer in &self.layers {
            if let Some(extent) = layer.extent {
                conn.execute(
                    schema::UPDATE_CONTENTS_EXTENT,
                    params![
                        layer.name,
                        extent.min().x,
                        extent.min().y,
                        extent.max().x,
                        extent.max().y,
                    ],
                )?;
            }
        }
        conn.close().map_err(|(_, e)| Error::from(e))?;
        debug!(
            "Finalized {} with {} layer(s)",
            self.path.display(),
            self.layers.len()
        );
        Ok(())
    }
}

impl Drop for GeoPackage {
    fn drop(&mut self) {
        if self.conn.is_some() {
            warn!("{} dropped before finalize, closing it now", self.path.display());
            if let Err(e) = self.finish() {
                warn!("Failed to finalize {}: {}", self.path.display(), e);
            }
        }
    }
}
