//! Mandatory GeoPackage metadata tables.

/// "GPKG" in ASCII.
pub const APPLICATION_ID: i32 = 0x4750_4B47;
/// GeoPackage 1.4.0
pub const USER_VERSION: i32 = 10400;

pub const CREATE_SPATIAL_REF_SYS: &str = "CREATE TABLE gpkg_spatial_ref_sys (
    srs_name TEXT NOT NULL,
    srs_id INTEGER PRIMARY KEY,
    organization TEXT NOT NULL,
    organization_coordsys_id INTEGER NOT NULL,
    definition TEXT NOT NULL,
    description TEXT
)";

pub const CREATE_CONTENTS: &str = "CREATE TABLE gpkg_contents (
    table_name TEXT NOT NULL PRIMARY KEY,
    data_type TEXT NOT NULL,
    identifier TEXT UNIQUE,
    description TEXT DEFAULT '',
    last_change DATETIME NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ','now')),
    min_x DOUBLE,
    min_y DOUBLE,
    max_x DOUBLE,
    max_y DOUBLE,
    srs_id INTEGER,
    CONSTRAINT fk_gc_r_srs_id FOREIGN KEY (srs_id) REFERENCES gpkg_spatial_ref_sys(srs_id)
)";

pub const CREATE_GEOMETRY_COLUMNS: &str = "CREATE TABLE gpkg_geometry_columns (
    table_name TEXT NOT NULL,
    column_name TEXT NOT NULL,
    geometry_type_name TEXT NOT NULL,
    srs_id INTEGER NOT NULL,
    z TINYINT NOT NULL,
    m TINYINT NOT NULL,
    CONSTRAINT pk_geom_cols PRIMARY KEY (table_name, column_name),
    CONSTRAINT uk_gc_table_name UNIQUE (table_name),
    CONSTRAINT fk_gc_tn FOREIGN KEY (table_name) REFERENCES gpkg_contents(table_name),
    CONSTRAINT fk_gc_srs FOREIGN KEY (srs_id) REFERENCES gpkg_spatial_ref_sys (srs_id)
)";

pub const INSERT_SPATIAL_REF_SYS: &str = "INSERT INTO gpkg_spatial_ref_sys
    (srs_name, srs_id, organization, organization_coordsys_id, definition, description)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

pub const INSERT_CONTENTS: &str = "INSERT INTO gpkg_contents
    (table_name, data_type, identifier, description, srs_id)
    VALUES (?1, 'features', ?1, '', ?2)";

pub const INSERT_GEOMETRY_COLUMNS: &str = "INSERT INTO gpkg_geometry_columns
    (table_name, column_name, geometry_type_name, srs_id, z, m)
    VALUES (?1, ?2, ?3, ?4, 0, 0)";

pub const UPDATE_CONTENTS_EXTENT: &str = "UPDATE gpkg_contents
    SET min_x = ?2, min_y = ?3, max_x = ?4, max_y = ?5
    WHERE table_name = ?1";

/// Quote an SQL identifier, doubling embedded quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
