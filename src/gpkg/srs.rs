/// A row of `gpkg_spatial_ref_sys`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpatialReference {
    pub srs_name: &'static str,
    pub srs_id: i32,
    pub organization: &'static str,
    pub organization_coordsys_id: i32,
    pub definition: &'static str,
    pub description: &'static str,
}

/// EPSG:4326, geographic WGS 84 in degrees.
pub const WGS84: SpatialReference = SpatialReference {
    srs_name: "WGS 84 geodetic",
    srs_id: 4326,
    organization: "EPSG",
    organization_coordsys_id: 4326,
    definition: concat!(
        r#"GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563,"#,
        r#"AUTHORITY["EPSG","7030"]],AUTHORITY["EPSG","6326"]],"#,
        r#"PRIMEM["Greenwich",0,AUTHORITY["EPSG","8901"]],"#,
        r#"UNIT["degree",0.0174532925199433,AUTHORITY["EPSG","9122"]],"#,
        r#"AXIS["Latitude",NORTH],AXIS["Longitude",EAST],AUTHORITY["EPSG","4326"]]"#,
    ),
    description: "longitude/latitude coordinates in decimal degrees on the WGS 84 spheroid",
};

const UNDEFINED_CARTESIAN: SpatialReference = SpatialReference {
    srs_name: "Undefined cartesian SRS",
    srs_id: -1,
    organization: "NONE",
    organization_coordsys_id: -1,
    definition: "undefined",
    description: "undefined cartesian coordinate reference system",
};

const UNDEFINED_GEOGRAPHIC: SpatialReference = SpatialReference {
    srs_name: "Undefined geographic SRS",
    srs_id: 0,
    organization: "NONE",
    organization_coordsys_id: 0,
    definition: "undefined",
    description: "undefined geographic coordinate reference system",
};

/// Rows every GeoPackage must contain.
pub const REQUIRED: [SpatialReference; 3] = [UNDEFINED_CARTESIAN, UNDEFINED_GEOGRAPHIC, WGS84];
