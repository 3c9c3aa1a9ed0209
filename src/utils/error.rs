use std::fmt;

use thiserror::Error;

use crate::utils::geometry::GeometryKind;

pub type Result<T> = std::result::Result<T, Error>;

/// The step of a fixture's construction that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Create,
    Layer,
    Field,
    Feature,
    Finalize,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Create => "create",
            Stage::Layer => "layer",
            Stage::Field => "field",
            Stage::Feature => "feature",
            Stage::Finalize => "finalize",
        };
        f.write_str(name)
    }
}

// Define error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("WKB error: {0}")]
    Wkb(String),
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Field {field} expects {expected}, got {got}")]
    FieldTypeMismatch {
        field: String,
        expected: &'static str,
        got: &'static str,
    },
    #[error("Field already defined: {0}")]
    DuplicateField(String),
    #[error("Schema of layer {0} is frozen once features exist")]
    SchemaFrozen(String),
    #[error("Layer already exists: {0}")]
    DuplicateLayer(String),
    #[error("No layer with handle {0} in this container")]
    UnknownLayer(usize),
    #[error("Layer {layer} holds {expected} geometries, got {got}")]
    GeometryKindMismatch {
        layer: String,
        expected: GeometryKind,
        got: GeometryKind,
    },
    #[error("Features supplied without a geometry kind")]
    MissingGeometryKind,
    #[error("Container already finalized")]
    Finalized,
    #[error("Fixture {fixture} failed at {stage} stage: {source}")]
    Fixture {
        fixture: String,
        stage: Stage,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach the fixture name and construction stage to an error.
    pub fn in_fixture(self, fixture: &str, stage: Stage) -> Self {
        Error::Fixture {
            fixture: fixture.to_string(),
            stage,
            source: Box::new(self),
        }
    }
}
