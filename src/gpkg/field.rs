use rusqlite::ToSql;
use rusqlite::types::ToSqlOutput;

/// Attribute column types a layer can define.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// 32-bit integer, stored as `MEDIUMINT`.
    Integer,
    Real,
    Text,
}

impl FieldType {
    pub fn sql_type(&self) -> &'static str {
        match self {
            FieldType::Integer => "MEDIUMINT",
            FieldType::Real => "REAL",
            FieldType::Text => "TEXT",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::Real => "real",
            FieldType::Text => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i32),
    Real(f64),
    Text(String),
}

impl FieldValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Integer(_) => FieldType::Integer,
            FieldValue::Real(_) => FieldType::Real,
            FieldValue::Text(_) => FieldType::Text,
        }
    }
}

impl ToSql for FieldValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            FieldValue::Integer(value) => value.to_sql(),
            FieldValue::Real(value) => value.to_sql(),
            FieldValue::Text(value) => value.to_sql(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefn {
    pub name: String,
    pub field_type: FieldType,
}
