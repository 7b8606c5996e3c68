//! Column type definitions for Strata tables.
//!
//! `ColumnType` is the closed set of kind tags shared by column schemas and
//! Mixed values.

use core::fmt;

/// Kind of a column, or the active tag of a Mixed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// 64-bit signed integer
    Integer,
    /// Boolean (true/false)
    Boolean,
    /// UTF-8 string
    String,
    /// Binary blob
    Binary,
    /// Date and time stored as Unix timestamp (milliseconds)
    DateTime,
    /// 64-bit floating point number
    Double,
    /// 32-bit floating point number
    Float,
    /// Dynamically typed cell, one of the scalar kinds per row
    Mixed,
    /// Nested table
    Table,
}

impl ColumnType {
    /// All scalar kinds, i.e. everything a Mixed cell can hold besides the
    /// reserved table tag.
    pub const SCALARS: [ColumnType; 7] = [
        ColumnType::Integer,
        ColumnType::Boolean,
        ColumnType::String,
        ColumnType::Binary,
        ColumnType::DateTime,
        ColumnType::Double,
        ColumnType::Float,
    ];

    /// Lowercase name used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Boolean => "boolean",
            ColumnType::String => "string",
            ColumnType::Binary => "binary",
            ColumnType::DateTime => "datetime",
            ColumnType::Double => "double",
            ColumnType::Float => "float",
            ColumnType::Mixed => "mixed",
            ColumnType::Table => "table",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
