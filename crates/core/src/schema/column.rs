//! Column definition for Strata schemas.

use super::column_schema::ColumnSchema;
use crate::types::ColumnType;
use alloc::string::String;

/// A column definition in a table schema.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    /// Column name. Not required to be unique.
    name: String,
    /// Kind of the column.
    column_type: ColumnType,
    /// Nested schema, only meaningful for `ColumnType::Table` columns.
    subschema: ColumnSchema,
}

impl Column {
    /// Creates a new column definition.
    ///
    /// Table columns start with an empty nested schema.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            subschema: ColumnSchema::new(),
        }
    }

    /// Creates a Table column with the given nested schema.
    pub fn table(name: impl Into<String>, subschema: ColumnSchema) -> Self {
        Self {
            name: name.into(),
            column_type: ColumnType::Table,
            subschema,
        }
    }

    /// Returns the column name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Returns the column kind.
    #[inline]
    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    /// Returns the nested schema of a Table column.
    #[inline]
    pub fn subschema(&self) -> Option<&ColumnSchema> {
        match self.column_type {
            ColumnType::Table => Some(&self.subschema),
            _ => None,
        }
    }

    pub(crate) fn subschema_mut(&mut self) -> Option<&mut ColumnSchema> {
        match self.column_type {
            ColumnType::Table => Some(&mut self.subschema),
            _ => None,
        }
    }

    /// Nested schema of a column known to be Table-kind.
    pub(crate) fn table_subschema_mut(&mut self) -> &mut ColumnSchema {
        debug_assert_eq!(self.column_type, ColumnType::Table);
        &mut self.subschema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_new() {
        let col = Column::new("num", ColumnType::Integer);
        assert_eq!(col.name(), "num");
        assert_eq!(col.column_type(), ColumnType::Integer);
        assert!(col.subschema().is_none());
    }

    #[test]
    fn test_table_column_has_subschema() {
        let col = Column::new("sub", ColumnType::Table);
        assert_eq!(col.subschema().map(|s| s.len()), Some(0));
    }
}
