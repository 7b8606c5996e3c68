//! Ordered column schema for Strata tables.

use super::column::Column;
use crate::error::{Error, Result};
use crate::types::ColumnType;
use alloc::string::String;
use alloc::vec::Vec;

/// Ordered list of typed columns.
///
/// Column names are not required to be unique; columns are addressed by
/// index. Removing a column shifts the indices of later columns down by one.
/// Table columns carry a nested schema describing their subtables, which can
/// be filled in before any row exists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnSchema {
    columns: Vec<Column>,
}

impl ColumnSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Appends a column and returns its index.
    pub fn add_column(&mut self, column_type: ColumnType, name: impl Into<String>) -> usize {
        self.columns.push(Column::new(name, column_type));
        self.columns.len() - 1
    }

    /// Appends a Table column and returns its nested schema for population.
    pub fn add_subtable_column(&mut self, name: impl Into<String>) -> &mut ColumnSchema {
        self.columns.push(Column::table(name, ColumnSchema::new()));
        let index = self.columns.len() - 1;
        self.columns[index].table_subschema_mut()
    }

    /// Removes the column at `index`.
    pub fn remove_column(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.columns.remove(index);
        Ok(())
    }

    /// Renames the column at `index`.
    pub fn rename_column(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        self.check_index(index)?;
        self.columns[index].set_name(name.into());
        Ok(())
    }

    /// Returns the number of columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the schema has no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the column definitions in order.
    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Gets a column definition by index.
    pub fn column(&self, index: usize) -> Result<&Column> {
        self.columns
            .get(index)
            .ok_or_else(|| Error::column_out_of_range(index, self.columns.len()))
    }

    /// Returns the name of the column at `index`.
    pub fn column_name(&self, index: usize) -> Result<&str> {
        self.column(index).map(Column::name)
    }

    /// Returns the kind of the column at `index`.
    pub fn column_type(&self, index: usize) -> Result<ColumnType> {
        self.column(index).map(Column::column_type)
    }

    /// Returns the index of the first column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    /// Returns the nested schema of the Table column at `index`.
    pub fn subschema(&self, index: usize) -> Result<&ColumnSchema> {
        let column = self.column(index)?;
        column
            .subschema()
            .ok_or(Error::type_mismatch(ColumnType::Table, column.column_type()))
    }

    /// Returns the nested schema of the Table column at `index` for mutation.
    pub fn subschema_mut(&mut self, index: usize) -> Result<&mut ColumnSchema> {
        self.check_index(index)?;
        let column = &mut self.columns[index];
        let got = column.column_type();
        column
            .subschema_mut()
            .ok_or(Error::type_mismatch(ColumnType::Table, got))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.columns.len() {
            return Err(Error::column_out_of_range(index, self.columns.len()));
        }
        Ok(())
    }
}
