//! Named table collections.
//!
//! This module provides the `Group` struct, which owns a set of top-level
//! tables addressed by name.

use crate::table::Table;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use strata_core::schema::ColumnSchema;
use strata_core::{Error, Result};
use tracing::debug;

/// Table storage backend: HashMap (O(1) lookup) or BTreeMap (ordered names).
#[cfg(feature = "hash-store")]
type TableMap = hashbrown::HashMap<String, Table>;
#[cfg(not(feature = "hash-store"))]
type TableMap = alloc::collections::BTreeMap<String, Table>;

/// A collection of named top-level tables.
#[derive(Debug, Default)]
pub struct Group {
    /// Table name → Table mapping.
    tables: TableMap,
}

impl Group {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self {
            tables: TableMap::default(),
        }
    }

    /// Adds an empty table without columns.
    pub fn add_table(&mut self, name: impl Into<String>) -> Result<&mut Table> {
        self.add_table_with_schema(name, ColumnSchema::new())
    }

    /// Adds an empty table with the given schema.
    pub fn add_table_with_schema(
        &mut self,
        name: impl Into<String>,
        schema: ColumnSchema,
    ) -> Result<&mut Table> {
        let name = name.into();
        if self.tables.contains_key(&name) {
            return Err(Error::invalid_operation(format!(
                "Table already exists: {}",
                name
            )));
        }
        debug!(table = %name, columns = schema.len(), "added table");
        Ok(self
            .tables
            .entry(name)
            .or_insert_with(|| Table::with_schema(schema)))
    }

    /// Removes a table and everything it owns.
    pub fn remove_table(&mut self, name: &str) -> Result<()> {
        if self.tables.remove(name).is_none() {
            return Err(Error::table_not_found(name));
        }
        debug!(table = name, "removed table");
        Ok(())
    }

    /// Gets a reference to a table.
    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Gets a mutable reference to a table.
    pub fn get_table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.get_mut(name)
    }

    /// Checks if a table exists.
    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Returns the number of tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Returns all table names.
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.keys().map(|s| s.as_str()).collect()
    }

    /// Returns the total row count across all top-level tables.
    pub fn total_row_count(&self) -> usize {
        self.tables.values().map(|t| t.len()).sum()
    }

    /// Removes all rows from every table, keeping the tables.
    pub fn clear(&mut self) {
        for table in self.tables.values_mut() {
            table.clear();
        }
    }
}
