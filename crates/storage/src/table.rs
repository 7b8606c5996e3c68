//! Columnar table storage for Strata.
//!
//! This module provides the `Table` struct: a row/column grid with one
//! homogeneous storage vector per column, Mixed cells, and owned subtables in
//! Table-kind columns.

use crate::column::ColumnData;
use crate::handle::{RowId, SubtableHandle};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use strata_core::schema::ColumnSchema;
use strata_core::{ColumnType, Error, Mixed, Result};
use tracing::{debug, trace, warn};

/// A typed, column-oriented table.
///
/// Every column holds exactly `len()` entries. Subtables stored in Table-kind
/// columns are owned by the parent; references returned by
/// [`get_subtable`](Table::get_subtable) borrow from it.
///
/// A subtable's schema is the nested schema of its parent column. Its rows
/// and cells can be changed freely, but its columns can only change through
/// the parent's [`update_from_schema`](Table::update_from_schema), which keeps
/// every sibling in the column alike.
#[derive(Clone, Debug)]
pub struct Table {
    schema: ColumnSchema,
    columns: Vec<ColumnData>,
    /// Identity of each row, used to detect stale subtable handles.
    row_ids: Vec<RowId>,
    next_row_id: RowId,
    /// Bumped on every structural schema change.
    schema_epoch: u64,
    /// Set for subtables living in a Table column.
    subtable: bool,
}

impl Table {
    /// Creates a table without columns.
    pub fn new() -> Self {
        Self::with_schema(ColumnSchema::new())
    }

    /// Creates an empty table with the given schema.
    pub fn with_schema(schema: ColumnSchema) -> Self {
        let columns = schema
            .columns()
            .iter()
            .map(|c| ColumnData::filled(c, 0))
            .collect();
        Self {
            schema,
            columns,
            row_ids: Vec::new(),
            next_row_id: 0,
            schema_epoch: 0,
            subtable: false,
        }
    }

    /// Creates an empty subtable for a Table column with nested `schema`.
    pub(crate) fn new_subtable(schema: ColumnSchema) -> Self {
        Self {
            subtable: true,
            ..Self::with_schema(schema)
        }
    }

    /// Returns true if this table lives in a parent's Table column, in which
    /// case its columns cannot be changed directly.
    #[inline]
    pub fn is_subtable(&self) -> bool {
        self.subtable
    }

    /// Returns the schema.
    #[inline]
    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    /// Returns the number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.row_ids.len()
    }

    /// Returns true if the table has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.row_ids.is_empty()
    }

    /// Returns the number of columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_name(&self, column: usize) -> Result<&str> {
        self.schema.column_name(column)
    }

    pub fn column_type(&self, column: usize) -> Result<ColumnType> {
        self.schema.column_type(column)
    }

    /// Returns the index of the first column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.schema.column_index(name)
    }

    /// Returns the nested schema of a Table column.
    pub fn subschema(&self, column: usize) -> Result<&ColumnSchema> {
        self.schema.subschema(column)
    }

    // ---- schema mutation ----

    /// Appends a column, filling existing rows with the kind's default.
    /// Returns the new column's index.
    pub fn add_column(
        &mut self,
        column_type: ColumnType,
        name: impl Into<String>,
    ) -> Result<usize> {
        self.check_schema_mutable()?;
        let index = self.schema.add_column(column_type, name);
        self.push_column_storage(index);
        debug!(column = index, kind = %column_type, rows = self.len(), "added column");
        Ok(index)
    }

    /// Appends a Table column whose subtables follow `subschema`.
    /// Returns the new column's index.
    pub fn add_subtable_column(
        &mut self,
        name: impl Into<String>,
        subschema: ColumnSchema,
    ) -> Result<usize> {
        self.check_schema_mutable()?;
        *self.schema.add_subtable_column(name) = subschema;
        let index = self.schema.len() - 1;
        self.push_column_storage(index);
        debug!(column = index, rows = self.len(), "added subtable column");
        Ok(index)
    }

    fn push_column_storage(&mut self, index: usize) {
        let rows = self.len();
        let column = &self.schema.columns()[index];
        self.columns.push(ColumnData::filled(column, rows));
        self.schema_epoch += 1;
    }

    /// Removes a column and its data. Later columns shift down by one.
    pub fn remove_column(&mut self, column: usize) -> Result<()> {
        self.check_schema_mutable()?;
        self.schema.remove_column(column)?;
        self.columns.remove(column);
        self.schema_epoch += 1;
        debug!(column, "removed column");
        Ok(())
    }

    pub fn rename_column(&mut self, column: usize, name: impl Into<String>) -> Result<()> {
        self.check_schema_mutable()?;
        self.schema.rename_column(column, name)?;
        self.schema_epoch += 1;
        Ok(())
    }

    /// Replaces the table's schema, reconciling existing data by position.
    ///
    /// Columns whose kind is unchanged keep their data (Table columns apply
    /// the new nested schema to every existing subtable). Retyped columns are
    /// reset to defaults, new columns are filled with defaults and surplus
    /// columns are dropped.
    ///
    /// Fails with `InvalidOperation` on a subtable; apply the change to the
    /// parent's schema instead.
    pub fn update_from_schema(&mut self, schema: &ColumnSchema) -> Result<()> {
        self.check_schema_mutable()?;
        self.reconcile(schema);
        Ok(())
    }

    fn reconcile(&mut self, schema: &ColumnSchema) {
        let rows = self.len();
        let target = schema.columns();

        if self.columns.len() > target.len() {
            if rows > 0 {
                warn!(
                    dropped = self.columns.len() - target.len(),
                    rows, "schema update drops populated columns"
                );
            }
            self.columns.truncate(target.len());
        }

        for (index, column) in target.iter().enumerate() {
            match self.columns.get_mut(index) {
                Some(data) if data.column_type() == column.column_type() => {
                    if let (ColumnData::Table(tables), Some(subschema)) =
                        (data, column.subschema())
                    {
                        for table in tables.iter_mut() {
                            table.reconcile(subschema);
                        }
                    }
                }
                Some(data) => {
                    if rows > 0 {
                        warn!(
                            column = index,
                            from = %data.column_type(),
                            to = %column.column_type(),
                            rows,
                            "schema update resets retyped column"
                        );
                    }
                    *data = ColumnData::filled(column, rows);
                }
                None => self.columns.push(ColumnData::filled(column, rows)),
            }
        }

        self.schema = schema.clone();
        self.schema_epoch += 1;
        debug!(columns = target.len(), rows, "applied schema");
    }

    fn check_schema_mutable(&self) -> Result<()> {
        if self.subtable {
            return Err(Error::invalid_operation(
                "subtable columns follow the parent column's nested schema",
            ));
        }
        Ok(())
    }

    // ---- rows ----

    /// Appends a row of default values and returns its index.
    pub fn add_empty_row(&mut self) -> usize {
        for (column, data) in self.schema.columns().iter().zip(self.columns.iter_mut()) {
            data.push_default(column);
        }
        self.push_row_id()
    }

    /// Appends `count` rows of default values and returns the index of the
    /// first one.
    pub fn add_empty_rows(&mut self, count: usize) -> usize {
        let first = self.len();
        for _ in 0..count {
            self.add_empty_row();
        }
        first
    }

    /// Appends a row built from one value per column and returns its index.
    ///
    /// Scalar columns require a value of the same kind, Mixed columns accept
    /// any value and Table columns accept only `Mixed::Table`, which creates
    /// an empty subtable. Nothing is appended unless every value fits.
    pub fn add_row(&mut self, values: Vec<Mixed>) -> Result<usize> {
        if values.len() != self.columns.len() {
            return Err(Error::invalid_operation(format!(
                "row has {} values, table has {} columns",
                values.len(),
                self.columns.len()
            )));
        }
        for (data, value) in self.columns.iter().zip(values.iter()) {
            data.check_value(value)?;
        }
        for ((column, data), value) in self
            .schema
            .columns()
            .iter()
            .zip(self.columns.iter_mut())
            .zip(values)
        {
            data.push_value(column, value)?;
        }
        Ok(self.push_row_id())
    }

    fn push_row_id(&mut self) -> usize {
        self.row_ids.push(self.next_row_id);
        self.next_row_id += 1;
        debug_assert!(self.columns.iter().all(|c| c.len() == self.row_ids.len()));
        self.row_ids.len() - 1
    }

    /// Removes the last row, releasing any subtables it owns.
    pub fn remove_last(&mut self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::EmptyTable);
        }
        for data in self.columns.iter_mut() {
            data.pop();
        }
        self.row_ids.pop();
        debug!(rows = self.len(), "removed last row");
        Ok(())
    }

    /// Removes the row at `row`. Later rows shift down by one.
    pub fn remove(&mut self, row: usize) -> Result<()> {
        self.check_row(row)?;
        for data in self.columns.iter_mut() {
            data.remove(row);
        }
        self.row_ids.remove(row);
        debug!(row, rows = self.len(), "removed row");
        Ok(())
    }

    /// Removes all rows.
    pub fn clear(&mut self) {
        for data in self.columns.iter_mut() {
            data.clear();
        }
        self.row_ids.clear();
        debug!("cleared table");
    }

    // ---- typed accessors ----

    pub fn get_integer(&self, column: usize, row: usize) -> Result<i64> {
        match self.cell(column, row)? {
            ColumnData::Integer(v) => Ok(v[row]),
            other => Err(Error::type_mismatch(ColumnType::Integer, other.column_type())),
        }
    }

    pub fn set_integer(&mut self, column: usize, row: usize, value: i64) -> Result<()> {
        match self.cell_mut(column, row)? {
            ColumnData::Integer(v) => v[row] = value,
            other => return Err(Error::type_mismatch(ColumnType::Integer, other.column_type())),
        }
        Ok(())
    }

    pub fn get_boolean(&self, column: usize, row: usize) -> Result<bool> {
        match self.cell(column, row)? {
            ColumnData::Boolean(v) => Ok(v[row]),
            other => Err(Error::type_mismatch(ColumnType::Boolean, other.column_type())),
        }
    }

    pub fn set_boolean(&mut self, column: usize, row: usize, value: bool) -> Result<()> {
        match self.cell_mut(column, row)? {
            ColumnData::Boolean(v) => v[row] = value,
            other => return Err(Error::type_mismatch(ColumnType::Boolean, other.column_type())),
        }
        Ok(())
    }

    pub fn get_string(&self, column: usize, row: usize) -> Result<&str> {
        match self.cell(column, row)? {
            ColumnData::String(v) => Ok(v[row].as_str()),
            other => Err(Error::type_mismatch(ColumnType::String, other.column_type())),
        }
    }

    pub fn set_string(
        &mut self,
        column: usize,
        row: usize,
        value: impl Into<String>,
    ) -> Result<()> {
        match self.cell_mut(column, row)? {
            ColumnData::String(v) => v[row] = value.into(),
            other => return Err(Error::type_mismatch(ColumnType::String, other.column_type())),
        }
        Ok(())
    }

    pub fn get_binary(&self, column: usize, row: usize) -> Result<&[u8]> {
        match self.cell(column, row)? {
            ColumnData::Binary(v) => Ok(v[row].as_slice()),
            other => Err(Error::type_mismatch(ColumnType::Binary, other.column_type())),
        }
    }

    pub fn set_binary(
        &mut self,
        column: usize,
        row: usize,
        value: impl Into<Vec<u8>>,
    ) -> Result<()> {
        match self.cell_mut(column, row)? {
            ColumnData::Binary(v) => v[row] = value.into(),
            other => return Err(Error::type_mismatch(ColumnType::Binary, other.column_type())),
        }
        Ok(())
    }

    /// Returns a DateTime cell as milliseconds since the Unix epoch.
    pub fn get_datetime(&self, column: usize, row: usize) -> Result<i64> {
        match self.cell(column, row)? {
            ColumnData::DateTime(v) => Ok(v[row]),
            other => Err(Error::type_mismatch(ColumnType::DateTime, other.column_type())),
        }
    }

    pub fn set_datetime(&mut self, column: usize, row: usize, millis: i64) -> Result<()> {
        match self.cell_mut(column, row)? {
            ColumnData::DateTime(v) => v[row] = millis,
            other => return Err(Error::type_mismatch(ColumnType::DateTime, other.column_type())),
        }
        Ok(())
    }

    pub fn get_double(&self, column: usize, row: usize) -> Result<f64> {
        match self.cell(column, row)? {
            ColumnData::Double(v) => Ok(v[row]),
            other => Err(Error::type_mismatch(ColumnType::Double, other.column_type())),
        }
    }

    pub fn set_double(&mut self, column: usize, row: usize, value: f64) -> Result<()> {
        match self.cell_mut(column, row)? {
            ColumnData::Double(v) => v[row] = value,
            other => return Err(Error::type_mismatch(ColumnType::Double, other.column_type())),
        }
        Ok(())
    }

    pub fn get_float(&self, column: usize, row: usize) -> Result<f32> {
        match self.cell(column, row)? {
            ColumnData::Float(v) => Ok(v[row]),
            other => Err(Error::type_mismatch(ColumnType::Float, other.column_type())),
        }
    }

    pub fn set_float(&mut self, column: usize, row: usize, value: f32) -> Result<()> {
        match self.cell_mut(column, row)? {
            ColumnData::Float(v) => v[row] = value,
            other => return Err(Error::type_mismatch(ColumnType::Float, other.column_type())),
        }
        Ok(())
    }

    // ---- mixed accessors ----

    /// Replaces the value of a Mixed cell.
    pub fn set_mixed(&mut self, column: usize, row: usize, value: Mixed) -> Result<()> {
        match self.cell_mut(column, row)? {
            ColumnData::Mixed(v) => v[row] = value,
            other => return Err(Error::type_mismatch(ColumnType::Mixed, other.column_type())),
        }
        Ok(())
    }

    /// Returns a copy of a Mixed cell's value.
    pub fn get_mixed(&self, column: usize, row: usize) -> Result<Mixed> {
        self.mixed(column, row).cloned()
    }

    /// Borrows a Mixed cell's value.
    pub fn mixed(&self, column: usize, row: usize) -> Result<&Mixed> {
        match self.cell(column, row)? {
            ColumnData::Mixed(v) => Ok(&v[row]),
            other => Err(Error::type_mismatch(ColumnType::Mixed, other.column_type())),
        }
    }

    /// Returns the active tag of a Mixed cell.
    pub fn get_mixed_type(&self, column: usize, row: usize) -> Result<ColumnType> {
        self.mixed(column, row).map(Mixed::column_type)
    }

    // ---- subtables ----

    /// Returns the subtable stored at `(column, row)`.
    ///
    /// The row is checked before anything else, so an empty table always
    /// reports `OutOfRange`. Table columns always hold a subtable. Mixed
    /// cells report `TypeMismatch` unless they carry the table tag, in which
    /// case `UnsupportedOperation` is returned: tables inside Mixed cells are
    /// not stored. Every other column kind is a `TypeMismatch`.
    pub fn get_subtable(&self, column: usize, row: usize) -> Result<&Table> {
        self.check_row(row)?;
        match self.column_data(column)? {
            ColumnData::Table(tables) => Ok(&tables[row]),
            ColumnData::Mixed(values) => Err(mixed_subtable_error(column, row, &values[row])),
            other => Err(Error::type_mismatch(ColumnType::Table, other.column_type())),
        }
    }

    /// Mutable variant of [`get_subtable`](Table::get_subtable). Changes made
    /// through the returned reference are changes to the parent's cell.
    pub fn get_subtable_mut(&mut self, column: usize, row: usize) -> Result<&mut Table> {
        self.check_row(row)?;
        let len = self.columns.len();
        match self.columns.get_mut(column) {
            Some(ColumnData::Table(tables)) => Ok(&mut tables[row]),
            Some(ColumnData::Mixed(values)) => {
                Err(mixed_subtable_error(column, row, &values[row]))
            }
            Some(other) => Err(Error::type_mismatch(ColumnType::Table, other.column_type())),
            None => Err(Error::column_out_of_range(column, len)),
        }
    }

    /// Returns the row count of the subtable at `(column, row)`.
    pub fn get_subtable_size(&self, column: usize, row: usize) -> Result<usize> {
        self.get_subtable(column, row).map(Table::len)
    }

    /// Removes all rows of the subtable at `(column, row)`.
    pub fn clear_subtable(&mut self, column: usize, row: usize) -> Result<()> {
        self.get_subtable_mut(column, row)?.clear();
        Ok(())
    }

    /// Returns a detached handle to the subtable at `(column, row)`.
    ///
    /// The handle can be resolved later with [`resolve`](Table::resolve). It
    /// follows its row when earlier rows are removed and goes stale once the
    /// row itself is removed or the schema changes.
    pub fn subtable_handle(&self, column: usize, row: usize) -> Result<SubtableHandle> {
        self.get_subtable(column, row)?;
        Ok(SubtableHandle::new(
            column,
            row,
            self.row_ids[row],
            self.schema_epoch,
        ))
    }

    /// Resolves a handle taken from this table.
    pub fn resolve(&self, handle: &SubtableHandle) -> Result<&Table> {
        let row = self.locate(handle)?;
        self.get_subtable(handle.column(), row)
    }

    /// Resolves a handle taken from this table for mutation.
    pub fn resolve_mut(&mut self, handle: &SubtableHandle) -> Result<&mut Table> {
        let row = self.locate(handle)?;
        self.get_subtable_mut(handle.column(), row)
    }

    /// Current index of the handle's row.
    fn locate(&self, handle: &SubtableHandle) -> Result<usize> {
        if handle.schema_epoch() != self.schema_epoch {
            return Err(Error::stale_handle("schema changed since the handle was taken"));
        }
        match self.row_ids.get(handle.row()) {
            Some(&id) if id == handle.row_id() => Ok(handle.row()),
            // row ids stay sorted: they are assigned increasing and removal
            // keeps order
            _ => self
                .row_ids
                .binary_search(&handle.row_id())
                .map_err(|_| Error::stale_handle("row no longer exists")),
        }
    }

    // ---- bounds ----

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.len() {
            return Err(Error::row_out_of_range(row, self.len()));
        }
        Ok(())
    }

    fn column_data(&self, column: usize) -> Result<&ColumnData> {
        self.columns
            .get(column)
            .ok_or_else(|| Error::column_out_of_range(column, self.columns.len()))
    }

    /// Column storage for a cell, after checking column then row bounds.
    fn cell(&self, column: usize, row: usize) -> Result<&ColumnData> {
        let data = self.column_data(column)?;
        self.check_row(row)?;
        Ok(data)
    }

    fn cell_mut(&mut self, column: usize, row: usize) -> Result<&mut ColumnData> {
        self.column_data(column)?;
        self.check_row(row)?;
        Ok(&mut self.columns[column])
    }
}

fn mixed_subtable_error(column: usize, row: usize, value: &Mixed) -> Error {
    trace!(column, row, tag = %value.column_type(), "mixed cell does not hold a subtable");
    match value {
        Mixed::Table => Error::unsupported("nested tables in mixed cells are not supported"),
        other => Error::type_mismatch(ColumnType::Table, other.column_type()),
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Table {
    /// Tables are equal when schema and contents are equal; row identities,
    /// schema epochs and subtable ownership are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.schema == other.schema && self.columns == other.columns && self.len() == other.len()
    }
}
