//! Column storage for Strata tables.
//!
//! Each column is stored as one homogeneous vector, so typed access is a
//! single discriminant match followed by an index.

use crate::table::Table;
use alloc::string::String;
use alloc::vec::Vec;
use strata_core::schema::Column;
use strata_core::{ColumnType, Error, Mixed, Result};

/// Storage of a single column, one entry per row.
#[derive(Clone, Debug)]
pub(crate) enum ColumnData {
    Integer(Vec<i64>),
    Boolean(Vec<bool>),
    String(Vec<String>),
    Binary(Vec<Vec<u8>>),
    DateTime(Vec<i64>),
    Double(Vec<f64>),
    Float(Vec<f32>),
    Mixed(Vec<Mixed>),
    Table(Vec<Table>),
}

impl ColumnData {
    /// Creates storage for `column` holding `rows` default values.
    pub(crate) fn filled(column: &Column, rows: usize) -> Self {
        let mut data = Self::empty(column.column_type());
        data.reserve(rows);
        for _ in 0..rows {
            data.push_default(column);
        }
        data
    }

    fn empty(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Integer => ColumnData::Integer(Vec::new()),
            ColumnType::Boolean => ColumnData::Boolean(Vec::new()),
            ColumnType::String => ColumnData::String(Vec::new()),
            ColumnType::Binary => ColumnData::Binary(Vec::new()),
            ColumnType::DateTime => ColumnData::DateTime(Vec::new()),
            ColumnType::Double => ColumnData::Double(Vec::new()),
            ColumnType::Float => ColumnData::Float(Vec::new()),
            ColumnType::Mixed => ColumnData::Mixed(Vec::new()),
            ColumnType::Table => ColumnData::Table(Vec::new()),
        }
    }

    /// Returns the kind of values stored.
    pub(crate) fn column_type(&self) -> ColumnType {
        match self {
            ColumnData::Integer(_) => ColumnType::Integer,
            ColumnData::Boolean(_) => ColumnType::Boolean,
            ColumnData::String(_) => ColumnType::String,
            ColumnData::Binary(_) => ColumnType::Binary,
            ColumnData::DateTime(_) => ColumnType::DateTime,
            ColumnData::Double(_) => ColumnType::Double,
            ColumnData::Float(_) => ColumnType::Float,
            ColumnData::Mixed(_) => ColumnType::Mixed,
            ColumnData::Table(_) => ColumnType::Table,
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            ColumnData::Integer(v) => v.len(),
            ColumnData::Boolean(v) => v.len(),
            ColumnData::String(v) => v.len(),
            ColumnData::Binary(v) => v.len(),
            ColumnData::DateTime(v) => v.len(),
            ColumnData::Double(v) => v.len(),
            ColumnData::Float(v) => v.len(),
            ColumnData::Mixed(v) => v.len(),
            ColumnData::Table(v) => v.len(),
        }
    }

    fn reserve(&mut self, additional: usize) {
        match self {
            ColumnData::Integer(v) => v.reserve(additional),
            ColumnData::Boolean(v) => v.reserve(additional),
            ColumnData::String(v) => v.reserve(additional),
            ColumnData::Binary(v) => v.reserve(additional),
            ColumnData::DateTime(v) => v.reserve(additional),
            ColumnData::Double(v) => v.reserve(additional),
            ColumnData::Float(v) => v.reserve(additional),
            ColumnData::Mixed(v) => v.reserve(additional),
            ColumnData::Table(v) => v.reserve(additional),
        }
    }

    /// Appends the default value of `column`'s kind.
    ///
    /// Mixed cells start as `Integer(0)`; Table cells start as an empty table
    /// carrying the column's nested schema.
    pub(crate) fn push_default(&mut self, column: &Column) {
        match self {
            ColumnData::Integer(v) => v.push(0),
            ColumnData::Boolean(v) => v.push(false),
            ColumnData::String(v) => v.push(String::new()),
            ColumnData::Binary(v) => v.push(Vec::new()),
            ColumnData::DateTime(v) => v.push(0),
            ColumnData::Double(v) => v.push(0.0),
            ColumnData::Float(v) => v.push(0.0),
            ColumnData::Mixed(v) => v.push(Mixed::default()),
            ColumnData::Table(v) => v.push(new_subtable(column)),
        }
    }

    /// Checks that `value` can be appended to this column.
    pub(crate) fn check_value(&self, value: &Mixed) -> Result<()> {
        let expected = self.column_type();
        let got = value.column_type();
        match expected {
            ColumnType::Mixed => Ok(()),
            _ if expected == got => Ok(()),
            _ => Err(Error::type_mismatch(expected, got)),
        }
    }

    /// Appends `value` after checking its tag against the column kind.
    pub(crate) fn push_value(&mut self, column: &Column, value: Mixed) -> Result<()> {
        self.check_value(&value)?;
        match (self, value) {
            (ColumnData::Integer(v), Mixed::Integer(x)) => v.push(x),
            (ColumnData::Boolean(v), Mixed::Boolean(x)) => v.push(x),
            (ColumnData::String(v), Mixed::String(x)) => v.push(x),
            (ColumnData::Binary(v), Mixed::Binary(x)) => v.push(x),
            (ColumnData::DateTime(v), Mixed::DateTime(x)) => v.push(x),
            (ColumnData::Double(v), Mixed::Double(x)) => v.push(x),
            (ColumnData::Float(v), Mixed::Float(x)) => v.push(x),
            (ColumnData::Mixed(v), x) => v.push(x),
            (ColumnData::Table(v), Mixed::Table) => v.push(new_subtable(column)),
            (data, x) => {
                return Err(Error::type_mismatch(data.column_type(), x.column_type()))
            }
        }
        Ok(())
    }

    /// Drops the last row, including any owned subtable.
    pub(crate) fn pop(&mut self) {
        match self {
            ColumnData::Integer(v) => {
                v.pop();
            }
            ColumnData::Boolean(v) => {
                v.pop();
            }
            ColumnData::String(v) => {
                v.pop();
            }
            ColumnData::Binary(v) => {
                v.pop();
            }
            ColumnData::DateTime(v) => {
                v.pop();
            }
            ColumnData::Double(v) => {
                v.pop();
            }
            ColumnData::Float(v) => {
                v.pop();
            }
            ColumnData::Mixed(v) => {
                v.pop();
            }
            ColumnData::Table(v) => {
                v.pop();
            }
        }
    }

    /// Removes the entry at `row`. Callers check bounds.
    pub(crate) fn remove(&mut self, row: usize) {
        match self {
            ColumnData::Integer(v) => {
                v.remove(row);
            }
            ColumnData::Boolean(v) => {
                v.remove(row);
            }
            ColumnData::String(v) => {
                v.remove(row);
            }
            ColumnData::Binary(v) => {
                v.remove(row);
            }
            ColumnData::DateTime(v) => {
                v.remove(row);
            }
            ColumnData::Double(v) => {
                v.remove(row);
            }
            ColumnData::Float(v) => {
                v.remove(row);
            }
            ColumnData::Mixed(v) => {
                v.remove(row);
            }
            ColumnData::Table(v) => {
                v.remove(row);
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        match self {
            ColumnData::Integer(v) => v.clear(),
            ColumnData::Boolean(v) => v.clear(),
            ColumnData::String(v) => v.clear(),
            ColumnData::Binary(v) => v.clear(),
            ColumnData::DateTime(v) => v.clear(),
            ColumnData::Double(v) => v.clear(),
            ColumnData::Float(v) => v.clear(),
            ColumnData::Mixed(v) => v.clear(),
            ColumnData::Table(v) => v.clear(),
        }
    }
}

fn new_subtable(column: &Column) -> Table {
    Table::new_subtable(column.subschema().cloned().unwrap_or_default())
}

impl PartialEq for ColumnData {
    /// Element-wise equality where NaN equals NaN, matching `Mixed`.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ColumnData::Integer(a), ColumnData::Integer(b)) => a == b,
            (ColumnData::Boolean(a), ColumnData::Boolean(b)) => a == b,
            (ColumnData::String(a), ColumnData::String(b)) => a == b,
            (ColumnData::Binary(a), ColumnData::Binary(b)) => a == b,
            (ColumnData::DateTime(a), ColumnData::DateTime(b)) => a == b,
            (ColumnData::Double(a), ColumnData::Double(b)) => {
                a.len() == b.len()
                    && a.iter().zip(b).all(|(x, y)| (x.is_nan() && y.is_nan()) || x == y)
            }
            (ColumnData::Float(a), ColumnData::Float(b)) => {
                a.len() == b.len()
                    && a.iter().zip(b).all(|(x, y)| (x.is_nan() && y.is_nan()) || x == y)
            }
            (ColumnData::Mixed(a), ColumnData::Mixed(b)) => a == b,
            (ColumnData::Table(a), ColumnData::Table(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_filled_defaults() {
        let data = ColumnData::filled(&Column::new("mix", ColumnType::Mixed), 3);
        assert_eq!(data.len(), 3);
        assert_eq!(data, ColumnData::Mixed(vec![Mixed::Integer(0); 3]));

        let data = ColumnData::filled(&Column::new("f", ColumnType::Float), 2);
        assert_eq!(data, ColumnData::Float(vec![0.0, 0.0]));
    }

    #[test]
    fn test_filled_table_column_uses_subschema() {
        let mut sub = strata_core::schema::ColumnSchema::new();
        sub.add_column(ColumnType::Integer, "num");
        let data = ColumnData::filled(&Column::table("sub", sub), 1);
        match data {
            ColumnData::Table(tables) => {
                assert_eq!(tables[0].column_count(), 1);
                assert!(tables[0].is_empty());
                assert!(tables[0].is_subtable());
            }
            other => panic!("unexpected storage {:?}", other.column_type()),
        }
    }

    #[test]
    fn test_check_value() {
        let ints = ColumnData::filled(&Column::new("n", ColumnType::Integer), 0);
        assert!(ints.check_value(&Mixed::Integer(1)).is_ok());
        assert_eq!(
            ints.check_value(&Mixed::Double(1.0)),
            Err(Error::type_mismatch(ColumnType::Integer, ColumnType::Double))
        );

        let mixed = ColumnData::filled(&Column::new("m", ColumnType::Mixed), 0);
        assert!(mixed.check_value(&Mixed::Binary(vec![1])).is_ok());
        assert!(mixed.check_value(&Mixed::Table).is_ok());
    }

    #[test]
    fn test_push_pop_remove() {
        let column = Column::new("s", ColumnType::String);
        let mut data = ColumnData::filled(&column, 0);
        data.push_value(&column, Mixed::from("a")).unwrap();
        data.push_value(&column, Mixed::from("b")).unwrap();
        data.push_value(&column, Mixed::from("c")).unwrap();
        data.remove(0);
        assert_eq!(data, ColumnData::String(vec!["b".into(), "c".into()]));
        data.pop();
        assert_eq!(data.len(), 1);
        data.clear();
        assert_eq!(data.len(), 0);
    }

    #[test]
    fn test_float_columns_nan_equal() {
        let column = Column::new("d", ColumnType::Double);
        let mut data = ColumnData::filled(&column, 0);
        data.push_value(&column, Mixed::Double(f64::NAN)).unwrap();
        assert_eq!(data, data.clone());
        assert_ne!(data, ColumnData::Double(vec![0.0]));

        let floats = ColumnData::Float(vec![f32::NAN, 1.5]);
        assert_eq!(floats, floats.clone());
        assert_ne!(floats, ColumnData::Float(vec![f32::NAN]));
        assert_ne!(floats, ColumnData::Double(vec![f64::NAN, 1.5]));
    }
}
