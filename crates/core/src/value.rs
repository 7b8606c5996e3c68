//! Mixed value definitions for Strata tables.
//!
//! `Mixed` is the tagged union stored in Mixed-typed columns. It is also used
//! as the loosely typed carrier when a whole row is appended at once.

use crate::types::ColumnType;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// A dynamically typed cell value.
///
/// A value's tag is fixed at construction. Changing the content of a Mixed
/// cell means storing a new `Mixed`.
#[derive(Clone, Debug)]
pub enum Mixed {
    /// 64-bit signed integer
    Integer(i64),
    /// Boolean value
    Boolean(bool),
    /// UTF-8 string
    String(String),
    /// Binary data
    Binary(Vec<u8>),
    /// DateTime stored as Unix timestamp in milliseconds
    DateTime(i64),
    /// 64-bit floating point
    Double(f64),
    /// 32-bit floating point
    Float(f32),
    /// Reserved tag for a nested table. Carries no payload; tables stored in
    /// Mixed cells cannot be dereferenced.
    Table,
}

impl Mixed {
    /// Returns the active tag.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Mixed::Integer(_) => ColumnType::Integer,
            Mixed::Boolean(_) => ColumnType::Boolean,
            Mixed::String(_) => ColumnType::String,
            Mixed::Binary(_) => ColumnType::Binary,
            Mixed::DateTime(_) => ColumnType::DateTime,
            Mixed::Double(_) => ColumnType::Double,
            Mixed::Float(_) => ColumnType::Float,
            Mixed::Table => ColumnType::Table,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Mixed::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Mixed::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Mixed::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Mixed::Binary(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<i64> {
        match self {
            Mixed::DateTime(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Mixed::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Mixed::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl Default for Mixed {
    /// Mixed cells of freshly added rows hold `Integer(0)`.
    fn default() -> Self {
        Mixed::Integer(0)
    }
}

impl PartialEq for Mixed {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Mixed::Integer(a), Mixed::Integer(b)) => a == b,
            (Mixed::Boolean(a), Mixed::Boolean(b)) => a == b,
            (Mixed::String(a), Mixed::String(b)) => a == b,
            (Mixed::Binary(a), Mixed::Binary(b)) => a == b,
            (Mixed::DateTime(a), Mixed::DateTime(b)) => a == b,
            // NaN equals NaN so stored values always compare equal to themselves
            (Mixed::Double(a), Mixed::Double(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Mixed::Float(a), Mixed::Float(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Mixed::Table, Mixed::Table) => true,
            _ => false,
        }
    }
}

impl From<i64> for Mixed {
    fn from(v: i64) -> Self {
        Mixed::Integer(v)
    }
}

impl From<i32> for Mixed {
    fn from(v: i32) -> Self {
        Mixed::Integer(v as i64)
    }
}

impl From<bool> for Mixed {
    fn from(v: bool) -> Self {
        Mixed::Boolean(v)
    }
}

impl From<String> for Mixed {
    fn from(v: String) -> Self {
        Mixed::String(v)
    }
}

impl From<&str> for Mixed {
    fn from(v: &str) -> Self {
        Mixed::String(v.to_string())
    }
}

impl From<Vec<u8>> for Mixed {
    fn from(v: Vec<u8>) -> Self {
        Mixed::Binary(v)
    }
}

impl From<&[u8]> for Mixed {
    fn from(v: &[u8]) -> Self {
        Mixed::Binary(v.to_vec())
    }
}

impl From<f64> for Mixed {
    fn from(v: f64) -> Self {
        Mixed::Double(v)
    }
}

impl From<f32> for Mixed {
    fn from(v: f32) -> Self {
        Mixed::Float(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_mixed_tags() {
        assert_eq!(Mixed::Integer(300).column_type(), ColumnType::Integer);
        assert_eq!(Mixed::Boolean(true).column_type(), ColumnType::Boolean);
        assert_eq!(Mixed::from("s").column_type(), ColumnType::String);
        assert_eq!(Mixed::from(vec![1u8, 2, 3]).column_type(), ColumnType::Binary);
        assert_eq!(Mixed::DateTime(1_400_000_000_000).column_type(), ColumnType::DateTime);
        assert_eq!(Mixed::from(3.0f64).column_type(), ColumnType::Double);
        assert_eq!(Mixed::from(3.0f32).column_type(), ColumnType::Float);
        assert_eq!(Mixed::Table.column_type(), ColumnType::Table);
    }

    #[test]
    fn test_mixed_default_is_integer_zero() {
        assert_eq!(Mixed::default(), Mixed::Integer(0));
    }

    #[test]
    fn test_mixed_accessors() {
        assert_eq!(Mixed::Integer(42).as_i64(), Some(42));
        assert_eq!(Mixed::Boolean(true).as_bool(), Some(true));
        assert_eq!(Mixed::String("hello".into()).as_str(), Some("hello"));
        assert_eq!(Mixed::Binary(vec![1, 2, 3]).as_bytes(), Some(&[1, 2, 3][..]));
        assert_eq!(Mixed::DateTime(1234567890).as_datetime(), Some(1234567890));
        assert_eq!(Mixed::Double(3.5).as_f64(), Some(3.5));
        assert_eq!(Mixed::Float(1.5).as_f32(), Some(1.5));
        assert_eq!(Mixed::Integer(1).as_bool(), None);
        assert_eq!(Mixed::Double(1.0).as_f32(), None);
    }

    #[test]
    fn test_mixed_equality() {
        assert_eq!(Mixed::Integer(3), Mixed::Integer(3));
        assert_ne!(Mixed::Integer(3), Mixed::Double(3.0));
        assert_ne!(Mixed::Double(3.0), Mixed::Float(3.0));
        assert_eq!(Mixed::Double(f64::NAN), Mixed::Double(f64::NAN));
        assert_eq!(Mixed::Table, Mixed::Table);
    }
}
