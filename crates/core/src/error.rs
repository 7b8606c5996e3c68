//! Error types for Strata tables.

use crate::types::ColumnType;
use alloc::string::String;
use core::fmt;

/// Result type alias for Strata operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for table and schema operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Row or column index outside the current bounds.
    OutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
    /// The operation's kind does not match the column or cell kind.
    TypeMismatch {
        expected: ColumnType,
        got: ColumnType,
    },
    /// Removal requested on a table without rows.
    EmptyTable,
    /// The operation touches nested tables stored in Mixed cells.
    UnsupportedOperation {
        message: String,
    },
    /// A subtable handle outlived its row or the schema it was taken under.
    StaleHandle {
        message: String,
    },
    /// Table not found in a group.
    TableNotFound {
        name: String,
    },
    /// Invalid operation.
    InvalidOperation {
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange { what, index, len } => {
                write!(f, "{} index {} out of range (len {})", what, index, len)
            }
            Error::TypeMismatch { expected, got } => {
                write!(f, "Type mismatch: expected {}, got {}", expected, got)
            }
            Error::EmptyTable => write!(f, "Table is empty"),
            Error::UnsupportedOperation { message } => {
                write!(f, "Unsupported operation: {}", message)
            }
            Error::StaleHandle { message } => {
                write!(f, "Stale subtable handle: {}", message)
            }
            Error::TableNotFound { name } => {
                write!(f, "Table not found: {}", name)
            }
            Error::InvalidOperation { message } => {
                write!(f, "Invalid operation: {}", message)
            }
        }
    }
}

impl core::error::Error for Error {}

impl Error {
    /// Creates a row out of range error.
    pub fn row_out_of_range(index: usize, len: usize) -> Self {
        Error::OutOfRange {
            what: "row",
            index,
            len,
        }
    }

    /// Creates a column out of range error.
    pub fn column_out_of_range(index: usize, len: usize) -> Self {
        Error::OutOfRange {
            what: "column",
            index,
            len,
        }
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: ColumnType, got: ColumnType) -> Self {
        Error::TypeMismatch { expected, got }
    }

    /// Creates an unsupported operation error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Error::UnsupportedOperation {
            message: message.into(),
        }
    }

    /// Creates a stale handle error.
    pub fn stale_handle(message: impl Into<String>) -> Self {
        Error::StaleHandle {
            message: message.into(),
        }
    }

    /// Creates a table not found error.
    pub fn table_not_found(name: impl Into<String>) -> Self {
        Error::TableNotFound { name: name.into() }
    }

    /// Creates an invalid operation error.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Error::InvalidOperation {
            message: message.into(),
        }
    }

    /// Returns true for `OutOfRange` errors.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }

    /// Returns true for `TypeMismatch` errors.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }
}
