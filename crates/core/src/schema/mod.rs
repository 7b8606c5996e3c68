//! Schema module for Strata tables.
//!
//! Column definitions and the ordered `ColumnSchema` that describes a table,
//! including the nested schemas of Table-kind columns.

mod column;
mod column_schema;

pub use column::Column;
pub use column_schema::ColumnSchema;
