//! Strata Core - Core types and schema definitions for Strata tables.
//!
//! This crate provides the foundational types shared by the storage layer:
//!
//! - `ColumnType`: Column kinds (Integer, Boolean, String, Binary, DateTime, Double, Float, Mixed, Table)
//! - `Mixed`: Tagged union stored in Mixed columns
//! - `schema`: Column definitions and nested `ColumnSchema`s
//! - `Error`: Error types for table operations
//!
//! # Example
//!
//! ```rust
//! use strata_core::{ColumnType, Mixed};
//! use strata_core::schema::ColumnSchema;
//!
//! let mut schema = ColumnSchema::new();
//! schema.add_column(ColumnType::Integer, "num");
//! schema.add_column(ColumnType::Mixed, "mix");
//! schema.add_subtable_column("subtable").add_column(ColumnType::Integer, "num");
//!
//! assert_eq!(schema.len(), 3);
//! assert_eq!(schema.subschema(2).unwrap().len(), 1);
//! assert_eq!(Mixed::from(3.0f32).column_type(), ColumnType::Float);
//! ```

#![no_std]

extern crate alloc;

mod error;
pub mod schema;
mod types;
mod value;

pub use error::{Error, Result};
pub use types::ColumnType;
pub use value::Mixed;
