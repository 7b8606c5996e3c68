//! Strata Storage - Columnar table storage for Strata.
//!
//! This crate provides the in-memory table engine:
//!
//! - `Table`: Columnar row/column grid with typed, Mixed and subtable accessors
//! - `ApplySchema`: Applies a `ColumnSchema` to a live table
//! - `SubtableHandle`: Detached, runtime-checked reference to a subtable cell
//! - `Group`: Named collection of top-level tables
//!
//! # Example
//!
//! ```rust
//! use strata_core::schema::ColumnSchema;
//! use strata_core::{ColumnType, Error, Mixed};
//! use strata_storage::{ApplySchema, Table};
//!
//! let mut schema = ColumnSchema::new();
//! schema.add_column(ColumnType::Integer, "num");
//! schema.add_column(ColumnType::Mixed, "mix");
//! schema.add_subtable_column("subtable").add_column(ColumnType::Integer, "num");
//!
//! let mut table = Table::new();
//! schema.apply_to(&mut table)?;
//! table.add_empty_row();
//!
//! // A fresh Mixed cell holds Integer(0), not a subtable.
//! assert_eq!(table.get_mixed(1, 0).unwrap(), Mixed::Integer(0));
//! assert!(matches!(table.get_subtable(1, 0), Err(Error::TypeMismatch { .. })));
//!
//! // Table columns always hold one.
//! assert_eq!(table.get_subtable_size(2, 0).unwrap(), 0);
//! # Ok::<(), Error>(())
//! ```

#![no_std]

extern crate alloc;

pub mod apply;
mod column;
pub mod group;
pub mod handle;
pub mod table;

pub use apply::ApplySchema;
pub use group::Group;
pub use handle::{RowId, SubtableHandle};
pub use table::Table;
