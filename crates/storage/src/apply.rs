//! Applying schemas to tables.

use crate::table::Table;
use strata_core::schema::ColumnSchema;
use strata_core::Result;

/// Extension trait for pushing a schema description onto a live table.
///
/// The schema is built independently of any table, so nested structure can be
/// described before a single row exists, then applied in one step.
pub trait ApplySchema {
    /// Replaces `table`'s schema with this one, keeping compatible data.
    /// See [`Table::update_from_schema`].
    fn apply_to(&self, table: &mut Table) -> Result<()>;
}

impl ApplySchema for ColumnSchema {
    fn apply_to(&self, table: &mut Table) -> Result<()> {
        table.update_from_schema(self)
    }
}
