//! Logical expression types for the query planner

use crate::sql::DataType;

/// Unique ID for columns in the plan
pub type ColumnId = usize;

/// Output column from a plan node
#[derive(Debug, Clone, PartialEq)]
pub struct OutputColumn {
    /// Unique ID within the plan
    pub id: ColumnId,
    /// Column name (or alias)
    pub name: String,
    /// Data type
    pub data_type: DataType,
    /// Whether the column can be NULL
    pub nullable: bool,
}

impl OutputColumn {
    /// Create a new output column
    pub fn new(id: ColumnId, name: impl Into<String>, data_type: DataType, nullable: bool) -> Self {
        Self {
            id,
            name: name.into(),
            data_type,
            nullable,
        }
    }
}
