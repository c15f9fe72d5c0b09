//! Column definitions for the customer table.

/// A single column of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// Stable identifier, unique within a registry.
    pub id: String,
    /// Header text.
    pub label: String,
    /// Preferred width in terminal cells.
    pub width: u16,
}

impl ColumnDef {
    /// Create a new column definition.
    pub fn new(id: impl Into<String>, label: impl Into<String>, width: u16) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width,
        }
    }
}

/// The ordered set of columns known to a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRegistry {
    columns: Vec<ColumnDef>,
}

impl ColumnRegistry {
    /// Create a registry from a list of columns.
    ///
    /// Later duplicates of an already registered id are dropped.
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        let mut unique: Vec<ColumnDef> = Vec::with_capacity(columns.len());
        for column in columns {
            if !unique.iter().any(|c| c.id == column.id) {
                unique.push(column);
            }
        }
        Self { columns: unique }
    }

    /// The columns of the customer demo table.
    pub fn customers() -> Self {
        Self::new(vec![
            ColumnDef::new("firstName", "First Name", 15),
            ColumnDef::new("lastName", "Last Name", 15),
            ColumnDef::new("email", "Email", 25),
            ColumnDef::new("phone", "Phone", 15),
            ColumnDef::new("address", "Address", 20),
            ColumnDef::new("city", "City", 15),
            ColumnDef::new("state", "State", 10),
        ])
    }

    /// Iterate over the columns in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter()
    }

    /// Iterate over the column ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.id.as_str())
    }

    /// Look up a column by id.
    pub fn get(&self, id: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Get the column at a display position.
    pub fn at(&self, index: usize) -> Option<&ColumnDef> {
        self.columns.get(index)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the registry has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Default for ColumnRegistry {
    fn default() -> Self {
        Self::customers()
    }
}
