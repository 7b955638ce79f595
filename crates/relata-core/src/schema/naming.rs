use std::fmt;
use std_util::str;

/// Derives table and column names that were not given explicitly.
///
/// Every method has a default, so implementations only override what they
/// need to change.
pub trait NamingStrategy: fmt::Debug + Send + Sync + 'static {
    /// Database schema tables live in. Empty means the connection default.
    fn schema(&self) -> &str {
        ""
    }

    /// Table name for an entity, `PurchaseOrder` -> `purchase_order`.
    fn table_name(&self, entity_name: &str) -> String {
        str::snake_case(entity_name)
    }

    /// Column name for a property, `firstName` -> `first_name`.
    fn column_name(&self, property_name: &str) -> String {
        str::snake_case(property_name)
    }

    /// Column in a child table referencing the owner row. Defaults to the
    /// owner's table name.
    fn reverse_column_name(&self, owner_table: &str) -> String {
        owner_table.to_string()
    }

    /// Column holding the key or index of a qualified relation.
    fn key_column(&self, reverse_column: &str) -> String {
        format!("{reverse_column}_key")
    }

    /// Table holding the elements of a collection of references.
    fn reference_table_name(&self, owner_table: &str, column: &str) -> String {
        format!("{owner_table}_{column}")
    }

    fn qualified_table_name(&self, table_name: &str) -> String {
        match self.schema() {
            "" => table_name.to_string(),
            schema => format!("{schema}.{table_name}"),
        }
    }
}

/// Snake-cased names, optionally placed in a schema.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DefaultNamingStrategy {
    schema: String,
}

impl DefaultNamingStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
        }
    }
}

impl NamingStrategy for DefaultNamingStrategy {
    fn schema(&self) -> &str {
        &self.schema
    }
}
