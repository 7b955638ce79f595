use super::{db::SqlType, EntityId, PropertyId};
use crate::stmt::Type;
use std::fmt;

/// An entity's storage layout after walking its properties: the columns of
/// its own table, with embedded values flattened, and the child tables
/// holding its entity and reference collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityColumns {
    pub columns: Vec<Column>,
    pub children: Vec<ChildTable>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name with all embedding prefixes applied
    pub name: String,

    /// Property path from the entity to the property backed by this column
    pub path: PropertyPath,

    pub ty: Type,

    pub sql_type: SqlType,

    pub nullable: bool,

    pub kind: ColumnKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Id,
    Version,
    Scalar,

    /// Holds the id of another aggregate root
    Reference(EntityId),
}

/// A table whose rows belong to the owning entity's row.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildTable {
    /// Path of the property holding the child rows
    pub path: PropertyPath,

    /// Qualified table name
    pub table: String,

    pub target: ChildTarget,

    /// Column referencing the owner row
    pub reverse_column: String,

    /// Column holding the key or index, for qualified properties
    pub key_column: Option<String>,

    pub key_ty: Option<Type>,

    /// True if rows carry their position in the collection
    pub ordered: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildTarget {
    /// Rows are entities stored in the target's own table
    Entity(EntityId),

    /// Rows hold a reference to the target in `column`
    Reference { target: EntityId, column: String },
}

/// Sequence of properties leading from an entity to a nested property.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    steps: Vec<PropertyId>,
    dot_path: String,
}

impl EntityColumns {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_for_path(&self, dot_path: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.path.dot_path() == dot_path)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|column| &column.name[..])
    }

    pub fn id_column(&self) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.kind == ColumnKind::Id)
    }

    pub fn child(&self, dot_path: &str) -> Option<&ChildTable> {
        self.children
            .iter()
            .find(|child| child.path.dot_path() == dot_path)
    }
}

impl PropertyPath {
    pub(crate) fn root() -> Self {
        Self {
            steps: vec![],
            dot_path: String::new(),
        }
    }

    pub(crate) fn child(&self, id: PropertyId, name: &str) -> Self {
        let mut steps = self.steps.clone();
        steps.push(id);

        let dot_path = if self.dot_path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.dot_path, name)
        };

        Self { steps, dot_path }
    }

    pub fn steps(&self) -> &[PropertyId] {
        &self.steps
    }

    /// The leaf property
    pub fn leaf(&self) -> Option<PropertyId> {
        self.steps.last().copied()
    }

    /// Property names joined with `.`, e.g. `shipping.street`.
    pub fn dot_path(&self) -> &str {
        &self.dot_path
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Debug for PropertyPath {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "PropertyPath({})", self.dot_path)
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.dot_path)
    }
}
