use crate::schema::{app::OnEmpty, EntityId};

/// How a property is stored. Chosen once during discovery.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKind {
    /// A scalar value, or a collection of scalars stored as an array, in a
    /// column of the owner's table.
    Column,

    /// A value type whose properties are flattened into the owner's table.
    Embedded(Embedded),

    /// One or many entities stored in the target's table, pointing back at
    /// the owner row.
    Entity(Child),

    /// One or many references to another aggregate root, stored as the
    /// target's id.
    Reference(Reference),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Embedded {
    /// The embedded type
    pub target: EntityId,

    /// Prepended to each flattened column name
    pub prefix: String,

    pub on_empty: OnEmpty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Child {
    /// The entity stored in the child table
    pub target: EntityId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    /// The referenced aggregate root
    pub target: EntityId,
}

impl PropertyKind {
    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column)
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, Self::Embedded(..))
    }

    pub fn as_embedded(&self) -> Option<&Embedded> {
        match self {
            Self::Embedded(embedded) => Some(embedded),
            _ => None,
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(..))
    }

    pub fn is_child(&self) -> bool {
        matches!(self, Self::Entity(..))
    }

    /// Entity and reference properties relate the owner to other rows.
    pub fn is_relation(&self) -> bool {
        matches!(self, Self::Entity(..) | Self::Reference(..))
    }

    pub fn target(&self) -> Option<EntityId> {
        match self {
            Self::Column => None,
            Self::Embedded(embedded) => Some(embedded.target),
            Self::Entity(child) => Some(child.target),
            Self::Reference(reference) => Some(reference.target),
        }
    }
}
