mod kind;
pub use kind::{Child, Embedded, PropertyKind, Reference};

use super::{db::SqlType, EntityId};
use crate::stmt::Type;
use std::fmt;

/// Generic metadata about a property of a mapped type.
pub trait PersistentProperty {
    /// Uniquely identifies the property within the mapping context.
    fn id(&self) -> PropertyId;

    /// The property name as declared on the Rust type.
    fn name(&self) -> &str;

    /// The entity declaring this property.
    ///
    /// This is a non-owning back-reference; resolve it with
    /// [`MappingContext::owner_of`](super::MappingContext::owner_of).
    fn owner(&self) -> EntityId {
        self.id().entity
    }

    /// The declared type, with `Option` stripped.
    fn ty(&self) -> &Type;

    fn is_nullable(&self) -> bool;

    fn is_id_property(&self) -> bool;

    fn is_version_property(&self) -> bool;

    /// True if the property's actual type is a registered entity.
    fn is_entity(&self) -> bool;

    /// The element type for collections, the value type for maps, the
    /// declared type otherwise.
    fn actual_ty(&self) -> &Type {
        self.ty().actual()
    }

    /// The element type for collections, the key type for maps.
    fn component_ty(&self) -> Option<&Type> {
        self.ty().component()
    }

    fn map_value_ty(&self) -> Option<&Type> {
        self.ty().map_value()
    }

    fn is_collection_like(&self) -> bool {
        self.ty().is_collection_like()
    }

    fn is_map(&self) -> bool {
        self.ty().is_map()
    }

    fn is_array(&self) -> bool {
        self.ty().is_array()
    }
}

/// A [`PersistentProperty`] with relational storage metadata.
///
/// Every accessor returns the same answer for the lifetime of the owning
/// entity descriptor.
pub trait RelationalPersistentProperty: PersistentProperty {
    /// True if the property points at another aggregate root rather than
    /// holding a value of its own.
    fn is_reference(&self) -> bool;

    /// The name of the column backing this property.
    fn column_name(&self) -> &str;

    /// The type used to store this property.
    ///
    /// Multi-dimensional arrays are reduced to a one-dimensional array of
    /// their innermost element type.
    fn column_type(&self) -> &Type;

    /// The tag used when binding this property as a statement parameter.
    fn sql_type(&self) -> SqlType;

    /// The column in a child table that references the owner's row.
    fn reverse_column_name(&self) -> &str;

    /// The column holding the key or index of qualified properties.
    fn key_column(&self) -> Option<&str>;

    /// Returns true if this property references multiple elements that are
    /// picked by a key or an index.
    fn is_qualified(&self) -> bool;

    /// The type of the key or index column. Only set for qualified
    /// properties.
    fn qualifier_column_type(&self) -> Option<&Type>;

    /// Returns true if element order must be persisted and restored.
    fn is_ordered(&self) -> bool;

    /// True if the property's own fields are flattened into the owner's
    /// table.
    fn is_embedded(&self) -> bool {
        false
    }

    /// Prefix for embedded columns, `None` when the property is not
    /// embedded.
    fn embedded_prefix(&self) -> Option<&str> {
        None
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct PropertyId {
    pub entity: EntityId,
    pub index: usize,
}

/// Relational descriptor of one property, produced by discovery.
///
/// All derived metadata is computed once when the mapping context is built.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationalProperty {
    /// Uniquely identifies the property within the mapping context.
    pub id: PropertyId,

    /// The property name
    pub name: String,

    /// Declared application-level type
    pub ty: Type,

    pub nullable: bool,

    /// True if the property is the entity's id
    pub primary_key: bool,

    /// True if the property is the entity's version
    pub version: bool,

    /// Storage classification
    pub kind: PropertyKind,

    pub column_name: String,

    pub reverse_column_name: String,

    pub key_column: Option<String>,

    pub column_type: Type,

    pub sql_type: SqlType,

    pub qualifier_column_type: Option<Type>,
}

impl RelationalProperty {
    /// The entity a relation or embedding points at.
    pub fn target(&self) -> Option<EntityId> {
        self.kind.target()
    }
}

impl PersistentProperty for RelationalProperty {
    fn id(&self) -> PropertyId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn ty(&self) -> &Type {
        &self.ty
    }

    fn is_nullable(&self) -> bool {
        self.nullable
    }

    fn is_id_property(&self) -> bool {
        self.primary_key
    }

    fn is_version_property(&self) -> bool {
        self.version
    }

    fn is_entity(&self) -> bool {
        matches!(self.kind, PropertyKind::Entity(_) | PropertyKind::Embedded(_))
    }
}

impl RelationalPersistentProperty for RelationalProperty {
    fn is_reference(&self) -> bool {
        self.kind.is_reference()
    }

    fn column_name(&self) -> &str {
        &self.column_name
    }

    fn column_type(&self) -> &Type {
        &self.column_type
    }

    fn sql_type(&self) -> SqlType {
        self.sql_type
    }

    fn reverse_column_name(&self) -> &str {
        &self.reverse_column_name
    }

    fn key_column(&self) -> Option<&str> {
        self.key_column.as_deref()
    }

    fn is_qualified(&self) -> bool {
        self.kind.is_relation() && (self.ty.is_map() || self.ty.is_list_like())
    }

    fn qualifier_column_type(&self) -> Option<&Type> {
        self.qualifier_column_type.as_ref()
    }

    fn is_ordered(&self) -> bool {
        self.kind.is_relation() && self.ty.is_list_like()
    }

    fn is_embedded(&self) -> bool {
        self.kind.is_embedded()
    }

    fn embedded_prefix(&self) -> Option<&str> {
        match &self.kind {
            PropertyKind::Embedded(embedded) => Some(&embedded.prefix),
            _ => None,
        }
    }
}

impl From<&Self> for PropertyId {
    fn from(val: &Self) -> Self {
        *val
    }
}

impl From<&RelationalProperty> for PropertyId {
    fn from(val: &RelationalProperty) -> Self {
        val.id
    }
}

impl fmt::Debug for PropertyId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "PropertyId({}/{})", self.entity.0, self.index)
    }
}
