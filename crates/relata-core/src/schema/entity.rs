use super::{EntityColumns, PropertyId, RelationalProperty};
use std::fmt;

/// Relational descriptor of a mapped type: its table and its properties.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationalEntity {
    /// Uniquely identifies the entity within the mapping context
    pub id: EntityId,

    /// Entity name
    pub name: String,

    /// Table name, without schema
    pub table_name: String,

    /// Table name including the schema, when one is configured
    pub qualified_table_name: String,

    /// Properties in declaration order. The entity owns them; each holds
    /// the entity's id as its owner.
    pub properties: Vec<RelationalProperty>,

    pub id_property: Option<PropertyId>,

    pub version_property: Option<PropertyId>,

    /// Columns of the entity's table and the child tables hanging off it
    pub columns: EntityColumns,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub usize);

impl RelationalEntity {
    pub fn property(&self, id: impl Into<PropertyId>) -> &RelationalProperty {
        let id = id.into();
        assert_eq!(self.id, id.entity);
        &self.properties[id.index]
    }

    pub fn property_by_name(&self, name: &str) -> Option<&RelationalProperty> {
        self.properties.iter().find(|property| property.name == name)
    }

    pub fn properties(&self) -> impl ExactSizeIterator<Item = &RelationalProperty> + '_ {
        self.properties.iter()
    }

    pub fn id_property(&self) -> Option<&RelationalProperty> {
        self.id_property.map(|id| &self.properties[id.index])
    }

    pub fn version_property(&self) -> Option<&RelationalProperty> {
        self.version_property.map(|id| &self.properties[id.index])
    }

    pub fn has_id_property(&self) -> bool {
        self.id_property.is_some()
    }

    pub fn columns(&self) -> &EntityColumns {
        &self.columns
    }
}

impl EntityId {
    /// Create a `PropertyId` representing the current entity's property at
    /// index `index`.
    pub const fn property(self, index: usize) -> PropertyId {
        PropertyId {
            entity: self,
            index,
        }
    }
}

impl From<&Self> for EntityId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl From<&RelationalEntity> for EntityId {
    fn from(value: &RelationalEntity) -> Self {
        value.id
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "EntityId({})", self.0)
    }
}
