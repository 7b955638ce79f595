use super::{
    app::Entity, Builder, EntityId, NamingStrategy, PersistentProperty, PropertyId,
    RelationalEntity, RelationalProperty,
};
use indexmap::IndexMap;
use std::sync::Arc;

/// Immutable registry of discovered entity descriptors.
///
/// Built once with [`MappingContext::builder`], then shared (usually behind
/// an `Arc`) for the lifetime of the application. Lookups never mutate.
#[derive(Debug)]
pub struct MappingContext {
    pub(super) entities: Vec<RelationalEntity>,

    /// Entity name to id
    pub(super) lookup: IndexMap<String, EntityId>,

    pub(super) naming: Arc<dyn NamingStrategy>,
}

impl MappingContext {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn entities(&self) -> impl ExactSizeIterator<Item = &RelationalEntity> + '_ {
        self.entities.iter()
    }

    /// Get an entity by id
    pub fn entity(&self, id: impl Into<EntityId>) -> &RelationalEntity {
        &self.entities[id.into().0]
    }

    pub fn get_entity(&self, id: impl Into<EntityId>) -> Option<&RelationalEntity> {
        self.entities.get(id.into().0)
    }

    pub fn entity_by_name(&self, name: &str) -> Option<&RelationalEntity> {
        self.lookup.get(name).map(|id| self.entity(id))
    }

    /// The descriptor for `T`, if `T` was registered.
    pub fn entity_for<T: Entity>(&self) -> Option<&RelationalEntity> {
        self.entity_by_name(T::NAME)
    }

    /// Get a property by id
    pub fn property(&self, id: impl Into<PropertyId>) -> &RelationalProperty {
        let id = id.into();
        self.entity(id.entity).property(id)
    }

    /// Resolves a property's owner back-reference.
    pub fn owner_of<P>(&self, property: &P) -> &RelationalEntity
    where
        P: PersistentProperty + ?Sized,
    {
        self.entity(property.owner())
    }

    /// Resolves a dotted property path, e.g. `shipping.street`, starting at
    /// `root`. Steps after the first descend into the previous step's
    /// embedded, entity or referenced type.
    ///
    /// Returns `None` if a step names an unknown property or tries to
    /// descend through a simple property.
    pub fn resolve_path(
        &self,
        root: impl Into<EntityId>,
        dot_path: &str,
    ) -> Option<&RelationalProperty> {
        let mut entity = self.entity(root);
        let mut steps = dot_path.split('.').peekable();
        loop {
            let property = entity.property_by_name(steps.next()?)?;

            if steps.peek().is_none() {
                return Some(property);
            }

            entity = self.entity(property.target()?);
        }
    }

    pub fn naming_strategy(&self) -> &dyn NamingStrategy {
        &*self.naming
    }
}
