mod columns;

use super::{
    app::{self, Entity},
    db::{self, SqlType},
    Child, DefaultNamingStrategy, Embedded, EntityColumns, EntityId, MappingContext,
    NamingStrategy, PropertyId, PropertyKind, Reference, RelationalEntity, RelationalProperty,
};
use crate::{stmt::Type, Error, Result};
use columns::ResolveColumns;
use indexmap::IndexMap;
use std::sync::Arc;

/// Collects type descriptions and configuration, then discovers the
/// relational metadata for all of them at once.
#[derive(Debug, Default)]
pub struct Builder {
    models: Vec<app::Model>,

    naming: Option<Arc<dyn NamingStrategy>>,

    /// If set, prefix all table names with this string
    table_name_prefix: Option<String>,
}

/// Used to track state during discovery
struct Discover<'a> {
    builder: &'a Builder,

    naming: &'a dyn NamingStrategy,

    /// Maps entity names to identifiers
    lookup: IndexMap<String, EntityId>,

    /// Table name for each entity, by index
    table_names: Vec<String>,

    /// Column type of each entity's id property, by index
    id_types: Vec<Option<Type>>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` and, transitively, every entity type its properties
    /// mention. Registering the same type again has no effect.
    pub fn register<T: Entity>(&mut self) -> &mut Self {
        if self.is_registered(T::NAME) {
            return self;
        }

        self.models.push(T::schema());
        T::register_related(self);
        self
    }

    /// Adds a hand-written type description.
    pub fn model(&mut self, model: app::Model) -> &mut Self {
        self.models.push(model);
        self
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.models.iter().any(|model| model.name == name)
    }

    pub fn naming_strategy(&mut self, naming: impl NamingStrategy) -> &mut Self {
        self.naming = Some(Arc::new(naming));
        self
    }

    /// Places all tables in `schema`, keeping default names otherwise.
    pub fn schema(&mut self, schema: &str) -> &mut Self {
        self.naming_strategy(DefaultNamingStrategy::with_schema(schema))
    }

    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    /// Discovers relational metadata for every registered type.
    ///
    /// The builder is left untouched, so building twice yields two equal
    /// contexts.
    pub fn build(&self) -> Result<MappingContext> {
        let naming: Arc<dyn NamingStrategy> = match &self.naming {
            Some(naming) => naming.clone(),
            None => Arc::new(DefaultNamingStrategy::new()),
        };

        let mut discover = Discover {
            builder: self,
            naming: &*naming,
            lookup: IndexMap::new(),
            table_names: vec![],
            id_types: vec![],
        };

        discover.register_names()?;
        discover.compute_id_types()?;

        let mut entities = self
            .models
            .iter()
            .enumerate()
            .map(|(index, model)| discover.discover_entity(EntityId(index), model))
            .collect::<Result<Vec<_>>>()?;

        // Columns can only be resolved once every entity's properties are
        // known, since embedded types are walked recursively.
        let columns = (0..entities.len())
            .map(|index| ResolveColumns::new(&entities, &*naming, EntityId(index)).resolve())
            .collect::<Result<Vec<EntityColumns>>>()?;

        for (entity, columns) in entities.iter_mut().zip(columns) {
            entity.columns = columns;
        }

        let context = MappingContext {
            entities,
            lookup: discover.lookup,
            naming,
        };

        context.verify()?;

        log::debug!(
            "mapping context built; entities={}",
            context.entities.len()
        );

        Ok(context)
    }
}

impl Discover<'_> {
    fn register_names(&mut self) -> Result<()> {
        for (index, model) in self.builder.models.iter().enumerate() {
            if self
                .lookup
                .insert(model.name.clone(), EntityId(index))
                .is_some()
            {
                return Err(Error::invalid_schema(format!(
                    "entity `{}` is registered more than once",
                    model.name
                )));
            }

            let table_name = match &model.table_name {
                Some(table_name) => self.prefix_table_name(table_name),
                None => self.prefix_table_name(&self.naming.table_name(&model.name)),
            };

            self.table_names.push(table_name);
        }

        Ok(())
    }

    fn compute_id_types(&mut self) -> Result<()> {
        for model in &self.builder.models {
            let mut id_fields = model.fields.iter().filter(|field| field.primary_key);

            let id_type = match (id_fields.next(), id_fields.next()) {
                (None, _) => None,
                (Some(field), None) => {
                    if !field.ty.is_simple() || field.embedded.is_some() {
                        return Err(Error::invalid_schema(format!(
                            "id property `{}::{}` must be a simple value, found `{}`",
                            model.name, field.name.app_name, field.ty
                        )));
                    }

                    Some(db::column_type(&field.ty))
                }
                (Some(_), Some(_)) => {
                    return Err(Error::invalid_schema(format!(
                        "entity `{}` declares more than one id property",
                        model.name
                    )));
                }
            };

            self.id_types.push(id_type);
        }

        Ok(())
    }

    fn discover_entity(&self, id: EntityId, model: &app::Model) -> Result<RelationalEntity> {
        let table_name = self.table_names[id.0].clone();
        let mut properties: Vec<RelationalProperty> = Vec::with_capacity(model.fields.len());
        let mut id_property = None;
        let mut version_property = None;

        for (index, field) in model.fields.iter().enumerate() {
            if properties
                .iter()
                .any(|property| property.name == field.name.app_name)
            {
                return Err(Error::invalid_schema(format!(
                    "entity `{}` declares property `{}` more than once",
                    model.name, field.name.app_name
                )));
            }

            let property = self.discover_property(id.property(index), model, field)?;

            if property.primary_key {
                id_property = Some(property.id);
            }

            if property.version {
                if version_property.is_some() {
                    return Err(Error::invalid_schema(format!(
                        "entity `{}` declares more than one version property",
                        model.name
                    )));
                }
                version_property = Some(property.id);
            }

            log::trace!(
                "discovered property `{}::{}`; kind={:?} column={} column_type={} sql_type={}",
                model.name,
                property.name,
                property.kind,
                property.column_name,
                property.column_type,
                property.sql_type,
            );

            properties.push(property);
        }

        log::debug!(
            "discovered entity `{}`; table={} properties={}",
            model.name,
            table_name,
            properties.len()
        );

        Ok(RelationalEntity {
            id,
            name: model.name.clone(),
            qualified_table_name: self.naming.qualified_table_name(&table_name),
            table_name,
            properties,
            id_property,
            version_property,
            columns: EntityColumns::default(),
        })
    }

    fn discover_property(
        &self,
        id: PropertyId,
        model: &app::Model,
        field: &app::Field,
    ) -> Result<RelationalProperty> {
        let full_name = format!("{}::{}", model.name, field.name.app_name);
        let kind = self.classify(field, &full_name)?;

        if field.version && !(kind.is_column() && is_integer(&field.ty)) {
            return Err(Error::invalid_schema(format!(
                "version property `{full_name}` must be an integer, found `{}`",
                field.ty
            )));
        }

        let owner_table = &self.table_names[id.entity.0];

        let column_name = match field.name.storage_name() {
            Some(name) => name.to_string(),
            None => self.naming.column_name(&field.name.app_name),
        };

        let reverse_column_name = match &field.reverse_column {
            Some(name) => name.clone(),
            None => self.naming.reverse_column_name(owner_table),
        };

        let qualified = kind.is_relation() && (field.ty.is_map() || field.ty.is_list_like());

        let key_column = match (&field.key_column, qualified) {
            (Some(name), true) => Some(name.clone()),
            (None, true) => Some(self.naming.key_column(&reverse_column_name)),
            (None, false) => None,
            (Some(_), false) => {
                return Err(Error::invalid_schema(format!(
                    "field `{full_name}` declares a key column but is neither a map nor a list of entities or references"
                )));
            }
        };

        let qualifier_column_type = match &field.ty {
            _ if !qualified => None,
            Type::Map(key, _) => Some(db::column_type(key)),
            _ => Some(Type::I32),
        };

        let column_type = match &kind {
            PropertyKind::Column => db::column_type(&field.ty),
            PropertyKind::Embedded(embedded) => Type::model(self.entity_name(embedded.target)),
            PropertyKind::Entity(child) => match &self.id_types[child.target.0] {
                Some(id_type) => id_type.clone(),
                None => Type::model(self.entity_name(child.target)),
            },
            PropertyKind::Reference(reference) => self.reference_id_type(reference, &full_name)?,
        };

        let sql_type = SqlType::for_column_type(&column_type);

        Ok(RelationalProperty {
            id,
            name: field.name.app_name.clone(),
            ty: field.ty.clone(),
            nullable: field.nullable,
            primary_key: field.primary_key,
            version: field.version,
            kind,
            column_name,
            reverse_column_name,
            key_column,
            column_type,
            sql_type,
            qualifier_column_type,
        })
    }

    /// Picks the storage classification. References win over everything
    /// else; embedding is explicit; remaining entity-typed properties are
    /// children.
    fn classify(&self, field: &app::Field, full_name: &str) -> Result<PropertyKind> {
        let ty = &field.ty;

        if let Some(attr) = &field.embedded {
            let Type::Model(name) = ty else {
                return Err(Error::invalid_schema(format!(
                    "field `{full_name}` is embedded but its type `{ty}` is not an entity"
                )));
            };

            return Ok(PropertyKind::Embedded(Embedded {
                target: self.resolve(name, full_name)?,
                prefix: attr.prefix.clone(),
                on_empty: attr.on_empty,
            }));
        }

        if let Type::Map(key, _) = ty {
            if !key.is_simple() {
                return Err(Error::invalid_schema(format!(
                    "map key of `{full_name}` must be a simple type, found `{key}`"
                )));
            }
        }

        match ty.actual() {
            Type::Ref(name) => Ok(PropertyKind::Reference(Reference {
                target: self.resolve(name, full_name)?,
            })),
            Type::Model(name) => Ok(PropertyKind::Entity(Child {
                target: self.resolve(name, full_name)?,
            })),
            actual if actual.innermost().entity_name().is_some() => {
                Err(Error::invalid_schema(format!(
                    "field `{full_name}` nests collections of entities (`{ty}`), which is not supported"
                )))
            }
            actual if ty.is_map() => Err(Error::invalid_schema(format!(
                "map values of `{full_name}` must be entities or references, found `{actual}`"
            ))),
            _ => Ok(PropertyKind::Column),
        }
    }

    fn resolve(&self, name: &str, full_name: &str) -> Result<EntityId> {
        self.lookup.get(name).copied().ok_or_else(|| {
            Error::invalid_schema(format!(
                "field `{full_name}` references `{name}`, which was not registered \
                 with the mapping context; did you forget to register it with `MappingContext::builder()`?"
            ))
        })
    }

    fn reference_id_type(&self, reference: &Reference, full_name: &str) -> Result<Type> {
        self.id_types[reference.target.0].clone().ok_or_else(|| {
            Error::invalid_schema(format!(
                "field `{full_name}` references `{}`, which has no id property",
                self.entity_name(reference.target)
            ))
        })
    }

    fn entity_name(&self, id: EntityId) -> &str {
        &self.builder.models[id.0].name
    }

    fn prefix_table_name(&self, name: &str) -> String {
        if let Some(prefix) = &self.builder.table_name_prefix {
            format!("{prefix}{name}")
        } else {
            name.to_string()
        }
    }
}

fn is_integer(ty: &Type) -> bool {
    matches!(
        ty,
        Type::I8 | Type::I16 | Type::I32 | Type::I64 | Type::U8 | Type::U16 | Type::U32 | Type::U64
    )
}
