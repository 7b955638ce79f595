use crate::{
    schema::{
        app::OnEmpty, ChildTable, ChildTarget, Column, ColumnKind, EntityColumns, EntityId,
        NamingStrategy, PersistentProperty, PropertyKind, PropertyPath, RelationalEntity,
        RelationalPersistentProperty, RelationalProperty,
    },
    Error, Result,
};
use indexmap::IndexMap;

/// Walks an entity's properties, flattening embedded values into the
/// entity's own table and collecting child tables.
pub(super) struct ResolveColumns<'a> {
    entities: &'a [RelationalEntity],

    naming: &'a dyn NamingStrategy,

    /// The entity whose table is being laid out
    root: &'a RelationalEntity,

    columns: Vec<Column>,

    children: Vec<ChildTable>,

    /// Entities currently being walked, root first
    stack: Vec<EntityId>,
}

impl<'a> ResolveColumns<'a> {
    pub(super) fn new(
        entities: &'a [RelationalEntity],
        naming: &'a dyn NamingStrategy,
        root: EntityId,
    ) -> Self {
        Self {
            entities,
            naming,
            root: &entities[root.0],
            columns: vec![],
            children: vec![],
            stack: vec![],
        }
    }

    pub(super) fn resolve(mut self) -> Result<EntityColumns> {
        let root = self.root;

        self.stack.push(root.id);
        self.walk(root, "", &PropertyPath::root(), false)?;
        self.stack.pop();

        self.check_duplicates()?;

        Ok(EntityColumns {
            columns: self.columns,
            children: self.children,
        })
    }

    fn walk(
        &mut self,
        entity: &'a RelationalEntity,
        prefix: &str,
        parent: &PropertyPath,
        force_nullable: bool,
    ) -> Result<()> {
        let nested = !parent.is_empty();

        for property in &entity.properties {
            let path = parent.child(property.id, &property.name);

            match &property.kind {
                PropertyKind::Column => {
                    let kind = if nested {
                        ColumnKind::Scalar
                    } else if property.primary_key {
                        ColumnKind::Id
                    } else if property.version {
                        ColumnKind::Version
                    } else {
                        ColumnKind::Scalar
                    };

                    self.push_column(property, prefix, path, force_nullable, kind);
                }
                PropertyKind::Reference(reference)
                    if property.is_collection_like() || property.is_map() =>
                {
                    if nested {
                        return Err(relation_in_embedded(entity, property));
                    }

                    let table = self.naming.qualified_table_name(
                        &self.naming.reference_table_name(
                            &self.root.table_name,
                            &property.column_name,
                        ),
                    );

                    self.push_child(
                        property,
                        path,
                        table,
                        ChildTarget::Reference {
                            target: reference.target,
                            column: property.column_name.clone(),
                        },
                    );
                }
                PropertyKind::Reference(reference) => {
                    let kind = ColumnKind::Reference(reference.target);
                    self.push_column(property, prefix, path, force_nullable, kind);
                }
                PropertyKind::Entity(child) => {
                    if nested {
                        return Err(relation_in_embedded(entity, property));
                    }

                    let table = self.entities[child.target.0].qualified_table_name.clone();
                    self.push_child(property, path, table, ChildTarget::Entity(child.target));
                }
                PropertyKind::Embedded(embedded) => {
                    let target = &self.entities[embedded.target.0];

                    if self.stack.contains(&target.id) {
                        return Err(Error::invalid_schema(format!(
                            "embedded type `{}` contains itself through `{}::{}`",
                            target.name, entity.name, property.name
                        )));
                    }

                    let nullable = force_nullable
                        || property.nullable
                        || embedded.on_empty == OnEmpty::UseNull;

                    self.stack.push(target.id);
                    self.walk(target, &format!("{prefix}{}", embedded.prefix), &path, nullable)?;
                    self.stack.pop();
                }
            }
        }

        Ok(())
    }

    fn push_column(
        &mut self,
        property: &RelationalProperty,
        prefix: &str,
        path: PropertyPath,
        force_nullable: bool,
        kind: ColumnKind,
    ) {
        log::trace!(
            "column `{prefix}{}` of `{}` maps `{}`",
            property.column_name,
            self.root.table_name,
            path
        );

        self.columns.push(Column {
            name: format!("{prefix}{}", property.column_name),
            path,
            ty: property.column_type.clone(),
            sql_type: property.sql_type,
            nullable: force_nullable || property.nullable,
            kind,
        });
    }

    fn push_child(
        &mut self,
        property: &RelationalProperty,
        path: PropertyPath,
        table: String,
        target: ChildTarget,
    ) {
        self.children.push(ChildTable {
            path,
            table,
            target,
            reverse_column: property.reverse_column_name().to_string(),
            key_column: property.key_column().map(str::to_string),
            key_ty: property.qualifier_column_type().cloned(),
            ordered: property.is_ordered(),
        });
    }

    fn check_duplicates(&self) -> Result<()> {
        let mut seen = IndexMap::<&str, &PropertyPath>::new();

        for column in &self.columns {
            if let Some(existing) = seen.insert(&column.name, &column.path) {
                return Err(Error::invalid_schema(format!(
                    "column `{}` of table `{}` is mapped by both `{}` and `{}`",
                    column.name, self.root.table_name, existing, column.path
                )));
            }
        }

        Ok(())
    }
}

fn relation_in_embedded(entity: &RelationalEntity, property: &RelationalProperty) -> Error {
    Error::invalid_schema(format!(
        "field `{}::{}` is a relation inside an embedded type; \
         only simple values and single references can be embedded",
        entity.name, property.name
    ))
}
