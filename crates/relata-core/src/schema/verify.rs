use super::{ChildTarget, MappingContext};
use crate::{Error, Result};

impl MappingContext {
    /// Cross-entity checks that need every entity's columns resolved.
    pub(super) fn verify(&self) -> Result<()> {
        for entity in self.entities() {
            for child in &entity.columns.children {
                if child.key_column.as_deref() == Some(&child.reverse_column[..]) {
                    return Err(Error::invalid_schema(format!(
                        "`{}.{}` uses `{}` as both reverse and key column",
                        entity.name, child.path, child.reverse_column
                    )));
                }

                let ChildTarget::Entity(target) = child.target else {
                    continue;
                };

                let target = self.entity(target);
                let link_columns =
                    std::iter::once(&child.reverse_column).chain(child.key_column.as_ref());

                for name in link_columns {
                    if let Some(column) = target.columns.column(name) {
                        return Err(Error::invalid_schema(format!(
                            "column `{name}` of `{}` links `{}.{}` but is already mapped by `{}.{}`",
                            target.table_name, entity.name, child.path, target.name, column.path
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
