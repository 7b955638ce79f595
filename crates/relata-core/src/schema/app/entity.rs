use super::Model;
use crate::{schema::Builder, stmt::Primitive};

/// A Rust type that maps to relational storage.
///
/// Usually implemented with `#[derive(Entity)]`.
pub trait Entity: Primitive {
    /// Entity name. Matches the name carried by `Type::Model` and
    /// `Type::Ref` for this type.
    const NAME: &'static str;

    /// Describes the entity's properties.
    fn schema() -> Model;

    /// Registers the entity types this entity's properties mention.
    fn register_related(_builder: &mut Builder) {}
}
