pub mod app;
pub use app::Entity;

mod builder;
pub use builder::Builder;

mod columns;
pub use columns::{ChildTable, ChildTarget, Column, ColumnKind, EntityColumns, PropertyPath};

mod context;
pub use context::MappingContext;

pub mod db;

mod entity;
pub use entity::{EntityId, RelationalEntity};

mod naming;
pub use naming::{DefaultNamingStrategy, NamingStrategy};

mod property;
pub use property::{
    Child, Embedded, PersistentProperty, PropertyId, PropertyKind, Reference, RelationalProperty,
    RelationalPersistentProperty,
};

mod verify;
