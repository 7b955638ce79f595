//! Type descriptions fed into discovery.
//!
//! These describe a Rust type the way the derive macro sees it: property
//! names, application-level types and mapping attributes. Nothing here is
//! resolved; [`Builder`](super::Builder) turns them into relational
//! descriptors.

mod entity;
pub use entity::Entity;

mod field;
pub use field::{EmbeddedAttr, Field, FieldName, OnEmpty};

mod model;
pub use model::Model;
