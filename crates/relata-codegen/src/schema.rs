mod column;
pub(crate) use column::Column;

mod embedded_attr;
pub(crate) use embedded_attr::{EmbeddedAttr, OnEmpty};

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::Field;

mod model;
pub(crate) use model::Model;

mod model_attr;
pub(crate) use model_attr::ModelAttr;
