//! Storage-side view of property types.
//!
//! Discovery derives two things from a property's application-level
//! [`Type`](crate::stmt::Type): the column type, i.e. the type a driver
//! should bind and read, and the [`SqlType`] tag used when binding the
//! value as a statement parameter.

mod column_type;
pub use column_type::column_type;

mod sql_type;
pub use sql_type::SqlType;
