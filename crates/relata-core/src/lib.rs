pub mod driver;
pub use driver::NamedParameterExecutor;

mod error;
pub use error::Error;

pub mod schema;
pub use schema::{Entity, MappingContext};

pub mod stmt;

/// A Result type alias that uses relata's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
