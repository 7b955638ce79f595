mod mapper;
pub use mapper::{EntityRowMapper, FromRow, ResultSetExtractor, RowMapper};

mod method;
pub use method::QueryMethod;

mod query;
pub use query::Query;

mod reference;
pub use reference::Ref;

mod repository;
pub use repository::{Repository, RepositoryBuilder, RepositoryFactory};

pub use relata_macros::Entity;

pub use relata_core::{
    async_trait, bail,
    driver::{self, NamedParameterExecutor, Params, ResultSet, Row},
    err,
    schema::{self, Entity, MappingContext},
    stmt::{self, FromValue, Primitive, Type, Value},
    Error, Result,
};

#[doc(hidden)]
pub mod codegen_support {
    pub use relata_core::{
        schema::{self, Builder, Entity},
        stmt::{Primitive, Type},
    };
}
