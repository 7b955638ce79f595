mod params;
pub use params::Params;

mod result_set;
pub use result_set::{ResultSet, Row};

use crate::async_trait;

use std::fmt::Debug;

/// Runs literal statements with named parameters.
///
/// Statements are passed through untouched; resolving `:name` placeholders
/// against `params` is up to the implementation.
#[async_trait]
pub trait NamedParameterExecutor: Debug + Send + Sync + 'static {
    /// Execute a statement producing rows
    async fn query(&self, sql: &str, params: &Params) -> crate::Result<ResultSet>;

    /// Execute a statement and return the number of affected rows
    async fn update(&self, sql: &str, params: &Params) -> crate::Result<u64>;
}
