use crate::{EntityRowMapper, FromRow, Query, QueryMethod, ResultSetExtractor, RowMapper};

use indexmap::IndexMap;
use relata_core::{
    driver::{NamedParameterExecutor, Params, ResultSet},
    schema::{Entity, EntityId, MappingContext, RelationalEntity},
    stmt::Value,
    err, Error, Result,
};

use std::{fmt, sync::Arc};

/// Builds repositories whose methods run literal statements through an
/// executor.
#[derive(Debug, Clone)]
pub struct RepositoryFactory {
    context: Arc<MappingContext>,
    executor: Arc<dyn NamedParameterExecutor>,
}

/// Collects method declarations for one entity type.
pub struct RepositoryBuilder<T> {
    context: Arc<MappingContext>,
    executor: Arc<dyn NamedParameterExecutor>,
    methods: Vec<QueryMethod<T>>,
}

/// A validated set of query methods for one entity type.
pub struct Repository<T> {
    context: Arc<MappingContext>,
    executor: Arc<dyn NamedParameterExecutor>,

    /// The entity this repository serves
    entity: EntityId,

    methods: IndexMap<String, Method<T>>,
}

struct Method<T> {
    name: String,
    params: Vec<String>,
    query: Query<T>,

    /// `None` for modifying methods, which yield an affected-row count
    conversion: Option<Conversion<T>>,
}

/// How rows become values, resolved once when the repository is built.
enum Conversion<T> {
    Rows(Arc<dyn RowMapper<T>>),
    ResultSet(Arc<dyn ResultSetExtractor<T>>),
}

impl RepositoryFactory {
    pub fn new(context: Arc<MappingContext>, executor: Arc<dyn NamedParameterExecutor>) -> Self {
        Self { context, executor }
    }

    pub fn context(&self) -> &Arc<MappingContext> {
        &self.context
    }

    pub fn repository<T: Entity>(&self) -> RepositoryBuilder<T> {
        RepositoryBuilder {
            context: self.context.clone(),
            executor: self.executor.clone(),
            methods: vec![],
        }
    }
}

impl<T: Entity + 'static> RepositoryBuilder<T> {
    pub fn method(mut self, method: QueryMethod<T>) -> Self {
        self.methods.push(method);
        self
    }

    /// Builds the repository, converting rows with `T`'s [`FromRow`]
    /// conversion where a method configures no strategy of its own.
    pub fn build(self) -> Result<Repository<T>>
    where
        T: FromRow,
    {
        self.build_with(EntityRowMapper::<T>::new())
    }

    /// Builds the repository, converting rows with `default` where a method
    /// configures no strategy of its own.
    pub fn build_with(self, default: impl RowMapper<T>) -> Result<Repository<T>> {
        let Some(entity) = self.context.entity_for::<T>() else {
            return Err(Error::invalid_configuration(format!(
                "entity `{}` is not registered with the mapping context",
                T::NAME
            )));
        };

        let default: Arc<dyn RowMapper<T>> = Arc::new(default);
        let mut methods = IndexMap::with_capacity(self.methods.len());

        for method in self.methods {
            let method = Method::new(method, &default)?;

            if methods.contains_key(&method.name) {
                return Err(Error::invalid_configuration(format!(
                    "method `{}` is declared more than once",
                    method.name
                )));
            }

            log::trace!(
                "query method `{}::{}`; statement={:?} modifying={}",
                T::NAME,
                method.name,
                method.query.statement,
                method.query.modifying
            );

            methods.insert(method.name.clone(), method);
        }

        log::debug!(
            "repository for `{}` built; methods={}",
            entity.name,
            methods.len()
        );

        Ok(Repository {
            entity: entity.id,
            context: self.context,
            executor: self.executor,
            methods,
        })
    }
}

impl<T: 'static> Method<T> {
    fn new(method: QueryMethod<T>, default: &Arc<dyn RowMapper<T>>) -> Result<Self> {
        let QueryMethod {
            name,
            params,
            query,
        } = method;

        let Some(query) = query else {
            return Err(Error::invalid_configuration(format!(
                "no query specified on method `{name}`"
            )));
        };

        if query.statement.trim().is_empty() {
            return Err(Error::invalid_configuration(format!(
                "method `{name}` has an empty statement"
            )));
        }

        for (index, param) in params.iter().enumerate() {
            if params[..index].contains(param) {
                return Err(Error::invalid_configuration(format!(
                    "method `{name}` declares parameter `{param}` more than once"
                )));
            }
        }

        let conversion = match (&query.row_mapper, &query.result_set_extractor) {
            (Some(_), Some(_)) => {
                return Err(Error::invalid_configuration(format!(
                    "method `{name}` declares both a row mapper and a result set extractor"
                )));
            }
            (Some(_), None) | (None, Some(_)) if query.modifying => {
                return Err(Error::invalid_configuration(format!(
                    "modifying method `{name}` cannot convert rows"
                )));
            }
            (None, None) if query.modifying => None,
            (Some(mapper), None) => Some(Conversion::Rows(mapper.clone())),
            (None, Some(extractor)) => Some(Conversion::ResultSet(extractor.clone())),
            (None, None) => Some(Conversion::Rows(default.clone())),
        };

        Ok(Self {
            name,
            params,
            query,
            conversion,
        })
    }

    fn bind(&self, args: Vec<Value>) -> Result<Params> {
        if args.len() != self.params.len() {
            return Err(Error::invalid_argument(format!(
                "method `{}` takes {} arguments but {} were supplied",
                self.name,
                self.params.len(),
                args.len()
            )));
        }

        Ok(self.params.iter().cloned().zip(args).collect())
    }

    /// Attributes an executor failure to this method.
    fn context(&self, err: Error) -> Error {
        err.context(err!("query method `{}` failed", self.name))
    }

}

impl<T: 'static> Conversion<T> {
    fn convert(&self, rows: ResultSet) -> Result<Vec<T>> {
        match self {
            Conversion::Rows(mapper) => rows
                .into_iter()
                .enumerate()
                .map(|(row_num, row)| mapper.map_row(&row, row_num))
                .collect(),
            Conversion::ResultSet(extractor) => extractor.extract(rows),
        }
    }
}

impl<T: Entity + 'static> Repository<T> {
    pub fn context(&self) -> &MappingContext {
        &self.context
    }

    /// The descriptor of the entity this repository serves.
    pub fn entity(&self) -> &RelationalEntity {
        self.context.entity(self.entity)
    }

    pub fn method_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.methods.keys().map(String::as_str)
    }

    /// Runs `method` and converts every returned row.
    pub async fn find_all(
        &self,
        method: &str,
        args: impl IntoIterator<Item = Value>,
    ) -> Result<Vec<T>> {
        let method = self.method(method)?;

        let Some(conversion) = &method.conversion else {
            return Err(Error::invalid_argument(format!(
                "method `{}` is modifying; invoke it with `update`",
                method.name
            )));
        };

        let params = method.bind(args.into_iter().collect())?;

        log::trace!(
            "invoking `{}::{}`; params={:?}",
            T::NAME,
            method.name,
            params
        );

        let rows = self
            .executor
            .query(&method.query.statement, &params)
            .await
            .map_err(|err| method.context(err))?;

        conversion.convert(rows)
    }

    /// Runs `method`, expecting exactly one result.
    pub async fn find_one(
        &self,
        method: &str,
        args: impl IntoIterator<Item = Value>,
    ) -> Result<T> {
        match self.find_optional(method, args).await? {
            Some(value) => Ok(value),
            None => Err(Error::record_not_found(format!(
                "method `{method}` returned no rows"
            ))),
        }
    }

    /// Runs `method`, expecting at most one result.
    pub async fn find_optional(
        &self,
        method: &str,
        args: impl IntoIterator<Item = Value>,
    ) -> Result<Option<T>> {
        let mut results = self.find_all(method, args).await?;

        if results.len() > 1 {
            return Err(Error::too_many_records(format!(
                "method `{method}` returned {} rows",
                results.len()
            )));
        }

        Ok(results.pop())
    }

    /// Runs a modifying `method` and returns the number of affected rows.
    pub async fn update(&self, method: &str, args: impl IntoIterator<Item = Value>) -> Result<u64> {
        let method = self.method(method)?;

        if method.conversion.is_some() {
            return Err(Error::invalid_argument(format!(
                "method `{}` is not modifying; invoke it with a `find_*` method",
                method.name
            )));
        }

        let params = method.bind(args.into_iter().collect())?;

        log::trace!(
            "invoking `{}::{}`; params={:?}",
            T::NAME,
            method.name,
            params
        );

        self.executor
            .update(&method.query.statement, &params)
            .await
            .map_err(|err| method.context(err))
    }

    fn method(&self, name: &str) -> Result<&Method<T>> {
        self.methods.get(name).ok_or_else(|| {
            Error::invalid_argument(format!(
                "repository for `{}` has no method `{name}`",
                T::NAME
            ))
        })
    }
}

impl<T> fmt::Debug for RepositoryBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepositoryBuilder")
            .field("executor", &self.executor)
            .field("methods", &self.methods)
            .finish()
    }
}

impl<T> fmt::Debug for Repository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("entity", &self.entity)
            .field("executor", &self.executor)
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .finish()
    }
}
