use crate::{ResultSetExtractor, RowMapper};

use std::{fmt, sync::Arc};

/// Marks a repository method as backed by a literal statement.
///
/// The statement is passed to the executor verbatim; named parameters such
/// as `:name` are bound from the method's arguments. Rows are converted by
/// `row_mapper` if set, else by `result_set_extractor`, else by the
/// repository's default conversion.
///
/// A directive may name both strategies, but a repository refuses to be
/// built from such a method.
pub struct Query<T> {
    /// The statement to run
    pub statement: String,

    /// Converts each row into a value
    pub row_mapper: Option<Arc<dyn RowMapper<T>>>,

    /// Converts the whole result set at once
    pub result_set_extractor: Option<Arc<dyn ResultSetExtractor<T>>>,

    /// True if the statement changes data and yields an affected-row count
    pub modifying: bool,
}

impl<T> Query<T> {
    pub fn new(statement: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
            row_mapper: None,
            result_set_extractor: None,
            modifying: false,
        }
    }

    pub fn row_mapper(mut self, mapper: impl RowMapper<T>) -> Self {
        self.row_mapper = Some(Arc::new(mapper));
        self
    }

    pub fn result_set_extractor(mut self, extractor: impl ResultSetExtractor<T>) -> Self {
        self.result_set_extractor = Some(Arc::new(extractor));
        self
    }

    pub fn modifying(mut self) -> Self {
        self.modifying = true;
        self
    }

    pub fn statement(&self) -> &str {
        &self.statement
    }

    pub fn has_row_mapper(&self) -> bool {
        self.row_mapper.is_some()
    }

    pub fn has_result_set_extractor(&self) -> bool {
        self.result_set_extractor.is_some()
    }
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            statement: self.statement.clone(),
            row_mapper: self.row_mapper.clone(),
            result_set_extractor: self.result_set_extractor.clone(),
            modifying: self.modifying,
        }
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("statement", &self.statement)
            .field("row_mapper", &self.row_mapper.is_some())
            .field("result_set_extractor", &self.result_set_extractor.is_some())
            .field("modifying", &self.modifying)
            .finish()
    }
}
