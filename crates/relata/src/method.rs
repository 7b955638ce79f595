use crate::Query;

use std::fmt;

/// A repository method declaration: its name, its parameter names in
/// declaration order, and the directive backing it.
pub struct QueryMethod<T> {
    pub name: String,

    /// Parameter names, bound positionally to invocation arguments
    pub params: Vec<String>,

    /// `None` if the method carries no directive
    pub query: Option<Query<T>>,
}

impl<T> QueryMethod<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: vec![],
            query: None,
        }
    }

    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.params.push(name.into());
        self
    }

    pub fn query(mut self, query: Query<T>) -> Self {
        self.query = Some(query);
        self
    }
}

impl<T> Clone for QueryMethod<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            params: self.params.clone(),
            query: self.query.clone(),
        }
    }
}

impl<T> fmt::Debug for QueryMethod<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryMethod")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("query", &self.query)
            .finish()
    }
}
