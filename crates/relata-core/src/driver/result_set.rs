use crate::{
    stmt::{FromValue, Value},
    Error, Result,
};
use std::sync::Arc;

/// Rows returned by a query, all sharing the same column labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    columns: Arc<[String]>,
    rows: Vec<Row>,
}

/// One row of a [`ResultSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl ResultSet {
    /// Builds a result set, checking every row has one value per column.
    pub fn new<C>(columns: impl IntoIterator<Item = C>, rows: Vec<Vec<Value>>) -> Result<Self>
    where
        C: Into<String>,
    {
        let columns: Arc<[String]> = columns.into_iter().map(Into::into).collect();

        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(index, values)| {
                if values.len() != columns.len() {
                    return Err(Error::invalid_argument(format!(
                        "row {index} has {} values but the result set has {} columns",
                        values.len(),
                        columns.len()
                    )));
                }

                Ok(Row {
                    columns: columns.clone(),
                    values,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { columns, rows })
    }

    pub fn empty() -> Self {
        Self {
            columns: Vec::<String>::new().into(),
            rows: vec![],
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl IntoIterator for ResultSet {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl Row {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn get_by_name(&self, column: &str) -> Option<&Value> {
        let index = self.columns.iter().position(|name| name == column)?;
        self.values.get(index)
    }

    /// Converts the named column's value.
    pub fn try_get<T: FromValue>(&self, column: &str) -> Result<T> {
        match self.get_by_name(column) {
            Some(value) => T::from_value(value.clone()),
            None => Err(Error::invalid_argument(format!(
                "result set has no column `{column}`"
            ))),
        }
    }

    /// Converts the value at `index`.
    pub fn try_get_at<T: FromValue>(&self, index: usize) -> Result<T> {
        match self.get(index) {
            Some(value) => T::from_value(value.clone()),
            None => Err(Error::invalid_argument(format!(
                "row has {} columns; index {index} is out of bounds",
                self.values.len()
            ))),
        }
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}
