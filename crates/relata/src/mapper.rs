use relata_core::{
    driver::{ResultSet, Row},
    stmt::{FromValue, Value},
    Result,
};

use std::{fmt, marker::PhantomData};

/// Converts a single row into a value.
///
/// Implemented for closures taking the row and its zero-based position.
pub trait RowMapper<T>: Send + Sync + 'static {
    fn map_row(&self, row: &Row, row_num: usize) -> Result<T>;
}

/// Converts a whole result set at once.
///
/// Implemented for closures taking the result set.
pub trait ResultSetExtractor<T>: Send + Sync + 'static {
    fn extract(&self, rows: ResultSet) -> Result<Vec<T>>;
}

impl<T, F> RowMapper<T> for F
where
    F: Fn(&Row, usize) -> Result<T> + Send + Sync + 'static,
{
    fn map_row(&self, row: &Row, row_num: usize) -> Result<T> {
        self(row, row_num)
    }
}

impl<T, F> ResultSetExtractor<T> for F
where
    F: Fn(ResultSet) -> Result<Vec<T>> + Send + Sync + 'static,
{
    fn extract(&self, rows: ResultSet) -> Result<Vec<T>> {
        self(rows)
    }
}

/// Default row conversion for a type.
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> Result<Self>;
}

impl FromRow for Row {
    fn from_row(row: &Row) -> Result<Self> {
        Ok(row.clone())
    }
}

impl FromRow for Vec<Value> {
    fn from_row(row: &Row) -> Result<Self> {
        Ok(row.values().to_vec())
    }
}

impl<T: FromValue> FromRow for Option<T> {
    fn from_row(row: &Row) -> Result<Self> {
        match row.get(0) {
            Some(_) => row.try_get_at(0),
            None => Ok(None),
        }
    }
}

// Single-column results read the first column.
macro_rules! impl_from_row_for_value {
    ( $( $ty:ty ),* ) => {
        $(
            impl FromRow for $ty {
                fn from_row(row: &Row) -> Result<Self> {
                    row.try_get_at(0)
                }
            }
        )*
    };
}

impl_from_row_for_value!(
    Value,
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    String,
    uuid::Uuid
);

/// Row mapper using the target type's [`FromRow`] conversion.
pub struct EntityRowMapper<T> {
    _p: PhantomData<fn() -> T>,
}

impl<T> EntityRowMapper<T> {
    pub fn new() -> Self {
        Self { _p: PhantomData }
    }
}

impl<T> Default for EntityRowMapper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FromRow + 'static> RowMapper<T> for EntityRowMapper<T> {
    fn map_row(&self, row: &Row, _row_num: usize) -> Result<T> {
        T::from_row(row)
    }
}

impl<T> fmt::Debug for EntityRowMapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityRowMapper<{}>", std::any::type_name::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Row {
        ResultSet::new(["count", "label"], vec![vec![Value::I64(3), Value::from("x")]])
            .unwrap()
            .into_iter()
            .next()
            .unwrap()
    }

    #[test]
    fn scalars_read_the_first_column() {
        assert_eq!(i64::from_row(&row()).unwrap(), 3);
        assert_eq!(Option::<i64>::from_row(&row()).unwrap(), Some(3));
        assert!(String::from_row(&row()).is_err());
    }

    #[test]
    fn closures_are_row_mappers() {
        let mapper = |row: &Row, row_num: usize| -> Result<String> {
            Ok(format!("{row_num}:{}", row.try_get::<String>("label")?))
        };

        assert_eq!(mapper.map_row(&row(), 4).unwrap(), "4:x");
    }

    #[test]
    fn entity_row_mapper_uses_from_row() {
        let mapper = EntityRowMapper::<Vec<Value>>::new();
        assert_eq!(
            mapper.map_row(&row(), 0).unwrap(),
            [Value::I64(3), Value::from("x")]
        );
    }
}
