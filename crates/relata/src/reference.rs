use relata_core::{
    schema::{Builder, Entity},
    stmt::{FromValue, Primitive, Type, Value},
    Error, Result,
};

use std::{fmt, marker::PhantomData};

/// A reference to another aggregate root, held by its id.
///
/// Properties of type `Ref<T>` are stored as a column holding `T`'s id
/// rather than as a child row.
pub struct Ref<T> {
    id: Value,
    _p: PhantomData<fn() -> T>,
}

impl<T> Ref<T> {
    pub fn new(id: impl Into<Value>) -> Self {
        Self {
            id: id.into(),
            _p: PhantomData,
        }
    }

    pub fn id(&self) -> &Value {
        &self.id
    }

    pub fn into_id(self) -> Value {
        self.id
    }
}

impl<T: Entity> Primitive for Ref<T> {
    fn ty() -> Type {
        Type::reference(T::NAME)
    }

    fn register(builder: &mut Builder) {
        builder.register::<T>();
    }
}

impl<T> FromValue for Ref<T> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null | Value::List(_) => Err(Error::type_conversion(value, "Ref")),
            id => Ok(Self::new(id)),
        }
    }
}

impl<T> From<Ref<T>> for Value {
    fn from(src: Ref<T>) -> Value {
        src.id
    }
}

impl<T> Clone for Ref<T> {
    fn clone(&self) -> Self {
        Self::new(self.id.clone())
    }
}

impl<T> PartialEq for Ref<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> fmt::Debug for Ref<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ref({:?})", self.id)
    }
}
