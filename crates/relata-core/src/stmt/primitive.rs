use super::Type;
use crate::schema::Builder;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// A Rust type that can be the type of a mapped property.
///
/// Implemented here for scalars and std collections, and by
/// `#[derive(Entity)]` for entity types.
pub trait Primitive {
    /// True if `None` is a valid value for the property.
    const NULLABLE: bool = false;

    /// The application-level type of the property.
    fn ty() -> Type;

    /// Registers every entity type mentioned by this type.
    fn register(_builder: &mut Builder) {}
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident ),* ) => {
        $(
            impl Primitive for $ty {
                fn ty() -> Type {
                    Type::$variant
                }
            }
        )*
    };
}

impl_primitive!(
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    uuid::Uuid => Uuid
);

impl<T: Primitive> Primitive for Option<T> {
    const NULLABLE: bool = true;

    fn ty() -> Type {
        T::ty()
    }

    fn register(builder: &mut Builder) {
        T::register(builder);
    }
}

/// `Vec<u8>` is a byte string; every other `Vec` is a list.
impl<T: Primitive> Primitive for Vec<T> {
    fn ty() -> Type {
        sequence_of(T::ty(), |elem| Type::list(elem))
    }

    fn register(builder: &mut Builder) {
        T::register(builder);
    }
}

impl<T: Primitive> Primitive for Box<[T]> {
    fn ty() -> Type {
        sequence_of(T::ty(), |elem| Type::array(elem))
    }

    fn register(builder: &mut Builder) {
        T::register(builder);
    }
}

impl<T: Primitive, const N: usize> Primitive for [T; N] {
    fn ty() -> Type {
        sequence_of(T::ty(), |elem| Type::array(elem))
    }

    fn register(builder: &mut Builder) {
        T::register(builder);
    }
}

/// Sequences of `u8` are byte strings whatever their container.
fn sequence_of(elem: Type, container: fn(Type) -> Type) -> Type {
    match elem {
        Type::U8 => Type::Bytes,
        elem => container(elem),
    }
}

impl<T: Primitive> Primitive for HashSet<T> {
    fn ty() -> Type {
        Type::set(T::ty())
    }

    fn register(builder: &mut Builder) {
        T::register(builder);
    }
}

impl<T: Primitive> Primitive for BTreeSet<T> {
    fn ty() -> Type {
        Type::set(T::ty())
    }

    fn register(builder: &mut Builder) {
        T::register(builder);
    }
}

impl<K: Primitive, V: Primitive> Primitive for HashMap<K, V> {
    fn ty() -> Type {
        Type::map(K::ty(), V::ty())
    }

    fn register(builder: &mut Builder) {
        K::register(builder);
        V::register(builder);
    }
}

impl<K: Primitive, V: Primitive> Primitive for BTreeMap<K, V> {
    fn ty() -> Type {
        Type::map(K::ty(), V::ty())
    }

    fn register(builder: &mut Builder) {
        K::register(builder);
        V::register(builder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_types() {
        assert_eq!(<Option<i64>>::ty(), Type::I64);
        assert!(<Option<i64>>::NULLABLE);
        assert!(!<i64>::NULLABLE);
        assert_eq!(<Vec<u8>>::ty(), Type::Bytes);
        assert_eq!(<Vec<Vec<u8>>>::ty(), Type::list(Type::Bytes));
        assert_eq!(<[[i32; 2]; 3]>::ty(), Type::array(Type::array(Type::I32)));
        assert_eq!(<BTreeSet<String>>::ty(), Type::set(Type::String));
        assert_eq!(
            <HashMap<String, Vec<i64>>>::ty(),
            Type::map(Type::String, Type::list(Type::I64))
        );
    }

    #[test]
    fn byte_sequences_map_alike() {
        use crate::schema::db::{column_type, SqlType};

        let shapes = [
            <Vec<u8>>::ty(),
            <[u8; 16]>::ty(),
            <Box<[u8]>>::ty(),
            <Vec<Vec<u8>>>::ty(),
            <[[u8; 4]; 2]>::ty(),
        ];

        assert_eq!(shapes[0], Type::Bytes);
        assert_eq!(shapes[1], Type::Bytes);
        assert_eq!(shapes[2], Type::Bytes);
        assert_eq!(shapes[4], Type::array(Type::Bytes));

        for ty in &shapes {
            let column = column_type(ty);
            assert_eq!(column, Type::Bytes, "{ty}");
            assert_eq!(SqlType::for_column_type(&column), SqlType::VARBINARY);
        }
    }
}
