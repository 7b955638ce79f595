use crate::stmt::Type;

/// Returns the type used to persist a simple (non-entity) property.
///
/// Collections persist as one-dimensional arrays of their innermost
/// element's column type: `[[i32; 2]; 2]`, `Vec<Vec<i32>>` and
/// `Vec<i32>` all persist as `[i32]`. Storage array types cannot nest.
/// Byte sequences are the exception: any list or array nesting that ends in
/// bytes persists as a single `bytes` value, so `Vec<Vec<u8>>`,
/// `[[u8; 4]; 2]` and `[u8; 16]` all persist like `Vec<u8>`.
///
/// Enumerations and zoned date-times persist as text.
pub fn column_type(ty: &Type) -> Type {
    if is_byte_sequence(ty) {
        return Type::Bytes;
    }

    if ty.is_collection_like() {
        return Type::array(scalar_column_type(ty.innermost()));
    }

    scalar_column_type(ty)
}

fn is_byte_sequence(mut ty: &Type) -> bool {
    while ty.is_list_like() {
        ty = ty.actual();

        if matches!(ty, Type::U8) {
            return true;
        }
    }

    matches!(ty, Type::Bytes)
}

fn scalar_column_type(ty: &Type) -> Type {
    match ty {
        Type::Enum(_) | Type::ZonedDateTime => Type::String,
        ty => ty.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_pass_through() {
        assert_eq!(column_type(&Type::I64), Type::I64);
        assert_eq!(column_type(&Type::Bytes), Type::Bytes);
        assert_eq!(column_type(&Type::Uuid), Type::Uuid);
    }

    #[test]
    fn enums_and_zoned_datetimes_become_text() {
        assert_eq!(column_type(&Type::Enum("Status".into())), Type::String);
        assert_eq!(column_type(&Type::ZonedDateTime), Type::String);
    }

    #[test]
    fn arrays_collapse_to_one_dimension() {
        let two = Type::array(Type::array(Type::String));
        let three = Type::array(Type::array(Type::array(Type::String)));

        assert_eq!(column_type(&two), Type::array(Type::String));
        assert_eq!(column_type(&three), Type::array(Type::String));
        assert_eq!(
            column_type(&Type::list(Type::set(Type::Enum("Color".into())))),
            Type::array(Type::String)
        );
    }

    #[test]
    fn byte_sequences_persist_as_bytes() {
        assert_eq!(column_type(&Type::array(Type::U8)), Type::Bytes);
        assert_eq!(column_type(&Type::list(Type::Bytes)), Type::Bytes);
        assert_eq!(column_type(&Type::array(Type::array(Type::U8))), Type::Bytes);

        // Sets of byte strings stay arrays
        assert_eq!(
            column_type(&Type::set(Type::Bytes)),
            Type::array(Type::Bytes)
        );
        assert_eq!(column_type(&Type::set(Type::U8)), Type::array(Type::U8));
    }
}
