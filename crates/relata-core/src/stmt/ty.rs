use std::fmt;

/// Application-level type of a mapped property.
///
/// This is the type the property has from the Rust side. The storage-side
/// view (the column type and its SQL type tag) is derived from it during
/// discovery, see [`schema::db`](crate::schema::db).
///
/// `Decimal`, the date and time variants, and `Enum` have no
/// [`Primitive`](super::Primitive) implementation and no [`Value`](super::Value)
/// counterpart. They only appear in hand-built [`app::Model`]s.
///
/// [`app::Model`]: crate::schema::app::Model
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,

    /// Arbitrary precision decimal number
    Decimal,

    String,

    /// Opaque byte string (`Vec<u8>`, `Box<[u8]>`, `[u8; N]`)
    Bytes,

    Uuid,

    /// Civil date without a time zone
    Date,

    /// Civil wall clock time without a time zone
    Time,

    /// Civil date and time without a time zone
    DateTime,

    /// An instant carrying its own time zone. Persisted as text.
    ZonedDateTime,

    /// A unit-variant enumeration, identified by name. Persisted as the
    /// variant name.
    Enum(String),

    /// Fixed or boxed slice of elements
    Array(Box<Type>),

    /// Growable, ordered sequence of elements (`Vec<T>`)
    List(Box<Type>),

    /// Unordered collection of unique elements
    Set(Box<Type>),

    /// Key / value association
    Map(Box<Type>, Box<Type>),

    /// A registered entity type, identified by its entity name
    Model(String),

    /// A reference to another aggregate root, identified by the target's
    /// entity name. Stored as the target's id.
    Ref(String),
}

impl Type {
    pub fn array(elem: impl Into<Type>) -> Type {
        Type::Array(Box::new(elem.into()))
    }

    pub fn list(elem: impl Into<Type>) -> Type {
        Type::List(Box::new(elem.into()))
    }

    pub fn set(elem: impl Into<Type>) -> Type {
        Type::Set(Box::new(elem.into()))
    }

    pub fn map(key: impl Into<Type>, value: impl Into<Type>) -> Type {
        Type::Map(Box::new(key.into()), Box::new(value.into()))
    }

    pub fn model(name: impl Into<String>) -> Type {
        Type::Model(name.into())
    }

    pub fn reference(name: impl Into<String>) -> Type {
        Type::Ref(name.into())
    }

    /// True for types stored in a single column without consulting the
    /// mapping context.
    pub fn is_simple(&self) -> bool {
        !matches!(
            self,
            Type::Array(_)
                | Type::List(_)
                | Type::Set(_)
                | Type::Map(..)
                | Type::Model(_)
                | Type::Ref(_)
        )
    }

    /// Arrays, lists and sets.
    pub fn is_collection_like(&self) -> bool {
        matches!(self, Type::Array(_) | Type::List(_) | Type::Set(_))
    }

    /// Collections whose elements are addressed by index.
    pub fn is_list_like(&self) -> bool {
        matches!(self, Type::Array(_) | Type::List(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Type::Array(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Type::Map(..))
    }

    pub fn is_model(&self) -> bool {
        matches!(self, Type::Model(_))
    }

    pub fn is_ref(&self) -> bool {
        matches!(self, Type::Ref(_))
    }

    /// The element type of a collection, or the key type of a map.
    pub fn component(&self) -> Option<&Type> {
        match self {
            Type::Array(elem) | Type::List(elem) | Type::Set(elem) => Some(elem),
            Type::Map(key, _) => Some(key),
            _ => None,
        }
    }

    /// The value type of a map.
    pub fn map_value(&self) -> Option<&Type> {
        match self {
            Type::Map(_, value) => Some(value),
            _ => None,
        }
    }

    /// The type of the things this type contains: the element for
    /// collections, the value for maps, the type itself otherwise.
    pub fn actual(&self) -> &Type {
        match self {
            Type::Array(elem) | Type::List(elem) | Type::Set(elem) => elem,
            Type::Map(_, value) => value,
            _ => self,
        }
    }

    /// Strips every level of collection nesting.
    pub fn innermost(&self) -> &Type {
        let mut ty = self;
        while ty.is_collection_like() {
            ty = ty.actual();
        }
        ty
    }

    /// Name of the entity a `Model` or `Ref` type points to.
    pub fn entity_name(&self) -> Option<&str> {
        match self {
            Type::Model(name) | Type::Ref(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bool => f.write_str("bool"),
            Type::I8 => f.write_str("i8"),
            Type::I16 => f.write_str("i16"),
            Type::I32 => f.write_str("i32"),
            Type::I64 => f.write_str("i64"),
            Type::U8 => f.write_str("u8"),
            Type::U16 => f.write_str("u16"),
            Type::U32 => f.write_str("u32"),
            Type::U64 => f.write_str("u64"),
            Type::F32 => f.write_str("f32"),
            Type::F64 => f.write_str("f64"),
            Type::Decimal => f.write_str("decimal"),
            Type::String => f.write_str("string"),
            Type::Bytes => f.write_str("bytes"),
            Type::Uuid => f.write_str("uuid"),
            Type::Date => f.write_str("date"),
            Type::Time => f.write_str("time"),
            Type::DateTime => f.write_str("datetime"),
            Type::ZonedDateTime => f.write_str("zoned datetime"),
            Type::Enum(name) => write!(f, "enum {name}"),
            Type::Array(elem) => write!(f, "[{elem}]"),
            Type::List(elem) => write!(f, "list<{elem}>"),
            Type::Set(elem) => write!(f, "set<{elem}>"),
            Type::Map(key, value) => write!(f, "map<{key}, {value}>"),
            Type::Model(name) => f.write_str(name),
            Type::Ref(name) => write!(f, "ref<{name}>"),
        }
    }
}
