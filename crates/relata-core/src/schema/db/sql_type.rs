use crate::stmt::Type;
use std::fmt;

/// Numeric tag identifying how a value binds to a statement parameter.
///
/// Codes follow the JDBC `java.sql.Types` numbering so that drivers and
/// tooling sharing that convention can interpret them directly. Every
/// column type maps to some tag; types without a dedicated tag map to
/// [`SqlType::UNKNOWN`].
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct SqlType(i32);

impl SqlType {
    pub const BIT: SqlType = SqlType(-7);
    pub const TINYINT: SqlType = SqlType(-6);
    pub const SMALLINT: SqlType = SqlType(5);
    pub const INTEGER: SqlType = SqlType(4);
    pub const BIGINT: SqlType = SqlType(-5);
    pub const REAL: SqlType = SqlType(7);
    pub const DOUBLE: SqlType = SqlType(8);
    pub const NUMERIC: SqlType = SqlType(2);
    pub const DECIMAL: SqlType = SqlType(3);
    pub const VARCHAR: SqlType = SqlType(12);
    pub const VARBINARY: SqlType = SqlType(-3);
    pub const DATE: SqlType = SqlType(91);
    pub const TIME: SqlType = SqlType(92);
    pub const TIMESTAMP: SqlType = SqlType(93);
    pub const OTHER: SqlType = SqlType(1111);
    pub const ARRAY: SqlType = SqlType(2003);

    /// The column type has no dedicated tag; the driver decides.
    pub const UNKNOWN: SqlType = SqlType(i32::MIN);

    pub const fn from_code(code: i32) -> SqlType {
        SqlType(code)
    }

    pub const fn code(self) -> i32 {
        self.0
    }

    /// Tag for a column type, as returned by
    /// [`column_type`](super::column_type).
    pub fn for_column_type(ty: &Type) -> SqlType {
        match ty {
            Type::Bool => SqlType::BIT,
            Type::I8 => SqlType::TINYINT,
            Type::I16 | Type::U8 => SqlType::SMALLINT,
            Type::I32 | Type::U16 => SqlType::INTEGER,
            Type::I64 | Type::U32 => SqlType::BIGINT,
            // Does not fit in BIGINT
            Type::U64 => SqlType::NUMERIC,
            Type::F32 => SqlType::REAL,
            Type::F64 => SqlType::DOUBLE,
            Type::Decimal => SqlType::DECIMAL,
            Type::String | Type::Enum(_) | Type::ZonedDateTime => SqlType::VARCHAR,
            Type::Bytes => SqlType::VARBINARY,
            Type::Uuid => SqlType::OTHER,
            Type::Date => SqlType::DATE,
            Type::Time => SqlType::TIME,
            Type::DateTime => SqlType::TIMESTAMP,
            Type::Array(_) => SqlType::ARRAY,
            Type::List(_) | Type::Set(_) | Type::Map(..) | Type::Model(_) | Type::Ref(_) => {
                SqlType::UNKNOWN
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SqlType::BIT => "BIT",
            SqlType::TINYINT => "TINYINT",
            SqlType::SMALLINT => "SMALLINT",
            SqlType::INTEGER => "INTEGER",
            SqlType::BIGINT => "BIGINT",
            SqlType::REAL => "REAL",
            SqlType::DOUBLE => "DOUBLE",
            SqlType::NUMERIC => "NUMERIC",
            SqlType::DECIMAL => "DECIMAL",
            SqlType::VARCHAR => "VARCHAR",
            SqlType::VARBINARY => "VARBINARY",
            SqlType::DATE => "DATE",
            SqlType::TIME => "TIME",
            SqlType::TIMESTAMP => "TIMESTAMP",
            SqlType::OTHER => "OTHER",
            SqlType::ARRAY => "ARRAY",
            SqlType::UNKNOWN => "UNKNOWN",
            _ => "VENDOR",
        }
    }
}

impl fmt::Debug for SqlType {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "SqlType({}/{})", self.name(), self.0)
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.name())
    }
}
