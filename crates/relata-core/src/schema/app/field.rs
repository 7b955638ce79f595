use crate::stmt::Type;

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The field name
    pub name: FieldName,

    /// Application-level type, with `Option` stripped
    pub ty: Type,

    /// True if the field can be nullable (`None` in Rust).
    pub nullable: bool,

    /// True if the field identifies the entity
    pub primary_key: bool,

    /// True if the field holds the optimistic locking version
    pub version: bool,

    /// Set when the field's own properties are flattened into the owner's
    /// table
    pub embedded: Option<EmbeddedAttr>,

    /// Explicit key column for qualified relations
    pub key_column: Option<String>,

    /// Explicit column in the child table referencing the owner row
    pub reverse_column: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldName {
    pub app_name: String,
    pub storage_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedAttr {
    /// Prepended to every flattened column name. May be empty.
    pub prefix: String,

    pub on_empty: OnEmpty,
}

/// How an embedded value whose columns are all null is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OnEmpty {
    /// The embedded value is absent; its columns are nullable.
    #[default]
    UseNull,

    /// The embedded value is present with all of its fields empty.
    UseEmpty,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: FieldName {
                app_name: name.into(),
                storage_name: None,
            },
            ty,
            nullable: false,
            primary_key: false,
            version: false,
            embedded: None,
            key_column: None,
            reverse_column: None,
        }
    }

    pub fn id(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn version(mut self) -> Self {
        self.version = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.name.storage_name = Some(name.into());
        self
    }

    pub fn embedded(mut self, prefix: impl Into<String>) -> Self {
        self.embedded = Some(EmbeddedAttr {
            prefix: prefix.into(),
            on_empty: OnEmpty::default(),
        });
        self
    }

    pub fn embedded_with(mut self, prefix: impl Into<String>, on_empty: OnEmpty) -> Self {
        self.embedded = Some(EmbeddedAttr {
            prefix: prefix.into(),
            on_empty,
        });
        self
    }

    pub fn key_column(mut self, name: impl Into<String>) -> Self {
        self.key_column = Some(name.into());
        self
    }

    pub fn reverse_column(mut self, name: impl Into<String>) -> Self {
        self.reverse_column = Some(name.into());
        self
    }
}

impl FieldName {
    pub fn storage_name(&self) -> Option<&str> {
        self.storage_name.as_deref()
    }
}
