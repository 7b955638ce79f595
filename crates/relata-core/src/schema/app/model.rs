use super::Field;

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Entity name, unique within a mapping context
    pub name: String,

    /// If the type maps to an explicitly named table, this is set.
    pub table_name: Option<String>,

    /// Properties in declaration order
    pub fields: Vec<Field>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: None,
            fields: vec![],
        }
    }

    pub fn table(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name.app_name == name)
    }
}
