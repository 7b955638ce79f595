use super::{ErrorSet, Field, ModelAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Entity name, the struct's identifier as written
    pub(crate) name: String,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Mapped fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Optional table to map the entity to
    pub(crate) table: Option<syn::LitStr>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "entity fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "entity generics are not supported",
            ));
        }

        let mut model_attr = ModelAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = model_attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for node in node.named.iter() {
            match Field::from_ast(node) {
                Ok(Some(field)) => fields.push(field),
                Ok(None) => {}
                Err(err) => errs.push(err),
            }
        }

        let mut ids = fields.iter().filter(|field| field.attrs.id);
        if let (Some(_), Some(second)) = (ids.next(), ids.next()) {
            errs.push(syn::Error::new_spanned(
                &second.ident,
                "entity has more than one #[id] field",
            ));
        }

        let mut versions = fields.iter().filter(|field| field.attrs.version);
        if let (Some(_), Some(second)) = (versions.next(), versions.next()) {
            errs.push(syn::Error::new_spanned(
                &second.ident,
                "entity has more than one #[version] field",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            name: ast.ident.to_string(),
            ident: ast.ident.clone(),
            fields,
            table: model_attr.table,
        })
    }
}
