use super::{Column, EmbeddedAttr, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// True if the field is annotated with `#[id]`
    pub(crate) id: bool,

    /// True if the field is annotated with `#[version]`
    pub(crate) version: bool,

    /// Storage overrides from `#[column(...)]`
    pub(crate) column: Option<Column>,

    /// Set if the field is annotated with `#[embedded]`
    pub(crate) embedded: Option<EmbeddedAttr>,
}

impl Field {
    /// Returns `None` for `#[transient]` fields, which are not mapped.
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Option<Self>> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "entity fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();
        let mut transient = None;

        for attr in &field.attrs {
            if attr.path().is_ident("id") {
                if attrs.id {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[id] attribute"));
                }
                attrs.id = true;
            } else if attr.path().is_ident("version") {
                if attrs.version {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[version] attribute",
                    ));
                }
                attrs.version = true;
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(column) => attrs.column = Some(column),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("embedded") {
                if attrs.embedded.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[embedded] attribute",
                    ));
                } else {
                    match EmbeddedAttr::from_ast(attr) {
                        Ok(embedded) => attrs.embedded = Some(embedded),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("transient") {
                transient = Some(attr);
            }
        }

        if let Some(attr) = transient {
            if attrs.id || attrs.version || attrs.column.is_some() || attrs.embedded.is_some() {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "#[transient] fields cannot carry mapping attributes",
                ));
            }
        }

        if attrs.id && attrs.version {
            errs.push(syn::Error::new_spanned(
                ident,
                "a field cannot be both #[id] and #[version]",
            ));
        }

        if attrs.embedded.is_some() {
            if attrs.id || attrs.version {
                errs.push(syn::Error::new_spanned(
                    ident,
                    "#[embedded] fields cannot be #[id] or #[version]",
                ));
            }

            if attrs
                .column
                .as_ref()
                .is_some_and(|column| column.name.is_some())
            {
                errs.push(syn::Error::new_spanned(
                    ident,
                    "#[embedded] fields have no column of their own; use #[embedded(prefix = \"..\")] instead",
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        if transient.is_some() {
            return Ok(None);
        }

        Ok(Some(Field {
            ident: ident.clone(),
            attrs,
            ty: field.ty.clone(),
        }))
    }
}
