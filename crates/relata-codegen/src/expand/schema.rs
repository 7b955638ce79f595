use super::Expand;
use crate::schema::{Field, OnEmpty};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_schema(&self) -> TokenStream {
        let relata = &self.relata;
        let name = &self.model.name;
        let fields = self.model.fields.iter().map(|field| self.expand_field(field));

        let table_name = match &self.model.table {
            Some(table_name) => quote! { Some(#table_name.to_string()) },
            None => quote! { None },
        };

        quote! {
            fn schema() -> #relata::schema::app::Model {
                use #relata::schema::app::*;

                Model {
                    name: #name.to_string(),
                    table_name: #table_name,
                    fields: vec![ #( #fields ),* ],
                }
            }
        }
    }

    fn expand_field(&self, field: &Field) -> TokenStream {
        let relata = &self.relata;
        let ty = &field.ty;
        let app_name = field.ident.to_string();
        let primary_key = field.attrs.id;
        let version = field.attrs.version;

        let column = field.attrs.column.as_ref();
        let storage_name = optional_string(column.and_then(|column| column.name.as_ref()));
        let key_column = optional_string(column.and_then(|column| column.key.as_ref()));
        let reverse_column = optional_string(column.and_then(|column| column.reverse.as_ref()));

        let embedded = match &field.attrs.embedded {
            Some(embedded) => {
                let prefix = match &embedded.prefix {
                    Some(prefix) => quote!(#prefix.to_string()),
                    None => quote!(String::new()),
                };

                let on_empty = match embedded.on_empty {
                    OnEmpty::UseNull => quote!(OnEmpty::UseNull),
                    OnEmpty::UseEmpty => quote!(OnEmpty::UseEmpty),
                };

                quote!(Some(EmbeddedAttr {
                    prefix: #prefix,
                    on_empty: #on_empty,
                }))
            }
            None => quote!(None),
        };

        quote! {
            Field {
                name: FieldName {
                    app_name: #app_name.to_string(),
                    storage_name: #storage_name,
                },
                ty: <#ty as #relata::Primitive>::ty(),
                nullable: <#ty as #relata::Primitive>::NULLABLE,
                primary_key: #primary_key,
                version: #version,
                embedded: #embedded,
                key_column: #key_column,
                reverse_column: #reverse_column,
            }
        }
    }
}

fn optional_string(lit: Option<&syn::LitStr>) -> TokenStream {
    match lit {
        Some(lit) => quote!(Some(#lit.to_string())),
        None => quote!(None),
    }
}
