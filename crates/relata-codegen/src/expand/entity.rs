use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_primitive_impl(&self) -> TokenStream {
        let relata = &self.relata;
        let model_ident = &self.model.ident;

        quote! {
            impl #relata::Primitive for #model_ident {
                fn ty() -> #relata::Type {
                    #relata::Type::Model(<Self as #relata::Entity>::NAME.to_string())
                }

                fn register(builder: &mut #relata::Builder) {
                    builder.register::<Self>();
                }
            }
        }
    }

    pub(super) fn expand_entity_impl(&self) -> TokenStream {
        let relata = &self.relata;
        let model_ident = &self.model.ident;
        let name = &self.model.name;
        let schema = self.expand_model_schema();
        let register_related = self.expand_register_related();

        quote! {
            impl #relata::Entity for #model_ident {
                const NAME: &'static str = #name;

                #schema

                #register_related
            }
        }
    }

    /// Registers every field's type. Scalar types register nothing; entity
    /// types and references register their targets.
    fn expand_register_related(&self) -> TokenStream {
        let relata = &self.relata;

        let registrations = self.model.fields.iter().map(|field| {
            let ty = &field.ty;
            quote!(<#ty as #relata::Primitive>::register(builder);)
        });

        quote! {
            fn register_related(builder: &mut #relata::Builder) {
                #( #registrations )*
            }
        }
    }
}
