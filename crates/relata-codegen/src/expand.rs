mod entity;
mod schema;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The entity being expanded
    model: &'a Model,

    /// Path prefix for relata types
    relata: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let primitive_impl = self.expand_primitive_impl();
        let entity_impl = self.expand_entity_impl();

        wrap_in_const(quote! {
            #primitive_impl
            #entity_impl
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        relata: quote!(_relata::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use relata as _relata;
            #code
        };
    }
}
