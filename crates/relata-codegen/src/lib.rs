mod expand;
mod schema;

use proc_macro2::TokenStream;

pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let model = schema::Model::from_ast(&item)?;

    Ok(expand::model(&model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn expansion_is_a_valid_item() {
        let output = generate(quote! {
            struct Person {
                #[id]
                id: i64,
                #[embedded(prefix = "home_")]
                address: Option<Address>,
            }
        })
        .unwrap();

        let file: syn::File = syn::parse2(output).unwrap();
        assert_eq!(file.items.len(), 1);

        let source = quote!(#file).to_string();
        assert!(source.contains("\"Person\""));
        assert!(source.contains("\"home_\""));
    }

    #[test]
    fn enums_are_rejected() {
        assert!(generate(quote!(enum Status { Active })).is_err());
    }
}
