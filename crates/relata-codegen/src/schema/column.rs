#[derive(Debug, Default)]
pub(crate) struct Column {
    /// Explicit column name
    pub(crate) name: Option<syn::LitStr>,

    /// Explicit key column for qualified relations
    pub(crate) key: Option<syn::LitStr>,

    /// Explicit reverse column for relations
    pub(crate) reverse: Option<syn::LitStr>,
}

mod kw {
    syn::custom_keyword!(key);
    syn::custom_keyword!(reverse);
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Self::default();

        // Allowed syntax, in any order:
        //
        // #[column("name")]
        // #[column(key = "key_column")]
        // #[column(reverse = "reverse_column")]
        // #[column("name", key = "key_column", reverse = "reverse_column")]
        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) {
                if result.name.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column name"));
                }
                result.name = Some(input.parse()?);
            } else if lookahead.peek(kw::key) {
                if result.key.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate key column"));
                }
                let _kw: kw::key = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                result.key = Some(input.parse()?);
            } else if lookahead.peek(kw::reverse) {
                if result.reverse.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate reverse column"));
                }
                let _kw: kw::reverse = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                result.reverse = Some(input.parse()?);
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_links() {
        let column: Column =
            syn::parse_quote!("given_name", key = "position", reverse = "owner_id");

        assert_eq!(column.name.unwrap().value(), "given_name");
        assert_eq!(column.key.unwrap().value(), "position");
        assert_eq!(column.reverse.unwrap().value(), "owner_id");
    }

    #[test]
    fn duplicate_name() {
        let err = syn::parse_str::<Column>(r#""a", "b""#).unwrap_err();
        assert_eq!(err.to_string(), "duplicate column name");
    }

    #[test]
    fn unknown_argument() {
        assert!(syn::parse_str::<Column>("type = \"text\"").is_err());
    }
}
